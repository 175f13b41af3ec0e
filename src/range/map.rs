use crate::range::{BidirectionalRange, FiniteRange, ForwardRange, RandomAccessRange};
use crate::Result;

/// Applies a function to every element of a range.
///
/// The function runs each time an element is read: calling `front` twice
/// calls it twice. Nothing is cached, so the function should not have side
/// effects a caller would notice.
#[derive(Debug, Clone)]
pub struct Map<F, R> {
    f: F,
    range: R,
}

pub fn map<B, F, R>(f: F, range: R) -> Map<F, R>
where
    R: ForwardRange,
    F: Fn(R::Item) -> B,
{
    Map { f, range }
}

impl<F, R> Map<F, R> {
    pub fn into_inner(self) -> R {
        self.range
    }
}

impl<B, F, R> ForwardRange for Map<F, R>
where
    R: ForwardRange,
    F: Fn(R::Item) -> B,
{
    type Item = B;

    fn is_empty(&self) -> bool {
        self.range.is_empty()
    }

    fn front(&self) -> B {
        (self.f)(self.range.front())
    }

    fn pop_front(&mut self) {
        self.range.pop_front();
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.range.size_hint()
    }
}

impl<B, F, R> BidirectionalRange for Map<F, R>
where
    R: BidirectionalRange,
    F: Fn(R::Item) -> B,
{
    fn back(&self) -> B {
        (self.f)(self.range.back())
    }

    fn pop_back(&mut self) {
        self.range.pop_back();
    }
}

impl<B, F, R> RandomAccessRange for Map<F, R>
where
    R: RandomAccessRange,
    F: Fn(R::Item) -> B,
{
    fn at(&self, index: usize) -> Result<B> {
        self.range.at(index).map(&self.f)
    }
}

impl<B, F, R> FiniteRange for Map<F, R>
where
    R: FiniteRange,
    F: Fn(R::Item) -> B,
{
    fn len(&self) -> usize {
        self.range.len()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::range::{range_to, RangeExt as _};

    #[test]
    fn halves() {
        let halves: Vec<_> = map(|x: i32| x / 2, range_to(10)).into_cursor().collect();
        assert_eq!(halves, vec![0, 0, 1, 1, 2, 2, 3, 3, 4, 4]);
    }

    #[test]
    fn every_read_calls_the_function() {
        let calls = Cell::new(0);
        let r = map(
            |x: i32| {
                calls.set(calls.get() + 1);
                x * 10
            },
            range_to(3),
        );
        assert_eq!(r.front(), 0);
        assert_eq!(r.front(), 0);
        assert_eq!(r.at(2), Ok(20));
        assert_eq!(calls.get(), 3);
    }

    #[test]
    fn keeps_the_input_tiers() {
        let mut r = map(|x: i32| x * x, range_to(4));
        assert_eq!(r.len(), 4);
        assert_eq!(r.back(), 9);
        r.pop_back();
        assert_eq!(r.into_cursor().collect::<Vec<_>>(), vec![0, 1, 4]);
    }
}
