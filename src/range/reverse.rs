use crate::range::{BidirectionalRange, FiniteRange, ForwardRange, RandomAccessRange};
use crate::{Error, Result};

/// A bidirectional range read back to front.
#[derive(Debug, Clone)]
pub struct Reverse<R> {
    range: R,
}

pub fn reverse<R: BidirectionalRange>(range: R) -> Reverse<R> {
    Reverse { range }
}

impl<R> Reverse<R> {
    pub fn into_inner(self) -> R {
        self.range
    }
}

impl<R: BidirectionalRange> ForwardRange for Reverse<R> {
    type Item = R::Item;

    fn is_empty(&self) -> bool {
        self.range.is_empty()
    }

    fn front(&self) -> R::Item {
        self.range.back()
    }

    fn pop_front(&mut self) {
        self.range.pop_back();
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.range.size_hint()
    }
}

impl<R: BidirectionalRange> BidirectionalRange for Reverse<R> {
    fn back(&self) -> R::Item {
        self.range.front()
    }

    fn pop_back(&mut self) {
        self.range.pop_front();
    }
}

impl<R> RandomAccessRange for Reverse<R>
where
    R: BidirectionalRange + RandomAccessRange + FiniteRange,
{
    fn at(&self, index: usize) -> Result<R::Item> {
        let len = self.range.len();
        if index >= len {
            return Err(Error::OutOfBounds { index, len });
        }
        self.range.at(len - 1 - index)
    }
}

impl<R: BidirectionalRange + FiniteRange> FiniteRange for Reverse<R> {
    fn len(&self) -> usize {
        self.range.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::range::{arange, range_to, RangeExt as _};

    #[test]
    fn back_to_front() {
        let a = [1, 2, 3, 4, 5];
        let reversed: Vec<_> = reverse(arange(&a)).into_cursor().copied().collect();
        assert_eq!(reversed, vec![5, 4, 3, 2, 1]);
    }

    #[test]
    fn twice_is_the_original_order() {
        let twice: Vec<_> = reverse(reverse(range_to(6))).into_cursor().collect();
        assert_eq!(twice, range_to(6).into_cursor().collect::<Vec<_>>());
    }

    #[test]
    fn indexing_from_the_back() {
        let r = reverse(range_to(4));
        assert_eq!(r.at(0), Ok(3));
        assert_eq!(r.at(3), Ok(0));
        assert_eq!(r.at(4), Err(Error::OutOfBounds { index: 4, len: 4 }));
    }
}
