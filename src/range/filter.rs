use tracing::trace;

use crate::range::ForwardRange;

/// Keeps only the elements that satisfy a predicate.
///
/// The front of a `Filter` always satisfies the predicate, or the range is
/// empty: non-matching leading elements are dropped when the filter is
/// built and after every `pop_front`.
#[derive(Debug, Clone)]
pub struct Filter<F, R> {
    f: F,
    range: R,
}

pub fn filter<F, R>(f: F, range: R) -> Filter<F, R>
where
    R: ForwardRange,
    F: Fn(&R::Item) -> bool,
{
    let mut filter = Filter { f, range };
    filter.discard();
    filter
}

impl<F, R> Filter<F, R>
where
    R: ForwardRange,
    F: Fn(&R::Item) -> bool,
{
    fn discard(&mut self) {
        let mut discarded = 0usize;
        while !self.range.is_empty() && !(self.f)(&self.range.front()) {
            self.range.pop_front();
            discarded += 1;
        }
        if discarded > 0 {
            trace!(discarded, "filter skipped elements");
        }
    }
}

impl<F, R> ForwardRange for Filter<F, R>
where
    R: ForwardRange,
    F: Fn(&R::Item) -> bool,
{
    type Item = R::Item;

    fn is_empty(&self) -> bool {
        self.range.is_empty()
    }

    fn front(&self) -> R::Item {
        self.range.front()
    }

    fn pop_front(&mut self) {
        self.range.pop_front();
        self.discard();
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (_, upper) = self.range.size_hint();
        (usize::from(!self.range.is_empty()), upper)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::range::{range, RangeExt as _};

    #[test]
    fn keeps_matching_elements() {
        let kept: Vec<_> = filter(|v: &i32| *v > 5 && *v < 8, range(1, 10))
            .into_cursor()
            .collect();
        assert_eq!(kept, vec![6, 7]);
    }

    #[test]
    fn front_already_matches_after_construction() {
        let r = filter(|v: &i32| v % 4 == 3, range(0, 20));
        assert_eq!(r.front(), 3);
    }

    #[test]
    fn nothing_matches() {
        let r = filter(|_: &i32| false, range(0, 100));
        assert!(r.is_empty());
    }
}
