use crate::range::{BidirectionalRange, FiniteRange, ForwardRange, RandomAccessRange};
use crate::Result;

/// Pairs every element with its position.
///
/// The front element carries `start` plus the number of elements popped
/// from the front so far. Every other element carries the index it would
/// have when it reached the front, so `back` of a finite range is paired
/// with `index + len - 1`. This numbering keeps the pairs of
/// `reverse(enumerate(r))` identical to those of `enumerate(r)`, only in
/// the opposite order.
#[derive(Debug, Clone)]
pub struct Enumerate<R> {
    range: R,
    index: usize,
}

pub fn enumerate<R: ForwardRange>(range: R, start: usize) -> Enumerate<R> {
    Enumerate {
        range,
        index: start,
    }
}

impl<R> Enumerate<R> {
    pub fn into_inner(self) -> R {
        self.range
    }
}

impl<R: ForwardRange> ForwardRange for Enumerate<R> {
    type Item = (usize, R::Item);

    fn is_empty(&self) -> bool {
        self.range.is_empty()
    }

    fn front(&self) -> (usize, R::Item) {
        (self.index, self.range.front())
    }

    fn pop_front(&mut self) {
        self.range.pop_front();
        self.index += 1;
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.range.size_hint()
    }
}

impl<R: BidirectionalRange + FiniteRange> BidirectionalRange for Enumerate<R> {
    fn back(&self) -> (usize, R::Item) {
        (self.index + self.range.len() - 1, self.range.back())
    }

    fn pop_back(&mut self) {
        self.range.pop_back();
    }
}

impl<R: RandomAccessRange> RandomAccessRange for Enumerate<R> {
    fn at(&self, index: usize) -> Result<(usize, R::Item)> {
        let item = self.range.at(index)?;
        Ok((self.index + index, item))
    }
}

impl<R: FiniteRange> FiniteRange for Enumerate<R> {
    fn len(&self) -> usize {
        self.range.len()
    }
}
