use crate::range::{FiniteRange, ForwardRange};

/// A tuple of forward ranges that can be traversed in lockstep.
///
/// Implemented for tuples of 1 to 12 ranges.
pub trait RangeTuple {
    /// The tuple of every range's item type.
    type Fronts;

    fn any_empty(&self) -> bool;
    fn all_empty(&self) -> bool;
    fn fronts(&self) -> Self::Fronts;

    /// Pops every range.
    fn pop_fronts(&mut self);

    /// Pops every range that is not yet empty.
    fn pop_remaining_fronts(&mut self);

    /// Size bounds of a lockstep walk that stops at the shortest range.
    fn shortest_size_hint(&self) -> (usize, Option<usize>);

    /// Size bounds of a lockstep walk that runs until the longest range
    /// is exhausted.
    fn longest_size_hint(&self) -> (usize, Option<usize>);
}

/// A tuple of finite ranges.
pub trait FiniteRangeTuple: RangeTuple {
    fn min_len(&self) -> usize;
    fn max_len(&self) -> usize;
}

/// A tuple of ranges sharing one item type, so an exhausted range's slot
/// can be filled with a stand-in value.
pub trait FillRangeTuple<F>: RangeTuple {
    fn fronts_or(&self, fill: &F) -> Self::Fronts;
}

/// Reads several ranges side by side, stopping at the shortest.
#[derive(Debug, Clone)]
pub struct Zip<T> {
    ranges: T,
}

/// Zips a tuple of ranges.
///
/// ```
/// use rangekit::range::{arange, range, zip, RangeExt};
///
/// let names = ["LHR", "FCO", "ZRH"];
/// let pairs: Vec<_> = zip((arange(&names), range(1, 10))).into_cursor().collect();
/// assert_eq!(pairs, vec![(&"LHR", 1), (&"FCO", 2), (&"ZRH", 3)]);
/// ```
pub fn zip<T: RangeTuple>(ranges: T) -> Zip<T> {
    Zip { ranges }
}

impl<T> Zip<T> {
    pub fn into_inner(self) -> T {
        self.ranges
    }
}

impl<T: RangeTuple> ForwardRange for Zip<T> {
    type Item = T::Fronts;

    fn is_empty(&self) -> bool {
        self.ranges.any_empty()
    }

    fn front(&self) -> T::Fronts {
        self.ranges.fronts()
    }

    fn pop_front(&mut self) {
        self.ranges.pop_fronts();
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.ranges.shortest_size_hint()
    }
}

impl<T: FiniteRangeTuple> FiniteRange for Zip<T> {
    fn len(&self) -> usize {
        self.ranges.min_len()
    }
}

/// Reads several ranges side by side until the longest is exhausted,
/// substituting `fill` for ranges that ran out.
#[derive(Debug, Clone)]
pub struct LongZip<T, F> {
    ranges: T,
    fill: F,
}

pub fn longzip<T, F>(fill: F, ranges: T) -> LongZip<T, F>
where
    T: FillRangeTuple<F>,
{
    LongZip { ranges, fill }
}

impl<T, F> LongZip<T, F> {
    pub fn into_inner(self) -> T {
        self.ranges
    }
}

impl<T: FillRangeTuple<F>, F> ForwardRange for LongZip<T, F> {
    type Item = T::Fronts;

    fn is_empty(&self) -> bool {
        self.ranges.all_empty()
    }

    fn front(&self) -> T::Fronts {
        self.ranges.fronts_or(&self.fill)
    }

    fn pop_front(&mut self) {
        self.ranges.pop_remaining_fronts();
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.ranges.longest_size_hint()
    }
}

impl<T: FillRangeTuple<F> + FiniteRangeTuple, F> FiniteRange for LongZip<T, F> {
    fn len(&self) -> usize {
        self.ranges.max_len()
    }
}
