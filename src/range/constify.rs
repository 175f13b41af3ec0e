use crate::range::{BidirectionalRange, FiniteRange, ForwardRange, RandomAccessRange};
use crate::Result;

/// Conversion of an element into a view that cannot be used to mutate it.
///
/// Exclusive references become shared ones; shared references, plain values
/// and tuples of either are already read-only.
pub trait ReadOnly {
    type View;

    fn read_only(self) -> Self::View;
}

impl<'a, T: ?Sized> ReadOnly for &'a T {
    type View = &'a T;

    fn read_only(self) -> &'a T {
        self
    }
}

impl<'a, T: ?Sized> ReadOnly for &'a mut T {
    type View = &'a T;

    fn read_only(self) -> &'a T {
        self
    }
}

macro_rules! impl_read_only_value {
    ($($t:ty)*) => {
        $(
            impl ReadOnly for $t {
                type View = $t;

                fn read_only(self) -> $t {
                    self
                }
            }
        )*
    };
}

impl_read_only_value! {
    bool char i8 i16 i32 i64 i128 isize u8 u16 u32 u64 u128 usize f32 f64 String
}

/// A range whose elements are handed out as read-only views.
#[derive(Debug, Clone)]
pub struct Constify<R> {
    range: R,
}

pub fn constify<R>(range: R) -> Constify<R>
where
    R: ForwardRange,
    R::Item: ReadOnly,
{
    Constify { range }
}

impl<R> Constify<R> {
    pub fn into_inner(self) -> R {
        self.range
    }
}

impl<R> ForwardRange for Constify<R>
where
    R: ForwardRange,
    R::Item: ReadOnly,
{
    type Item = <R::Item as ReadOnly>::View;

    fn is_empty(&self) -> bool {
        self.range.is_empty()
    }

    fn front(&self) -> Self::Item {
        self.range.front().read_only()
    }

    fn pop_front(&mut self) {
        self.range.pop_front();
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.range.size_hint()
    }
}

impl<R> BidirectionalRange for Constify<R>
where
    R: BidirectionalRange,
    R::Item: ReadOnly,
{
    fn back(&self) -> Self::Item {
        self.range.back().read_only()
    }

    fn pop_back(&mut self) {
        self.range.pop_back();
    }
}

impl<R> RandomAccessRange for Constify<R>
where
    R: RandomAccessRange,
    R::Item: ReadOnly,
{
    fn at(&self, index: usize) -> Result<Self::Item> {
        self.range.at(index).map(ReadOnly::read_only)
    }
}

impl<R> FiniteRange for Constify<R>
where
    R: FiniteRange,
    R::Item: ReadOnly,
{
    fn len(&self) -> usize {
        self.range.len()
    }
}
