//! Lazy, pull-based ranges.
//!
//! A range is anything that can report whether it is empty, peek at its
//! front element and drop it. What else a range can do places it in one or
//! more capability tiers, each a trait:
//!
//! | tier | trait | adds |
//! |---|---|---|
//! | forward | [`ForwardRange`] | `is_empty`, `front`, `pop_front` |
//! | bidirectional | [`BidirectionalRange`] | `back`, `pop_back` |
//! | random access | [`RandomAccessRange`] | `at` |
//! | finite | [`FiniteRange`] | `len` |
//!
//! Combinators state the tiers they need as trait bounds and provide the
//! tiers their input allows, so asking for something a range cannot do is a
//! build error:
//!
//! ```compile_fail
//! use rangekit::range::{filter, range, reverse};
//!
//! // `Filter` is forward only, so it cannot be reversed.
//! let evens = filter(|x: &i32| x % 2 == 0, range(0, 10));
//! let _ = reverse(evens);
//! ```
//!
//! Only forward ranges can be iterated:
//!
//! ```compile_fail
//! use rangekit::range::RangeExt;
//!
//! struct NotARange;
//! let _ = NotARange.into_cursor();
//! ```

mod array;
mod capability;
mod constify;
mod cursor;
mod enumerate;
mod filter;
mod fold;
mod map;
mod number;
mod reverse;
mod zip;

pub use array::{arange, ArrayRange};
pub use capability::{Capabilities, Tier};
pub use constify::{constify, Constify, ReadOnly};
pub use cursor::{Cursor, IntoCursor};
pub use enumerate::{enumerate, Enumerate};
pub use filter::{filter, Filter};
pub use fold::{all, any, product, reduce, sum, Truthy};
pub use map::{map, Map};
pub use number::{range, range_step, range_to, Number, NumberRange};
pub use reverse::{reverse, Reverse};
pub use zip::{longzip, zip, FillRangeTuple, FiniteRangeTuple, LongZip, RangeTuple, Zip};

use crate::Result;

/// A range that can be consumed from the front.
pub trait ForwardRange {
    type Item;

    fn is_empty(&self) -> bool;

    /// The first element. Must not be called on an empty range.
    fn front(&self) -> Self::Item;

    /// Drops the first element. Must not be called on an empty range.
    fn pop_front(&mut self);

    /// Bounds on the number of remaining elements, with the meaning of
    /// [`Iterator::size_hint`]. A [`FiniteRange`] must report
    /// `(len, Some(len))`.
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.is_empty() {
            (0, Some(0))
        } else {
            (1, None)
        }
    }
}

/// A range that can also be consumed from the back.
pub trait BidirectionalRange: ForwardRange {
    /// The last element. Must not be called on an empty range.
    fn back(&self) -> Self::Item;

    /// Drops the last element. Must not be called on an empty range.
    fn pop_back(&mut self);
}

/// A range whose remaining elements can be read by position.
pub trait RandomAccessRange: ForwardRange {
    /// The element `index` positions after the front, or
    /// [`Error::OutOfBounds`](crate::Error::OutOfBounds).
    fn at(&self, index: usize) -> Result<Self::Item>;
}

/// A range that knows how many elements remain.
///
/// Implementors also override [`ForwardRange::size_hint`] so that cursors
/// over the range are exact-size iterators.
pub trait FiniteRange: ForwardRange {
    fn len(&self) -> usize;
}

/// Iteration over any forward range.
pub trait RangeExt: ForwardRange + Sized {
    /// Iterates the range in place; elements are consumed from `self`.
    fn cursor(&mut self) -> Cursor<'_, Self> {
        Cursor::new(self)
    }

    fn into_cursor(self) -> IntoCursor<Self> {
        IntoCursor::new(self)
    }
}

impl<R: ForwardRange> RangeExt for R {}

// `IntoIterator` cannot be implemented for every `ForwardRange` from here,
// so each range type opts in.
macro_rules! impl_into_iterator {
    ($({$($generics:tt)*} $ty:ty;)*) => {
        $(
            impl<$($generics)*> ::core::iter::IntoIterator for $ty
            where
                $ty: $crate::range::ForwardRange,
            {
                type Item = <$ty as $crate::range::ForwardRange>::Item;
                type IntoIter = $crate::range::IntoCursor<$ty>;

                fn into_iter(self) -> Self::IntoIter {
                    $crate::range::IntoCursor::new(self)
                }
            }
        )*
    };
}

impl_into_iterator! {
    {T} NumberRange<T>;
    {'a, T} ArrayRange<'a, T>;
    {F, R} Map<F, R>;
    {F, R} Filter<F, R>;
    {R} Reverse<R>;
    {R} Enumerate<R>;
    {R} Constify<R>;
    {T} Zip<T>;
    {T, F} LongZip<T, F>;
}
