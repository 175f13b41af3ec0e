//! Heterogeneous fixed-arity tuples.
//!
//! The traits here are implemented for Rust's native tuples of up to 12
//! elements. Positions known at compile time go through [`Get`], which
//! only exists for valid indices:
//!
//! ```
//! use rangekit::tuple::get;
//!
//! let t = (42, "answer", 4.2);
//! assert_eq!(*get::<1, _>(&t), "answer");
//! ```
//!
//! ```compile_fail
//! use rangekit::tuple::get;
//!
//! let t = (42, "answer", 4.2);
//! let _ = get::<3, _>(&t);
//! ```
//!
//! Positions known only at runtime go through [`DynTuple`], which hands
//! each element out as a [`Variant`] and reports out-of-range indices as
//! errors.

use std::fmt;

use crate::variant::Variant;
use crate::Result;

/// A tuple and its number of elements.
pub trait Tuple {
    const ARITY: usize;
}

/// Compile-time indexed access to element `I`.
pub trait Get<const I: usize> {
    type Output;

    fn get(&self) -> &Self::Output;
    fn get_mut(&mut self) -> &mut Self::Output;
    fn into_get(self) -> Self::Output;
}

pub fn get<const I: usize, T: Get<I>>(tuple: &T) -> &T::Output {
    tuple.get()
}

pub fn get_mut<const I: usize, T: Get<I>>(tuple: &mut T) -> &mut T::Output {
    tuple.get_mut()
}

/// Runtime indexed access to a tuple whose elements can be type-erased.
pub trait DynTuple: Tuple {
    /// A copy of element `index`, or
    /// [`Error::OutOfBounds`](crate::Error::OutOfBounds) when
    /// `index >= ARITY`.
    fn element(&self, index: usize) -> Result<Variant>;

    /// Every element, in order.
    fn elements(&self) -> Elements<'_, Self>
    where
        Self: Sized,
    {
        Elements {
            tuple: self,
            index: 0,
        }
    }
}

/// Iterator over the type-erased elements of a tuple.
#[derive(Debug)]
pub struct Elements<'a, T> {
    tuple: &'a T,
    index: usize,
}

impl<T: DynTuple> Iterator for Elements<'_, T> {
    type Item = Variant;

    fn next(&mut self) -> Option<Variant> {
        let element = self.tuple.element(self.index).ok()?;
        self.index += 1;
        Some(element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = T::ARITY.saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl<T: DynTuple> ExactSizeIterator for Elements<'_, T> {}

/// A function applicable to a value of type `T`, possibly producing a
/// different type for every `T`.
pub trait Mapper<T> {
    type Output;

    fn map(&mut self, value: T) -> Self::Output;
}

/// Element-wise map into a new tuple of the same arity.
pub trait TupleMap<M>: Tuple {
    type Output;

    fn map_elements(self, mapper: M) -> Self::Output;
}

/// One step of a fold over values of type `T`.
pub trait Folder<Acc, T> {
    fn fold(&mut self, acc: Acc, value: &T) -> Acc;
}

/// Folds the elements in declaration order.
pub trait TupleFold<F, Acc>: Tuple {
    fn fold_elements(&self, init: Acc, folder: F) -> Acc;
}

pub trait Visitor<T> {
    fn visit(&mut self, value: &T);
}

/// Visits the elements in declaration order.
pub trait TupleForEach<V>: Tuple {
    fn for_each_element(&self, visitor: &mut V);
}

/// Writes the elements separated by `", "`.
pub trait TupleDisplay: Tuple {
    fn fmt_elements(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

/// Renders a tuple as `tuple(e0, e1, ...)`.
#[derive(Debug, Clone, Copy)]
pub struct Display<'a, T>(&'a T);

pub fn display<T: TupleDisplay>(tuple: &T) -> Display<'_, T> {
    Display(tuple)
}

impl<T: TupleDisplay> fmt::Display for Display<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("tuple(")?;
        self.0.fmt_elements(f)?;
        f.write_str(")")
    }
}
