use std::ops::{Add, Mul};

use tracing::{debug, trace};

use crate::range::ForwardRange;
use crate::{Error, Result};

/// Folds a range from the left, seeded with its first element.
///
/// Fails with [`Error::EmptyRange`] when there is no first element.
pub fn reduce<F, R>(mut f: F, mut range: R) -> Result<R::Item>
where
    R: ForwardRange,
    F: FnMut(R::Item, R::Item) -> R::Item,
{
    if range.is_empty() {
        debug!("cannot reduce an empty range");
        return Err(Error::EmptyRange);
    }
    let mut acc = range.front();
    range.pop_front();
    let mut steps = 0usize;
    while !range.is_empty() {
        acc = f(acc, range.front());
        range.pop_front();
        steps += 1;
    }
    trace!(steps, "reduced range");
    Ok(acc)
}

pub fn sum<R>(range: R) -> Result<R::Item>
where
    R: ForwardRange,
    R::Item: Add<Output = R::Item>,
{
    reduce(|a, b| a + b, range)
}

pub fn product<R>(range: R) -> Result<R::Item>
where
    R: ForwardRange,
    R::Item: Mul<Output = R::Item>,
{
    reduce(|a, b| a * b, range)
}

/// A value with a truth value: `false`, zero and `0.0` are false.
pub trait Truthy {
    fn truthy(&self) -> bool;
}

impl Truthy for bool {
    fn truthy(&self) -> bool {
        *self
    }
}

macro_rules! impl_truthy {
    ($zero:literal: $($t:ty)*) => {
        $(
            impl Truthy for $t {
                fn truthy(&self) -> bool {
                    *self != $zero
                }
            }
        )*
    };
}

impl_truthy! { 0: i8 i16 i32 i64 i128 isize u8 u16 u32 u64 u128 usize }
impl_truthy! { 0.0: f32 f64 }

impl<T: Truthy + ?Sized> Truthy for &T {
    fn truthy(&self) -> bool {
        (**self).truthy()
    }
}

/// Whether any element is truthy; stops at the first one.
pub fn any<R>(mut range: R) -> bool
where
    R: ForwardRange,
    R::Item: Truthy,
{
    while !range.is_empty() {
        if range.front().truthy() {
            return true;
        }
        range.pop_front();
    }
    false
}

/// Whether every element is truthy; stops at the first falsy one.
pub fn all<R>(mut range: R) -> bool
where
    R: ForwardRange,
    R::Item: Truthy,
{
    while !range.is_empty() {
        if !range.front().truthy() {
            return false;
        }
        range.pop_front();
    }
    true
}
