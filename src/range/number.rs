use std::fmt;

use tracing::debug;

use crate::range::{BidirectionalRange, FiniteRange, ForwardRange, RandomAccessRange};
use crate::{Error, Result};

/// A signed numeric type a [`NumberRange`] can count with.
///
/// Spans and offsets are computed without overflowing `Self`, so a range
/// may cover the whole domain of its type.
pub trait Number: Copy + PartialOrd + fmt::Debug {
    const ZERO: Self;
    const ONE: Self;

    /// Number of elements from `begin` towards `end` (exclusive) when
    /// striding by the magnitude of `step`. `step` is not zero.
    fn steps(begin: Self, end: Self, step: Self) -> usize;

    /// `origin` moved `index` strides of the magnitude of `step`, downwards
    /// when `descending`. The result lies between `origin` and the end the
    /// stride was counted towards.
    fn offset(origin: Self, step: Self, descending: bool, index: usize) -> Self;
}

macro_rules! impl_number_int {
    ($($t:ty)*) => {
        $(
            impl Number for $t {
                const ZERO: Self = 0;
                const ONE: Self = 1;

                fn steps(begin: Self, end: Self, step: Self) -> usize {
                    let (low, high) = if begin <= end { (begin, end) } else { (end, begin) };
                    let distance = (high as i128).wrapping_sub(low as i128) as u128;
                    let step = step.unsigned_abs() as u128;
                    let count = distance / step + u128::from(distance % step != 0);
                    usize::try_from(count).unwrap_or(usize::MAX)
                }

                fn offset(origin: Self, step: Self, descending: bool, index: usize) -> Self {
                    // Exact modulo 2^128, and the true result fits in `Self`.
                    let delta = (index as u128).wrapping_mul(step.unsigned_abs() as u128);
                    let origin = origin as i128 as u128;
                    let moved = if descending {
                        origin.wrapping_sub(delta)
                    } else {
                        origin.wrapping_add(delta)
                    };
                    moved as i128 as $t
                }
            }
        )*
    };
}

macro_rules! impl_number_float {
    ($($t:ty)*) => {
        $(
            impl Number for $t {
                const ZERO: Self = 0.0;
                const ONE: Self = 1.0;

                fn steps(begin: Self, end: Self, step: Self) -> usize {
                    ((end - begin).abs() / step.abs()).ceil() as usize
                }

                fn offset(origin: Self, step: Self, descending: bool, index: usize) -> Self {
                    let delta = index as $t * step.abs();
                    if descending {
                        origin - delta
                    } else {
                        origin + delta
                    }
                }
            }
        )*
    };
}

impl_number_int! { i8 i16 i32 i64 i128 isize }
impl_number_float! { f32 f64 }

/// An arithmetic progression from `begin` towards `end` (exclusive).
///
/// The step always points from `begin` to `end`, whatever sign it was given.
/// Elements are computed from their position rather than by repeated
/// addition, so popping from either end never accumulates rounding error
/// for float ranges.
#[derive(Clone, PartialEq)]
pub struct NumberRange<T> {
    origin: T,
    step: T,
    descending: bool,
    front: usize,
    back: usize,
}

impl<T: Number> NumberRange<T> {
    pub fn new(begin: T, end: T, step: T) -> Result<Self> {
        if step == T::ZERO {
            debug!(?begin, ?end, "rejected numeric range with a zero step");
            return Err(Error::ZeroStep);
        }
        Ok(Self::towards(begin, end, step))
    }

    fn towards(begin: T, end: T, step: T) -> Self {
        NumberRange {
            origin: begin,
            step,
            descending: end < begin,
            front: 0,
            back: T::steps(begin, end, step),
        }
    }

    /// The stride between elements, as given at construction. Elements
    /// move towards `end` by its magnitude.
    pub fn step(&self) -> T {
        self.step
    }

    /// Whether the elements count downwards.
    pub fn is_descending(&self) -> bool {
        self.descending
    }

    fn nth(&self, index: usize) -> T {
        T::offset(self.origin, self.step, self.descending, self.front + index)
    }
}

impl<T: Number> fmt::Debug for NumberRange<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NumberRange")
            .field("front", &self.nth(0))
            .field("step", &self.step)
            .field("descending", &self.descending)
            .field("len", &self.len())
            .finish()
    }
}

impl<T: Number> ForwardRange for NumberRange<T> {
    type Item = T;

    fn is_empty(&self) -> bool {
        self.front == self.back
    }

    fn front(&self) -> T {
        self.nth(0)
    }

    fn pop_front(&mut self) {
        self.front += 1;
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl<T: Number> BidirectionalRange for NumberRange<T> {
    fn back(&self) -> T {
        self.nth(self.len().saturating_sub(1))
    }

    fn pop_back(&mut self) {
        self.back -= 1;
    }
}

impl<T: Number> RandomAccessRange for NumberRange<T> {
    fn at(&self, index: usize) -> Result<T> {
        let len = self.len();
        if index >= len {
            return Err(Error::OutOfBounds { index, len });
        }
        Ok(self.nth(index))
    }
}

impl<T: Number> FiniteRange for NumberRange<T> {
    fn len(&self) -> usize {
        self.back - self.front
    }
}

/// `begin, begin + 1, ...` up to `end` (exclusive); counts down when
/// `end < begin`.
pub fn range<T: Number>(begin: T, end: T) -> NumberRange<T> {
    NumberRange::towards(begin, end, T::ONE)
}

/// `0, 1, ...` up to `end` (exclusive).
pub fn range_to<T: Number>(end: T) -> NumberRange<T> {
    range(T::ZERO, end)
}

/// A range with an explicit step; fails with [`Error::ZeroStep`] for a zero
/// step.
pub fn range_step<T: Number>(begin: T, end: T, step: T) -> Result<NumberRange<T>> {
    NumberRange::new(begin, end, step)
}
