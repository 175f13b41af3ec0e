//! Generic-programming building blocks: lazy ranges, heterogeneous tuples,
//! a type-erasing variant, deferred expressions and computed properties.
//!
//! # Ranges
//!
//! A [range](range) is a lazy sequence read through `front`/`pop_front`.
//! Combinators such as [`map`](range::map), [`filter`](range::filter) and
//! [`zip`](range::zip) wrap ranges without evaluating them, and keep every
//! capability their input has:
//!
//! ```
//! use rangekit::range::{filter, map, range, reduce, RangeExt};
//!
//! let squares = map(|x: i64| x * x, range(1, 6));
//! let even = filter(|x: &i64| x % 2 == 0, squares.clone());
//! assert_eq!(even.into_cursor().collect::<Vec<_>>(), vec![4, 16]);
//! assert_eq!(reduce(|a, b| a + b, squares)?, 55);
//! # Ok::<(), rangekit::Error>(())
//! ```
//!
//! # Tuples
//!
//! Native tuples of up to 12 elements get compile-time indexed access,
//! a runtime view through [`Variant`](variant::Variant), and element-wise
//! traversals. See [`tuple`].
//!
//! # Expressions
//!
//! Placeholders `_1` to `_9` combine with operators into trees that are
//! evaluated later against call arguments. See [`expr`].

mod error;
pub mod expr;
pub mod property;
pub mod range;
pub mod tuple;
pub mod variant;

pub use error::{Error, Result};

rangekit_macros::impl_tuples!(0..=12);
