//! Procedural macros for `rangekit`.
//!
//! `impl_tuples!` expands, for every arity in its argument, the tuple trait
//! impls used by `rangekit`: compile-time indexed access, the type-erased
//! element view, heterogeneous map/fold/for-each, lockstep range traversal
//! for `zip`, and argument binding for expression lambdas.
//!
//! The generated code names `rangekit` items through `crate::` paths, so the
//! macro is only meant to be invoked from inside the `rangekit` crate.

mod arity;
mod constant;
mod expand;

use proc_macro2::TokenStream;

/// Generates the per-arity tuple impls.
///
/// The argument is a range of arities, e.g. `impl_tuples!(0..=12)` or
/// `impl_tuples!(..8)`, or a single literal meaning `0..=N`. Bounds may use
/// literal integer arithmetic.
#[proc_macro]
pub fn impl_tuples(args: proc_macro::TokenStream) -> proc_macro::TokenStream {
    match arity::parse_arities(TokenStream::from(args)) {
        Ok(arities) => expand::expand(&arities).into(),
        Err(err) => err.into_compile_error().into(),
    }
}
