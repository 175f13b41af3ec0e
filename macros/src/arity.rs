use std::ops::RangeInclusive;

use proc_macro2::TokenStream;
use syn::spanned::Spanned as _;
use syn::{Error, Expr, RangeLimits, Result};

use crate::constant::{evaluate_range, evaluate_usize};

macro_rules! abort {
    ($spanned:expr, $message:expr) => {
        return Err(Error::new($spanned.span(), $message))
    };
}

/// The tuple arities to generate impls for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Arities {
    pub min: usize,
    pub max: usize,
}

impl Arities {
    pub fn iter(&self) -> RangeInclusive<usize> {
        self.min..=self.max
    }
}

// impl_tuples!(1..=12), impl_tuples!(..8) or impl_tuples!(12)
pub fn parse_arities(args: TokenStream) -> Result<Arities> {
    let expr = syn::parse2::<Expr>(args)?;
    let Some(range) = evaluate_range(&expr) else {
        let Some(max) = evaluate_usize(&expr) else {
            abort!(expr, "expected a tuple arity or a range of arities");
        };
        return Ok(Arities { min: 0, max });
    };
    let min = match &range.start {
        Some(start) => match evaluate_usize(start) {
            Some(min) => min,
            None => abort!(start, "invalid start"),
        },
        None => 0,
    };
    let Some(end) = &range.end else {
        abort!(range, "range cannot be unbounded at end");
    };
    let max = match range.limits {
        RangeLimits::HalfOpen(_) => match evaluate_usize(end).and_then(|end| end.checked_sub(1)) {
            Some(max) => max,
            None => abort!(end, "invalid end"),
        },
        RangeLimits::Closed(_) => match evaluate_usize(end) {
            Some(max) => max,
            None => abort!(end, "invalid end"),
        },
    };
    if max < min {
        abort!(range, "nothing to expand");
    }
    Ok(Arities { min, max })
}

#[cfg(test)]
mod tests {
    use super::*;
    use quote::quote;

    #[test]
    fn closed_range() {
        let arities = parse_arities(quote!(1..=12)).unwrap();
        assert_eq!(arities, Arities { min: 1, max: 12 });
        assert_eq!(arities.iter().count(), 12);
    }

    #[test]
    fn half_open_range_without_start() {
        let arities = parse_arities(quote!(..4 + 4)).unwrap();
        assert_eq!(arities, Arities { min: 0, max: 7 });
    }

    #[test]
    fn single_literal_is_an_upper_bound() {
        let arities = parse_arities(quote!(3)).unwrap();
        assert_eq!(arities, Arities { min: 0, max: 3 });
    }

    #[test]
    fn rejects_empty_and_unbounded_ranges() {
        let err = parse_arities(quote!(5..5)).unwrap_err();
        assert_eq!(err.to_string(), "nothing to expand");
        let err = parse_arities(quote!(2..)).unwrap_err();
        assert_eq!(err.to_string(), "range cannot be unbounded at end");
        let err = parse_arities(quote!(0..0)).unwrap_err();
        assert_eq!(err.to_string(), "invalid end");
        let err = parse_arities(quote!(T::LEN)).unwrap_err();
        assert_eq!(err.to_string(), "expected a tuple arity or a range of arities");
    }
}
