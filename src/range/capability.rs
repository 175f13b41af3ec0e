use std::fmt;

/// One of the four range capability tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    Forward,
    Bidirectional,
    RandomAccess,
    Finite,
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Tier::Forward => "forward",
            Tier::Bidirectional => "bidirectional",
            Tier::RandomAccess => "random-access",
            Tier::Finite => "finite",
        })
    }
}

/// The capability tiers a type satisfies, as computed by
/// [`capabilities!`](crate::capabilities).
///
/// Every tier other than forward implies forward: a type that is not a
/// forward range reports no tiers at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Capabilities {
    pub forward: bool,
    pub bidirectional: bool,
    pub random_access: bool,
    pub finite: bool,
}

impl Capabilities {
    pub const NONE: Capabilities = Capabilities {
        forward: false,
        bidirectional: false,
        random_access: false,
        finite: false,
    };

    pub const ALL: Capabilities = Capabilities {
        forward: true,
        bidirectional: true,
        random_access: true,
        finite: true,
    };

    pub const fn has(&self, tier: Tier) -> bool {
        match tier {
            Tier::Forward => self.forward,
            Tier::Bidirectional => self.bidirectional,
            Tier::RandomAccess => self.random_access,
            Tier::Finite => self.finite,
        }
    }

    pub const fn is_range(&self) -> bool {
        self.forward
    }

    pub fn tiers(&self) -> Vec<Tier> {
        [
            Tier::Forward,
            Tier::Bidirectional,
            Tier::RandomAccess,
            Tier::Finite,
        ]
        .into_iter()
        .filter(|tier| self.has(*tier))
        .collect()
    }
}

impl fmt::Display for Capabilities {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tiers = self.tiers();
        if tiers.is_empty() {
            return f.write_str("not a range");
        }
        for (i, tier) in tiers.iter().enumerate() {
            if i > 0 {
                f.write_str(" + ")?;
            }
            write!(f, "{tier}")?;
        }
        Ok(())
    }
}

/// Whether a concrete type implements a trait, evaluated at compile time.
///
/// An inherent associated constant on `Probe<T>` is only visible when the
/// bound holds; otherwise name resolution falls back to the blanket trait
/// constant.
#[doc(hidden)]
#[macro_export]
macro_rules! implements {
    ($ty:ty: $bound:path) => {{
        #[allow(dead_code)]
        struct Probe<T: ?Sized>(::core::marker::PhantomData<T>);

        trait Fallback {
            const IMPLEMENTS: bool = false;
        }

        impl<T: ?Sized> Fallback for Probe<T> {}

        #[allow(dead_code)]
        impl<T: ?Sized + $bound> Probe<T> {
            const IMPLEMENTS: bool = true;
        }

        <Probe<$ty>>::IMPLEMENTS
    }};
}

/// Computes the [`Capabilities`] of a concrete type at compile time.
///
/// ```
/// use rangekit::capabilities;
/// use rangekit::range::{Capabilities, Filter, NumberRange};
///
/// const NUMBERS: Capabilities = capabilities!(NumberRange<i32>);
/// assert_eq!(NUMBERS, Capabilities::ALL);
///
/// type Evens = Filter<fn(&i32) -> bool, NumberRange<i32>>;
/// assert_eq!(capabilities!(Evens).to_string(), "forward");
/// assert!(!capabilities!(Vec<i32>).is_range());
/// ```
#[macro_export]
macro_rules! capabilities {
    ($ty:ty) => {{
        let forward = $crate::implements!($ty: $crate::range::ForwardRange);
        $crate::range::Capabilities {
            forward,
            bidirectional: forward
                && $crate::implements!($ty: $crate::range::BidirectionalRange),
            random_access: forward
                && $crate::implements!($ty: $crate::range::RandomAccessRange),
            finite: forward && $crate::implements!($ty: $crate::range::FiniteRange),
        }
    }};
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::range::{ArrayRange, Filter, Map, NumberRange, Reverse};

    type Halve = fn(i32) -> i32;
    type Odd = fn(&i32) -> bool;

    #[test]
    fn concrete_ranges() {
        assert_eq!(capabilities!(NumberRange<f64>), Capabilities::ALL);
        assert_eq!(capabilities!(ArrayRange<'static, u8>), Capabilities::ALL);
        assert_eq!(capabilities!(String), Capabilities::NONE);
    }

    #[test]
    fn combinators_keep_what_their_input_has() {
        assert_eq!(
            capabilities!(Map<Halve, NumberRange<i32>>),
            Capabilities::ALL
        );
        assert_eq!(
            capabilities!(Filter<Odd, NumberRange<i32>>).tiers(),
            vec![Tier::Forward]
        );
        let reversed = capabilities!(Reverse<Map<Halve, NumberRange<i32>>>);
        assert!(reversed.has(Tier::Bidirectional));
        assert!(reversed.has(Tier::RandomAccess));
    }

    #[test]
    fn usable_in_const_context() {
        const CAPS: Capabilities = capabilities!(NumberRange<i64>);
        assert!(CAPS.is_range());
        assert_eq!(
            CAPS.to_string(),
            "forward + bidirectional + random-access + finite"
        );
        assert_eq!(Capabilities::NONE.to_string(), "not a range");
    }
}
