use std::fmt;

pub type Result<T> = std::result::Result<T, Error>;

/// A failure signaled at runtime.
///
/// Misuse that can be caught by the type system (iterating something that
/// is not a range, indexing a tuple past its arity) does not compile and
/// never produces one of these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A fold that needs a seed was given an empty range.
    EmptyRange,
    /// Runtime indexing past the end of a tuple, range or array value.
    OutOfBounds { index: usize, len: usize },
    /// A numeric range was built with a step of zero.
    ZeroStep,
    /// A value was accessed as a type it does not hold.
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },
    /// A value was requested from an empty variant.
    EmptyVariant { expected: &'static str },
    /// A read-only property was written.
    ReadOnly,
    /// An expression referenced a placeholder with no matching argument.
    MissingArgument { index: usize, supplied: usize },
    /// A binary operator does not apply to its operand types.
    InvalidOperands {
        op: &'static str,
        lhs: &'static str,
        rhs: &'static str,
    },
    /// A unary operator does not apply to its operand type.
    InvalidOperand {
        op: &'static str,
        operand: &'static str,
    },
    /// The target of an assigning operator is not a placeholder or an
    /// element of one.
    NotAssignable { op: &'static str },
    /// Integer division or remainder by zero.
    DivisionByZero,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::EmptyRange => write!(f, "cannot reduce an empty range"),
            Error::OutOfBounds { index, len } => {
                write!(f, "index {index} out of bound for length {len}")
            }
            Error::ZeroStep => write!(f, "range step cannot be zero"),
            Error::TypeMismatch { expected, found } => {
                write!(f, "type mismatch: expected {expected}, found {found}")
            }
            Error::EmptyVariant { expected } => {
                write!(f, "empty variant accessed as {expected}")
            }
            Error::ReadOnly => write!(f, "trying to access a read-only property"),
            Error::MissingArgument { index, supplied } => write!(
                f,
                "placeholder _{} used but only {supplied} argument(s) supplied",
                index + 1
            ),
            Error::InvalidOperands { op, lhs, rhs } => {
                write!(f, "operator `{op}` cannot be applied to {lhs} and {rhs}")
            }
            Error::InvalidOperand { op, operand } => {
                write!(f, "operator `{op}` cannot be applied to {operand}")
            }
            Error::NotAssignable { op } => {
                write!(f, "left-hand side of `{op}` is not assignable")
            }
            Error::DivisionByZero => write!(f, "division by zero"),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholders_are_reported_one_based() {
        let err = Error::MissingArgument {
            index: 1,
            supplied: 1,
        };
        assert_eq!(
            err.to_string(),
            "placeholder _2 used but only 1 argument(s) supplied"
        );
    }

    #[test]
    fn out_of_bounds_message() {
        let err = Error::OutOfBounds { index: 3, len: 3 };
        assert_eq!(err.to_string(), "index 3 out of bound for length 3");
    }
}
