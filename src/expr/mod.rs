//! Deferred expressions built from placeholders and operators.
//!
//! Arithmetic, bitwise and unary operators applied to a placeholder or an
//! [`Expr`] build a tree instead of computing anything. The tree becomes
//! callable by wrapping it in a [`Lambda`], which substitutes the `i`-th
//! call argument for every occurrence of the placeholder `_i`:
//!
//! ```
//! use rangekit::expr::{Lambda, Value, _1, _2};
//!
//! let add = Lambda::new(_1 + _2 * 10);
//! assert_eq!(add.call((3, 5))?, Value::Int(53));
//! # Ok::<(), rangekit::Error>(())
//! ```
//!
//! Operators Rust does not let a library overload (assignment, comparison,
//! subscript, increments) are builder methods of [`Operand`]. Arguments
//! passed by exclusive reference are written through:
//!
//! ```
//! use rangekit::expr::{Lambda, Operand, Value, _1};
//!
//! let mut v: i64 = 0;
//! let set = Lambda::new(_1.assign(2));
//! assert_eq!(set.call((&mut v,))?, Value::Int(2));
//! assert_eq!(v, 2);
//! # Ok::<(), rangekit::Error>(())
//! ```

mod binding;
mod eval;
mod ops;
mod value;

use std::fmt;
use std::rc::Rc;

pub use binding::{Binding, IntoBindings, Slot};
pub use eval::{evaluate, Lambda};
pub use ops::{ArithOp, BinaryOp, CompareOp, UnaryOp};
pub use value::Value;

/// A node of an expression tree.
#[derive(Debug)]
pub enum Node {
    Value(Value),
    /// Zero-based argument position.
    Placeholder(usize),
    Unary(UnaryOp, Expr),
    Binary(BinaryOp, Expr, Expr),
}

/// An immutable, cheaply cloned expression tree.
#[derive(Debug, Clone)]
pub struct Expr(Rc<Node>);

impl Expr {
    pub fn value(value: impl Into<Value>) -> Self {
        Expr::from(Node::Value(value.into()))
    }

    pub fn unary(op: UnaryOp, operand: impl Into<Expr>) -> Self {
        Expr::from(Node::Unary(op, operand.into()))
    }

    pub fn binary(op: BinaryOp, lhs: impl Into<Expr>, rhs: impl Into<Expr>) -> Self {
        Expr::from(Node::Binary(op, lhs.into(), rhs.into()))
    }

    pub fn node(&self) -> &Node {
        &self.0
    }
}

impl From<Node> for Expr {
    fn from(node: Node) -> Self {
        Expr(Rc::new(node))
    }
}

impl From<&Expr> for Expr {
    fn from(expr: &Expr) -> Self {
        expr.clone()
    }
}

macro_rules! impl_expr_from_value {
    ($($t:ty)*) => {
        $(
            impl From<$t> for Expr {
                fn from(value: $t) -> Self {
                    Expr::value(value)
                }
            }
        )*
    };
}

impl_expr_from_value! { () bool i32 i64 f64 String Value }

impl From<&str> for Expr {
    fn from(value: &str) -> Self {
        Expr::value(value)
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.node() {
            Node::Value(Value::Str(s)) => write!(f, "{s:?}"),
            Node::Value(value) => write!(f, "{value}"),
            Node::Placeholder(index) => write!(f, "_{}", index + 1),
            Node::Unary(op @ (UnaryOp::PostInc | UnaryOp::PostDec), operand) => {
                write!(f, "({operand}{op})")
            }
            Node::Unary(op, operand) => write!(f, "({op}{operand})"),
            Node::Binary(BinaryOp::Index, lhs, rhs) => write!(f, "{lhs}[{rhs}]"),
            Node::Binary(op, lhs, rhs) => write!(f, "({lhs} {op} {rhs})"),
        }
    }
}

/// An argument placeholder.
#[derive(Debug, Clone, Copy)]
pub struct Arg(usize);

impl Arg {
    /// The zero-based position of the argument this placeholder stands
    /// for.
    pub const fn position(self) -> usize {
        self.0
    }
}

/// The placeholder for the argument at zero-based `position`.
pub const fn arg(position: usize) -> Arg {
    Arg(position)
}

pub const _1: Arg = Arg(0);
pub const _2: Arg = Arg(1);
pub const _3: Arg = Arg(2);
pub const _4: Arg = Arg(3);
pub const _5: Arg = Arg(4);
pub const _6: Arg = Arg(5);
pub const _7: Arg = Arg(6);
pub const _8: Arg = Arg(7);
pub const _9: Arg = Arg(8);

impl From<Arg> for Expr {
    fn from(arg: Arg) -> Self {
        Expr::from(Node::Placeholder(arg.0))
    }
}

/// Builders for the operators that have no overloadable Rust syntax.
pub trait Operand: Into<Expr> + Sized {
    fn eq(self, rhs: impl Into<Expr>) -> Expr {
        Expr::binary(BinaryOp::Compare(CompareOp::Eq), self, rhs)
    }

    fn ne(self, rhs: impl Into<Expr>) -> Expr {
        Expr::binary(BinaryOp::Compare(CompareOp::Ne), self, rhs)
    }

    fn lt(self, rhs: impl Into<Expr>) -> Expr {
        Expr::binary(BinaryOp::Compare(CompareOp::Lt), self, rhs)
    }

    fn le(self, rhs: impl Into<Expr>) -> Expr {
        Expr::binary(BinaryOp::Compare(CompareOp::Le), self, rhs)
    }

    fn gt(self, rhs: impl Into<Expr>) -> Expr {
        Expr::binary(BinaryOp::Compare(CompareOp::Gt), self, rhs)
    }

    fn ge(self, rhs: impl Into<Expr>) -> Expr {
        Expr::binary(BinaryOp::Compare(CompareOp::Ge), self, rhs)
    }

    fn and(self, rhs: impl Into<Expr>) -> Expr {
        Expr::binary(BinaryOp::And, self, rhs)
    }

    fn or(self, rhs: impl Into<Expr>) -> Expr {
        Expr::binary(BinaryOp::Or, self, rhs)
    }

    /// `self = value`. The left side must be a placeholder or an indexed
    /// element of one.
    fn assign(self, value: impl Into<Expr>) -> Expr {
        Expr::binary(BinaryOp::Assign(None), self, value)
    }

    fn add_assign(self, rhs: impl Into<Expr>) -> Expr {
        Expr::binary(BinaryOp::Assign(Some(ArithOp::Add)), self, rhs)
    }

    fn sub_assign(self, rhs: impl Into<Expr>) -> Expr {
        Expr::binary(BinaryOp::Assign(Some(ArithOp::Sub)), self, rhs)
    }

    fn mul_assign(self, rhs: impl Into<Expr>) -> Expr {
        Expr::binary(BinaryOp::Assign(Some(ArithOp::Mul)), self, rhs)
    }

    fn div_assign(self, rhs: impl Into<Expr>) -> Expr {
        Expr::binary(BinaryOp::Assign(Some(ArithOp::Div)), self, rhs)
    }

    fn rem_assign(self, rhs: impl Into<Expr>) -> Expr {
        Expr::binary(BinaryOp::Assign(Some(ArithOp::Rem)), self, rhs)
    }

    fn bitand_assign(self, rhs: impl Into<Expr>) -> Expr {
        Expr::binary(BinaryOp::Assign(Some(ArithOp::BitAnd)), self, rhs)
    }

    fn bitor_assign(self, rhs: impl Into<Expr>) -> Expr {
        Expr::binary(BinaryOp::Assign(Some(ArithOp::BitOr)), self, rhs)
    }

    fn bitxor_assign(self, rhs: impl Into<Expr>) -> Expr {
        Expr::binary(BinaryOp::Assign(Some(ArithOp::BitXor)), self, rhs)
    }

    fn shl_assign(self, rhs: impl Into<Expr>) -> Expr {
        Expr::binary(BinaryOp::Assign(Some(ArithOp::Shl)), self, rhs)
    }

    fn shr_assign(self, rhs: impl Into<Expr>) -> Expr {
        Expr::binary(BinaryOp::Assign(Some(ArithOp::Shr)), self, rhs)
    }

    /// `self[index]`, readable and assignable.
    fn index(self, index: impl Into<Expr>) -> Expr {
        Expr::binary(BinaryOp::Index, self, index)
    }

    fn pre_inc(self) -> Expr {
        Expr::unary(UnaryOp::PreInc, self)
    }

    fn pre_dec(self) -> Expr {
        Expr::unary(UnaryOp::PreDec, self)
    }

    /// Increments the operand and yields its previous value.
    fn post_inc(self) -> Expr {
        Expr::unary(UnaryOp::PostInc, self)
    }

    /// Decrements the operand and yields its previous value.
    fn post_dec(self) -> Expr {
        Expr::unary(UnaryOp::PostDec, self)
    }

    /// Unary `+`: the operand, checked to be a number.
    fn plus(self) -> Expr {
        Expr::unary(UnaryOp::Plus, self)
    }
}

impl Operand for Expr {}
impl Operand for Arg {}

macro_rules! impl_binary_operators {
    ($($trait:ident $method:ident $op:ident,)*) => {
        $(
            impl<R: Into<Expr>> std::ops::$trait<R> for Expr {
                type Output = Expr;

                fn $method(self, rhs: R) -> Expr {
                    Expr::binary(BinaryOp::Arith(ArithOp::$op), self, rhs)
                }
            }

            impl<R: Into<Expr>> std::ops::$trait<R> for &Expr {
                type Output = Expr;

                fn $method(self, rhs: R) -> Expr {
                    Expr::binary(BinaryOp::Arith(ArithOp::$op), self, rhs)
                }
            }

            impl<R: Into<Expr>> std::ops::$trait<R> for Arg {
                type Output = Expr;

                fn $method(self, rhs: R) -> Expr {
                    Expr::binary(BinaryOp::Arith(ArithOp::$op), self, rhs)
                }
            }

            impl_binary_operators!(@literal $trait $method $op: i32 i64 f64);
        )*
    };
    (@literal $trait:ident $method:ident $op:ident: $($t:ty)*) => {
        $(
            impl std::ops::$trait<Expr> for $t {
                type Output = Expr;

                fn $method(self, rhs: Expr) -> Expr {
                    Expr::binary(BinaryOp::Arith(ArithOp::$op), self, rhs)
                }
            }

            impl std::ops::$trait<Arg> for $t {
                type Output = Expr;

                fn $method(self, rhs: Arg) -> Expr {
                    Expr::binary(BinaryOp::Arith(ArithOp::$op), self, rhs)
                }
            }
        )*
    };
}

impl_binary_operators! {
    Add add Add,
    Sub sub Sub,
    Mul mul Mul,
    Div div Div,
    Rem rem Rem,
    BitAnd bitand BitAnd,
    BitOr bitor BitOr,
    BitXor bitxor BitXor,
    Shl shl Shl,
    Shr shr Shr,
}

macro_rules! impl_unary_operators {
    ($($trait:ident $method:ident $op:ident,)*) => {
        $(
            impl std::ops::$trait for Expr {
                type Output = Expr;

                fn $method(self) -> Expr {
                    Expr::unary(UnaryOp::$op, self)
                }
            }

            impl std::ops::$trait for Arg {
                type Output = Expr;

                fn $method(self) -> Expr {
                    Expr::unary(UnaryOp::$op, self)
                }
            }
        )*
    };
}

impl_unary_operators! {
    Neg neg Neg,
    Not not Not,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operators_build_trees() {
        let e = (_1 + 2) * -_2;
        assert_eq!(e.to_string(), "((_1 + 2) * (-_2))");
        assert_eq!((1.5 - _3).to_string(), "(1.5 - _3)");
        assert_eq!(arg(0).position(), _1.position());
    }

    #[test]
    fn builders_cover_the_rest() {
        assert_eq!(_1.index(0).assign("x").to_string(), "(_1[0] = \"x\")");
        assert_eq!(_1.post_inc().to_string(), "(_1++)");
        assert_eq!(_2.shl_assign(_1).to_string(), "(_2 <<= _1)");
        assert_eq!(_1.lt(3).and(!_2).to_string(), "((_1 < 3) && (!_2))");
    }

    #[test]
    fn subtrees_are_shared() {
        let sum = _1 + _2;
        let twice = &sum + &sum;
        match twice.node() {
            Node::Binary(_, lhs, rhs) => assert!(Rc::ptr_eq(&lhs.0, &rhs.0)),
            other => panic!("unexpected node {other:?}"),
        }
    }
}
