//! Operators of the expression language and their action on values.

use std::cmp::Ordering;
use std::fmt;

use tracing::debug;

use crate::expr::Value;
use crate::{Error, Result};

/// Operators that combine two values into a new one, and that also exist
/// in compound-assignment form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArithOp {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    BitAnd,
    BitOr,
    BitXor,
    Shl,
    Shr,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompareOp {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Arith(ArithOp),
    Compare(CompareOp),
    /// Short-circuiting logical and.
    And,
    /// Short-circuiting logical or.
    Or,
    /// Element of an array or character of a string.
    Index,
    /// `=` when `None`, otherwise the compound form of the operator.
    Assign(Option<ArithOp>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    Neg,
    Not,
    Plus,
    PreInc,
    PreDec,
    PostInc,
    PostDec,
}

impl ArithOp {
    pub fn symbol(self) -> &'static str {
        match self {
            ArithOp::Add => "+",
            ArithOp::Sub => "-",
            ArithOp::Mul => "*",
            ArithOp::Div => "/",
            ArithOp::Rem => "%",
            ArithOp::BitAnd => "&",
            ArithOp::BitOr => "|",
            ArithOp::BitXor => "^",
            ArithOp::Shl => "<<",
            ArithOp::Shr => ">>",
        }
    }

    fn assign_symbol(self) -> &'static str {
        match self {
            ArithOp::Add => "+=",
            ArithOp::Sub => "-=",
            ArithOp::Mul => "*=",
            ArithOp::Div => "/=",
            ArithOp::Rem => "%=",
            ArithOp::BitAnd => "&=",
            ArithOp::BitOr => "|=",
            ArithOp::BitXor => "^=",
            ArithOp::Shl => "<<=",
            ArithOp::Shr => ">>=",
        }
    }

    pub fn apply(self, lhs: Value, rhs: Value) -> Result<Value> {
        use Value::*;

        match (lhs, rhs) {
            (Int(a), Int(b)) => int_arith(self, a, b),
            (Bool(a), Bool(b)) => match self {
                ArithOp::BitAnd => Ok(Bool(a & b)),
                ArithOp::BitOr => Ok(Bool(a | b)),
                ArithOp::BitXor => Ok(Bool(a ^ b)),
                _ => Err(invalid_operands(self.symbol(), &Bool(a), &Bool(b))),
            },
            (Str(mut a), Str(b)) if self == ArithOp::Add => {
                a.push_str(&b);
                Ok(Str(a))
            }
            (Array(mut a), Array(b)) if self == ArithOp::Add => {
                a.extend(b);
                Ok(Array(a))
            }
            (lhs, rhs) => match (lhs.as_float(), rhs.as_float()) {
                (Some(a), Some(b)) => float_arith(self, a, b)
                    .ok_or_else(|| invalid_operands(self.symbol(), &lhs, &rhs)),
                _ => Err(invalid_operands(self.symbol(), &lhs, &rhs)),
            },
        }
    }
}

fn int_arith(op: ArithOp, a: i64, b: i64) -> Result<Value> {
    let value = match op {
        ArithOp::Add => a.wrapping_add(b),
        ArithOp::Sub => a.wrapping_sub(b),
        ArithOp::Mul => a.wrapping_mul(b),
        ArithOp::Div | ArithOp::Rem if b == 0 => {
            debug!(op = op.symbol(), dividend = a, "integer division by zero");
            return Err(Error::DivisionByZero);
        }
        ArithOp::Div => a.wrapping_div(b),
        ArithOp::Rem => a.wrapping_rem(b),
        ArithOp::BitAnd => a & b,
        ArithOp::BitOr => a | b,
        ArithOp::BitXor => a ^ b,
        ArithOp::Shl | ArithOp::Shr => {
            let shifted = u32::try_from(b).ok().and_then(|shift| match op {
                ArithOp::Shl => a.checked_shl(shift),
                _ => a.checked_shr(shift),
            });
            match shifted {
                Some(value) => value,
                None => {
                    return Err(invalid_operands(
                        op.symbol(),
                        &Value::Int(a),
                        &Value::Int(b),
                    ))
                }
            }
        }
    };
    Ok(Value::Int(value))
}

fn float_arith(op: ArithOp, a: f64, b: f64) -> Option<Value> {
    let value = match op {
        ArithOp::Add => a + b,
        ArithOp::Sub => a - b,
        ArithOp::Mul => a * b,
        ArithOp::Div => a / b,
        ArithOp::Rem => a % b,
        _ => return None,
    };
    Some(Value::Float(value))
}

impl CompareOp {
    pub fn symbol(self) -> &'static str {
        match self {
            CompareOp::Eq => "==",
            CompareOp::Ne => "!=",
            CompareOp::Lt => "<",
            CompareOp::Le => "<=",
            CompareOp::Gt => ">",
            CompareOp::Ge => ">=",
        }
    }

    pub fn apply(self, lhs: &Value, rhs: &Value) -> Result<Value> {
        let ordering = compare(lhs, rhs);
        let result = match self {
            CompareOp::Eq => ordering == Some(Ordering::Equal),
            CompareOp::Ne => ordering != Some(Ordering::Equal),
            _ => {
                let ordering = match (lhs, rhs) {
                    (Value::Array(_), _) | (_, Value::Array(_)) => None,
                    _ => ordering,
                };
                let ordering =
                    ordering.ok_or_else(|| invalid_operands(self.symbol(), lhs, rhs))?;
                match self {
                    CompareOp::Lt => ordering == Ordering::Less,
                    CompareOp::Le => ordering != Ordering::Greater,
                    CompareOp::Gt => ordering == Ordering::Greater,
                    _ => ordering != Ordering::Less,
                }
            }
        };
        Ok(Value::Bool(result))
    }
}

/// Numbers compare by value across `Int` and `Float`; other kinds only
/// compare with their own kind.
fn compare(lhs: &Value, rhs: &Value) -> Option<Ordering> {
    match (lhs, rhs) {
        (Value::Int(a), Value::Int(b)) => Some(a.cmp(b)),
        (Value::Unit, Value::Unit) => Some(Ordering::Equal),
        (Value::Bool(a), Value::Bool(b)) => Some(a.cmp(b)),
        (Value::Str(a), Value::Str(b)) => Some(a.cmp(b)),
        (Value::Array(a), Value::Array(b)) => {
            if a.len() != b.len() {
                return Some(a.len().cmp(&b.len()));
            }
            for (x, y) in a.iter().zip(b) {
                match compare(x, y)? {
                    Ordering::Equal => continue,
                    unequal => return Some(unequal),
                }
            }
            Some(Ordering::Equal)
        }
        _ => lhs.as_float()?.partial_cmp(&rhs.as_float()?),
    }
}

impl BinaryOp {
    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Arith(op) => op.symbol(),
            BinaryOp::Compare(op) => op.symbol(),
            BinaryOp::And => "&&",
            BinaryOp::Or => "||",
            BinaryOp::Index => "[]",
            BinaryOp::Assign(None) => "=",
            BinaryOp::Assign(Some(op)) => op.assign_symbol(),
        }
    }
}

impl UnaryOp {
    pub fn symbol(self) -> &'static str {
        match self {
            UnaryOp::Neg => "-",
            UnaryOp::Not => "!",
            UnaryOp::Plus => "+",
            UnaryOp::PreInc | UnaryOp::PostInc => "++",
            UnaryOp::PreDec | UnaryOp::PostDec => "--",
        }
    }

    /// Whether the operator writes to its operand.
    pub fn is_mutating(self) -> bool {
        !matches!(self, UnaryOp::Neg | UnaryOp::Not | UnaryOp::Plus)
    }

    /// Applies a non-mutating operator.
    pub fn apply(self, operand: Value) -> Result<Value> {
        match (self, operand) {
            (UnaryOp::Neg, Value::Int(i)) => Ok(Value::Int(i.wrapping_neg())),
            (UnaryOp::Neg, Value::Float(x)) => Ok(Value::Float(-x)),
            (UnaryOp::Plus, value @ (Value::Int(_) | Value::Float(_))) => Ok(value),
            (UnaryOp::Not, value) => Ok(Value::Bool(!value.truthy())),
            (op, value) => {
                let operand = value.kind();
                debug!(op = op.symbol(), operand, "invalid unary operand");
                Err(Error::InvalidOperand {
                    op: op.symbol(),
                    operand,
                })
            }
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

pub(crate) fn invalid_operands(op: &'static str, lhs: &Value, rhs: &Value) -> Error {
    let (lhs, rhs) = (lhs.kind(), rhs.kind());
    debug!(op, lhs, rhs, "invalid operands");
    Error::InvalidOperands { op, lhs, rhs }
}
