use tracing::{debug, trace};

use crate::expr::ops::invalid_operands;
use crate::expr::{ArithOp, Binding, BinaryOp, Expr, IntoBindings, Node, UnaryOp, Value};
use crate::{Error, Result};

/// A callable expression.
///
/// Construction counts how often each placeholder occurs in the tree. An
/// owned argument whose placeholder occurs once is moved into the
/// evaluation; one that occurs more often is copied at every occurrence, so
/// no occurrence reads a moved-from value.
#[derive(Debug, Clone)]
pub struct Lambda {
    expr: Expr,
    uses: Vec<usize>,
}

impl Lambda {
    pub fn new(expr: impl Into<Expr>) -> Self {
        let expr = expr.into();
        let mut uses = Vec::new();
        count_uses(&expr, &mut uses);
        debug!(%expr, ?uses, "placeholder usage");
        Lambda { expr, uses }
    }

    pub fn expr(&self) -> &Expr {
        &self.expr
    }

    /// The number of arguments a call needs: one past the highest
    /// placeholder position in the tree.
    pub fn arity(&self) -> usize {
        self.uses.len()
    }

    /// How many times the placeholder at `position` occurs.
    pub fn uses(&self, position: usize) -> usize {
        self.uses.get(position).copied().unwrap_or(0)
    }

    /// Whether an owned argument at `position` can be moved instead of
    /// copied.
    pub fn is_movable(&self, position: usize) -> bool {
        self.uses(position) == 1
    }

    pub fn call<'a>(&self, args: impl IntoBindings<'a>) -> Result<Value> {
        evaluate(self, args)
    }
}

fn count_uses(expr: &Expr, uses: &mut Vec<usize>) {
    match expr.node() {
        Node::Value(_) => {}
        Node::Placeholder(position) => {
            if uses.len() <= *position {
                uses.resize(position + 1, 0);
            }
            uses[*position] += 1;
        }
        Node::Unary(_, operand) => count_uses(operand, uses),
        Node::Binary(_, lhs, rhs) => {
            count_uses(lhs, uses);
            count_uses(rhs, uses);
        }
    }
}

/// Evaluates `lambda` against `args`.
///
/// Every placeholder the tree uses must have a matching argument; the
/// check happens before anything is evaluated, so a failed call leaves
/// borrowed arguments untouched.
pub fn evaluate<'a>(lambda: &Lambda, args: impl IntoBindings<'a>) -> Result<Value> {
    let args = args.into_bindings();
    let supplied = args.len();
    if let Some(index) = (supplied..lambda.arity()).find(|&i| lambda.uses(i) > 0) {
        debug!(index, supplied, "missing argument");
        return Err(Error::MissingArgument { index, supplied });
    }
    let mut frame = Frame { lambda, args };
    frame.eval(&lambda.expr)
}

/// Where an assigning operator writes.
#[derive(Debug)]
enum Place {
    Arg(usize),
    Element(Box<Place>, i64),
}

struct Frame<'l, 'a> {
    lambda: &'l Lambda,
    args: Vec<Binding<'a>>,
}

impl Frame<'_, '_> {
    fn eval(&mut self, expr: &Expr) -> Result<Value> {
        match expr.node() {
            Node::Value(value) => Ok(value.clone()),
            Node::Placeholder(position) => Ok(self.read(*position)),
            Node::Unary(op, operand) if op.is_mutating() => self.step(*op, operand),
            Node::Unary(op, operand) => {
                let operand = self.eval(operand)?;
                op.apply(operand)
            }
            Node::Binary(BinaryOp::Assign(op), target, value) => {
                self.assign(*op, target, value)
            }
            Node::Binary(BinaryOp::And, lhs, rhs) => {
                if !self.eval(lhs)?.truthy() {
                    return Ok(Value::Bool(false));
                }
                Ok(Value::Bool(self.eval(rhs)?.truthy()))
            }
            Node::Binary(BinaryOp::Or, lhs, rhs) => {
                if self.eval(lhs)?.truthy() {
                    return Ok(Value::Bool(true));
                }
                Ok(Value::Bool(self.eval(rhs)?.truthy()))
            }
            Node::Binary(BinaryOp::Index, container, index) => {
                let container = self.eval(container)?;
                let index = self.eval(index)?;
                element(container, &index)
            }
            Node::Binary(BinaryOp::Arith(op), lhs, rhs) => {
                let lhs = self.eval(lhs)?;
                let rhs = self.eval(rhs)?;
                op.apply(lhs, rhs)
            }
            Node::Binary(BinaryOp::Compare(op), lhs, rhs) => {
                let lhs = self.eval(lhs)?;
                let rhs = self.eval(rhs)?;
                op.apply(&lhs, &rhs)
            }
        }
    }

    fn read(&mut self, position: usize) -> Value {
        let movable = self.lambda.is_movable(position);
        let binding = &mut self.args[position];
        if movable {
            trace!(position, "moving argument");
            binding.consume()
        } else {
            binding.load()
        }
    }

    fn assign(&mut self, op: Option<ArithOp>, target: &Expr, value: &Expr) -> Result<Value> {
        let symbol = BinaryOp::Assign(op).symbol();
        let place = self.place(target, symbol)?;
        let value = self.eval(value)?;
        let value = match op {
            Some(op) => op.apply(self.load(&place)?, value)?,
            None => value,
        };
        self.store(&place, value)?;
        self.load(&place)
    }

    fn step(&mut self, op: UnaryOp, operand: &Expr) -> Result<Value> {
        let place = self.place(operand, op.symbol())?;
        let old = self.load(&place)?;
        let arith = match op {
            UnaryOp::PreInc | UnaryOp::PostInc => ArithOp::Add,
            _ => ArithOp::Sub,
        };
        let new = match old {
            Value::Int(_) | Value::Float(_) => arith.apply(old.clone(), Value::Int(1))?,
            _ => {
                return Err(Error::InvalidOperand {
                    op: op.symbol(),
                    operand: old.kind(),
                })
            }
        };
        self.store(&place, new)?;
        match op {
            UnaryOp::PostInc | UnaryOp::PostDec => Ok(old),
            _ => self.load(&place),
        }
    }

    fn place(&mut self, expr: &Expr, op: &'static str) -> Result<Place> {
        match expr.node() {
            Node::Placeholder(position) => Ok(Place::Arg(*position)),
            Node::Binary(BinaryOp::Index, container, index) => {
                let container = self.place(container, op)?;
                let index = match self.eval(index)? {
                    Value::Int(i) => i,
                    other => {
                        return Err(invalid_operands("[]", &self.load(&container)?, &other))
                    }
                };
                Ok(Place::Element(Box::new(container), index))
            }
            _ => {
                debug!(op, target = %expr, "assignment to a non-lvalue");
                Err(Error::NotAssignable { op })
            }
        }
    }

    fn load(&self, place: &Place) -> Result<Value> {
        match place {
            Place::Arg(position) => Ok(self.args[*position].load()),
            Place::Element(container, index) => {
                element(self.load(container)?, &Value::Int(*index))
            }
        }
    }

    fn store(&mut self, place: &Place, value: Value) -> Result<()> {
        match place {
            Place::Arg(position) => self.args[*position].store(value),
            Place::Element(container, index) => {
                let mut whole = self.load(container)?;
                match &mut whole {
                    Value::Array(items) => {
                        let len = items.len();
                        let slot = usize::try_from(*index)
                            .ok()
                            .and_then(|i| items.get_mut(i))
                            .ok_or_else(|| out_of_bounds(*index, len))?;
                        *slot = value;
                    }
                    other => return Err(invalid_operands("[]", other, &value)),
                }
                self.store(container, whole)
            }
        }
    }
}

/// `container[index]` for arrays and strings.
fn element(container: Value, index: &Value) -> Result<Value> {
    let position = match index {
        Value::Int(i) => *i,
        _ => return Err(invalid_operands("[]", &container, index)),
    };
    match container {
        Value::Array(mut items) => {
            let len = items.len();
            match usize::try_from(position) {
                Ok(i) if i < len => Ok(items.swap_remove(i)),
                _ => Err(out_of_bounds(position, len)),
            }
        }
        Value::Str(s) => {
            let len = s.chars().count();
            usize::try_from(position)
                .ok()
                .and_then(|i| s.chars().nth(i))
                .map(|c| Value::Str(c.to_string()))
                .ok_or_else(|| out_of_bounds(position, len))
        }
        other => Err(invalid_operands("[]", &other, index)),
    }
}

fn out_of_bounds(position: i64, len: usize) -> Error {
    debug!(position, len, "index out of bounds");
    Error::OutOfBounds {
        index: usize::try_from(position).unwrap_or(usize::MAX),
        len,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::expr::{Operand as _, _1, _2, _3};

    #[test]
    fn usage_counts() {
        let lambda = Lambda::new(_1 * _1 + _3);
        assert_eq!(lambda.arity(), 3);
        assert_eq!(lambda.uses(0), 2);
        assert_eq!(lambda.uses(1), 0);
        assert!(lambda.is_movable(2));
        assert!(!lambda.is_movable(0));
    }

    #[test]
    fn arguments_are_checked_before_evaluation() {
        let mut x: i64 = 1;
        let lambda = Lambda::new(_1.assign(5) + _2);
        assert_eq!(
            lambda.call((&mut x,)),
            Err(Error::MissingArgument {
                index: 1,
                supplied: 1
            })
        );
        assert_eq!(x, 1);
        assert_eq!(lambda.call((&mut x, 1)), Ok(Value::Int(6)));
        assert_eq!(x, 5);
    }

    #[test]
    fn logical_operators_short_circuit() {
        let lambda = Lambda::new(_1.or(_2.assign(true)));
        let mut flag = false;
        assert_eq!(lambda.call((true, &mut flag)), Ok(Value::Bool(true)));
        assert!(!flag);
        assert_eq!(lambda.call((false, &mut flag)), Ok(Value::Bool(true)));
        assert!(flag);
    }

    #[test]
    fn increments() {
        let mut n: i64 = 5;
        assert_eq!(Lambda::new(_1.post_inc()).call((&mut n,)), Ok(Value::Int(5)));
        assert_eq!(n, 6);
        assert_eq!(Lambda::new(_1.pre_dec()).call((&mut n,)), Ok(Value::Int(5)));
        assert_eq!(n, 5);
        assert_eq!(
            Lambda::new(_1.pre_inc()).call(("s",)),
            Err(Error::InvalidOperand {
                op: "++",
                operand: "string"
            })
        );
    }

    #[test]
    fn element_assignment_writes_back() {
        let mut v = Value::from(vec![1, 2, 3]);
        let lambda = Lambda::new(_1.index(1).add_assign(40));
        assert_eq!(lambda.call((&mut v,)), Ok(Value::Int(42)));
        assert_eq!(v, Value::from(vec![1, 42, 3]));
        assert_eq!(
            lambda.call((Value::from(vec![1]),)),
            Err(Error::OutOfBounds { index: 1, len: 1 })
        );
    }

    #[test]
    fn only_lvalues_are_assignable() {
        let lambda = Lambda::new((_1 + 1).assign(2));
        assert_eq!(
            lambda.call((1,)),
            Err(Error::NotAssignable { op: "=" })
        );
    }
}
