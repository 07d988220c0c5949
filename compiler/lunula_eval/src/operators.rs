//! Operator evaluation.
//!
//! [`evaluate`] is a pure function from an operator and its operands to a new
//! [`Value`]. `Invalid` operands are contagious and short-circuit before any
//! type check, so an error is reported once where it first occurs.
//!
//! Short-circuiting of `and`/`or` is the caller's job: by the time an
//! operator runs both operands already exist.

use std::cmp::Ordering;
use std::fmt;

use crate::{OperatorError, Value};

/// Binary and unary operators of the language.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Operator {
    Add,
    /// Binary subtraction, or negation when there is no second operand.
    Sub,
    Mul,
    Div,
    Mod,
    Pow,
    Concat,
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
    And,
    Or,
    Not,
    Len,
}

impl Operator {
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Mul => "*",
            Operator::Div => "/",
            Operator::Mod => "%",
            Operator::Pow => "^",
            Operator::Concat => "..",
            Operator::Eq => "==",
            Operator::NotEq => "~=",
            Operator::Lt => "<",
            Operator::LtEq => "<=",
            Operator::Gt => ">",
            Operator::GtEq => ">=",
            Operator::And => "and",
            Operator::Or => "or",
            Operator::Not => "not",
            Operator::Len => "#",
        }
    }

    /// Operators that take a single operand.
    pub fn is_unary(self) -> bool {
        matches!(self, Operator::Not | Operator::Len)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Apply `op` to `lhs` and, for binary operators, `rhs`.
///
/// Unary minus is `Operator::Sub` with `rhs == None`.
pub fn evaluate(op: Operator, lhs: &Value, rhs: Option<&Value>) -> Result<Value, OperatorError> {
    if lhs.is_invalid() || rhs.is_some_and(Value::is_invalid) {
        return Ok(Value::Invalid);
    }

    match op {
        Operator::Not => Ok(Value::Boolean(!lhs.is_truthy())),
        Operator::Len => match lhs {
            Value::String(s) => Ok(Value::Number(byte_len(s))),
            _ => Err(OperatorError::NonString),
        },
        Operator::Sub if rhs.is_none() => Ok(Value::Number(-lhs.coerce_number()?)),
        _ => {
            let rhs = rhs.ok_or(OperatorError::MissingOperand(op))?;
            evaluate_binary(op, lhs, rhs)
        }
    }
}

fn evaluate_binary(op: Operator, lhs: &Value, rhs: &Value) -> Result<Value, OperatorError> {
    match op {
        Operator::Add => arithmetic(lhs, rhs, |a, b| a + b),
        Operator::Sub => arithmetic(lhs, rhs, |a, b| a - b),
        Operator::Mul => arithmetic(lhs, rhs, |a, b| a * b),
        Operator::Div => arithmetic(lhs, rhs, |a, b| a / b),
        Operator::Mod => arithmetic(lhs, rhs, |a, b| a % b),
        Operator::Pow => arithmetic(lhs, rhs, f64::powf),
        Operator::Concat => {
            // right operand is checked first
            let right = rhs.coerce_string()?;
            let left = lhs.coerce_string()?;
            Ok(Value::String(format!("{left}{right}")))
        }
        Operator::Eq => Ok(Value::Boolean(raw_equal(lhs, rhs))),
        Operator::NotEq => Ok(Value::Boolean(!raw_equal(lhs, rhs))),
        Operator::Lt => ordering(lhs, rhs, Ordering::is_lt),
        Operator::LtEq => ordering(lhs, rhs, Ordering::is_le),
        Operator::Gt => ordering(lhs, rhs, Ordering::is_gt),
        Operator::GtEq => ordering(lhs, rhs, Ordering::is_ge),
        Operator::And => Ok(if lhs.is_truthy() { rhs.clone() } else { lhs.clone() }),
        Operator::Or => Ok(if lhs.is_truthy() { lhs.clone() } else { rhs.clone() }),
        Operator::Not | Operator::Len => Err(OperatorError::MissingOperand(op)),
    }
}

fn arithmetic(lhs: &Value, rhs: &Value, apply: fn(f64, f64) -> f64) -> Result<Value, OperatorError> {
    let a = lhs.coerce_number()?;
    let b = rhs.coerce_number()?;
    Ok(Value::Number(apply(a, b)))
}

#[expect(clippy::float_cmp, reason = "Lua equality is exact IEEE equality")]
fn raw_equal(lhs: &Value, rhs: &Value) -> bool {
    match (lhs, rhs) {
        (Value::Number(a), Value::Number(b)) => a == b,
        (Value::String(a), Value::String(b)) => a == b,
        (Value::Boolean(a), Value::Boolean(b)) => a == b,
        _ => lhs.kind() == rhs.kind(),
    }
}

fn ordering(lhs: &Value, rhs: &Value, accept: fn(Ordering) -> bool) -> Result<Value, OperatorError> {
    let order = match (lhs, rhs) {
        (Value::Number(a), Value::Number(b)) => a.partial_cmp(b),
        (Value::String(a), Value::String(b)) => Some(a.as_bytes().cmp(b.as_bytes())),
        _ if lhs.kind() != rhs.kind() => return Err(OperatorError::DifferentTypes),
        _ => return Err(OperatorError::NotComparable),
    };
    // NaN is unordered: every comparison is false
    Ok(Value::Boolean(order.is_some_and(accept)))
}

#[expect(
    clippy::cast_precision_loss,
    reason = "string lengths stay far below 2^53"
)]
fn byte_len(s: &str) -> f64 {
    s.len() as f64
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
