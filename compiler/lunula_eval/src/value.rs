//! Runtime values.
//!
//! Only nil, booleans, numbers and strings carry semantics. Functions,
//! userdata, threads and tables are recognized kinds without behavior, and
//! `Invalid` marks the result of an erroring or unimplemented operation.

use std::borrow::Cow;
use std::fmt;

use crate::number::{format_number, str_to_number};
use crate::OperatorError;

/// Discriminant of a [`Value`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ValueKind {
    Invalid,
    None,
    Nil,
    Boolean,
    Number,
    String,
    Function,
    Userdata,
    Thread,
    Table,
}

impl ValueKind {
    pub fn name(self) -> &'static str {
        match self {
            ValueKind::Invalid => "invalid",
            ValueKind::None => "none",
            ValueKind::Nil => "nil",
            ValueKind::Boolean => "boolean",
            ValueKind::Number => "number",
            ValueKind::String => "string",
            ValueKind::Function => "function",
            ValueKind::Userdata => "userdata",
            ValueKind::Thread => "thread",
            ValueKind::Table => "table",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A runtime value. Values are never mutated in place; operators build new
/// ones.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// Contagious marker for failed or unimplemented evaluation.
    Invalid,
    None,
    Nil,
    Boolean(bool),
    Number(f64),
    String(String),
    Function,
    Userdata,
    Thread,
    Table,
}

impl Value {
    pub fn string(text: impl Into<String>) -> Self {
        Value::String(text.into())
    }

    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Invalid => ValueKind::Invalid,
            Value::None => ValueKind::None,
            Value::Nil => ValueKind::Nil,
            Value::Boolean(_) => ValueKind::Boolean,
            Value::Number(_) => ValueKind::Number,
            Value::String(_) => ValueKind::String,
            Value::Function => ValueKind::Function,
            Value::Userdata => ValueKind::Userdata,
            Value::Thread => ValueKind::Thread,
            Value::Table => ValueKind::Table,
        }
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self, Value::Invalid)
    }

    /// Lua truthiness: only `nil` and `false` are false. `Invalid` and
    /// `None` also count as false so failed conditions never enable code.
    pub fn is_truthy(&self) -> bool {
        !matches!(
            self,
            Value::Nil | Value::Boolean(false) | Value::Invalid | Value::None
        )
    }

    /// Numeric view for arithmetic: numbers as is, strings converted.
    pub(crate) fn coerce_number(&self) -> Result<f64, OperatorError> {
        match self {
            Value::Number(n) => Ok(*n),
            Value::String(s) => str_to_number(s).ok_or(OperatorError::UnconvertibleString),
            _ => Err(OperatorError::NonNumber),
        }
    }

    /// Textual view for concatenation: strings as is, numbers formatted.
    pub(crate) fn coerce_string(&self) -> Result<Cow<'_, str>, OperatorError> {
        match self {
            Value::String(s) => Ok(Cow::Borrowed(s)),
            Value::Number(n) => Ok(Cow::Owned(format_number(*n))),
            _ => Err(OperatorError::NonString),
        }
    }
}

/// Output rendering used by `print`.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Invalid => f.write_str("<unimplemented/not executed>"),
            Value::None => f.write_str("none"),
            Value::Nil => f.write_str("nil"),
            Value::Boolean(b) => write!(f, "{b}"),
            Value::Number(n) => f.write_str(&format_number(*n)),
            Value::String(s) => f.write_str(s),
            Value::Function | Value::Userdata | Value::Thread | Value::Table => {
                write!(f, "<unimplemented:{}>", self.kind())
            }
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_owned())
    }
}
