//! Error types of the runtime.
//!
//! - [`OperatorError`]: an operator rejected its operands; the expression
//!   degrades to `Invalid`.
//! - [`SymbolError`]: lookup or multi-assignment failed; the statement is
//!   abandoned. Carries [`FatalError`] through for capacity exhaustion.
//! - [`FatalError`]: the session cannot continue.

use lunula_diagnostic::{Diagnostic, ErrorCode};

use crate::Operator;

#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum OperatorError {
    #[error("attempt to do number operation with a non-number")]
    NonNumber,
    #[error("attempt to do number operation with a string that cannot be converted to number")]
    UnconvertibleString,
    #[error("attempt to do string operation with a non-string")]
    NonString,
    #[error("attempt to compare operands of different types")]
    DifferentTypes,
    #[error("attempt to compare operand that is not a number neither a string")]
    NotComparable,
    #[error("operator `{0}` needs two operands")]
    MissingOperand(Operator),
}

impl OperatorError {
    pub fn code(&self) -> ErrorCode {
        match self {
            OperatorError::NonNumber => ErrorCode::E2003,
            OperatorError::UnconvertibleString => ErrorCode::E2004,
            OperatorError::NonString => ErrorCode::E2005,
            OperatorError::DifferentTypes => ErrorCode::E2006,
            OperatorError::NotComparable => ErrorCode::E2007,
            // the grammar always supplies both operands of a binary operator
            OperatorError::MissingOperand(_) => ErrorCode::E9004,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::error(self.code()).with_message(self.to_string())
    }
}

#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum SymbolError {
    #[error("undefined symbol: {0}")]
    Undefined(String),
    #[error("list size mismatch in attribution")]
    SizeMismatch { names: usize, values: usize },
    #[error(transparent)]
    Fatal(#[from] FatalError),
}

impl SymbolError {
    pub fn code(&self) -> ErrorCode {
        match self {
            SymbolError::Undefined(_) => ErrorCode::E2001,
            SymbolError::SizeMismatch { .. } => ErrorCode::E2002,
            SymbolError::Fatal(fatal) => fatal.code(),
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let diagnostic = Diagnostic::error(self.code()).with_message(self.to_string());
        match self {
            SymbolError::SizeMismatch { names, values } => {
                diagnostic.with_note(format!("{names} target(s), {values} value(s)"))
            }
            _ => diagnostic,
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum FatalError {
    #[error("too many symbols!")]
    TooManySymbols { capacity: usize },
    #[error("too many elements on list")]
    ListFull { capacity: usize },
    #[error("stack overflow: too many nested control structures")]
    NestingTooDeep { max_depth: usize },
    #[error("stack underflow: unbalanced pushs() and pops() in control structure rules")]
    UnbalancedConditions,
    #[error("stack underflow: attempt to set inexisting condition in stack")]
    MissingCondition,
    #[error("error in io.read()")]
    InputRead { reason: String },
}

impl FatalError {
    pub fn code(&self) -> ErrorCode {
        match self {
            FatalError::TooManySymbols { .. }
            | FatalError::ListFull { .. }
            | FatalError::NestingTooDeep { .. } => ErrorCode::E9001,
            FatalError::UnbalancedConditions | FatalError::MissingCondition => ErrorCode::E9002,
            FatalError::InputRead { .. } => ErrorCode::E9003,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let diagnostic = Diagnostic::error(self.code()).with_message(self.to_string());
        match self {
            FatalError::TooManySymbols { capacity } | FatalError::ListFull { capacity } => {
                diagnostic.with_note(format!("capacity is {capacity}"))
            }
            FatalError::NestingTooDeep { max_depth } => {
                diagnostic.with_note(format!("maximum nesting depth is {max_depth}"))
            }
            FatalError::InputRead { reason } => diagnostic.with_note(reason.clone()),
            FatalError::UnbalancedConditions | FatalError::MissingCondition => diagnostic,
        }
    }
}
