//! Parse errors.

use lunula_diagnostic::{Diagnostic, ErrorCode};
use lunula_eval::FatalError;

/// Why a statement could not be parsed.
///
/// `Syntax` errors are recovered from at the next statement boundary;
/// `Fatal` errors end the session.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("{0}")]
    Syntax(Box<Diagnostic>),
    #[error(transparent)]
    Fatal(#[from] FatalError),
}

impl ParseError {
    #[cold]
    pub fn syntax(diagnostic: Diagnostic) -> Self {
        ParseError::Syntax(Box::new(diagnostic))
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            ParseError::Syntax(diagnostic) => diagnostic.code,
            ParseError::Fatal(fatal) => fatal.code(),
        }
    }
}

pub type ParseResult<T> = Result<T, ParseError>;

/// A `(` on a new line after an expression could be a call or the start of
/// a new statement.
pub(crate) fn ambiguous_call() -> Diagnostic {
    Diagnostic::error(ErrorCode::E1003)
        .with_message("ambiguous syntax (function call x new statement)")
}
