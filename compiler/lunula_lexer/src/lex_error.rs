//! Lexer error types.
//!
//! [`LexErrorKind`] is what the logos callbacks produce; the scanner wraps it
//! into a [`LexError`] that also records where it happened.

use lunula_diagnostic::{Diagnostic, ErrorCode};

/// Which multi-line construct was left open at the end of the buffer.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum OpenConstruct {
    /// `"..\` or `'..\` continued on the next line.
    String,
    /// `[[ ..` or `[==[ ..`
    LongString,
    /// `--[[ ..`
    LongComment,
}

/// What kind of lexer error occurred.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash, thiserror::Error)]
pub enum LexErrorKind {
    /// Input logos could not match at all. The scanner replaces this with
    /// [`LexErrorKind::UnexpectedCharacter`] once it knows the slice.
    #[default]
    #[error("unrecognized input")]
    Unrecognized,
    #[error("unexpected character '{0}'")]
    UnexpectedCharacter(char),
    #[error("unfinished string")]
    UnterminatedString,
    #[error("unfinished long string")]
    UnterminatedLongString,
    #[error("unfinished long comment")]
    UnterminatedLongComment,
    #[error("invalid escape sequence '\\{0}'")]
    InvalidEscape(char),
    #[error("decimal escape too large")]
    EscapeOutOfRange,
    #[error("malformed number")]
    MalformedNumber,
    /// The construct continues past the end of the buffered text; the
    /// scanner reads another line and lexes again.
    #[error("incomplete input")]
    Incomplete(OpenConstruct),
    #[error("error reading input: {0}")]
    Read(String),
}

impl LexErrorKind {
    /// Resolve an incomplete construct at end of input into its final error.
    pub fn at_end_of_input(self) -> Self {
        match self {
            LexErrorKind::Incomplete(OpenConstruct::String) => LexErrorKind::UnterminatedString,
            LexErrorKind::Incomplete(OpenConstruct::LongString) => {
                LexErrorKind::UnterminatedLongString
            }
            LexErrorKind::Incomplete(OpenConstruct::LongComment) => {
                LexErrorKind::UnterminatedLongComment
            }
            other => other,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            LexErrorKind::Unrecognized | LexErrorKind::UnexpectedCharacter(_) => ErrorCode::E0002,
            LexErrorKind::UnterminatedString => ErrorCode::E0001,
            LexErrorKind::UnterminatedLongString
            | LexErrorKind::UnterminatedLongComment
            | LexErrorKind::Incomplete(_) => ErrorCode::E0005,
            LexErrorKind::InvalidEscape(_) | LexErrorKind::EscapeOutOfRange => ErrorCode::E0004,
            LexErrorKind::MalformedNumber => ErrorCode::E0003,
            LexErrorKind::Read(_) => ErrorCode::E9003,
        }
    }
}

/// A lexer error with the line it was found on.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
#[error("{kind} near '{near}'")]
pub struct LexError {
    /// WHAT went wrong.
    pub kind: LexErrorKind,
    /// WHERE it went wrong (1-based line).
    pub line: u32,
    /// The offending source text, truncated.
    pub near: String,
}

impl LexError {
    const NEAR_LIMIT: usize = 24;

    pub fn new(kind: LexErrorKind, line: u32, slice: &str) -> Self {
        let near = match slice.char_indices().nth(Self::NEAR_LIMIT) {
            Some((cut, _)) => format!("{}...", &slice[..cut]),
            None => slice.trim_end().to_owned(),
        };
        LexError { kind, line, near }
    }

    /// Convert to a diagnostic. The line is attached by the caller.
    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::error(self.kind.code()).with_message(self.to_string())
    }
}
