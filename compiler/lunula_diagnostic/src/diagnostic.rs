use std::fmt;

use crate::ErrorCode;

/// Severity level for diagnostics.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// A single message for the user, tied to a source line when one is known.
///
/// The line is left empty for interactive sessions, where the prompt already
/// shows which line is being processed.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[must_use = "diagnostics should be emitted, not silently dropped"]
pub struct Diagnostic {
    /// Error code for searchability.
    pub code: ErrorCode,
    /// Severity level.
    pub severity: Severity,
    /// Main message.
    pub message: String,
    /// 1-based source line, if the diagnostic is annotated.
    pub line: Option<u32>,
    /// Additional notes providing context.
    pub notes: Vec<String>,
}

impl Diagnostic {
    fn new_with_severity(code: ErrorCode, severity: Severity) -> Self {
        Diagnostic {
            code,
            severity,
            message: String::new(),
            line: None,
            notes: Vec::new(),
        }
    }

    /// Create a new error diagnostic.
    pub fn error(code: ErrorCode) -> Self {
        Self::new_with_severity(code, Severity::Error)
    }

    /// Create a new warning diagnostic.
    pub fn warning(code: ErrorCode) -> Self {
        Self::new_with_severity(code, Severity::Warning)
    }

    /// Set the main message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Annotate with a source line.
    pub fn at_line(mut self, line: u32) -> Self {
        self.line = Some(line);
        self
    }

    /// Annotate with a source line, or clear the annotation.
    pub fn with_line(mut self, line: Option<u32>) -> Self {
        self.line = line;
        self
    }

    /// Add a note providing additional context.
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Check if this is an error (vs warning).
    pub fn is_error(&self) -> bool {
        matches!(self.severity, Severity::Error)
    }

    /// Check if this diagnostic ends the session.
    pub fn is_fatal(&self) -> bool {
        self.code.is_fatal()
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]: {}", self.severity, self.code, self.message)?;
        if let Some(line) = self.line {
            write!(f, " (line {line})")?;
        }
        for note in &self.notes {
            write!(f, "\n  = note: {note}")?;
        }
        Ok(())
    }
}

/// Create an "unexpected token" syntax error.
///
/// `found` and `expected` are rendered descriptions such as `` `end` `` or
/// `end of input`.
pub fn unexpected_token(found: &str, expected: Option<&str>) -> Diagnostic {
    let message = match expected {
        Some(expected) => format!("syntax error, unexpected {found}, expecting {expected}"),
        None => format!("syntax error, unexpected {found}"),
    };
    Diagnostic::error(ErrorCode::E1001).with_message(message)
}

/// Create an "expected expression" syntax error.
pub fn expected_expression(found: &str) -> Diagnostic {
    Diagnostic::error(ErrorCode::E1002)
        .with_message(format!("syntax error, unexpected {found}, expecting expression"))
}

/// Create the warning for a construct that is parsed but has no effect.
pub fn not_implemented(feature: &str) -> Diagnostic {
    Diagnostic::warning(ErrorCode::W0001).with_message(format!(
        "not implemented: {feature} -- code will be parsed but will have no effect"
    ))
}

#[cfg(test)]
mod tests;
