use std::fmt;

/// Error codes for every diagnostic the interpreter reports.
///
/// Format: E#### where the first digit indicates the phase:
/// - E0xxx: Lexical errors
/// - E1xxx: Syntax errors
/// - E2xxx: Runtime errors (recoverable, the statement is degraded)
/// - E9xxx: Fatal errors (the session stops)
/// - W0xxx: Warnings
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Lexical Errors (E0xxx)
    /// Unterminated string literal
    E0001,
    /// Invalid character in source
    E0002,
    /// Malformed number literal
    E0003,
    /// Invalid escape sequence
    E0004,
    /// Unterminated long string or long comment
    E0005,
    /// String literal exceeds the maximum string size
    E0006,

    // Syntax Errors (E1xxx)
    /// Unexpected token
    E1001,
    /// Expected expression
    E1002,
    /// Ambiguous syntax (function call x new statement)
    E1003,

    // Runtime Errors (E2xxx)
    /// Undefined symbol
    E2001,
    /// List size mismatch in attribution
    E2002,
    /// Number operation with a non-number
    E2003,
    /// Number operation with a string that cannot be converted
    E2004,
    /// String operation with a non-string
    E2005,
    /// Comparison of operands of different types
    E2006,
    /// Comparison of an operand that is neither a number nor a string
    E2007,

    // Fatal Errors (E9xxx)
    /// Capacity exhausted (symbols, list elements or nesting)
    E9001,
    /// Conditional stack underflow
    E9002,
    /// Input could not be read
    E9003,
    /// Operator applied with the wrong number of operands
    E9004,

    // Warnings (W0xxx)
    /// Construct is parsed but not implemented
    W0001,
}

impl ErrorCode {
    /// Check if this is a lexical error (E0xxx range).
    pub fn is_lexer_error(&self) -> bool {
        self.as_str().starts_with("E0")
    }

    /// Check if this is a syntax error (E1xxx range).
    pub fn is_parser_error(&self) -> bool {
        self.as_str().starts_with("E1")
    }

    /// Check if this is a recoverable runtime error (E2xxx range).
    pub fn is_runtime_error(&self) -> bool {
        self.as_str().starts_with("E2")
    }

    /// Check if this error ends the session (E9xxx range).
    pub fn is_fatal(&self) -> bool {
        self.as_str().starts_with("E9")
    }

    /// Check if this is a warning code (Wxxxx range).
    pub fn is_warning(&self) -> bool {
        self.as_str().starts_with('W')
    }

    /// Get the code as a string (e.g., "E2001").
    pub fn as_str(&self) -> &'static str {
        match self {
            // Lexical
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E0003 => "E0003",
            ErrorCode::E0004 => "E0004",
            ErrorCode::E0005 => "E0005",
            ErrorCode::E0006 => "E0006",
            // Syntax
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            // Runtime
            ErrorCode::E2001 => "E2001",
            ErrorCode::E2002 => "E2002",
            ErrorCode::E2003 => "E2003",
            ErrorCode::E2004 => "E2004",
            ErrorCode::E2005 => "E2005",
            ErrorCode::E2006 => "E2006",
            ErrorCode::E2007 => "E2007",
            // Fatal
            ErrorCode::E9001 => "E9001",
            ErrorCode::E9002 => "E9002",
            ErrorCode::E9003 => "E9003",
            ErrorCode::E9004 => "E9004",
            // Warnings
            ErrorCode::W0001 => "W0001",
        }
    }

    /// One-line description of what the code means.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "unterminated string literal",
            ErrorCode::E0002 => "invalid character in source",
            ErrorCode::E0003 => "malformed number literal",
            ErrorCode::E0004 => "invalid escape sequence",
            ErrorCode::E0005 => "unterminated long string or comment",
            ErrorCode::E0006 => "string literal too long",
            ErrorCode::E1001 => "unexpected token",
            ErrorCode::E1002 => "expected expression",
            ErrorCode::E1003 => "ambiguous syntax",
            ErrorCode::E2001 => "undefined symbol",
            ErrorCode::E2002 => "list size mismatch in attribution",
            ErrorCode::E2003 => "number operation with a non-number",
            ErrorCode::E2004 => "string cannot be converted to number",
            ErrorCode::E2005 => "string operation with a non-string",
            ErrorCode::E2006 => "comparison of different types",
            ErrorCode::E2007 => "comparison of non-comparable operand",
            ErrorCode::E9001 => "capacity exhausted",
            ErrorCode::E9002 => "conditional stack underflow",
            ErrorCode::E9003 => "input error",
            ErrorCode::E9004 => "malformed operator application",
            ErrorCode::W0001 => "not implemented",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests;
