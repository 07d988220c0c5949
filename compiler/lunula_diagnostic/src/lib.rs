//! Diagnostics for the lunula interpreter.
//!
//! - Error codes for searchability
//! - Clear messages (what went wrong)
//! - Line annotation (where it went wrong), omitted in interactive sessions
//!
//! Diagnostics are plain values; an [`emitter::DiagnosticEmitter`] decides
//! where they go.

mod diagnostic;
pub mod emitter;
mod error_code;

pub use diagnostic::{
    expected_expression, not_implemented, unexpected_token, Diagnostic, Severity,
};
pub use error_code::ErrorCode;
