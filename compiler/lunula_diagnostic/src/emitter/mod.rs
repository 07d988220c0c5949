//! Diagnostic Emitters
//!
//! - Terminal: human-readable lines on a writer (stderr for the CLI)
//! - Buffer: collects diagnostics in memory for tests and embedders

mod buffer;
mod terminal;

pub use buffer::BufferEmitter;
pub use terminal::{ColorMode, TerminalEmitter};

use crate::Diagnostic;

/// Trait for emitting diagnostics.
pub trait DiagnosticEmitter {
    /// Emit a single diagnostic.
    fn emit(&mut self, diagnostic: &Diagnostic);

    /// Emit multiple diagnostics.
    fn emit_all(&mut self, diagnostics: &[Diagnostic]) {
        for diag in diagnostics {
            self.emit(diag);
        }
    }

    /// Flush any buffered output.
    fn flush(&mut self);
}

#[cfg(test)]
mod tests;
