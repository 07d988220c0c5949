//! Buffer Emitter
//!
//! Keeps emitted diagnostics in memory. Clones share the same buffer, so a
//! test can hand one clone to the interpreter and inspect the other.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::Diagnostic;

use super::DiagnosticEmitter;

/// Emitter that captures diagnostics into a shared buffer.
#[derive(Clone, Default)]
pub struct BufferEmitter {
    buffer: Arc<Mutex<Vec<Diagnostic>>>,
}

impl BufferEmitter {
    /// Create an empty buffer emitter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every diagnostic emitted so far.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.buffer.lock().clone()
    }

    /// Remove and return every diagnostic emitted so far.
    pub fn take(&self) -> Vec<Diagnostic> {
        std::mem::take(&mut *self.buffer.lock())
    }

    /// Rendered diagnostics, one per line.
    pub fn rendered(&self) -> Vec<String> {
        self.buffer.lock().iter().map(ToString::to_string).collect()
    }

    pub fn error_count(&self) -> usize {
        self.buffer.lock().iter().filter(|d| d.is_error()).count()
    }

    pub fn warning_count(&self) -> usize {
        self.buffer.lock().iter().filter(|d| !d.is_error()).count()
    }
}

impl DiagnosticEmitter for BufferEmitter {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        self.buffer.lock().push(diagnostic.clone());
    }

    fn flush(&mut self) {}
}
