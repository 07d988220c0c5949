//! Output sinks for `print` statements.
//!
//! A `print` call produces exactly one line. Where the line goes is decided
//! by the embedder:
//! - Stdout: the CLI
//! - Buffer: tests and embedders that want the text back
//! - Silent: output is discarded
//!
//! Enum dispatch keeps the handler set closed and avoids a vtable.

use std::io::{self, Write};
use std::sync::Arc;

use parking_lot::Mutex;

/// Writes lines to the process's standard output.
#[derive(Default)]
pub struct StdoutPrintHandler;

impl StdoutPrintHandler {
    /// Write one line and flush, so interactive sessions see output
    /// before the next prompt.
    pub fn print_line(&self, line: &str) {
        let mut stdout = io::stdout().lock();
        if let Err(error) = writeln!(stdout, "{line}").and_then(|()| stdout.flush()) {
            tracing::warn!(%error, "failed to write print output");
        }
    }
}

/// Collects printed lines into a string buffer.
#[derive(Default)]
pub struct BufferPrintHandler {
    buffer: Mutex<String>,
}

impl BufferPrintHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn print_line(&self, line: &str) {
        let mut buf = self.buffer.lock();
        buf.push_str(line);
        buf.push('\n');
    }

    pub fn output(&self) -> String {
        self.buffer.lock().clone()
    }

    /// Return the captured output and empty the buffer.
    pub fn take_output(&self) -> String {
        std::mem::take(&mut *self.buffer.lock())
    }
}

pub enum PrintHandlerImpl {
    Stdout(StdoutPrintHandler),
    Buffer(BufferPrintHandler),
    /// Discards all output.
    Silent,
}

impl PrintHandlerImpl {
    pub fn print_line(&self, line: &str) {
        match self {
            Self::Stdout(h) => h.print_line(line),
            Self::Buffer(h) => h.print_line(line),
            Self::Silent => {}
        }
    }

    /// Captured output; empty for handlers that do not capture.
    pub fn output(&self) -> String {
        match self {
            Self::Buffer(h) => h.output(),
            Self::Stdout(_) | Self::Silent => String::new(),
        }
    }

    pub fn take_output(&self) -> String {
        match self {
            Self::Buffer(h) => h.take_output(),
            Self::Stdout(_) | Self::Silent => String::new(),
        }
    }
}

pub type SharedPrintHandler = Arc<PrintHandlerImpl>;

pub fn stdout_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Stdout(StdoutPrintHandler))
}

pub fn buffer_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Buffer(BufferPrintHandler::new()))
}

pub fn silent_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Silent)
}
