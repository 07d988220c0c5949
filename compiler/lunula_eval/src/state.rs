//! Interpreter state threaded through every semantic action.
//!
//! Owns the symbol table, the two assignment lists, the conditional stack
//! and the open `print` line, plus the injected collaborators: print sink,
//! `io.read()` source and diagnostic emitter. One value per session; a fresh
//! state gives a fresh, isolated interpreter.

use std::io::{self, IsTerminal};

use lunula_diagnostic::emitter::{ColorMode, DiagnosticEmitter, TerminalEmitter};
use lunula_diagnostic::{not_implemented, Diagnostic, ErrorCode, Severity};

use crate::{
    evaluate, stdin_input, stdout_handler, BoundedList, ConditionStack, FatalError, Limits,
    Operator, SharedInputHandler, SharedPrintHandler, SymbolError, SymbolTable, Value,
};

pub struct InterpreterState {
    limits: Limits,
    symbols: SymbolTable,
    targets: BoundedList<Option<String>>,
    values: BoundedList<Option<Value>>,
    conditions: ConditionStack,
    print_line: Option<Vec<String>>,
    printer: SharedPrintHandler,
    input: SharedInputHandler,
    emitter: Box<dyn DiagnosticEmitter>,
    interactive: bool,
    line: u32,
    abandoned: bool,
    error_count: usize,
    warning_count: usize,
}

impl InterpreterState {
    /// A state printing to stdout, reading `io.read()` from stdin and
    /// reporting diagnostics on stderr.
    pub fn new(limits: Limits) -> Self {
        let stderr_is_tty = io::stderr().is_terminal();
        InterpreterState {
            limits,
            symbols: SymbolTable::with_capacity(limits.symbol_capacity),
            targets: BoundedList::with_capacity(limits.list_capacity),
            values: BoundedList::with_capacity(limits.list_capacity),
            conditions: ConditionStack::new(limits.max_nesting),
            print_line: None,
            printer: stdout_handler(),
            input: stdin_input(),
            emitter: Box::new(TerminalEmitter::stderr(ColorMode::Auto, stderr_is_tty)),
            interactive: false,
            line: 1,
            abandoned: false,
            error_count: 0,
            warning_count: 0,
        }
    }

    #[must_use]
    pub fn with_print_handler(mut self, printer: SharedPrintHandler) -> Self {
        self.printer = printer;
        self
    }

    #[must_use]
    pub fn with_input_handler(mut self, input: SharedInputHandler) -> Self {
        self.input = input;
        self
    }

    #[must_use]
    pub fn with_emitter(mut self, emitter: impl DiagnosticEmitter + 'static) -> Self {
        self.emitter = Box::new(emitter);
        self
    }

    /// Interactive sessions report diagnostics without line numbers.
    #[must_use]
    pub fn with_interactive(mut self, interactive: bool) -> Self {
        self.interactive = interactive;
        self
    }

    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    pub fn is_interactive(&self) -> bool {
        self.interactive
    }

    /// Line of the token being processed; used to annotate diagnostics.
    pub fn set_line(&mut self, line: u32) {
        self.line = line;
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn error_count(&self) -> usize {
        self.error_count
    }

    pub fn warning_count(&self) -> usize {
        self.warning_count
    }

    // Diagnostics

    /// Emit a diagnostic, annotated with the current line unless the
    /// session is interactive or the diagnostic already carries one.
    pub fn report(&mut self, diagnostic: Diagnostic) {
        let diagnostic = if self.interactive {
            diagnostic.with_line(None)
        } else if diagnostic.line.is_none() {
            diagnostic.at_line(self.line)
        } else {
            diagnostic
        };
        match diagnostic.severity {
            Severity::Error => self.error_count += 1,
            Severity::Warning => self.warning_count += 1,
        }
        self.emitter.emit(&diagnostic);
    }

    /// Warn that `feature` is parsed but has no effect. Emitted for every
    /// occurrence, including occurrences inside disabled code.
    pub fn warn_unimplemented(&mut self, feature: &str) {
        tracing::debug!(feature, line = self.line, "unimplemented construct");
        self.report(not_implemented(feature));
    }

    pub fn flush_diagnostics(&mut self) {
        self.emitter.flush();
    }

    // Statements

    /// Start a new statement; clears the abandoned flag of the previous one.
    pub fn begin_statement(&mut self) {
        self.abandoned = false;
    }

    /// Drop the side effects of the current statement.
    pub fn abandon_statement(&mut self) {
        self.abandoned = true;
    }

    pub fn statement_abandoned(&self) -> bool {
        self.abandoned
    }

    /// Restore the abandoned flag of an enclosing statement after a nested
    /// block has run its own statements.
    pub fn resume_statement(&mut self, abandoned: bool) {
        self.abandoned = abandoned;
    }

    /// `true` when side effects of the current statement are committed.
    fn committing(&self) -> bool {
        !self.abandoned && self.conditions.enabled()
    }

    // Conditional execution

    pub fn enabled(&self) -> bool {
        self.conditions.enabled()
    }

    pub fn cond_push(&mut self, test: bool) -> Result<(), FatalError> {
        self.conditions.push(test)
    }

    pub fn cond_pop(&mut self) -> Result<bool, FatalError> {
        self.conditions.pop()
    }

    pub fn cond_test_elseif(&mut self) -> Result<bool, FatalError> {
        self.conditions.test_elseif()
    }

    pub fn cond_elseif(&mut self, test: bool) -> Result<bool, FatalError> {
        self.conditions.elseif(test)
    }

    pub fn cond_settle(&mut self) -> Result<(), FatalError> {
        self.conditions.settle()
    }

    pub fn cond_depth(&self) -> usize {
        self.conditions.depth()
    }

    /// Restore the conditional stack to `depth` after a syntax error.
    pub fn cond_unwind(&mut self, depth: usize) {
        self.conditions.truncate(depth);
    }

    // Values

    /// Apply an operator; failures are reported and yield `Invalid`.
    pub fn operate(&mut self, op: Operator, lhs: &Value, rhs: Option<&Value>) -> Value {
        match evaluate(op, lhs, rhs) {
            Ok(value) => value,
            Err(error) => {
                tracing::debug!(%op, %error, "operator failed");
                self.report(error.to_diagnostic());
                Value::Invalid
            }
        }
    }

    /// Read a variable. An undefined name is reported, abandons the
    /// statement, and yields `Invalid`.
    pub fn lookup(&mut self, name: &str) -> Value {
        match self.symbols.lookup(name) {
            Ok(value) => value.clone(),
            Err(error) => {
                self.report(error.to_diagnostic());
                self.abandon_statement();
                Value::Invalid
            }
        }
    }

    /// Build a string literal value, rejecting oversized literals.
    pub fn string_literal(&mut self, text: String) -> Value {
        if text.len() > self.limits.max_string_size {
            self.report(
                Diagnostic::error(ErrorCode::E0006)
                    .with_message("maximum string size exceeded")
                    .with_note(format!(
                        "literal is {} bytes, limit is {}",
                        text.len(),
                        self.limits.max_string_size
                    )),
            );
            return Value::Invalid;
        }
        Value::String(text)
    }

    /// Evaluate `io.read()`.
    pub fn read_input(&mut self) -> Result<Value, FatalError> {
        let line = self.input.read_line()?;
        tracing::trace!(len = line.len(), "io.read");
        Ok(Value::String(line))
    }

    // Assignment

    /// Commit a single assignment.
    pub fn assign(&mut self, name: &str, value: Value) -> Result<(), FatalError> {
        if !self.committing() {
            return Ok(());
        }
        self.symbols.assign(name, value)
    }

    /// Commit a multi-assignment `targets = values`.
    ///
    /// Every value was evaluated before this call, so `a, b = b, a` swaps.
    /// Both lists must have the same length; otherwise `list size mismatch
    /// in attribution` is reported and nothing is assigned.
    /// Nothing happens in disabled code or in an abandoned statement.
    pub fn assign_lists(
        &mut self,
        targets: Vec<Option<String>>,
        values: Vec<Option<Value>>,
    ) -> Result<(), FatalError> {
        if !self.committing() {
            return Ok(());
        }

        self.targets.reset();
        self.values.reset();
        for target in targets {
            self.targets.append(target)?;
        }
        for value in values {
            self.values.append(value)?;
        }

        match self
            .symbols
            .assign_many(self.targets.as_slice(), self.values.as_slice())
        {
            Ok(()) => Ok(()),
            Err(SymbolError::Fatal(fatal)) => Err(fatal),
            Err(error) => {
                self.report(error.to_diagnostic());
                Ok(())
            }
        }
    }

    // Printing

    /// Open the output line of a `print` statement.
    pub fn print_start(&mut self) {
        if self.enabled() {
            self.print_line = Some(Vec::new());
        }
    }

    pub fn print_item(&mut self, value: &Value) {
        if let Some(items) = &mut self.print_line {
            items.push(value.to_string());
        }
    }

    /// Close the output line; it reaches the print sink only if the
    /// statement was not abandoned.
    pub fn print_finish(&mut self) {
        if let Some(items) = self.print_line.take() {
            if self.committing() {
                self.printer.print_line(&items.join("\t"));
            }
        }
    }

    /// Drop an open output line without printing it.
    pub fn print_discard(&mut self) {
        self.print_line = None;
    }
}

impl Default for InterpreterState {
    fn default() -> Self {
        Self::new(Limits::default())
    }
}

impl std::fmt::Debug for InterpreterState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InterpreterState")
            .field("limits", &self.limits)
            .field("symbols", &self.symbols.len())
            .field("depth", &self.conditions.depth())
            .field("line", &self.line)
            .field("interactive", &self.interactive)
            .finish_non_exhaustive()
    }
}
