//! Running a session.

use std::fs::File;
use std::io::{self, BufReader, IsTerminal, Write};
use std::path::Path;

use lunula_diagnostic::{Diagnostic, ErrorCode};
use lunula_eval::{InterpreterState, Limits};
use lunula_lexer::{LineSource, Scanner};

use crate::Source;

/// Run the script named by `source` against the process streams.
///
/// Syntax and runtime errors are reported on stderr as they happen and do
/// not fail the run. `Err` carries the final diagnostic of a fatal error.
#[tracing::instrument(level = "debug", skip_all, fields(source = %source))]
pub fn execute(source: &Source) -> Result<(), Diagnostic> {
    let limits = Limits::default();
    match source {
        Source::Stdin => {
            let interactive = io::stdin().is_terminal();
            let mut scanner = Scanner::new(io::stdin());
            if interactive {
                scanner = scanner.with_prompt(print_prompt);
            }
            let state = InterpreterState::new(limits).with_interactive(interactive);
            run_session(scanner, state)
        }
        Source::File(path) => {
            let file = File::open(path).map_err(|error| open_error(path, &error))?;
            run_session(
                Scanner::new(BufReader::new(file)),
                InterpreterState::new(limits),
            )
        }
    }
}

/// Run everything `scanner` yields; a fatal error becomes the returned
/// diagnostic, annotated like any other diagnostic of the session.
pub fn run_session<S: LineSource>(
    scanner: Scanner<S>,
    mut state: InterpreterState,
) -> Result<(), Diagnostic> {
    let result = lunula_parse::run(scanner, &mut state);
    tracing::debug!(
        errors = state.error_count(),
        warnings = state.warning_count(),
        "session finished"
    );
    result.map_err(|fatal| {
        let diagnostic = fatal.to_diagnostic();
        if state.is_interactive() {
            diagnostic
        } else {
            diagnostic.at_line(state.line())
        }
    })
}

fn print_prompt() {
    let mut stdout = io::stdout().lock();
    if let Err(error) = stdout.write_all(b"> ").and_then(|()| stdout.flush()) {
        tracing::warn!(%error, "failed to write prompt");
    }
}

#[cold]
fn open_error(path: &Path, error: &io::Error) -> Diagnostic {
    Diagnostic::error(ErrorCode::E9003)
        .with_message(format!("error opening source file: {}", path.display()))
        .with_note(error.to_string())
}
