//! `lunula`: run a Lua subset script.

use std::io::IsTerminal;

use lunula_diagnostic::emitter::{ColorMode, DiagnosticEmitter, TerminalEmitter};

fn main() {
    lunulac::init_tracing();

    let Some(source) = lunulac::parse_args(std::env::args().skip(1)) else {
        eprint!("{}", lunulac::USAGE);
        std::process::exit(1);
    };

    if let Err(diagnostic) = lunulac::execute(&source) {
        let is_tty = std::io::stderr().is_terminal();
        let mut emitter = TerminalEmitter::stderr(ColorMode::Auto, is_tty);
        emitter.emit(&diagnostic);
        emitter.flush();
        std::process::exit(1);
    }
}
