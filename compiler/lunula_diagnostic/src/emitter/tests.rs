use super::*;
use crate::{not_implemented, Diagnostic, ErrorCode};
use pretty_assertions::assert_eq;

fn render(diagnostics: &[Diagnostic], mode: ColorMode) -> String {
    let mut emitter = TerminalEmitter::with_color_mode(Vec::new(), mode, false);
    emitter.emit_all(diagnostics);
    emitter.flush();
    String::from_utf8_lossy(&emitter.into_inner()).into_owned()
}

#[test]
fn terminal_renders_one_line_per_diagnostic() {
    let output = render(
        &[
            Diagnostic::error(ErrorCode::E2001)
                .with_message("undefined symbol: y")
                .at_line(4),
            not_implemented("table"),
        ],
        ColorMode::Never,
    );

    assert_eq!(
        output,
        "error[E2001]: undefined symbol: y (line 4)\n\
         warning[W0001]: not implemented: table -- code will be parsed but will have no effect\n"
    );
}

#[test]
fn terminal_renders_notes_below_header() {
    let output = render(
        &[Diagnostic::error(ErrorCode::E9003)
            .with_message("error in io.read()")
            .with_note("standard input is closed")],
        ColorMode::Never,
    );

    assert_eq!(
        output,
        "error[E9003]: error in io.read()\n  = note: standard input is closed\n"
    );
}

#[test]
fn terminal_colors_when_forced() {
    let output = render(
        &[Diagnostic::error(ErrorCode::E2003).with_message("x")],
        ColorMode::Always,
    );
    assert!(output.contains("\x1b[1;31m"));
    assert!(output.ends_with("x\n"));
}

#[test]
fn color_mode_auto_follows_tty() {
    assert!(ColorMode::Auto.should_use_colors(true));
    assert!(!ColorMode::Auto.should_use_colors(false));
    assert!(ColorMode::Always.should_use_colors(false));
    assert!(!ColorMode::Never.should_use_colors(true));
}

#[test]
fn buffer_emitter_clones_share_storage() {
    let observer = BufferEmitter::new();
    let mut emitter = observer.clone();

    emitter.emit(&not_implemented("for loop"));
    emitter.emit(&Diagnostic::error(ErrorCode::E2002).with_message("list size mismatch in attribution"));

    assert_eq!(observer.warning_count(), 1);
    assert_eq!(observer.error_count(), 1);
    assert_eq!(observer.diagnostics()[1].code, ErrorCode::E2002);
}

#[test]
fn buffer_emitter_take_drains() {
    let mut emitter = BufferEmitter::new();
    emitter.emit(&not_implemented("function"));

    assert_eq!(emitter.take().len(), 1);
    assert!(emitter.diagnostics().is_empty());
}
