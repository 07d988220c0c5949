use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_diagnostic_builder() {
    let diag = Diagnostic::error(ErrorCode::E2001)
        .with_message("undefined symbol: x")
        .at_line(3)
        .with_note("symbols are created on first assignment");

    assert_eq!(diag.code, ErrorCode::E2001);
    assert_eq!(diag.message, "undefined symbol: x");
    assert_eq!(diag.line, Some(3));
    assert!(diag.is_error());
    assert!(!diag.is_fatal());
    assert_eq!(diag.notes.len(), 1);
}

#[test]
fn test_display_with_line() {
    let diag = Diagnostic::error(ErrorCode::E2001)
        .with_message("undefined symbol: x")
        .at_line(7);

    assert_eq!(diag.to_string(), "error[E2001]: undefined symbol: x (line 7)");
}

#[test]
fn test_display_without_line() {
    let diag = Diagnostic::error(ErrorCode::E2002)
        .with_message("list size mismatch in attribution")
        .with_line(None);

    assert_eq!(
        diag.to_string(),
        "error[E2002]: list size mismatch in attribution"
    );
}

#[test]
fn test_not_implemented_warning() {
    let diag = not_implemented("while loop").at_line(2);

    assert_eq!(diag.severity, Severity::Warning);
    assert_eq!(diag.code, ErrorCode::W0001);
    assert_eq!(
        diag.to_string(),
        "warning[W0001]: not implemented: while loop -- code will be parsed but will have no effect (line 2)"
    );
}

#[test]
fn test_unexpected_token_with_expectation() {
    let diag = unexpected_token("`end`", Some("`then`"));

    assert_eq!(diag.code, ErrorCode::E1001);
    assert_eq!(diag.message, "syntax error, unexpected `end`, expecting `then`");
}

#[test]
fn test_unexpected_token_without_expectation() {
    let diag = unexpected_token("end of input", None);
    assert_eq!(diag.message, "syntax error, unexpected end of input");
}

#[test]
fn test_expected_expression() {
    let diag = expected_expression("`)`");

    assert_eq!(diag.code, ErrorCode::E1002);
    assert!(diag.message.contains("expecting expression"));
}

#[test]
fn test_fatal_code_marks_diagnostic_fatal() {
    let diag = Diagnostic::error(ErrorCode::E9001).with_message("too many symbols!");
    assert!(diag.is_fatal());
}
