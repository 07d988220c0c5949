//! Whole-pipeline sessions driven through in-memory handlers.

use lunula_diagnostic::emitter::BufferEmitter;
use lunula_diagnostic::ErrorCode;
use lunula_eval::{buffer_handler, buffer_input, InterpreterState, Limits};
use lunula_lexer::Scanner;
use lunulac::run_session;
use pretty_assertions::assert_eq;

struct Outcome {
    stdout: String,
    diagnostics: Vec<String>,
    fatal: Option<ErrorCode>,
}

fn run(source: &str, input: &[&str]) -> Outcome {
    let output = buffer_handler();
    let emitter = BufferEmitter::new();
    let state = InterpreterState::new(Limits::default())
        .with_print_handler(output.clone())
        .with_input_handler(buffer_input(input.iter().copied()))
        .with_emitter(emitter.clone());
    let result = run_session(Scanner::from_source(source), state);
    Outcome {
        stdout: output.output(),
        diagnostics: emitter.rendered(),
        fatal: result.err().map(|diagnostic| diagnostic.code),
    }
}

const GREETER: &str = r#"
-- greet whoever is on the other side
local name = io.read()
local count = io.read()

if count + 0 > 1 then
    print("hello, " .. name .. "s", count)
elseif count == "1" then
    print("hello, " .. name)
else
    print("nobody here")
end
"#;

#[test]
fn greeter_takes_the_plural_branch() {
    let outcome = run(GREETER, &["world", "3"]);
    assert_eq!(outcome.stdout, "hello, worlds\t3\n");
    assert_eq!(outcome.diagnostics, Vec::<String>::new());
    assert_eq!(outcome.fatal, None);
}

#[test]
fn greeter_takes_the_singular_branch() {
    let outcome = run(GREETER, &["moon", "1"]);
    assert_eq!(outcome.stdout, "hello, moon\n");
}

#[test]
fn greeter_without_input_is_fatal() {
    let outcome = run(GREETER, &["moon"]);
    assert_eq!(outcome.stdout, "");
    assert_eq!(outcome.fatal, Some(ErrorCode::E9003));
}

#[test]
fn unsupported_constructs_are_checked_but_skipped() {
    let source = r"
local function square(x)
    return x * x
end

local t = {square(2), n = 3}
for i = 1, #t do
    print(t[i])
end
print(done)
total = 10 % 4
print(total)
";
    let outcome = run(source, &[]);
    assert_eq!(outcome.stdout, "2\n");
    assert_eq!(
        outcome.diagnostics,
        vec![
            "warning[W0001]: not implemented: function -- code will be parsed but will have no effect (line 2)",
            "warning[W0001]: not implemented: table -- code will be parsed but will have no effect (line 6)",
            "warning[W0001]: not implemented: function call -- code will be parsed but will have no effect (line 6)",
            "warning[W0001]: not implemented: for loop -- code will be parsed but will have no effect (line 7)",
            "warning[W0001]: not implemented: var[item] access -- code will be parsed but will have no effect (line 8)",
            "error[E2001]: undefined symbol: done (line 10)",
        ]
    );
}

#[test]
fn long_comments_and_long_strings_span_lines() {
    let source = "--[[ a\nlong comment ]] a = [==[\nfirst\n]]second]==]\nprint(a)\n";
    let outcome = run(source, &[]);
    assert_eq!(outcome.stdout, "first\n]]second\n");
}

#[test]
fn recovery_keeps_later_statements_on_their_own_lines() {
    let source = "a = 1\nif a then b = ) end\nprint(a)\nc = a .. \"!\"\nprint(c)\n";
    let outcome = run(source, &[]);
    assert_eq!(outcome.stdout, "1\n1!\n");
    assert_eq!(
        outcome.diagnostics,
        vec!["error[E1002]: syntax error, unexpected `)`, expecting expression (line 2)"]
    );
}
