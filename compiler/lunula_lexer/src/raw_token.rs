//! Logos tokenizer definition.
//!
//! `RawToken` is matched over the scanner's line buffer. Comments come out
//! as [`RawToken::Comment`] and are dropped by the scanner; everything else
//! is converted into a [`crate::TokenKind`].

use logos::{Lexer, Logos};

use crate::escape::unescape_string;
use crate::{LexErrorKind, OpenConstruct};

#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(error = LexErrorKind)]
#[logos(skip r"[ \t\r\n\f\v]+")] // Line breaks are counted by the scanner
pub(crate) enum RawToken {
    #[token("--", comment)]
    Comment,

    // Keywords
    #[token("and")]
    And,
    #[token("break")]
    Break,
    #[token("do")]
    Do,
    #[token("else")]
    Else,
    #[token("elseif")]
    ElseIf,
    #[token("end")]
    End,
    #[token("false")]
    False,
    #[token("for")]
    For,
    #[token("function")]
    Function,
    #[token("if")]
    If,
    #[token("in")]
    In,
    #[token("local")]
    Local,
    #[token("nil")]
    Nil,
    #[token("not")]
    Not,
    #[token("or")]
    Or,
    #[token("print")]
    Print,
    #[token("repeat")]
    Repeat,
    #[token("return")]
    Return,
    #[token("then")]
    Then,
    #[token("true")]
    True,
    #[token("until")]
    Until,
    #[token("while")]
    While,

    // `io.read()` is a single token
    #[regex(r"io[ \t]*\.[ \t]*read[ \t]*\([ \t]*\)")]
    IoRead,

    // Operators
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("%")]
    Percent,
    #[token("^")]
    Caret,
    #[token("#")]
    Hash,
    #[token("==")]
    EqEq,
    #[token("~=")]
    NotEq,
    #[token("<=")]
    LtEq,
    #[token(">=")]
    GtEq,
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,
    #[token("=")]
    Eq,

    // Delimiters
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token(";")]
    Semicolon,
    #[token(":")]
    Colon,
    #[token(",")]
    Comma,
    #[token(".")]
    Dot,
    #[token("..")]
    DotDot,
    #[token("...")]
    Ellipsis,

    // Literals
    #[regex(r"[0-9]+(\.[0-9]*)?([eE][+-]?[0-9]+)?", decimal)]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?", decimal)]
    #[regex(r"0[xX][0-9a-fA-F]+", hexadecimal)]
    Number(f64),

    #[regex(r#""([^"\\\n]|\\(.|\n))*""#, quoted)]
    #[regex(r#"'([^'\\\n]|\\(.|\n))*'"#, quoted)]
    #[regex(r"\[=*\[", long_string)]
    String(String),

    // A quote with no closing quote on this line
    #[regex(r#""([^"\\\n]|\\(.|\n))*"#, unterminated)]
    #[regex(r#"'([^'\\\n]|\\(.|\n))*"#, unterminated)]
    Unterminated,

    #[regex(r"[A-Za-z_][A-Za-z0-9_]*", |lex| lex.slice().to_owned())]
    Name(String),
}

/// Level of a long bracket opening at the start of `s` (`[[` is 0, `[=[` is 1).
fn opening_level(s: &str) -> Option<usize> {
    let rest = s.strip_prefix('[')?;
    let level = rest.bytes().take_while(|&b| b == b'=').count();
    rest[level..].starts_with('[').then_some(level)
}

/// Byte offset of the closing bracket of the given level in `s`, and its length.
fn closing_bracket(s: &str, level: usize) -> Option<(usize, usize)> {
    let close = format!("]{}]", "=".repeat(level));
    s.find(&close).map(|at| (at, close.len()))
}

fn comment(lex: &mut Lexer<'_, RawToken>) -> Result<(), LexErrorKind> {
    let rest = lex.remainder();
    if let Some(level) = opening_level(rest) {
        let open = level + 2;
        let (at, len) = closing_bracket(&rest[open..], level)
            .ok_or(LexErrorKind::Incomplete(OpenConstruct::LongComment))?;
        lex.bump(open + at + len);
    } else {
        let line_end = rest.find('\n').unwrap_or(rest.len());
        lex.bump(line_end);
    }
    Ok(())
}

fn long_string(lex: &mut Lexer<'_, RawToken>) -> Result<String, LexErrorKind> {
    let level = lex.slice().len() - 2;
    let rest = lex.remainder();
    let (at, len) = closing_bracket(rest, level)
        .ok_or(LexErrorKind::Incomplete(OpenConstruct::LongString))?;
    let body = &rest[..at];
    // A line break right after the opening bracket is not part of the string
    let body = body
        .strip_prefix("\r\n")
        .or_else(|| body.strip_prefix('\n'))
        .unwrap_or(body);
    let content = body.to_owned();
    lex.bump(at + len);
    Ok(content)
}

fn quoted(lex: &mut Lexer<'_, RawToken>) -> Result<String, LexErrorKind> {
    let slice = lex.slice();
    unescape_string(&slice[1..slice.len() - 1])
}

fn unterminated(lex: &mut Lexer<'_, RawToken>) -> Result<(), LexErrorKind> {
    if lex.slice().ends_with("\\\n") {
        Err(LexErrorKind::Incomplete(OpenConstruct::String))
    } else {
        Err(LexErrorKind::UnterminatedString)
    }
}

fn decimal(lex: &mut Lexer<'_, RawToken>) -> Result<f64, LexErrorKind> {
    lex.slice()
        .parse()
        .map_err(|_| LexErrorKind::MalformedNumber)
}

fn hexadecimal(lex: &mut Lexer<'_, RawToken>) -> f64 {
    lex.slice()[2..]
        .chars()
        .filter_map(|c| c.to_digit(16))
        .fold(0.0, |acc, digit| acc * 16.0 + f64::from(digit))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(source: &str) -> Vec<Result<RawToken, LexErrorKind>> {
        RawToken::lexer(source).collect()
    }

    #[test]
    fn long_bracket_levels() {
        assert_eq!(opening_level("[[x"), Some(0));
        assert_eq!(opening_level("[==[x"), Some(2));
        assert_eq!(opening_level("[=x"), None);
        assert_eq!(opening_level("x"), None);
    }

    #[test]
    fn line_comment_runs_to_end_of_line() {
        assert_eq!(
            raw("a -- note\nb"),
            vec![
                Ok(RawToken::Name("a".into())),
                Ok(RawToken::Comment),
                Ok(RawToken::Name("b".into())),
            ]
        );
    }

    #[test]
    fn long_comment_spans_lines() {
        assert_eq!(
            raw("--[[ one\ntwo ]] x"),
            vec![Ok(RawToken::Comment), Ok(RawToken::Name("x".into()))]
        );
    }

    #[test]
    fn open_long_comment_asks_for_more_input() {
        assert_eq!(
            raw("--[==[ still open\n"),
            vec![Err(LexErrorKind::Incomplete(OpenConstruct::LongComment))]
        );
    }

    #[test]
    fn long_string_drops_leading_newline() {
        assert_eq!(
            raw("[[\nhello]]"),
            vec![Ok(RawToken::String("hello".into()))]
        );
        assert_eq!(
            raw("[=[a]]b]=]"),
            vec![Ok(RawToken::String("a]]b".into()))]
        );
    }

    #[test]
    fn numbers() {
        assert_eq!(raw("42"), vec![Ok(RawToken::Number(42.0))]);
        assert_eq!(raw("3.5e2"), vec![Ok(RawToken::Number(350.0))]);
        assert_eq!(raw(".25"), vec![Ok(RawToken::Number(0.25))]);
        assert_eq!(raw("0xff"), vec![Ok(RawToken::Number(255.0))]);
    }

    #[test]
    fn io_read_is_one_token() {
        assert_eq!(raw("io.read()"), vec![Ok(RawToken::IoRead)]);
        assert_eq!(raw("io . read ( )"), vec![Ok(RawToken::IoRead)]);
    }

    #[test]
    fn keywords_beat_names() {
        assert_eq!(raw("elseif"), vec![Ok(RawToken::ElseIf)]);
        assert_eq!(raw("ends"), vec![Ok(RawToken::Name("ends".into()))]);
    }

    #[test]
    fn unterminated_quote() {
        assert_eq!(
            raw("\"abc\n"),
            vec![Err(LexErrorKind::UnterminatedString)]
        );
        assert_eq!(
            raw("'abc\\\n"),
            vec![Err(LexErrorKind::Incomplete(OpenConstruct::String))]
        );
    }
}
