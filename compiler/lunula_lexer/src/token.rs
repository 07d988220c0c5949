use std::fmt;

use crate::LexError;

/// Kind of a scanned token, with its payload.
#[derive(Clone, Debug, PartialEq)]
pub enum TokenKind {
    // Literals
    Name(String),
    Number(f64),
    String(String),

    // Keywords
    And,
    Break,
    Do,
    Else,
    ElseIf,
    End,
    False,
    For,
    Function,
    If,
    In,
    Local,
    Nil,
    Not,
    Or,
    Print,
    Repeat,
    Return,
    Then,
    True,
    Until,
    While,
    /// `io.read()`
    IoRead,

    // Operators
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Caret,
    Hash,
    EqEq,
    NotEq,
    LtEq,
    GtEq,
    Lt,
    Gt,
    Eq,

    // Delimiters
    LParen,
    RParen,
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    Semicolon,
    Colon,
    Comma,
    Dot,
    DotDot,
    Ellipsis,

    /// Lexical error; reported by the parser.
    Error(LexError),
    Eof,
}

impl TokenKind {
    /// Fixed source text of punctuation and keyword tokens.
    pub fn text(&self) -> Option<&'static str> {
        let text = match self {
            TokenKind::And => "and",
            TokenKind::Break => "break",
            TokenKind::Do => "do",
            TokenKind::Else => "else",
            TokenKind::ElseIf => "elseif",
            TokenKind::End => "end",
            TokenKind::False => "false",
            TokenKind::For => "for",
            TokenKind::Function => "function",
            TokenKind::If => "if",
            TokenKind::In => "in",
            TokenKind::Local => "local",
            TokenKind::Nil => "nil",
            TokenKind::Not => "not",
            TokenKind::Or => "or",
            TokenKind::Print => "print",
            TokenKind::Repeat => "repeat",
            TokenKind::Return => "return",
            TokenKind::Then => "then",
            TokenKind::True => "true",
            TokenKind::Until => "until",
            TokenKind::While => "while",
            TokenKind::IoRead => "io.read()",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Star => "*",
            TokenKind::Slash => "/",
            TokenKind::Percent => "%",
            TokenKind::Caret => "^",
            TokenKind::Hash => "#",
            TokenKind::EqEq => "==",
            TokenKind::NotEq => "~=",
            TokenKind::LtEq => "<=",
            TokenKind::GtEq => ">=",
            TokenKind::Lt => "<",
            TokenKind::Gt => ">",
            TokenKind::Eq => "=",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::LBracket => "[",
            TokenKind::RBracket => "]",
            TokenKind::Semicolon => ";",
            TokenKind::Colon => ":",
            TokenKind::Comma => ",",
            TokenKind::Dot => ".",
            TokenKind::DotDot => "..",
            TokenKind::Ellipsis => "...",
            TokenKind::Name(_)
            | TokenKind::Number(_)
            | TokenKind::String(_)
            | TokenKind::Error(_)
            | TokenKind::Eof => return None,
        };
        Some(text)
    }

    /// Whether this token closes a block (`end`, `else`, `elseif`, `until`,
    /// or end of input).
    pub fn closes_block(&self) -> bool {
        matches!(
            self,
            TokenKind::End
                | TokenKind::Else
                | TokenKind::ElseIf
                | TokenKind::Until
                | TokenKind::Eof
        )
    }
}

/// Description used in syntax errors: `` `end` ``, `` name `x` ``, `number`...
impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Name(name) => write!(f, "name `{name}`"),
            TokenKind::Number(_) => write!(f, "number"),
            TokenKind::String(_) => write!(f, "string"),
            TokenKind::Error(err) => write!(f, "{}", err.kind),
            TokenKind::Eof => write!(f, "end of input"),
            fixed => write!(f, "`{}`", fixed.text().unwrap_or_default()),
        }
    }
}

/// A token and the 1-based line it starts on.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub line: u32,
}

impl Token {
    pub fn new(kind: TokenKind, line: u32) -> Self {
        Token { kind, line }
    }
}
