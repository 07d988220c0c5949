//! The scanner: pulls lines from a [`LineSource`] on demand and lexes them.
//!
//! Lines are read only when the parser asks for a token beyond what has been
//! lexed so far, so an interactive session evaluates each statement as soon
//! as its last token is available. A construct left open at the end of the
//! buffered text (long string, long comment, escaped line break inside a
//! quoted string) is kept and lexed again once the next line arrives.

use std::collections::VecDeque;

use logos::Logos;

use crate::raw_token::RawToken;
use crate::{LexError, LexErrorKind, LineSource, Token, TokenKind};

/// Hook run before each line is read (interactive prompt).
pub type PromptHook = Box<dyn FnMut()>;

pub struct Scanner<S> {
    source: S,
    /// Text read but not yet turned into tokens.
    buffer: String,
    /// Line number of the first character of `buffer`.
    buffer_line: u32,
    /// Number of lines read from `source`.
    lines_read: u32,
    pending: VecDeque<Token>,
    finished: bool,
    prompt: Option<PromptHook>,
}

impl<S: LineSource> Scanner<S> {
    pub fn new(source: S) -> Self {
        Scanner {
            source,
            buffer: String::new(),
            buffer_line: 1,
            lines_read: 0,
            pending: VecDeque::new(),
            finished: false,
            prompt: None,
        }
    }

    /// Run `hook` before every line is read.
    #[must_use]
    pub fn with_prompt(mut self, hook: impl FnMut() + 'static) -> Self {
        self.prompt = Some(Box::new(hook));
        self
    }

    /// Number of lines consumed from the source so far.
    pub fn lines_read(&self) -> u32 {
        self.lines_read
    }

    /// Next token. Returns [`TokenKind::Eof`] forever once input is exhausted.
    pub fn next_token(&mut self) -> Token {
        while self.pending.is_empty() && !self.finished {
            self.refill();
        }
        self.pending
            .pop_front()
            .unwrap_or_else(|| Token::new(TokenKind::Eof, self.lines_read.max(1)))
    }

    fn refill(&mut self) {
        if let Some(prompt) = self.prompt.as_mut() {
            prompt();
        }

        let mut line = String::new();
        match self.source.read_line(&mut line) {
            Ok(0) => {
                if !self.buffer.is_empty() {
                    self.lex_buffer(true);
                }
                self.finish();
            }
            Ok(_) => {
                self.lines_read += 1;
                tracing::trace!(line = self.lines_read, "scanner read line");
                self.buffer.push_str(&line);
                self.lex_buffer(false);
            }
            Err(err) => {
                let kind = LexErrorKind::Read(err.to_string());
                let line = self.lines_read.max(1);
                self.pending
                    .push_back(Token::new(TokenKind::Error(LexError::new(kind, line, "")), line));
                self.finish();
            }
        }
    }

    fn finish(&mut self) {
        self.pending
            .push_back(Token::new(TokenKind::Eof, self.lines_read.max(1)));
        self.finished = true;
    }

    /// Tokenize `buffer`, keeping an open construct for the next round.
    fn lex_buffer(&mut self, at_eof: bool) {
        let mut lexer = RawToken::lexer(&self.buffer);
        let mut line = self.buffer_line;
        let mut counted = 0;
        let mut lexed = Vec::new();
        let mut resume_at = None;

        while let Some(result) = lexer.next() {
            let span = lexer.span();
            line += count_newlines(&self.buffer[counted..span.start]);
            counted = span.start;

            match result {
                Ok(raw) => {
                    if let Some(kind) = convert(raw) {
                        lexed.push(Token::new(kind, line));
                    }
                }
                Err(LexErrorKind::Incomplete(open)) if !at_eof => {
                    tracing::trace!(?open, line, "construct continues on next line");
                    resume_at = Some((span.start, line));
                    break;
                }
                Err(kind) => {
                    let slice = lexer.slice();
                    let kind = match kind.at_end_of_input() {
                        LexErrorKind::Unrecognized => slice
                            .chars()
                            .next()
                            .map_or(LexErrorKind::Unrecognized, LexErrorKind::UnexpectedCharacter),
                        other => other,
                    };
                    let error = LexError::new(kind, line, slice);
                    lexed.push(Token::new(TokenKind::Error(error), line));
                }
            }
        }

        self.pending.extend(lexed);
        match resume_at {
            Some((offset, line)) => {
                self.buffer.drain(..offset);
                self.buffer_line = line;
            }
            None => {
                self.buffer.clear();
                self.buffer_line = self.lines_read + 1;
            }
        }
    }
}

impl<'a> Scanner<&'a [u8]> {
    /// Scanner over an in-memory script.
    pub fn from_source(source: &'a str) -> Self {
        Scanner::new(source.as_bytes())
    }
}

impl<S> std::fmt::Debug for Scanner<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scanner")
            .field("buffer_line", &self.buffer_line)
            .field("lines_read", &self.lines_read)
            .field("pending", &self.pending.len())
            .field("finished", &self.finished)
            .finish_non_exhaustive()
    }
}

fn count_newlines(text: &str) -> u32 {
    let count = text.bytes().filter(|&b| b == b'\n').count();
    u32::try_from(count).unwrap_or(u32::MAX)
}

/// Convert a raw token; comments produce nothing.
fn convert(raw: RawToken) -> Option<TokenKind> {
    let kind = match raw {
        RawToken::Name(name) => TokenKind::Name(name),
        RawToken::Number(n) => TokenKind::Number(n),
        RawToken::String(s) => TokenKind::String(s),

        // Keywords
        RawToken::And => TokenKind::And,
        RawToken::Break => TokenKind::Break,
        RawToken::Do => TokenKind::Do,
        RawToken::Else => TokenKind::Else,
        RawToken::ElseIf => TokenKind::ElseIf,
        RawToken::End => TokenKind::End,
        RawToken::False => TokenKind::False,
        RawToken::For => TokenKind::For,
        RawToken::Function => TokenKind::Function,
        RawToken::If => TokenKind::If,
        RawToken::In => TokenKind::In,
        RawToken::Local => TokenKind::Local,
        RawToken::Nil => TokenKind::Nil,
        RawToken::Not => TokenKind::Not,
        RawToken::Or => TokenKind::Or,
        RawToken::Print => TokenKind::Print,
        RawToken::Repeat => TokenKind::Repeat,
        RawToken::Return => TokenKind::Return,
        RawToken::Then => TokenKind::Then,
        RawToken::True => TokenKind::True,
        RawToken::Until => TokenKind::Until,
        RawToken::While => TokenKind::While,
        RawToken::IoRead => TokenKind::IoRead,

        // Operators
        RawToken::Plus => TokenKind::Plus,
        RawToken::Minus => TokenKind::Minus,
        RawToken::Star => TokenKind::Star,
        RawToken::Slash => TokenKind::Slash,
        RawToken::Percent => TokenKind::Percent,
        RawToken::Caret => TokenKind::Caret,
        RawToken::Hash => TokenKind::Hash,
        RawToken::EqEq => TokenKind::EqEq,
        RawToken::NotEq => TokenKind::NotEq,
        RawToken::LtEq => TokenKind::LtEq,
        RawToken::GtEq => TokenKind::GtEq,
        RawToken::Lt => TokenKind::Lt,
        RawToken::Gt => TokenKind::Gt,
        RawToken::Eq => TokenKind::Eq,

        // Delimiters
        RawToken::LParen => TokenKind::LParen,
        RawToken::RParen => TokenKind::RParen,
        RawToken::LBrace => TokenKind::LBrace,
        RawToken::RBrace => TokenKind::RBrace,
        RawToken::LBracket => TokenKind::LBracket,
        RawToken::RBracket => TokenKind::RBracket,
        RawToken::Semicolon => TokenKind::Semicolon,
        RawToken::Colon => TokenKind::Colon,
        RawToken::Comma => TokenKind::Comma,
        RawToken::Dot => TokenKind::Dot,
        RawToken::DotDot => TokenKind::DotDot,
        RawToken::Ellipsis => TokenKind::Ellipsis,

        // Unterminated only ever produces an error
        RawToken::Comment | RawToken::Unterminated => return None,
    };
    Some(kind)
}
