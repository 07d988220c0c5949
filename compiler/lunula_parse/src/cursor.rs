//! Token cursor over the scanner.
//!
//! Tokens are pulled from the scanner only when the parser looks at them.
//! Consuming a token does not fetch the next one, so the side effects of a
//! statement that ends a line happen before the scanner asks for more input.

use std::mem;

use lunula_lexer::{LineSource, Scanner, Token, TokenKind};

pub struct Cursor<S> {
    scanner: Scanner<S>,
    current: Option<Token>,
    peeked: Option<Token>,
    /// Line of the last consumed token.
    previous_line: u32,
}

impl<S: LineSource> Cursor<S> {
    pub fn new(scanner: Scanner<S>) -> Self {
        Cursor {
            scanner,
            current: None,
            peeked: None,
            previous_line: 1,
        }
    }

    /// The current token, fetching it if needed.
    pub fn current(&mut self) -> &Token {
        let scanner = &mut self.scanner;
        let peeked = &mut self.peeked;
        self.current
            .get_or_insert_with(|| peeked.take().unwrap_or_else(|| scanner.next_token()))
    }

    #[inline]
    pub fn current_kind(&mut self) -> &TokenKind {
        &self.current().kind
    }

    #[inline]
    pub fn current_line(&mut self) -> u32 {
        self.current().line
    }

    pub fn previous_line(&self) -> u32 {
        self.previous_line
    }

    /// Kind of the token after the current one (one-token lookahead).
    pub fn peek_next_kind(&mut self) -> &TokenKind {
        self.current();
        let scanner = &mut self.scanner;
        &self.peeked.get_or_insert_with(|| scanner.next_token()).kind
    }

    /// Check whether the current token has the same kind as `kind`,
    /// ignoring payloads.
    #[inline]
    pub fn check(&mut self, kind: &TokenKind) -> bool {
        mem::discriminant(self.current_kind()) == mem::discriminant(kind)
    }

    #[inline]
    pub fn check_name(&mut self) -> bool {
        matches!(self.current_kind(), TokenKind::Name(_))
    }

    #[inline]
    pub fn is_at_end(&mut self) -> bool {
        matches!(self.current_kind(), TokenKind::Eof)
    }

    /// Consume the current token and return it. The next token is not read.
    ///
    /// At end of input this keeps returning `Eof`.
    pub fn advance(&mut self) -> Token {
        self.current();
        match self.current.take() {
            Some(token) => {
                self.previous_line = token.line;
                if token.kind == TokenKind::Eof {
                    self.current = Some(token.clone());
                }
                token
            }
            None => Token::new(TokenKind::Eof, self.previous_line),
        }
    }

    /// Consume the current token if it has the kind of `kind`.
    pub fn eat(&mut self, kind: &TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }
}

impl<S> std::fmt::Debug for Cursor<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cursor")
            .field("current", &self.current)
            .field("peeked", &self.peeked)
            .field("previous_line", &self.previous_line)
            .finish_non_exhaustive()
    }
}
