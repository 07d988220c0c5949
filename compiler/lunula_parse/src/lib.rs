//! Recursive descent parser for the lunula Lua subset.
//!
//! There is no syntax tree: each construct is evaluated against the
//! [`InterpreterState`] as soon as it is recognized. Code that must be parsed
//! but not run (untaken `if` branches, loop and function bodies, table
//! constructors) is parsed under a disabled conditional level, so it is
//! syntax-checked without side effects.

mod cursor;
mod error;
mod grammar;
mod recovery;

pub use cursor::Cursor;
pub use error::{ParseError, ParseResult};

use lunula_diagnostic::{unexpected_token, Diagnostic};
use lunula_eval::{FatalError, InterpreterState};
use lunula_lexer::{LineSource, Scanner, Token, TokenKind};

/// Parser state: the token cursor and the interpreter it drives.
pub struct Parser<'st, S> {
    cursor: Cursor<S>,
    state: &'st mut InterpreterState,
}

impl<'st, S: LineSource> Parser<'st, S> {
    pub fn new(scanner: Scanner<S>, state: &'st mut InterpreterState) -> Self {
        Parser {
            cursor: Cursor::new(scanner),
            state,
        }
    }

    // Cursor delegation

    #[inline]
    fn current_kind(&mut self) -> &TokenKind {
        self.cursor.current_kind()
    }

    #[inline]
    fn current_line(&mut self) -> u32 {
        self.cursor.current_line()
    }

    #[inline]
    fn check(&mut self, kind: &TokenKind) -> bool {
        self.cursor.check(kind)
    }

    #[inline]
    fn check_name(&mut self) -> bool {
        self.cursor.check_name()
    }

    #[inline]
    fn eat(&mut self, kind: &TokenKind) -> bool {
        self.cursor.eat(kind)
    }

    /// Consume the current token; runtime diagnostics raised from here on
    /// point at its line.
    fn advance(&mut self) -> Token {
        let token = self.cursor.advance();
        self.state.set_line(token.line);
        token
    }

    fn expect(&mut self, kind: &TokenKind) -> ParseResult<Token> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(self.unexpected(Some(&kind.to_string())))
        }
    }

    fn expect_name(&mut self) -> ParseResult<String> {
        if self.check_name() {
            if let TokenKind::Name(name) = self.advance().kind {
                return Ok(name);
            }
        }
        Err(self.unexpected(Some("name")))
    }

    /// Syntax error at the current token. Lexical error tokens report their
    /// own diagnostic.
    #[cold]
    fn unexpected(&mut self, expected: Option<&str>) -> ParseError {
        let token = self.cursor.current().clone();
        let diagnostic = match &token.kind {
            TokenKind::Error(error) => error.to_diagnostic(),
            kind => unexpected_token(&kind.to_string(), expected),
        };
        ParseError::syntax(diagnostic.at_line(token.line))
    }

    #[cold]
    fn error_here(&mut self, diagnostic: Diagnostic) -> ParseError {
        let line = self.current_line();
        ParseError::syntax(diagnostic.at_line(line))
    }

    /// Parse and run a whole chunk, until end of input.
    ///
    /// Syntax and runtime errors are reported through the state and parsing
    /// continues; only fatal errors stop the chunk.
    pub fn parse_chunk(mut self) -> Result<(), FatalError> {
        let result = self.parse_chunk_inner();
        self.state.flush_diagnostics();
        result
    }

    fn parse_chunk_inner(&mut self) -> Result<(), FatalError> {
        loop {
            self.parse_block(false)?;
            if self.cursor.is_at_end() {
                return Ok(());
            }

            // A block terminator with nothing to terminate
            let line = self.current_line();
            let depth = self.state.cond_depth();
            let error = self.unexpected(Some("end of input"));
            self.recover(error, depth, line, false)?;
        }
    }

    /// Report a syntax error and resynchronize at the end of `line`.
    fn recover(
        &mut self,
        error: ParseError,
        depth: usize,
        line: u32,
        nested: bool,
    ) -> Result<(), FatalError> {
        match error {
            ParseError::Fatal(fatal) => Err(fatal),
            ParseError::Syntax(diagnostic) => {
                tracing::debug!(code = %diagnostic.code, line, "recovering from syntax error");
                self.state.report(*diagnostic);
                self.state.cond_unwind(depth);
                self.state.print_discard();
                let skipped = recovery::synchronize(&mut self.cursor, line, nested);
                tracing::trace!(skipped, "resynchronized");
                Ok(())
            }
        }
    }
}

/// Parse and run everything `scanner` yields.
pub fn run<S: LineSource>(
    scanner: Scanner<S>,
    state: &mut InterpreterState,
) -> Result<(), FatalError> {
    Parser::new(scanner, state).parse_chunk()
}

/// Parse and run an in-memory script.
pub fn run_source(source: &str, state: &mut InterpreterState) -> Result<(), FatalError> {
    run(Scanner::from_source(source), state)
}
