//! Grammar productions.
//!
//! - `mod.rs`: blocks and function bodies
//! - `stmt.rs`: statements
//! - `expr/`: expressions, prefix expressions and table constructors

mod expr;
mod stmt;

use lunula_eval::{FatalError, Value};
use lunula_lexer::{LineSource, TokenKind};
use lunula_stack::ensure_sufficient_stack;

use crate::{ParseResult, Parser};

/// Result of evaluating an expression. `None` when the expression was only
/// parsed because the surrounding code is disabled.
pub(crate) type Eval = Option<Value>;

/// Truthiness of an evaluation; code that did not run is false.
pub(crate) fn truthy(eval: Option<&Value>) -> bool {
    eval.is_some_and(Value::is_truthy)
}

impl<S: LineSource> Parser<'_, S> {
    /// Parse statements until a block terminator (`end`, `else`, `elseif`,
    /// `until`) or end of input, which is left for the caller.
    ///
    /// Each statement that fails with a syntax error is reported and
    /// skipped; the block itself only fails on fatal errors.
    pub(crate) fn parse_block(&mut self, nested: bool) -> Result<(), FatalError> {
        let enclosing = self.state.statement_abandoned();
        let result = ensure_sufficient_stack(|| self.parse_block_inner(nested));
        self.state.resume_statement(enclosing);
        result
    }

    fn parse_block_inner(&mut self, nested: bool) -> Result<(), FatalError> {
        loop {
            if self.current_kind().closes_block() {
                return Ok(());
            }

            let depth = self.state.cond_depth();
            let line = self.current_line();
            self.state.begin_statement();
            self.state.set_line(line);

            let result = self.parse_statement().and_then(|last| {
                self.eat(&TokenKind::Semicolon);
                if last && !self.current_kind().closes_block() {
                    return Err(self.unexpected(Some("`end`")));
                }
                Ok(())
            });

            if let Err(error) = result {
                let line = self.current_line();
                self.recover(error, depth, line, nested)?;
            } else if self.state.cond_depth() != depth {
                return Err(FatalError::UnbalancedConditions);
            }
        }
    }

    /// `funcbody := '(' [parlist] ')' block 'end'`
    ///
    /// Functions are never called, so the whole body is disabled.
    pub(crate) fn parse_function_body(&mut self) -> ParseResult<()> {
        self.state.cond_push(false)?;
        self.expect(&TokenKind::LParen)?;
        self.parse_parameter_list()?;
        self.expect(&TokenKind::RParen)?;
        self.parse_block(true)?;
        self.expect(&TokenKind::End)?;
        self.state.cond_pop()?;
        Ok(())
    }

    /// `parlist := namelist [',' '...'] | '...'`
    fn parse_parameter_list(&mut self) -> ParseResult<()> {
        if self.check(&TokenKind::RParen) {
            return Ok(());
        }
        loop {
            if self.eat(&TokenKind::Ellipsis) {
                return Ok(());
            }
            self.expect_name()?;
            if !self.eat(&TokenKind::Comma) {
                return Ok(());
            }
        }
    }
}
