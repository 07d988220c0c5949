//! Statement parsing.

use lunula_eval::Value;
use lunula_lexer::{LineSource, TokenKind};

use super::expr::Prefix;
use super::{truthy, Eval};
use crate::{ParseResult, Parser};

impl<S: LineSource> Parser<'_, S> {
    /// Parse one statement. Returns `true` for a last statement
    /// (`return`/`break`), which must end its block.
    pub(super) fn parse_statement(&mut self) -> ParseResult<bool> {
        tracing::trace!(token = %self.current_kind(), "statement");
        match self.current_kind() {
            TokenKind::If => self.parse_if()?,
            TokenKind::While => self.parse_while()?,
            TokenKind::Do => self.parse_do()?,
            TokenKind::For => self.parse_for()?,
            TokenKind::Repeat => self.parse_repeat()?,
            TokenKind::Function => self.parse_function_statement()?,
            TokenKind::Local => self.parse_local()?,
            TokenKind::Print => self.parse_print()?,
            TokenKind::Return => {
                self.parse_return()?;
                return Ok(true);
            }
            TokenKind::Break => {
                self.advance();
                return Ok(true);
            }
            _ => self.parse_expression_statement()?,
        }
        Ok(false)
    }

    /// `if exp then block {elseif exp then block} [else block] end`
    fn parse_if(&mut self) -> ParseResult<()> {
        self.advance();
        let test = self.parse_expr()?;
        self.expect(&TokenKind::Then)?;
        self.state.cond_push(truthy(test.as_ref()))?;
        self.settle_if_abandoned()?;
        self.parse_block(true)?;

        loop {
            match self.current_kind() {
                TokenKind::ElseIf => {
                    self.advance();
                    self.state.cond_test_elseif()?;
                    let test = self.parse_expr()?;
                    self.expect(&TokenKind::Then)?;
                    self.state.cond_elseif(truthy(test.as_ref()))?;
                    self.settle_if_abandoned()?;
                    self.parse_block(true)?;
                }
                TokenKind::Else => {
                    self.advance();
                    self.state.cond_elseif(true)?;
                    self.parse_block(true)?;
                    self.expect(&TokenKind::End)?;
                    break;
                }
                TokenKind::End => {
                    self.advance();
                    break;
                }
                _ => return Err(self.unexpected(Some("`end`"))),
            }
        }

        self.state.cond_pop()?;
        Ok(())
    }

    /// A branch condition that failed to evaluate closes the whole chain.
    fn settle_if_abandoned(&mut self) -> ParseResult<()> {
        if self.state.statement_abandoned() {
            self.state.cond_settle()?;
        }
        Ok(())
    }

    /// `while exp do block end`
    fn parse_while(&mut self) -> ParseResult<()> {
        self.advance();
        self.state.warn_unimplemented("while loop");
        self.state.cond_push(false)?;
        self.parse_expr()?;
        self.expect(&TokenKind::Do)?;
        self.parse_block(true)?;
        self.expect(&TokenKind::End)?;
        self.state.cond_pop()?;
        Ok(())
    }

    /// `do block end`
    fn parse_do(&mut self) -> ParseResult<()> {
        self.advance();
        self.parse_block(true)?;
        self.expect(&TokenKind::End)?;
        Ok(())
    }

    /// `repeat block until exp`
    fn parse_repeat(&mut self) -> ParseResult<()> {
        self.advance();
        self.state.warn_unimplemented("repeat loop");
        self.state.cond_push(false)?;
        self.parse_block(true)?;
        self.expect(&TokenKind::Until)?;
        self.parse_expr()?;
        self.state.cond_pop()?;
        Ok(())
    }

    /// Numeric `for Name = exp, exp [, exp] do block end` or generic
    /// `for namelist in explist do block end`.
    fn parse_for(&mut self) -> ParseResult<()> {
        self.advance();
        self.state.cond_push(false)?;
        self.expect_name()?;

        if self.eat(&TokenKind::Eq) {
            self.state.warn_unimplemented("for loop");
            self.parse_expr()?;
            self.expect(&TokenKind::Comma)?;
            self.parse_expr()?;
            if self.eat(&TokenKind::Comma) {
                self.parse_expr()?;
            }
        } else if self.check(&TokenKind::Comma) || self.check(&TokenKind::In) {
            self.state.warn_unimplemented("forin loop");
            while self.eat(&TokenKind::Comma) {
                self.expect_name()?;
            }
            self.expect(&TokenKind::In)?;
            self.parse_expr_list()?;
        } else {
            return Err(self.unexpected(Some("`=` or `in`")));
        }

        self.expect(&TokenKind::Do)?;
        self.parse_block(true)?;
        self.expect(&TokenKind::End)?;
        self.state.cond_pop()?;
        Ok(())
    }

    /// `function funcname funcbody` with
    /// `funcname := Name {'.' Name} [':' Name]`
    fn parse_function_statement(&mut self) -> ParseResult<()> {
        self.advance();
        self.state.warn_unimplemented("function");
        self.expect_name()?;
        while self.eat(&TokenKind::Dot) {
            self.expect_name()?;
        }
        if self.eat(&TokenKind::Colon) {
            self.expect_name()?;
        }
        self.parse_function_body()
    }

    /// `local function Name funcbody` or `local namelist ['=' explist]`
    ///
    /// There are no scopes: local names are ordinary global symbols.
    fn parse_local(&mut self) -> ParseResult<()> {
        self.advance();
        if self.eat(&TokenKind::Function) {
            self.state.warn_unimplemented("function");
            self.expect_name()?;
            return self.parse_function_body();
        }

        let mut targets = vec![Some(self.expect_name()?)];
        while self.eat(&TokenKind::Comma) {
            targets.push(Some(self.expect_name()?));
        }

        let values = if self.eat(&TokenKind::Eq) {
            self.parse_expr_list()?
        } else {
            vec![Some(Value::Nil); targets.len()]
        };
        self.state.assign_lists(targets, values)?;
        Ok(())
    }

    /// `print '(' [explist] ')'`
    ///
    /// Items are rendered as they are evaluated; the line is written when
    /// the closing parenthesis is reached.
    fn parse_print(&mut self) -> ParseResult<()> {
        self.advance();
        self.expect(&TokenKind::LParen)?;
        self.state.print_start();
        if !self.check(&TokenKind::RParen) {
            loop {
                let item = self.parse_expr()?;
                if let Some(value) = &item {
                    self.state.print_item(value);
                }
                if !self.eat(&TokenKind::Comma) {
                    break;
                }
            }
        }
        self.expect(&TokenKind::RParen)?;
        self.state.print_finish();
        Ok(())
    }

    /// `return [explist]`; values are evaluated and discarded.
    fn parse_return(&mut self) -> ParseResult<()> {
        self.advance();
        let ends_here = self.current_kind().closes_block() || self.check(&TokenKind::Semicolon);
        if !ends_here {
            self.parse_expr_list()?;
        }
        Ok(())
    }

    /// Assignment `varlist '=' explist` or a function call statement.
    fn parse_expression_statement(&mut self) -> ParseResult<()> {
        let first = self.parse_prefix_expr()?;
        if !self.check(&TokenKind::Eq) && !self.check(&TokenKind::Comma) {
            return match first {
                Prefix::Call => Ok(()),
                _ => Err(self.unexpected(Some("`=`"))),
            };
        }

        let mut targets = vec![self.assignment_target(first)?];
        while self.eat(&TokenKind::Comma) {
            let next = self.parse_prefix_expr()?;
            targets.push(self.assignment_target(next)?);
        }
        self.expect(&TokenKind::Eq)?;
        let values = self.parse_expr_list()?;
        self.state.assign_lists(targets, values)?;
        Ok(())
    }

    /// Names are assignable; indexed and field slots are accepted as
    /// targets that receive nothing.
    fn assignment_target(&mut self, prefix: Prefix) -> ParseResult<Option<String>> {
        match prefix {
            Prefix::Name(name) => Ok(Some(name)),
            Prefix::Slot => Ok(None),
            Prefix::Call | Prefix::Paren(_) => Err(self.unexpected(Some("`=`"))),
        }
    }

    /// `explist := exp {',' exp}`
    pub(super) fn parse_expr_list(&mut self) -> ParseResult<Vec<Eval>> {
        let mut values = vec![self.parse_expr()?];
        while self.eat(&TokenKind::Comma) {
            values.push(self.parse_expr()?);
        }
        Ok(values)
    }
}
