//! Prefix expressions: names, parenthesized expressions, calls, field and
//! index access.
//!
//! A prefix expression is kept unresolved until its role is known. As an
//! assignment target a name must not be looked up; as a callee it is not
//! looked up either, since functions are not implemented.

use lunula_eval::Value;
use lunula_lexer::{LineSource, TokenKind};

use crate::error::ambiguous_call;
use crate::grammar::Eval;
use crate::{ParseResult, Parser};

/// An unresolved prefix expression.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Prefix {
    Name(String),
    /// `t[k]` or `t.f`: assignable, but holds no value.
    Slot,
    /// Result of a function or method call.
    Call,
    /// `(exp)`, already evaluated.
    Paren(Eval),
}

impl<S: LineSource> Parser<'_, S> {
    /// `prefixexp := Name | '(' exp ')' | prefixexp suffix`
    pub(crate) fn parse_prefix_expr(&mut self) -> ParseResult<Prefix> {
        let mut prefix = match self.current_kind() {
            TokenKind::Name(_) => Prefix::Name(self.expect_name()?),
            TokenKind::LParen => {
                self.advance();
                let inner = self.parse_expr()?;
                self.expect(&TokenKind::RParen)?;
                Prefix::Paren(inner)
            }
            _ => return Err(self.unexpected(None)),
        };

        loop {
            prefix = match self.current_kind() {
                TokenKind::Dot => {
                    self.advance();
                    self.resolve(prefix);
                    self.expect_name()?;
                    self.state.warn_unimplemented("var.field access");
                    Prefix::Slot
                }
                TokenKind::LBracket => {
                    self.advance();
                    self.resolve(prefix);
                    self.parse_expr()?;
                    self.expect(&TokenKind::RBracket)?;
                    self.state.warn_unimplemented("var[item] access");
                    Prefix::Slot
                }
                TokenKind::Colon => {
                    self.advance();
                    self.resolve(prefix);
                    self.expect_name()?;
                    self.parse_call_arguments()?;
                    self.state.warn_unimplemented("function call");
                    Prefix::Call
                }
                TokenKind::LParen | TokenKind::String(_) | TokenKind::LBrace => {
                    if !matches!(prefix, Prefix::Name(_)) {
                        self.resolve(prefix);
                    }
                    self.parse_call_arguments()?;
                    self.state.warn_unimplemented("function call");
                    Prefix::Call
                }
                _ => return Ok(prefix),
            };
        }
    }

    /// Value of a prefix expression used as an operand.
    pub(crate) fn resolve(&mut self, prefix: Prefix) -> Eval {
        if !self.state.enabled() {
            return None;
        }
        match prefix {
            Prefix::Name(name) => Some(self.state.lookup(&name)),
            Prefix::Slot | Prefix::Call => Some(Value::Invalid),
            Prefix::Paren(value) => value,
        }
    }

    /// `args := '(' [explist] ')' | tableconstructor | String`
    ///
    /// Arguments are evaluated for their side effects.
    fn parse_call_arguments(&mut self) -> ParseResult<()> {
        match self.current_kind() {
            TokenKind::String(_) => {
                self.advance();
                Ok(())
            }
            TokenKind::LBrace => {
                self.parse_table_constructor()?;
                Ok(())
            }
            _ => {
                let line = self.current_line();
                if line != self.cursor.previous_line() {
                    return Err(self.error_here(ambiguous_call()));
                }
                self.expect(&TokenKind::LParen)?;
                if !self.check(&TokenKind::RParen) {
                    self.parse_expr_list()?;
                }
                self.expect(&TokenKind::RParen)?;
                Ok(())
            }
        }
    }
}
