//! Expression parsing.
//!
//! Precedence chain, lowest first:
//! `or` < `and` < comparison < `..` (right) < `+ -` < `* / %` < unary
//! `not # -` < `^` (right).
//!
//! - `mod.rs`: entry point (`parse_expr`) and the binary precedence chain
//! - `operators.rs`: operator matching helpers
//! - `primary.rs`: literals, `io.read()`, function expressions, tables
//! - `prefix.rs`: names, parentheses, calls, field and index access

mod operators;
mod primary;
mod prefix;

pub(crate) use prefix::Prefix;

use lunula_eval::{Operator, Value};
use lunula_lexer::{LineSource, TokenKind};
use lunula_stack::ensure_sufficient_stack;

use super::Eval;
use crate::{ParseResult, Parser};

impl<S: LineSource> Parser<'_, S> {
    /// Parse and evaluate an expression.
    pub(crate) fn parse_expr(&mut self) -> ParseResult<Eval> {
        ensure_sufficient_stack(|| self.parse_or())
    }

    /// `exp or exp`; the right operand is disabled when the left one is
    /// truthy.
    fn parse_or(&mut self) -> ParseResult<Eval> {
        let mut left = self.parse_and()?;
        while self.check(&TokenKind::Or) {
            self.advance();
            let decided = left.as_ref().is_some_and(Value::is_truthy);
            let right = self.parse_short_circuit(decided, Self::parse_and)?;
            left = self.apply_logical(Operator::Or, left, right);
        }
        Ok(left)
    }

    /// `exp and exp`; the right operand is disabled when the left one is
    /// falsy.
    fn parse_and(&mut self) -> ParseResult<Eval> {
        let mut left = self.parse_comparison()?;
        while self.check(&TokenKind::And) {
            self.advance();
            let decided = left.as_ref().is_some_and(|value| !value.is_truthy());
            let right = self.parse_short_circuit(decided, Self::parse_comparison)?;
            left = self.apply_logical(Operator::And, left, right);
        }
        Ok(left)
    }

    /// Parse an operand, disabled if the result is already `decided`.
    fn parse_short_circuit(
        &mut self,
        decided: bool,
        operand: fn(&mut Self) -> ParseResult<Eval>,
    ) -> ParseResult<Eval> {
        if !decided {
            return operand(self);
        }
        self.state.cond_push(false)?;
        let skipped = operand(self);
        self.state.cond_pop()?;
        skipped
    }

    fn apply_logical(&mut self, op: Operator, left: Eval, right: Eval) -> Eval {
        match (left, right) {
            (Some(left), Some(right)) => Some(self.state.operate(op, &left, Some(&right))),
            // the right operand was skipped: the left one is the result
            (Some(left), None) => Some(left),
            (None, _) => None,
        }
    }

    /// `< > <= >= ~= ==`, left associative.
    fn parse_comparison(&mut self) -> ParseResult<Eval> {
        let mut left = self.parse_concat()?;
        while let Some(op) = self.match_comparison_op() {
            self.advance();
            let right = self.parse_concat()?;
            left = self.apply_binary(op, left, right);
        }
        Ok(left)
    }

    /// `..`, right associative.
    fn parse_concat(&mut self) -> ParseResult<Eval> {
        let left = self.parse_additive()?;
        if !self.check(&TokenKind::DotDot) {
            return Ok(left);
        }
        self.advance();
        let right = ensure_sufficient_stack(|| self.parse_concat())?;
        Ok(self.apply_binary(Operator::Concat, left, right))
    }

    fn parse_additive(&mut self) -> ParseResult<Eval> {
        let mut left = self.parse_multiplicative()?;
        while let Some(op) = self.match_additive_op() {
            self.advance();
            let right = self.parse_multiplicative()?;
            left = self.apply_binary(op, left, right);
        }
        Ok(left)
    }

    fn parse_multiplicative(&mut self) -> ParseResult<Eval> {
        let mut left = self.parse_unary()?;
        while let Some(op) = self.match_multiplicative_op() {
            self.advance();
            let right = self.parse_unary()?;
            left = self.apply_binary(op, left, right);
        }
        Ok(left)
    }

    /// `not exp`, `# exp`, `- exp`. Binds looser than `^`: `-x^2` is
    /// `-(x^2)`.
    fn parse_unary(&mut self) -> ParseResult<Eval> {
        let Some(op) = self.match_unary_op() else {
            return self.parse_power();
        };
        self.advance();
        let operand = ensure_sufficient_stack(|| self.parse_unary())?;
        Ok(operand.map(|value| self.state.operate(op, &value, None)))
    }

    /// `exp ^ exp`, right associative; the exponent may carry a unary
    /// operator (`2^-1`).
    fn parse_power(&mut self) -> ParseResult<Eval> {
        let base = self.parse_simple_expr()?;
        if !self.check(&TokenKind::Caret) {
            return Ok(base);
        }
        self.advance();
        let exponent = self.parse_unary()?;
        Ok(self.apply_binary(Operator::Pow, base, exponent))
    }

    fn apply_binary(&mut self, op: Operator, left: Eval, right: Eval) -> Eval {
        match (left, right) {
            (Some(left), Some(right)) => Some(self.state.operate(op, &left, Some(&right))),
            _ => None,
        }
    }

    /// A value for a constant, or `None` in disabled code.
    fn constant(&self, value: Value) -> Eval {
        self.state.enabled().then_some(value)
    }
}
