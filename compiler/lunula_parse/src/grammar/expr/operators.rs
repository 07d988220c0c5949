//! Operator matching helpers.

use lunula_eval::Operator;
use lunula_lexer::{LineSource, TokenKind};

use crate::Parser;

impl<S: LineSource> Parser<'_, S> {
    pub(super) fn match_comparison_op(&mut self) -> Option<Operator> {
        match self.current_kind() {
            TokenKind::Lt => Some(Operator::Lt),
            TokenKind::LtEq => Some(Operator::LtEq),
            TokenKind::Gt => Some(Operator::Gt),
            TokenKind::GtEq => Some(Operator::GtEq),
            TokenKind::EqEq => Some(Operator::Eq),
            TokenKind::NotEq => Some(Operator::NotEq),
            _ => None,
        }
    }

    pub(super) fn match_additive_op(&mut self) -> Option<Operator> {
        match self.current_kind() {
            TokenKind::Plus => Some(Operator::Add),
            TokenKind::Minus => Some(Operator::Sub),
            _ => None,
        }
    }

    pub(super) fn match_multiplicative_op(&mut self) -> Option<Operator> {
        match self.current_kind() {
            TokenKind::Star => Some(Operator::Mul),
            TokenKind::Slash => Some(Operator::Div),
            TokenKind::Percent => Some(Operator::Mod),
            _ => None,
        }
    }

    /// Unary minus is [`Operator::Sub`] applied to a single operand.
    pub(super) fn match_unary_op(&mut self) -> Option<Operator> {
        match self.current_kind() {
            TokenKind::Not => Some(Operator::Not),
            TokenKind::Hash => Some(Operator::Len),
            TokenKind::Minus => Some(Operator::Sub),
            _ => None,
        }
    }
}
