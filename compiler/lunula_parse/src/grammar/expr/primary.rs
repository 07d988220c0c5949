//! Primary expressions.

use lunula_diagnostic::expected_expression;
use lunula_eval::Value;
use lunula_lexer::{LineSource, TokenKind};

use crate::grammar::Eval;
use crate::{ParseError, ParseResult, Parser};

impl<S: LineSource> Parser<'_, S> {
    /// `nil | false | true | Number | String | '...' | function funcbody |
    /// tableconstructor | io.read() | prefixexp`
    pub(super) fn parse_simple_expr(&mut self) -> ParseResult<Eval> {
        match self.current_kind() {
            TokenKind::Nil => {
                self.advance();
                Ok(self.constant(Value::Nil))
            }
            TokenKind::True => {
                self.advance();
                Ok(self.constant(Value::Boolean(true)))
            }
            TokenKind::False => {
                self.advance();
                Ok(self.constant(Value::Boolean(false)))
            }
            TokenKind::Number(_) => match self.advance().kind {
                TokenKind::Number(n) => Ok(self.constant(Value::Number(n))),
                _ => Ok(None),
            },
            TokenKind::String(_) => match self.advance().kind {
                TokenKind::String(text) if self.state.enabled() => {
                    Ok(Some(self.state.string_literal(text)))
                }
                _ => Ok(None),
            },
            TokenKind::Ellipsis => {
                self.advance();
                self.state.warn_unimplemented("vararg expression");
                Ok(self.constant(Value::Invalid))
            }
            TokenKind::IoRead => {
                self.advance();
                if self.state.enabled() {
                    Ok(Some(self.state.read_input()?))
                } else {
                    Ok(None)
                }
            }
            TokenKind::Function => {
                self.advance();
                self.state.warn_unimplemented("function");
                self.parse_function_body()?;
                Ok(self.constant(Value::Invalid))
            }
            TokenKind::LBrace => {
                self.parse_table_constructor()?;
                Ok(self.constant(Value::Invalid))
            }
            TokenKind::Name(_) | TokenKind::LParen => {
                let prefix = self.parse_prefix_expr()?;
                Ok(self.resolve(prefix))
            }
            TokenKind::Error(_) => Err(self.unexpected(None)),
            _ => Err(self.expected_expression()),
        }
    }

    #[cold]
    fn expected_expression(&mut self) -> ParseError {
        let found = self.current_kind().to_string();
        self.error_here(expected_expression(&found))
    }

    /// `tableconstructor := '{' [field {(','|';') field} [','|';']] '}'`
    /// with `field := '[' exp ']' '=' exp | Name '=' exp | exp`
    ///
    /// Tables are not implemented; the fields are parsed disabled.
    pub(crate) fn parse_table_constructor(&mut self) -> ParseResult<()> {
        self.expect(&TokenKind::LBrace)?;
        self.state.warn_unimplemented("table");
        self.state.cond_push(false)?;

        while !self.check(&TokenKind::RBrace) {
            self.parse_table_field()?;
            if !self.eat(&TokenKind::Comma) && !self.eat(&TokenKind::Semicolon) {
                break;
            }
        }

        self.expect(&TokenKind::RBrace)?;
        self.state.cond_pop()?;
        Ok(())
    }

    fn parse_table_field(&mut self) -> ParseResult<()> {
        if self.eat(&TokenKind::LBracket) {
            self.parse_expr()?;
            self.expect(&TokenKind::RBracket)?;
            self.expect(&TokenKind::Eq)?;
        } else if self.check_name() && self.cursor.peek_next_kind() == &TokenKind::Eq {
            self.advance();
            self.advance();
        }
        self.parse_expr()?;
        Ok(())
    }
}
