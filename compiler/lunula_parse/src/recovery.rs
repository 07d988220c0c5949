//! Error recovery for the parser.
//!
//! After a syntax error the rest of the offending line is discarded: tokens
//! are skipped while they start on the same line. A `;` on that line ends
//! the skip (and is consumed). Block terminators are kept for the enclosing
//! construct when the failing statement is nested.

use lunula_lexer::{LineSource, TokenKind};

use crate::cursor::Cursor;

/// Advance past the rest of `line`. Returns the number of skipped tokens.
pub(crate) fn synchronize<S: LineSource>(
    cursor: &mut Cursor<S>,
    line: u32,
    keep_terminators: bool,
) -> usize {
    let mut skipped = 0;
    loop {
        let token = cursor.current();
        if token.line != line {
            break;
        }
        match &token.kind {
            TokenKind::Eof => break,
            TokenKind::Semicolon => {
                cursor.advance();
                skipped += 1;
                break;
            }
            kind if keep_terminators && kind.closes_block() => break,
            _ => {
                cursor.advance();
                skipped += 1;
            }
        }
    }
    skipped
}
