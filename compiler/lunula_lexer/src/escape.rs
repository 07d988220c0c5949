//! Escape processing for quoted string literals.

use crate::LexErrorKind;

/// Process the escape sequences of a quoted literal's contents (quotes
/// already removed).
///
/// Supports `\a \b \f \n \r \t \v \\ \" \'`, an escaped line break,
/// decimal escapes `\ddd` (at most three digits, value at most 255),
/// hexadecimal escapes `\xXX` and `\z` (skips following whitespace).
/// Byte values above 127 are mapped to the Latin-1 character of that value.
/// Strings are UTF-8, so such a character occupies two bytes: `#"\200"` is 2,
/// not 1 as it would be for a raw byte string.
pub fn unescape_string(s: &str) -> Result<String, LexErrorKind> {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }
        match chars.next() {
            Some('a') => result.push('\u{7}'),
            Some('b') => result.push('\u{8}'),
            Some('f') => result.push('\u{c}'),
            Some('n' | '\n') => result.push('\n'),
            Some('r') => result.push('\r'),
            Some('t') => result.push('\t'),
            Some('v') => result.push('\u{b}'),
            Some('\\') => result.push('\\'),
            Some('"') => result.push('"'),
            Some('\'') => result.push('\''),
            Some('\r') => {
                // \<CR><LF> counts as one escaped line break
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                result.push('\n');
            }
            Some('z') => {
                while chars.peek().is_some_and(|c| c.is_ascii_whitespace()) {
                    chars.next();
                }
            }
            Some('x') => {
                let mut value = 0u32;
                for _ in 0..2 {
                    let digit = chars
                        .next()
                        .and_then(|d| d.to_digit(16))
                        .ok_or(LexErrorKind::InvalidEscape('x'))?;
                    value = value * 16 + digit;
                }
                result.push(byte_char(value));
            }
            Some(d) if d.is_ascii_digit() => {
                let mut value = d.to_digit(10).unwrap_or_default();
                for _ in 0..2 {
                    match chars.peek().and_then(|d| d.to_digit(10)) {
                        Some(digit) => {
                            value = value * 10 + digit;
                            chars.next();
                        }
                        None => break,
                    }
                }
                if value > 255 {
                    return Err(LexErrorKind::EscapeOutOfRange);
                }
                result.push(byte_char(value));
            }
            Some(other) => return Err(LexErrorKind::InvalidEscape(other)),
            None => return Err(LexErrorKind::UnterminatedString),
        }
    }

    Ok(result)
}

fn byte_char(value: u32) -> char {
    char::from_u32(value).unwrap_or(char::REPLACEMENT_CHARACTER)
}
