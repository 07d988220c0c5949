//! Scanner for the lunula Lua subset, built on logos.
//!
//! The scanner is fed line by line from a [`LineSource`] and hands the parser
//! one [`Token`] at a time, each tagged with the line it starts on.

mod escape;
mod lex_error;
mod raw_token;
mod scanner;
mod source;
mod token;

pub use escape::unescape_string;
pub use lex_error::{LexError, LexErrorKind, OpenConstruct};
pub use scanner::{PromptHook, Scanner};
pub use source::LineSource;
pub use token::{Token, TokenKind};
