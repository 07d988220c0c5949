//! Command line arguments.

use std::fmt;
use std::path::PathBuf;

pub const USAGE: &str = "usage: lunula <source.lua>
       lunula --

       use the second syntax to read source from standard input.
";

/// Where the script comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Source {
    File(PathBuf),
    /// `--`
    Stdin,
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::File(path) => write!(f, "{}", path.display()),
            Source::Stdin => f.write_str("<stdin>"),
        }
    }
}

/// Pick the source from the arguments following the program name.
///
/// Only the first argument is used. Returns `None` when it is missing.
pub fn parse_args(args: impl IntoIterator<Item = String>) -> Option<Source> {
    let first = args.into_iter().next()?;
    if first == "--" {
        Some(Source::Stdin)
    } else {
        Some(Source::File(PathBuf::from(first)))
    }
}
