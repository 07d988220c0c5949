//! Line sources for `io.read()`.

use std::collections::VecDeque;
use std::io;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::FatalError;

/// Where `io.read()` gets its lines from.
pub enum InputHandlerImpl {
    /// The process's standard input. Reads go through the shared `Stdin`
    /// buffer, so a script read from stdin and its `io.read()` calls
    /// consume the same stream in order.
    Stdin,
    /// Pre-seeded lines, for tests and embedders.
    Buffer(Mutex<VecDeque<String>>),
}

impl InputHandlerImpl {
    /// Read one line without its line terminator.
    pub fn read_line(&self) -> Result<String, FatalError> {
        match self {
            Self::Stdin => {
                let mut line = String::new();
                match io::stdin().read_line(&mut line) {
                    Ok(0) => Err(FatalError::InputRead {
                        reason: "end of input".to_owned(),
                    }),
                    Ok(_) => Ok(strip_line_end(line)),
                    Err(error) => Err(FatalError::InputRead {
                        reason: error.to_string(),
                    }),
                }
            }
            Self::Buffer(lines) => lines.lock().pop_front().ok_or(FatalError::InputRead {
                reason: "end of input".to_owned(),
            }),
        }
    }
}

fn strip_line_end(mut line: String) -> String {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    line
}

pub type SharedInputHandler = Arc<InputHandlerImpl>;

pub fn stdin_input() -> SharedInputHandler {
    Arc::new(InputHandlerImpl::Stdin)
}

/// An input handler that yields `lines` in order, then reports end of input.
pub fn buffer_input<I, S>(lines: I) -> SharedInputHandler
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let lines = lines.into_iter().map(Into::into).collect();
    Arc::new(InputHandlerImpl::Buffer(Mutex::new(lines)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer_yields_lines_in_order() {
        let input = buffer_input(["first", "second"]);
        assert_eq!(input.read_line(), Ok("first".to_owned()));
        assert_eq!(input.read_line(), Ok("second".to_owned()));
    }

    #[test]
    fn exhausted_buffer_is_fatal() {
        let input = buffer_input(Vec::<String>::new());
        assert_eq!(
            input.read_line(),
            Err(FatalError::InputRead {
                reason: "end of input".to_owned()
            })
        );
    }

    #[test]
    fn line_terminators_are_stripped() {
        assert_eq!(strip_line_end("abc\n".to_owned()), "abc");
        assert_eq!(strip_line_end("abc\r\n".to_owned()), "abc");
        assert_eq!(strip_line_end("abc".to_owned()), "abc");
        assert_eq!(strip_line_end("a\rb".to_owned()), "a\rb");
    }
}
