//! Runtime support for the lunula interpreter.
//!
//! The parser evaluates while it parses; everything it evaluates with lives
//! here:
//! - [`Value`] and [`evaluate`]: the value model and its operators
//! - [`SymbolTable`] and [`BoundedList`]: global variables and the operand
//!   lists of multi-assignment
//! - [`ConditionStack`]: suppression of side effects in code that is parsed
//!   but not executed
//! - [`InterpreterState`]: all of the above plus output, input and
//!   diagnostics, owned by one session

mod conditions;
mod errors;
mod input_handler;
mod limits;
mod list;
mod number;
mod operators;
mod print_handler;
mod state;
mod symbols;
mod value;

pub use conditions::ConditionStack;
pub use errors::{FatalError, OperatorError, SymbolError};
pub use input_handler::{buffer_input, stdin_input, InputHandlerImpl, SharedInputHandler};
pub use limits::Limits;
pub use list::BoundedList;
pub use number::{format_number, str_to_number, PRECISION};
pub use operators::{evaluate, Operator};
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, BufferPrintHandler, PrintHandlerImpl,
    SharedPrintHandler, StdoutPrintHandler,
};
pub use state::InterpreterState;
pub use symbols::SymbolTable;
pub use value::{Value, ValueKind};
