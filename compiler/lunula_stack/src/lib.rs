//! Stack growth for the recursive parser.
//!
//! The parse engine recurses once per nesting level of parentheses, unary
//! operators, right-associative operators and nested blocks. Scripts such as
//! `x = ((((...))))` or a long `a .. b .. c ..` chain would otherwise exhaust
//! the main thread stack long before any interpreter limit is reached.
//!
//! Wrap every recursive entry point with [`ensure_sufficient_stack`]:
//!
//! ```text
//! fn parse_expr(&mut self) -> ParseResult<Option<Value>> {
//!     ensure_sufficient_stack(|| self.parse_or())
//! }
//! ```
//!
//! On native targets the closure runs on a freshly allocated segment when
//! fewer than [`RED_ZONE`] bytes remain. On wasm the closure is called as is.

/// Remaining stack below which a new segment is allocated.
pub const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated stack segment.
pub const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

/// Run `f`, first growing the stack if less than [`RED_ZONE`] is left.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

/// Run `f` directly; wasm runtimes manage their own stack.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
