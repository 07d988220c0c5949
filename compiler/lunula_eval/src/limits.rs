//! Capacity limits of an interpreter session.

/// Fixed capacities of the runtime structures.
///
/// Exceeding any of them is fatal for the session, except
/// `max_string_size`, which only invalidates the offending literal.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Limits {
    /// Number of distinct names the symbol table can hold.
    pub symbol_capacity: usize,
    /// Number of targets (or values) one multi-assignment can carry.
    pub list_capacity: usize,
    /// Depth of nested control structures.
    pub max_nesting: usize,
    /// Longest accepted string literal, in bytes.
    pub max_string_size: usize,
}

impl Limits {
    pub const DEFAULT_SYMBOL_CAPACITY: usize = 1024;
    pub const DEFAULT_LIST_CAPACITY: usize = 1024;
    pub const DEFAULT_MAX_NESTING: usize = 1024;
    pub const DEFAULT_MAX_STRING_SIZE: usize = 1024 * 1024;

    #[must_use]
    pub fn with_symbol_capacity(mut self, capacity: usize) -> Self {
        self.symbol_capacity = capacity;
        self
    }

    #[must_use]
    pub fn with_list_capacity(mut self, capacity: usize) -> Self {
        self.list_capacity = capacity;
        self
    }

    #[must_use]
    pub fn with_max_nesting(mut self, depth: usize) -> Self {
        self.max_nesting = depth;
        self
    }

    #[must_use]
    pub fn with_max_string_size(mut self, size: usize) -> Self {
        self.max_string_size = size;
        self
    }
}

impl Default for Limits {
    fn default() -> Self {
        Limits {
            symbol_capacity: Self::DEFAULT_SYMBOL_CAPACITY,
            list_capacity: Self::DEFAULT_LIST_CAPACITY,
            max_nesting: Self::DEFAULT_MAX_NESTING,
            max_string_size: Self::DEFAULT_MAX_STRING_SIZE,
        }
    }
}
