//! Global symbol table.
//!
//! Open addressing with linear probing over a fixed number of slots. Entries
//! are never removed, so an empty slot always ends a probe sequence.

use crate::{FatalError, SymbolError, Value};

const HASH_SEED: u64 = 0x7DE0_0066_A8F3_C882;

/// Maps names to their current value, last write wins.
#[derive(Clone, Debug)]
pub struct SymbolTable {
    slots: Vec<Option<(String, Value)>>,
    len: usize,
}

impl SymbolTable {
    pub fn with_capacity(capacity: usize) -> Self {
        SymbolTable {
            slots: vec![None; capacity],
            len: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn lookup(&self, name: &str) -> Result<&Value, SymbolError> {
        match self.probe(name) {
            Probe::Found(index) => match &self.slots[index] {
                Some((_, value)) => Ok(value),
                None => Err(SymbolError::Undefined(name.to_owned())),
            },
            Probe::Vacant(_) | Probe::Full => Err(SymbolError::Undefined(name.to_owned())),
        }
    }

    /// Bind `name` to `value`, creating the symbol on first assignment.
    pub fn assign(&mut self, name: &str, value: Value) -> Result<(), FatalError> {
        match self.probe(name) {
            Probe::Found(index) => {
                if let Some((_, slot)) = &mut self.slots[index] {
                    *slot = value;
                }
            }
            Probe::Vacant(index) => {
                tracing::trace!(name, index, "new symbol");
                self.slots[index] = Some((name.to_owned(), value));
                self.len += 1;
            }
            Probe::Full => {
                return Err(FatalError::TooManySymbols {
                    capacity: self.capacity(),
                })
            }
        }
        Ok(())
    }

    /// Assign `values` to `names` position by position.
    ///
    /// Both lists must have the same length. Absent names are skipped and
    /// absent values are stored as [`Value::Invalid`].
    pub fn assign_many(
        &mut self,
        names: &[Option<String>],
        values: &[Option<Value>],
    ) -> Result<(), SymbolError> {
        if names.len() != values.len() {
            return Err(SymbolError::SizeMismatch {
                names: names.len(),
                values: values.len(),
            });
        }
        for (name, value) in names.iter().zip(values) {
            if let Some(name) = name {
                self.assign(name, value.clone().unwrap_or(Value::Invalid))?;
            }
        }
        Ok(())
    }

    /// Iterate over the defined symbols in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.slots
            .iter()
            .flatten()
            .map(|(name, value)| (name.as_str(), value))
    }

    fn probe(&self, name: &str) -> Probe {
        let capacity = self.slots.len();
        if capacity == 0 {
            return Probe::Full;
        }
        let start = slot_index(name, capacity);
        for offset in 0..capacity {
            let index = (start + offset) % capacity;
            match &self.slots[index] {
                Some((existing, _)) if existing == name => return Probe::Found(index),
                Some(_) => {}
                None => return Probe::Vacant(index),
            }
        }
        Probe::Full
    }
}

enum Probe {
    Found(usize),
    Vacant(usize),
    Full,
}

fn hash(name: &str) -> u64 {
    name.bytes()
        .fold(HASH_SEED, |hash, byte| (hash ^ u64::from(byte)).rotate_left(5))
}

fn slot_index(name: &str, capacity: usize) -> usize {
    let Ok(wide) = u64::try_from(capacity) else {
        return 0;
    };
    // remainder is below capacity, so it fits back into usize
    usize::try_from(hash(name) % wide).unwrap_or(0)
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
