//! Fixed-capacity list used to collect multi-assignment operands.

use crate::FatalError;

/// Append-only sequence with a hard capacity.
///
/// Reset between statements; the backing storage is kept.
#[derive(Clone, Debug)]
pub struct BoundedList<T> {
    items: Vec<T>,
    capacity: usize,
}

impl<T> BoundedList<T> {
    pub fn with_capacity(capacity: usize) -> Self {
        BoundedList {
            items: Vec::new(),
            capacity,
        }
    }

    /// Append an element. Fails once the list holds `capacity` elements.
    pub fn append(&mut self, item: T) -> Result<(), FatalError> {
        if self.items.len() >= self.capacity {
            return Err(FatalError::ListFull {
                capacity: self.capacity,
            });
        }
        self.items.push(item);
        Ok(())
    }

    pub fn reset(&mut self) {
        self.items.clear();
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}

impl<'a, T> IntoIterator for &'a BoundedList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
