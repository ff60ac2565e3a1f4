//! Dynamic Array
//!
//! A growable/shrinkable contiguous sequence with an explicit capacity law:
//!
//! - capacity starts at [`ARRAY_MIN_CAPACITY`] (or the requested capacity,
//!   whichever is larger)
//! - an `add` on a full array doubles the capacity first
//! - a successful `delete` that leaves `len < capacity / 2` halves the
//!   capacity, never going below [`ARRAY_MIN_CAPACITY`]
//!
//! # Time Complexity
//!
//! | Operation    | Complexity     |
//! |--------------|----------------|
//! | `add`        | O(1) amortized |
//! | `delete`     | O(n)           |
//! | `delete_all` | O(n * k)       |
//! | `reverse`    | O(n)           |
//! | index        | O(1)           |
//!
//! # Example
//!
//! ```rust
//! use rust_classic_dsa::array::DynamicArray;
//!
//! let mut arr = DynamicArray::new();
//! for v in [10, 20, 30, 40, 50] {
//!     arr.add(v);
//! }
//! assert_eq!(arr.capacity(), 5);
//!
//! arr.add(60);
//! assert_eq!(arr.capacity(), 10);
//!
//! arr.delete(&30).unwrap();
//! arr.reverse();
//! assert_eq!(arr.as_slice(), &[60, 50, 40, 20, 10]);
//! ```

use std::fmt;
use std::ops::{Index, IndexMut};
use std::slice;

use crate::storage::{ResizePolicy, Storage};
use crate::traits::CollectionError;

/// Minimum capacity of a [`DynamicArray`]
pub const ARRAY_MIN_CAPACITY: usize = 5;

const POLICY: ResizePolicy = ResizePolicy::Doubling {
    floor: ARRAY_MIN_CAPACITY,
};

/// A growable array with doubling growth and halving shrink
#[derive(Debug, Clone)]
pub struct DynamicArray<T> {
    storage: Storage<T>,
}

impl<T> DynamicArray<T> {
    /// Creates an empty array with capacity [`ARRAY_MIN_CAPACITY`]
    pub fn new() -> Self {
        Self::with_capacity(ARRAY_MIN_CAPACITY)
    }

    /// Creates an empty array with capacity `max(capacity, ARRAY_MIN_CAPACITY)`
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            storage: Storage::new(capacity, POLICY),
        }
    }

    /// Appends a value, doubling the capacity first if the array is full
    pub fn add(&mut self, value: T) {
        self.storage.push(value);
    }

    /// Reverses the elements in place
    pub fn reverse(&mut self) {
        let items = self.storage.as_mut_slice();
        let len = items.len();
        for i in 0..len / 2 {
            items.swap(i, len - 1 - i);
        }
    }

    pub fn len(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.storage.capacity()
    }

    /// Returns the element at `index`, or `None` if it is out of range
    pub fn get(&self, index: usize) -> Option<&T> {
        self.storage.as_slice().get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.storage.as_mut_slice().get_mut(index)
    }

    pub fn as_slice(&self) -> &[T] {
        self.storage.as_slice()
    }

    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.storage.iter()
    }
}

impl<T: PartialEq> DynamicArray<T> {
    /// Returns the index of the first element equal to `value`
    pub fn position(&self, value: &T) -> Option<usize> {
        self.storage.iter().position(|item| item == value)
    }

    pub fn contains(&self, value: &T) -> bool {
        self.position(value).is_some()
    }

    /// Removes the first element equal to `value`
    ///
    /// If the array ends up less than half full the capacity is halved
    /// (but never below [`ARRAY_MIN_CAPACITY`]).
    ///
    /// # Errors
    /// Returns [`CollectionError::NotFound`] if no element equals `value`.
    pub fn delete(&mut self, value: &T) -> Result<(), CollectionError> {
        let index = self.position(value).ok_or(CollectionError::NotFound)?;
        self.storage.remove(index);
        if self.storage.len() < self.storage.capacity() / 2 {
            self.storage.shrink();
        }
        Ok(())
    }

    /// Removes every element equal to `value`, returning whether any were removed
    pub fn delete_all(&mut self, value: &T) -> bool {
        let mut found = false;
        while self.delete(value).is_ok() {
            found = true;
        }
        found
    }
}

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Index<usize> for DynamicArray<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.storage.as_slice()[index]
    }
}

impl<T> IndexMut<usize> for DynamicArray<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.storage.as_mut_slice()[index]
    }
}

impl<T> Extend<T> for DynamicArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}

impl<T> FromIterator<T> for DynamicArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut arr = Self::new();
        arr.extend(iter);
        arr
    }
}

impl<'a, T> IntoIterator for &'a DynamicArray<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Display> fmt::Display for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::write_joined(f, self.iter(), " ")
    }
}
