//! Stack (LIFO) over a growable/shrinkable contiguous buffer
//!
//! Uses the same capacity law as [`DynamicArray`](crate::array::DynamicArray):
//! double when a push finds the buffer full, halve once a pop leaves
//! `len <= capacity / 2`, never below [`STACK_MIN_CAPACITY`].
//!
//! # Example
//!
//! ```rust
//! use rust_classic_dsa::stack::Stack;
//!
//! let mut stack = Stack::new();
//! stack.push(10);
//! stack.push(20);
//! assert_eq!(stack.top(), Some(&20));
//! assert_eq!(stack.pop(), Some(20));
//! assert_eq!(stack.pop(), Some(10));
//! assert_eq!(stack.pop(), None);
//! ```

use std::fmt;
use std::slice;

use crate::storage::{ResizePolicy, Storage};

/// Minimum capacity of a [`Stack`]
pub const STACK_MIN_CAPACITY: usize = 5;

const POLICY: ResizePolicy = ResizePolicy::Doubling {
    floor: STACK_MIN_CAPACITY,
};

/// An array-backed LIFO stack
#[derive(Debug, Clone)]
pub struct Stack<T> {
    storage: Storage<T>,
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Self::with_capacity(STACK_MIN_CAPACITY)
    }

    /// Creates an empty stack with capacity `max(capacity, STACK_MIN_CAPACITY)`
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            storage: Storage::new(capacity, POLICY),
        }
    }

    /// Pushes a value on top of the stack
    pub fn push(&mut self, value: T) {
        self.storage.push(value);
    }

    /// Removes and returns the top value, or `None` if the stack is empty
    pub fn pop(&mut self) -> Option<T> {
        let value = self.storage.pop()?;
        if self.storage.len() <= self.storage.capacity() / 2 {
            self.storage.shrink();
        }
        Some(value)
    }

    /// Returns the top value without removing it
    pub fn top(&self) -> Option<&T> {
        self.storage.as_slice().last()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// Number of elements on the stack
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    pub fn capacity(&self) -> usize {
        self.storage.capacity()
    }

    /// Iterates from the bottom of the stack to the top
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.storage.iter()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Display> fmt::Display for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::write_joined(f, self.iter(), " ")
    }
}
