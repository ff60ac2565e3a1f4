//! Linear FIFO queue over a growable/shrinkable contiguous buffer
//!
//! `dequeue` shifts every remaining element one slot to the left, which
//! makes it O(n). [`CircularQueue`](crate::circular_queue::CircularQueue)
//! is the O(1) ring-buffer alternative with a fixed capacity.
//!
//! Capacity grows linearly by [`QUEUE_GROWTH_STEP`] when an enqueue finds
//! the queue full, and shrinks by the same step when a dequeue leaves
//! exactly [`QUEUE_GROWTH_STEP`] slots unused. It never drops below
//! [`QUEUE_MIN_CAPACITY`]. A queue built with extra headroom through
//! [`Queue::with_capacity`] keeps it until enqueues and dequeues bring the
//! gap back to that step.
//!
//! # Time Complexity
//!
//! | Operation | Complexity     |
//! |-----------|----------------|
//! | `enqueue` | O(1) amortized |
//! | `dequeue` | O(n)           |
//! | `front`   | O(1)           |

use std::fmt;
use std::slice;

use crate::storage::{ResizePolicy, Storage};

/// Minimum capacity of a [`Queue`]
pub const QUEUE_MIN_CAPACITY: usize = 10;

/// Capacity delta applied on each queue resize
pub const QUEUE_GROWTH_STEP: usize = 5;

const POLICY: ResizePolicy = ResizePolicy::Linear {
    step: QUEUE_GROWTH_STEP,
    floor: QUEUE_MIN_CAPACITY,
};

/// An array-backed FIFO queue with linear growth
#[derive(Debug, Clone)]
pub struct Queue<T> {
    storage: Storage<T>,
}

impl<T> Queue<T> {
    pub fn new() -> Self {
        Self::with_capacity(QUEUE_MIN_CAPACITY)
    }

    /// Creates an empty queue with capacity `max(capacity, QUEUE_MIN_CAPACITY)`
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            storage: Storage::new(capacity, POLICY),
        }
    }

    /// Appends a value at the back
    pub fn enqueue(&mut self, value: T) {
        self.storage.push(value);
    }

    /// Removes and returns the front value, or `None` if the queue is empty
    pub fn dequeue(&mut self) -> Option<T> {
        let value = self.storage.remove(0)?;
        if self.storage.len() + QUEUE_GROWTH_STEP == self.storage.capacity() {
            self.storage.shrink();
        }
        Some(value)
    }

    /// Returns the front value without removing it
    pub fn front(&self) -> Option<&T> {
        self.storage.as_slice().first()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    pub fn len(&self) -> usize {
        self.storage.len()
    }

    pub fn capacity(&self) -> usize {
        self.storage.capacity()
    }

    /// Iterates from front to back
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.storage.iter()
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Display> fmt::Display for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::write_joined(f, self.iter(), " ")
    }
}
