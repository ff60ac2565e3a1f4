//! Backing storage for the array-based containers
//!
//! [`Storage`] is a contiguous buffer that tracks its own logical capacity
//! instead of relying on `Vec`'s growth strategy. The growth and shrink
//! thresholds of the containers are part of their observable behaviour
//! (see `capacity()` on each container), so they are spelled out here as a
//! [`ResizePolicy`].
//!
//! Every resize is replace-on-resize: a fresh buffer of exactly the new
//! capacity is allocated, the live elements are moved across and the old
//! buffer is dropped.
//!
//! | Policy    | grow              | shrink                         |
//! |-----------|-------------------|--------------------------------|
//! | `Doubling`| `capacity * 2`    | `max(capacity / 2, floor)`     |
//! | `Linear`  | `capacity + step` | `max(capacity - step, floor)`  |

use std::slice;

/// How a [`Storage`] buffer changes capacity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizePolicy {
    /// Double on growth, halve on shrink, never below `floor`
    Doubling {
        /// Minimum capacity
        floor: usize,
    },
    /// Add/subtract a constant `step`, never below `floor`
    Linear {
        /// Capacity delta applied on each resize
        step: usize,
        /// Minimum capacity
        floor: usize,
    },
}

impl ResizePolicy {
    /// The minimum capacity under this policy
    pub fn floor(&self) -> usize {
        match *self {
            ResizePolicy::Doubling { floor } | ResizePolicy::Linear { floor, .. } => floor,
        }
    }

    /// Capacity after one growth step
    pub fn grown(&self, capacity: usize) -> usize {
        match *self {
            ResizePolicy::Doubling { floor } => (capacity * 2).max(floor).max(1),
            ResizePolicy::Linear { step, floor } => (capacity + step.max(1)).max(floor),
        }
    }

    /// Capacity after one shrink step
    pub fn shrunk(&self, capacity: usize) -> usize {
        match *self {
            ResizePolicy::Doubling { floor } => (capacity / 2).max(floor),
            ResizePolicy::Linear { step, floor } => capacity.saturating_sub(step).max(floor),
        }
    }
}

/// A contiguous buffer with an explicit capacity and resize policy
#[derive(Debug, Clone)]
pub struct Storage<T> {
    items: Vec<T>,
    capacity: usize,
    policy: ResizePolicy,
}

impl<T> Storage<T> {
    /// Creates an empty buffer with `max(capacity, policy.floor())` slots
    pub fn new(capacity: usize, policy: ResizePolicy) -> Self {
        let capacity = capacity.max(policy.floor());
        Self {
            items: Vec::with_capacity(capacity),
            capacity,
            policy,
        }
    }

    /// Number of live elements
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if there are no live elements
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Current logical capacity
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns true if the next push will trigger a growth step
    pub fn is_full(&self) -> bool {
        self.items.len() == self.capacity
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.items
    }

    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Appends a value, growing first if the buffer is full
    pub fn push(&mut self, value: T) {
        if self.is_full() {
            self.grow();
        }
        self.items.push(value);
    }

    /// Removes the last value. Never resizes.
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Removes the value at `index`, shifting everything after it left by one.
    /// Never resizes.
    pub fn remove(&mut self, index: usize) -> Option<T> {
        if index < self.items.len() {
            Some(self.items.remove(index))
        } else {
            None
        }
    }

    /// Applies one growth step
    pub fn grow(&mut self) {
        let target = self.policy.grown(self.capacity);
        self.reallocate(target);
    }

    /// Applies one shrink step. Returns false (and leaves the buffer alone)
    /// if the capacity is already at the floor or the live elements would
    /// not fit in anything smaller.
    pub fn shrink(&mut self) -> bool {
        let target = self.policy.shrunk(self.capacity).max(self.items.len());
        if target >= self.capacity {
            return false;
        }
        self.reallocate(target);
        true
    }

    fn reallocate(&mut self, capacity: usize) {
        let mut fresh = Vec::with_capacity(capacity);
        fresh.extend(self.items.drain(..));
        self.items = fresh;
        self.capacity = capacity;
    }
}
