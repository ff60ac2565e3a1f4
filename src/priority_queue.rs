//! Priority queue over an unsorted buffer
//!
//! Entries are appended as they arrive; `peek` and `dequeue` find the entry
//! to serve with a linear scan. The winner is the entry with the highest
//! priority, ties going to the highest value. If both are equal the earliest
//! entry wins.
//!
//! The buffer starts at [`PRIORITY_QUEUE_INITIAL_CAPACITY`] slots, doubles
//! when full and never shrinks.
//!
//! For a heap-backed alternative with O(log n) extraction see
//! [`MaxHeap`](crate::heap::MaxHeap).
//!
//! # Time Complexity
//!
//! | Operation | Complexity     |
//! |-----------|----------------|
//! | `enqueue` | O(1) amortized |
//! | `peek`    | O(n)           |
//! | `dequeue` | O(n)           |
//!
//! # Example
//!
//! ```rust
//! use rust_classic_dsa::priority_queue::PriorityQueue;
//!
//! let mut pq = PriorityQueue::new();
//! pq.enqueue(10, 2);
//! pq.enqueue(20, 5);
//! pq.enqueue(30, 1);
//! pq.enqueue(40, 3);
//!
//! assert_eq!(pq.peek(), Some((&20, &5)));
//! assert_eq!(pq.dequeue(), Some((20, 5)));
//! assert_eq!(pq.peek(), Some((&40, &3)));
//! ```

use std::cmp::Ordering;
use std::fmt;

use crate::storage::{ResizePolicy, Storage};

/// Capacity of a freshly created [`PriorityQueue`]
pub const PRIORITY_QUEUE_INITIAL_CAPACITY: usize = 10;

const POLICY: ResizePolicy = ResizePolicy::Doubling {
    floor: PRIORITY_QUEUE_INITIAL_CAPACITY,
};

#[derive(Debug, Clone)]
struct Entry<T, P> {
    value: T,
    priority: P,
}

/// A linear-scan priority queue of `(value, priority)` entries
#[derive(Debug, Clone)]
pub struct PriorityQueue<T: Ord, P: Ord> {
    entries: Storage<Entry<T, P>>,
}

impl<T: Ord, P: Ord> PriorityQueue<T, P> {
    pub fn new() -> Self {
        Self {
            entries: Storage::new(PRIORITY_QUEUE_INITIAL_CAPACITY, POLICY),
        }
    }

    /// Adds a value with the given priority
    pub fn enqueue(&mut self, value: T, priority: P) {
        self.entries.push(Entry { value, priority });
    }

    /// Returns the entry that the next `dequeue` would remove
    pub fn peek(&self) -> Option<(&T, &P)> {
        let index = self.peek_index()?;
        let entry = &self.entries.as_slice()[index];
        Some((&entry.value, &entry.priority))
    }

    /// Removes and returns the highest-priority entry
    ///
    /// Later entries shift left by one slot to close the gap.
    pub fn dequeue(&mut self) -> Option<(T, P)> {
        let index = self.peek_index()?;
        self.entries
            .remove(index)
            .map(|entry| (entry.value, entry.priority))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn capacity(&self) -> usize {
        self.entries.capacity()
    }

    /// Iterates over `(value, priority)` in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&T, &P)> + '_ {
        self.entries.iter().map(|e| (&e.value, &e.priority))
    }

    fn peek_index(&self) -> Option<usize> {
        let entries = self.entries.as_slice();
        let mut best = 0;
        for (i, entry) in entries.iter().enumerate().skip(1) {
            let current = &entries[best];
            let ordering = entry
                .priority
                .cmp(&current.priority)
                .then_with(|| entry.value.cmp(&current.value));
            if ordering == Ordering::Greater {
                best = i;
            }
        }
        (!entries.is_empty()).then_some(best)
    }
}

impl<T: Ord, P: Ord> Default for PriorityQueue<T, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord + fmt::Display, P: Ord + fmt::Display> fmt::Display for PriorityQueue<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (value, priority)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "({},{})", value, priority)?;
        }
        Ok(())
    }
}
