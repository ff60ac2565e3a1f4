//! Fixed-capacity circular queue (ring buffer)
//!
//! The queue is addressed by a `front` and a `rear` index that wrap modulo
//! the capacity. An empty queue has no indices at all; dequeuing the last
//! element returns it to that state, so the next enqueue starts again at
//! slot 0.
//!
//! The capacity never changes after construction. Enqueue on a full queue
//! fails with [`CollectionError::Overflow`], dequeue on an empty one with
//! [`CollectionError::Underflow`]; both leave the queue untouched.
//!
//! # Example
//!
//! ```rust
//! use rust_classic_dsa::circular_queue::CircularQueue;
//!
//! let mut cq = CircularQueue::with_capacity(5);
//! for v in [10, 20, 30, 40] {
//!     cq.enqueue(v).unwrap();
//! }
//! assert_eq!(cq.dequeue(), Ok(10));
//! cq.enqueue(50).unwrap();
//! cq.enqueue(60).unwrap();
//! assert!(cq.is_full());
//! assert_eq!(cq.to_string(), "20 30 40 50 60");
//! ```

use std::fmt;

use crate::traits::CollectionError;

/// Capacity used by [`CircularQueue::new`]
pub const CIRCULAR_QUEUE_DEFAULT_CAPACITY: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Span {
    front: usize,
    rear: usize,
}

/// A bounded FIFO queue with O(1) enqueue and dequeue
#[derive(Debug, Clone)]
pub struct CircularQueue<T> {
    slots: Vec<Option<T>>,
    span: Option<Span>,
}

impl<T> CircularQueue<T> {
    /// Creates a queue with [`CIRCULAR_QUEUE_DEFAULT_CAPACITY`] slots
    pub fn new() -> Self {
        Self::with_capacity(CIRCULAR_QUEUE_DEFAULT_CAPACITY)
    }

    /// Creates a queue with `max(capacity, 1)` slots
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, || None);
        Self { slots, span: None }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.span.is_none()
    }

    /// True when `rear` sits directly behind `front` on the ring
    pub fn is_full(&self) -> bool {
        match self.span {
            None => false,
            Some(Span { front, rear }) => {
                (front == 0 && rear == self.capacity() - 1) || rear + 1 == front
            }
        }
    }

    pub fn len(&self) -> usize {
        match self.span {
            None => 0,
            Some(Span { front, rear }) if rear >= front => rear - front + 1,
            Some(Span { front, rear }) => self.capacity() - front + rear + 1,
        }
    }

    /// The physical `(front, rear)` slot indices, or `None` when empty
    pub fn indices(&self) -> Option<(usize, usize)> {
        self.span.map(|s| (s.front, s.rear))
    }

    /// Appends a value at the rear
    ///
    /// # Errors
    /// Returns [`CollectionError::Overflow`] if the queue is full.
    pub fn enqueue(&mut self, value: T) -> Result<(), CollectionError> {
        if self.is_full() {
            return Err(CollectionError::Overflow);
        }
        let span = match self.span {
            None => Span { front: 0, rear: 0 },
            Some(Span { front, rear }) => Span {
                front,
                rear: (rear + 1) % self.capacity(),
            },
        };
        self.slots[span.rear] = Some(value);
        self.span = Some(span);
        Ok(())
    }

    /// Removes and returns the front value
    ///
    /// # Errors
    /// Returns [`CollectionError::Underflow`] if the queue is empty.
    pub fn dequeue(&mut self) -> Result<T, CollectionError> {
        let Span { front, rear } = self.span.ok_or(CollectionError::Underflow)?;
        let value = self.slots[front].take().ok_or(CollectionError::Underflow)?;
        self.span = if front == rear {
            None
        } else {
            Some(Span {
                front: (front + 1) % self.capacity(),
                rear,
            })
        };
        Ok(value)
    }

    /// Returns the front value without removing it
    pub fn peek(&self) -> Option<&T> {
        self.span.and_then(|s| self.slots[s.front].as_ref())
    }

    /// Iterates in FIFO order, independent of where the ring wraps
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        let capacity = self.capacity();
        let front = self.span.map_or(0, |s| s.front);
        (0..self.len()).filter_map(move |i| self.slots[(front + i) % capacity].as_ref())
    }
}

impl<T> Default for CircularQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Display> fmt::Display for CircularQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::write_joined(f, self.iter(), " ")
    }
}
