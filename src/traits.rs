//! Common traits and the error type shared by the containers
//!
//! - [`CollectionError`]: the failure conditions a caller has to check for
//! - [`Heap`]: common interface over the fixed-capacity [`MinHeap`](crate::heap::MinHeap)
//!   and [`MaxHeap`](crate::heap::MaxHeap)
//!
//! Growable containers (array, stack, queue, lists, trees) report an empty
//! removal as `None`. Fixed-capacity containers (circular queue, heaps)
//! report both overflow and underflow through [`CollectionError`], since an
//! insert into them can fail as well.

use std::fmt;

/// Error type for container operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionError {
    /// Removal was attempted on an empty container
    Underflow,
    /// Insert was attempted on a full fixed-capacity container
    Overflow,
    /// The requested element is not present
    NotFound,
}

impl fmt::Display for CollectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CollectionError::Underflow => write!(f, "container is empty"),
            CollectionError::Overflow => write!(f, "container is full"),
            CollectionError::NotFound => write!(f, "element not found"),
        }
    }
}

impl std::error::Error for CollectionError {}

/// Base trait for the fixed-capacity binary heaps
///
/// The "top" element is the minimum for a min-heap and the maximum for a
/// max-heap; the trait itself is agnostic of the direction.
///
/// # Example
///
/// ```rust
/// use rust_classic_dsa::Heap;
/// use rust_classic_dsa::heap::MinHeap;
///
/// let mut heap = MinHeap::with_capacity(4);
/// heap.insert(3).unwrap();
/// heap.insert(1).unwrap();
/// heap.insert(2).unwrap();
///
/// assert_eq!(heap.peek(), Some(&1));
/// assert_eq!(heap.extract(), Ok(1));
/// ```
pub trait Heap<T: Ord> {
    /// Creates an empty heap that can hold at most `capacity` elements
    fn with_capacity(capacity: usize) -> Self;

    /// Returns true if the heap is empty
    fn is_empty(&self) -> bool;

    /// Returns the number of elements in the heap
    fn len(&self) -> usize;

    /// Returns the fixed capacity chosen at construction
    fn capacity(&self) -> usize;

    /// Inserts an element
    ///
    /// # Errors
    /// Returns [`CollectionError::Overflow`] if the heap is full; the heap is
    /// left unchanged.
    ///
    /// # Time Complexity
    /// O(log n)
    fn insert(&mut self, value: T) -> Result<(), CollectionError>;

    /// Returns the top element without removing it
    ///
    /// # Time Complexity
    /// O(1)
    fn peek(&self) -> Option<&T>;

    /// Removes and returns the top element
    ///
    /// # Errors
    /// Returns [`CollectionError::Underflow`] if the heap is empty.
    ///
    /// # Time Complexity
    /// O(log n)
    fn extract(&mut self) -> Result<T, CollectionError>;
}
