//! Array-based binary heaps with a fixed capacity
//!
//! The heap is a complete binary tree laid out in a `Vec` by index
//! arithmetic:
//!
//! | Relation | Index       |
//! |----------|-------------|
//! | parent   | `(i - 1) / 2` |
//! | left     | `2i + 1`    |
//! | right    | `2i + 2`    |
//!
//! [`ArrayHeap`] is generic over a [`HeapKind`] that decides which of two
//! elements belongs closer to the root. [`MinHeap`] and [`MaxHeap`] are the
//! two instantiations.
//!
//! The capacity is fixed at construction; inserting into a full heap fails
//! with [`CollectionError::Overflow`] and leaves the heap unchanged.
//!
//! The sift-down routine is shared with
//! [`heap_sort`](crate::sorting::heap_sort).
//!
//! # Time Complexity
//!
//! | Operation | Complexity |
//! |-----------|------------|
//! | `insert`  | O(log n)   |
//! | `extract` | O(log n)   |
//! | `peek`    | O(1)       |
//!
//! # Example
//!
//! ```rust
//! use rust_classic_dsa::Heap;
//! use rust_classic_dsa::heap::MinHeap;
//!
//! let mut heap = MinHeap::with_capacity(10);
//! for v in [12, 11, 13, 5, 6, 7] {
//!     heap.insert(v).unwrap();
//! }
//! assert_eq!(heap.get_min(), Some(&5));
//! assert_eq!(heap.extract_min(), Ok(5));
//! assert_eq!(heap.extract_min(), Ok(6));
//! ```

use std::fmt;
use std::marker::PhantomData;

use crate::traits::{CollectionError, Heap};

/// Decides the heap-order property of an [`ArrayHeap`]
pub trait HeapKind {
    /// Returns true if `a` must sit above `b`
    fn precedes<T: Ord>(a: &T, b: &T) -> bool;
}

/// Smallest element at the root
#[derive(Debug, Clone, Copy, Default)]
pub struct Min;

/// Largest element at the root
#[derive(Debug, Clone, Copy, Default)]
pub struct Max;

impl HeapKind for Min {
    fn precedes<T: Ord>(a: &T, b: &T) -> bool {
        a < b
    }
}

impl HeapKind for Max {
    fn precedes<T: Ord>(a: &T, b: &T) -> bool {
        a > b
    }
}

#[inline]
fn parent(i: usize) -> usize {
    (i - 1) / 2
}

#[inline]
fn left(i: usize) -> usize {
    2 * i + 1
}

#[inline]
fn right(i: usize) -> usize {
    2 * i + 2
}

/// Moves the element at `index` up until its parent precedes it
pub(crate) fn sift_up<T: Ord, K: HeapKind>(data: &mut [T], mut index: usize) {
    while index > 0 {
        let p = parent(index);
        if K::precedes(&data[index], &data[p]) {
            data.swap(index, p);
            index = p;
        } else {
            break;
        }
    }
}

/// Moves the element at `index` down until it precedes both children.
/// The whole of `data` is treated as the heap.
pub(crate) fn sift_down<T: Ord, K: HeapKind>(data: &mut [T], mut index: usize) {
    let len = data.len();
    loop {
        let l = left(index);
        let r = right(index);
        let mut top = index;

        if l < len && K::precedes(&data[l], &data[top]) {
            top = l;
        }
        if r < len && K::precedes(&data[r], &data[top]) {
            top = r;
        }

        if top == index {
            break;
        }
        data.swap(index, top);
        index = top;
    }
}

/// A fixed-capacity binary heap
pub struct ArrayHeap<T, K> {
    data: Vec<T>,
    capacity: usize,
    _kind: PhantomData<K>,
}

/// Binary heap with the minimum at the root
pub type MinHeap<T> = ArrayHeap<T, Min>;

/// Binary heap with the maximum at the root
pub type MaxHeap<T> = ArrayHeap<T, Max>;

impl<T: Ord, K: HeapKind> Heap<T> for ArrayHeap<T, K> {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            capacity,
            _kind: PhantomData,
        }
    }

    fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    fn len(&self) -> usize {
        self.data.len()
    }

    fn capacity(&self) -> usize {
        self.capacity
    }

    fn insert(&mut self, value: T) -> Result<(), CollectionError> {
        if self.data.len() == self.capacity {
            return Err(CollectionError::Overflow);
        }
        self.data.push(value);
        let last = self.data.len() - 1;
        sift_up::<T, K>(&mut self.data, last);
        Ok(())
    }

    fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    fn extract(&mut self) -> Result<T, CollectionError> {
        if self.data.is_empty() {
            return Err(CollectionError::Underflow);
        }
        let last = self.data.len() - 1;
        self.data.swap(0, last);
        let top = self.data.pop().ok_or(CollectionError::Underflow)?;
        if !self.data.is_empty() {
            sift_down::<T, K>(&mut self.data, 0);
        }
        Ok(top)
    }
}

impl<T: Ord, K: HeapKind> ArrayHeap<T, K> {
    pub fn is_full(&self) -> bool {
        self.data.len() == self.capacity
    }

    /// The backing array in heap (level) order
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Checks the heap-order property between every node and its parent
    pub fn is_valid_heap(&self) -> bool {
        (1..self.data.len()).all(|i| !K::precedes(&self.data[i], &self.data[parent(i)]))
    }
}

impl<T: Ord> ArrayHeap<T, Min> {
    pub fn get_min(&self) -> Option<&T> {
        self.peek()
    }

    pub fn extract_min(&mut self) -> Result<T, CollectionError> {
        self.extract()
    }
}

impl<T: Ord> ArrayHeap<T, Max> {
    pub fn get_max(&self) -> Option<&T> {
        self.peek()
    }

    pub fn extract_max(&mut self) -> Result<T, CollectionError> {
        self.extract()
    }
}

impl<T: fmt::Debug, K> fmt::Debug for ArrayHeap<T, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArrayHeap")
            .field("data", &self.data)
            .field("capacity", &self.capacity)
            .finish()
    }
}

impl<T: fmt::Display, K> fmt::Display for ArrayHeap<T, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::write_joined(f, self.data.iter(), " ")
    }
}
