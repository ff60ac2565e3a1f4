//! Classic Data Structures and Algorithms for Rust
//!
//! This crate provides textbook implementations of the fundamental
//! containers and algorithms, with their growth policies and invariants
//! kept explicit rather than delegated to the standard collections.
//!
//! # Features
//!
//! - **Dynamic Array**: doubling growth, halving shrink, floor capacity 5
//! - **Stack**: LIFO over the same capacity law as the array
//! - **Queue**: FIFO with O(n) shifting dequeue and linear (+5/-5) resizing
//! - **Circular Queue**: fixed-capacity ring buffer with O(1) enqueue/dequeue
//! - **Priority Queue**: unsorted buffer, linear-scan extraction by priority then value
//! - **Linked Lists**: singly (owned `Box` chain), doubly and circular (arena-backed)
//! - **Binary Search Tree**: unbalanced, successor-replacement deletion
//! - **AVL Tree**: height-balanced on insert and delete
//! - **Min/Max Heap**: fixed-capacity array heaps
//! - **Sorting**: bubble, selection, insertion, merge, quick and heap sort
//! - **Searching**: linear, iterative binary and recursive binary search
//!
//! # Error handling
//!
//! Nothing in this crate panics on an empty or full container. Removals from
//! growable containers return `Option`; the fixed-capacity ones (circular
//! queue and heaps) return `Result<_, CollectionError>` for both inserts and
//! removals, and delete-by-value reports [`CollectionError::NotFound`].
//!
//! # Example
//!
//! ```rust
//! use rust_classic_dsa::avl::AvlTree;
//! use rust_classic_dsa::heap::MaxHeap;
//! use rust_classic_dsa::sorting::merge_sort;
//! use rust_classic_dsa::Heap;
//!
//! let mut avl = AvlTree::new();
//! for v in [3, 1, 2] {
//!     avl.insert(v);
//! }
//! assert_eq!(avl.inorder(), vec![&1, &2, &3]);
//!
//! let mut heap = MaxHeap::with_capacity(3);
//! heap.insert(5).unwrap();
//! heap.insert(9).unwrap();
//! assert_eq!(heap.extract_max(), Ok(9));
//!
//! let mut data = vec![5, 2, 4];
//! merge_sort(&mut data);
//! assert_eq!(data, vec![2, 4, 5]);
//! ```

use std::fmt;

pub mod array;
pub mod avl;
pub mod bst;
pub mod circular_list;
pub mod circular_queue;
pub mod doubly_list;
pub mod heap;
pub mod priority_queue;
pub mod queue;
pub mod searching;
pub mod singly_list;
pub mod sorting;
pub mod stack;
pub mod storage;
pub mod traits;

// Re-export the shared trait and error for convenience
pub use traits::{CollectionError, Heap};

/// Writes the items separated by `sep`, as used by the `Display` impls
pub(crate) fn write_joined<I>(f: &mut fmt::Formatter<'_>, items: I, sep: &str) -> fmt::Result
where
    I: IntoIterator,
    I::Item: fmt::Display,
{
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            f.write_str(sep)?;
        }
        write!(f, "{}", item)?;
    }
    Ok(())
}
