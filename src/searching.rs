//! Linear and binary search over slices
//!
//! Binary search requires the slice to be sorted ascending; on unsorted
//! input its answer is unspecified (but it will not panic). When the key
//! occurs more than once, the index returned is whichever occurrence the
//! search inspects first, not necessarily the leftmost.
//!
//! # Example
//!
//! ```rust
//! use rust_classic_dsa::searching::{binary_search, binary_search_recursive, linear_search};
//!
//! let data = [2, 3, 4, 10, 40];
//! assert_eq!(linear_search(&data, &10), Some(3));
//! assert_eq!(binary_search(&data, &10), Some(3));
//! assert_eq!(binary_search_recursive(&data, &10), Some(3));
//! assert_eq!(binary_search(&data, &5), None);
//! ```

use std::cmp::Ordering;

/// Returns the index of the first element equal to `key`
///
/// # Time Complexity
/// O(n)
pub fn linear_search<T: PartialEq>(arr: &[T], key: &T) -> Option<usize> {
    arr.iter().position(|item| item == key)
}

/// Iterative binary search over a slice sorted ascending
///
/// # Time Complexity
/// O(log n)
pub fn binary_search<T: Ord>(arr: &[T], key: &T) -> Option<usize> {
    // Half-open window [low, high); the midpoint rounds toward low, as it
    // would with an inclusive [low, high - 1] window
    let (mut low, mut high) = (0, arr.len());
    while low < high {
        let mid = low + (high - 1 - low) / 2;
        match arr[mid].cmp(key) {
            Ordering::Equal => return Some(mid),
            Ordering::Less => low = mid + 1,
            Ordering::Greater => high = mid,
        }
    }
    None
}

/// Recursive binary search over a slice sorted ascending
///
/// Inspects the same midpoints as [`binary_search`], so both return the same
/// index for the same input.
///
/// # Time Complexity
/// O(log n) time, O(log n) stack
pub fn binary_search_recursive<T: Ord>(arr: &[T], key: &T) -> Option<usize> {
    search_between(arr, key, 0, arr.len())
}

fn search_between<T: Ord>(arr: &[T], key: &T, low: usize, high: usize) -> Option<usize> {
    if low >= high {
        return None;
    }
    let mid = low + (high - 1 - low) / 2;
    match arr[mid].cmp(key) {
        Ordering::Equal => Some(mid),
        Ordering::Greater => search_between(arr, key, low, mid),
        Ordering::Less => search_between(arr, key, mid + 1, high),
    }
}
