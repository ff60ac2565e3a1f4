//! Comparison sorts over mutable slices
//!
//! All routines sort in place into ascending order.
//!
//! | Algorithm        | Time (worst) | Extra space | Stable |
//! |------------------|--------------|-------------|--------|
//! | `bubble_sort`    | O(n²)        | O(1)        | yes    |
//! | `selection_sort` | O(n²)        | O(1)        | no     |
//! | `insertion_sort` | O(n²)        | O(1)        | yes    |
//! | `merge_sort`     | O(n log n)   | O(n)        | yes    |
//! | `quick_sort`     | O(n²)        | O(log n)*   | no     |
//! | `heap_sort`      | O(n log n)   | O(1)        | no     |
//!
//! \* recursion depth. Only the smaller partition is recursed into, so the
//! depth stays logarithmic even on already-sorted input, where the
//! last-element pivot still costs O(n²) time.
//!
//! Only `merge_sort` is guaranteed stable by contract. The other stable-by-
//! construction routines are reported as such by [`SortAlgorithm::is_stable`].
//!
//! # Example
//!
//! ```rust
//! use rust_classic_dsa::sorting::{quick_sort, SortAlgorithm};
//!
//! let mut data = [64, 34, 25, 12, 22, 11, 90];
//! quick_sort(&mut data);
//! assert_eq!(data, [11, 12, 22, 25, 34, 64, 90]);
//!
//! for algorithm in SortAlgorithm::ALL {
//!     let mut data = vec![3, 1, 2];
//!     algorithm.sort(&mut data);
//!     assert_eq!(data, vec![1, 2, 3], "{}", algorithm.name());
//! }
//! ```

use std::fmt;

use crate::heap::{sift_down, Max};

/// Repeatedly swaps adjacent out-of-order pairs
pub fn bubble_sort<T: Ord>(arr: &mut [T]) {
    let n = arr.len();
    for i in 0..n.saturating_sub(1) {
        for j in 0..n - i - 1 {
            if arr[j] > arr[j + 1] {
                arr.swap(j, j + 1);
            }
        }
    }
}

/// Swaps the minimum of the unsorted suffix into place, one position at a time
pub fn selection_sort<T: Ord>(arr: &mut [T]) {
    let n = arr.len();
    for i in 0..n.saturating_sub(1) {
        let mut min_idx = i;
        for j in i + 1..n {
            if arr[j] < arr[min_idx] {
                min_idx = j;
            }
        }
        arr.swap(i, min_idx);
    }
}

/// Grows a sorted prefix by sliding each new element left past larger ones
pub fn insertion_sort<T: Ord>(arr: &mut [T]) {
    for i in 1..arr.len() {
        let mut j = i;
        while j > 0 && arr[j - 1] > arr[j] {
            arr.swap(j - 1, j);
            j -= 1;
        }
    }
}

/// Top-down merge sort
///
/// Each merge copies both halves into temporary buffers and merges them back,
/// taking from the left half on ties, which keeps equal elements in their
/// original order.
pub fn merge_sort<T: Ord + Clone>(arr: &mut [T]) {
    if arr.len() <= 1 {
        return;
    }
    let mid = arr.len() / 2;
    merge_sort(&mut arr[..mid]);
    merge_sort(&mut arr[mid..]);
    merge(arr, mid);
}

fn merge<T: Ord + Clone>(arr: &mut [T], mid: usize) {
    let left = arr[..mid].to_vec();
    let right = arr[mid..].to_vec();

    let (mut i, mut j, mut k) = (0, 0, 0);
    while i < left.len() && j < right.len() {
        if left[i] <= right[j] {
            arr[k] = left[i].clone();
            i += 1;
        } else {
            arr[k] = right[j].clone();
            j += 1;
        }
        k += 1;
    }
    for value in left[i..].iter().chain(&right[j..]) {
        arr[k] = value.clone();
        k += 1;
    }
}

/// Quick sort with a last-element pivot and Lomuto partitioning
///
/// Recurses into the smaller partition and loops on the larger one, so the
/// stack depth stays O(log n) even when presorted input makes the running
/// time O(n²).
pub fn quick_sort<T: Ord>(mut arr: &mut [T]) {
    while arr.len() > 1 {
        let pivot = partition(arr);
        let (lower, upper) = std::mem::take(&mut arr).split_at_mut(pivot);
        let upper = &mut upper[1..];
        if lower.len() < upper.len() {
            quick_sort(lower);
            arr = upper;
        } else {
            quick_sort(upper);
            arr = lower;
        }
    }
}

/// Moves everything smaller than the last element in front of it and
/// returns the pivot's final index
fn partition<T: Ord>(arr: &mut [T]) -> usize {
    let high = arr.len() - 1;
    let mut store = 0;
    for j in 0..high {
        if arr[j] < arr[high] {
            arr.swap(store, j);
            store += 1;
        }
    }
    arr.swap(store, high);
    store
}

/// Builds a max-heap in place, then repeatedly swaps the root behind the
/// shrinking heap
pub fn heap_sort<T: Ord>(arr: &mut [T]) {
    let n = arr.len();
    for i in (0..n / 2).rev() {
        sift_down::<T, Max>(arr, i);
    }
    for end in (1..n).rev() {
        arr.swap(0, end);
        sift_down::<T, Max>(&mut arr[..end], 0);
    }
}

/// The sorting routines in this module, for generic dispatch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortAlgorithm {
    Bubble,
    Selection,
    Insertion,
    Merge,
    Quick,
    Heap,
}

impl SortAlgorithm {
    /// Every algorithm, in the order listed in the module table
    pub const ALL: [SortAlgorithm; 6] = [
        SortAlgorithm::Bubble,
        SortAlgorithm::Selection,
        SortAlgorithm::Insertion,
        SortAlgorithm::Merge,
        SortAlgorithm::Quick,
        SortAlgorithm::Heap,
    ];

    /// Sorts `arr` in place with this algorithm
    pub fn sort<T: Ord + Clone>(&self, arr: &mut [T]) {
        match self {
            SortAlgorithm::Bubble => bubble_sort(arr),
            SortAlgorithm::Selection => selection_sort(arr),
            SortAlgorithm::Insertion => insertion_sort(arr),
            SortAlgorithm::Merge => merge_sort(arr),
            SortAlgorithm::Quick => quick_sort(arr),
            SortAlgorithm::Heap => heap_sort(arr),
        }
    }

    /// Whether equal elements keep their relative order
    pub fn is_stable(&self) -> bool {
        matches!(
            self,
            SortAlgorithm::Bubble | SortAlgorithm::Insertion | SortAlgorithm::Merge
        )
    }

    pub fn name(&self) -> &'static str {
        match self {
            SortAlgorithm::Bubble => "bubble sort",
            SortAlgorithm::Selection => "selection sort",
            SortAlgorithm::Insertion => "insertion sort",
            SortAlgorithm::Merge => "merge sort",
            SortAlgorithm::Quick => "quick sort",
            SortAlgorithm::Heap => "heap sort",
        }
    }
}

impl fmt::Display for SortAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
