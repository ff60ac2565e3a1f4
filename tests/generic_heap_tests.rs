//! Generic tests for both Heap implementations
//!
//! The helpers are written against the `Heap` trait and take an `Order`
//! function that sorts values into the expected extraction order, so the
//! same scenarios run against `MinHeap` and `MaxHeap`.

use rust_classic_dsa::heap::{MaxHeap, MinHeap};
use rust_classic_dsa::{CollectionError, Heap};

/// Sorts `values` into the order the heap should extract them
type Order = fn(&mut Vec<i32>);

fn ascending(values: &mut Vec<i32>) {
    values.sort();
}

fn descending(values: &mut Vec<i32>) {
    values.sort_by(|a, b| b.cmp(a));
}

/// Test that empty heap behaves correctly
fn test_empty_heap<H: Heap<i32>>() {
    let mut heap = H::with_capacity(4);
    assert!(heap.is_empty());
    assert_eq!(heap.len(), 0);
    assert_eq!(heap.capacity(), 4);
    assert_eq!(heap.peek(), None);
    assert_eq!(heap.extract(), Err(CollectionError::Underflow));
}

/// Test extraction order on a mixed input
fn test_extraction_order<H: Heap<i32>>(order: Order) {
    let values = vec![12, 11, 13, 5, 6, 7, 5, -3, 40];
    let mut heap = H::with_capacity(values.len());
    for &v in &values {
        heap.insert(v).unwrap();
    }

    let mut expected = values.clone();
    order(&mut expected);

    let mut extracted = Vec::new();
    while let Ok(v) = heap.extract() {
        extracted.push(v);
    }
    assert_eq!(extracted, expected);
    assert!(heap.is_empty());
}

/// Test that peek always agrees with the following extract
fn test_peek_matches_extract<H: Heap<i32>>() {
    let mut heap = H::with_capacity(50);
    for i in 0..50 {
        heap.insert((i * 37) % 50).unwrap();
    }
    while let Some(&top) = heap.peek() {
        assert_eq!(heap.extract(), Ok(top));
    }
}

/// Test overflow when full and reuse after extraction
fn test_overflow_and_reuse<H: Heap<i32>>() {
    let mut heap = H::with_capacity(3);
    heap.insert(1).unwrap();
    heap.insert(2).unwrap();
    heap.insert(3).unwrap();
    assert_eq!(heap.insert(4), Err(CollectionError::Overflow));
    assert_eq!(heap.len(), 3);

    heap.extract().unwrap();
    heap.insert(4).unwrap();
    assert_eq!(heap.len(), 3);
    assert_eq!(heap.insert(5), Err(CollectionError::Overflow));
}

/// Test duplicates all come out
fn test_duplicates<H: Heap<i32>>() {
    let mut heap = H::with_capacity(10);
    for _ in 0..10 {
        heap.insert(7).unwrap();
    }
    for _ in 0..10 {
        assert_eq!(heap.extract(), Ok(7));
    }
    assert_eq!(heap.extract(), Err(CollectionError::Underflow));
}

/// Test interleaved insert/extract keeps the heap consistent
fn test_interleaved<H: Heap<i32>>(order: Order) {
    let mut heap = H::with_capacity(100);
    let mut shadow = Vec::new();

    for i in 0..200 {
        let v = (i * 7919) % 101;
        if i % 3 == 2 {
            order(&mut shadow);
            let expected = shadow.remove(0);
            assert_eq!(heap.extract(), Ok(expected));
        } else if heap.insert(v).is_ok() {
            shadow.push(v);
        }
        assert_eq!(heap.len(), shadow.len());
    }
}

#[test]
fn test_min_heap_empty() {
    test_empty_heap::<MinHeap<i32>>();
}

#[test]
fn test_max_heap_empty() {
    test_empty_heap::<MaxHeap<i32>>();
}

#[test]
fn test_min_heap_extraction_order() {
    test_extraction_order::<MinHeap<i32>>(ascending);
}

#[test]
fn test_max_heap_extraction_order() {
    test_extraction_order::<MaxHeap<i32>>(descending);
}

#[test]
fn test_min_heap_peek() {
    test_peek_matches_extract::<MinHeap<i32>>();
}

#[test]
fn test_max_heap_peek() {
    test_peek_matches_extract::<MaxHeap<i32>>();
}

#[test]
fn test_min_heap_overflow() {
    test_overflow_and_reuse::<MinHeap<i32>>();
}

#[test]
fn test_max_heap_overflow() {
    test_overflow_and_reuse::<MaxHeap<i32>>();
}

#[test]
fn test_min_heap_duplicates() {
    test_duplicates::<MinHeap<i32>>();
}

#[test]
fn test_max_heap_duplicates() {
    test_duplicates::<MaxHeap<i32>>();
}

#[test]
fn test_min_heap_interleaved() {
    test_interleaved::<MinHeap<i32>>(ascending);
}

#[test]
fn test_max_heap_interleaved() {
    test_interleaved::<MaxHeap<i32>>(descending);
}

#[test]
fn test_min_heap_two_extractions() {
    let mut heap = MinHeap::with_capacity(10);
    for v in [12, 11, 13, 5, 6, 7] {
        heap.insert(v).unwrap();
    }
    let first = heap.extract_min().unwrap();
    let second = heap.extract_min().unwrap();
    assert_eq!((first, second), (5, 6));
    assert!(heap.is_valid_heap());
}
