//! Big-O complexity checks for container operations and sorts
//!
//! These tests empirically verify the documented complexity bounds using
//! the `big-o-test` crate.
//!
//! ## Testing Strategy
//!
//! We use `test_algorithm` to measure batch operations. For n operations:
//! - O(1) amortized per-element operations appear as O(n)
//! - O(log n) operations appear as O(n log n)
//! - O(n) operations (queue dequeue, priority queue dequeue) appear as O(n²)
//!
//! Note: These are empirical timing tests, not formal proofs. They are
//! ignored by default because timings are noisy on shared machines; run
//! them with `cargo test --release --test big_o_proofs -- --ignored`.

use big_o_test::{test_algorithm, BigOAlgorithmComplexity};
use rust_classic_dsa::avl::AvlTree;
use rust_classic_dsa::heap::MinHeap;
use rust_classic_dsa::priority_queue::PriorityQueue;
use rust_classic_dsa::queue::Queue;
use rust_classic_dsa::sorting::{heap_sort, insertion_sort, merge_sort};
use rust_classic_dsa::stack::Stack;
use rust_classic_dsa::Heap;

use ctor::ctor;
use parking_lot::RwLock;
use std::sync::Arc;

/// Sets up the ENV, affecting the Rust's test runner
#[ctor]
fn setup_env() {
    // timing tests must not compete with each other for cores
    std::env::set_var("RUST_TEST_THREADS", "1");
}

/// Pseudo-random but deterministic input of length `n`
fn scrambled(n: usize) -> Vec<i64> {
    (0..n as i64).map(|i| (i * 7919) % 10_007).collect()
}

// ============================================================================
// Containers
// ============================================================================

#[test]
#[ignore]
fn test_stack_push_pop() {
    let stack = Arc::new(RwLock::new(Stack::new()));

    test_algorithm(
        "Stack push/pop batch",
        3,
        || {
            *stack.write() = Stack::new();
        },
        20_000,
        || {
            let mut s = stack.write();
            for i in 0..20_000 {
                s.push(i);
            }
            while s.pop().is_some() {}
            42
        },
        40_000,
        || {
            let mut s = stack.write();
            for i in 0..40_000 {
                s.push(i);
            }
            while s.pop().is_some() {}
            42
        },
        BigOAlgorithmComplexity::ON,
        BigOAlgorithmComplexity::ON,
    );
}

#[test]
#[ignore]
fn test_queue_dequeue_shifts() {
    let queue = Arc::new(RwLock::new(Queue::new()));

    test_algorithm(
        "Queue dequeue batch",
        3,
        || {
            *queue.write() = Queue::new();
        },
        5_000,
        || {
            let mut q = queue.write();
            for i in 0..5_000 {
                q.enqueue(i);
            }
            while q.dequeue().is_some() {}
            42
        },
        10_000,
        || {
            let mut q = queue.write();
            for i in 0..10_000 {
                q.enqueue(i);
            }
            while q.dequeue().is_some() {}
            42
        },
        BigOAlgorithmComplexity::ON2,
        BigOAlgorithmComplexity::ON,
    );
}

#[test]
#[ignore]
fn test_priority_queue_linear_scan() {
    let pq = Arc::new(RwLock::new(PriorityQueue::new()));

    test_algorithm(
        "PriorityQueue dequeue batch",
        3,
        || {
            *pq.write() = PriorityQueue::new();
        },
        2_000,
        || {
            let mut q = pq.write();
            for i in 0..2_000 {
                q.enqueue(i, i % 17);
            }
            while q.dequeue().is_some() {}
            42
        },
        4_000,
        || {
            let mut q = pq.write();
            for i in 0..4_000 {
                q.enqueue(i, i % 17);
            }
            while q.dequeue().is_some() {}
            42
        },
        BigOAlgorithmComplexity::ON2,
        BigOAlgorithmComplexity::ON,
    );
}

#[test]
#[ignore]
fn test_min_heap_insert_extract() {
    let heap = Arc::new(RwLock::new(MinHeap::with_capacity(40_000)));

    test_algorithm(
        "MinHeap insert/extract batch",
        3,
        || {
            *heap.write() = MinHeap::with_capacity(40_000);
        },
        20_000,
        || {
            let mut h = heap.write();
            for v in scrambled(20_000) {
                assert!(h.insert(v).is_ok());
            }
            while h.extract().is_ok() {}
            42
        },
        40_000,
        || {
            let mut h = heap.write();
            for v in scrambled(40_000) {
                assert!(h.insert(v).is_ok());
            }
            while h.extract().is_ok() {}
            42
        },
        BigOAlgorithmComplexity::ONLogN,
        BigOAlgorithmComplexity::ON,
    );
}

#[test]
#[ignore]
fn test_avl_insert() {
    let tree = Arc::new(RwLock::new(AvlTree::new()));

    test_algorithm(
        "AvlTree insert batch",
        3,
        || {
            *tree.write() = AvlTree::new();
        },
        10_000,
        || {
            let mut t = tree.write();
            // sorted input, the worst case for an unbalanced tree
            for i in 0..10_000 {
                t.insert(i);
            }
            42
        },
        20_000,
        || {
            let mut t = tree.write();
            for i in 0..20_000 {
                t.insert(i);
            }
            42
        },
        BigOAlgorithmComplexity::ONLogN,
        BigOAlgorithmComplexity::ON,
    );
}

// ============================================================================
// Sorting
// ============================================================================

/// Sorts a fresh copy of a scrambled input of each size
macro_rules! sort_complexity_test {
    ($name:expr, $sort:expr, $n1:literal, $n2:literal, $time:expr) => {{
        let small = scrambled($n1);
        let large = scrambled($n2);

        test_algorithm(
            $name,
            3,
            || {},
            $n1,
            || {
                let mut data = small.clone();
                $sort(&mut data);
                42
            },
            $n2,
            || {
                let mut data = large.clone();
                $sort(&mut data);
                42
            },
            $time,
            BigOAlgorithmComplexity::ON,
        );
    }};
}

#[test]
#[ignore]
fn test_insertion_sort_quadratic() {
    sort_complexity_test!(
        "insertion sort",
        insertion_sort,
        2_000,
        4_000,
        BigOAlgorithmComplexity::ON2
    );
}

#[test]
#[ignore]
fn test_merge_sort_linearithmic() {
    sort_complexity_test!(
        "merge sort",
        merge_sort,
        50_000,
        100_000,
        BigOAlgorithmComplexity::ONLogN
    );
}

#[test]
#[ignore]
fn test_heap_sort_linearithmic() {
    sort_complexity_test!(
        "heap sort",
        heap_sort,
        50_000,
        100_000,
        BigOAlgorithmComplexity::ONLogN
    );
}
