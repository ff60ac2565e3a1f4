//! Sorting and searching benchmarks
//!
//! Compares the six sorting routines on random, sorted and reversed input,
//! and the three search routines on a sorted slice.
//!
//! ## Running
//!
//! ```bash
//! cargo bench --bench sort_bench
//! ```

use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use rust_classic_dsa::searching::{binary_search, binary_search_recursive, linear_search};
use rust_classic_dsa::sorting::SortAlgorithm;

/// Simple LCG for deterministic input generation
struct Lcg {
    state: u64,
}

impl Lcg {
    fn new(seed: u64) -> Self {
        Lcg { state: seed }
    }

    fn next(&mut self) -> u64 {
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        self.state
    }
}

fn random_input(n: usize, seed: u64) -> Vec<u32> {
    let mut rng = Lcg::new(seed);
    (0..n).map(|_| (rng.next() >> 33) as u32).collect()
}

/// Benchmark every algorithm on random input of growing size
fn benchmark_random(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort_random");
    group.sample_size(20);

    for &n in &[100usize, 1_000, 5_000] {
        let input = random_input(n, 12345);
        for algorithm in SortAlgorithm::ALL {
            // the quadratic sorts take too long past a few thousand elements
            let quadratic = matches!(
                algorithm,
                SortAlgorithm::Bubble | SortAlgorithm::Selection | SortAlgorithm::Insertion
            );
            if n > 1_000 && quadratic {
                continue;
            }
            group.bench_with_input(BenchmarkId::new(algorithm.name(), n), &input, |b, input| {
                b.iter_batched(
                    || input.clone(),
                    |mut data| {
                        algorithm.sort(&mut data);
                        black_box(data)
                    },
                    BatchSize::SmallInput,
                )
            });
        }
    }

    group.finish();
}

/// Benchmark on presorted and reversed input, the quick sort worst case
fn benchmark_presorted(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort_presorted");
    group.sample_size(20);

    let n = 1_000u32;
    let sorted: Vec<u32> = (0..n).collect();
    let reversed: Vec<u32> = (0..n).rev().collect();

    for algorithm in SortAlgorithm::ALL {
        group.bench_with_input(BenchmarkId::new(algorithm.name(), "sorted"), &sorted, |b, input| {
            b.iter_batched(
                || input.clone(),
                |mut data| {
                    algorithm.sort(&mut data);
                    black_box(data)
                },
                BatchSize::SmallInput,
            )
        });
        group.bench_with_input(BenchmarkId::new(algorithm.name(), "reversed"), &reversed, |b, input| {
            b.iter_batched(
                || input.clone(),
                |mut data| {
                    algorithm.sort(&mut data);
                    black_box(data)
                },
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

fn benchmark_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");

    let mut data = random_input(100_000, 54321);
    data.sort();
    let keys: Vec<u32> = random_input(256, 999);

    group.bench_function("linear", |b| {
        b.iter(|| {
            keys.iter()
                .filter(|&k| linear_search(&data, k).is_some())
                .count()
        })
    });

    group.bench_function("binary_iterative", |b| {
        b.iter(|| {
            keys.iter()
                .filter(|&k| binary_search(&data, k).is_some())
                .count()
        })
    });

    group.bench_function("binary_recursive", |b| {
        b.iter(|| {
            keys.iter()
                .filter(|&k| binary_search_recursive(&data, k).is_some())
                .count()
        })
    });

    group.finish();
}

criterion_group!(benches, benchmark_random, benchmark_presorted, benchmark_search);

criterion_main!(benches);
