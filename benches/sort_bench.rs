//! Benchmark for the stable insertion sort.
//!
//! The sort is O(n²) by design; this benchmark tracks the constant factor and
//! compares against std's stable sort as a baseline.

use consfold::sequence::Sequence;
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn benchmark_sorted(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("sorted");

    for size in [10, 100, 1000] {
        // Pseudo-shuffled input: multiply-and-wrap spreads values around.
        let sequence: Sequence<i64> = (0..size).map(|x| (x * 37) % size).collect();
        let vector: Vec<i64> = (0..size).map(|x| (x * 37) % size).collect();

        group.bench_with_input(
            BenchmarkId::new("Sequence_sorted", size),
            &size,
            |bencher, _| {
                bencher.iter(|| black_box(sequence.sorted()));
            },
        );

        group.bench_with_input(
            BenchmarkId::new("Vec_sort_stable", size),
            &size,
            |bencher, _| {
                bencher.iter(|| {
                    let mut copy = vector.clone();
                    copy.sort();
                    black_box(copy)
                });
            },
        );
    }

    group.finish();
}

fn benchmark_sorted_by_key(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("sorted_by_key");

    for size in [10, 100, 1000] {
        let sequence: Sequence<i64> = (0..size).map(|x| (x * 37) % size).collect();

        group.bench_with_input(
            BenchmarkId::new("Sequence_sorted_by_key", size),
            &size,
            |bencher, _| {
                bencher.iter(|| black_box(sequence.sorted_by_key(|x| -x)));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, benchmark_sorted, benchmark_sorted_by_key);
criterion_main!(benches);
