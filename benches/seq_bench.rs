//! Benchmark for Seq combinator chains vs standard iterators.
//!
//! Compares push-style sequences against the equivalent `std::iter` pipelines
//! for streaming, short-circuiting and materializing workloads.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use lazyseq::Seq;
use std::hint::black_box;

// =============================================================================
// map/filter/sum Benchmark
// =============================================================================

fn benchmark_map_filter_fold(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("map_filter_fold");

    for size in [100, 1000, 10000] {
        let sequence = Seq::naturals_below(size);

        // Seq pipeline
        group.bench_with_input(BenchmarkId::new("Seq", size), &size, |bencher, _| {
            bencher.iter(|| {
                let total = sequence
                    .map(|n| n * 3)
                    .filter(|n| n % 2 == 0)
                    .fold_left(0_i64, |acc, n| acc + n);
                black_box(total)
            });
        });

        // Iterator pipeline
        group.bench_with_input(BenchmarkId::new("Iterator", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let total: i64 = (0..size).map(|n| n * 3).filter(|n| n % 2 == 0).sum();
                black_box(total)
            });
        });
    }

    group.finish();
}

// =============================================================================
// take on an infinite source Benchmark
// =============================================================================

fn benchmark_take_infinite(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("take_infinite");

    for count in [100, 1000, 10000] {
        // Seq take (stop signal)
        group.bench_with_input(BenchmarkId::new("Seq", count), &count, |bencher, &count| {
            bencher.iter(|| black_box(Seq::naturals().take(count).to_list()));
        });

        // Iterator take
        group.bench_with_input(BenchmarkId::new("Iterator", count), &count, |bencher, &count| {
            bencher.iter(|| black_box((0_i64..).take(count).collect::<Vec<_>>()));
        });
    }

    group.finish();
}

// =============================================================================
// flat_map Benchmark
// =============================================================================

fn benchmark_flat_map(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("flat_map");

    for size in [100, 1000] {
        let sequence = Seq::naturals_below(size);

        group.bench_with_input(BenchmarkId::new("Seq", size), &size, |bencher, _| {
            bencher.iter(|| {
                let length = sequence.flat_map(|n| Seq::naturals_below(n % 8)).length();
                black_box(length)
            });
        });

        group.bench_with_input(BenchmarkId::new("Iterator", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let length = (0..size).flat_map(|n| 0..(n % 8)).count();
                black_box(length)
            });
        });
    }

    group.finish();
}

// =============================================================================
// sort / distinct Benchmark
// =============================================================================

fn benchmark_materialize(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("materialize");

    for size in [1000, 10000] {
        let scrambled: Vec<i64> = (0..size).map(|n| (n * 7_919) % size).collect();
        let sequence = Seq::of(scrambled.clone());

        group.bench_with_input(BenchmarkId::new("Seq_sort", size), &size, |bencher, _| {
            bencher.iter(|| black_box(sequence.sort().to_list()));
        });

        group.bench_with_input(BenchmarkId::new("Vec_sort", size), &size, |bencher, _| {
            bencher.iter(|| {
                let mut sorted = scrambled.clone();
                sorted.sort();
                black_box(sorted)
            });
        });

        group.bench_with_input(BenchmarkId::new("Seq_distinct", size), &size, |bencher, _| {
            bencher.iter(|| black_box(sequence.map(|n| n % 64).distinct().length()));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_map_filter_fold,
    benchmark_take_infinite,
    benchmark_flat_map,
    benchmark_materialize
);
criterion_main!(benches);
