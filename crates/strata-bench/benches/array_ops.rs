//! Criterion micro-benchmarks for DynamicArray growth, insertion, and copy.

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use strata_array::DynamicArray;
use strata_bench::{filled_array, mixed_workload, replay};

/// Benchmark: 10K appends into a default-constructed array.
fn bench_push_back_10k(c: &mut Criterion) {
    c.bench_function("array_push_back_10k", |b| {
        b.iter(|| {
            let mut arr = DynamicArray::new();
            for i in 0..10_000u64 {
                arr.push_back(i).unwrap();
            }
            black_box(arr.len());
        });
    });
}

/// Benchmark: 10K appends after reserving the final capacity.
fn bench_push_back_reserved_10k(c: &mut Criterion) {
    c.bench_function("array_push_back_reserved_10k", |b| {
        b.iter(|| {
            let mut arr = DynamicArray::empty();
            arr.reserve(10_000).unwrap();
            for i in 0..10_000u64 {
                arr.push_back(i).unwrap();
            }
            black_box(arr.len());
        });
    });
}

/// Benchmark: insert at the front of a 1K array (worst-case shift).
fn bench_insert_front_1k(c: &mut Criterion) {
    c.bench_function("array_insert_front_1k", |b| {
        b.iter_batched(
            || filled_array(1_000),
            |mut arr| {
                arr.insert(0, 7).unwrap();
                black_box(arr)
            },
            BatchSize::SmallInput,
        );
    });
}

/// Benchmark: deep copy of a 10K array.
fn bench_clone_10k(c: &mut Criterion) {
    let arr = filled_array(10_000);
    c.bench_function("array_clone_10k", |b| {
        b.iter(|| black_box(arr.try_clone().unwrap()));
    });
}

/// Benchmark: seeded mixed workload of 4K operations.
fn bench_mixed_4k(c: &mut Criterion) {
    let ops = mixed_workload(4_096, 42);
    c.bench_function("array_mixed_4k", |b| {
        b.iter(|| {
            let mut arr = DynamicArray::new();
            black_box(replay(&mut arr, &ops));
        });
    });
}

criterion_group!(
    benches,
    bench_push_back_10k,
    bench_push_back_reserved_10k,
    bench_insert_front_1k,
    bench_clone_10k,
    bench_mixed_4k
);
criterion_main!(benches);
