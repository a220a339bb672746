//! Criterion micro-benchmarks for LinkedList end operations and traversal.

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use strata_bench::filled_list;
use strata_list::LinkedList;

/// Benchmark: 10K pushes alternating between front and back.
fn bench_push_both_ends_10k(c: &mut Criterion) {
    c.bench_function("list_push_both_ends_10k", |b| {
        b.iter(|| {
            let mut list = LinkedList::new();
            for i in 0..10_000u64 {
                if i % 2 == 0 {
                    list.push_front(i);
                } else {
                    list.push_back(i);
                }
            }
            black_box(list.len());
        });
    });
}

/// Benchmark: drain a 10K list from the front.
fn bench_pop_front_10k(c: &mut Criterion) {
    c.bench_function("list_pop_front_10k", |b| {
        b.iter_batched(
            || filled_list(10_000),
            |mut list| {
                while let Ok(v) = list.pop_front() {
                    black_box(v);
                }
            },
            BatchSize::LargeInput,
        );
    });
}

/// Benchmark: sum a 10K list by iteration.
fn bench_iter_sum_10k(c: &mut Criterion) {
    let list = filled_list(10_000);
    c.bench_function("list_iter_sum_10k", |b| {
        b.iter(|| black_box(list.iter().sum::<u64>()));
    });
}

criterion_group!(
    benches,
    bench_push_both_ends_10k,
    bench_pop_front_10k,
    bench_iter_sum_10k
);
criterion_main!(benches);
