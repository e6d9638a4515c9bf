//! Benchmarks for parallel reductions across worker counts

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use shard_reduce::prelude::*;

fn bench_maximum(c: &mut Criterion) {
    let mut group = c.benchmark_group("maximum");
    let size = 1_000_000;
    let values: Vec<u64> = (0..size).map(|i| (i * 7_919) % 1_000_003).collect();

    group.throughput(Throughput::Elements(size));

    for workers in [1, 2, 4, 8].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(workers), workers, |b, &workers| {
            b.iter(|| {
                black_box(maximum(black_box(&values), workers, u64::cmp).unwrap());
            });
        });
    }

    group.finish();
}

fn bench_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("all");
    let size = 1_000_000;
    let values: Vec<u64> = (0..size).map(|i| i * 2).collect();

    group.throughput(Throughput::Elements(size));

    for workers in [1, 2, 4, 8].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(workers), workers, |b, &workers| {
            b.iter(|| {
                black_box(all(black_box(&values), workers, |x| x % 2 == 0).unwrap());
            });
        });
    }

    group.finish();
}

fn bench_small_input_overhead(c: &mut Criterion) {
    let mut group = c.benchmark_group("small_input_overhead");
    let values: Vec<u64> = (0..16).collect();

    // Worker count clamps to input length, so this measures spawn/join cost
    for workers in [1, 4, 16, 64].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(workers), workers, |b, &workers| {
            b.iter(|| {
                black_box(
                    reduce(
                        black_box(&values),
                        workers,
                        |shard| shard.iter().sum::<u64>(),
                        |sums| sums.into_iter().sum::<u64>(),
                    )
                    .unwrap(),
                );
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_maximum, bench_all, bench_small_input_overhead);

criterion_main!(benches);
