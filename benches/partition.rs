//! Benchmarks for partition planning

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use shard_reduce::partition;

fn bench_partition_plan(c: &mut Criterion) {
    let mut group = c.benchmark_group("partition_plan");
    let len = 1_000_003;

    for workers in [1, 8, 64, 1024].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(workers), workers, |b, &workers| {
            b.iter(|| black_box(partition(black_box(len), workers).unwrap()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_partition_plan);

criterion_main!(benches);
