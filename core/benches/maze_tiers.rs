use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use mazesight_core::*;

const SIZES: [Coord; 4] = [5, 20, 50, 100];

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");

    for size in SIZES {
        group.throughput(Throughput::Elements(u64::from(square(size))));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter(|| BacktrackingGenerator::new(black_box(7)).generate(size));
        });
    }
    group.finish();
}

fn bench_trace(c: &mut Criterion) {
    let mut group = c.benchmark_group("trace_boundary");

    for size in SIZES {
        let config = MazeConfig::new(size, 0.25).unwrap();
        let grid = BacktrackingGenerator::new(7).generate(size);
        group.throughput(Throughput::Elements(u64::from(config.total_cells())));
        group.bench_with_input(BenchmarkId::from_parameter(size), &grid, |b, grid| {
            b.iter(|| trace_boundary(black_box(grid), config.margin, config.axis_tolerance()));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_generate, bench_trace);
criterion_main!(benches);
