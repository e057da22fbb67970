use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use mazesight_core::*;

fn bench_visibility(c: &mut Criterion) {
    let mut group = c.benchmark_group("visibility_polygon");

    for size in [5, 10, 20, 40] {
        let maze = Maze::random(MazeConfig::new(size, 0.25).unwrap(), 7).unwrap();
        let viewpoint = maze.start();
        group.bench_with_input(
            BenchmarkId::new("vertices", maze.polygon().len()),
            &maze,
            |b, maze| {
                b.iter(|| visibility_polygon(black_box(maze.polygon()), black_box(viewpoint)));
            },
        );
    }
    group.finish();
}

fn bench_engine_walk(c: &mut Criterion) {
    let maze = Maze::random(MazeConfig::default(), 7).unwrap();
    let steps: Vec<Point> = (0..64)
        .map(|i| {
            let t = f64::from(i) / 64.0;
            Point::new(0.1 + 0.05 * t, 0.1 + 0.8 * t)
        })
        .collect();

    c.bench_function("engine_walk_64", |b| {
        let mut engine = VisibilityEngine::new(&maze);
        b.iter(|| {
            for &step in &steps {
                black_box(engine.update(maze.polygon(), step));
            }
        });
    });
}

criterion_group!(benches, bench_visibility, bench_engine_walk);
criterion_main!(benches);
