use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mazegen::{generate, Location, MazeConfig};

fn config(size: usize) -> MazeConfig {
    MazeConfig::new(size, size)
        .with_placement(Location::TopLeft, Location::Anywhere)
        .with_seed(42)
}

fn bench_generate(c: &mut Criterion, size: usize) {
    let config = config(size);

    c.bench_function(&format!("generate_{}", size), |b| {
        b.iter(|| generate(black_box(&config)).unwrap())
    });
}

fn bench_solve(c: &mut Criterion, size: usize) {
    let maze = generate(&config(size)).unwrap();

    c.bench_function(&format!("solve_{}", size), |b| {
        b.iter(|| {
            let path = black_box(&maze).solution();
            assert!(path.is_some());
        })
    });
}

pub fn maze_small(c: &mut Criterion) {
    bench_generate(c, 31);
    bench_solve(c, 31);
}

pub fn maze_medium(c: &mut Criterion) {
    bench_generate(c, 128);
    bench_solve(c, 128);
}

pub fn maze_large(c: &mut Criterion) {
    bench_generate(c, 511);
    bench_solve(c, 511);
}

criterion_group!(benches, maze_small, maze_medium, maze_large);
criterion_main!(benches);
