//! Criterion benchmarks for matrix composition and batch point transforms.
//! Batch sizes: n in {1, 100, 10_000}.
//! Results: by default under target/criterion.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use vecla::matrix::{compose, transform};
use vecla::sample::{random_affine, random_vector, seeded, AffineBounds};
use vecla::{MatrixBuilder, Vec2};

fn random_points(n: usize, seed: u64) -> Vec<Vec2> {
    let mut rng = seeded(seed);
    (0..n).map(|_| random_vector(&mut rng, 100.0)).collect()
}

fn bench_compose(c: &mut Criterion) {
    let mut rng = seeded(41);
    let bounds = AffineBounds::default();
    let a = random_affine(&mut rng, &bounds);
    let b = random_affine(&mut rng, &bounds);
    c.bench_function("compose", |bench| {
        bench.iter(|| compose(criterion::black_box(&a), criterion::black_box(&b)))
    });
    c.bench_function("builder_chain4", |bench| {
        bench.iter(|| {
            MatrixBuilder::new()
                .rotate(criterion::black_box(1.5))
                .scale(3.2, 2.3)
                .shear(0.2, 0.3)
                .translate(10.0, 20.0)
                .done()
        })
    });
}

fn bench_transform(c: &mut Criterion) {
    let mut group = c.benchmark_group("transform");
    let m = random_affine(&mut seeded(42), &AffineBounds::default());
    for &n in &[1usize, 100, 10_000] {
        group.bench_with_input(BenchmarkId::new("points", n), &n, |b, &n| {
            b.iter_batched(
                || random_points(n, 43),
                |pts| pts.into_iter().map(|p| transform(p, &m)).collect::<Vec<_>>(),
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_compose, bench_transform);
criterion_main!(benches);
