use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use nalgebra::{vector, Vector2};
use primeproj::api::{analyze, convex_hull_2d};
use primeproj::hull;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_cloud(n: usize, seed: u64) -> Vec<Vector2<f64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| vector![rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0)])
        .collect()
}

fn bench_hull(c: &mut Criterion) {
    let mut group = c.benchmark_group("convex_hull_2d");
    for n in [16usize, 64, 256] {
        let cloud = random_cloud(n, 7);
        group.bench_with_input(BenchmarkId::from_parameter(n), &cloud, |b, cloud| {
            b.iter(|| convex_hull_2d(black_box(cloud), hull::cfg::MERGE_EPS));
        });
    }
    group.finish();
}

fn bench_analyze(c: &mut Criterion) {
    let cloud = random_cloud(64, 11);
    c.bench_function("analyze_64", |b| {
        b.iter(|| analyze(black_box(&cloud)));
    });
}

criterion_group!(benches, bench_hull, bench_analyze);
criterion_main!(benches);
