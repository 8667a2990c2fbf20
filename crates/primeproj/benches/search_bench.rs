use criterion::{black_box, criterion_group, criterion_main, Criterion};
use primeproj::api::{
    evaluate, generate, search, GenCfg, GridSpec, RationalTier, RotationConfig, SearchCfg,
};

fn bench_evaluate(c: &mut Criterion) {
    let verts = generate("trunctet_icosa", &GenCfg::default()).unwrap();
    let rotation = RotationConfig::Three([0.37, 0.12, 0.81]);
    c.bench_function("evaluate_trunctet_icosa", |b| {
        b.iter(|| evaluate(black_box(&verts), black_box(&rotation)));
    });
}

fn bench_small_sweep(c: &mut Criterion) {
    let cfg = SearchCfg {
        grid: GridSpec::Rational {
            tier: RationalTier::Golden,
        },
        targets: vec![5, 7],
        ..SearchCfg::default()
    };
    c.bench_function("sweep_trunctet_golden_tier", |b| {
        b.iter(|| search(black_box("truncated_tetrahedron"), black_box(&cfg)));
    });
}

criterion_group!(benches, bench_evaluate, bench_small_sweep);
criterion_main!(benches);
