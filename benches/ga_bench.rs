//! Criterion benchmarks for the GA engine and gradient descent.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use evogen::ga::{
    CountOnes, GaConfig, GaEngine, LinearEquation, RegressionFit, RouletteWheel,
};
use evogen::gd::{GdConfig, GdRunner};
use evogen::regression::Dataset;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn bench_equation(c: &mut Criterion) {
    let mut group = c.benchmark_group("ga_equation");
    for generations in [10usize, 50, 100] {
        group.bench_with_input(
            BenchmarkId::from_parameter(generations),
            &generations,
            |b, &generations| {
                b.iter(|| {
                    let config = GaConfig::equation()
                        .with_generations(generations)
                        .with_seed(42);
                    let engine = GaEngine::new(config, LinearEquation::classic()).unwrap();
                    black_box(engine.run().unwrap())
                })
            },
        );
    }
    group.finish();
}

fn bench_max_one(c: &mut Criterion) {
    c.bench_function("ga_max_one_100_gens", |b| {
        b.iter(|| {
            let config = GaConfig::max_one().with_generations(100).with_seed(42);
            black_box(GaEngine::new(config, CountOnes).unwrap().run().unwrap())
        })
    });
}

fn bench_regression(c: &mut Criterion) {
    c.bench_function("ga_regression_100_gens", |b| {
        b.iter(|| {
            let config = GaConfig::regression().with_generations(100).with_seed(42);
            black_box(
                GaEngine::new(config, RegressionFit::default())
                    .unwrap()
                    .run()
                    .unwrap(),
            )
        })
    });
}

fn bench_roulette(c: &mut Criterion) {
    let mut group = c.benchmark_group("roulette_select");
    for n in [10usize, 100, 1000] {
        let wheel = RouletteWheel::from_probabilities((0..n).map(|_| 1.0 / n as f64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            let mut rng = StdRng::seed_from_u64(42);
            b.iter(|| black_box(wheel.select(n, &mut rng)))
        });
    }
    group.finish();
}

fn bench_fit_linear(c: &mut Criterion) {
    let data = Dataset::sample();
    let config = GdConfig::regression();
    c.bench_function("gd_fit_linear_sample", |b| {
        b.iter(|| black_box(GdRunner::fit_linear(&data, &config).unwrap()))
    });
}

criterion_group!(
    benches,
    bench_equation,
    bench_max_one,
    bench_regression,
    bench_roulette,
    bench_fit_linear
);
criterion_main!(benches);
