//! Benchmarks for the particle swarm optimizer.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use enjambre::prelude::*;

fn sphere(x: &[f64]) -> f64 {
    x.iter().map(|xi| xi * xi).sum()
}

fn rastrigin(x: &[f64]) -> f64 {
    let n = x.len() as f64;
    10.0 * n
        + x.iter()
            .map(|xi| xi * xi - 10.0 * (2.0 * std::f64::consts::PI * xi).cos())
            .sum::<f64>()
}

fn bench_pso_sphere(c: &mut Criterion) {
    let mut group = c.benchmark_group("pso_sphere");

    for dim in [2, 5, 10].iter() {
        let space = SearchSpace::continuous(*dim, -5.0, 5.0);

        group.bench_with_input(BenchmarkId::from_parameter(dim), dim, |b, _| {
            b.iter(|| {
                let mut pso = ParticleSwarm::default().with_seed(42);
                pso.optimize(
                    black_box(&sphere),
                    black_box(&space),
                    Budget::Evaluations(2000),
                )
                .unwrap()
            });
        });
    }

    group.finish();
}

fn bench_pso_rastrigin(c: &mut Criterion) {
    let mut group = c.benchmark_group("pso_rastrigin");
    let space = SearchSpace::continuous(5, -5.12, 5.12);

    for informants in [2, 5, 10].iter() {
        group.bench_with_input(
            BenchmarkId::from_parameter(informants),
            informants,
            |b, &informants| {
                b.iter(|| {
                    let mut pso = ParticleSwarm::default()
                        .with_swarm_size(30)
                        .with_informants(informants)
                        .with_seed(42);
                    pso.optimize(
                        black_box(&rastrigin),
                        black_box(&space),
                        Budget::Evaluations(2000),
                    )
                    .unwrap()
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_pso_sphere, bench_pso_rastrigin);
criterion_main!(benches);
