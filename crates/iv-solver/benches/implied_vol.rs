//! Single-strike inversion timings for the two pricing engines.

use criterion::{criterion_group, criterion_main, Criterion};
use iv_solver::{EngineKind, ImpliedVolSolver, SolverConfig};
use std::hint::black_box;

fn bench_implied_vol(c: &mut Criterion) {
    let analytic = ImpliedVolSolver::new(
        151.76,
        0.04,
        0.0465753,
        0.0061,
        250,
        1e-3,
        SolverConfig::default(),
    )
    .unwrap();
    let lattice = ImpliedVolSolver::new(
        151.76,
        0.04,
        0.0465753,
        0.0061,
        250,
        1e-3,
        SolverConfig {
            engine: EngineKind::BinomialTree,
            ..SolverConfig::default()
        },
    )
    .unwrap();

    c.bench_function("implied_vol/black_scholes", |b| {
        b.iter(|| analytic.implied_vol(black_box(138.0), black_box(15.575)).unwrap())
    });

    c.bench_function("implied_vol/binomial_250_steps", |b| {
        b.iter(|| lattice.implied_vol(black_box(138.0), black_box(15.575)).unwrap())
    });
}

criterion_group!(benches, bench_implied_vol);
criterion_main!(benches);
