//! Criterion benchmarks of the factorization strategies.

#![allow(non_snake_case)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use cholbench::algebra::Matrix;
use cholbench::cholesky::{CholeskyFactorizer, CholeskySettingsBuilder};
use cholbench::harness::random_spd_matrix;

fn bench_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("cholesky");

    for n in [16, 64, 256, 512] {
        let M = random_spd_matrix::<f64>(n, 111970);
        let mut L = Matrix::<f64>::zeros((n, n));

        for strategy in ["sequential", "vectorized", "parallel"] {
            let settings = CholeskySettingsBuilder::<f64>::default()
                .strategy(strategy.to_string())
                .build()
                .unwrap();
            let factorizer = CholeskyFactorizer::new(settings).unwrap();

            group.bench_with_input(BenchmarkId::new(strategy, n), &n, |b, _| {
                b.iter(|| {
                    factorizer.factorize(black_box(&M), &mut L).unwrap();
                })
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_strategies);
criterion_main!(benches);
