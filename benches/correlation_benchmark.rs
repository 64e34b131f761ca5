//! Benchmark for the correlation and imputation paths
//!
//! Run with: cargo bench --bench correlation_benchmark

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use polars::prelude::*;
use rand::prelude::*;
use rand::SeedableRng;

use medscope::engine::{correlation_matrix, impute, MethodAssignment};

/// Generate synthetic numeric data with a few correlated columns and a
/// controlled share of missing values.
fn generate_test_dataframe(n_rows: usize, n_features: usize, seed: u64) -> DataFrame {
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    let mut columns: Vec<Column> = Vec::with_capacity(n_features);

    for i in 0..n_features {
        let values: Vec<Option<f64>> = if i % 3 == 2 && i >= 3 {
            // Correlated with an earlier column plus noise
            columns[i - 3]
                .f64()
                .unwrap()
                .into_iter()
                .map(|v| Some(v.unwrap_or(50.0) + rng.gen::<f64>() * 10.0 - 5.0))
                .collect()
        } else {
            (0..n_rows)
                .map(|_| {
                    if rng.gen::<f64>() < 0.05 {
                        None
                    } else {
                        Some(rng.gen::<f64>() * 100.0)
                    }
                })
                .collect()
        };
        columns.push(Column::new(format!("feature_{}", i).into(), values));
    }

    DataFrame::new(columns).unwrap()
}

fn bench_correlation(c: &mut Criterion) {
    let mut group = c.benchmark_group("correlation_matrix");

    for &n_features in &[4usize, 8, 16] {
        let df = generate_test_dataframe(5_000, n_features, 42);
        group.bench_with_input(
            BenchmarkId::from_parameter(n_features),
            &df,
            |b, df| b.iter(|| correlation_matrix(black_box(df)).unwrap()),
        );
    }
    group.finish();
}

fn bench_impute(c: &mut Criterion) {
    let df = generate_test_dataframe(10_000, 8, 7);
    let assignment = MethodAssignment::defaults(&df, "feature_0").unwrap();

    c.bench_function("impute_defaults", |b| {
        b.iter(|| impute(black_box(&df), "feature_0", &assignment).unwrap())
    });
}

criterion_group!(benches, bench_correlation, bench_impute);
criterion_main!(benches);
