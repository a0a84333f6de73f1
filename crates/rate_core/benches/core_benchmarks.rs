//! Criterion benchmarks for rate_core sampling and lookup.
//!
//! Measures grid construction and sampled-curve lookup across grid sizes.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rate_core::math::interpolators::{Interpolator, LinearInterpolator};
use rate_core::math::sampling::utilization_grid;

/// Benchmark utilisation grid construction.
fn bench_utilization_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("utilization_grid");

    for size in [100, 1000, 10000] {
        group.bench_with_input(BenchmarkId::new("construction", size), &size, |b, &n| {
            b.iter(|| utilization_grid::<f64>(black_box(n)).unwrap());
        });
    }

    group.finish();
}

/// Benchmark clamped lookup on a sampled curve.
fn bench_clamped_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("clamped_lookup");

    for size in [100, 1000, 10000] {
        let xs = utilization_grid::<f64>(size).unwrap();
        let ys: Vec<f64> = xs.iter().map(|u| u * u * 1e-11).collect();
        let interp = LinearInterpolator::new(&xs, &ys).unwrap();

        group.bench_with_input(BenchmarkId::new("lookup_100", size), &interp, |b, interp| {
            let queries: Vec<f64> = (0..100).map(|i| i as f64 * 1.013 - 0.5).collect();
            b.iter(|| {
                for &u in &queries {
                    let _ = interp.interpolate_clamped(black_box(u));
                }
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_utilization_grid, bench_clamped_lookup);
criterion_main!(benches);
