//! Criterion benchmarks for the finboard series pipeline.
//!
//! Measures generation, range filtering and monthly aggregation over
//! series of increasing length, plus a full nine-series dashboard build.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use finboard_core::clock::FixedClock;
use finboard_core::types::{DataPoint, Date, DateRange, Series};
use finboard_series::prelude::*;

fn anchor() -> Date {
    Date::from_ymd(2024, 10, 19).unwrap()
}

/// Daily series of `n` points starting on 2000-01-01.
fn daily_series(n: usize) -> Series {
    let start = Date::from_ymd(2000, 1, 1).unwrap();
    (0..n)
        .map(|i| {
            DataPoint::new(
                start.add_days(i as u64).unwrap(),
                1_000.0 + (i as f64 * 0.1).sin() * 50.0,
            )
        })
        .collect()
}

/// Benchmark one-year series generation.
fn bench_generate(c: &mut Criterion) {
    let generator = TimeSeriesGenerator::new(FixedClock::new(anchor()));
    let params = GeneratorParams::new(75_000.0).with_variance(0.15).with_trend(0.05);

    c.bench_function("generate_one_year", |b| {
        let mut rng = SeriesRng::from_seed(42);
        b.iter(|| generator.generate(black_box(&params), &mut rng).unwrap());
    });

    c.bench_function("generate_dashboard", |b| {
        let mut rng = SeriesRng::from_seed(42);
        b.iter(|| DashboardData::generate(black_box(&generator), &mut rng).unwrap());
    });
}

/// Benchmark filtering and aggregation across series sizes.
fn bench_filter_aggregate(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_aggregate");

    for size in [365, 3650, 36500] {
        let series = daily_series(size);
        let range = DateRange::new(
            Date::from_ymd(2000, 3, 1).unwrap(),
            Date::from_ymd(2050, 1, 1).unwrap(),
        );

        group.bench_with_input(BenchmarkId::new("filter", size), &series, |b, series| {
            b.iter(|| filter_by_range(black_box(series), black_box(&range)));
        });

        group.bench_with_input(BenchmarkId::new("aggregate", size), &series, |b, series| {
            b.iter(|| aggregate_monthly(black_box(series)));
        });

        group.bench_with_input(BenchmarkId::new("pipeline", size), &series, |b, series| {
            b.iter(|| label_by_month(&aggregate_monthly(&filter_by_range(series, &range))));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_generate, bench_filter_aggregate);
criterion_main!(benches);
