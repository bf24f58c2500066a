//! Criterion benchmarks for the analytics engine.
//!
//! Benchmarks:
//!   - zone_summary over a 5-zone, 1-year store
//!   - trend_series(None) daily totals
//!   - 30-day forecast for one zone
//!
//! Run with: cargo bench -p analytics --bench forecast_bench

use chrono::{Days, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use analytics::{RecordStore, WasteAnalytics, WasteRecord};

const ZONES: [&str; 5] = ["North", "South", "East", "West", "Central"];
const DAYS: u64 = 365;

fn build_engine() -> WasteAnalytics {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let mut records = Vec::with_capacity(ZONES.len() * DAYS as usize);
    for d in 0..DAYS {
        let date = start.checked_add_days(Days::new(d)).unwrap();
        for (i, zone) in ZONES.iter().enumerate() {
            let waste = 200.0 + 15.0 * i as f64 + 0.4 * d as f64 + (d % 7) as f64;
            records.push(WasteRecord::new(date, *zone, waste, 55.0, 45.0));
        }
    }
    WasteAnalytics::new(RecordStore::from_records(records))
}

// ---------------------------------------------------------------------------
// Benchmark: aggregation
// ---------------------------------------------------------------------------

fn bench_aggregation(c: &mut Criterion) {
    let engine = build_engine();
    let mut group = c.benchmark_group("analytics_aggregation");

    group.bench_function("zone_summary", |b| {
        b.iter(|| black_box(engine.zone_summary(black_box("East"))))
    });

    group.bench_function("daily_totals", |b| {
        b.iter(|| black_box(engine.trend_series(black_box(None))))
    });

    group.finish();
}

// ---------------------------------------------------------------------------
// Benchmark: forecast
// ---------------------------------------------------------------------------

fn bench_forecast(c: &mut Criterion) {
    let engine = build_engine();
    let mut group = c.benchmark_group("analytics_forecast");

    group.bench_function("forecast_30_days", |b| {
        b.iter(|| black_box(engine.forecast(black_box("Central"), black_box(30))))
    });

    group.finish();
}

criterion_group!(benches, bench_aggregation, bench_forecast);
criterion_main!(benches);
