//! Unit tests for projecting a zone's trend into future days.

use chrono::{Days, NaiveDate};

use super::horizon::ForecastHorizon;
use super::projection::forecast_zone;
use crate::error::AnalyticsError;
use crate::record::WasteRecord;

fn base() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
}

fn day(offset: u64) -> NaiveDate {
    base().checked_add_days(Days::new(offset)).unwrap()
}

fn record(offset: u64, waste: f64) -> WasteRecord {
    WasteRecord::new(day(offset), "North", waste, 50.0, 50.0)
}

fn horizon(days: i64) -> ForecastHorizon {
    ForecastHorizon::new(days).unwrap()
}

// -------------------------------------------------------------------------
// Dates
// -------------------------------------------------------------------------

#[test]
fn test_returns_exactly_horizon_points() {
    let rows = [record(0, 100.0), record(1, 110.0), record(2, 120.0)];
    for n in [1, 3, 7, 30] {
        let points = forecast_zone("North", &rows, horizon(n)).unwrap();
        assert_eq!(points.len(), n as usize);
    }
}

#[test]
fn test_dates_are_consecutive_after_latest_observation() {
    // Source order is not chronological; the latest date is offset 9.
    let rows = [record(4, 5.0), record(9, 7.0), record(0, 1.0)];
    let points = forecast_zone("North", &rows, horizon(5)).unwrap();
    for (i, p) in points.iter().enumerate() {
        assert_eq!(p.date, day(10 + i as u64));
    }
}

#[test]
fn test_forecast_crosses_month_and_leap_day() {
    let start = NaiveDate::from_ymd_opt(2024, 2, 27).unwrap();
    let rows = [
        WasteRecord::new(start, "North", 10.0, 0.0, 0.0),
        WasteRecord::new(start.succ_opt().unwrap(), "North", 12.0, 0.0, 0.0),
    ];
    let points = forecast_zone("North", &rows, horizon(2)).unwrap();
    assert_eq!(points[0].date, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
    assert_eq!(points[1].date, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
}

// -------------------------------------------------------------------------
// Values
// -------------------------------------------------------------------------

#[test]
fn test_noiseless_line_is_extended_exactly() {
    let rows: Vec<WasteRecord> = (0..6)
        .map(|x| record(x, 10.0 * x as f64 + 5.0))
        .collect();
    let points = forecast_zone("North", &rows, horizon(4)).unwrap();
    for (i, p) in points.iter().enumerate() {
        let offset = 5.0 + (i + 1) as f64;
        let expected = 10.0 * offset + 5.0;
        assert!(
            (p.predicted_waste_kg - expected).abs() < 1e-9,
            "offset {offset}: expected {expected}, got {}",
            p.predicted_waste_kg
        );
    }
}

#[test]
fn test_offsets_count_from_earliest_date_with_gaps() {
    // Offsets 0, 2, 6 on the line y = 3x + 1; next prediction is offset 7.
    let rows = [record(2, 7.0), record(0, 1.0), record(6, 19.0)];
    let points = forecast_zone("North", &rows, horizon(1)).unwrap();
    assert_eq!(points[0].date, day(7));
    assert!((points[0].predicted_waste_kg - 22.0).abs() < 1e-9);
}

#[test]
fn test_declining_trend_is_not_clamped() {
    let rows = [record(0, 20.0), record(1, 10.0)];
    let points = forecast_zone("North", &rows, horizon(3)).unwrap();
    let last = points.last().unwrap();
    assert!((last.predicted_waste_kg - -30.0).abs() < 1e-9);
}

// -------------------------------------------------------------------------
// Failures
// -------------------------------------------------------------------------

#[test]
fn test_single_record_is_insufficient() {
    let rows = [record(0, 50.0)];
    let err = forecast_zone("South", &rows, horizon(7)).unwrap_err();
    assert!(
        matches!(err, AnalyticsError::InsufficientData { ref zone, distinct_days: 1 } if zone == "South"),
        "got: {err:?}"
    );
}

#[test]
fn test_same_day_records_are_insufficient() {
    let rows = [record(3, 50.0), record(3, 60.0), record(3, 70.0)];
    let err = forecast_zone("North", &rows, horizon(2)).unwrap_err();
    assert!(
        matches!(err, AnalyticsError::InsufficientData { distinct_days: 1, .. }),
        "got: {err:?}"
    );
}

#[test]
fn test_no_records_is_insufficient() {
    let err = forecast_zone("Ghost", std::iter::empty(), horizon(2)).unwrap_err();
    assert!(
        matches!(err, AnalyticsError::InsufficientData { distinct_days: 0, .. }),
        "got: {err:?}"
    );
}

#[test]
fn test_calendar_overflow_is_invalid_horizon() {
    let end = NaiveDate::MAX.pred_opt().unwrap();
    let rows = [
        WasteRecord::new(end.pred_opt().unwrap(), "North", 1.0, 0.0, 0.0),
        WasteRecord::new(end, "North", 2.0, 0.0, 0.0),
    ];
    let err = forecast_zone("North", &rows, horizon(5)).unwrap_err();
    assert!(
        matches!(err, AnalyticsError::InvalidHorizon { .. }),
        "got: {err:?}"
    );
}

#[test]
fn test_oversized_horizon_fails_before_projecting() {
    let rows = [record(0, 1.0), record(1, 2.0)];
    let started = std::time::Instant::now();
    let err = forecast_zone("North", &rows, horizon(200_000_000)).unwrap_err();
    assert!(
        matches!(err, AnalyticsError::InvalidHorizon { ref input } if input == "200000000"),
        "got: {err:?}"
    );
    assert!(started.elapsed() < std::time::Duration::from_millis(500));
}
