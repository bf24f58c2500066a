//! Unit tests for forecast horizon validation.

use super::constants::*;
use super::horizon::ForecastHorizon;
use crate::error::AnalyticsError;

fn assert_invalid(result: Result<ForecastHorizon, AnalyticsError>, expected_input: &str) {
    match result {
        Err(AnalyticsError::InvalidHorizon { input }) => assert_eq!(input, expected_input),
        other => panic!("expected InvalidHorizon for {expected_input:?}, got {other:?}"),
    }
}

#[test]
fn test_default_horizon_is_a_week() {
    assert_eq!(DEFAULT_HORIZON_DAYS, 7);
    assert_eq!(ForecastHorizon::default().days(), 7);
}

#[test]
fn test_positive_days_accepted() {
    assert_eq!(ForecastHorizon::new(1).unwrap().days(), 1);
    assert_eq!(ForecastHorizon::try_from(30_i64).unwrap().days(), 30);
}

#[test]
fn test_zero_and_negative_rejected() {
    assert_invalid(ForecastHorizon::new(0), "0");
    assert_invalid(ForecastHorizon::new(-3), "-3");
}

#[test]
fn test_out_of_range_rejected() {
    assert_invalid(ForecastHorizon::new(i64::MAX), &i64::MAX.to_string());
}

#[test]
fn test_parse_whole_number() {
    assert_eq!("14".parse::<ForecastHorizon>().unwrap().days(), 14);
    assert_eq!(" 5 ".parse::<ForecastHorizon>().unwrap().days(), 5);
}

#[test]
fn test_parse_rejects_non_integers() {
    assert_invalid("7.5".parse(), "7.5");
    assert_invalid("seven".parse(), "seven");
    assert_invalid("".parse(), "");
    assert_invalid("0".parse(), "0");
    assert_invalid("-2".parse(), "-2");
}

#[test]
fn test_display_round_trips_day_count() {
    let h = ForecastHorizon::new(9).unwrap();
    assert_eq!(h.to_string(), "9");
}
