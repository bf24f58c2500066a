//! Extend a zone's fitted trend past its latest observation.

use std::collections::BTreeSet;

use chrono::{Days, NaiveDate};

use super::constants::MIN_DISTINCT_DAYS;
use super::horizon::ForecastHorizon;
use super::regression::LinearFit;
use crate::error::{AnalyticsError, Result};
use crate::record::WasteRecord;
use crate::series::ForecastPoint;

/// Forecast `horizon` days of waste for one zone.
///
/// `records` are the zone's rows in any order. Point `i` (1-based) lands on
/// the latest observed date plus `i` days and predicts day offset
/// `last_offset + i`.
pub fn forecast_zone<'a>(
    zone: &str,
    records: impl IntoIterator<Item = &'a WasteRecord>,
    horizon: ForecastHorizon,
) -> Result<Vec<ForecastPoint>> {
    let observations: Vec<(NaiveDate, f64)> =
        records.into_iter().map(|r| (r.date, r.waste_kg)).collect();

    let distinct_days = observations
        .iter()
        .map(|(date, _)| *date)
        .collect::<BTreeSet<_>>();
    let insufficient = || AnalyticsError::InsufficientData {
        zone: zone.to_string(),
        distinct_days: distinct_days.len(),
    };
    if distinct_days.len() < MIN_DISTINCT_DAYS {
        return Err(insufficient());
    }
    let (Some(&first), Some(&last)) = (distinct_days.first(), distinct_days.last()) else {
        return Err(insufficient());
    };

    let invalid_horizon = || AnalyticsError::InvalidHorizon {
        input: horizon.to_string(),
    };
    // The last forecast date must exist before any point is built.
    last
        .checked_add_days(Days::new(u64::from(horizon.days())))
        .ok_or_else(invalid_horizon)?;

    let points: Vec<(f64, f64)> = observations
        .iter()
        .map(|(date, waste)| (day_offset(first, *date) as f64, *waste))
        .collect();
    let fit = LinearFit::fit(&points).ok_or_else(insufficient)?;
    let last_offset = day_offset(first, last);

    tracing::debug!(
        zone,
        intercept = fit.intercept(),
        slope = fit.slope(),
        horizon = horizon.days(),
        "fitted waste trend"
    );

    (1..=horizon.days())
        .map(|i| -> Result<ForecastPoint> {
            let date = last
                .checked_add_days(Days::new(u64::from(i)))
                .ok_or_else(invalid_horizon)?;
            Ok(ForecastPoint {
                date,
                predicted_waste_kg: fit.predict((last_offset + i64::from(i)) as f64),
            })
        })
        .collect()
}

/// Whole days from `origin` to `date`.
fn day_offset(origin: NaiveDate, date: NaiveDate) -> i64 {
    date.signed_duration_since(origin).num_days()
}
