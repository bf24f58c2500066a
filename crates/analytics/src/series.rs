//! Chart-ready series points.

use chrono::NaiveDate;
use serde::Serialize;

/// One observed point of a waste trend line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub waste_kg: f64,
}

/// One extrapolated point of a waste forecast. May be negative for a
/// declining trend; predictions are never clamped.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ForecastPoint {
    pub date: NaiveDate,
    pub predicted_waste_kg: f64,
}
