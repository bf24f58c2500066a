//! One row of waste-collection data and the rules for reading its cells.

use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

// ---------------------------------------------------------------------------
// Source columns
// ---------------------------------------------------------------------------

pub const DATE_COLUMN: &str = "Date";
pub const ZONE_COLUMN: &str = "Area";
pub const WASTE_COLUMN: &str = "Waste_kg";
pub const BIODEGRADABLE_COLUMN: &str = "Biodegradable_percent";
pub const NON_BIODEGRADABLE_COLUMN: &str = "Non_Biodegradable_percent";

/// Every column a record source must provide, in canonical order.
pub const REQUIRED_COLUMNS: [&str; 5] = [
    DATE_COLUMN,
    ZONE_COLUMN,
    WASTE_COLUMN,
    BIODEGRADABLE_COLUMN,
    NON_BIODEGRADABLE_COLUMN,
];

/// Plain calendar-date layouts, tried in order.
const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];

/// Date-time layouts whose time part is discarded.
const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

// ---------------------------------------------------------------------------
// WasteRecord
// ---------------------------------------------------------------------------

/// A single collection observation for one zone on one day.
///
/// The two percentage fields are kept exactly as read. They are not required
/// to sum to 100 and are never normalized.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WasteRecord {
    pub date: NaiveDate,
    pub zone: String,
    pub waste_kg: f64,
    pub biodegradable_percent: f64,
    pub non_biodegradable_percent: f64,
}

impl WasteRecord {
    pub fn new(
        date: NaiveDate,
        zone: impl Into<String>,
        waste_kg: f64,
        biodegradable_percent: f64,
        non_biodegradable_percent: f64,
    ) -> Self {
        Self {
            date,
            zone: zone.into(),
            waste_kg,
            biodegradable_percent,
            non_biodegradable_percent,
        }
    }
}

/// Parse a `Date` cell.
///
/// Accepts ISO dates, slash-separated dates (year-first or month-first) and
/// ISO date-times, returning `None` for anything else.
pub fn parse_record_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
                .map(|dt| dt.date())
        })
}

/// Parse a numeric cell. Empty, non-numeric and non-finite values are rejected.
pub fn parse_quantity(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}
