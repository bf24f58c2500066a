// ---------------------------------------------------------------------------
// AnalyticsError: typed failures for loading and querying waste records
// ---------------------------------------------------------------------------

use std::path::PathBuf;

use thiserror::Error;

/// Result alias for engine queries.
pub type Result<T> = std::result::Result<T, AnalyticsError>;

/// Errors surfaced by the record store and the trend/forecast engine.
///
/// None of these are fatal: a failed query leaves the loaded records intact
/// and the engine usable for the next call.
#[derive(Debug, Error)]
pub enum AnalyticsError {
    /// The record source could not be loaded.
    #[error("failed to load waste records: {0}")]
    DataLoad(#[from] DataLoadError),
    /// A summary or distribution was requested for a zone with no records.
    #[error("zone `{zone}` has no records")]
    EmptyZone { zone: String },
    /// A forecast needs at least two distinct observation days.
    #[error(
        "zone `{zone}` has {distinct_days} distinct day(s) of data; at least 2 are needed to fit a trend"
    )]
    InsufficientData { zone: String, distinct_days: usize },
    /// The forecast horizon is not a positive whole number of days.
    #[error("forecast horizon must be a positive whole number of days, got `{input}`")]
    InvalidHorizon { input: String },
}

/// Reasons a CSV record source is rejected. Loading is all-or-nothing.
#[derive(Debug, Error)]
pub enum DataLoadError {
    /// The file is missing or unreadable.
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Structural CSV problem (bad quoting, ragged rows, invalid UTF-8).
    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),
    /// The header row lacks one of the required columns.
    #[error("missing required column `{0}`")]
    MissingColumn(&'static str),
    /// A `Date` cell is not a recognizable calendar date.
    #[error("line {line}: cannot parse date `{value}`")]
    InvalidDate { line: u64, value: String },
    /// A numeric cell is empty, non-numeric, or not finite.
    #[error("line {line}: column `{column}` is not a finite number: `{value}`")]
    InvalidNumber {
        line: u64,
        column: &'static str,
        value: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_zone_display_names_zone() {
        let err = AnalyticsError::EmptyZone {
            zone: "Harbor".to_string(),
        };
        let msg = format!("{err}");
        assert!(msg.contains("Harbor"), "got: {msg}");
    }

    #[test]
    fn test_insufficient_data_display_reports_count() {
        let err = AnalyticsError::InsufficientData {
            zone: "South".to_string(),
            distinct_days: 1,
        };
        let msg = format!("{err}");
        assert!(msg.contains("South"), "got: {msg}");
        assert!(msg.contains("1 distinct"), "got: {msg}");
    }

    #[test]
    fn test_data_load_wraps_source() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: AnalyticsError = DataLoadError::Io {
            path: PathBuf::from("missing.csv"),
            source: io,
        }
        .into();
        assert!(matches!(err, AnalyticsError::DataLoad(DataLoadError::Io { .. })));
        let msg = format!("{err}");
        assert!(msg.contains("missing.csv"), "got: {msg}");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_invalid_number_display() {
        let err = DataLoadError::InvalidNumber {
            line: 4,
            column: "Waste_kg",
            value: "heavy".to_string(),
        };
        let msg = format!("{err}");
        assert!(msg.contains("line 4"), "got: {msg}");
        assert!(msg.contains("Waste_kg"), "got: {msg}");
        assert!(msg.contains("heavy"), "got: {msg}");
    }
}
