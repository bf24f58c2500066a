//! Per-zone aggregates, recomputed on every query.

use serde::Serialize;

use crate::error::{AnalyticsError, Result};
use crate::record::WasteRecord;

/// Display labels for the two waste categories.
pub const BIODEGRADABLE_LABEL: &str = "Biodegradable";
pub const NON_BIODEGRADABLE_LABEL: &str = "Non-Biodegradable";

/// Totals and means for one zone.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ZoneSummary {
    pub zone: String,
    pub record_count: usize,
    pub total_waste_kg: f64,
    pub mean_waste_kg: f64,
    pub mean_biodegradable_percent: f64,
    pub mean_non_biodegradable_percent: f64,
}

impl ZoneSummary {
    /// Aggregate `records`, which must all belong to `zone`.
    ///
    /// Means over zero records are undefined, so an empty input is an
    /// [`AnalyticsError::EmptyZone`] rather than a row of NaNs.
    pub fn from_records<'a>(
        zone: &str,
        records: impl IntoIterator<Item = &'a WasteRecord>,
    ) -> Result<Self> {
        let mut count = 0usize;
        let mut total_waste = 0.0_f64;
        let mut total_bio = 0.0_f64;
        let mut total_non_bio = 0.0_f64;

        for r in records {
            count += 1;
            total_waste += r.waste_kg;
            total_bio += r.biodegradable_percent;
            total_non_bio += r.non_biodegradable_percent;
        }

        if count == 0 {
            return Err(AnalyticsError::EmptyZone {
                zone: zone.to_string(),
            });
        }

        let n = count as f64;
        Ok(Self {
            zone: zone.to_string(),
            record_count: count,
            total_waste_kg: total_waste,
            mean_waste_kg: total_waste / n,
            mean_biodegradable_percent: total_bio / n,
            mean_non_biodegradable_percent: total_non_bio / n,
        })
    }
}

/// Biodegradable vs non-biodegradable split for pie rendering.
///
/// Values are the zone's mean percentages as given; they are not rescaled to
/// sum to 100.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WasteDistribution {
    #[serde(rename = "Biodegradable")]
    pub biodegradable: f64,
    #[serde(rename = "Non-Biodegradable")]
    pub non_biodegradable: f64,
}

impl WasteDistribution {
    /// `(label, value)` slices, biodegradable first.
    pub fn slices(&self) -> [(&'static str, f64); 2] {
        [
            (BIODEGRADABLE_LABEL, self.biodegradable),
            (NON_BIODEGRADABLE_LABEL, self.non_biodegradable),
        ]
    }
}

impl From<&ZoneSummary> for WasteDistribution {
    fn from(summary: &ZoneSummary) -> Self {
        Self {
            biodegradable: summary.mean_biodegradable_percent,
            non_biodegradable: summary.mean_non_biodegradable_percent,
        }
    }
}
