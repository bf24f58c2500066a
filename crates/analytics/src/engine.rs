//! Query surface consumed by the report layer.
//!
//! [`WasteAnalytics`] owns the loaded [`RecordStore`] and answers every
//! question about it with a fresh computation. Nothing is cached and nothing
//! is mutated after load, so a failed query never affects the next one.

use std::path::Path;

use crate::error::Result;
use crate::forecast::{forecast_zone, ForecastHorizon};
use crate::record_store::RecordStore;
use crate::series::{ForecastPoint, TrendPoint};
use crate::summary::{WasteDistribution, ZoneSummary};


#[derive(Debug, Clone, Default)]
pub struct WasteAnalytics {
    store: RecordStore,
}

impl WasteAnalytics {
    pub fn new(store: RecordStore) -> Self {
        Self { store }
    }

    /// Load a CSV record source and wrap it in an engine.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::new(RecordStore::load(path)?))
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    /// Zone names in first-seen order.
    pub fn zones(&self) -> &[String] {
        self.store.zones()
    }

    pub fn zone_summary(&self, zone: &str) -> Result<ZoneSummary> {
        ZoneSummary::from_records(zone, self.store.records_for(zone))
    }

    /// Mean biodegradable / non-biodegradable percentages for `zone`.
    pub fn waste_distribution(&self, zone: &str) -> Result<WasteDistribution> {
        let summary = self.zone_summary(zone)?;
        Ok(WasteDistribution::from(&summary))
    }

    /// Waste over time.
    ///
    /// With a zone, returns that zone's own points in source order (the source
    /// is expected to be chronological already and is not re-sorted). Without
    /// one, returns cross-zone daily totals sorted by date.
    pub fn trend_series(&self, zone: Option<&str>) -> Vec<TrendPoint> {
        match zone {
            Some(zone) => self
                .store
                .records_for(zone)
                .map(|r| TrendPoint {
                    date: r.date,
                    waste_kg: r.waste_kg,
                })
                .collect(),
            None => self.store.all_records_by_date(),
        }
    }

    /// Forecast `horizon_days` of waste for `zone`. The horizon is validated
    /// before the zone's data is examined.
    pub fn forecast(&self, zone: &str, horizon_days: i64) -> Result<Vec<ForecastPoint>> {
        let horizon = ForecastHorizon::new(horizon_days)?;
        self.forecast_with(zone, horizon)
    }

    pub fn forecast_with(&self, zone: &str, horizon: ForecastHorizon) -> Result<Vec<ForecastPoint>> {
        forecast_zone(zone, self.store.records_for(zone), horizon)
    }
}
