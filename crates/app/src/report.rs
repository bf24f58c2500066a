//! Report assembly.
//!
//! Every section is computed independently. A failing query is logged and
//! recorded in place as [`Section::Failed`]; the rest of the report still
//! renders.

use std::fmt::Display;
use std::path::PathBuf;

use analytics::{ForecastPoint, TrendPoint, WasteAnalytics, WasteDistribution, ZoneSummary};
use chrono::NaiveDate;
use classifier::{ClassificationResult, ColorHeuristicClassifier};
use serde::Serialize;

use crate::config::ReportConfig;

// ---------------------------------------------------------------------------
// Section
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Section<T> {
    Ok(T),
    Failed { error: String },
}

impl<T> Section<T> {
    /// Wrap a query result, logging the failure under `what`.
    pub fn capture<E: Display>(what: &str, subject: &str, result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Section::Ok(value),
            Err(err) => {
                tracing::warn!(section = what, subject, error = %err, "report section failed");
                Section::Failed {
                    error: err.to_string(),
                }
            }
        }
    }

    pub fn ok(&self) -> Option<&T> {
        match self {
            Section::Ok(value) => Some(value),
            Section::Failed { .. } => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Report
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct ZoneReport {
    pub zone: String,
    pub summary: Section<ZoneSummary>,
    pub distribution: Section<WasteDistribution>,
    pub trend: Vec<TrendPoint>,
    pub forecast: Section<Vec<ForecastPoint>>,
}

impl ZoneReport {
    fn build(analytics: &WasteAnalytics, config: &ReportConfig, zone: &str) -> Self {
        let forecast = config
            .forecast_horizon()
            .and_then(|horizon| analytics.forecast_with(zone, horizon));
        Self {
            zone: zone.to_string(),
            summary: Section::capture("summary", zone, analytics.zone_summary(zone)),
            distribution: Section::capture(
                "distribution",
                zone,
                analytics.waste_distribution(zone),
            ),
            trend: analytics.trend_series(Some(zone)),
            forecast: Section::capture("forecast", zone, forecast),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ImageReport {
    pub path: PathBuf,
    pub result: Section<ClassificationResult>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub source: PathBuf,
    pub record_count: usize,
    pub date_range: Option<(NaiveDate, NaiveDate)>,
    /// Cross-zone daily totals, sorted by date.
    pub overall_trend: Vec<TrendPoint>,
    pub zones: Vec<ZoneReport>,
    pub classifications: Vec<ImageReport>,
}

impl Report {
    pub fn build(
        analytics: &WasteAnalytics,
        config: &ReportConfig,
        classifier: &mut ColorHeuristicClassifier,
    ) -> Self {
        let zones: Vec<String> = match &config.zone {
            Some(zone) => vec![zone.clone()],
            None => analytics.zones().to_vec(),
        };

        let classifications = config
            .images
            .iter()
            .map(|path| {
                let subject = path.display().to_string();
                let result = classifier.classify_path(path);
                ImageReport {
                    path: path.clone(),
                    result: Section::capture("classification", &subject, result),
                }
            })
            .collect();

        let store = analytics.store();
        Self {
            source: config.data_path.clone(),
            record_count: store.len(),
            date_range: store.date_range(),
            overall_trend: analytics.trend_series(None),
            zones: zones
                .iter()
                .map(|zone| ZoneReport::build(analytics, config, zone))
                .collect(),
            classifications,
        }
    }

    /// Number of sections that could not be computed.
    pub fn failed_sections(&self) -> usize {
        let zone_failures: usize = self
            .zones
            .iter()
            .map(|z| {
                [
                    z.summary.ok().is_none(),
                    z.distribution.ok().is_none(),
                    z.forecast.ok().is_none(),
                ]
                .into_iter()
                .filter(|failed| *failed)
                .count()
            })
            .sum();
        let image_failures = self
            .classifications
            .iter()
            .filter(|c| c.result.ok().is_none())
            .count();
        zone_failures + image_failures
    }
}
