//! Waste-collection analytics: a read-only record store indexed by zone, plus
//! per-zone summaries, trend series and a naive linear forecast.

pub mod engine;
pub mod error;
pub mod forecast;
pub mod record;
pub mod record_store;
pub mod series;
pub mod summary;

pub use engine::WasteAnalytics;
pub use error::{AnalyticsError, DataLoadError, Result};
pub use forecast::{ForecastHorizon, LinearFit};
pub use record::WasteRecord;
pub use record_store::RecordStore;
pub use series::{ForecastPoint, TrendPoint};
pub use summary::{WasteDistribution, ZoneSummary};
