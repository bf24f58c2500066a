//! Linear waste forecasting.
//!
//! A zone's history is reduced to `(day_offset, waste_kg)` points, where the
//! offset counts days since the zone's earliest record. An ordinary
//! least-squares line through those points is extended one day at a time past
//! the zone's latest record.
//!
//! The fit is intentionally naive:
//! - every record is used, with no smoothing or outlier rejection
//! - predictions are not clamped, so a falling trend can go below zero
//! - at least two distinct observation days are required

pub mod constants;
pub mod horizon;
pub mod projection;
pub mod regression;

#[cfg(test)]
mod tests_horizon;
#[cfg(test)]
mod tests_projection;
#[cfg(test)]
mod tests_regression;

pub use constants::*;
pub use horizon::ForecastHorizon;
pub use projection::forecast_zone;
pub use regression::LinearFit;
