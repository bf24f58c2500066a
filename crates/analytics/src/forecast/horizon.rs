//! Validated forecast horizon.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::constants::DEFAULT_HORIZON_DAYS;
use crate::error::AnalyticsError;

/// Number of days to forecast. Always at least one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct ForecastHorizon(u32);

impl ForecastHorizon {
    /// Validate a day count. Zero, negative and out-of-range values are
    /// rejected with [`AnalyticsError::InvalidHorizon`].
    pub fn new(days: i64) -> Result<Self, AnalyticsError> {
        match u32::try_from(days) {
            Ok(d) if d > 0 => Ok(Self(d)),
            _ => Err(AnalyticsError::InvalidHorizon {
                input: days.to_string(),
            }),
        }
    }

    pub fn days(self) -> u32 {
        self.0
    }
}

impl Default for ForecastHorizon {
    fn default() -> Self {
        Self(DEFAULT_HORIZON_DAYS)
    }
}

impl TryFrom<i64> for ForecastHorizon {
    type Error = AnalyticsError;

    fn try_from(days: i64) -> Result<Self, Self::Error> {
        Self::new(days)
    }
}

/// Parses user-entered text such as `"7"`. Fractions, words and
/// non-positive numbers are all invalid horizons.
impl FromStr for ForecastHorizon {
    type Err = AnalyticsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || AnalyticsError::InvalidHorizon {
            input: s.to_string(),
        };
        let days = s.trim().parse::<i64>().map_err(|_| invalid())?;
        Self::new(days).map_err(|_| invalid())
    }
}

impl fmt::Display for ForecastHorizon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
