//! Report configuration.
//!
//! Layers, lowest to highest precedence: built-in defaults, an optional JSON
//! file (`--config` / `WASTEWISE_CONFIG`), then the parsed command line,
//! where each flag already falls back to its `WASTEWISE_*` variable.

use std::fs;
use std::path::{Path, PathBuf};

use analytics::forecast::DEFAULT_HORIZON_DAYS;
use analytics::{AnalyticsError, ForecastHorizon};
use anyhow::Context;
use clap::ValueEnum;
use serde::Deserialize;

use crate::cli::Cli;

const DEFAULT_DATA_PATH: &str = "data/sample_data.csv";

// ---------------------------------------------------------------------------
// Output format
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

// ---------------------------------------------------------------------------
// ReportConfig
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// CSV record source.
    pub data_path: PathBuf,
    /// Report only this zone; every zone when unset.
    pub zone: Option<String>,
    /// Forecast horizon as entered. Validated when the forecast runs so a bad
    /// value is reported per section rather than aborting the report.
    pub horizon: String,
    /// Seed for the classifier noise; OS entropy when unset.
    pub seed: Option<u64>,
    pub format: OutputFormat,
    pub images: Vec<PathBuf>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            zone: None,
            horizon: DEFAULT_HORIZON_DAYS.to_string(),
            seed: None,
            format: OutputFormat::Text,
            images: Vec::new(),
        }
    }
}

impl ReportConfig {
    /// Resolve the full configuration from a parsed command line.
    pub fn from_cli(cli: Cli) -> anyhow::Result<Self> {
        let mut config = match &cli.config {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_cli(cli);
        tracing::debug!(?config, "resolved report configuration");
        Ok(config)
    }

    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("parsing config file {}", path.display()))
    }

    pub fn from_json(text: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Override every field the command line (or its environment fallback)
    /// set. A non-empty image list replaces the configured one; a blank zone
    /// means every zone.
    pub fn apply_cli(&mut self, cli: Cli) {
        if let Some(path) = cli.data {
            self.data_path = path;
        }
        if !cli.images.is_empty() {
            self.images = cli.images;
        }
        if let Some(zone) = cli.zone {
            self.zone = Some(zone);
        }
        self.zone = self.zone.take().filter(|z| !z.trim().is_empty());
        if let Some(horizon) = cli.horizon {
            self.horizon = horizon;
        }
        if cli.seed.is_some() {
            self.seed = cli.seed;
        }
        if let Some(format) = cli.format {
            self.format = format;
        }
    }

    pub fn forecast_horizon(&self) -> Result<ForecastHorizon, AnalyticsError> {
        self.horizon.parse()
    }
}
