//! Command-line surface. Every option can also come from its `WASTEWISE_*`
//! environment variable; a flag wins over the variable.

use std::path::PathBuf;

use clap::Parser;

use crate::config::OutputFormat;

pub const CONFIG_ENV: &str = "WASTEWISE_CONFIG";
pub const DATA_ENV: &str = "WASTEWISE_DATA";
pub const ZONE_ENV: &str = "WASTEWISE_ZONE";
pub const HORIZON_ENV: &str = "WASTEWISE_HORIZON";
pub const SEED_ENV: &str = "WASTEWISE_SEED";
pub const FORMAT_ENV: &str = "WASTEWISE_FORMAT";

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "wastewise")]
#[command(about = "Waste collection analytics and image classification report")]
#[command(version)]
pub struct Cli {
    /// Waste record CSV (default: data/sample_data.csv)
    #[arg(value_name = "DATA_CSV", env = DATA_ENV)]
    pub data: Option<PathBuf>,

    /// Images to classify
    #[arg(value_name = "IMAGE")]
    pub images: Vec<PathBuf>,

    /// JSON config file applied beneath the flags
    #[arg(long, value_name = "FILE", env = CONFIG_ENV)]
    pub config: Option<PathBuf>,

    /// Report only this zone
    #[arg(long, env = ZONE_ENV)]
    pub zone: Option<String>,

    /// Forecast horizon in days. Checked per forecast, so a bad value only
    /// fails the forecast sections.
    #[arg(long, env = HORIZON_ENV)]
    pub horizon: Option<String>,

    /// Seed for the classifier noise (OS entropy when unset)
    #[arg(long, env = SEED_ENV)]
    pub seed: Option<u64>,

    /// Output format
    #[arg(long, value_enum, ignore_case = true, env = FORMAT_ENV)]
    pub format: Option<OutputFormat>,
}
