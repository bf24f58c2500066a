//! `wastewise [OPTIONS] [DATA_CSV] [IMAGE ...]`
//!
//! Loads a waste record CSV, prints per-zone summaries, trends and forecasts,
//! and classifies any given images. Output goes to stdout as text or JSON;
//! logs go to stderr and are filtered by `RUST_LOG` (default `info`).

use analytics::WasteAnalytics;
use anyhow::Context;
use clap::Parser;
use classifier::ColorHeuristicClassifier;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod config;
mod formatting;
mod render;
mod report;

use crate::cli::Cli;
use crate::config::{OutputFormat, ReportConfig};
use crate::report::Report;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = ReportConfig::from_cli(cli)?;

    let analytics = WasteAnalytics::load(&config.data_path)
        .with_context(|| format!("loading records from {}", config.data_path.display()))?;

    let mut classifier = match config.seed {
        Some(seed) => ColorHeuristicClassifier::seeded(seed),
        None => ColorHeuristicClassifier::new(),
    };

    let report = Report::build(&analytics, &config, &mut classifier);
    tracing::info!(
        zones = report.zones.len(),
        images = report.classifications.len(),
        failed_sections = report.failed_sections(),
        "report built"
    );

    match config.format {
        OutputFormat::Text => print!("{report}"),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }
    Ok(())
}
