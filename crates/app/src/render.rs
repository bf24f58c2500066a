//! Plain-text rendering of a [`Report`].

use std::fmt;

use analytics::TrendPoint;

use crate::formatting::{bar, fmt_confidence, fmt_kg, fmt_pct};
use crate::report::{Report, Section, ZoneReport};

const BAR_WIDTH: usize = 30;

fn write_series(f: &mut fmt::Formatter<'_>, points: &[TrendPoint]) -> fmt::Result {
    let max = points.iter().map(|p| p.waste_kg).fold(0.0_f64, f64::max);
    for p in points {
        writeln!(
            f,
            "  {}  {:>10}  {}",
            p.date,
            fmt_kg(p.waste_kg),
            bar(p.waste_kg, max, BAR_WIDTH)
        )?;
    }
    Ok(())
}

fn write_zone(f: &mut fmt::Formatter<'_>, zone: &ZoneReport) -> fmt::Result {
    writeln!(f, "== {} ==", zone.zone)?;

    match &zone.summary {
        Section::Ok(s) => writeln!(
            f,
            "Records: {}  Total: {}  Mean per record: {}",
            s.record_count,
            fmt_kg(s.total_waste_kg),
            fmt_kg(s.mean_waste_kg)
        )?,
        Section::Failed { error } => writeln!(f, "Summary unavailable: {error}")?,
    }

    match &zone.distribution {
        Section::Ok(d) => {
            let slices: Vec<String> = d
                .slices()
                .iter()
                .map(|(label, value)| format!("{label} {}", fmt_pct(*value)))
                .collect();
            writeln!(f, "Distribution: {}", slices.join(" | "))?;
        }
        Section::Failed { error } => writeln!(f, "Distribution unavailable: {error}")?,
    }

    writeln!(f, "Trend:")?;
    write_series(f, &zone.trend)?;

    match &zone.forecast {
        Section::Ok(points) => {
            writeln!(f, "Forecast ({} days):", points.len())?;
            for p in points {
                writeln!(f, "  {}  {:>10}", p.date, fmt_kg(p.predicted_waste_kg))?;
            }
        }
        Section::Failed { error } => writeln!(f, "Forecast unavailable: {error}")?,
    }
    Ok(())
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Waste report: {}", self.source.display())?;
        match self.date_range {
            Some((first, last)) => {
                writeln!(f, "{} records, {first} to {last}", self.record_count)?
            }
            None => writeln!(f, "{} records", self.record_count)?,
        }

        writeln!(f)?;
        writeln!(f, "Daily totals (all zones):")?;
        write_series(f, &self.overall_trend)?;

        for zone in &self.zones {
            writeln!(f)?;
            write_zone(f, zone)?;
        }

        if !self.classifications.is_empty() {
            writeln!(f)?;
            writeln!(f, "== Image classification ==")?;
            for image in &self.classifications {
                match &image.result {
                    Section::Ok(r) => writeln!(
                        f,
                        "  {}: {} ({})",
                        image.path.display(),
                        r.label,
                        fmt_confidence(r.confidence)
                    )?,
                    Section::Failed { error } => {
                        writeln!(f, "  {}: unavailable: {error}", image.path.display())?
                    }
                }
            }
        }
        Ok(())
    }
}
