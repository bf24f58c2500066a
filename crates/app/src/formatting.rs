//! Formatting helpers for the text report.
//!
//! Provides human-readable display of weights, percentages and bar charts.

/// Formats a weight in kilograms for display, switching to tonnes above 1000.
pub fn fmt_kg(kg: f64) -> String {
    if kg.abs() >= 1_000_000.0 {
        format!("{:.1}kt", kg / 1_000_000.0)
    } else if kg.abs() >= 1_000.0 {
        format!("{:.2}t", kg / 1_000.0)
    } else {
        format!("{:.1}kg", kg)
    }
}

/// Formats a percentage already on the 0..100 scale as "XX.X%".
pub fn fmt_pct(percent: f64) -> String {
    format!("{:.1}%", percent)
}

/// Formats a classifier confidence as "XX.XX%".
pub fn fmt_confidence(percent: f64) -> String {
    format!("{:.2}%", percent)
}

/// A horizontal bar of `width` cells filled in proportion to `value / max`.
/// Negative values and a non-positive `max` render an empty bar.
pub fn bar(value: f64, max: f64, width: usize) -> String {
    let filled = if max > 0.0 && value > 0.0 {
        ((value / max).min(1.0) * width as f64).round() as usize
    } else {
        0
    };
    let mut out = "#".repeat(filled);
    out.push_str(&".".repeat(width - filled));
    out
}

// =============================================================================
// Tests
// =============================================================================
