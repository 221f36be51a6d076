// src/services/aggregator.rs
//
// Summary statistics over a numeric signal series, plus the formatted
// answer text shown to the user.

use std::fmt::Write;

const SAMPLE_LEN: usize = 10;

#[derive(Clone, Debug, PartialEq)]
pub struct SpeedSummary {
    pub average: f64,
    pub max: f64,
    pub min: f64,
    pub count: usize,
    pub sample: Vec<f64>,
}

/// Computes summary statistics over the series. Returns `None` for an
/// empty series — the caller renders an explicit "no data" answer instead
/// of propagating a NaN average.
pub fn summarize(series: &[f64]) -> Option<SpeedSummary> {
    if series.is_empty() {
        return None;
    }
    let sum: f64 = series.iter().sum();
    let max = series.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let min = series.iter().cloned().fold(f64::INFINITY, f64::min);
    Some(SpeedSummary {
        average: sum / series.len() as f64,
        max,
        min,
        count: series.len(),
        sample: series.iter().take(SAMPLE_LEN).cloned().collect(),
    })
}

/// Renders the user-visible answer block. The labels, two-decimal
/// formatting, and emoji markers are part of the displayed contract.
pub fn format_summary(series: &[f64]) -> String {
    let Some(summary) = summarize(series) else {
        return "Here's the mobile speed data analysis:\n\n\
                No data points were returned for this signal."
            .to_string();
    };

    let mut out = String::new();
    let _ = write!(
        out,
        "Here's the mobile speed data analysis:\n\n\
         📊 **Statistics:**\n\
         - Average Speed: {:.2} units\n\
         - Maximum Speed: {:.2} units\n\
         - Minimum Speed: {:.2} units\n\
         - Total Data Points: {}\n\n\
         📈 **Speed Values:**",
        summary.average, summary.max, summary.min, summary.count
    );
    for (index, value) in summary.sample.iter().enumerate() {
        let _ = write!(out, "\n{}. {:.2}", index + 1, value);
    }
    if summary.count > SAMPLE_LEN {
        let _ = write!(out, "\n... and {} more values", summary.count - SAMPLE_LEN);
    }
    out
}
