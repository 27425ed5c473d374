//! Export the per-series fit summary to JSON.
//!
//! The export is meant to be easy to consume in notebooks or downstream
//! scripts; it carries the full-precision parameters, covariance and R².

use std::fs::File;
use std::path::Path;

use serde::Serialize;

use crate::domain::{FitResult, SeriesAnalysis};
use crate::error::{AnscombeError, Result};

#[derive(Debug, Serialize)]
pub struct SummaryFile {
    pub tool: String,
    pub source: String,
    pub series: Vec<SeriesSummary>,
}

#[derive(Debug, Serialize)]
pub struct SeriesSummary {
    pub set: usize,
    pub x_column: String,
    pub y_column: String,
    pub fit: FitResult,
    pub r_squared: f64,
}

/// Build the serializable summary for a run.
pub fn build_summary(source: &Path, analyses: &[SeriesAnalysis]) -> SummaryFile {
    SummaryFile {
        tool: "anscombe".to_string(),
        source: source.display().to_string(),
        series: analyses
            .iter()
            .map(|a| SeriesSummary {
                set: a.series.number(),
                x_column: a.series.x_column(),
                y_column: a.series.y_column(),
                fit: a.fit,
                r_squared: a.r_squared,
            })
            .collect(),
    }
}

/// Write the fit summary as pretty-printed JSON.
pub fn write_summary_json(path: &Path, source: &Path, analyses: &[SeriesAnalysis]) -> Result<()> {
    let file = File::create(path)
        .map_err(|e| AnscombeError::Export(format!("failed to create '{}': {e}", path.display())))?;

    // serde_json turns non-finite floats (two-point covariance) into `null`.
    serde_json::to_writer_pretty(file, &build_summary(source, analyses))
        .map_err(|e| AnscombeError::Export(format!("failed to write summary JSON: {e}")))?;

    tracing::info!(path = %path.display(), "wrote fit summary");
    Ok(())
}
