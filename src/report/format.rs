//! Formatted terminal output and plot annotations.
//!
//! We keep formatting code in one place so:
//! - the math/fitting code stays clean and testable
//! - output changes are localized

use crate::domain::SeriesAnalysis;

/// Digits kept after the decimal point when printing parameter arrays.
const PARAM_PRECISION: usize = 8;

/// One summary line per series:
///
/// ```text
/// Set 1 params: [0.50009091 3.00009091], r**2: 0.666542459508775
/// ```
///
/// R² is printed at full (shortest round-trip) precision.
pub fn format_series_line(analysis: &SeriesAnalysis) -> String {
    format!(
        "Set {} params: {}, r**2: {:?}",
        analysis.series.number(),
        format_params(&analysis.fit.params()),
        analysis.r_squared
    )
}

/// All four summary lines, newline-separated (no trailing newline).
pub fn format_report(analyses: &[SeriesAnalysis]) -> String {
    analyses
        .iter()
        .map(format_series_line)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Plot annotation text: parameters and R² rounded to two decimals.
pub fn format_annotation(analysis: &SeriesAnalysis) -> String {
    format!(
        "p: [{:.2}, {:.2}], r2: {:.2}",
        analysis.fit.slope, analysis.fit.intercept, analysis.r_squared
    )
}

/// Print a parameter array in the common numeric-array style.
///
/// - up to 8 decimals, trailing zeros trimmed, the decimal point always kept (`2.`)
/// - integer parts right-aligned, fraction parts left-aligned, so every cell
///   has the same width
/// - cells separated by a space inside `[...]`
pub fn format_params(values: &[f64]) -> String {
    let parts: Vec<(String, String)> = values.iter().map(|&v| split_positional(v)).collect();
    let int_width = parts.iter().map(|(i, _)| i.len()).max().unwrap_or(0);
    let frac_width = parts.iter().map(|(_, f)| f.len()).max().unwrap_or(0);

    let cells: Vec<String> = parts
        .iter()
        .map(|(i, f)| format!("{i:>int_width$}{f:<frac_width$}"))
        .collect();
    format!("[{}]", cells.join(" "))
}

fn split_positional(v: f64) -> (String, String) {
    if v.is_nan() {
        return ("nan".to_string(), String::new());
    }
    if v.is_infinite() {
        let s = if v > 0.0 { "inf" } else { "-inf" };
        return (s.to_string(), String::new());
    }

    let s = format!("{v:.prec$}", prec = PARAM_PRECISION);
    let s = s.trim_end_matches('0');
    match s.split_once('.') {
        Some((int, frac)) => (int.to_string(), format!(".{frac}")),
        None => (s.to_string(), String::new()),
    }
}
