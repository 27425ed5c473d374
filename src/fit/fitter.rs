//! Per-series fitting.
//!
//! Each quartet series is fitted and scored on its own: there is no shared
//! state between series, so [`analyze_quartet`] evaluates all four in parallel
//! and collects them back in series order.

use rayon::prelude::*;

use crate::domain::{FitResult, SeriesAnalysis, SeriesId, Table};
use crate::error::Result;
use crate::fit::score::r_squared;
use crate::math::{fit_line, predict_line};

/// Fit for one series, before scoring.
#[derive(Debug, Clone)]
pub struct SeriesFit {
    pub series: SeriesId,
    pub fit: FitResult,
    pub fitted: Vec<f64>,
}

/// Fit `yN ~ xN` for one series of the table.
pub fn fit_series(table: &Table, series: SeriesId) -> Result<SeriesFit> {
    let x = table.column(&series.x_column())?;
    let y = table.column(&series.y_column())?;

    let fit = fit_line(x, y).map_err(|e| e.context(series))?;
    let fitted = x.iter().map(|&xi| predict_line(&fit, xi)).collect();

    tracing::debug!(
        series = %series,
        slope = fit.slope,
        intercept = fit.intercept,
        "fitted line"
    );

    Ok(SeriesFit { series, fit, fitted })
}

/// Fit and score one series.
pub fn analyze_series(table: &Table, series: SeriesId) -> Result<SeriesAnalysis> {
    let SeriesFit { series, fit, fitted } = fit_series(table, series)?;
    let y = table.column(&series.y_column())?;
    let r_squared = r_squared(y, &fitted).map_err(|e| e.context(series))?;

    tracing::debug!(series = %series, r_squared, "scored fit");

    Ok(SeriesAnalysis {
        series,
        fit,
        fitted,
        r_squared,
    })
}

/// Fit and score all four series (parallel, results in series order).
///
/// The first failing series aborts the whole run.
pub fn analyze_quartet(table: &Table) -> Result<Vec<SeriesAnalysis>> {
    SeriesId::ALL
        .par_iter()
        .map(|&series| analyze_series(table, series))
        .collect()
}

/// Append the fitted `yNline` columns to the table.
pub fn append_fitted_columns(table: &mut Table, analyses: &[SeriesAnalysis]) -> Result<()> {
    for a in analyses {
        table.insert_column(a.series.line_column(), a.fitted.clone())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AnscombeError;
    use crate::io::read_table;

    const QUARTET: &str = include_str!("../../data.csv");

    fn round2(v: f64) -> f64 {
        (v * 100.0).round() / 100.0
    }

    #[test]
    fn quartet_shares_its_summary_statistics() {
        let table = read_table(QUARTET.as_bytes()).unwrap();
        let analyses = analyze_quartet(&table).unwrap();

        assert_eq!(analyses.len(), 4);
        for (a, expected) in analyses.iter().zip(SeriesId::ALL) {
            assert_eq!(a.series, expected);
            assert_eq!(round2(a.fit.slope), 0.50, "{}", a.series);
            assert_eq!(round2(a.fit.intercept), 3.00, "{}", a.series);
            assert_eq!(round2(a.r_squared), 0.67, "{}", a.series);
        }
    }

    #[test]
    fn set_one_matches_reference_values() {
        let table = read_table(QUARTET.as_bytes()).unwrap();
        let a = analyze_series(&table, SeriesId::One).unwrap();
        assert!((a.fit.slope - 0.500_090_909).abs() < 1e-8);
        assert!((a.fit.intercept - 3.000_090_909).abs() < 1e-8);
        assert!((a.r_squared - 0.666_542_459_5).abs() < 1e-8);
    }

    #[test]
    fn fitted_columns_are_appended() {
        let mut table = read_table(QUARTET.as_bytes()).unwrap();
        let analyses = analyze_quartet(&table).unwrap();
        append_fitted_columns(&mut table, &analyses).unwrap();

        assert_eq!(table.n_columns(), 12);
        let line = table.column("y4line").unwrap();
        assert_eq!(line.len(), 11);
        assert_eq!(line[0], predict_line(&analyses[3].fit, 8.0));
    }

    #[test]
    fn degenerate_series_aborts_with_its_label() {
        let csv = "x1,y1,x2,y2,x3,y3,x4,y4\n1,2,1,2,1,2,8,1\n2,4,2,4,2,4,8,2\n3,6,3,6,3,6,8,3\n";
        let table = read_table(csv.as_bytes()).unwrap();
        let err = analyze_quartet(&table).unwrap_err();
        match err {
            AnscombeError::DegenerateFit(msg) => assert!(msg.starts_with("Set 4"), "{msg}"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn constant_y_series_is_a_division_by_zero() {
        let csv = "x1,y1,x2,y2,x3,y3,x4,y4\n1,2,1,5,1,2,1,2\n2,4,2,5,2,4,2,4\n3,6,3,5,3,6,3,6\n";
        let table = read_table(csv.as_bytes()).unwrap();
        let err = analyze_quartet(&table).unwrap_err();
        assert!(matches!(err, AnscombeError::DivisionByZero(ref m) if m.starts_with("Set 2")));
    }

    #[test]
    fn simple_exact_series() {
        let csv = "x1,y1,x2,y2,x3,y3,x4,y4\n1,2,1,2,1,2,1,2\n2,4,2,4,2,4,2,4\n3,6,3,6,3,6,3,6\n";
        let table = read_table(csv.as_bytes()).unwrap();
        let a = analyze_series(&table, SeriesId::One).unwrap();
        assert_eq!(a.fit.slope, 2.0);
        assert!(a.fit.intercept.abs() < 1e-12);
        assert_eq!(a.r_squared, 1.0);
    }
}
