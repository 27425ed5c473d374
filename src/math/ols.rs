//! Straight-line least squares.
//!
//! We solve
//!
//! ```text
//! minimize Σ (y_i - (m·x_i + b))^2
//! ```
//!
//! in closed form. The textbook expression
//! `m = (nΣxy - ΣxΣy) / (nΣx² - (Σx)²)` is evaluated in its centered form
//! `m = Sxy / Sxx`, `b = ȳ - m·x̄`, which is algebraically identical but keeps
//! cancellation under control when x is far from zero.
//!
//! The parameter covariance is `s²·(JᵀJ)⁻¹` with design matrix `J = [x, 1]`
//! and `s² = SSR / (n - 2)`, solved with `nalgebra`.

use nalgebra::{DMatrix, Matrix2};

use crate::domain::FitResult;
use crate::error::{AnscombeError, Result};

/// Fit `y = m·x + b` by ordinary least squares.
pub fn fit_line(x: &[f64], y: &[f64]) -> Result<FitResult> {
    if x.len() != y.len() {
        return Err(AnscombeError::LengthMismatch {
            x_len: x.len(),
            y_len: y.len(),
        });
    }
    let n = x.len();
    if n < 2 {
        return Err(AnscombeError::DegenerateFit(format!(
            "need at least 2 points, got {n}"
        )));
    }
    if x.iter().chain(y.iter()).any(|v| !v.is_finite()) {
        return Err(AnscombeError::DegenerateFit("non-finite input value".to_string()));
    }
    if x.iter().all(|&v| v == x[0]) {
        return Err(AnscombeError::DegenerateFit(format!(
            "all x values are equal ({})",
            x[0]
        )));
    }

    let nf = n as f64;
    let x_mean = x.iter().sum::<f64>() / nf;
    let y_mean = y.iter().sum::<f64>() / nf;

    let mut sxx = 0.0;
    let mut sxy = 0.0;
    for (&xi, &yi) in x.iter().zip(y) {
        let dx = xi - x_mean;
        sxx += dx * dx;
        sxy += dx * (yi - y_mean);
    }
    if !(sxx.is_finite() && sxx > 0.0) {
        return Err(AnscombeError::DegenerateFit(format!(
            "x has no usable variance (Sxx = {sxx})"
        )));
    }

    let slope = sxy / sxx;
    let intercept = y_mean - slope * x_mean;
    let covariance = parameter_covariance(x, y, slope, intercept)?;

    Ok(FitResult {
        slope,
        intercept,
        covariance,
    })
}

/// Evaluate the fitted line at `x`.
pub fn predict_line(fit: &FitResult, x: f64) -> f64 {
    fit.slope * x + fit.intercept
}

fn parameter_covariance(x: &[f64], y: &[f64], slope: f64, intercept: f64) -> Result<[[f64; 2]; 2]> {
    let n = x.len();
    let dof = n.saturating_sub(2);

    // No residual degrees of freedom: the variance estimate is undefined.
    if dof == 0 {
        return Ok([[f64::INFINITY; 2]; 2]);
    }

    let design = DMatrix::from_fn(n, 2, |i, j| if j == 0 { x[i] } else { 1.0 });
    let gram = design.transpose() * &design;
    let gram = Matrix2::new(gram[(0, 0)], gram[(0, 1)], gram[(1, 0)], gram[(1, 1)]);
    let inv = gram.try_inverse().ok_or_else(|| {
        AnscombeError::DegenerateFit("normal matrix is singular".to_string())
    })?;

    let ssr: f64 = x
        .iter()
        .zip(y)
        .map(|(&xi, &yi)| {
            let r = yi - (slope * xi + intercept);
            r * r
        })
        .sum();
    let s2 = ssr / dof as f64;

    Ok([
        [inv[(0, 0)] * s2, inv[(0, 1)] * s2],
        [inv[(1, 0)] * s2, inv[(1, 1)] * s2],
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn exact_line_is_recovered() {
        let fit = fit_line(&[1.0, 2.0, 3.0], &[2.0, 4.0, 6.0]).unwrap();
        assert_eq!(fit.slope, 2.0);
        assert!(fit.intercept.abs() < 1e-12);
        // Zero residuals → zero parameter variance.
        assert!(fit.covariance.iter().flatten().all(|v| v.abs() < 1e-12));
        assert_eq!(predict_line(&fit, 4.0), 8.0);
    }

    #[test]
    fn normal_equations_hold_on_random_data() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let n = rng.gen_range(2..40);
            let x: Vec<f64> = (0..n).map(|_| rng.gen_range(-50.0..50.0)).collect();
            let y: Vec<f64> = x
                .iter()
                .map(|&xi| 0.3 * xi - 4.0 + rng.gen_range(-5.0..5.0))
                .collect();

            let fit = fit_line(&x, &y).unwrap();
            let (mut r_sum, mut rx_sum) = (0.0, 0.0);
            for (&xi, &yi) in x.iter().zip(&y) {
                let r = yi - predict_line(&fit, xi);
                r_sum += r;
                rx_sum += xi * r;
            }
            assert!(r_sum.abs() < 1e-9, "Σr = {r_sum}");
            assert!(rx_sum.abs() < 1e-9, "Σxr = {rx_sum}");
        }
    }

    #[test]
    fn matches_textbook_sums_formula() {
        let x = [10.0, 8.0, 13.0, 9.0, 11.0, 14.0, 6.0, 4.0, 12.0, 7.0, 5.0];
        let y = [8.04, 6.95, 7.58, 8.81, 8.33, 9.96, 7.24, 4.26, 10.84, 4.82, 5.68];
        let n = x.len() as f64;
        let sx: f64 = x.iter().sum();
        let sy: f64 = y.iter().sum();
        let sxy: f64 = x.iter().zip(&y).map(|(a, b)| a * b).sum();
        let sxx: f64 = x.iter().map(|a| a * a).sum();
        let m = (n * sxy - sx * sy) / (n * sxx - sx * sx);
        let b = (sy - m * sx) / n;

        let fit = fit_line(&x, &y).unwrap();
        assert!((fit.slope - m).abs() < 1e-12);
        assert!((fit.intercept - b).abs() < 1e-12);
    }

    #[test]
    fn covariance_matches_closed_form() {
        // For a line fit, Var(m) = s² / Sxx.
        let x = [0.0, 1.0, 2.0, 3.0];
        let y = [1.0, 2.5, 2.9, 4.2];
        let fit = fit_line(&x, &y).unwrap();

        let ssr: f64 = x
            .iter()
            .zip(&y)
            .map(|(&xi, &yi)| (yi - predict_line(&fit, xi)).powi(2))
            .sum();
        let s2 = ssr / 2.0;
        let sxx = 5.0; // Σ(x - 1.5)²
        assert!((fit.covariance[0][0] - s2 / sxx).abs() < 1e-12);
        assert!((fit.covariance[0][1] - fit.covariance[1][0]).abs() < 1e-12);
    }

    #[test]
    fn two_points_fit_exactly_with_infinite_covariance() {
        let fit = fit_line(&[0.0, 2.0], &[1.0, 5.0]).unwrap();
        assert_eq!(fit.slope, 2.0);
        assert_eq!(fit.intercept, 1.0);
        assert!(fit.covariance.iter().flatten().all(|v| *v == f64::INFINITY));
    }

    #[test]
    fn degenerate_inputs_are_rejected() {
        assert!(matches!(fit_line(&[1.0], &[1.0]), Err(AnscombeError::DegenerateFit(_))));
        assert!(matches!(fit_line(&[], &[]), Err(AnscombeError::DegenerateFit(_))));
        assert!(matches!(
            fit_line(&[8.0, 8.0, 8.0], &[1.0, 2.0, 3.0]),
            Err(AnscombeError::DegenerateFit(_))
        ));
        assert!(matches!(
            fit_line(&[1.0, f64::NAN], &[1.0, 2.0]),
            Err(AnscombeError::DegenerateFit(_))
        ));
        assert!(matches!(
            fit_line(&[1.0, 2.0], &[1.0]),
            Err(AnscombeError::LengthMismatch { x_len: 2, y_len: 1 })
        ));
    }
}
