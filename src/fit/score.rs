//! Coefficient of determination.

use crate::error::{AnscombeError, Result};

/// `R² = 1 - SSR/SST` for observed `y` and fitted values.
///
/// Returns `DivisionByZero` when `SST == 0` (constant or empty `y`): R² is
/// undefined there and we refuse to hand back a NaN.
pub fn r_squared(y: &[f64], fitted: &[f64]) -> Result<f64> {
    if y.len() != fitted.len() {
        return Err(AnscombeError::LengthMismatch {
            x_len: fitted.len(),
            y_len: y.len(),
        });
    }
    if y.is_empty() {
        return Err(AnscombeError::DivisionByZero("R² of an empty series".to_string()));
    }

    let mean = y.iter().sum::<f64>() / y.len() as f64;
    let mut ssr = 0.0;
    let mut sst = 0.0;
    for (&yi, &fi) in y.iter().zip(fitted) {
        ssr += (yi - fi).powi(2);
        sst += (yi - mean).powi(2);
    }

    if sst == 0.0 {
        return Err(AnscombeError::DivisionByZero(
            "y has zero variance, R² is undefined".to_string(),
        ));
    }
    Ok(1.0 - ssr / sst)
}
