//! Fitting orchestration.
//!
//! Responsibilities:
//!
//! - pull each series out of the table and fit a line (`fitter`)
//! - score each fit with R² (`score`)
//! - append the fitted `yNline` columns

pub mod fitter;
pub mod score;

pub use fitter::*;
pub use score::*;
