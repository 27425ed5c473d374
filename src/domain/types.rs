//! Shared domain types.
//!
//! These types are intentionally kept lightweight so they can be:
//!
//! - passed explicitly between the pipeline stages (no global state)
//! - exported to JSON
//! - turned into plot panels without knowing about the fitting code

use std::path::PathBuf;

use serde::Serialize;

/// One of the four `(x, y)` series of the quartet.
///
/// Everything that is "fixed per series" (column names, color, annotation
/// anchor, grid cell) hangs off this enum so the pipeline can simply iterate
/// over [`SeriesId::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SeriesId {
    One,
    Two,
    Three,
    Four,
}

impl SeriesId {
    pub const ALL: [SeriesId; 4] = [SeriesId::One, SeriesId::Two, SeriesId::Three, SeriesId::Four];

    /// 1-based set number, as printed in the report.
    pub fn number(self) -> usize {
        match self {
            SeriesId::One => 1,
            SeriesId::Two => 2,
            SeriesId::Three => 3,
            SeriesId::Four => 4,
        }
    }

    pub fn label(self) -> String {
        format!("Set {}", self.number())
    }

    pub fn x_column(self) -> String {
        format!("x{}", self.number())
    }

    pub fn y_column(self) -> String {
        format!("y{}", self.number())
    }

    /// Name of the derived column holding fitted values.
    pub fn line_column(self) -> String {
        format!("y{}line", self.number())
    }

    /// Series color as RGB (red, green, blue, orange).
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            SeriesId::One => (255, 0, 0),
            SeriesId::Two => (0, 128, 0),
            SeriesId::Three => (0, 0, 255),
            SeriesId::Four => (255, 165, 0),
        }
    }

    /// Data coordinates where the statistics annotation is placed.
    pub fn annotation_anchor(self) -> (f64, f64) {
        match self {
            SeriesId::One => (6.0, 4.0),
            SeriesId::Two => (6.0, 3.0),
            SeriesId::Three => (6.0, 5.0),
            SeriesId::Four => (9.0, 5.0),
        }
    }

    /// `(row, col)` cell in the 2×2 grid, row-major.
    pub fn grid_cell(self) -> (usize, usize) {
        let i = self.number() - 1;
        (i / 2, i % 2)
    }
}

impl std::fmt::Display for SeriesId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Set {}", self.number())
    }
}

/// Parameters of a fitted line `y = slope·x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FitResult {
    pub slope: f64,
    pub intercept: f64,
    /// Parameter covariance in `[slope, intercept]` order.
    ///
    /// All `+∞` when the fit has no residual degrees of freedom (n = 2).
    pub covariance: [[f64; 2]; 2],
}

impl FitResult {
    pub fn params(&self) -> [f64; 2] {
        [self.slope, self.intercept]
    }
}

/// Fit + score for one series.
#[derive(Debug, Clone)]
pub struct SeriesAnalysis {
    pub series: SeriesId,
    pub fit: FitResult,
    /// Fitted values, aligned with the table rows (`yNline`).
    pub fitted: Vec<f64>,
    pub r_squared: f64,
}

/// Resolved options for a run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub data_path: PathBuf,
    pub display: bool,
    pub save_svg: Option<PathBuf>,
    pub export_json: Option<PathBuf>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("data.csv"),
            display: true,
            save_svg: None,
            export_json: None,
        }
    }
}
