//! Command-line parsing.
//!
//! The goal of this module is to keep **argument parsing** separate from the
//! pipeline. With no flags the run reads `data.csv`, prints the summary and
//! opens the interactive display.

use std::path::PathBuf;

use clap::Parser;

/// Top-level CLI.
#[derive(Debug, Parser, Clone)]
#[command(name = "anscombe", version, about = "Fit and plot the Anscombe quartet")]
pub struct Cli {
    /// CSV file with columns x1,y1,x2,y2,x3,y3,x4,y4.
    #[arg(long, value_name = "CSV", default_value = "data.csv")]
    pub data: PathBuf,

    /// Also write the 2x2 figure to an SVG file.
    #[arg(long, value_name = "SVG")]
    pub save: Option<PathBuf>,

    /// Write fit parameters, covariances and R² to a JSON file.
    #[arg(long, value_name = "JSON")]
    pub export: Option<PathBuf>,

    /// Do not open the interactive display.
    #[arg(long)]
    pub no_display: bool,

    /// Enable debug logging (stderr).
    #[arg(short, long)]
    pub verbose: bool,
}
