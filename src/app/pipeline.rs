//! The load → fit → score → figure pipeline.
//!
//! Everything is computed up front and returned as plain data, so a run that
//! fails aborts before anything is printed or displayed.

use crate::domain::{RunConfig, SeriesAnalysis, Table};
use crate::error::Result;
use crate::fit::{analyze_quartet, append_fitted_columns};
use crate::io::load_table;
use crate::plot::{Figure, build_figure};

/// All computed outputs of a single run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    /// Loaded table with the `yNline` columns appended.
    pub table: Table,
    pub analyses: Vec<SeriesAnalysis>,
    pub figure: Figure,
}

/// Execute the full pipeline for the configured data file.
pub fn run_analysis(config: &RunConfig) -> Result<RunOutput> {
    let table = load_table(&config.data_path)?;
    analyze_table(table)
}

/// Execute the pipeline on an already loaded table.
pub fn analyze_table(mut table: Table) -> Result<RunOutput> {
    let analyses = analyze_quartet(&table)?;
    append_fitted_columns(&mut table, &analyses)?;
    let figure = build_figure(&table, &analyses)?;

    Ok(RunOutput {
        table,
        analyses,
        figure,
    })
}
