//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - the column table loaded from CSV (`Table`)
//! - the four quartet series and their fixed presentation (`SeriesId`)
//! - fit outputs (`FitResult`, `SeriesAnalysis`) and the run options (`RunConfig`)

pub mod table;
pub mod types;

pub use table::*;
pub use types::*;
