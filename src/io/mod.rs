//! Input/output helpers.
//!
//! - CSV ingest + schema checks (`ingest`)
//! - fit summary export (JSON) (`export`)

pub mod export;
pub mod ingest;

pub use export::*;
pub use ingest::*;
