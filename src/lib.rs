//! `anscombe` library crate.
//!
//! The binary is a thin wrapper around this library so that:
//!
//! - the load → fit → score → render pipeline is testable without spawning processes
//! - each stage takes and returns plain data (no global state)

pub mod app;
pub mod cli;
pub mod domain;
pub mod error;
pub mod fit;
pub mod io;
pub mod logging;
pub mod math;
pub mod plot;
pub mod report;
pub mod tui;
