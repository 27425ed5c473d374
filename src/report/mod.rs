//! Reporting utilities: console summary lines and plot annotations.

pub mod format;

pub use format::*;
