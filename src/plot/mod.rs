//! Figure rendering.
//!
//! - panel data + a backend-generic panel drawer (`figure`)
//! - SVG file export (`svg`)
//!
//! The interactive terminal view in `crate::tui` draws the same `Figure`.

pub mod figure;
pub mod svg;

pub use figure::*;
pub use svg::*;
