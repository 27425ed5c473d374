//! SVG export of the quartet figure.

use std::path::Path;

use plotters::prelude::*;

use crate::error::{AnscombeError, Result};
use crate::plot::figure::{Figure, Marker, PanelStyle, draw_grid};

/// Default canvas size in pixels.
pub const DEFAULT_SVG_SIZE: (u32, u32) = (1000, 800);

const SVG_STYLE: PanelStyle = PanelStyle {
    marker: Marker::Circle(4),
    foreground: BLACK,
    font_size: 14,
    margin: 12,
    label_area: (40, 30),
    caption: true,
    mesh: true,
};

/// Write the 2×2 figure to an SVG file.
pub fn save_svg(path: &Path, figure: &Figure, size: (u32, u32)) -> Result<()> {
    let root = SVGBackend::new(path, size).into_drawing_area();
    let fail = |e: &dyn std::fmt::Display| {
        AnscombeError::Export(format!("failed to draw SVG '{}': {e}", path.display()))
    };

    root.fill(&WHITE).map_err(|e| fail(&e))?;
    draw_grid(&root, figure, &SVG_STYLE).map_err(|e| fail(&e))?;
    root.present().map_err(|e| fail(&e))?;

    tracing::info!(path = %path.display(), "saved figure");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fit::{analyze_quartet, append_fitted_columns};
    use crate::io::read_table;
    use crate::plot::build_figure;

    #[test]
    fn writes_svg_with_annotations() {
        let mut table = read_table(include_str!("../../data.csv").as_bytes()).unwrap();
        let analyses = analyze_quartet(&table).unwrap();
        append_fitted_columns(&mut table, &analyses).unwrap();
        let figure = build_figure(&table, &analyses).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("anscombe.svg");
        save_svg(&path, &figure, DEFAULT_SVG_SIZE).unwrap();

        let svg = std::fs::read_to_string(&path).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("Set 4"));
        assert!(svg.contains("p: [0.50, 3.00], r2: 0.67"));
    }
}
