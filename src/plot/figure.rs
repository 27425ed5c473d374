//! Backend-independent description of the 2×2 quartet figure.
//!
//! All series and bounds are computed here, outside any render call, so that
//! the terminal view and the SVG export draw exactly the same thing and the
//! data prep can be tested without a drawing backend.

use plotters::coord::Shift;
use plotters::prelude::*;

use crate::domain::{SeriesAnalysis, SeriesId, Table};
use crate::error::Result;
use crate::report::format_annotation;

/// Fraction of the data span added on each side of a panel's axes.
const BOUNDS_PAD: f64 = 0.05;

/// Everything needed to draw one subplot.
#[derive(Debug, Clone)]
pub struct Panel {
    pub series: SeriesId,
    pub title: String,
    /// Observed `(x, y)` pairs, in table order.
    pub points: Vec<(f64, f64)>,
    /// Fitted line `(x, ŷ)`, sorted by x.
    pub line: Vec<(f64, f64)>,
    pub rgb: (u8, u8, u8),
    pub anchor: (f64, f64),
    pub annotation: String,
    pub x_bounds: [f64; 2],
    pub y_bounds: [f64; 2],
}

impl Panel {
    pub fn color(&self) -> RGBColor {
        RGBColor(self.rgb.0, self.rgb.1, self.rgb.2)
    }
}

/// The four panels, in series (row-major grid) order.
#[derive(Debug, Clone)]
pub struct Figure {
    pub panels: Vec<Panel>,
}

/// How points are marked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    /// Single-pixel dot. Used in the terminal, where circle radii don't map well
    /// onto character cells.
    Dot,
    /// Filled circle with the given radius in backend pixels.
    Circle(u32),
}

/// Per-backend styling knobs for [`draw_panel`].
#[derive(Clone, Copy)]
pub struct PanelStyle {
    pub marker: Marker,
    pub foreground: RGBColor,
    pub font_size: u32,
    pub margin: u32,
    /// `(left, bottom)` label area sizes.
    pub label_area: (u32, u32),
    pub caption: bool,
    pub mesh: bool,
}

/// Build the figure from the table (with `yNline` columns appended) and the
/// per-series analyses.
pub fn build_figure(table: &Table, analyses: &[SeriesAnalysis]) -> Result<Figure> {
    let mut panels = Vec::with_capacity(analyses.len());

    for a in analyses {
        let series = a.series;
        let x = table.column(&series.x_column())?;
        let y = table.column(&series.y_column())?;
        let y_line = table.column(&series.line_column())?;

        let points: Vec<(f64, f64)> = x.iter().copied().zip(y.iter().copied()).collect();

        // Plotting in table order would draw the line back and forth over itself.
        let mut line: Vec<(f64, f64)> = x.iter().copied().zip(y_line.iter().copied()).collect();
        line.sort_by(|a, b| a.0.total_cmp(&b.0));

        let anchor = series.annotation_anchor();
        let (x_bounds, y_bounds) = panel_bounds(&points, &line, anchor);

        panels.push(Panel {
            series,
            title: series.label(),
            points,
            line,
            rgb: series.rgb(),
            anchor,
            annotation: format_annotation(a),
            x_bounds,
            y_bounds,
        });
    }

    Ok(Figure { panels })
}

/// Draw the four panels onto a 2×2 split of `root`.
pub fn draw_grid<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    figure: &Figure,
    style: &PanelStyle,
) -> std::result::Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    let areas = root.split_evenly((2, 2));
    for panel in &figure.panels {
        let (row, col) = panel.series.grid_cell();
        draw_panel(&areas[row * 2 + col], panel, style)?;
    }
    Ok(())
}

/// Draw one panel: axes, scatter, fit line (same color), anchored annotation.
pub fn draw_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    panel: &Panel,
    style: &PanelStyle,
) -> std::result::Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    let [x0, x1] = panel.x_bounds;
    let [y0, y1] = panel.y_bounds;
    let color = panel.color();

    let mut builder = ChartBuilder::on(area);
    builder
        .margin(style.margin)
        .set_label_area_size(LabelAreaPosition::Left, style.label_area.0)
        .set_label_area_size(LabelAreaPosition::Bottom, style.label_area.1);
    if style.caption {
        builder.caption(
            &panel.title,
            ("sans-serif", style.font_size + 4).into_font().color(&style.foreground),
        );
    }
    let mut chart = builder.build_cartesian_2d(x0..x1, y0..y1)?;

    let mut mesh = chart.configure_mesh();
    if !style.mesh {
        mesh.disable_x_mesh().disable_y_mesh();
    }
    mesh.x_labels(5)
        .y_labels(5)
        .label_style(("sans-serif", style.font_size).into_font().color(&style.foreground))
        .axis_style(style.foreground)
        .draw()?;

    chart.draw_series(LineSeries::new(panel.line.iter().copied(), &color))?;

    match style.marker {
        Marker::Dot => {
            chart.draw_series(panel.points.iter().map(|&p| Pixel::new(p, color)))?;
        }
        Marker::Circle(radius) => {
            chart.draw_series(
                panel
                    .points
                    .iter()
                    .map(|&p| Circle::new(p, radius, color.filled())),
            )?;
        }
    }

    chart.draw_series(std::iter::once(Text::new(
        panel.annotation.clone(),
        panel.anchor,
        ("sans-serif", style.font_size).into_font().color(&color),
    )))?;

    Ok(())
}

fn panel_bounds(
    points: &[(f64, f64)],
    line: &[(f64, f64)],
    anchor: (f64, f64),
) -> ([f64; 2], [f64; 2]) {
    let mut x_min = anchor.0;
    let mut x_max = anchor.0;
    let mut y_min = anchor.1;
    let mut y_max = anchor.1;
    for &(x, y) in points.iter().chain(line) {
        if !(x.is_finite() && y.is_finite()) {
            continue;
        }
        x_min = x_min.min(x);
        x_max = x_max.max(x);
        y_min = y_min.min(y);
        y_max = y_max.max(y);
    }
    (pad_range(x_min, x_max, BOUNDS_PAD), pad_range(y_min, y_max, BOUNDS_PAD))
}

fn pad_range(min: f64, max: f64, frac: f64) -> [f64; 2] {
    let span = (max - min).abs();
    let pad = if span > 0.0 { span * frac } else { 0.5 };
    [min - pad, max + pad]
}
