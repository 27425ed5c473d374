//! Plotters-powered quartet panel widget for Ratatui.
//!
//! We render Plotters output into the Ratatui buffer using
//! `plotters-ratatui-backend`, sharing the panel drawing code with the SVG
//! export.

use plotters::prelude::*;
use plotters_ratatui_backend::widget_fn;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

use crate::plot::{Marker, Panel, PanelStyle, draw_panel};

const TERMINAL_STYLE: PanelStyle = PanelStyle {
    // `Circle` radii are mapped incorrectly by the ratatui backend (pixel
    // radius -> normalized canvas units), so points are drawn as pixels.
    marker: Marker::Dot,
    foreground: WHITE,
    font_size: 10,
    margin: 1,
    // Terminal cells are low-res, so keep label areas compact.
    label_area: (6, 3),
    caption: false,
    mesh: false,
};

/// Render-only widget for one subplot.
pub struct QuartetPanelChart<'a> {
    pub panel: &'a Panel,
}

impl Widget for QuartetPanelChart<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // When the available area is too small, Plotters may fail to build a chart.
        // In that case, we render a small hint rather than panicking.
        if area.width < 20 || area.height < 8 {
            buf.set_string(
                area.x,
                area.y,
                "Too small (resize terminal).",
                Style::default().fg(Color::Yellow),
            );
            return;
        }

        let [x0, x1] = self.panel.x_bounds;
        let [y0, y1] = self.panel.y_bounds;
        if !(x0.is_finite() && x1.is_finite() && y0.is_finite() && y1.is_finite()) || x1 <= x0 || y1 <= y0 {
            return;
        }

        let panel = self.panel;
        let widget = widget_fn(move |root| {
            draw_panel(&root, panel, &TERMINAL_STYLE)?;
            Ok(())
        });

        widget.render(area, buf);
    }
}
