//! Ratatui-based interactive display.
//!
//! Shows the 2×2 quartet grid full-screen and blocks until the user closes it
//! (`q`, `Esc`, `Enter` or `Ctrl-C`). The terminal is restored on every exit
//! path, including errors.

use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::error::{AnscombeError, Result};
use crate::plot::Figure;

mod plotters_chart;

use plotters_chart::QuartetPanelChart;

/// Show the figure and block until the window is dismissed.
pub fn show(figure: &Figure, source: &str) -> Result<()> {
    let _guard = TerminalGuard::new()?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)
        .map_err(|e| AnscombeError::Render(format!("Failed to initialize terminal: {e}")))?;

    let viewer = Viewer { figure, source };
    viewer.event_loop(&mut terminal)
}

/// Ensures the terminal is restored (raw mode, alternate screen) on exit.
struct TerminalGuard;

impl TerminalGuard {
    fn new() -> Result<Self> {
        enable_raw_mode()
            .map_err(|e| AnscombeError::Render(format!("Failed to enable raw mode: {e}")))?;
        if let Err(e) = execute!(io::stdout(), EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(AnscombeError::Render(format!(
                "Failed to enter alternate screen: {e}"
            )));
        }
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

struct Viewer<'a> {
    figure: &'a Figure,
    source: &'a str,
}

impl Viewer<'_> {
    fn event_loop<B: ratatui::backend::Backend>(&self, terminal: &mut Terminal<B>) -> Result<()> {
        let mut needs_redraw = true;
        loop {
            if needs_redraw {
                terminal
                    .draw(|f| self.draw(f))
                    .map_err(|e| AnscombeError::Render(format!("Terminal draw error: {e}")))?;
                needs_redraw = false;
            }

            if !event::poll(Duration::from_millis(100))
                .map_err(|e| AnscombeError::Render(format!("Event poll error: {e}")))?
            {
                continue;
            }

            match event::read().map_err(|e| AnscombeError::Render(format!("Event read error: {e}")))? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if is_close_key(key.code, key.modifiers) {
                        break;
                    }
                }
                Event::Resize(_, _) => needs_redraw = true,
                _ => {}
            }
        }
        Ok(())
    }

    fn draw(&self, frame: &mut ratatui::Frame<'_>) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0), Constraint::Length(1)])
            .split(frame.area());

        self.draw_header(frame, chunks[0]);
        self.draw_grid(frame, chunks[1]);

        let footer = Paragraph::new("q / Esc / Enter: close")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(footer, chunks[2]);
    }

    fn draw_header(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let line = Line::from(vec![
            Span::styled("anscombe", Style::default().fg(Color::Cyan)),
            Span::raw(format!(" | {} | least-squares line per series", self.source)),
        ]);
        let p = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }

    fn draw_grid(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let cells = grid_cells(area);
        for panel in &self.figure.panels {
            let (row, col) = panel.series.grid_cell();
            let cell = cells[row * 2 + col];

            let (r, g, b) = panel.rgb;
            let block = Block::default()
                .title(Span::styled(panel.title.clone(), Style::default().fg(Color::Rgb(r, g, b))))
                .borders(Borders::ALL);
            let inner = block.inner(cell);
            frame.render_widget(block, cell);
            frame.render_widget(Clear, inner);
            frame.render_widget(QuartetPanelChart { panel }, inner);
        }
    }
}

/// Split `area` into four equal cells, row-major.
fn grid_cells(area: Rect) -> Vec<Rect> {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    rows.iter()
        .flat_map(|row| {
            Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
                .split(*row)
                .to_vec()
        })
        .collect()
}

fn is_close_key(code: KeyCode, modifiers: KeyModifiers) -> bool {
    match code {
        KeyCode::Char('q') | KeyCode::Esc | KeyCode::Enter => true,
        KeyCode::Char('c') => modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}
