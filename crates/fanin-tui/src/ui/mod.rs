//! UI rendering
//!
//! Rendering functions that convert App state into terminal output using
//! ratatui widgets. All functions are pure (no I/O), taking state and
//! drawing into the frame.

mod footer;
mod header;
mod transcript;

use fanin_app::{App, FOOTER_HEIGHT, HEADER_HEIGHT};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    widgets::Paragraph,
};

/// Shown until the first terminal size is known.
pub const INITIALIZING: &str = "\n  Initializing...";

/// Render the entire UI.
pub fn render(frame: &mut Frame, app: &App) {
    if !app.is_ready() {
        frame.render_widget(Paragraph::new(INITIALIZING), frame.area());
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(FOOTER_HEIGHT),
        ])
        .split(frame.area());

    let [header_area, body_area, footer_area] = chunks.as_ref() else {
        return;
    };

    header::render(frame, *header_area);
    transcript::render(frame, app, *body_area);
    footer::render(frame, app, *footer_area);
}

/// Horizontal rule across the middle row of `area`.
fn render_rule(frame: &mut Frame, area: Rect) {
    const RULE: &str = "─";

    if area.width == 0 || area.height == 0 {
        return;
    }
    let row = Rect { y: area.y.saturating_add(area.height / 2), height: 1, ..area };
    frame.render_widget(Paragraph::new(RULE.repeat(usize::from(area.width))), row);
}
