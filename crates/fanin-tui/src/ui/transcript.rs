//! Transcript area
//!
//! Draws the slice of formatted lines inside the viewport. Lines arrive
//! pre-wrapped from the formatter; only the label emphasis is applied here.

use fanin_app::{App, StyledLine};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

fn to_line(line: &StyledLine) -> Line<'static> {
    let spans: Vec<Span<'static>> = line
        .segments()
        .iter()
        .map(|segment| {
            if segment.emphasis {
                Span::styled(segment.text.clone(), Style::default().add_modifier(Modifier::BOLD))
            } else {
                Span::raw(segment.text.clone())
            }
        })
        .collect();
    Line::from(spans)
}

/// Render the visible transcript lines.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let lines: Vec<Line<'static>> = app.visible_lines().into_iter().map(to_line).collect();
    frame.render_widget(Paragraph::new(lines), area);
}
