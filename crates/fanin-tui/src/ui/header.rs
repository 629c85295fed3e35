//! Header
//!
//! Rounded title box joined to a rule that runs to the right edge.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    symbols::border,
    widgets::{Block, Borders, Padding, Paragraph},
};

const TITLE: &str = "Debug listener -- Press q to quit, c to clear the output area.";

/// Borders plus one column of padding on each side.
const TITLE_CHROME_WIDTH: u16 = 4;

/// Render the header.
pub fn render(frame: &mut Frame, area: Rect) {
    let title_width = (TITLE.chars().count() as u16).saturating_add(TITLE_CHROME_WIDTH);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(title_width), Constraint::Min(0)])
        .split(area);

    let [title_area, rule_area] = chunks.as_ref() else {
        return;
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(border::Set { vertical_right: "├", ..border::ROUNDED })
        .padding(Padding::horizontal(1));

    frame.render_widget(Paragraph::new(TITLE).block(block), *title_area);
    super::render_rule(frame, *rule_area);
}
