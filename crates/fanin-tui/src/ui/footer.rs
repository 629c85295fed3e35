//! Footer
//!
//! Rule from the left edge joined to a rounded box holding the scroll
//! position.

use fanin_app::App;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    symbols::border,
    widgets::{Block, Borders, Padding, Paragraph},
};

/// Borders plus one column of padding on each side.
const INFO_CHROME_WIDTH: u16 = 4;

/// Scroll position as shown in the footer, e.g. ` 42%`.
pub fn percent_label(percent: f64) -> String {
    format!("{percent:3.0}%")
}

/// Render the footer.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let info = percent_label(app.scroll_percent());
    let info_width = (info.chars().count() as u16).saturating_add(INFO_CHROME_WIDTH);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(info_width)])
        .split(area);

    let [rule_area, info_area] = chunks.as_ref() else {
        return;
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(border::Set { vertical_left: "┤", ..border::ROUNDED })
        .padding(Padding::horizontal(1));

    super::render_rule(frame, *rule_area);
    frame.render_widget(Paragraph::new(info).block(block), *info_area);
}
