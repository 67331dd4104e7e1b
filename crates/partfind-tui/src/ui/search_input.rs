//! Search input rendering.

use crate::state::AppState;
use crate::ui;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const PROMPT: &str = "Description: ";
const PLACEHOLDER: &str = "e.g. ABC/123 or 10 pin connector";

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let query = &app.search.query;
    let is_focused = app.search.is_input_focused();

    let border_style = if is_focused {
        Style::default().fg(ui::BORDER_FOCUS)
    } else {
        Style::default().fg(ui::BORDER_DIM)
    };

    let text = if query.is_empty() {
        Span::styled(PLACEHOLDER, Style::default().fg(ui::TEXT_MUTED))
    } else {
        Span::styled(query.as_str(), Style::default().fg(ui::TEXT_PRIMARY))
    };

    let input = Paragraph::new(Line::from(vec![
        Span::styled(PROMPT, Style::default().fg(ui::ACCENT)),
        text,
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .style(if is_focused {
                Style::default().bg(ui::BG_ELEVATED)
            } else {
                Style::default().bg(ui::BG_SURFACE)
            }),
    );

    f.render_widget(input, area);

    if is_focused {
        // 1 (border) + prompt + cursor
        let cursor_x = area.x + 1 + PROMPT.len() as u16 + app.search.cursor_position as u16;
        let cursor_y = area.y + 1;
        f.set_cursor_position((cursor_x, cursor_y));
    }
}
