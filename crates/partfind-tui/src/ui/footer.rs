//! Footer / status bar rendering.

use crate::state::{AppState, StatusMessage};
use crate::ui;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let key = |k: &'static str| Span::styled(k, Style::default().fg(ui::PRIMARY));
    let hint = |h: &'static str| Span::styled(h, Style::default().fg(ui::TEXT_SECONDARY));

    let mut spans = vec![
        key("Tab:"),
        hint(" focus  "),
        key("Ctrl+R:"),
        hint(" reload  "),
        key("?:"),
        hint(" help  "),
        key("Esc:"),
        hint(" clear  "),
        key("Ctrl+C:"),
        hint(" quit"),
    ];

    if let Some(message) = &app.message {
        let (text, color) = match message {
            StatusMessage::Info(text) => (text, ui::SUCCESS),
            StatusMessage::Error(text) => (text, ui::ERROR),
        };
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            text.as_str(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ));
    }

    let hints = Paragraph::new(Line::from(spans)).style(Style::default().bg(ui::BG_SURFACE));
    f.render_widget(hints, area);
}
