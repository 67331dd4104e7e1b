//! Help overlay.

use crate::ui;
use partfind_core::MatchPolicy;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const KEYS: &[(&str, &str)] = &[
    ("type", "search as you type"),
    ("Tab / ↓ / Enter", "move to results"),
    ("j k ↑ ↓", "move selection"),
    ("g G", "first / last result"),
    ("Esc", "back to input, then clear"),
    ("Ctrl+R", "reload the workbook"),
    ("?", "toggle this help"),
    ("Ctrl+C / q", "quit"),
];

pub fn render(f: &mut Frame, area: Rect, policy: MatchPolicy) {
    let popup = centered(area, 56, KEYS.len() as u16 + 6);

    let mut lines: Vec<Line> = KEYS
        .iter()
        .map(|(key, what)| {
            Line::from(vec![
                Span::styled(format!("{key:<18}"), Style::default().fg(ui::PRIMARY)),
                Span::styled(*what, Style::default().fg(ui::TEXT_PRIMARY)),
            ])
        })
        .collect();
    lines.push(Line::raw(""));
    let rule = match policy {
        MatchPolicy::AllTokens => "Every word must match; '/' and '-' split words.",
        MatchPolicy::SlashAlternatives => "'/' separates alternatives; each needs all its words.",
    };
    lines.push(Line::styled(
        rule,
        Style::default()
            .fg(ui::TEXT_MUTED)
            .add_modifier(Modifier::ITALIC),
    ));

    let help = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(ui::BORDER_FOCUS))
            .title(" help ")
            .style(Style::default().bg(ui::BG_ELEVATED)),
    );

    f.render_widget(Clear, popup);
    f.render_widget(help, popup);
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);

    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vertical[1])[1]
}
