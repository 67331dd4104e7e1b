//! Header rendering.

use crate::state::AppState;
use crate::ui;
use partfind_core::build_info::BUILD_INFO;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let source = &app.source;
    let file_name = source
        .path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| source.path.display().to_string());

    let (status_text, status_color) = if source.available {
        (format!("{} entries", format_count(source.entries)), ui::SUCCESS)
    } else {
        ("source unavailable".to_string(), ui::ERROR)
    };

    let sep = Span::styled(" | ", Style::default().fg(ui::TEXT_MUTED));

    let spans = vec![
        Span::styled(
            "partfind",
            Style::default()
                .fg(ui::PRIMARY)
                .add_modifier(Modifier::BOLD),
        ),
        sep.clone(),
        Span::styled(
            format!("{file_name} [{} / {}]", source.sheet, source.column),
            Style::default().fg(ui::ACCENT),
        ),
        sep.clone(),
        Span::styled("● ", Style::default().fg(status_color)),
        Span::styled(status_text, Style::default().fg(status_color)),
        sep,
        Span::styled(
            app.policy.as_str(),
            Style::default().fg(ui::INFO),
        ),
    ];

    let build_info = BUILD_INFO.compact();
    let build_width = (build_info.len() as u16).min(area.width.saturating_sub(2));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(ui::BORDER_DIM))
        .style(Style::default().bg(ui::BG_SURFACE));
    let inner = block.inner(area);

    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(build_width)])
        .split(inner);

    let left = Paragraph::new(Line::from(spans)).style(Style::default().bg(ui::BG_SURFACE));
    let right = Paragraph::new(build_info)
        .style(
            Style::default()
                .fg(ui::TEXT_MUTED)
                .bg(ui::BG_SURFACE)
                .add_modifier(Modifier::DIM),
        )
        .alignment(Alignment::Right);

    f.render_widget(left, chunks[0]);
    f.render_widget(right, chunks[1]);
}

fn format_count(n: usize) -> String {
    let s = n.to_string();
    let mut out = String::with_capacity(s.len() + s.len() / 3);
    for (count, ch) in s.chars().rev().enumerate() {
        if count != 0 && count % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out.chars().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1,000");
        assert_eq!(format_count(1234567), "1,234,567");
    }
}
