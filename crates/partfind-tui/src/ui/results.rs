//! Results list rendering.

use crate::state::AppState;
use crate::ui;
use partfind_index::{Highlighter, Segment};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &mut AppState) {
    let border_style = if app.search.is_results_focused() {
        Style::default().fg(ui::BORDER_FOCUS)
    } else {
        Style::default().fg(ui::BORDER_DIM)
    };

    let title = results_title(app);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(title)
        .style(Style::default().bg(ui::BG_SURFACE));

    if app.search.results.is_empty() {
        let empty = Paragraph::new(Line::styled(
            empty_hint(app),
            Style::default()
                .fg(ui::TEXT_MUTED)
                .add_modifier(Modifier::ITALIC),
        ))
        .block(block);
        f.render_widget(empty, area);
        return;
    }

    let results = &app.search.results;
    let selected = app.search.selected_index;

    // Update scrolling state.
    let viewport_height = area.height.saturating_sub(2) as usize; // borders
    app.ui.viewport_height = viewport_height.max(1);
    app.ui.update_scroll(selected);

    let start = app.ui.scroll_offset.min(results.len());
    let end = (start + viewport_height).min(results.len());

    let highlighter = Highlighter::new(&app.search.query);

    let items: Vec<ListItem> = results[start..end]
        .iter()
        .enumerate()
        .map(|(i, result)| {
            let is_selected = start + i == selected;
            let marker = if is_selected { "▸" } else { " " };

            let mut spans = vec![
                Span::styled(marker, Style::default().fg(ui::PRIMARY)),
                Span::raw(" "),
                Span::styled(
                    format!("{:>6}  ", result.position + 1),
                    Style::default()
                        .fg(ui::TEXT_MUTED)
                        .add_modifier(Modifier::DIM),
                ),
            ];
            spans.extend(
                highlighter
                    .segments(&result.text)
                    .into_iter()
                    .map(segment_span),
            );

            let style = if is_selected {
                Style::default().bg(ui::BG_ELEVATED)
            } else {
                Style::default()
            };

            ListItem::new(Line::from(spans)).style(style)
        })
        .collect();

    let list = List::new(items).block(block);
    f.render_widget(list, area);
}

fn segment_span(segment: Segment<'_>) -> Span<'_> {
    match segment {
        Segment::Plain(text) => Span::styled(text, Style::default().fg(ui::TEXT_PRIMARY)),
        Segment::Match(text) => Span::styled(
            text,
            Style::default()
                .fg(ui::HIGHLIGHT_FG)
                .bg(ui::HIGHLIGHT_BG)
                .add_modifier(Modifier::BOLD),
        ),
    }
}

fn empty_hint(app: &AppState) -> String {
    if app.query_is_blank() {
        "Please enter a search query.".to_string()
    } else if app.search.total == 0 {
        "No matches found.".to_string()
    } else {
        format!("{} match(es) hidden by the result limit.", app.search.total)
    }
}

fn results_title(app: &AppState) -> String {
    let shown = app.search.results.len();
    let total = app.search.total;

    if total == 0 {
        " results ".to_string()
    } else if shown < total {
        format!(" Found {total} match(es), showing {shown} ")
    } else {
        format!(" Found {total} match(es) ")
    }
}
