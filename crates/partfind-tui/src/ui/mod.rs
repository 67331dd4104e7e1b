//! UI components and rendering.

pub mod footer;
pub mod header;
pub mod help;
pub mod results;
pub mod search_input;
pub mod theme;

pub use theme::*;

use crate::state::{AppMode, AppState};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::Block,
    Frame,
};

/// Draw the whole screen.
pub fn render(f: &mut Frame, app: &mut AppState) {
    let area = f.area();
    f.render_widget(Block::default().style(Style::default().bg(BG_DARK)), area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(area);

    header::render(f, chunks[0], app);
    search_input::render(f, chunks[1], app);
    results::render(f, chunks[2], app);
    footer::render(f, chunks[3], app);

    if app.mode == AppMode::Help {
        help::render(f, area, app.policy);
    }
}
