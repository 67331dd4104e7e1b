//! partfind-tui: Terminal UI for searching part descriptions.

pub mod app;
pub mod state;
pub mod ui;

pub use app::run;
pub use state::{AppMode, AppState};
