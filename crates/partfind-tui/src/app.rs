//! Main application loop and event handling.

use crate::state::{AppMode, AppState, FocusTarget, SourceStatus};
use crate::ui;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use partfind_core::Config;
use partfind_loader::{IndexCache, Refresh, WorkbookLoader};
use partfind_watcher::SourceWatcher;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use tracing::{info, warn};

/// The index and the things that keep it current.
struct Session {
    cache: IndexCache,
    watcher: Option<SourceWatcher>,
    limit: Option<usize>,
}

impl Session {
    fn open(config: &Config, app: &mut AppState) -> Self {
        let mut session = Self {
            cache: IndexCache::new(WorkbookLoader::new(config.source.clone())),
            watcher: None,
            limit: config.search.limit,
        };

        session.watcher = match SourceWatcher::new(&config.source.path) {
            Ok(watcher) => Some(watcher),
            Err(e) => {
                warn!("Not watching source: {e}");
                None
            }
        };

        session.refresh(app, false);
        session
    }

    /// Re-check the source and rebuild if needed, then re-run the query.
    fn refresh(&mut self, app: &mut AppState, force: bool) {
        let outcome = if force {
            self.cache.reload()
        } else {
            self.cache.refresh()
        };

        match outcome {
            Ok(Refresh::Rebuilt { entries }) => {
                info!("Loaded {entries} entries");
                app.set_info(format!("✓ loaded {entries} entries"));
            }
            Ok(Refresh::Unchanged) => {}
            Err(e) => app.set_error(e.to_string()),
        }

        let index = self.cache.current();
        app.source.entries = index.len();
        app.source.available = self.cache.fingerprint().is_some();
        self.search(app);
    }

    fn search(&self, app: &mut AppState) {
        app.perform_search(&self.cache.current(), self.limit);
    }

    fn poll_source(&mut self, app: &mut AppState) {
        let Some(event) = self.watcher.as_ref().and_then(SourceWatcher::poll) else {
            return;
        };
        info!("Source changed on disk: {:?}", event);
        self.refresh(app, false);
    }
}

/// Run the TUI application
pub fn run(config: Config) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = AppState::new(
        SourceStatus {
            path: config.source.path.clone(),
            sheet: config.source.sheet.clone(),
            column: config.source.column.clone(),
            entries: 0,
            available: false,
        },
        config.search.policy,
    );
    let mut session = Session::open(&config, &mut app);

    // Run the main loop
    let res = run_app(&mut terminal, &mut app, &mut session);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

/// Main application loop
fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut AppState,
    session: &mut Session,
) -> Result<()> {
    let mut last_query = app.search.query.clone();

    loop {
        terminal.draw(|f| ui::render(f, app))?;

        if app.search.query != last_query {
            last_query = app.search.query.clone();
            session.search(app);
        }

        if app.reload_requested {
            app.reload_requested = false;
            session.refresh(app, true);
        }

        session.poll_source(app);

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    handle_key_event(app, key.code, key.modifiers);
                }
            }
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}

/// Handle keyboard events
fn handle_key_event(app: &mut AppState, key: KeyCode, modifiers: KeyModifiers) {
    match app.mode {
        AppMode::Search => handle_search_keys(app, key, modifiers),
        AppMode::Help => handle_help_keys(app, key, modifiers),
    }
}

/// Handle keys in search mode
fn handle_search_keys(app: &mut AppState, key: KeyCode, modifiers: KeyModifiers) {
    // Global keys that work regardless of focus
    match (key, modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
            app.quit();
            return;
        }
        (KeyCode::Char('r'), KeyModifiers::CONTROL) => {
            app.reload_requested = true;
            return;
        }
        (KeyCode::Char('?'), KeyModifiers::NONE) if !app.search.is_input_focused() => {
            app.toggle_help();
            return;
        }
        (KeyCode::Tab, KeyModifiers::NONE) => {
            app.search.toggle_focus();
            return;
        }
        (KeyCode::Esc, KeyModifiers::NONE) => {
            if app.search.is_results_focused() {
                app.search.focus = FocusTarget::Input;
            } else {
                app.search.clear_query();
                app.message = None;
            }
            return;
        }
        _ => {}
    }

    if app.search.is_input_focused() {
        handle_input_keys(app, key, modifiers);
    } else {
        handle_results_keys(app, key, modifiers);
    }
}

/// Handle keys when input is focused
fn handle_input_keys(app: &mut AppState, key: KeyCode, modifiers: KeyModifiers) {
    match (key, modifiers) {
        (KeyCode::Char(c), KeyModifiers::NONE) | (KeyCode::Char(c), KeyModifiers::SHIFT) => {
            app.search.insert_char(c);
        }
        (KeyCode::Backspace, _) => {
            app.search.delete_char();
        }
        (KeyCode::Left, KeyModifiers::NONE) => {
            app.search.move_cursor_left();
        }
        (KeyCode::Right, KeyModifiers::NONE) => {
            app.search.move_cursor_right();
        }
        (KeyCode::Down, KeyModifiers::NONE) | (KeyCode::Enter, _) => {
            if !app.search.results.is_empty() {
                app.search.focus = FocusTarget::Results;
            }
        }
        _ => {}
    }
}

/// Handle keys when results are focused
fn handle_results_keys(app: &mut AppState, key: KeyCode, modifiers: KeyModifiers) {
    match (key, modifiers) {
        (KeyCode::Up, KeyModifiers::NONE) if app.search.selected_index == 0 => {
            app.search.focus = FocusTarget::Input;
        }
        (KeyCode::Char('j'), KeyModifiers::NONE) | (KeyCode::Down, KeyModifiers::NONE) => {
            app.search.select_next();
        }
        (KeyCode::Char('k'), KeyModifiers::NONE) | (KeyCode::Up, KeyModifiers::NONE) => {
            app.search.select_previous();
        }
        (KeyCode::Char('g'), KeyModifiers::NONE) | (KeyCode::Home, _) => {
            app.search.select_first();
        }
        (KeyCode::Char('G'), KeyModifiers::SHIFT) | (KeyCode::End, _) => {
            app.search.select_last();
        }
        (KeyCode::Char('q'), KeyModifiers::NONE) => {
            app.quit();
        }
        _ => {}
    }
}

/// Handle keys in help mode
fn handle_help_keys(app: &mut AppState, key: KeyCode, modifiers: KeyModifiers) {
    match (key, modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => app.quit(),
        (KeyCode::Char('?'), _) | (KeyCode::Esc, _) | (KeyCode::Char('q'), _) => {
            app.toggle_help();
        }
        _ => {}
    }
}
