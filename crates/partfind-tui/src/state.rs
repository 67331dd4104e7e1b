//! Application state management.

use partfind_core::MatchPolicy;
use partfind_index::{Query, QueryEngine, SearchIndex, SearchResult};
use std::path::PathBuf;

/// Application mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    /// Main search mode
    Search,
    /// Help overlay
    Help,
}

/// Focus target in search mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    /// Search input is focused
    Input,
    /// Results list is focused
    Results,
}

/// Status line message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusMessage {
    Info(String),
    Error(String),
}

/// What the header shows about the loaded data.
#[derive(Debug, Clone)]
pub struct SourceStatus {
    pub path: PathBuf,
    pub sheet: String,
    pub column: String,
    pub entries: usize,
    pub available: bool,
}

/// Application state
pub struct AppState {
    /// Current mode
    pub mode: AppMode,
    /// Search state
    pub search: SearchState,
    /// UI state
    pub ui: UiState,
    /// Loaded source
    pub source: SourceStatus,
    /// Active match policy
    pub policy: MatchPolicy,
    /// Last status message
    pub message: Option<StatusMessage>,
    /// Set by Ctrl+R, consumed by the main loop
    pub reload_requested: bool,
    should_quit: bool,
}

impl AppState {
    /// Create a new application state
    pub fn new(source: SourceStatus, policy: MatchPolicy) -> Self {
        Self {
            mode: AppMode::Search,
            search: SearchState::new(),
            ui: UiState::new(),
            source,
            policy,
            message: None,
            reload_requested: false,
            should_quit: false,
        }
    }

    /// Run the current query against `index` and reset the selection.
    pub fn perform_search(&mut self, index: &SearchIndex, limit: Option<usize>) {
        let engine = QueryEngine::new(index).with_policy(self.policy);
        let query = Query::new(self.search.query.as_str()).with_limit(limit);

        let hits = engine.run(&query);
        self.search.total = hits.total;
        self.search.results = hits.results;
        self.search.selected_index = 0;
        self.ui.scroll_offset = 0;
        if self.search.results.is_empty() {
            self.search.focus = FocusTarget::Input;
        }
    }

    /// True when the query has no searchable words.
    pub fn query_is_blank(&self) -> bool {
        Query::new(self.search.query.as_str()).is_blank()
    }

    pub fn selected_result(&self) -> Option<&SearchResult> {
        self.search.results.get(self.search.selected_index)
    }

    pub fn set_info(&mut self, message: impl Into<String>) {
        self.message = Some(StatusMessage::Info(message.into()));
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.message = Some(StatusMessage::Error(message.into()));
    }

    /// Check if should quit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Request quit
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Toggle help overlay
    pub fn toggle_help(&mut self) {
        self.mode = match self.mode {
            AppMode::Help => AppMode::Search,
            AppMode::Search => AppMode::Help,
        };
    }
}

/// Search state
pub struct SearchState {
    /// Current query
    pub query: String,
    /// Cursor position in the query, in characters
    pub cursor_position: usize,
    /// Results shown (possibly capped)
    pub results: Vec<SearchResult>,
    /// Total number of matches
    pub total: usize,
    /// Selected result index
    pub selected_index: usize,
    /// Current focus target
    pub focus: FocusTarget,
}

impl SearchState {
    /// Create a new search state
    pub fn new() -> Self {
        Self {
            query: String::new(),
            cursor_position: 0,
            results: Vec::new(),
            total: 0,
            selected_index: 0,
            focus: FocusTarget::Input,
        }
    }

    pub fn is_input_focused(&self) -> bool {
        self.focus == FocusTarget::Input
    }

    pub fn is_results_focused(&self) -> bool {
        self.focus == FocusTarget::Results
    }

    /// Switch focus between input and results.
    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            FocusTarget::Input if !self.results.is_empty() => FocusTarget::Results,
            _ => FocusTarget::Input,
        };
    }

    fn byte_offset(&self, char_pos: usize) -> usize {
        self.query
            .char_indices()
            .nth(char_pos)
            .map_or(self.query.len(), |(i, _)| i)
    }

    /// Insert a character at the cursor.
    pub fn insert_char(&mut self, c: char) {
        let at = self.byte_offset(self.cursor_position);
        self.query.insert(at, c);
        self.cursor_position += 1;
    }

    /// Delete the character before the cursor.
    pub fn delete_char(&mut self) {
        if self.cursor_position == 0 {
            return;
        }
        let at = self.byte_offset(self.cursor_position - 1);
        self.query.remove(at);
        self.cursor_position -= 1;
    }

    pub fn move_cursor_left(&mut self) {
        self.cursor_position = self.cursor_position.saturating_sub(1);
    }

    pub fn move_cursor_right(&mut self) {
        self.cursor_position = (self.cursor_position + 1).min(self.query.chars().count());
    }

    /// Clear the query and results.
    pub fn clear_query(&mut self) {
        self.query.clear();
        self.cursor_position = 0;
        self.results.clear();
        self.total = 0;
        self.selected_index = 0;
        self.focus = FocusTarget::Input;
    }

    pub fn select_next(&mut self) {
        if self.selected_index + 1 < self.results.len() {
            self.selected_index += 1;
        }
    }

    pub fn select_previous(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    pub fn select_first(&mut self) {
        self.selected_index = 0;
    }

    pub fn select_last(&mut self) {
        self.selected_index = self.results.len().saturating_sub(1);
    }
}

impl Default for SearchState {
    fn default() -> Self {
        Self::new()
    }
}

/// UI state (scrolling)
pub struct UiState {
    /// First visible result
    pub scroll_offset: usize,
    /// Number of visible result rows
    pub viewport_height: usize,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            scroll_offset: 0,
            viewport_height: 1,
        }
    }

    /// Keep `selected` inside the viewport.
    pub fn update_scroll(&mut self, selected: usize) {
        if selected < self.scroll_offset {
            self.scroll_offset = selected;
        } else if selected >= self.scroll_offset + self.viewport_height {
            self.scroll_offset = selected + 1 - self.viewport_height;
        }
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}
