//! Application state and interaction logic.

use std::time::Instant;

use menagerie_types::AnimalRecord;

use crate::data::{build_tiles, Tile};
use crate::source::CatalogSource;
use crate::ui::Theme;

/// The literal shown in place of the gallery when a fetch fails.
pub const LOAD_FAILURE_MESSAGE: &str = "Failed to load animals.";

/// Whether the detail overlay is showing, and for which tile.
///
/// There is exactly one modal in the process; it either shows a copy
/// of one tile's fields or nothing at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalState {
    Closed,
    Open(Tile),
}

impl ModalState {
    /// True while the detail overlay is showing.
    pub fn is_open(&self) -> bool {
        matches!(self, ModalState::Open(_))
    }

    /// The tile being shown, if any.
    pub fn tile(&self) -> Option<&Tile> {
        match self {
            ModalState::Open(tile) => Some(tile),
            ModalState::Closed => None,
        }
    }
}

/// Main application state.
pub struct App {
    pub running: bool,
    pub show_help: bool,
    pub modal: ModalState,

    // Data source
    source: Box<dyn CatalogSource>,
    pub records: Vec<AnimalRecord>,
    pub tiles: Vec<Tile>,
    pub load_error: Option<String>,
    pub loading: bool,
    origin: String,

    // Fetch sequencing: only the outcome matching the latest issued
    // sequence is ever applied
    issued_seq: u64,

    // Navigation state
    pub selected_index: usize,
    /// Columns in the gallery grid, written by the renderer each frame.
    pub grid_cols: usize,
    /// First visible grid row, written by the renderer each frame.
    pub scroll_row: usize,

    // Search
    pub search_text: String,
    pub search_active: bool,

    // UI
    pub theme: Theme,

    // Status message (temporary feedback)
    pub status_message: Option<(String, Instant)>,
}

impl App {
    /// Create a new App with the given catalog source and server origin.
    pub fn new(source: Box<dyn CatalogSource>, origin: impl Into<String>) -> Self {
        Self {
            running: true,
            show_help: false,
            modal: ModalState::Closed,
            source,
            records: Vec::new(),
            tiles: Vec::new(),
            load_error: None,
            loading: false,
            origin: origin.into(),
            issued_seq: 0,
            selected_index: 0,
            grid_cols: 1,
            scroll_row: 0,
            search_text: String::new(),
            search_active: false,
            theme: Theme::auto_detect(),
            status_message: None,
        }
    }

    /// Returns a description of the current catalog source.
    pub fn source_description(&self) -> &str {
        self.source.description()
    }

    /// The server origin image paths are resolved against.
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// The latest fetch sequence handed to the source.
    pub fn issued_seq(&self) -> u64 {
        self.issued_seq
    }

    /// Set a temporary status message that will be shown for a few seconds.
    pub fn set_status_message(&mut self, message: String) {
        self.status_message = Some((message, Instant::now()));
    }

    /// Get the current status message if it hasn't expired (3 seconds).
    pub fn get_status_message(&self) -> Option<&str> {
        if let Some((msg, time)) = &self.status_message {
            if time.elapsed() < std::time::Duration::from_secs(3) {
                return Some(msg);
            }
        }
        None
    }

    /// Issue a fresh catalog fetch.
    ///
    /// Previous in-flight fetches are not cancelled; their outcomes
    /// are discarded by the sequence guard in [`App::pump`].
    pub fn request_fetch(&mut self) {
        self.issued_seq += 1;
        self.loading = true;
        self.source.request(self.issued_seq);
    }

    /// Drain completed fetch outcomes from the source.
    ///
    /// Applies at most the outcome matching the latest issued sequence;
    /// anything older is logged and dropped. Returns true if the
    /// displayed data changed.
    pub fn pump(&mut self) -> bool {
        let mut applied = false;

        while let Some(outcome) = self.source.poll() {
            if outcome.seq != self.issued_seq {
                tracing::debug!(
                    seq = outcome.seq,
                    latest = self.issued_seq,
                    "dropping stale fetch outcome"
                );
                continue;
            }

            self.loading = false;
            applied = true;

            match outcome.result {
                Ok(records) => {
                    self.records = records;
                    self.load_error = None;
                    self.rebuild_tiles();
                }
                Err(err) => {
                    tracing::warn!(error = %err, "catalog fetch failed");
                    self.records.clear();
                    self.tiles.clear();
                    self.load_error = Some(err.to_string());
                    self.clamp_selection();
                }
            }
        }

        applied
    }

    /// Rebuild the tile list from the held records and current query.
    ///
    /// Full replacement: the previous tiles are discarded wholesale.
    fn rebuild_tiles(&mut self) {
        self.tiles = build_tiles(&self.records, &self.search_text, &self.origin);
        self.clamp_selection();
    }

    fn clamp_selection(&mut self) {
        self.selected_index = self.selected_index.min(self.tiles.len().saturating_sub(1));
    }

    /// The tile under the selection cursor, if the gallery is non-empty.
    pub fn selected_tile(&self) -> Option<&Tile> {
        self.tiles.get(self.selected_index)
    }

    /// Open the detail overlay for the currently selected tile.
    ///
    /// No-op when the gallery is empty.
    pub fn open_modal(&mut self) {
        if let Some(tile) = self.selected_tile().cloned() {
            self.modal = ModalState::Open(tile);
        }
    }

    /// Open the detail overlay for a specific tile (mouse activation).
    pub fn open_modal_at(&mut self, index: usize) {
        if index < self.tiles.len() {
            self.selected_index = index;
            self.open_modal();
        }
    }

    /// Close the detail overlay if open.
    pub fn close_modal(&mut self) {
        self.modal = ModalState::Closed;
    }

    /// Toggle the help overlay.
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    /// Move selection forward by one tile.
    pub fn select_next(&mut self) {
        self.select_next_n(1);
    }

    /// Move selection back by one tile.
    pub fn select_prev(&mut self) {
        self.select_prev_n(1);
    }

    /// Move selection forward by n tiles.
    pub fn select_next_n(&mut self, n: usize) {
        let max = self.tiles.len().saturating_sub(1);
        self.selected_index = (self.selected_index + n).min(max);
    }

    /// Move selection back by n tiles.
    pub fn select_prev_n(&mut self, n: usize) {
        self.selected_index = self.selected_index.saturating_sub(n);
    }

    /// Move selection down one grid row.
    pub fn select_row_down(&mut self) {
        self.select_next_n(self.grid_cols.max(1));
    }

    /// Move selection up one grid row.
    pub fn select_row_up(&mut self) {
        self.select_prev_n(self.grid_cols.max(1));
    }

    /// Jump to the first tile.
    pub fn select_first(&mut self) {
        self.selected_index = 0;
    }

    /// Jump to the last tile.
    pub fn select_last(&mut self) {
        self.selected_index = self.tiles.len().saturating_sub(1);
    }

    /// Enter search input mode (starts capturing keystrokes).
    pub fn start_search(&mut self) {
        self.search_active = true;
    }

    /// Exit search input mode without clearing the query text.
    pub fn cancel_search(&mut self) {
        self.search_active = false;
    }

    /// Confirm the query and exit input mode.
    pub fn confirm_search(&mut self) {
        self.search_active = false;
    }

    /// Clear the query, exit input mode, and refetch.
    pub fn clear_search(&mut self) {
        self.search_text.clear();
        self.search_active = false;
        self.request_fetch();
    }

    /// Append a character to the query and refetch.
    ///
    /// Every accepted keystroke goes back to the server for a fresh
    /// record list; there is no client-side reuse of the last response.
    pub fn search_push(&mut self, c: char) {
        self.search_text.push(c);
        self.request_fetch();
    }

    /// Remove the last query character and refetch.
    pub fn search_pop(&mut self) {
        self.search_text.pop();
        self.request_fetch();
    }

    /// Signal the application to quit.
    pub fn quit(&mut self) {
        self.running = false;
    }
}
