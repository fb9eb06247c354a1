use std::time::Duration;

use anyhow::Result;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::{Position, Rect};

use crate::app::App;
use crate::ui;

/// Poll for events with a timeout
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Handle a key event
pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    // If help is shown, any key closes it
    if app.show_help {
        app.show_help = false;
        return;
    }

    // If the detail overlay is shown, keys only dismiss it; gallery
    // navigation stays suspended until it closes
    if app.modal.is_open() {
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Backspace | KeyCode::Char('q') => {
                app.close_modal();
            }
            _ => {}
        }
        return;
    }

    // If search input is active, handle text input
    if app.search_active {
        handle_search_input(app, key);
        return;
    }

    match key.code {
        // Quit
        KeyCode::Char('q') => app.quit(),

        // Navigation (left/right by tile, up/down by row)
        KeyCode::Up | KeyCode::Char('k') => app.select_row_up(),
        KeyCode::Down | KeyCode::Char('j') => app.select_row_down(),
        KeyCode::Left | KeyCode::Char('h') => app.select_prev(),
        KeyCode::Right | KeyCode::Char('l') => app.select_next(),
        KeyCode::PageUp => app.select_prev_n(app.grid_cols.max(1) * 3),
        KeyCode::PageDown => app.select_next_n(app.grid_cols.max(1) * 3),
        KeyCode::Home => app.select_first(),
        KeyCode::End => app.select_last(),

        // Open the detail overlay
        KeyCode::Enter => app.open_modal(),

        // Escape with nothing open has no effect
        KeyCode::Esc => {}

        // Reload
        KeyCode::Char('r') => {
            app.request_fetch();
            app.set_status_message("Reloading...".to_string());
        }

        // Help
        KeyCode::Char('?') => app.toggle_help(),

        // Search (start typing to filter by name)
        KeyCode::Char('/') => app.start_search(),

        // Clear search
        KeyCode::Char('c') => {
            if !app.search_text.is_empty() {
                app.clear_search();
            }
        }

        _ => {}
    }
}

/// Handle key input while search is active
fn handle_search_input(app: &mut App, key: KeyEvent) {
    match key.code {
        // Confirm query
        KeyCode::Enter => {
            app.confirm_search();
        }

        // Cancel input mode (keep text but stop capturing)
        KeyCode::Esc => {
            app.cancel_search();
        }

        // Clear and exit
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.clear_search();
        }

        // Backspace (each edit goes back to the server)
        KeyCode::Backspace => {
            app.search_pop();
            if app.search_text.is_empty() {
                app.search_active = false;
            }
        }

        // Type characters
        KeyCode::Char(c) => {
            app.search_push(c);
        }

        _ => {}
    }
}

/// Handle mouse events
///
/// `area` is the full frame area from the last draw; the gallery and
/// overlay rectangles are recomputed from it with the same geometry
/// the renderer used.
pub fn handle_mouse_event(app: &mut App, mouse: MouseEvent, area: Rect) {
    if app.show_help {
        if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
            app.show_help = false;
        }
        return;
    }

    if app.modal.is_open() {
        if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
            let pos = Position::new(mouse.column, mouse.row);
            match ui::detail::overlay_rect(area) {
                Some(overlay) => {
                    if ui::detail::close_button_rect(overlay).contains(pos) {
                        app.close_modal();
                    } else if !overlay.contains(pos) {
                        // Backdrop click; clicks inside the overlay
                        // content are ignored
                        app.close_modal();
                    }
                }
                // Overlay could not be drawn at this size; treat the
                // whole screen as backdrop
                None => app.close_modal(),
            }
        }
        return;
    }

    match mouse.kind {
        // Scroll wheel moves the selection
        MouseEventKind::ScrollUp => {
            app.select_prev();
        }
        MouseEventKind::ScrollDown => {
            app.select_next();
        }

        // Click on a tile opens its detail; clicks outside any tile
        // are ignored
        MouseEventKind::Down(MouseButton::Left) => {
            let chunks = ui::screen_chunks(area);
            if let Some(index) = ui::gallery::hit_test(
                chunks.content,
                app.grid_cols,
                app.scroll_row,
                app.tiles.len(),
                mouse.column,
                mouse.row,
            ) {
                app.open_modal_at(index);
            }
        }

        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;

    use menagerie_types::AnimalRecord;

    use super::*;
    use crate::app::ModalState;
    use crate::source::{ChannelSource, FetchOutcome};

    const AREA: Rect = Rect {
        x: 0,
        y: 0,
        width: 80,
        height: 24,
    };

    fn record(name: &str) -> AnimalRecord {
        AnimalRecord {
            name: name.to_string(),
            kind: "Mammal".to_string(),
            color: "Red".to_string(),
            description: String::new(),
            life_span: "2-5 years".to_string(),
            image_path: format!("/images/{}.png", name.to_lowercase()),
        }
    }

    fn app_with_tiles(names: &[&str]) -> (mpsc::Sender<FetchOutcome>, App) {
        let (tx, source) = ChannelSource::create("test");
        let mut app = App::new(Box::new(source), "http://localhost:3000");
        app.request_fetch();
        tx.send(FetchOutcome {
            seq: app.issued_seq(),
            result: Ok(names.iter().map(|n| record(n)).collect()),
        })
        .unwrap();
        app.pump();
        // Geometry a renderer would have produced for an 80x24 frame
        app.grid_cols = 3;
        app.scroll_row = 0;
        (tx, app)
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_escape_with_modal_closed_is_noop() {
        let (_tx, mut app) = app_with_tiles(&["Fox"]);
        handle_key_event(&mut app, key(KeyCode::Esc));
        assert_eq!(app.modal, ModalState::Closed);
        assert!(app.running);
        assert_eq!(app.selected_index, 0);
    }

    #[test]
    fn test_enter_opens_and_escape_closes_modal() {
        let (_tx, mut app) = app_with_tiles(&["Fox", "Owl"]);

        handle_key_event(&mut app, key(KeyCode::Enter));
        assert!(app.modal.is_open());

        handle_key_event(&mut app, key(KeyCode::Esc));
        assert_eq!(app.modal, ModalState::Closed);
    }

    #[test]
    fn test_navigation_suspended_while_modal_open() {
        let (_tx, mut app) = app_with_tiles(&["Fox", "Owl", "Bear"]);

        handle_key_event(&mut app, key(KeyCode::Enter));
        handle_key_event(&mut app, key(KeyCode::Right));
        // Right is swallowed by the open modal
        assert!(app.modal.is_open());
        assert_eq!(app.selected_index, 0);
    }

    #[test]
    fn test_search_captures_keystrokes() {
        let (_tx, mut app) = app_with_tiles(&["Fox"]);

        handle_key_event(&mut app, key(KeyCode::Char('/')));
        assert!(app.search_active);

        let seq_before = app.issued_seq();
        handle_key_event(&mut app, key(KeyCode::Char('o')));
        handle_key_event(&mut app, key(KeyCode::Char('x')));

        assert_eq!(app.search_text, "ox");
        // Each keystroke issued a fresh fetch
        assert_eq!(app.issued_seq(), seq_before + 2);
        // 'q' inside search types rather than quits
        handle_key_event(&mut app, key(KeyCode::Char('q')));
        assert!(app.running);
        assert_eq!(app.search_text, "oxq");
    }

    #[test]
    fn test_backspace_to_empty_exits_search_mode() {
        let (_tx, mut app) = app_with_tiles(&["Fox"]);

        handle_key_event(&mut app, key(KeyCode::Char('/')));
        handle_key_event(&mut app, key(KeyCode::Char('o')));
        handle_key_event(&mut app, key(KeyCode::Backspace));

        assert!(app.search_text.is_empty());
        assert!(!app.search_active);
    }

    #[test]
    fn test_search_escape_keeps_text() {
        let (_tx, mut app) = app_with_tiles(&["Fox"]);

        handle_key_event(&mut app, key(KeyCode::Char('/')));
        handle_key_event(&mut app, key(KeyCode::Char('o')));
        handle_key_event(&mut app, key(KeyCode::Esc));

        assert!(!app.search_active);
        assert_eq!(app.search_text, "o");
    }

    #[test]
    fn test_click_maps_grid_cell_to_tile() {
        let (_tx, mut app) = app_with_tiles(&["Fox", "Owl", "Bear", "Wolf"]);

        // Content band starts at row 2; col 1, grid row 0 -> index 1
        handle_mouse_event(&mut app, click(30, 3), AREA);
        assert!(app.modal.is_open());
        assert_eq!(app.modal.tile().unwrap().name, "Owl");
        app.close_modal();

        // col 0, grid row 1 -> index 3
        handle_mouse_event(&mut app, click(10, 7), AREA);
        assert!(app.modal.is_open());
        assert_eq!(app.modal.tile().unwrap().name, "Wolf");
    }

    #[test]
    fn test_click_outside_tiles_is_ignored() {
        let (_tx, mut app) = app_with_tiles(&["Fox"]);

        // Right of the last column (3 * 26 = 78)
        handle_mouse_event(&mut app, click(79, 3), AREA);
        assert_eq!(app.modal, ModalState::Closed);

        // Below the only tile row, past the tile list
        handle_mouse_event(&mut app, click(0, 12), AREA);
        assert_eq!(app.modal, ModalState::Closed);
    }

    #[test]
    fn test_backdrop_click_closes_modal() {
        let (_tx, mut app) = app_with_tiles(&["Fox"]);
        app.open_modal();

        // (0, 0) is outside the centered overlay
        handle_mouse_event(&mut app, click(0, 0), AREA);
        assert_eq!(app.modal, ModalState::Closed);
    }

    #[test]
    fn test_click_inside_overlay_keeps_modal_open() {
        let (_tx, mut app) = app_with_tiles(&["Fox"]);
        app.open_modal();

        // Overlay for 80x24 is Rect(12, 5, 56, 14); (40, 10) is inside
        handle_mouse_event(&mut app, click(40, 10), AREA);
        assert!(app.modal.is_open());
    }

    #[test]
    fn test_close_button_click_closes_modal() {
        let (_tx, mut app) = app_with_tiles(&["Fox"]);
        app.open_modal();

        // Close button for the 80x24 overlay sits at (64..67, 5)
        handle_mouse_event(&mut app, click(65, 5), AREA);
        assert_eq!(app.modal, ModalState::Closed);
    }

    #[test]
    fn test_scroll_wheel_moves_selection() {
        let (_tx, mut app) = app_with_tiles(&["Fox", "Owl", "Bear"]);

        let scroll_down = MouseEvent {
            kind: MouseEventKind::ScrollDown,
            column: 10,
            row: 10,
            modifiers: KeyModifiers::NONE,
        };
        handle_mouse_event(&mut app, scroll_down, AREA);
        assert_eq!(app.selected_index, 1);
    }

    #[test]
    fn test_any_key_closes_help() {
        let (_tx, mut app) = app_with_tiles(&["Fox"]);
        handle_key_event(&mut app, key(KeyCode::Char('?')));
        assert!(app.show_help);
        handle_key_event(&mut app, key(KeyCode::Char('x')));
        assert!(!app.show_help);
    }
}
