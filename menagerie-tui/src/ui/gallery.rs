//! Gallery grid rendering.
//!
//! Draws the tile grid, keeps the selection visible, and exposes the
//! grid geometry as pure functions so mouse hit-testing in the event
//! layer lands on exactly the cells the renderer drew.

use ratatui::{
    layout::{Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::{App, LOAD_FAILURE_MESSAGE};

/// Width of one tile cell, borders included.
pub const TILE_WIDTH: u16 = 26;
/// Height of one tile cell, borders included.
pub const TILE_HEIGHT: u16 = 5;

/// Number of tile columns that fit in the given area.
pub fn grid_cols(area: Rect) -> usize {
    (area.width / TILE_WIDTH).max(1) as usize
}

/// Number of full tile rows that fit in the given area.
pub fn grid_rows(area: Rect) -> usize {
    (area.height / TILE_HEIGHT).max(1) as usize
}

/// Screen rectangle of the tile at `index`, given the current scroll.
///
/// Returns `None` when the tile is scrolled out of the viewport. The
/// rightmost column may be clipped on narrow terminals; the rect is
/// trimmed rather than dropped.
pub fn tile_rect(area: Rect, cols: usize, scroll_row: usize, index: usize) -> Option<Rect> {
    let cols = cols.max(1);
    let col = index % cols;
    let row = index / cols;

    if row < scroll_row {
        return None;
    }
    let vis_row = (row - scroll_row) as u16;

    let x = area.x + col as u16 * TILE_WIDTH;
    let y = area.y + vis_row * TILE_HEIGHT;
    if y + TILE_HEIGHT > area.y + area.height {
        return None;
    }

    let width = TILE_WIDTH.min((area.x + area.width).saturating_sub(x));
    if width == 0 {
        return None;
    }
    Some(Rect::new(x, y, width, TILE_HEIGHT))
}

/// Map a terminal cell to the tile drawn there, if any.
///
/// Clicks in the gap right of the last column, below the last row, or
/// past the end of the tile list resolve to `None` and are ignored by
/// the caller.
pub fn hit_test(
    area: Rect,
    cols: usize,
    scroll_row: usize,
    tile_count: usize,
    column: u16,
    row: u16,
) -> Option<usize> {
    if !area.contains(Position::new(column, row)) {
        return None;
    }
    let cols = cols.max(1);

    let col = ((column - area.x) / TILE_WIDTH) as usize;
    if col >= cols {
        return None;
    }
    let vis_row = ((row - area.y) / TILE_HEIGHT) as usize;

    let index = (scroll_row + vis_row) * cols + col;
    if index < tile_count {
        Some(index)
    } else {
        None
    }
}

/// Render the gallery grid.
///
/// On fetch failure the area holds only the failure message; no tiles
/// are drawn. Otherwise the tile list is drawn left-to-right,
/// top-to-bottom, scrolled so the selection stays visible. The grid
/// shape used here is written back to the app so the mouse handler
/// sees the same geometry.
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    if app.load_error.is_some() {
        // The area holds only the failure message; the status bar
        // carries the reason
        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(LOAD_FAILURE_MESSAGE, app.theme.error_style())),
        ];
        frame.render_widget(
            Paragraph::new(lines).alignment(ratatui::layout::Alignment::Center),
            area,
        );
        return;
    }

    let cols = grid_cols(area);
    let rows = grid_rows(area);
    app.grid_cols = cols;

    // Scroll to keep the selection on screen
    let selected_row = app.selected_index / cols;
    if selected_row < app.scroll_row {
        app.scroll_row = selected_row;
    } else if selected_row >= app.scroll_row + rows {
        app.scroll_row = selected_row + 1 - rows;
    }

    let first = app.scroll_row * cols;
    let last = app.tiles.len().min(first + rows * cols);

    for index in first..last {
        let Some(rect) = tile_rect(area, cols, app.scroll_row, index) else {
            continue;
        };
        let tile = &app.tiles[index];

        let selected = index == app.selected_index;
        let border_style = if selected {
            app.theme.selected
        } else {
            Style::default().fg(app.theme.border)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(app.theme.border_type)
            .border_style(border_style);

        let name_style = if selected {
            Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        };

        let lines = vec![
            Line::from(Span::styled(tile.name.clone(), name_style)),
            Line::from(Span::styled(
                tile.kind.clone(),
                Style::default().add_modifier(Modifier::DIM),
            )),
            Line::from(tile.color.clone()),
        ];

        frame.render_widget(Paragraph::new(lines).block(block), rect);
    }
}
