//! Terminal UI rendering using ratatui.
//!
//! This module contains all the rendering logic for the gallery.
//!
//! ## Submodules
//!
//! - [`gallery`]: The tile grid, plus the grid geometry used for mouse
//!   hit-testing
//! - [`detail`]: Modal overlay showing one animal's full record
//! - [`common`]: Shared components (header, search bar, status bar,
//!   help overlay)
//! - [`theme`]: Light/dark theme support with terminal auto-detection
//!
//! ## Rendering Architecture
//!
//! The main loop in `main.rs` draws every frame top to bottom:
//!
//! ```text
//! ┌──────────────────────────────────────┐
//! │ Header (common::render_header)       │
//! ├──────────────────────────────────────┤
//! │ Search bar (common::render_search_bar)
//! ├──────────────────────────────────────┤
//! │                                      │
//! │ Gallery grid (gallery::render)       │
//! │                                      │
//! ├──────────────────────────────────────┤
//! │ Status bar (common::render_status_bar)
//! └──────────────────────────────────────┘
//!         ↑
//!    Overlays rendered on top:
//!    - detail::render_overlay
//!    - common::render_help
//! ```
//!
//! The row split lives in [`screen_chunks`] so the mouse handler can
//! recompute the exact rectangles the renderer used.

pub mod common;
pub mod detail;
pub mod gallery;
pub mod theme;

pub use theme::Theme;

use ratatui::layout::{Constraint, Layout, Rect};

/// The four horizontal bands of the screen.
#[derive(Debug, Clone, Copy)]
pub struct ScreenChunks {
    pub header: Rect,
    pub search: Rect,
    pub content: Rect,
    pub status: Rect,
}

/// Split the screen area into its bands.
///
/// Pure so the draw path and the mouse handler agree on geometry.
pub fn screen_chunks(area: Rect) -> ScreenChunks {
    let chunks = Layout::vertical([
        Constraint::Length(1), // Header bar
        Constraint::Length(1), // Search bar
        Constraint::Min(8),    // Gallery content
        Constraint::Length(1), // Status bar
    ])
    .split(area);

    ScreenChunks {
        header: chunks[0],
        search: chunks[1],
        content: chunks[2],
        status: chunks[3],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_chunks_bands() {
        let chunks = screen_chunks(Rect::new(0, 0, 80, 24));
        assert_eq!(chunks.header, Rect::new(0, 0, 80, 1));
        assert_eq!(chunks.search, Rect::new(0, 1, 80, 1));
        assert_eq!(chunks.content, Rect::new(0, 2, 80, 21));
        assert_eq!(chunks.status, Rect::new(0, 23, 80, 1));
    }
}
