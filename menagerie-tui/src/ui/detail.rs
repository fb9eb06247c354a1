//! Detail overlay rendering.
//!
//! Displays a modal overlay with the full record behind the selected
//! tile. The overlay rectangle and its close button are computed by
//! pure functions shared with the mouse handler, so "backdrop" and
//! "content" mean the same cells in both places.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::app::App;

/// Minimum width required for the detail overlay to render properly.
const MIN_OVERLAY_WIDTH: u16 = 44;
/// Minimum height required for the detail overlay to render properly.
const MIN_OVERLAY_HEIGHT: u16 = 14;

/// Compute the overlay rectangle for the given screen area.
///
/// Returns `None` when the terminal is too small to show the overlay
/// at all; callers treat that case as backdrop-only.
pub fn overlay_rect(area: Rect) -> Option<Rect> {
    if area.width < MIN_OVERLAY_WIDTH || area.height < MIN_OVERLAY_HEIGHT {
        return None;
    }

    // Width: 70% of screen, clamped to [MIN_OVERLAY_WIDTH, 90]
    let overlay_width = (area.width * 70 / 100).clamp(MIN_OVERLAY_WIDTH, 90);
    // Height: 60% of screen, clamped to [MIN_OVERLAY_HEIGHT, 26]
    let overlay_height = (area.height * 60 / 100).clamp(MIN_OVERLAY_HEIGHT, 26);

    let x = area.x + (area.width.saturating_sub(overlay_width)) / 2;
    let y = area.y + (area.height.saturating_sub(overlay_height)) / 2;
    Some(Rect::new(x, y, overlay_width, overlay_height))
}

/// The `[x]` close button cell range on the overlay's top border.
pub fn close_button_rect(overlay: Rect) -> Rect {
    Rect::new(overlay.x + overlay.width.saturating_sub(4), overlay.y, 3, 1)
}

/// Render the selected animal's details as a modal overlay.
pub fn render_overlay(frame: &mut Frame, app: &App, area: Rect) {
    let Some(tile) = app.modal.tile() else {
        return;
    };
    let Some(overlay_area) = overlay_rect(area) else {
        return;
    };

    // Clear the area behind the overlay
    frame.render_widget(Clear, overlay_area);

    // Split overlay into header, description, and footer sections
    let chunks = Layout::vertical([
        Constraint::Length(4), // Header with name and quick facts
        Constraint::Min(6),    // Description
        Constraint::Length(1), // Footer
    ])
    .split(overlay_area);

    // ===== HEADER SECTION =====
    let header_lines = vec![
        Line::from(vec![
            Span::styled(
                format!(" {} ", tile.name),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("({})", tile.kind),
                Style::default().add_modifier(Modifier::DIM),
            ),
        ]),
        Line::from(vec![
            Span::raw(" Color: "),
            Span::styled(
                tile.color.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw("    Life span: "),
            Span::styled(
                tile.life_span.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]),
    ];

    let header_block = Block::default()
        .title(" Animal Detail ")
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.highlight));

    let header = Paragraph::new(header_lines).block(header_block);
    frame.render_widget(header, chunks[0]);

    // ===== DESCRIPTION SECTION =====
    let body_lines = vec![
        Line::from(tile.description.clone()),
        Line::from(""),
        Line::from(vec![
            Span::raw("Image: "),
            Span::styled(
                tile.image_url.clone(),
                Style::default().add_modifier(Modifier::DIM),
            ),
        ]),
    ];

    let body_block = Block::default()
        .title(" Description ")
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.border));

    let body = Paragraph::new(body_lines)
        .wrap(Wrap { trim: true })
        .block(body_block);
    frame.render_widget(body, chunks[1]);

    // ===== FOOTER =====
    let footer = Paragraph::new(Line::from(vec![Span::styled(
        " Esc or click outside to close ",
        Style::default().add_modifier(Modifier::DIM),
    )]));
    frame.render_widget(footer, chunks[2]);

    // Close button on the top border, hit-testable by the mouse handler
    let close = Paragraph::new(Span::styled(
        "[x]",
        Style::default().fg(app.theme.highlight),
    ));
    frame.render_widget(close, close_button_rect(overlay_area));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlay_rect_centered() {
        let area = Rect::new(0, 0, 80, 24);
        let overlay = overlay_rect(area).unwrap();
        assert_eq!(overlay, Rect::new(12, 5, 56, 14));
    }

    #[test]
    fn test_overlay_rect_none_when_too_small() {
        assert!(overlay_rect(Rect::new(0, 0, 40, 24)).is_none());
        assert!(overlay_rect(Rect::new(0, 0, 80, 10)).is_none());
    }

    #[test]
    fn test_close_button_sits_on_top_border() {
        let overlay = Rect::new(12, 5, 56, 14);
        let close = close_button_rect(overlay);
        assert_eq!(close, Rect::new(64, 5, 3, 1));
    }
}
