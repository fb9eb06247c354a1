//! Common UI components shared across the screen.
//!
//! This module contains the header bar, search bar, status bar, and
//! help overlay.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;

/// Render the header bar with catalog overview.
///
/// Displays: title, total/shown counts, loading indicator.
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![
        Span::styled(" MENAGERIE ", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw("│ "),
    ];

    if app.loading && app.records.is_empty() {
        spans.push(Span::raw("Loading..."));
    } else {
        spans.push(Span::styled(
            format!("{}", app.records.len()),
            Style::default().add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw(" animals │ "));
        spans.push(Span::styled(
            format!("{}", app.tiles.len()),
            Style::default().add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw(" shown"));

        if app.loading {
            spans.push(Span::styled(
                " │ refreshing...",
                Style::default().add_modifier(Modifier::DIM),
            ));
        }
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Render the search bar line.
///
/// Shows the query and whether keystrokes are currently captured.
pub fn render_search_bar(frame: &mut Frame, app: &App, area: Rect) {
    let line = if app.search_active {
        Line::from(vec![
            Span::styled(" / ", app.theme.input_active),
            Span::raw(app.search_text.clone()),
            Span::styled("█", app.theme.input_active),
        ])
    } else if !app.search_text.is_empty() {
        Line::from(vec![
            Span::styled(" / ", Style::default().fg(app.theme.highlight)),
            Span::raw(app.search_text.clone()),
            Span::styled(
                "  (/:edit c:clear)",
                Style::default().add_modifier(Modifier::DIM),
            ),
        ])
    } else {
        Line::from(Span::styled(
            " Press / to search by name",
            Style::default().add_modifier(Modifier::DIM),
        ))
    };

    frame.render_widget(Paragraph::new(line), area);
}

/// Render the status bar at the bottom.
///
/// Shows: source description, available controls. Also displays
/// temporary status messages and fetch errors.
pub fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    // Check for temporary status message first
    if let Some(msg) = app.get_status_message() {
        let paragraph = Paragraph::new(format!(" {} ", msg))
            .style(Style::default().fg(app.theme.highlight));
        frame.render_widget(paragraph, area);
        return;
    }

    if let Some(ref err) = app.load_error {
        let paragraph = Paragraph::new(format!(" Error: {} | r:retry q:quit", err))
            .style(app.theme.error_style());
        frame.render_widget(paragraph, area);
        return;
    }

    // Context-sensitive controls
    let controls = if app.modal.is_open() {
        "Esc:close"
    } else if app.search_active {
        "Type to search | Enter:apply Esc:cancel"
    } else {
        "/:search Enter:detail r:reload ?:help q:quit"
    };

    let status = format!(" {} | {}", app.source_description(), controls);
    let paragraph = Paragraph::new(status).style(Style::default().add_modifier(Modifier::DIM));

    frame.render_widget(paragraph, area);
}

/// Render the help overlay with keyboard shortcuts.
///
/// Displayed as a centered modal on top of the gallery.
pub fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let help_text = vec![
        Line::from(vec![Span::styled("Keyboard Shortcuts", app.theme.header)]),
        Line::from(""),
        Line::from(vec![Span::styled(
            " Navigation",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from("  ←/→ h/l     Move selection"),
        Line::from("  ↑/↓ j/k     Move by row"),
        Line::from("  PgUp/PgDn   Jump three rows"),
        Line::from("  Home/End    First/last tile"),
        Line::from("  Enter       Open detail"),
        Line::from("  Esc         Close overlay"),
        Line::from(""),
        Line::from(vec![Span::styled(
            " Search",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from("  /         Start typing a name"),
        Line::from("  c         Clear the query"),
        Line::from(""),
        Line::from(vec![Span::styled(
            " General",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from("  r         Reload from server"),
        Line::from("  q         Quit"),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Press any key to close",
            Style::default().add_modifier(Modifier::DIM),
        )]),
    ];

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.highlight));

    let paragraph = Paragraph::new(help_text).block(block);

    // Center the help overlay - responsive to terminal size
    let help_width = 40u16.min(area.width.saturating_sub(4));
    let help_height = 22u16.min(area.height.saturating_sub(2));
    let x = area.x + (area.width.saturating_sub(help_width)) / 2;
    let y = area.y + (area.height.saturating_sub(help_height)) / 2;
    let help_area = Rect::new(x, y, help_width, help_height);

    // Clear the area behind the help
    frame.render_widget(ratatui::widgets::Clear, help_area);
    frame.render_widget(paragraph, help_area);
}
