// Binary includes library modules - some public API items are only for library consumers
#![allow(unused)]

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use tracing_subscriber::EnvFilter;

mod app;
mod data;
mod events;
mod settings;
mod source;
mod ui;

use app::App;
use menagerie_client::GalleryClient;
use settings::Settings;
use source::{CatalogSource, RemoteSource};

#[derive(Parser, Debug)]
#[command(name = "menagerie")]
#[command(about = "Terminal gallery for browsing an animal catalog served over HTTP")]
struct Args {
    /// Catalog server origin (e.g. http://localhost:3000)
    #[arg(short, long)]
    origin: Option<String>,

    /// Request timeout in seconds
    #[arg(short, long)]
    timeout: Option<u64>,

    /// Path to a settings file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Log to stderr; RUST_LOG controls verbosity
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let mut settings = Settings::load(args.config.as_deref())?;
    if let Some(origin) = args.origin {
        settings.origin = origin;
    }
    if let Some(timeout) = args.timeout {
        settings.timeout_secs = timeout;
    }

    let client = GalleryClient::builder()
        .origin(settings.origin.clone())
        .timeout(Duration::from_secs(settings.timeout_secs))
        .build();
    let origin = client.origin().to_string();

    // The fetch workers live on this runtime; the TUI itself stays on
    // the main thread
    let runtime = tokio::runtime::Runtime::new()?;
    let source = {
        let _guard = runtime.enter();
        RemoteSource::spawn(client)
    };

    run_tui(Box::new(source), origin)
}

/// Run the TUI with the given catalog source
fn run_tui(source: Box<dyn CatalogSource>, origin: String) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Setup panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic);
    }));

    // Create app and issue the initial fetch
    let mut app = App::new(source, origin);
    app.request_fetch();

    // Run the main loop
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    // Minimum terminal size for usable display
    const MIN_WIDTH: u16 = 40;
    const MIN_HEIGHT: u16 = 12;

    while app.running {
        // Draw UI
        terminal.draw(|frame| {
            let area = frame.area();

            // Check for minimum terminal size
            if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
                let msg = format!(
                    "Terminal too small: {}x{}\nMinimum: {}x{}\n\nResize to continue",
                    area.width, area.height, MIN_WIDTH, MIN_HEIGHT
                );
                let paragraph = ratatui::widgets::Paragraph::new(msg)
                    .alignment(ratatui::layout::Alignment::Center)
                    .style(ratatui::style::Style::default().fg(ratatui::style::Color::Yellow));
                let centered = Rect::new(0, (area.height / 2).saturating_sub(2), area.width, 5);
                frame.render_widget(paragraph, centered);
                return;
            }

            let chunks = ui::screen_chunks(area);

            // Render header with catalog counts
            ui::common::render_header(frame, app, chunks.header);

            // Render search bar
            ui::common::render_search_bar(frame, app, chunks.search);

            // Render the gallery grid (or the failure message)
            ui::gallery::render(frame, app, chunks.content);

            // Render status bar
            ui::common::render_status_bar(frame, app, chunks.status);

            // Render detail overlay if a tile is open
            if app.modal.is_open() {
                ui::detail::render_overlay(frame, app, area);
            }

            // Render help overlay if active
            if app.show_help {
                ui::common::render_help(frame, app, area);
            }
        })?;

        // Poll for events with a short timeout
        if let Some(event) = events::poll_event(Duration::from_millis(100))? {
            match event {
                Event::Key(key) => events::handle_key_event(app, key),
                Event::Mouse(mouse) => {
                    let size = terminal.size()?;
                    let area = Rect::new(0, 0, size.width, size.height);
                    events::handle_mouse_event(app, mouse, area);
                }
                Event::Resize(_, _) => {
                    // Terminal will redraw on next iteration
                }
                _ => {}
            }
        }

        // Apply any finished fetches
        app.pump();
    }

    Ok(())
}
