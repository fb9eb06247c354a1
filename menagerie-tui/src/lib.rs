// Library crate: public API items may not be used by the binary
#![allow(unused)]

//! # menagerie-tui
//!
//! A terminal gallery for browsing an animal catalog served over HTTP.
//!
//! The gallery fetches animal records from a catalog server, renders
//! them as a grid of selectable tiles, shows a detail overlay for the
//! selected tile, and re-filters the grid as the user types a search
//! query. Every accepted search keystroke goes back to the server for
//! a fresh record list; a sequence guard keeps overlapping responses
//! from clobbering newer ones.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        Application                          │
//! │  ┌─────────┐    ┌──────────┐    ┌─────────┐    ┌─────────┐ │
//! │  │  app    │───▶│   data   │───▶│   ui    │───▶│ Terminal│ │
//! │  │ (state) │    │ (tiles)  │    │(rendering)   │         │ │
//! │  └────┬────┘    └──────────┘    └─────────┘    └─────────┘ │
//! │       │                                                     │
//! │       ▼                                                     │
//! │  ┌─────────┐                                                │
//! │  │ source  │◀── RemoteSource | ChannelSource               │
//! │  │ (fetch) │                                                │
//! │  └─────────┘                                                │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! - **[`app`]**: Application state ([`App`], [`ModalState`]), fetch
//!   sequencing, search and navigation transitions
//! - **[`source`]**: Catalog source abstraction ([`CatalogSource`]
//!   trait) with an HTTP-backed implementation and a channel-based one
//!   for tests and embedding
//! - **[`data`]**: Tile construction - the pure (records, query) →
//!   tiles step the renderer consumes
//! - **[`ui`]**: Terminal rendering using ratatui - gallery grid,
//!   detail overlay, search bar, theme support
//! - **[`events`]**: Key and mouse dispatch; handlers take `&mut App`
//!   directly so tests drive them without a terminal
//! - **[`settings`]**: Layered configuration (defaults, file,
//!   environment)
//!
//! ## Usage
//!
//! ### As a CLI tool
//!
//! ```bash
//! # Browse the catalog on the default origin
//! menagerie
//!
//! # Point at another server
//! menagerie --origin http://zoo.example:8080
//! ```
//!
//! ### As a library with a channel source
//!
//! ```
//! use menagerie_tui::{App, ChannelSource};
//!
//! // Create a channel for pushing fetch outcomes
//! let (tx, source) = ChannelSource::create("embedded");
//!
//! // Create the app
//! let app = App::new(Box::new(source), "http://localhost:3000");
//! ```

pub mod app;
pub mod data;
pub mod events;
pub mod settings;
pub mod source;
pub mod ui;

// Re-export main types for convenience
pub use app::{App, ModalState, LOAD_FAILURE_MESSAGE};
pub use data::{build_tiles, Tile};
pub use settings::Settings;
pub use source::{CatalogSource, ChannelSource, FetchOutcome, RemoteSource};
