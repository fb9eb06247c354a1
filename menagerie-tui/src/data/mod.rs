//! Display data derived from fetched records.
//!
//! The only processing the gallery needs is turning a record list plus
//! a search query into the tile list the renderer draws. That lives in
//! [`tiles`], as pure functions the tests call directly.

pub mod tiles;

pub use tiles::{build_tiles, Tile};
