//! # menagerie-types
//!
//! Core types for the menagerie animal catalog.
//!
//! This crate defines [`AnimalRecord`], the universal schema shared by
//! the HTTP client and the terminal UI. It is deliberately small: one
//! record type, the URL-joining helper, and the name-match predicate
//! used by gallery search.
//!
//! ## Features
//!
//! - `serde` - Serialize/Deserialize implementations matching the
//!   server's camelCase wire format

mod record;

pub use record::AnimalRecord;
