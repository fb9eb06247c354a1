//! # menagerie-client
//!
//! HTTP client for fetching animal records from a menagerie catalog
//! server.
//!
//! This crate is the data-loading half of the gallery: it knows the
//! server's endpoint layout and error modes, and hands back plain
//! [`AnimalRecord`] lists for the UI to render.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use menagerie_client::GalleryClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = GalleryClient::builder()
//!         .origin("http://localhost:3000")
//!         .build();
//!
//!     let animals = client.fetch_animals().await?;
//!     println!("Fetched {} animals", animals.len());
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod gallery;

pub use error::ClientError;
pub use gallery::GalleryClient;

// Re-export types for convenience
pub use menagerie_types::AnimalRecord;
