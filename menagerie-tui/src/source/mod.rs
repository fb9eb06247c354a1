//! Catalog source abstraction for receiving fetch outcomes.
//!
//! This module provides a trait-based abstraction for requesting the
//! animal catalog and receiving the results without blocking the UI
//! thread. The remote source talks HTTP in the background; the channel
//! source lets tests and embedders push outcomes directly.

mod channel;
mod remote;

pub use channel::ChannelSource;
pub use remote::RemoteSource;

use std::fmt::Debug;

use menagerie_client::ClientError;
use menagerie_types::AnimalRecord;

/// The result of one catalog fetch, tagged with its request sequence.
///
/// Sequence numbers are assigned by the requester and echoed back
/// unchanged; the application uses them to discard stale responses
/// when fetches overlap.
#[derive(Debug)]
pub struct FetchOutcome {
    /// The sequence number passed to [`CatalogSource::request`].
    pub seq: u64,
    /// The fetched records, or the failure that ended the attempt.
    pub result: Result<Vec<AnimalRecord>, ClientError>,
}

/// Trait for requesting catalog data from various backends.
///
/// Implementations kick off a fetch on `request` and deliver the
/// outcome through `poll`. Both methods are non-blocking; outcomes may
/// arrive in any order relative to their requests.
pub trait CatalogSource: Send + Debug {
    /// Start a fetch tagged with the given sequence number.
    fn request(&mut self, seq: u64);

    /// Poll for a completed fetch outcome.
    ///
    /// Returns `Some(outcome)` if a fetch has finished since the last
    /// poll, `None` otherwise.
    fn poll(&mut self) -> Option<FetchOutcome>;

    /// Returns a human-readable description of the source.
    ///
    /// Used for display in the TUI status bar.
    fn description(&self) -> &str;
}
