//! HTTP-backed catalog source.
//!
//! Dispatches fetch requests to a background task pool so the UI
//! thread never waits on the network.

use tokio::sync::mpsc;

use menagerie_client::GalleryClient;

use super::{CatalogSource, FetchOutcome};

/// A catalog source that fetches records over HTTP.
///
/// Each `request` spawns an independent fetch task, so overlapping
/// requests really do race on the wire; the sequence numbers carried
/// by [`FetchOutcome`] are what lets the application keep only the
/// latest response.
///
/// Must be constructed inside a tokio runtime context (the dispatcher
/// task is spawned on the ambient runtime).
#[derive(Debug)]
pub struct RemoteSource {
    requests: mpsc::UnboundedSender<u64>,
    outcomes: mpsc::Receiver<FetchOutcome>,
    description: String,
}

impl RemoteSource {
    /// Spawn the background dispatcher for the given client.
    pub fn spawn(client: GalleryClient) -> Self {
        let description = format!("api: {}", client.origin());

        let (req_tx, mut req_rx) = mpsc::unbounded_channel::<u64>();
        let (out_tx, out_rx) = mpsc::channel(16);

        tokio::spawn(async move {
            while let Some(seq) = req_rx.recv().await {
                let client = client.clone();
                let tx = out_tx.clone();
                tokio::spawn(async move {
                    let result = client.fetch_animals().await;
                    // Receiver dropped means the UI is gone; nothing to do
                    let _ = tx.send(FetchOutcome { seq, result }).await;
                });
            }
        });

        Self {
            requests: req_tx,
            outcomes: out_rx,
            description,
        }
    }
}

impl CatalogSource for RemoteSource {
    fn request(&mut self, seq: u64) {
        // Send fails only if the dispatcher is gone, which only
        // happens during shutdown
        let _ = self.requests.send(seq);
    }

    fn poll(&mut self) -> Option<FetchOutcome> {
        match self.outcomes.try_recv() {
            Ok(outcome) => Some(outcome),
            Err(mpsc::error::TryRecvError::Empty) => None,
            Err(mpsc::error::TryRecvError::Disconnected) => None,
        }
    }

    fn description(&self) -> &str {
        &self.description
    }
}
