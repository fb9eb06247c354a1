//! Channel-based catalog source.
//!
//! Receives fetch outcomes pushed from outside the event loop. This is
//! how the application state machine is exercised without a network:
//! tests construct one, drive the app, and feed outcomes by hand.

use std::sync::mpsc;

use super::{CatalogSource, FetchOutcome};

/// A catalog source fed through a channel.
///
/// `request` does not perform any I/O; it only records the sequence
/// number so the pusher (or a test) can see what was asked for.
#[derive(Debug)]
pub struct ChannelSource {
    receiver: mpsc::Receiver<FetchOutcome>,
    description: String,
    requested: Vec<u64>,
}

impl ChannelSource {
    /// Create a channel pair for pushing outcomes to a ChannelSource.
    ///
    /// Returns (sender, source) where the sender pushes outcomes and
    /// the source plugs into the app.
    pub fn create(source_description: &str) -> (mpsc::Sender<FetchOutcome>, Self) {
        let (tx, rx) = mpsc::channel();
        let source = Self {
            receiver: rx,
            description: format!("channel: {}", source_description),
            requested: Vec::new(),
        };
        (tx, source)
    }

    /// Sequence numbers that have been requested so far, oldest first.
    pub fn requested(&self) -> &[u64] {
        &self.requested
    }
}

impl CatalogSource for ChannelSource {
    fn request(&mut self, seq: u64) {
        self.requested.push(seq);
    }

    fn poll(&mut self) -> Option<FetchOutcome> {
        match self.receiver.try_recv() {
            Ok(outcome) => Some(outcome),
            Err(mpsc::TryRecvError::Empty) => None,
            Err(mpsc::TryRecvError::Disconnected) => None,
        }
    }

    fn description(&self) -> &str {
        &self.description
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_source_records_requests() {
        let (_tx, mut source) = ChannelSource::create("test");
        source.request(1);
        source.request(2);
        assert_eq!(source.requested(), &[1, 2]);
    }

    #[test]
    fn test_channel_source_delivers_pushed_outcomes() {
        let (tx, mut source) = ChannelSource::create("test");

        assert!(source.poll().is_none());

        tx.send(FetchOutcome {
            seq: 1,
            result: Ok(Vec::new()),
        })
        .unwrap();

        let outcome = source.poll().expect("outcome should be delivered");
        assert_eq!(outcome.seq, 1);
        assert!(outcome.result.is_ok());

        assert!(source.poll().is_none());
    }

    #[test]
    fn test_channel_source_description() {
        let (_tx, source) = ChannelSource::create("unit test");
        assert_eq!(source.description(), "channel: unit test");
    }
}
