// Copyright 2026 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Coalescing scroll feed: batch offset changes, deliver the latest once.

/// Batches viewport scroll changes between delivery cycles.
///
/// Hosts call [`ScrollFeed::record`] as scroll changes arrive (possibly many
/// per frame) and [`ScrollFeed::take`] once per delivery cycle. A batch of
/// changes collapses into a single pending delivery carrying the most recent
/// offset; intermediate offsets are dropped. Subscribers therefore observe at
/// least one delivery per change batch, eventually, but not every sample.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollFeed {
    pending: Option<f64>,
}

impl ScrollFeed {
    /// Create a feed with no pending delivery.
    pub const fn new() -> Self {
        Self { pending: None }
    }

    /// Record a scroll offset change, replacing any undelivered one.
    pub fn record(&mut self, offset: f64) {
        self.pending = Some(offset);
    }

    /// Take the pending delivery, if any, clearing it.
    pub fn take(&mut self) -> Option<f64> {
        self.pending.take()
    }

    /// Whether a delivery is pending.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_feed_delivers_nothing() {
        let mut feed = ScrollFeed::new();
        assert!(!feed.is_pending());
        assert_eq!(feed.take(), None);
    }

    #[test]
    fn batch_coalesces_to_latest_offset() {
        let mut feed = ScrollFeed::new();
        feed.record(5.0);
        feed.record(0.0);
        feed.record(120.0);
        assert_eq!(feed.take(), Some(120.0));
        assert_eq!(feed.take(), None);
    }

    #[test]
    fn each_batch_delivers_once() {
        let mut feed = ScrollFeed::new();
        feed.record(10.0);
        assert_eq!(feed.take(), Some(10.0));
        feed.record(0.0);
        // Returning to zero is still a change and must be delivered.
        assert_eq!(feed.take(), Some(0.0));
        assert_eq!(feed.take(), None);
    }
}
