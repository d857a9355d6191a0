//! Channel-backed delivery sink.
//!
//! Bridges emissions into a bounded mpsc channel so an async consumer (a
//! host dispatch loop, a forwarding task, a test) can drain them at its own
//! pace. Emitters never block: `deliver` uses `try_send`, and a full or
//! closed channel drops the notice and counts the loss.
//!
//! # Architecture
//!
//! ```text
//! StreamHandle 1 ─┐
//! StreamHandle 2 ─┼─► ChannelSink ─► mpsc::Receiver<Notice> ─► consumer
//! StreamHandle N ─┘
//! ```

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::mpsc;

use super::ResultSink;
use crate::notice::Notice;

/// Default channel capacity.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 256;

/// Sink that forwards notices into a bounded mpsc channel.
pub struct ChannelSink {
    /// Channel sender for notices.
    tx: mpsc::Sender<Notice>,
    /// Notices dropped due to a full channel or a closed receiver.
    dropped: AtomicU64,
}

impl ChannelSink {
    /// Create a sink with the given capacity, returning the consumer side.
    ///
    /// A zero capacity is clamped to one. The sink comes back in an
    /// [`Arc`] so it can be registered or downgraded for handles right
    /// away.
    pub fn bounded(capacity: usize) -> (Arc<ChannelSink>, mpsc::Receiver<Notice>) {
        let (tx, rx) = mpsc::channel(capacity.max(1));
        let sink = Arc::new(Self {
            tx,
            dropped: AtomicU64::new(0),
        });
        (sink, rx)
    }

    /// Create a sink with the default capacity.
    pub fn with_default_capacity() -> (Arc<ChannelSink>, mpsc::Receiver<Notice>) {
        Self::bounded(DEFAULT_CHANNEL_CAPACITY)
    }

    /// Number of notices dropped so far.
    #[inline]
    pub fn dropped_count(&self) -> u64 {
        self.dropped.load(Ordering::Relaxed)
    }

    /// Whether the consumer side has been dropped.
    #[inline]
    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}

impl ResultSink for ChannelSink {
    fn deliver(&self, notice: Notice) {
        if let Err(e) = self.tx.try_send(notice) {
            self.dropped.fetch_add(1, Ordering::Relaxed);
            match e {
                mpsc::error::TrySendError::Full(n) => {
                    tracing::warn!("Notice channel full, dropping '{}' notice", n.event);
                }
                mpsc::error::TrySendError::Closed(n) => {
                    tracing::warn!("Notice channel closed, dropping '{}' notice", n.event);
                }
            }
        }
    }
}
