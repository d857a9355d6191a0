//! Delivery sinks for stream results.
//!
//! A [`ResultSink`] is the capability a [`StreamHandle`](crate::StreamHandle)
//! delivers into. The host side owns the sink (usually through a
//! [`SinkRegistry`](crate::SinkRegistry)); handles hold only weak references
//! to it, so a sink disappears the moment its owner drops it and emitters
//! quietly degrade to no-ops.
//!
//! Three implementations ship with the crate:
//! - [`ChannelSink`] - bounded tokio mpsc channel, for async consumers
//! - [`LineSink`] - one JSON object per line over any `io::Write`
//! - [`CollectingSink`] - in-memory recording, for tests and assertions
//!
//! # Example
//!
//! ```ignore
//! use hostwire::{Notice, ResultSink};
//!
//! struct Logging;
//!
//! impl ResultSink for Logging {
//!     fn deliver(&self, notice: Notice) {
//!         eprintln!("[{}] {}", notice.event, notice.payload);
//!     }
//! }
//! ```

mod channel;
mod collect;
mod line;

pub use channel::{ChannelSink, DEFAULT_CHANNEL_CAPACITY};
pub use collect::CollectingSink;
pub use line::LineSink;

use crate::notice::Notice;

/// Capability for receiving stream results on the host's behalf.
///
/// Delivery is infallible from the emitter's point of view: a sink that
/// cannot accept a notice drops it and accounts for the loss itself,
/// because the emitting adapters declare no error surface.
///
/// Implementations must be `Send + Sync`; a sink may be hit from any task
/// or thread the native side runs its operations on.
pub trait ResultSink: Send + Sync {
    /// Deliver one notice to the host side.
    fn deliver(&self, notice: Notice);
}
