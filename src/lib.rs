//! # hostwire
//!
//! Result delivery adapters for native modules embedded in a JavaScript
//! host.
//!
//! Native code invoked across a JS bridge owes its results back in one of
//! two shapes, and this crate packages both:
//!
//! - **Response**: one request, one reply. [`ResponseHandle`] holds the
//!   host's single-use response function and fires it at most once.
//! - **Stream**: one subscription, many results. [`StreamHandle`] tags
//!   each payload with an event name and forwards it to a weakly held
//!   delegate implementing [`ResultSink`].
//!
//! ## Architecture
//!
//! ```text
//! native op ──► ResponseHandle ──► FnOnce(String)          (reply, once)
//! native op ──► StreamHandle ───► Weak<dyn ResultSink>     (events, many)
//!                                      │
//!                    SinkRegistry ─────┘ (owns sinks, one per namespace)
//! ```
//!
//! Delivery targets are optional by contract: an unset callback, an unset
//! event name, or an already-dropped sink turns the emission into a quiet
//! no-op, reported as [`Delivery::Dropped`] rather than an error. Payloads
//! are opaque strings forwarded unmodified; the `send_json` helpers are an
//! opt-in serde layer on top.
//!
//! ## Example
//!
//! ```ignore
//! use hostwire::{ChannelSink, SinkRegistry};
//!
//! #[tokio::main]
//! async fn main() {
//!     let registry = SinkRegistry::new();
//!     let (sink, mut rx) = ChannelSink::bounded(64);
//!     registry.register("wallet", sink);
//!
//!     let stream = registry.stream("wallet", "invoice_paid").unwrap();
//!     stream.send_result(r#"{"amount":21}"#);
//!
//!     let notice = rx.recv().await.unwrap();
//!     assert_eq!(notice.event, "invoice_paid");
//! }
//! ```

pub mod error;
pub mod handle;
pub mod notice;
pub mod sink;

mod registry;

pub use error::HostwireError;
pub use handle::{Delivery, ResponseFn, ResponseHandle, StreamHandle};
pub use notice::Notice;
pub use registry::SinkRegistry;
pub use sink::{ChannelSink, CollectingSink, LineSink, ResultSink};
