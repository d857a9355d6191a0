//! Result delivery handles.
//!
//! Two adapters cover the ways a native operation hands results back to
//! the embedding host:
//!
//! - [`ResponseHandle`] - one request, one reply: holds a single-use
//!   response function and fires it at most once.
//! - [`StreamHandle`] - one subscription, many results: forwards each
//!   payload to a weakly held [`ResultSink`](crate::sink::ResultSink),
//!   tagged with the handle's current event name.
//!
//! Both degrade to quiet no-ops when their delivery target is missing.
//! The outcome is reported through [`Delivery`] rather than an error.
//!
//! # Example
//!
//! ```ignore
//! use hostwire::{Delivery, ResponseHandle};
//!
//! let mut handle = ResponseHandle::new();
//! handle.set_callback(|data| assert_eq!(data, "done"));
//! assert_eq!(handle.send_result("done"), Delivery::Sent);
//! ```

mod response;
mod stream;

pub use response::{ResponseFn, ResponseHandle};
pub use stream::StreamHandle;

/// Outcome of a delivery attempt.
///
/// Handles never fault when their target is missing; they report the
/// outcome instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    /// The payload reached the configured target.
    Sent,
    /// No target was configured or it is gone; the payload was discarded.
    Dropped,
}

impl Delivery {
    /// Whether the payload reached its target.
    #[inline]
    pub fn is_sent(&self) -> bool {
        matches!(self, Delivery::Sent)
    }
}
