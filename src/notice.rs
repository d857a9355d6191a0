//! Event notice record.
//!
//! A [`Notice`] is what a stream delegate receives: the event name the
//! emission was tagged with plus the payload text. The payload passes
//! through untouched; the notice only adds the tag the host needs to route
//! it to the right listeners.

use serde::{Deserialize, Serialize};

/// A named result on its way to the host side.
///
/// Produced by [`StreamHandle`](crate::StreamHandle) on every emission and
/// consumed by a [`ResultSink`](crate::ResultSink).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    /// Event name the payload is tagged with.
    pub event: String,
    /// Payload text, forwarded unmodified.
    pub payload: String,
}

impl Notice {
    /// Create a new notice.
    pub fn new(event: &str, payload: &str) -> Self {
        Self {
            event: event.to_string(),
            payload: payload.to_string(),
        }
    }
}
