//! Error types for hostwire.

use thiserror::Error;

/// Main error type for all hostwire operations.
///
/// Delivery itself is infallible by contract (a missing target is reported
/// as [`Delivery::Dropped`](crate::Delivery::Dropped), not an error), so
/// only the structured-payload helpers can fail.
#[derive(Debug, Error)]
pub enum HostwireError {
    /// JSON serialization error in the `send_json` helpers.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using HostwireError.
pub type Result<T> = std::result::Result<T, HostwireError>;
