//! One-shot response handle.
//!
//! A [`ResponseHandle`] carries the reply path for a single host request:
//! the host stores a single-use response function on it, the native side
//! fires that function at most once when the operation completes. Firing
//! consumes the stored function, so a second completion cannot invoke it
//! again.
//!
//! # Example
//!
//! ```ignore
//! use hostwire::{Delivery, ResponseHandle};
//!
//! let mut handle = ResponseHandle::new();
//! handle.set_callback(|data| assert_eq!(data, r#"{"ok":true}"#));
//!
//! assert_eq!(handle.send_result(r#"{"ok":true}"#), Delivery::Sent);
//! assert_eq!(handle.send_result("again"), Delivery::Dropped);
//! ```

use tokio::sync::oneshot;

use super::Delivery;
use crate::error::Result;

/// Boxed single-use response function.
pub type ResponseFn = Box<dyn FnOnce(String) + Send>;

/// Holds the response function for one host request.
///
/// The handle exclusively owns the stored function. Sending a result takes
/// the function out of the handle and invokes it, so delivery happens at
/// most once per stored function; sending with nothing stored is a quiet
/// no-op.
pub struct ResponseHandle {
    /// Stored response function, consumed on delivery.
    callback: Option<ResponseFn>,
}

impl ResponseHandle {
    /// Create an empty handle with no response function stored.
    pub fn new() -> Self {
        Self { callback: None }
    }

    /// Create a handle paired with a receiver for the eventual payload.
    ///
    /// The stored function resolves the receiver, so the response can be
    /// awaited instead of handled in a closure. If the receiver is dropped
    /// first, the payload is discarded with it.
    pub fn channel() -> (Self, oneshot::Receiver<String>) {
        let (tx, rx) = oneshot::channel();
        let mut handle = Self::new();
        handle.set_callback(move |data| {
            let _ = tx.send(data);
        });
        (handle, rx)
    }

    /// Store the response function, replacing any previously stored one.
    ///
    /// Only the latest stored function can fire.
    pub fn set_callback<F>(&mut self, callback: F)
    where
        F: FnOnce(String) + Send + 'static,
    {
        self.callback = Some(Box::new(callback));
    }

    /// Take and invoke the stored function with `data`.
    ///
    /// Returns [`Delivery::Dropped`] without faulting when no function is
    /// stored, which also covers a second send after the stored function
    /// already fired.
    pub fn send_result(&mut self, data: impl Into<String>) -> Delivery {
        match self.callback.take() {
            Some(callback) => {
                callback(data.into());
                Delivery::Sent
            }
            None => {
                tracing::debug!("No response callback stored, dropping result");
                Delivery::Dropped
            }
        }
    }

    /// Serialize `payload` as JSON and send it through [`send_result`].
    ///
    /// [`send_result`]: ResponseHandle::send_result
    pub fn send_json<T: serde::Serialize>(&mut self, payload: &T) -> Result<Delivery> {
        let data = serde_json::to_string(payload)?;
        Ok(self.send_result(data))
    }

    /// Whether a response function is currently stored.
    #[inline]
    pub fn is_armed(&self) -> bool {
        self.callback.is_some()
    }
}

impl Default for ResponseHandle {
    fn default() -> Self {
        Self::new()
    }
}
