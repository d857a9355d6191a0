//! Named event stream handle.
//!
//! A [`StreamHandle`] forwards zero-or-more results to a host-side
//! delegate, each tagged with the handle's current event name. The
//! delegate is a [`ResultSink`] held weakly: the host owns it (usually
//! through a [`SinkRegistry`](crate::SinkRegistry)) and the handle never
//! extends its lifetime. Once the owner drops the sink, every emission
//! through the handle quietly becomes a no-op.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use hostwire::{CollectingSink, Delivery, StreamHandle};
//!
//! let sink = Arc::new(CollectingSink::new());
//! let mut stream = StreamHandle::for_sink(&sink);
//!
//! stream.set_event_name("progress");
//! assert_eq!(stream.send_result("50"), Delivery::Sent);
//! assert_eq!(sink.payloads_for("progress"), vec!["50".to_string()]);
//! ```

use std::sync::{Arc, Weak};

use super::Delivery;
use crate::error::Result;
use crate::notice::Notice;
use crate::sink::ResultSink;

/// Emits named results to a weakly referenced [`ResultSink`].
///
/// Cloning is cheap; clones share the same delegate but carry their own
/// event name.
#[derive(Clone)]
pub struct StreamHandle {
    /// Non-owning reference to the delegate sink (`None` = detached).
    sink: Option<Weak<dyn ResultSink>>,
    /// Event name applied to subsequent emissions.
    event: Option<String>,
}

impl StreamHandle {
    /// Create a handle for `sink` with no event name set yet.
    pub fn new(sink: Weak<dyn ResultSink>) -> Self {
        Self {
            sink: Some(sink),
            event: None,
        }
    }

    /// Create a handle pre-bound to an event name.
    pub fn with_event(sink: Weak<dyn ResultSink>, event: &str) -> Self {
        Self {
            sink: Some(sink),
            event: Some(event.to_string()),
        }
    }

    /// Create a handle observing `sink` without taking ownership of it.
    ///
    /// Accepts any concrete sink behind an `Arc`; the handle stores only
    /// a weak reference.
    pub fn for_sink<S: ResultSink + 'static>(sink: &Arc<S>) -> Self {
        Self::new(downgrade_sink(sink))
    }

    /// Create a handle observing `sink`, pre-bound to an event name.
    pub fn for_sink_with_event<S: ResultSink + 'static>(sink: &Arc<S>, event: &str) -> Self {
        Self::with_event(downgrade_sink(sink), event)
    }

    /// Create a handle with no sink at all (for testing without a host).
    ///
    /// Every emission is a quiet no-op.
    pub fn detached() -> Self {
        Self {
            sink: None,
            event: None,
        }
    }

    /// Set the event name used by subsequent [`send_result`] calls.
    ///
    /// Replaces any previously set name; notices already delivered keep
    /// the name they were sent under.
    ///
    /// [`send_result`]: StreamHandle::send_result
    pub fn set_event_name(&mut self, event: &str) {
        self.event = Some(event.to_string());
    }

    /// Forward `data` to the delegate, tagged with the current event name.
    ///
    /// Returns [`Delivery::Dropped`] without faulting when no event name
    /// is set yet, the handle is detached, or the delegate has already
    /// been dropped by its owner.
    pub fn send_result(&self, data: &str) -> Delivery {
        let event = match &self.event {
            Some(event) => event,
            None => {
                tracing::debug!("No event name set, dropping stream result");
                return Delivery::Dropped;
            }
        };

        match self.sink.as_ref().and_then(|weak| weak.upgrade()) {
            Some(sink) => {
                sink.deliver(Notice::new(event, data));
                Delivery::Sent
            }
            None => {
                tracing::debug!("Delegate for '{}' is gone, dropping stream result", event);
                Delivery::Dropped
            }
        }
    }

    /// Serialize `payload` as JSON and send it through [`send_result`].
    ///
    /// [`send_result`]: StreamHandle::send_result
    pub fn send_json<T: serde::Serialize>(&self, payload: &T) -> Result<Delivery> {
        let data = serde_json::to_string(payload)?;
        Ok(self.send_result(&data))
    }

    /// Get the current event name, if one is set.
    pub fn event_name(&self) -> Option<&str> {
        self.event.as_deref()
    }

    /// Whether the delegate sink is still alive.
    ///
    /// A detached handle and a handle whose sink was dropped both report
    /// `false`.
    pub fn is_connected(&self) -> bool {
        self.sink
            .as_ref()
            .map(|weak| weak.strong_count() > 0)
            .unwrap_or(false)
    }
}

/// Coerce a concrete sink to a trait object before downgrading.
fn downgrade_sink<S: ResultSink + 'static>(sink: &Arc<S>) -> Weak<dyn ResultSink> {
    let sink: Arc<dyn ResultSink> = sink.clone();
    Arc::downgrade(&sink)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::CollectingSink;

    #[test]
    fn test_send_result_delivers_tagged_notice() {
        let sink = Arc::new(CollectingSink::new());
        let mut stream = StreamHandle::for_sink(&sink);

        stream.set_event_name("progress");
        assert_eq!(stream.send_result("50"), Delivery::Sent);

        assert_eq!(sink.notices(), vec![Notice::new("progress", "50")]);
    }

    #[test]
    fn test_send_result_without_event_name_is_noop() {
        let sink = Arc::new(CollectingSink::new());
        let stream = StreamHandle::for_sink(&sink);

        assert_eq!(stream.send_result("50"), Delivery::Dropped);
        assert!(sink.is_empty());
    }

    #[test]
    fn test_detached_handle_is_noop() {
        let mut stream = StreamHandle::detached();
        stream.set_event_name("progress");

        assert!(!stream.is_connected());
        assert_eq!(stream.send_result("50"), Delivery::Dropped);
    }

    #[test]
    fn test_dead_sink_is_noop() {
        let sink = Arc::new(CollectingSink::new());
        let stream = StreamHandle::for_sink_with_event(&sink, "progress");
        drop(sink);

        assert!(!stream.is_connected());
        assert_eq!(stream.send_result("50"), Delivery::Dropped);
    }

    #[test]
    fn test_handle_does_not_extend_sink_lifetime() {
        let sink = Arc::new(CollectingSink::new());
        let stream = StreamHandle::for_sink_with_event(&sink, "tick");

        // Construction must not leave an extra strong reference behind
        assert_eq!(Arc::strong_count(&sink), 1);
        assert!(stream.is_connected());
    }

    #[test]
    fn test_for_sink_constructors_accept_concrete_sinks() {
        let sink = Arc::new(CollectingSink::new());

        let unnamed = StreamHandle::for_sink(&sink);
        assert!(unnamed.is_connected());
        assert_eq!(unnamed.event_name(), None);

        let named = StreamHandle::for_sink_with_event(&sink, "status");
        assert_eq!(named.event_name(), Some("status"));
        assert_eq!(named.send_result("open"), Delivery::Sent);
        assert_eq!(sink.payloads_for("status"), vec!["open".to_string()]);
    }

    #[test]
    fn test_rename_applies_to_subsequent_emissions() {
        let sink = Arc::new(CollectingSink::new());
        let mut stream = StreamHandle::for_sink_with_event(&sink, "opening");

        assert_eq!(stream.send_result("1"), Delivery::Sent);
        stream.set_event_name("open");
        assert_eq!(stream.send_result("2"), Delivery::Sent);

        assert_eq!(stream.event_name(), Some("open"));
        assert_eq!(
            sink.notices(),
            vec![Notice::new("opening", "1"), Notice::new("open", "2")]
        );
    }

    #[test]
    fn test_zero_or_more_emissions() {
        let sink = Arc::new(CollectingSink::new());
        let stream = StreamHandle::for_sink_with_event(&sink, "tick");

        for i in 0..5 {
            assert_eq!(stream.send_result(&i.to_string()), Delivery::Sent);
        }

        assert_eq!(sink.len(), 5);
        assert_eq!(
            sink.payloads_for("tick"),
            vec!["0", "1", "2", "3", "4"]
                .into_iter()
                .map(String::from)
                .collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_send_json_delivers_encoded_payload() {
        #[derive(serde::Serialize)]
        struct Progress {
            percent: u32,
        }

        let sink = Arc::new(CollectingSink::new());
        let stream = StreamHandle::for_sink_with_event(&sink, "progress");

        let delivery = stream.send_json(&Progress { percent: 75 }).unwrap();
        assert_eq!(delivery, Delivery::Sent);
        assert_eq!(
            sink.payloads_for("progress"),
            vec![r#"{"percent":75}"#.to_string()]
        );
    }

    #[test]
    fn test_clones_share_delegate_but_not_event_name() {
        let sink = Arc::new(CollectingSink::new());
        let stream = StreamHandle::for_sink_with_event(&sink, "first");

        let mut renamed = stream.clone();
        renamed.set_event_name("second");

        assert_eq!(stream.send_result("a"), Delivery::Sent);
        assert_eq!(renamed.send_result("b"), Delivery::Sent);

        assert_eq!(sink.payloads_for("first"), vec!["a".to_string()]);
        assert_eq!(sink.payloads_for("second"), vec!["b".to_string()]);
    }
}
