//! In-memory recording sink.
//!
//! Records every delivered notice for later inspection. Useful as the
//! delegate in unit tests and as a capture buffer in examples.

use std::sync::Mutex;

use super::ResultSink;
use crate::notice::Notice;

/// Sink that stores delivered notices in memory, in delivery order.
#[derive(Debug, Default)]
pub struct CollectingSink {
    /// Recorded notices.
    notices: Mutex<Vec<Notice>>,
}

impl CollectingSink {
    /// Create an empty collecting sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all recorded notices.
    pub fn notices(&self) -> Vec<Notice> {
        self.lock().clone()
    }

    /// Number of recorded notices.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether nothing has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Whether any recorded notice carries the given event name.
    pub fn has_event(&self, event: &str) -> bool {
        self.lock().iter().any(|n| n.event == event)
    }

    /// Payloads of all recorded notices with the given event name.
    pub fn payloads_for(&self, event: &str) -> Vec<String> {
        self.lock()
            .iter()
            .filter(|n| n.event == event)
            .map(|n| n.payload.clone())
            .collect()
    }

    /// Clear all recorded notices.
    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Notice>> {
        self.notices
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl ResultSink for CollectingSink {
    fn deliver(&self, notice: Notice) {
        self.lock().push(notice);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_in_delivery_order() {
        let sink = CollectingSink::new();
        assert!(sink.is_empty());

        sink.deliver(Notice::new("a", "1"));
        sink.deliver(Notice::new("b", "2"));
        sink.deliver(Notice::new("a", "3"));

        assert_eq!(sink.len(), 3);
        assert_eq!(
            sink.notices(),
            vec![
                Notice::new("a", "1"),
                Notice::new("b", "2"),
                Notice::new("a", "3"),
            ]
        );
    }

    #[test]
    fn test_has_event_and_payloads_for() {
        let sink = CollectingSink::new();
        sink.deliver(Notice::new("progress", "25"));
        sink.deliver(Notice::new("progress", "50"));
        sink.deliver(Notice::new("done", "100"));

        assert!(sink.has_event("progress"));
        assert!(!sink.has_event("missing"));
        assert_eq!(
            sink.payloads_for("progress"),
            vec!["25".to_string(), "50".to_string()]
        );
    }

    #[test]
    fn test_clear() {
        let sink = CollectingSink::new();
        sink.deliver(Notice::new("a", "1"));

        sink.clear();
        assert!(sink.is_empty());
        assert!(!sink.has_event("a"));
    }
}
