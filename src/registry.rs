//! Namespace registry for delivery sinks.
//!
//! The registry is the owning side of the delegate relationship: it maps
//! namespace strings (one per host connection) to `Arc`-owned sinks, while
//! handles minted from it hold only weak references. Unregistering a
//! namespace and dropping the returned `Arc` turns every handle minted for
//! it into a no-op emitter; nothing has to chase the handles down.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use hostwire::{CollectingSink, SinkRegistry};
//!
//! let registry = SinkRegistry::new();
//! registry.register("wallet", Arc::new(CollectingSink::new()));
//!
//! let stream = registry.stream("wallet", "sync_progress").unwrap();
//! stream.send_result("50");
//! ```

use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard, Weak};

use crate::handle::StreamHandle;
use crate::sink::ResultSink;

/// Registry mapping namespaces to owned delivery sinks.
#[derive(Default)]
pub struct SinkRegistry {
    /// Sinks by namespace.
    sinks: RwLock<HashMap<String, Arc<dyn ResultSink>>>,
}

impl SinkRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a sink under `namespace`.
    ///
    /// Returns the previously registered sink, if any. Handles minted for
    /// the previous sink keep pointing at it; they are not retargeted.
    pub fn register(
        &self,
        namespace: &str,
        sink: Arc<dyn ResultSink>,
    ) -> Option<Arc<dyn ResultSink>> {
        self.write().insert(namespace.to_string(), sink)
    }

    /// Remove the sink registered under `namespace`.
    ///
    /// Returns the removed sink, if any. Once it and all other owners are
    /// dropped, handles minted for the namespace degrade to no-ops.
    pub fn unregister(&self, namespace: &str) -> Option<Arc<dyn ResultSink>> {
        self.write().remove(namespace)
    }

    /// Get a weak reference to the sink registered under `namespace`.
    pub fn downgrade(&self, namespace: &str) -> Option<Weak<dyn ResultSink>> {
        self.read().get(namespace).map(Arc::downgrade)
    }

    /// Mint a stream handle bound to `namespace`'s sink, pre-named `event`.
    ///
    /// Returns `None` if the namespace has no registered sink.
    pub fn stream(&self, namespace: &str, event: &str) -> Option<StreamHandle> {
        self.downgrade(namespace)
            .map(|weak| StreamHandle::with_event(weak, event))
    }

    /// Whether a sink is registered under `namespace`.
    pub fn contains(&self, namespace: &str) -> bool {
        self.read().contains_key(namespace)
    }

    /// Number of registered namespaces.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    // Poison is recovered: registry operations never panic the caller.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, Arc<dyn ResultSink>>> {
        self.sinks
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, Arc<dyn ResultSink>>> {
        self.sinks
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
