//! Named event stream demo.
//!
//! Simulates the subscription half of a host bridge: the host registers a
//! delegate under its connection namespace, the native side mints stream
//! handles from the registry and emits named events through them.
//!
//! # Host-side sketch
//!
//! ```js
//! NativeModule.initListener('wallet', 'sync_progress', requestJson);
//! emitter.addListener('sync_progress', (json) => render(JSON.parse(json)));
//! ```

use hostwire::{ChannelSink, SinkRegistry};
use serde::Serialize;

/// Progress event payload.
#[derive(Serialize, Debug)]
struct SyncProgress {
    percent: u32,
    block_height: u64,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let registry = SinkRegistry::new();

    // Host side: one delegate per connection namespace
    let (sink, mut rx) = ChannelSink::bounded(64);
    registry.register("wallet", sink);

    // Host dispatch loop: route each notice to its event listeners
    let dispatch = tokio::spawn(async move {
        while let Some(notice) = rx.recv().await {
            println!("[{}] {}", notice.event, notice.payload);
        }
    });

    // Native side: emit progress under the subscribed event name
    let stream = registry
        .stream("wallet", "sync_progress")
        .ok_or("namespace not registered")?;

    for step in 1..=5u32 {
        tokio::time::sleep(tokio::time::Duration::from_millis(40)).await;
        let progress = SyncProgress {
            percent: step * 20,
            block_height: 840_000 + u64::from(step),
        };
        stream.send_json(&progress)?;
    }

    // Dropping the delegate turns later emissions into quiet no-ops
    drop(registry.unregister("wallet"));
    assert!(!stream.is_connected());

    dispatch.await?;
    Ok(())
}
