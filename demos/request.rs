//! One-shot response demo.
//!
//! Simulates the request/response half of a host bridge: the host hands
//! the native side a response function for a single call, the native side
//! completes the work and fires the function exactly once.
//!
//! # Host-side sketch
//!
//! ```js
//! const response = await new Promise((resolve) => {
//!     NativeModule.invoke('get_info', requestJson, (json) => resolve(json));
//! });
//! ```

use hostwire::{Delivery, ResponseHandle};
use serde::Serialize;

/// Reply structure for the simulated call.
#[derive(Serialize, Debug)]
struct InfoReply {
    version: String,
    synced: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Host side: pair a handle with a receiver for the eventual payload
    let (mut handle, rx) = ResponseHandle::channel();

    // Native side: complete the call on another task
    let worker = tokio::spawn(async move {
        tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;

        let reply = InfoReply {
            version: "0.18.3".to_string(),
            synced: true,
        };
        match handle.send_json(&reply) {
            Ok(Delivery::Sent) => {}
            Ok(Delivery::Dropped) => eprintln!("reply dropped: no callback stored"),
            Err(e) => eprintln!("reply failed to serialize: {}", e),
        }

        // A second completion is a quiet no-op
        assert_eq!(handle.send_result("ignored"), Delivery::Dropped);
    });

    let payload = rx.await?;
    println!("host received: {}", payload);

    worker.await?;
    Ok(())
}
