//! JSON-line writer sink.
//!
//! Serializes each notice as one JSON object per line to any `io::Write`.
//! Intended for host bridges that consume a line-delimited protocol on the
//! module's stdout.
//!
//! # Important
//!
//! - Uses explicit `\n`, NOT `println!` (which may add `\r\n` on Windows)
//! - Flushes after every line (the host waits for complete lines)
//! - Write failures are logged and counted, never raised to the emitter

use std::io::Write;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use super::ResultSink;
use crate::notice::Notice;

/// Sink that writes each notice as a single JSON line.
pub struct LineSink<W: Write + Send> {
    /// Writer guarded so lines are never interleaved.
    writer: Mutex<W>,
    /// Notices lost to serialization or write failures.
    failed: AtomicU64,
}

impl<W: Write + Send> LineSink<W> {
    /// Create a sink over `writer`.
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
            failed: AtomicU64::new(0),
        }
    }

    /// Number of notices lost to write failures so far.
    #[inline]
    pub fn failed_count(&self) -> u64 {
        self.failed.load(Ordering::Relaxed)
    }

    /// Consume the sink and return the inner writer.
    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Write one notice as a JSON line and flush.
    fn write_line(&self, notice: &Notice) -> std::io::Result<()> {
        let json = serde_json::to_string(notice)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;

        let mut writer = self
            .writer
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        writer.write_all(json.as_bytes())?;
        writer.write_all(b"\n")?;
        writer.flush()
    }
}

impl LineSink<std::io::Stdout> {
    /// Create a sink over stdout.
    ///
    /// Any logging belongs on stderr; stdout carries only notice lines.
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write + Send> ResultSink for LineSink<W> {
    fn deliver(&self, notice: Notice) {
        if let Err(e) = self.write_line(&notice) {
            self.failed.fetch_add(1, Ordering::Relaxed);
            tracing::error!("Failed to write '{}' notice: {}", notice.event, e);
        }
    }
}
