//! `tracing`-backed log sink

use crate::traits::LogSink;

/// Log sink that forwards to the process-wide `tracing` subscriber
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn info(&self, message: &str) {
        tracing::info!(target: "strato", "{}", message);
    }

    fn warn(&self, message: &str) {
        tracing::warn!(target: "strato", "{}", message);
    }
}
