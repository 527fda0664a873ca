// # Log Sink Trait
//
// Destination for the updater's outcome messages.
//
// The updater reports every cycle with exactly one message: `info` on
// success, `warn` on failure. Taking the sink as a collaborator (instead of
// logging through a process-wide logger) lets tests capture those messages
// deterministically.
//
// ## Implementations
//
// - `TracingSink`: forwards to the `tracing` macros (production)
// - Capturing sinks in tests

/// Trait for log sink implementations
pub trait LogSink: Send + Sync {
    /// Record a successful outcome
    fn info(&self, message: &str);

    /// Record a failed outcome
    fn warn(&self, message: &str);
}
