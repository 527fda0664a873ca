// # Scheduler Trait
//
// Defines the host's periodic-task facility.
//
// ## Usage
//
// ```rust,ignore
// use strato_core::Scheduler;
//
// let handle = scheduler.register_periodic(
//     Duration::from_secs(900),
//     Arc::new(move || -> TickFuture { Box::pin(async move { /* one update cycle */ }) }),
// );
//
// // Later, on teardown
// handle.cancel();
// ```

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

/// Future produced by one invocation of a periodic callback
pub type TickFuture = Pin<Box<dyn Future<Output = ()> + Send + 'static>>;

/// Callback invoked on every tick
pub type PeriodicCallback = Arc<dyn Fn() -> TickFuture + Send + Sync>;

/// Handle to a registered periodic task
///
/// Dropping the handle cancels the task.
pub struct PeriodicHandle {
    cancel: Option<Box<dyn FnOnce() + Send>>,
}

impl PeriodicHandle {
    /// Create a handle that runs `cancel` exactly once on teardown
    pub fn new(cancel: impl FnOnce() + Send + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// Stop future invocations
    ///
    /// Invocations already in flight are not interrupted.
    pub fn cancel(mut self) {
        self.teardown();
    }

    fn teardown(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for PeriodicHandle {
    fn drop(&mut self) {
        self.teardown();
    }
}

impl std::fmt::Debug for PeriodicHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PeriodicHandle")
            .field("active", &self.cancel.is_some())
            .finish()
    }
}

/// Trait for periodic-task facilities
///
/// # Guarantees Expected From Implementations
///
/// - The callback fires at approximately the given cadence until the handle
///   is cancelled or dropped
/// - The first invocation happens one interval after registration
/// - Invocations are NOT serialized: a slow callback may overlap the next tick
pub trait Scheduler: Send + Sync {
    /// Register a recurring invocation
    ///
    /// # Parameters
    ///
    /// - `interval`: Time between invocations (must be > 0)
    /// - `callback`: Produces the future to run on each tick
    ///
    /// # Returns
    ///
    /// A handle that cancels the registration when dropped
    fn register_periodic(&self, interval: Duration, callback: PeriodicCallback) -> PeriodicHandle;
}
