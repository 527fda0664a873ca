// # Tokio Scheduler
//
// Default periodic-task facility backed by `tokio::time::interval`.
//
// ## Behavior
//
// - The first invocation happens one interval after registration
// - Late ticks are delayed rather than replayed in a burst
// - Each tick runs the callback in its own task, so a slow cycle may overlap
//   the next one (no in-flight guard)
// - Cancelling the handle stops the timer; cycles already running finish
// - Periods are clamped to [1ms, one year] so the timer can never overflow

use crate::config::MAX_SCAN_INTERVAL_SECS;
use crate::traits::{PeriodicCallback, PeriodicHandle, Scheduler, TickFuture};
use std::time::Duration;
use tokio::time::{Instant, MissedTickBehavior};
use tracing::{debug, warn};

/// Shortest period the timer runs with (tokio rejects a zero period)
const MIN_PERIOD: Duration = Duration::from_millis(1);

/// Longest period the timer runs with
const MAX_PERIOD: Duration = Duration::from_secs(MAX_SCAN_INTERVAL_SECS);

/// Clamp a requested interval into the range the timer supports
fn timer_period(interval: Duration) -> Duration {
    let period = interval.clamp(MIN_PERIOD, MAX_PERIOD);
    if period != interval {
        warn!("Periodic interval {:?} clamped to {:?}", interval, period);
    }
    period
}

/// Scheduler that drives callbacks from a tokio timer task
///
/// Must be used from within a tokio runtime.
#[derive(Debug, Clone, Default)]
pub struct TokioScheduler {
    runtime: Option<tokio::runtime::Handle>,
}

impl TokioScheduler {
    /// Create a scheduler that spawns onto the current runtime
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a scheduler that spawns onto the given runtime
    pub fn with_runtime(runtime: tokio::runtime::Handle) -> Self {
        Self {
            runtime: Some(runtime),
        }
    }

    fn runtime(&self) -> tokio::runtime::Handle {
        self.runtime
            .clone()
            .unwrap_or_else(tokio::runtime::Handle::current)
    }
}

impl Scheduler for TokioScheduler {
    fn register_periodic(&self, interval: Duration, callback: PeriodicCallback) -> PeriodicHandle {
        let runtime = self.runtime();
        let spawner = runtime.clone();
        let period = timer_period(interval);

        let timer = runtime.spawn(async move {
            let now = Instant::now();
            let start = now.checked_add(period).unwrap_or(now);
            let mut ticker = tokio::time::interval_at(start, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                ticker.tick().await;
                debug!("Periodic tick (interval={:?})", period);
                spawner.spawn(callback());
            }
        });

        PeriodicHandle::new(move || timer.abort())
    }
}
