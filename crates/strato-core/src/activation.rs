//! Setup and activation
//!
//! Activation turns a [`StratoConfig`] into a running periodic update:
//!
//! 1. Validate the configuration (trimmed values must be non-empty)
//! 2. Run one eager update cycle; refuse activation if it fails
//! 3. Register the recurring cycle with the scheduler
//!
//! The recurring callback captures the immutable [`UpdateRequest`] built in
//! step 1. Configuration is never re-read per tick.

use crate::config::StratoConfig;
use crate::error::{Error, Result};
use crate::traits::{PeriodicCallback, PeriodicHandle, Scheduler, TickFuture};
use crate::updater::{UpdateRequest, Updater};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// A successfully activated updater
///
/// Holds the periodic registration. Dropping this value (or calling
/// [`ActiveUpdater::shutdown`]) stops future cycles.
#[derive(Debug)]
pub struct ActiveUpdater {
    request: Arc<UpdateRequest>,
    interval: Duration,
    handle: PeriodicHandle,
}

impl ActiveUpdater {
    /// The request every scheduled cycle uses
    pub fn request(&self) -> &UpdateRequest {
        &self.request
    }

    /// Time between scheduled cycles
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Stop future cycles
    pub fn shutdown(self) {
        info!("Stopping STRATO updates for {}", self.request.domain());
        self.handle.cancel();
    }
}

/// Activate periodic updates for one configured domain
///
/// # Parameters
///
/// - `config`: Domain, credentials and interval
/// - `updater`: Updater wired to the host's HTTP session and log sink
/// - `scheduler`: The host's periodic-task facility
///
/// # Returns
///
/// - `Ok(ActiveUpdater)`: The eager cycle succeeded and the timer is registered
/// - `Err(Error::Config)`: Invalid configuration (no network call was made)
/// - `Err(Error::Activation)`: The eager cycle failed (nothing was scheduled)
pub async fn activate(
    config: &StratoConfig,
    updater: Arc<Updater>,
    scheduler: &dyn Scheduler,
) -> Result<ActiveUpdater> {
    let request = Arc::new(config.request()?);
    let interval = config.scan_interval();

    if !updater.update(&request).await {
        return Err(Error::activation(format!(
            "Initial update failed for domain: {}",
            request.domain()
        )));
    }

    let callback: PeriodicCallback = {
        let request = Arc::clone(&request);
        Arc::new(move || -> TickFuture {
            let updater = Arc::clone(&updater);
            let request = Arc::clone(&request);
            Box::pin(async move {
                // Steady-state failures are reported by the updater itself
                let _ = updater.update(&request).await;
            })
        })
    };

    let handle = scheduler.register_periodic(interval, callback);

    info!(
        "STRATO updates active for {} (interval={:?})",
        request.domain(),
        interval
    );

    Ok(ActiveUpdater {
        request,
        interval,
        handle,
    })
}
