// # strato-core
//
// Core library for the STRATO DynDNS updater.
//
// ## Architecture Overview
//
// This library provides the whole update cycle for a single STRATO hostname:
// - **Updater**: One cycle of IP lookup → provider update → status classification
// - **HttpClient**: Trait for the shared HTTP session the updater consumes
// - **LogSink**: Trait for the log destination (injected, not global)
// - **Scheduler**: Trait for the host's periodic-task facility
// - **activate**: Validate configuration, run the eager update, register the timer
//
// ## Design Principles
//
// 1. **Absorbed failures**: An update cycle never returns an error, only a classification
// 2. **Immutable request**: Credentials are bound once at activation and captured by the timer
// 3. **Stateless cycles**: No IP cache, no persistence, no retries beyond the next tick
// 4. **Library-First**: The daemon is a thin shell around `activate`

pub mod activation;
pub mod config;
pub mod error;
pub mod log;
pub mod scheduler;
pub mod traits;
pub mod updater;

// Re-export core types for convenience
pub use activation::{ActiveUpdater, activate};
pub use config::{Endpoints, StratoConfig};
pub use error::{Error, Result};
pub use log::TracingSink;
pub use scheduler::TokioScheduler;
pub use traits::{
    HttpClient, HttpError, LogSink, PeriodicCallback, PeriodicHandle, Scheduler, TextResponse,
    TickFuture,
};
pub use updater::{FailureReason, ProviderStatus, UpdateRequest, UpdateResult, Updater};
