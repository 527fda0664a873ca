//! Core traits for the STRATO updater
//!
//! These are the collaborators the updater is wired to at activation.
//!
//! - [`HttpClient`]: Shared HTTP session (owned by the host)
//! - [`LogSink`]: Destination for outcome messages
//! - [`Scheduler`]: Periodic-task facility

pub mod http_client;
pub mod log_sink;
pub mod scheduler;

pub use http_client::{HttpClient, HttpError, TextResponse};
pub use log_sink::LogSink;
pub use scheduler::{PeriodicCallback, PeriodicHandle, Scheduler, TickFuture};
