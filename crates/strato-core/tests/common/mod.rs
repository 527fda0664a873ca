//! Test doubles and common utilities for behavior contract tests
//!
//! These doubles script the two remote endpoints, capture log output and
//! let tests fire scheduled callbacks by hand.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use strato_core::traits::{
    HttpClient, HttpError, LogSink, PeriodicCallback, PeriodicHandle, Scheduler, TextResponse,
};
use strato_core::{Endpoints, StratoConfig, Updater};
use url::Url;

pub const IP_LOOKUP_URL: &str = "https://ip.test/";
pub const UPDATE_URL: &str = "https://dyndns.test/nic/update";
pub const DOMAIN: &str = "home.example.com";

/// Endpoints pointing at the scripted hosts
pub fn test_endpoints() -> Endpoints {
    Endpoints {
        ip_lookup_url: IP_LOOKUP_URL.to_string(),
        update_url: UPDATE_URL.to_string(),
        timeout_secs: 30,
    }
}

/// Helper to create a valid configuration for testing
pub fn test_config() -> StratoConfig {
    StratoConfig::new(DOMAIN, "user", "secret").with_endpoints(test_endpoints())
}

/// Scripted behavior of one endpoint
#[derive(Debug, Clone)]
pub enum Scripted {
    /// Answer immediately
    Respond(TextResponse),
    /// Fail immediately
    Fail(HttpError),
    /// Answer after a delay (driven by tokio time)
    Delayed(Duration, TextResponse),
}

impl Scripted {
    pub fn ok(body: &str) -> Self {
        Self::Respond(TextResponse::new(200, body))
    }

    pub fn status(status: u16, body: &str) -> Self {
        Self::Respond(TextResponse::new(status, body))
    }

    pub fn connection_refused() -> Self {
        Self::Fail(HttpError::Transport("connection refused".to_string()))
    }

    pub fn delayed(delay: Duration, body: &str) -> Self {
        Self::Delayed(delay, TextResponse::new(200, body))
    }
}

/// An HttpClient that answers from a script and records every request
pub struct ScriptedHttpClient {
    ip_lookup: Mutex<Scripted>,
    update: Mutex<Scripted>,
    requests: Mutex<Vec<Url>>,
    update_call_count: AtomicUsize,
}

impl ScriptedHttpClient {
    pub fn new(ip_lookup: Scripted, update: Scripted) -> Arc<Self> {
        Arc::new(Self {
            ip_lookup: Mutex::new(ip_lookup),
            update: Mutex::new(update),
            requests: Mutex::new(Vec::new()),
            update_call_count: AtomicUsize::new(0),
        })
    }

    /// Lookup returns an IPv4 address, update answers with `body`
    pub fn answering(body: &str) -> Arc<Self> {
        Self::new(Scripted::ok("203.0.113.5\n"), Scripted::ok(body))
    }

    /// Replace the script of the update endpoint
    pub fn set_update(&self, script: Scripted) {
        *self.update.lock().unwrap() = script;
    }

    /// Replace the script of the IP lookup endpoint
    pub fn set_ip_lookup(&self, script: Scripted) {
        *self.ip_lookup.lock().unwrap() = script;
    }

    /// All requested URLs, in order
    pub fn requests(&self) -> Vec<Url> {
        self.requests.lock().unwrap().clone()
    }

    /// Number of calls that reached the update endpoint
    pub fn update_call_count(&self) -> usize {
        self.update_call_count.load(Ordering::SeqCst)
    }

    /// The last URL sent to the update endpoint
    pub fn last_update_url(&self) -> Option<Url> {
        self.requests()
            .into_iter()
            .rev()
            .find(|url| url.host_str() == Some("dyndns.test"))
    }
}

#[async_trait::async_trait]
impl HttpClient for ScriptedHttpClient {
    async fn get_text(&self, url: &Url) -> Result<TextResponse, HttpError> {
        self.requests.lock().unwrap().push(url.clone());

        let script = if url.host_str() == Some("dyndns.test") {
            self.update_call_count.fetch_add(1, Ordering::SeqCst);
            self.update.lock().unwrap().clone()
        } else {
            self.ip_lookup.lock().unwrap().clone()
        };

        match script {
            Scripted::Respond(response) => Ok(response),
            Scripted::Fail(err) => Err(err),
            Scripted::Delayed(delay, response) => {
                tokio::time::sleep(delay).await;
                Ok(response)
            }
        }
    }
}

/// Log level seen by the capturing sink
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Warn,
}

/// A LogSink that keeps every message
#[derive(Default)]
pub struct CapturingSink {
    messages: Mutex<Vec<(Level, String)>>,
}

impl CapturingSink {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn messages(&self) -> Vec<(Level, String)> {
        self.messages.lock().unwrap().clone()
    }

    pub fn infos(&self) -> Vec<String> {
        self.at(Level::Info)
    }

    pub fn warnings(&self) -> Vec<String> {
        self.at(Level::Warn)
    }

    fn at(&self, level: Level) -> Vec<String> {
        self.messages()
            .into_iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m)
            .collect()
    }
}

impl LogSink for CapturingSink {
    fn info(&self, message: &str) {
        self.messages
            .lock()
            .unwrap()
            .push((Level::Info, message.to_string()));
    }

    fn warn(&self, message: &str) {
        self.messages
            .lock()
            .unwrap()
            .push((Level::Warn, message.to_string()));
    }
}

/// A Scheduler that only records registrations; tests fire ticks by hand
#[derive(Default)]
pub struct ManualScheduler {
    registrations: Mutex<Vec<(Duration, PeriodicCallback)>>,
    cancelled: Arc<AtomicUsize>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn registration_count(&self) -> usize {
        self.registrations.lock().unwrap().len()
    }

    pub fn intervals(&self) -> Vec<Duration> {
        self.registrations
            .lock()
            .unwrap()
            .iter()
            .map(|(interval, _)| *interval)
            .collect()
    }

    pub fn cancelled_count(&self) -> usize {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// Run every registered callback once and wait for it
    pub async fn fire(&self) {
        let callbacks: Vec<PeriodicCallback> = self
            .registrations
            .lock()
            .unwrap()
            .iter()
            .map(|(_, callback)| Arc::clone(callback))
            .collect();

        for callback in callbacks {
            callback().await;
        }
    }
}

impl Scheduler for ManualScheduler {
    fn register_periodic(&self, interval: Duration, callback: PeriodicCallback) -> PeriodicHandle {
        self.registrations.lock().unwrap().push((interval, callback));
        let cancelled = Arc::clone(&self.cancelled);
        PeriodicHandle::new(move || {
            cancelled.fetch_add(1, Ordering::SeqCst);
        })
    }
}

/// Build an updater wired to the given doubles
pub fn updater(client: Arc<ScriptedHttpClient>, sink: Arc<CapturingSink>) -> Arc<Updater> {
    Arc::new(Updater::new(client, sink, &test_endpoints()).expect("valid test endpoints"))
}
