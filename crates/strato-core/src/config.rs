//! Configuration types for the STRATO updater
//!
//! One configured domain is bound to one credential pair. Values are trimmed
//! and validated before any network call is attempted.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::updater::UpdateRequest;

/// Default IP-echo service (returns the caller's address as plain text)
pub const DEFAULT_IP_LOOKUP_URL: &str = "https://v6.ident.me/";

/// Default STRATO update endpoint (dyndns2 protocol)
pub const DEFAULT_UPDATE_URL: &str = "https://dyndns.strato.com/nic/update";

/// Longest accepted scan interval (one year)
pub const MAX_SCAN_INTERVAL_SECS: u64 = 365 * 24 * 60 * 60;

/// Main STRATO configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct StratoConfig {
    /// Hostname to update (e.g., "home.example.com")
    pub domain: String,

    /// STRATO DynDNS username
    pub username: String,

    /// STRATO DynDNS password
    /// ⚠️ NEVER log this value
    pub password: String,

    /// Interval between scheduled updates (in seconds)
    #[serde(default = "default_scan_interval_secs")]
    pub scan_interval_secs: u64,

    /// Remote endpoints and request budget
    #[serde(default)]
    pub endpoints: Endpoints,
}

// Custom Debug implementation that hides the password
impl std::fmt::Debug for StratoConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StratoConfig")
            .field("domain", &self.domain)
            .field("username", &self.username)
            .field("password", &"<REDACTED>")
            .field("scan_interval_secs", &self.scan_interval_secs)
            .field("endpoints", &self.endpoints)
            .finish()
    }
}

impl StratoConfig {
    /// Create a new configuration with default interval and endpoints
    pub fn new(
        domain: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            domain: domain.into(),
            username: username.into(),
            password: password.into(),
            scan_interval_secs: default_scan_interval_secs(),
            endpoints: Endpoints::default(),
        }
    }

    /// Set the scan interval
    ///
    /// The interval has whole-second resolution. A sub-second remainder
    /// rounds up, so any positive duration stays positive.
    pub fn with_scan_interval(mut self, interval: Duration) -> Self {
        let round_up = u64::from(interval.subsec_nanos() > 0);
        self.scan_interval_secs = interval.as_secs().saturating_add(round_up);
        self
    }

    /// Override the remote endpoints
    pub fn with_endpoints(mut self, endpoints: Endpoints) -> Self {
        self.endpoints = endpoints;
        self
    }

    /// Validate the configuration
    ///
    /// Domain, username and password are checked after trimming, so a
    /// whitespace-only value is rejected the same way as an empty one.
    pub fn validate(&self) -> Result<(), crate::Error> {
        for (name, value) in [
            ("domain", &self.domain),
            ("username", &self.username),
            ("password", &self.password),
        ] {
            if value.trim().is_empty() {
                return Err(crate::Error::config(format!("{} cannot be empty", name)));
            }
        }

        if self.scan_interval_secs == 0 {
            return Err(crate::Error::config("scan interval must be > 0"));
        }

        if self.scan_interval_secs > MAX_SCAN_INTERVAL_SECS {
            return Err(crate::Error::config(format!(
                "scan interval must be at most {} seconds. Got: {}",
                MAX_SCAN_INTERVAL_SECS, self.scan_interval_secs
            )));
        }

        self.endpoints.validate()
    }

    /// The configured scan interval
    pub fn scan_interval(&self) -> Duration {
        Duration::from_secs(self.scan_interval_secs)
    }

    /// Build the immutable update request from the trimmed values
    pub fn request(&self) -> Result<UpdateRequest, crate::Error> {
        self.validate()?;
        Ok(UpdateRequest::new(
            self.domain.trim(),
            self.username.trim(),
            self.password.trim(),
        ))
    }
}

/// Remote endpoints used by the updater
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endpoints {
    /// IP-echo service queried before every update
    #[serde(default = "default_ip_lookup_url")]
    pub ip_lookup_url: String,

    /// Provider update endpoint (credentials are embedded at call time)
    #[serde(default = "default_update_url")]
    pub update_url: String,

    /// Budget for the provider update request (in seconds)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Endpoints {
    /// Validate the endpoint configuration
    pub fn validate(&self) -> Result<(), crate::Error> {
        for (name, value) in [
            ("IP lookup URL", &self.ip_lookup_url),
            ("update URL", &self.update_url),
        ] {
            let parsed = url::Url::parse(value)
                .map_err(|e| crate::Error::config(format!("{} is invalid: {}", name, e)))?;
            if parsed.scheme() != "https" && parsed.scheme() != "http" {
                return Err(crate::Error::config(format!(
                    "{} must use HTTP or HTTPS scheme. Got: {}",
                    name, value
                )));
            }
        }

        if self.timeout_secs == 0 {
            return Err(crate::Error::config("update timeout must be > 0"));
        }

        Ok(())
    }

    /// The provider update budget
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            ip_lookup_url: default_ip_lookup_url(),
            update_url: default_update_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_scan_interval_secs() -> u64 {
    15 * 60
}

fn default_ip_lookup_url() -> String {
    DEFAULT_IP_LOOKUP_URL.to_string()
}

fn default_update_url() -> String {
    DEFAULT_UPDATE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}
