//! STRATO status tokens
//!
//! STRATO speaks the dyndns2 protocol: the update endpoint answers with a
//! plain-text token, optionally followed by the address (`good 203.0.113.5`).

use super::MAX_LOGGED_BODY_CHARS;
use std::fmt;

/// Known error tokens and their explanations
const STRATO_ERRORS: &[(&str, &str)] = &[
    (
        "nohost",
        "Hostname supplied does not exist under specified account",
    ),
    ("badauth", "Invalid username password combination"),
    ("badagent", "Client disabled"),
    (
        "!donator",
        "An update request was sent with a feature that is not available",
    ),
    ("abuse", "Username is blocked due to abuse"),
];

/// Parsed provider response
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderStatus {
    /// `good`: record updated
    Good,
    /// `nochg`: record already had this address
    NoChange,
    /// `nohost`
    NoHost,
    /// `badauth`
    BadAuth,
    /// `badagent`
    BadAgent,
    /// `!donator`
    NotDonator,
    /// `abuse`
    Abuse,
    /// Anything else (trimmed body, capped for logging)
    Unknown(String),
}

impl ProviderStatus {
    /// Classify a response body
    ///
    /// Success tokens are matched as prefixes of the raw body, so trailing
    /// content such as the echoed address is ignored. Error tokens are
    /// matched against the trimmed body. The mapping is total: unrecognized
    /// bodies become [`ProviderStatus::Unknown`].
    pub fn parse(body: &str) -> Self {
        if body.starts_with("good") {
            return Self::Good;
        }
        if body.starts_with("nochg") {
            return Self::NoChange;
        }

        match body.trim() {
            "nohost" => Self::NoHost,
            "badauth" => Self::BadAuth,
            "badagent" => Self::BadAgent,
            "!donator" => Self::NotDonator,
            "abuse" => Self::Abuse,
            other => Self::Unknown(other.chars().take(MAX_LOGGED_BODY_CHARS).collect()),
        }
    }

    /// The protocol token for this status
    pub fn token(&self) -> &str {
        match self {
            Self::Good => "good",
            Self::NoChange => "nochg",
            Self::NoHost => "nohost",
            Self::BadAuth => "badauth",
            Self::BadAgent => "badagent",
            Self::NotDonator => "!donator",
            Self::Abuse => "abuse",
            Self::Unknown(token) => token,
        }
    }

    /// Human-readable explanation of a known error token
    pub fn explanation(&self) -> Option<&'static str> {
        STRATO_ERRORS
            .iter()
            .find(|(token, _)| *token == self.token())
            .map(|(_, explanation)| *explanation)
    }
}

impl fmt::Display for ProviderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Good => f.write_str("Record updated"),
            Self::NoChange => f.write_str("Record already up to date"),
            Self::Unknown(token) => write!(f, "Unknown response: {}", token),
            known => f.write_str(known.explanation().unwrap_or("Unknown response")),
        }
    }
}
