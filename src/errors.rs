//! Typed error hierarchy for the dashboard.
//!
//! Three enums cover the three places something can go wrong:
//! - `TransportError`: one HTTP exchange with the backend failed
//! - `ConfigError`: configuration could not be loaded or is invalid
//! - `InputError`: user input was rejected before any network call
//!
//! `TransportError` never escapes the API layer: the transport renders it into
//! a failure envelope. The other two surface to the CLI.

use std::time::Duration;

use thiserror::Error;

/// Failure of a single request/response exchange.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request to {url} timed out after {}s", .after.as_secs_f64())]
    Timeout { url: String, after: Duration },

    #[error("could not connect to {url}: {source}")]
    Connect {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("backend returned {status} {reason}{}", .message.as_deref().map(|m| format!(": {m}")).unwrap_or_default())]
    Status {
        status: u16,
        reason: String,
        message: Option<String>,
    },

    #[error("invalid response body")]
    InvalidBody,

    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),
}

impl TransportError {
    /// Classify a `reqwest` send/read error for the given URL.
    pub fn from_reqwest(url: &str, timeout: Duration, err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TransportError::Timeout {
                url: url.to_string(),
                after: timeout,
            }
        } else if err.is_connect() {
            TransportError::Connect {
                url: url.to_string(),
                source: err,
            }
        } else {
            TransportError::Request {
                url: url.to_string(),
                source: err,
            }
        }
    }
}

/// Errors from loading or validating dashboard configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {path}: {source}")]
    Read {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write config file at {path}: {source}")]
    Write {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Invalid backend URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Timeout '{field}' must be greater than zero")]
    ZeroTimeout { field: &'static str },
}

/// Local input rejected before it reaches the backend.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("Invalid JSON {field}: {source}")]
    InvalidJson {
        field: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("{field} must be a JSON object")]
    NotAnObject { field: &'static str },

    #[error("Title is required")]
    MissingTitle,
}
