//! Error types for fetching and configuration.

use thiserror::Error;

/// Why a popup fragment could not be obtained.
///
/// None of these reach the host page; the controller logs them and leaves
/// the popup in its loading state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Connection, DNS, TLS or timeout failure
    #[error("transport error: {0}")]
    Transport(String),

    /// The server answered with a non-success status
    #[error("server responded with status {0}")]
    Status(u16),

    /// The body was not well-formed XML
    #[error("malformed XML response: {0}")]
    Parse(String),

    /// The background worker went away before reporting a result
    #[error("fetch worker disconnected")]
    Disconnected,
}

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid configuration: {field} must be positive")]
    NonPositive { field: &'static str },
}
