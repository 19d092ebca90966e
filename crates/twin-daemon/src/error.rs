//! Error types for twin-daemon.
//!
//! The design and simulation endpoints are fail-soft by contract and
//! always answer 200 with a well-formed body, so there is no API
//! error surface here; only startup and serving can fail.

use thiserror::Error;

/// Daemon-level errors.
#[derive(Debug, Error)]
pub enum DaemonError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Server startup or serve error
    #[error("Server error: {0}")]
    Server(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for daemon operations.
pub type DaemonResult<T> = Result<T, DaemonError>;
