//! # Error Handling
//!
//! Errors that can stop the server from starting.
//!
//! The gate itself never fails a request: a missing or empty session cookie is
//! the ordinary "not logged in" case and produces a redirect, not an error.
//! Everything that can go wrong is caught once, while the configuration is
//! being read, so a misconfigured process never starts serving traffic.

use thiserror::Error; // Simplifies error type creation with derive macros

/// Startup configuration errors
///
/// Each variant names the environment variable at fault so the operator can
/// fix it from the log line alone.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// A required variable is unset or blank
    ///
    /// `SESSION_COOKIE_NAME` is the only required value: without it the gate
    /// cannot tell which cookie carries the session.
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    /// A variable is set but its value can't be used
    #[error("Invalid value for {var}: {reason}")]
    Invalid { var: &'static str, reason: String },
}

/// Convenience alias for configuration results
pub type ConfigResult<T> = Result<T, ConfigError>;
