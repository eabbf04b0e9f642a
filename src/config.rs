//! # Configuration Management
//!
//! This module handles loading configuration from environment variables.
//! It uses the "12-factor app" methodology where configuration comes from the environment.
//!
//! ## Environment Variables
//! - `SESSION_COOKIE_NAME`: Name of the cookie carrying the session token (required)
//! - `HOST`: Server bind address (default: 127.0.0.1)
//! - `PORT`: Server port (default: 3000)
//! - `STATIC_DIR`: Directory served behind the gate (default: static)

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Application configuration
///
/// Built once at startup and never mutated afterwards. Every request handler
/// sees the same values through `AppState`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Server host/IP address to bind to
    /// Examples: "127.0.0.1" (localhost only), "0.0.0.0" (all interfaces)
    pub host: String,

    /// Server port number (1-65535)
    pub port: u16,

    /// Name of the cookie whose presence marks a request as logged in
    /// Only presence is checked; the value is never decoded or verified.
    pub session_cookie_name: String,

    /// Directory of static pages served behind the gate
    pub static_dir: String,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Loads `.env` first (if present) using dotenvy, then reads the process
    /// environment.
    ///
    /// ## Example .env file
    /// ```text
    /// SESSION_COOKIE_NAME=session
    /// HOST=127.0.0.1
    /// PORT=3000
    /// STATIC_DIR=static
    /// ```
    ///
    /// # Errors
    /// Returns an error if `SESSION_COOKIE_NAME` is unset or blank, or if
    /// `PORT` is not a valid port number.
    pub fn from_env() -> ConfigResult<Self> {
        // Load .env file if it exists (dotenvy doesn't error if file missing)
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    ///
    /// `from_env` delegates here with `std::env::var`; tests pass a map.
    pub fn from_lookup<F>(lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let session_cookie_name = lookup("SESSION_COOKIE_NAME")
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .ok_or(ConfigError::Missing("SESSION_COOKIE_NAME"))?;

        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|e| ConfigError::Invalid {
                var: "PORT",
                reason: format!("{e}"),
            })?,
            None => 3000,
        };

        Ok(Config {
            host: lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port,
            session_cookie_name,
            static_dir: lookup("STATIC_DIR").unwrap_or_else(|| "static".to_string()),
        })
    }

    /// Get the socket address to bind the server to
    ///
    /// Example: "127.0.0.1:3000"
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
