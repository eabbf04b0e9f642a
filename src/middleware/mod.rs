//! # Middleware Module
//!
//! Middleware intercepts HTTP requests and responses.
//!
//! ## Our Middleware
//! - `auth`: Sends requests without a session cookie to the login page
//! - `access_log`: One log line per request with status and duration

pub mod access_log;
pub mod auth;
