//! # HTTP Request Handlers
//!
//! - `health`: Health check endpoint (for monitoring), not gated
//! - `pages`: The login page, public through the allowlist

pub mod health;
pub mod pages;
