//! # Application State
//!
//! Shared, read-only state handed to the gate middleware on every request.
//! Built once from `Config` at startup; cloning only bumps reference counts.

use crate::config::Config;
use crate::gate::{AccessGate, PublicPaths, RouteMatcher};
use std::sync::Arc; // Atomic Reference Counting - for thread-safe sharing

/// Shared application state
///
/// Axum clones the state for each request, so both members sit behind `Arc`.
/// Neither is ever mutated after startup, which is why no lock is needed.
#[derive(Clone)]
pub struct AppState {
    /// The continue-or-redirect decision
    pub gate: Arc<AccessGate>,

    /// Which request paths the gate evaluates at all
    pub matcher: Arc<RouteMatcher>,
}

impl AppState {
    /// State with the default allowlist and routing exclusions
    pub fn new(config: &Config) -> Self {
        let gate = AccessGate::new(config.session_cookie_name.clone(), PublicPaths::default());
        Self::with_parts(gate, RouteMatcher::default())
    }

    /// State from an already-built gate and matcher
    pub fn with_parts(gate: AccessGate, matcher: RouteMatcher) -> Self {
        AppState {
            gate: Arc::new(gate),
            matcher: Arc::new(matcher),
        }
    }
}
