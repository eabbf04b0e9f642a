//! # Access Gate
//!
//! Decides, per request, whether a page may be served or the visitor must be
//! sent to the login page first.
//!
//! ## The Decision
//! 1. If the path starts with a public prefix, continue.
//! 2. Otherwise, if the session cookie is present and non-empty, continue.
//! 3. Otherwise, redirect to the login page with `next=<original path>`.
//!
//! Only the cookie's presence is checked. Its value is never verified or
//! logged; the backend that owns the session does that on every API call.
//!
//! The gate is a pure function of the request and its own immutable
//! configuration, so one instance is shared by every request without locks.
//! It knows nothing about axum: callers adapt their request type through
//! [`GateRequest`].

pub mod matcher;
pub mod public_paths;

pub use matcher::RouteMatcher;
pub use public_paths::{PublicPaths, DEFAULT_PUBLIC_PATHS};

use url::form_urlencoded;

/// Page anonymous visitors are sent to; covered by the `/login` public prefix
pub const LOGIN_PATH: &str = "/login";

/// What the gate reads from a request
pub trait GateRequest {
    /// Path component of the request URL, without the query string
    fn path(&self) -> &str;

    /// Raw query string, if any
    fn query(&self) -> Option<&str>;

    /// Value of the cookie called `name`, if the request carries one
    fn cookie(&self, name: &str) -> Option<String>;
}

/// Outcome of evaluating one request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// Let the request through unmodified
    Continue,
    /// Short-circuit with a redirect to this location
    RedirectTo(String),
}

#[derive(Debug, Clone)]
pub struct AccessGate {
    cookie_name: String,
    public_paths: PublicPaths,
}

impl AccessGate {
    pub fn new(cookie_name: impl Into<String>, public_paths: PublicPaths) -> Self {
        Self {
            cookie_name: cookie_name.into(),
            public_paths,
        }
    }

    pub fn cookie_name(&self) -> &str {
        &self.cookie_name
    }

    pub fn public_paths(&self) -> &PublicPaths {
        &self.public_paths
    }

    pub fn evaluate<R: GateRequest + ?Sized>(&self, request: &R) -> Decision {
        let path = request.path();

        if let Some(prefix) = self.public_paths.matching(path) {
            tracing::debug!(path, prefix, "public path, skipping session check");
            return Decision::Continue;
        }

        let has_session = request
            .cookie(&self.cookie_name)
            .is_some_and(|token| !token.is_empty());

        if has_session {
            return Decision::Continue;
        }

        // The query string is not carried over into `next`, nor logged.
        tracing::debug!(path, "no session cookie, redirecting to login");
        Decision::RedirectTo(self.login_redirect(path))
    }

    /// Login URL that returns the visitor to `path` afterwards
    ///
    /// `/dashboard` becomes `/login?next=%2Fdashboard`.
    pub fn login_redirect(&self, path: &str) -> String {
        let query = form_urlencoded::Serializer::new(String::new())
            .append_pair("next", path)
            .finish();
        format!("{LOGIN_PATH}?{query}")
    }
}
