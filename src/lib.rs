//! # Session Gate
//!
//! Front door for a web application: every page request must carry a
//! session cookie, or it is redirected to the login page with a `next`
//! parameter pointing back at the page it asked for.
//!
//! A short allowlist of public prefixes (login, signup, the session endpoint,
//! the favicon and framework assets) passes without a cookie. Only the
//! cookie's presence is checked here; the backend validates the token itself.

pub mod config;     // Configuration management (environment variables)
pub mod error;      // Startup error types
pub mod gate;       // The continue-or-redirect decision
pub mod handlers;   // HTTP request handlers (routes)
pub mod middleware; // Request interceptors (session gate, access log)
pub mod state;      // Shared application state

use crate::gate::LOGIN_PATH;
use crate::handlers::{health::health_check, pages::login_page};
use crate::state::AppState;
use axum::{middleware as axum_middleware, routing::get, Router};
use std::path::Path;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Build the application router
///
/// Layout:
/// - `/health` answers without touching the gate
/// - `/login` and the static-file fallback sit behind the gate
/// - every request gets an `x-request-id` (kept if the client sent one),
///   echoed on the response and written to the access log
/// - every response passes through the access log and HTTP tracing
pub fn app(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    // Routes that require a session cookie (or a public prefix)
    let gated_routes = Router::new()
        .route(LOGIN_PATH, get(login_page))
        .fallback_service(ServeDir::new(static_dir))
        .layer(axum_middleware::from_fn_with_state(
            state,
            middleware::auth::require_session,
        ));

    Router::new()
        .route("/health", get(health_check))
        .merge(gated_routes)
        // Applied in reverse order: the id is set before anything else runs
        .layer(axum_middleware::from_fn(middleware::access_log::log_access))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}
