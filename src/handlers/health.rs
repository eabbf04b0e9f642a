//! # Health Check Handler
//!
//! Simple endpoint to check if the server is running.
//! Mounted outside the gate so probes don't need a session cookie.

use axum::Json;
use serde_json::{json, Value};

/// Health check endpoint
///
/// ## Route
/// GET /health
///
/// ## Response
/// ```json
/// {
///   "status": "healthy",
///   "service": "session-gate"
/// }
/// ```
pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": "session-gate"
    }))
}
