// tests/gate_http.rs

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use session_gate::config::Config;
use session_gate::state::AppState;
use tempfile::TempDir;
use tower::ServiceExt;

/// Router over a static dir holding a `dashboard` page and a Next.js chunk
fn create_test_app() -> (Router, TempDir) {
    let static_dir = tempfile::tempdir().unwrap();
    std::fs::write(static_dir.path().join("dashboard"), "dashboard page").unwrap();
    std::fs::create_dir_all(static_dir.path().join("_next/static")).unwrap();
    std::fs::write(static_dir.path().join("_next/static/chunk.js"), "console.log(1)").unwrap();

    let config = Config::from_lookup(|key| match key {
        "SESSION_COOKIE_NAME" => Some("session".to_string()),
        _ => None,
    })
    .unwrap();

    let app = session_gate::app(AppState::new(&config), static_dir.path());
    (app, static_dir)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn get_with_cookie(uri: &str, cookie: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header(header::COOKIE, cookie)
        .body(Body::empty())
        .unwrap()
}

async fn body_string(response: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn anonymous_dashboard_redirects_to_login() {
    let (app, _dir) = create_test_app();

    let response = app.oneshot(get("/dashboard")).await.unwrap();

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "/login?next=%2Fdashboard"
    );
}

#[tokio::test]
async fn redirect_drops_the_query_string() {
    let (app, _dir) = create_test_app();

    let response = app.oneshot(get("/dashboard?tab=billing")).await.unwrap();

    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "/login?next=%2Fdashboard"
    );
}

#[tokio::test]
async fn session_cookie_reaches_the_page() {
    let (app, _dir) = create_test_app();

    let response = app
        .oneshot(get_with_cookie("/dashboard", "session=abc123"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "dashboard page");
}

#[tokio::test]
async fn empty_session_cookie_is_redirected() {
    let (app, _dir) = create_test_app();

    let response = app
        .oneshot(get_with_cookie("/dashboard", "session="))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
}

#[tokio::test]
async fn other_cookies_do_not_count() {
    let (app, _dir) = create_test_app();

    let response = app
        .oneshot(get_with_cookie("/dashboard", "theme=dark; sessionid=abc123"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
}

#[tokio::test]
async fn session_endpoint_is_public() {
    let (app, _dir) = create_test_app();

    let response = app.oneshot(get("/api/session")).await.unwrap();

    // Nothing is served there, but the gate let it through.
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn login_page_is_public() {
    let (app, _dir) = create_test_app();

    let response = app.oneshot(get("/login?next=%2Fdashboard")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_string(response).await;
    assert!(html.contains(r#"action="/api/session?next=%2Fdashboard""#));
}

#[tokio::test]
async fn next_static_assets_bypass_the_gate() {
    let (app, _dir) = create_test_app();

    let response = app.oneshot(get("/_next/static/chunk.js")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "console.log(1)");
}

#[tokio::test]
async fn health_needs_no_session() {
    let (app, _dir) = create_test_app();

    let response = app.oneshot(get("/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn same_request_twice_gets_same_answer() {
    let (app, _dir) = create_test_app();

    let first = app.clone().oneshot(get("/settings")).await.unwrap();
    let second = app.oneshot(get("/settings")).await.unwrap();

    assert_eq!(first.status(), second.status());
    assert_eq!(
        first.headers().get(header::LOCATION),
        second.headers().get(header::LOCATION)
    );
}

// The allowlist and the routing exclusion overlap without matching exactly.
// These pin the current behaviour on both sides of the seam.

#[tokio::test]
async fn next_data_is_gated_but_allowlisted() {
    let (app, _dir) = create_test_app();

    // `/_next/data` is not excluded by the routing pattern, so it reaches the
    // gate, where the broader `/_next` prefix lets it through.
    let response = app.oneshot(get("/_next/data/build/page.json")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn favicon_variants_pass_via_allowlist() {
    let (app, _dir) = create_test_app();

    // Only `/favicon.ico` is excluded by routing; `/favicon.png` reaches the
    // gate and passes on the `/favicon` prefix.
    let response = app.oneshot(get("/favicon.png")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn following_the_redirect_reaches_the_login_page() {
    let (app, _dir) = create_test_app();

    let response = app.clone().oneshot(get("/dashboard")).await.unwrap();
    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    let location = response
        .headers()
        .get(header::LOCATION)
        .unwrap()
        .to_str()
        .unwrap()
        .to_owned();

    let response = app.oneshot(get(&location)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_string(response).await;
    assert!(html.contains(r#"action="/api/session?next=%2Fdashboard""#));
}

#[tokio::test]
async fn later_duplicate_session_cookie_is_used() {
    let (app, _dir) = create_test_app();

    let response = app
        .clone()
        .oneshot(get_with_cookie("/dashboard", "session=; session=abc123"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(get_with_cookie("/dashboard", "session=abc123; session="))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
}

#[tokio::test]
async fn bare_session_cookie_name_lets_request_through() {
    let (app, _dir) = create_test_app();

    let response = app
        .oneshot(get_with_cookie("/dashboard", "theme=dark; session"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn client_request_id_is_echoed() {
    let (app, _dir) = create_test_app();

    let request = Request::builder()
        .uri("/dashboard")
        .header("x-request-id", "req-42")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.headers().get("x-request-id").unwrap(), "req-42");
}

#[tokio::test]
async fn request_id_is_generated_when_missing() {
    let (app, _dir) = create_test_app();

    let response = app.oneshot(get("/health")).await.unwrap();

    let id = response.headers().get("x-request-id").unwrap().to_str().unwrap();
    // Hyphenated UUID
    assert_eq!(id.len(), 36);
}
