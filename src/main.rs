//! # Session Gate Server
//!
//! Loads configuration, refuses to start if the session cookie name is
//! missing, then serves the gated application.

use session_gate::config::Config;
use session_gate::state::AppState;
// Structured logging setup
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Default: info level for most crates, debug level for our app
    // Can be overridden with RUST_LOG environment variable
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,session_gate=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // A missing SESSION_COOKIE_NAME stops the process here, before any
    // request is accepted.
    let config = Config::from_env()?;
    tracing::info!(
        bind = %config.bind_address(),
        cookie = %config.session_cookie_name,
        static_dir = %config.static_dir,
        "configuration loaded"
    );

    let app_state = AppState::new(&config);
    tracing::info!(
        public_paths = ?app_state.gate.public_paths().as_slice(),
        "access gate ready"
    );

    let app = session_gate::app(app_state, &config.static_dir);

    let bind_addr = config.bind_address();
    tracing::info!("Starting server on {}", bind_addr);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
