//! Session Store Server
//!
//! REST server owning the shared driving-session and drowsiness-alert
//! flags. The detector preflights against it before starting and notifies
//! it on each alert; any interested reader (e.g. a companion app) polls the
//! alert flag.

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

mod routes;
mod store;

pub use store::{SessionStore, DEFAULT_ALERT_EXPIRY};

/// Application state shared across handlers
pub struct AppState {
    /// Session/alert flags and expiry timer
    pub store: SessionStore,
    /// Version string
    pub version: String,
    /// Start time
    pub start_time: std::time::Instant,
}

impl AppState {
    /// Create new application state with the default alert expiry
    pub fn new() -> Self {
        Self::with_expiry(DEFAULT_ALERT_EXPIRY)
    }

    pub fn with_expiry(alert_expiry: Duration) -> Self {
        Self {
            store: SessionStore::new(alert_expiry),
            version: env!("CARGO_PKG_VERSION").to_string(),
            start_time: std::time::Instant::now(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
    pub session_active: bool,
    pub alert: bool,
}

/// Create the application router
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/v1/health", get(health_handler))
        .route("/api/v1/session/start", post(routes::session::start))
        .route("/api/v1/session/stop", post(routes::session::stop))
        .route("/api/v1/session/status", get(routes::session::status))
        .route("/api/v1/alerts/report", post(routes::alerts::report))
        .route("/api/v1/alerts/current", get(routes::alerts::current))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Health check handler
async fn health_handler(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: state.version.clone(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
        session_active: state.store.session_active().await,
        alert: state.store.alert().await,
    })
}

/// Initialize logging
pub fn init_logging() {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");
}

/// Run the server
pub async fn run_server(addr: &str) -> Result<(), Box<dyn std::error::Error>> {
    let state = Arc::new(AppState::new());
    let app = create_router(state);

    info!("Starting session store on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
