//! Session Routes

use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;

use crate::AppState;

/// Response carrying the session flag
#[derive(Debug, Serialize)]
pub struct SessionStatusResponse {
    pub session_active: bool,
}

/// Start a driving session
pub async fn start(State(state): State<Arc<AppState>>) -> Json<SessionStatusResponse> {
    let session_active = state.store.start_session().await;
    Json(SessionStatusResponse { session_active })
}

/// Stop the driving session (also clears any alert)
pub async fn stop(State(state): State<Arc<AppState>>) -> Json<SessionStatusResponse> {
    let session_active = state.store.stop_session().await;
    Json(SessionStatusResponse { session_active })
}

/// Read the session flag, no mutation
pub async fn status(State(state): State<Arc<AppState>>) -> Json<SessionStatusResponse> {
    let session_active = state.store.session_active().await;
    Json(SessionStatusResponse { session_active })
}
