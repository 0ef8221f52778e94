//! Alert Routes

use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;

use crate::AppState;

/// Response carrying the alert flag
#[derive(Debug, Serialize)]
pub struct AlertResponse {
    pub alert: bool,
}

/// Report a drowsiness alert from the detector.
///
/// Dropped while no session is active; otherwise raises the flag and
/// rearms the auto-expiry. The response carries the resulting flag either
/// way so the detector can see whether the alert was honored.
pub async fn report(State(state): State<Arc<AppState>>) -> Json<AlertResponse> {
    let alert = state.store.report_alert().await;
    Json(AlertResponse { alert })
}

/// Read the alert flag, no mutation
pub async fn current(State(state): State<Arc<AppState>>) -> Json<AlertResponse> {
    let alert = state.store.alert().await;
    Json(AlertResponse { alert })
}
