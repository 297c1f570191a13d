//! Service-level endpoints: welcome banner and health probe.
//!
//! `/` sits behind the authentication gate like the rest of the API;
//! `/health` is on the gate's bypass list so monitoring probes work
//! without a key.

use axum::Json;
use axum::extract::State;
use chrono::Utc;
use tracing::instrument;

use crate::models::HealthResponse;
use crate::state::AppState;

/// Static welcome message at the API root.
#[instrument]
pub async fn welcome() -> &'static str {
    "Welcome to the Product API! Go to /api/products to see all products."
}

/// Health check endpoint.
///
/// Always returns 200: the store is in-process memory, so the service is
/// healthy whenever it can answer at all.
#[instrument(skip(state))]
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.uptime_seconds(),
        timestamp: Utc::now(),
    })
}
