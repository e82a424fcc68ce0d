use crate::error::ServerResult;
use crate::state::ServerState;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;
use std::sync::Arc;
use std::time::SystemTime;

/// Global server start time for uptime calculation
static SERVER_START_TIME: once_cell::sync::Lazy<SystemTime> =
    once_cell::sync::Lazy::new(SystemTime::now);

fn uptime_seconds() -> u64 {
    SERVER_START_TIME
        .elapsed()
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Health check endpoint (liveness)
/// Returns 200 if server is running
pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "service": "stringprops-server",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "uptime_seconds": uptime_seconds(),
    }))
}

/// Readiness check endpoint
/// Returns 200 if server is ready to accept requests
pub async fn readiness_check(
    State(state): State<Arc<ServerState>>,
) -> ServerResult<impl IntoResponse> {
    Ok(Json(json!({
        "status": "ready",
        "service": "stringprops-server",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "uptime_seconds": uptime_seconds(),
        "components": {
            "api": "ready",
            "store": "ready",
        },
        "stored_strings": state.store.len(),
    })))
}

/// Prometheus metrics endpoint
pub async fn metrics(State(state): State<Arc<ServerState>>) -> ServerResult<impl IntoResponse> {
    let body = state
        .metrics
        .as_ref()
        .map(|handle| handle.render())
        .unwrap_or_default();
    Ok(body)
}
