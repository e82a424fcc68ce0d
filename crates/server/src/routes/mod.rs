//! API route handlers
//!
//! This module contains all HTTP endpoint implementations for the
//! stringprops server. Routes are organized by functionality:
//!
//! - `health`: Health checks, readiness, and metrics
//! - `strings`: Analysis, storage, retrieval, deletion, and filtered listing

pub mod health;
pub mod strings;

use crate::error::{ServerError, ServerResult};
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

/// API version and base info
///
/// Returns server information including version and available endpoints.
/// This is the root endpoint (GET /) and requires no authentication.
pub async fn api_info() -> ServerResult<impl IntoResponse> {
    Ok(Json(json!({
        "name": "Stringprops Server",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": [
            "/strings",
            "/strings/filter-by-natural-language",
            "/strings/{string_value}",
            "/health",
            "/ready",
            "/metrics"
        ]
    })))
}

/// 404 Not Found handler
///
/// Returns a standardized error response for undefined routes.
pub async fn not_found() -> ServerError {
    ServerError::RouteNotFound
}
