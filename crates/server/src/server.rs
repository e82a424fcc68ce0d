//! Server initialization and routing
//!
//! This module handles the Axum server setup including:
//! - Router configuration with all API endpoints
//! - Middleware stack (logging, compression, CORS, timeout)
//! - Graceful shutdown handling

use crate::config::ServerConfig;
use crate::error::ServerError;
use crate::middleware::{log_requests, request_id};
use crate::routes::{api_info, not_found};
use crate::routes::{health, strings};
use crate::state::ServerState;
use axum::extract::DefaultBodyLimit;
use axum::middleware::from_fn;
use axum::routing::get;
use axum::Router;
use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

/// Build the Axum router with all routes and middleware
///
/// The natural-language route is a static segment and takes precedence over
/// the `{string_value}` capture.
///
/// Middleware stack (applied in reverse order):
/// 1. Request ID tracking
/// 2. Request logging
/// 3. Timeout handling
/// 4. Compression
/// 5. CORS
pub fn build_router(state: Arc<ServerState>) -> Router {
    // CORS layer
    let cors = if state.config.enable_cors {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        CorsLayer::new()
    };

    Router::new()
        .route("/", get(api_info))
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        .route("/metrics", get(health::metrics))
        .route(
            "/strings",
            get(strings::list_strings).post(strings::create_string),
        )
        .route(
            "/strings/filter-by-natural-language",
            get(strings::filter_by_natural_language),
        )
        .route(
            "/strings/{string_value}",
            get(strings::get_string).delete(strings::delete_string),
        )
        .fallback(not_found)
        .layer(DefaultBodyLimit::max(state.config.max_body_size()))
        .layer(TimeoutLayer::new(Duration::from_secs(
            state.config.timeout_secs,
        )))
        .layer(CompressionLayer::new())
        .layer(cors)
        .layer(from_fn(request_id))
        .layer(from_fn(log_requests))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the stringprops HTTP server
///
/// Initializes logging and metrics, builds the router, binds the TCP
/// listener, and serves until SIGTERM or Ctrl+C.
pub async fn start_server(config: ServerConfig) -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(&config.log_level)
        .with_target(false)
        .json()
        .init();

    // Install the Prometheus recorder when metrics are enabled
    let state = if config.metrics_enabled {
        let handle = PrometheusBuilder::new()
            .install_recorder()
            .map_err(|e| ServerError::Config(format!("metrics recorder: {e}")))?;
        ServerState::with_metrics(config.clone(), handle)
    } else {
        ServerState::new(config.clone())
    };
    let state = Arc::new(state);

    // Build router
    let app = build_router(state);

    // Parse bind address
    let addr: SocketAddr = config.socket_addr()?;

    tracing::info!("Starting stringprops server on {}", addr);
    tracing::info!(
        "Timeout: {}s, Max body: {}MB, CORS: {}, Metrics: {}",
        config.timeout_secs,
        config.max_body_size_mb,
        config.enable_cors,
        config.metrics_enabled
    );

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Shutdown signal handler
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl+C, shutting down..."),
        _ = terminate => tracing::info!("Received SIGTERM, shutting down..."),
    }
}
