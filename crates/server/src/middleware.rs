use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;

/// Request ID injection middleware
pub async fn request_id(mut request: Request, next: Next) -> Response {
    // Reuse the caller's ID when present, otherwise mint one.
    let request_id = request
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_string())
        .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());

    // Add to request extensions for handlers to access
    request.extensions_mut().insert(request_id.clone());

    let mut response = next.run(request).await;

    // Echo the request ID on the response
    if let Ok(value) = request_id.parse() {
        response.headers_mut().insert("x-request-id", value);
    }

    response
}

/// Logging middleware
pub async fn log_requests(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let start = std::time::Instant::now();

    let request_id = request
        .extensions()
        .get::<String>()
        .cloned()
        .unwrap_or_default();

    tracing::info!(
        method = %method,
        uri = %uri,
        request_id = %request_id,
        "Request started"
    );

    let response = next.run(request).await;
    let duration = start.elapsed();
    let status = response.status();

    tracing::info!(
        method = %method,
        uri = %uri,
        status = %status,
        duration_ms = %duration.as_millis(),
        request_id = %request_id,
        "Request completed"
    );

    response
}
