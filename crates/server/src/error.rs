use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::json;

pub type ServerResult<T> = Result<T, ServerError>;

/// Server error types
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Invalid query parameter: 400 with a details field naming the
    /// offending parameter.
    #[error("Invalid query parameter values or types")]
    InvalidQueryParameter(String),

    #[error("Unable to parse natural language query")]
    UnparsedQuery,

    /// Query parsed but the derived filters contradict each other: 422.
    #[error("Query parsed but resulted in conflicting filters: {0}")]
    QueryConflict(#[from] nlquery::ParseError),

    #[error("String already exists in the system")]
    DuplicateString(#[from] store::StoreError),

    #[error("String does not exist in the system")]
    NotFound,

    #[error("Payload too large: max {0}MB allowed")]
    PayloadTooLarge(usize),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Route not found")]
    RouteNotFound,
}

/// API error response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ServerError {
    /// Get HTTP status code for this error
    fn status_code(&self) -> StatusCode {
        match self {
            ServerError::BadRequest(_)
            | ServerError::InvalidQueryParameter(_)
            | ServerError::UnparsedQuery => StatusCode::BAD_REQUEST,
            ServerError::QueryConflict(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ServerError::DuplicateString(_) => StatusCode::CONFLICT,
            ServerError::NotFound | ServerError::RouteNotFound => StatusCode::NOT_FOUND,
            ServerError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            ServerError::Internal(_) | ServerError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get error code string
    fn error_code(&self) -> &'static str {
        match self {
            ServerError::BadRequest(_) => "BAD_REQUEST",
            ServerError::InvalidQueryParameter(_) => "INVALID_QUERY_PARAMETER",
            ServerError::UnparsedQuery => "UNPARSED_QUERY",
            ServerError::QueryConflict(_) => "QUERY_CONFLICT",
            ServerError::DuplicateString(_) => "DUPLICATE_STRING",
            ServerError::NotFound => "NOT_FOUND",
            ServerError::RouteNotFound => "ROUTE_NOT_FOUND",
            ServerError::PayloadTooLarge(_) => "PAYLOAD_TOO_LARGE",
            ServerError::Internal(_) => "INTERNAL_ERROR",
            ServerError::Config(_) => "CONFIG_ERROR",
        }
    }

    /// Optional details string for the response body
    fn details(&self) -> Option<String> {
        match self {
            ServerError::InvalidQueryParameter(detail) => Some(detail.clone()),
            ServerError::QueryConflict(err) => Some(err.to_string()),
            _ => None,
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error_code = self.error_code().to_string();
        let message = self.to_string();
        let details = self.details();

        let mut error = json!({
            "code": error_code,
            "message": message,
        });
        if let Some(details) = details {
            error["details"] = json!(details);
        }

        (status, Json(json!({ "error": error }))).into_response()
    }
}

impl From<std::net::AddrParseError> for ServerError {
    fn from(err: std::net::AddrParseError) -> Self {
        ServerError::Config(format!("Invalid address: {err}"))
    }
}

impl From<std::io::Error> for ServerError {
    fn from(err: std::io::Error) -> Self {
        ServerError::Internal(format!("IO error: {err}"))
    }
}

impl From<serde_json::Error> for ServerError {
    fn from(err: serde_json::Error) -> Self {
        ServerError::BadRequest(format!("JSON parse error: {err}"))
    }
}

impl From<anyhow::Error> for ServerError {
    fn from(err: anyhow::Error) -> Self {
        ServerError::Internal(err.to_string())
    }
}
