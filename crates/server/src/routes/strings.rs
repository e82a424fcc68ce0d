use crate::error::{ServerError, ServerResult};
use crate::state::ServerState;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use nlquery::StringFilters;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use store::StoredString;

/// Request to analyze and store a string
#[derive(Debug, Deserialize)]
pub struct CreateStringRequest {
    /// The raw string to analyze. Serde enforces the string type at the
    /// boundary; anything else is rejected before the analyzer runs.
    #[serde(default)]
    pub value: Option<String>,
}

/// Explicit filter parameters for GET /strings.
///
/// Fields arrive as raw strings so invalid values produce a 400 with a
/// details message naming the parameter, rather than a generic
/// deserialization rejection.
#[derive(Debug, Default, Deserialize)]
pub struct ListStringsQuery {
    #[serde(default)]
    pub is_palindrome: Option<String>,
    #[serde(default)]
    pub min_length: Option<String>,
    #[serde(default)]
    pub max_length: Option<String>,
    #[serde(default)]
    pub word_count: Option<String>,
    #[serde(default)]
    pub contains_character: Option<String>,
}

/// Free-text query parameter for the natural-language route
#[derive(Debug, Deserialize)]
pub struct NaturalLanguageParams {
    #[serde(default)]
    pub query: Option<String>,
}

/// Response for filtered listings
#[derive(Debug, Serialize)]
pub struct FilteredStringsResponse {
    pub data: Vec<StoredString>,
    pub count: usize,
    pub filters_applied: StringFilters,
}

/// Response for natural-language filtered listings
#[derive(Debug, Serialize)]
pub struct NaturalLanguageResponse {
    pub data: Vec<StoredString>,
    pub count: usize,
    pub interpreted_query: InterpretedQuery,
}

/// Echo of the free-text query and the filters it produced
#[derive(Debug, Serialize)]
pub struct InterpretedQuery {
    pub original: String,
    pub parsed_filters: StringFilters,
}

impl ListStringsQuery {
    /// Validate each parameter and assemble the filter set.
    fn into_filters(self) -> Result<StringFilters, ServerError> {
        let mut filters = StringFilters::default();

        if let Some(raw) = self.is_palindrome {
            filters.is_palindrome = Some(match raw.as_str() {
                "true" => true,
                "false" => false,
                _ => {
                    return Err(ServerError::InvalidQueryParameter(
                        "is_palindrome must be \"true\" or \"false\"".to_string(),
                    ))
                }
            });
        }

        if let Some(raw) = self.min_length {
            filters.min_length = Some(parse_non_negative(&raw, "min_length")?);
        }

        if let Some(raw) = self.max_length {
            filters.max_length = Some(parse_non_negative(&raw, "max_length")?);
        }

        filters.validate().map_err(|_| {
            ServerError::InvalidQueryParameter(
                "min_length cannot be greater than max_length".to_string(),
            )
        })?;

        if let Some(raw) = self.word_count {
            filters.word_count = Some(parse_non_negative(&raw, "word_count")?);
        }

        if let Some(raw) = self.contains_character {
            let lowered = raw.to_lowercase();
            let mut chars = lowered.chars();
            match (chars.next(), chars.next()) {
                (Some(ch), None) if ch.is_ascii_lowercase() => {
                    filters.contains_character = Some(ch);
                }
                _ => {
                    return Err(ServerError::InvalidQueryParameter(
                        "contains_character must be a single lowercase letter (a-z)".to_string(),
                    ))
                }
            }
        }

        Ok(filters)
    }
}

fn parse_non_negative(raw: &str, name: &str) -> Result<usize, ServerError> {
    raw.parse().map_err(|_| {
        ServerError::InvalidQueryParameter(format!("{name} must be a non-negative integer"))
    })
}

/// Analyze a string and store it under its content fingerprint.
///
/// Returns 201 with the stored record, 400 for a malformed body or a
/// missing or empty `value`, 413 when the body exceeds the configured
/// limit, and 409 when the fingerprint already exists (deduplication
/// contract).
pub async fn create_string(
    State(state): State<Arc<ServerState>>,
    payload: Result<Json<CreateStringRequest>, JsonRejection>,
) -> ServerResult<impl IntoResponse> {
    // Take the extractor result so malformed and oversized bodies flow
    // through the standard error envelope instead of axum's plain-text
    // rejection.
    let Json(request) = payload.map_err(|rejection| {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            ServerError::PayloadTooLarge(state.config.max_body_size_mb)
        } else {
            ServerError::BadRequest(rejection.body_text())
        }
    })?;

    let value = request
        .value
        .filter(|v| !v.is_empty())
        .ok_or_else(|| {
            ServerError::BadRequest("Invalid request body or missing \"value\" field".to_string())
        })?;

    let record = state.store.insert(&value)?;
    metrics::counter!("stringprops_strings_created_total").increment(1);

    tracing::debug!(fingerprint = %record.id, length = record.properties.length, "String stored");

    Ok((StatusCode::CREATED, Json(record)))
}

/// Look up a stored string by value: hash first, then key lookup.
pub async fn get_string(
    State(state): State<Arc<ServerState>>,
    Path(string_value): Path<String>,
) -> ServerResult<impl IntoResponse> {
    let record = state.store.get(&string_value).ok_or(ServerError::NotFound)?;
    Ok(Json(record))
}

/// Delete a stored string by value. 204 on success, 404 when absent.
pub async fn delete_string(
    State(state): State<Arc<ServerState>>,
    Path(string_value): Path<String>,
) -> ServerResult<impl IntoResponse> {
    state
        .store
        .remove(&string_value)
        .ok_or(ServerError::NotFound)?;
    metrics::counter!("stringprops_strings_deleted_total").increment(1);

    Ok(StatusCode::NO_CONTENT)
}

/// List stored strings, optionally constrained by explicit filter
/// parameters. Invalid parameter values are a 400 with details;
/// contradictory explicit bounds are also a 400.
pub async fn list_strings(
    State(state): State<Arc<ServerState>>,
    Query(params): Query<ListStringsQuery>,
) -> ServerResult<impl IntoResponse> {
    let filters = params.into_filters()?;
    let data = state.store.filter(&filters);

    Ok(Json(FilteredStringsResponse {
        count: data.len(),
        data,
        filters_applied: filters,
    }))
}

/// List stored strings matching a free-text query.
///
/// The interpreter is best-effort: a query yielding no recognized pattern
/// is a 400 (nothing to filter by), while recognized-but-contradictory
/// length bounds are a 422.
pub async fn filter_by_natural_language(
    State(state): State<Arc<ServerState>>,
    Query(params): Query<NaturalLanguageParams>,
) -> ServerResult<impl IntoResponse> {
    let original = params
        .query
        .filter(|q| !q.trim().is_empty())
        .ok_or_else(|| {
            ServerError::BadRequest("Missing or empty query parameter".to_string())
        })?;

    let parsed_filters = nlquery::parse_query(&original)?;
    if parsed_filters.is_empty() {
        return Err(ServerError::UnparsedQuery);
    }

    let data = state.store.filter(&parsed_filters);
    metrics::counter!("stringprops_nl_queries_total").increment(1);

    tracing::debug!(query = %original, hits = data.len(), "Natural language query processed");

    Ok(Json(NaturalLanguageResponse {
        count: data.len(),
        data,
        interpreted_query: InterpretedQuery {
            original,
            parsed_filters,
        },
    }))
}
