//! Unified error types for the feed API
//!
//! This module defines error types for each layer:
//! - `SearchError`: Algolia search client errors
//! - `AppError`: Application layer errors (wraps search errors for HTTP responses)
//!
//! Malformed hit timestamps are not errors; `Hit::created_at` recovers them.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Search API client errors
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Invalid JSON received from Algolia: {0}")]
    Deserialization(String),
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Search error: {0}")]
    Search(#[from] SearchError),

    #[error("No results for discovery search: {0}")]
    NoDiscoveryResults(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error response body for JSON responses
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = match &self {
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, "Bad request", Some(msg.clone()))
            }
            AppError::Search(e) => {
                tracing::error!("Search error: {}", e);
                let error = match e {
                    SearchError::Deserialization(_) => "Invalid upstream response",
                    _ => "Upstream search unavailable",
                };
                (StatusCode::BAD_GATEWAY, error, Some(e.to_string()))
            }
            AppError::NoDiscoveryResults(msg) => {
                tracing::error!("Discovery search returned no hits: {}", msg);
                (
                    StatusCode::BAD_GATEWAY,
                    "Upstream search unavailable",
                    Some(msg.clone()),
                )
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error",
                    None,
                )
            }
        };

        let body = Json(ErrorResponse {
            error: error.to_string(),
            details,
        });

        (status, body).into_response()
    }
}
