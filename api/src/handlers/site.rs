//! Site handlers
//!
//! Everything served besides feeds: health, robots, favicon and the homepage redirect.

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Serialize;

use crate::domain::ports::SearchClient;
use crate::AppState;

const FAVICON_URL: &str = "https://news.ycombinator.com/favicon.ico";

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// GET /robots.txt
pub async fn robots() -> &'static str {
    "User-agent: *\nDisallow:\n"
}

/// GET /favicon.ico
pub async fn favicon() -> impl IntoResponse {
    (StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, FAVICON_URL)])
}

/// GET /
pub async fn root<SC>(State(state): State<AppState<SC>>) -> impl IntoResponse
where
    SC: SearchClient + 'static,
{
    (
        StatusCode::FOUND,
        [(header::LOCATION, state.config.homepage_url.clone())],
    )
}
