//! Feed handlers
//!
//! One generic handler serves every feed route; the router binds it to each
//! route/format pair from the route table.

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::{header, HeaderName, Uri},
    response::{IntoResponse, Response},
};

use crate::app::{FeedOptions, FeedParams, FeedRoute};
use crate::domain::entities::FeedFormat;
use crate::domain::ports::SearchClient;
use crate::error::AppError;
use crate::feed::{http_date, render};
use crate::AppState;

/// Exposes the exact upstream query behind a feed
pub const X_ALGOLIA_URL: &str = "x-algolia-url";

/// GET /{route}[.atom|.jsonfeed]
pub async fn get_feed<SC>(
    State(state): State<AppState<SC>>,
    uri: Uri,
    params: Result<Query<FeedParams>, QueryRejection>,
    route: FeedRoute,
    format: FeedFormat,
) -> Result<Response, AppError>
where
    SC: SearchClient + 'static,
{
    let Query(params) = params.map_err(|e| AppError::BadRequest(e.body_text()))?;

    let request_path = uri
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or_else(|| uri.path());
    let self_link = format!("{}{}", state.config.site_url, request_path);

    let options = FeedOptions::new(&params, format, self_link);
    let document = state.feed_service.generate(route, &params, options).await?;
    let rendered = render(&document)?;

    Ok((
        [
            (header::CONTENT_TYPE, rendered.content_type.to_string()),
            (
                header::LAST_MODIFIED,
                http_date(document.metadata.last_modified),
            ),
            (HeaderName::from_static(X_ALGOLIA_URL), document.upstream_url),
        ],
        rendered.body,
    )
        .into_response())
}
