//! Feed service
//!
//! Runs a feed request end to end: build the search plan, resolve any
//! discovery stage, execute the final search, and assemble the normalized
//! feed for the encoders.

use std::sync::Arc;

use chrono::Utc;

use crate::app::request_builder::{build_plan, FeedParams, FeedTarget};
use crate::app::resolver::resolve;
use crate::app::routes::FeedRoute;
use crate::domain::entities::{FeedDocument, FeedFormat, FeedItem, FeedMetadata};
use crate::domain::ports::SearchClient;
use crate::error::AppError;

/// Per-request output settings
#[derive(Debug, Clone)]
pub struct FeedOptions {
    pub format: FeedFormat,
    /// Canonical URL of the request being served
    pub self_link: String,
    pub link_to: String,
    pub with_descriptions: bool,
}

impl FeedOptions {
    pub fn new(params: &FeedParams, format: FeedFormat, self_link: String) -> Self {
        Self {
            format,
            self_link,
            link_to: params.link_to().to_string(),
            with_descriptions: params.with_descriptions(),
        }
    }
}

/// Service for generating HN feeds
pub struct FeedService<SC>
where
    SC: SearchClient,
{
    search: Arc<SC>,
}

impl<SC> FeedService<SC>
where
    SC: SearchClient,
{
    pub fn new(search: Arc<SC>) -> Self {
        Self { search }
    }

    /// Generate the feed for one route request
    pub async fn generate(
        &self,
        route: FeedRoute,
        params: &FeedParams,
        options: FeedOptions,
    ) -> Result<FeedDocument, AppError> {
        let plan = build_plan(route, params)?;
        let target = resolve(self.search.as_ref(), plan).await?;
        self.assemble(target, options).await
    }

    /// Execute the final search and shape the results
    pub async fn assemble(
        &self,
        target: FeedTarget,
        options: FeedOptions,
    ) -> Result<FeedDocument, AppError> {
        let upstream_url = self.search.search_url(&target.request);
        let response = self.search.search(&target.request).await?;

        tracing::debug!(
            route = ?target.route,
            format = %options.format,
            hits = response.hits.len(),
            "Search complete"
        );

        let mut title = target.title;
        if target.route == FeedRoute::Item {
            // Story title comes from the hits; only an empty result costs an extra lookup
            let story_title = match response.hits.first() {
                Some(hit) => Some(hit.story_title.clone()),
                None => {
                    let item = self.search.get_item(&target.id).await?;
                    tracing::debug!(item_id = item.id, "Item fetched for feed title");
                    item.title
                }
            };
            if let Some(story_title) = story_title {
                title = item_title(&story_title, &target.query);
            }
        }

        let items: Vec<FeedItem> = response
            .hits
            .iter()
            .map(|hit| FeedItem::from_hit(hit, &options.link_to, options.with_descriptions))
            .collect();

        let last_modified = items
            .first()
            .map(|item| item.published_at)
            .unwrap_or_else(Utc::now);

        Ok(FeedDocument {
            metadata: FeedMetadata {
                title,
                link: target.link,
                self_link: options.self_link,
                format: options.format,
                last_modified,
            },
            items,
            upstream_url,
        })
    }
}

fn item_title(story_title: &str, query: &str) -> String {
    if query.is_empty() {
        format!("Hacker News: New comments on \"{}\"", story_title)
    } else {
        format!("Hacker News - \"{}\": \"{}\"", story_title, query)
    }
}
