//! Search request builder
//!
//! Turns a route and the caller's query-string parameters into a feed plan:
//! the search request, the provisional title and link, and any discovery
//! stage the resolver still has to run.

use serde::Deserialize;

use crate::app::routes::{feed_title, Discovery, FeedRoute};
use crate::domain::entities::{SearchRequest, HN_ITEM_URL};
use crate::error::AppError;

/// Upper bound for `count`
pub const MAX_HITS_PER_PAGE: u32 = 100;

/// Query-string parameters accepted by every feed route
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FeedParams {
    /// Free-text search
    #[serde(default)]
    pub q: String,
    /// User handle or item ID
    #[serde(default)]
    pub id: String,
    /// Minimum points
    pub points: Option<u32>,
    /// Minimum comment count
    pub comments: Option<u32>,
    /// Number of items
    pub count: Option<u32>,
    /// Explicit searchable attributes, overrides the route default
    pub search_attrs: Option<String>,
    /// `url` (default) links items to the article, anything else to HN
    pub link: Option<String>,
    /// `0` drops item descriptions
    pub description: Option<String>,
}

impl FeedParams {
    pub fn link_to(&self) -> &str {
        self.link.as_deref().unwrap_or("url")
    }

    pub fn with_descriptions(&self) -> bool {
        self.description.as_deref() != Some("0")
    }

    fn numeric_filters(&self) -> String {
        let mut filters = Vec::new();
        if let Some(points) = self.points {
            filters.push(format!("points>={}", points));
        }
        if let Some(comments) = self.comments {
            filters.push(format!("num_comments>={}", comments));
        }
        filters.join(",")
    }
}

/// Discovery search still owed before the real search can run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingDiscovery {
    /// Collect an author's comments, then search replies to them
    RepliesByAuthor(String),
    /// Find the current whoishiring thread(s); `None` keeps every thread found
    HiringThread(Option<&'static str>),
}

/// Everything the assembler needs once discovery is done
#[derive(Debug, Clone)]
pub struct FeedTarget {
    pub route: FeedRoute,
    pub id: String,
    /// Caller's query as typed, before the OR rewrite
    pub query: String,
    pub request: SearchRequest,
    pub title: String,
    pub link: String,
}

#[derive(Debug, Clone)]
pub struct FeedPlan {
    pub target: FeedTarget,
    pub discovery: Option<PendingDiscovery>,
}

pub fn build_plan(route: FeedRoute, params: &FeedParams) -> Result<FeedPlan, AppError> {
    let definition = route.definition();
    let id = params.id.trim();

    if definition.requires_id {
        validate_id(route, id)?;
    }

    let mut request = SearchRequest {
        tags: definition.tags_for(id),
        numeric_filters: params.numeric_filters(),
        hits_per_page: params.count.map(|n| n.clamp(1, MAX_HITS_PER_PAGE)),
        ..Default::default()
    };
    request.set_query(&params.q);
    // A query of bare separators rewrites to nothing and counts as no query
    let query = if request.query.is_empty() { "" } else { params.q.as_str() };
    request.search_attributes = match &params.search_attrs {
        Some(attrs) => attrs.clone(),
        None if definition.search_bodies && !query.is_empty() => "default".to_string(),
        None => String::new(),
    };

    let mut link = definition.link_for(id);
    let discovery = match definition.discovery {
        Discovery::None => None,
        Discovery::Replies if is_item_id(id) => {
            request.filters = format!("parent_id={}", id);
            link = format!("{}{}", HN_ITEM_URL, id);
            None
        }
        Discovery::Replies => Some(PendingDiscovery::RepliesByAuthor(id.to_string())),
        Discovery::HiringThread(phrase) => Some(PendingDiscovery::HiringThread(phrase)),
    };

    Ok(FeedPlan {
        target: FeedTarget {
            route,
            id: id.to_string(),
            query: query.to_string(),
            request,
            title: feed_title(&definition.label_for(id), query),
            link,
        },
        discovery,
    })
}

pub fn is_item_id(id: &str) -> bool {
    !id.is_empty() && id.chars().all(|c| c.is_ascii_digit())
}

/// IDs end up inside tag expressions, so only HN username characters pass
fn validate_id(route: FeedRoute, id: &str) -> Result<(), AppError> {
    let path = route.definition().path;

    if id.is_empty() {
        return Err(AppError::BadRequest(format!("{} requires an id", path)));
    }
    if route == FeedRoute::Item && !is_item_id(id) {
        return Err(AppError::BadRequest(format!("{} requires a numeric id", path)));
    }
    if !id.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-') {
        return Err(AppError::BadRequest(format!("Invalid id: {}", id)));
    }
    Ok(())
}
