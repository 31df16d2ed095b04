//! Feed domain entities
//!
//! The format-agnostic feed model handed to the RSS/Atom/JSON Feed encoders.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::hit::Hit;

/// Output format, selected by route suffix
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedFormat {
    #[default]
    Rss,
    Atom,
    JsonFeed,
}

impl FeedFormat {
    pub const ALL: [FeedFormat; 3] = [FeedFormat::Rss, FeedFormat::Atom, FeedFormat::JsonFeed];

    /// Path suffix that selects this format (`""` for the default)
    pub fn path_suffix(&self) -> &'static str {
        match self {
            FeedFormat::Rss => "",
            FeedFormat::Atom => ".atom",
            FeedFormat::JsonFeed => ".jsonfeed",
        }
    }
}

impl std::fmt::Display for FeedFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FeedFormat::Rss => write!(f, "rss"),
            FeedFormat::Atom => write!(f, "atom"),
            FeedFormat::JsonFeed => write!(f, "jsonfeed"),
        }
    }
}

/// One normalized feed entry
#[derive(Debug, Clone, Serialize)]
pub struct FeedItem {
    pub title: String,
    pub permalink_url: String,
    /// What the item's primary link points to
    pub target_url: String,
    /// Rendered HTML, `None` when descriptions are switched off
    pub description_html: Option<String>,
    pub published_at: DateTime<Utc>,
    pub author: String,
    pub comment_count: i64,
    pub points: i64,
}

impl FeedItem {
    pub fn from_hit(hit: &Hit, link_to: &str, with_description: bool) -> Self {
        Self {
            title: hit.title(),
            permalink_url: hit.permalink(),
            target_url: hit.target_url(link_to),
            description_html: with_description.then(|| hit.description_html()),
            published_at: hit.created_at(),
            author: hit.author.clone(),
            comment_count: hit.num_comments,
            points: hit.points,
        }
    }
}

/// Per-response feed metadata
#[derive(Debug, Clone, Serialize)]
pub struct FeedMetadata {
    pub title: String,
    /// HN page this feed mirrors
    pub link: String,
    /// Canonical URL of this feed request
    pub self_link: String,
    pub format: FeedFormat,
    /// Newest item's timestamp, or request time for an empty feed
    pub last_modified: DateTime<Utc>,
}

/// A fully assembled feed, ready for encoding
#[derive(Debug, Clone)]
pub struct FeedDocument {
    pub metadata: FeedMetadata,
    pub items: Vec<FeedItem>,
    /// Exact upstream URL of the final search
    pub upstream_url: String,
}
