//! Search client port trait
//!
//! Defines the interface for querying the HN search index.

use async_trait::async_trait;
use serde::Deserialize;

use crate::domain::entities::{Hit, SearchRequest};
use crate::error::SearchError;

/// Response of a search call, newest hit first
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub hits: Vec<Hit>,
}

/// Response of an item lookup
#[derive(Debug, Clone, Deserialize)]
pub struct ItemResponse {
    pub id: i64,
    #[serde(default)]
    pub title: Option<String>,
}

/// Search client trait
#[async_trait]
pub trait SearchClient: Send + Sync {
    /// Full upstream URL for a request.
    ///
    /// `search` must request exactly this URL so diagnostics never drift from
    /// what was actually sent.
    fn search_url(&self, request: &SearchRequest) -> String;

    /// Run a search, ordered by date
    async fn search(&self, request: &SearchRequest) -> Result<SearchResponse, SearchError>;

    /// Look up a single item by ID
    async fn get_item(&self, id: &str) -> Result<ItemResponse, SearchError>;
}
