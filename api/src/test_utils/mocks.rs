//! Mock implementations of port traits
//!
//! In-memory implementations that can be configured for testing.
//! They store data in memory and allow tests to verify behavior.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::domain::entities::{Hit, SearchRequest};
use crate::domain::ports::{ItemResponse, SearchClient, SearchResponse};
use crate::error::SearchError;

const MOCK_SEARCH_URL: &str = "https://hn.algolia.com/api/v1/search_by_date";

// ============================================================================
// Mock Search Client
// ============================================================================

#[derive(Default)]
pub struct MockSearchClient {
    should_fail: Arc<RwLock<bool>>,
    /// Hits returned for an exact tag expression
    hits_by_tags: Arc<RwLock<HashMap<String, Vec<Hit>>>>,
    items: Arc<RwLock<HashMap<String, ItemResponse>>>,
    requests: Arc<RwLock<Vec<SearchRequest>>>,
    item_lookups: Arc<RwLock<usize>>,
}

impl MockSearchClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        let client = Self::default();
        *client.should_fail.write().unwrap() = true;
        client
    }

    /// Answer searches for `tags` with these hits
    pub fn with_hits(self, tags: &str, hits: Vec<Hit>) -> Self {
        self.hits_by_tags
            .write()
            .unwrap()
            .insert(tags.to_string(), hits);
        self
    }

    /// Configure an item to exist
    pub fn with_item(self, id: &str, title: &str) -> Self {
        self.items.write().unwrap().insert(
            id.to_string(),
            ItemResponse {
                id: id.parse().unwrap_or_default(),
                title: Some(title.to_string()),
            },
        );
        self
    }

    /// Every search request received, in order
    pub fn requests(&self) -> Vec<SearchRequest> {
        self.requests.read().unwrap().clone()
    }

    pub fn item_lookups(&self) -> usize {
        *self.item_lookups.read().unwrap()
    }
}

#[async_trait]
impl SearchClient for MockSearchClient {
    fn search_url(&self, request: &SearchRequest) -> String {
        format!("{}?{}", MOCK_SEARCH_URL, request.encode())
    }

    async fn search(&self, request: &SearchRequest) -> Result<SearchResponse, SearchError> {
        self.requests.write().unwrap().push(request.clone());

        if *self.should_fail.read().unwrap() {
            return Err(SearchError::Api {
                status: 503,
                message: "Mock failure".to_string(),
            });
        }

        let hits = self
            .hits_by_tags
            .read()
            .unwrap()
            .get(&request.tags)
            .cloned()
            .unwrap_or_default();

        Ok(SearchResponse { hits })
    }

    async fn get_item(&self, id: &str) -> Result<ItemResponse, SearchError> {
        *self.item_lookups.write().unwrap() += 1;

        if *self.should_fail.read().unwrap() {
            return Err(SearchError::Api {
                status: 503,
                message: "Mock failure".to_string(),
            });
        }

        self.items
            .read()
            .unwrap()
            .get(id)
            .cloned()
            .ok_or_else(|| SearchError::Api {
                status: 404,
                message: format!("Item {} not found", id),
            })
    }
}
