//! Algolia HN Search API client implementation

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use urlencoding::encode;

use crate::domain::entities::SearchRequest;
use crate::domain::ports::{ItemResponse, SearchClient, SearchResponse};
use crate::error::SearchError;

/// Implementation of the search client over HTTP
pub struct AlgoliaClient {
    http: Client,
    base_url: String,
}

impl AlgoliaClient {
    pub fn new(base_url: String, timeout: Duration) -> Result<Self, SearchError> {
        let http = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("hnrss-api/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn handle_response<T: for<'de> Deserialize<'de>>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, SearchError> {
        let status = response.status();

        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| SearchError::Deserialization(e.to_string()))
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(SearchError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}

#[async_trait]
impl SearchClient for AlgoliaClient {
    fn search_url(&self, request: &SearchRequest) -> String {
        format!("{}?{}", self.api_url("/search_by_date"), request.encode())
    }

    async fn search(&self, request: &SearchRequest) -> Result<SearchResponse, SearchError> {
        let url = self.search_url(request);
        tracing::debug!(%url, "Searching");

        let response = self.http.get(&url).send().await?;
        self.handle_response(response).await
    }

    async fn get_item(&self, id: &str) -> Result<ItemResponse, SearchError> {
        let url = self.api_url(&format!("/items/{}", encode(id)));
        tracing::debug!(%url, "Fetching item");

        let response = self.http.get(&url).send().await?;
        self.handle_response(response).await
    }
}
