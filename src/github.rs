use async_trait::async_trait;
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

use crate::error::{RepoBrowserError, Result};
use crate::models::RepoQuery;
use crate::types::{SearchItem, SearchResponse};

const API_BASE_URL: &str = "https://api.github.com";
const SORT_FIELD: &str = "stars";

/// Anything that can resolve a repository query into raw search items.
#[async_trait]
pub trait SearchBackend: Send + Sync {
    async fn search(&self, query: &RepoQuery) -> Result<Vec<SearchItem>>;
}

#[async_trait]
impl<B: SearchBackend + ?Sized> SearchBackend for Arc<B> {
    async fn search(&self, query: &RepoQuery) -> Result<Vec<SearchItem>> {
        (**self).search(query).await
    }
}

pub struct GitHubClient {
    client: Client,
    base_url: String,
}

impl GitHubClient {
    pub fn new() -> Result<Self> {
        Self::with_base_url(API_BASE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .user_agent("Repo Browser/0.1.0")
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(GitHubClient {
            client,
            base_url: base_url.into(),
        })
    }

    /// Build the search URL for a query. The term doubles as a topic filter,
    /// and `per_page` carries the raw limit value through unchanged; the
    /// service decides what to do with an invalid one.
    pub fn search_url(&self, query: &RepoQuery) -> Result<Url> {
        let mut url = Url::parse(&format!("{}/search/repositories", self.base_url))
            .map_err(|e| RepoBrowserError::InvalidUrl(e.to_string()))?;

        url.query_pairs_mut()
            .append_pair("q", &format!("{} topic:{}", query.term, query.term))
            .append_pair("page", &query.page.to_string())
            .append_pair("per_page", &query.limit)
            .append_pair("sort", SORT_FIELD)
            .append_pair("order", query.order.as_str());

        Ok(url)
    }
}

#[async_trait]
impl SearchBackend for GitHubClient {
    async fn search(&self, query: &RepoQuery) -> Result<Vec<SearchItem>> {
        let url = self.search_url(query)?;

        // Anonymous request, no Authorization header. Subject to the
        // unauthenticated rate limits.
        let response = self
            .client
            .get(url)
            .header("Accept", "application/vnd.github.v3+json")
            .send()
            .await?;

        match response.status() {
            reqwest::StatusCode::OK => {
                let body: SearchResponse = response.json().await?;
                Ok(body.items)
            }
            status => {
                let error_text = response.text().await.unwrap_or_default();
                Err(RepoBrowserError::ApiError(format!(
                    "search request failed with status {}: {}",
                    status, error_text
                )))
            }
        }
    }
}
