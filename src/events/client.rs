//! Events API client
//!
//! Talks to the search proxy (`/search`, `/event`, `/venue`). Any non-2xx
//! status becomes `ServerError { status }` so the coordinator can classify it.

use crate::error::{Error, Result};
use crate::events::model::{Event, SearchResponse, VenueResponse};
use crate::request::SearchQuery;
use serde::de::DeserializeOwned;
use std::future::Future;
use std::time::Duration;
use tracing::debug;

/// Source of search, event and venue data
pub trait EventsApi: Send + Sync {
    /// Run an event search
    fn search(&self, query: &SearchQuery) -> impl Future<Output = Result<SearchResponse>> + Send;

    /// Fetch one event by id
    fn event(&self, id: &str) -> impl Future<Output = Result<Event>> + Send;

    /// Look up venues by name
    fn venue(&self, keyword: &str) -> impl Future<Output = Result<VenueResponse>> + Send;
}

/// Build the HTTP client shared by all outbound calls
pub fn build_http_client(timeout: Duration) -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(concat!("event-search/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(Error::transport)
}

/// reqwest-backed client for the search proxy
#[derive(Debug, Clone)]
pub struct HttpEventsClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpEventsClient {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(&self, path_and_query: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, path_and_query);
        debug!("GET {}", url);

        let response = self.client.get(&url).send().await.map_err(Error::transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::ServerError {
                status: status.as_u16(),
            });
        }

        response.json().await.map_err(Error::transport)
    }
}

impl EventsApi for HttpEventsClient {
    async fn search(&self, query: &SearchQuery) -> Result<SearchResponse> {
        self.get_json(&format!("/search?{}", query.to_query_string()))
            .await
    }

    async fn event(&self, id: &str) -> Result<Event> {
        self.get_json(&format!("/event?id={}", urlencoding::encode(id)))
            .await
    }

    async fn venue(&self, keyword: &str) -> Result<VenueResponse> {
        self.get_json(&format!("/venue?keyword={}", urlencoding::encode(keyword)))
            .await
    }
}
