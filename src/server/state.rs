//! Server shared state
//!
//! Holds configuration and the upstream client for the HTTP server.

use crate::config::Config;
use crate::error::Result;
use crate::events::client::build_http_client;
use std::time::Duration;

/// Shared state for the HTTP server
pub struct AppState {
    /// Configuration
    pub config: Config,

    /// Upstream ticketing API
    pub upstream: Upstream,
}

impl AppState {
    /// Create new application state
    ///
    /// The API key comes from `TM_API_KEY` when set, otherwise from config.
    pub fn new(config: Config) -> Result<Self> {
        let upstream = Upstream::new(
            &config.upstream.base_url,
            config.ticketmaster_key(),
            config.upstream_timeout(),
        )?;
        Ok(Self { config, upstream })
    }

    /// Create state with an explicit upstream
    pub fn with_upstream(config: Config, upstream: Upstream) -> Self {
        Self { config, upstream }
    }
}

/// Connection details for the ticketing API
pub struct Upstream {
    pub(crate) client: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) api_key: Option<String>,
}

impl Upstream {
    pub fn new(base_url: &str, api_key: Option<String>, timeout: Duration) -> Result<Self> {
        Ok(Self {
            client: build_http_client(timeout)?,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.filter(|k| !k.is_empty()),
        })
    }

    /// Full URL for an upstream path
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}
