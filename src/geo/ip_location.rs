//! IP-based geolocation
//!
//! Uses ipinfo.io, which reports the caller's position as a single
//! `"<lat>,<lng>"` string in its `loc` field.

use crate::error::{Error, Result};
use crate::geo::{Coordinate, IpLocator};
use serde::Deserialize;
use tracing::debug;

/// ipinfo.io lookup
#[derive(Debug, Clone)]
pub struct IpInfoLocator {
    client: reqwest::Client,
    base_url: String,
    token: String,
}

/// ipinfo.io response (only the field we need)
#[derive(Debug, Deserialize)]
struct IpInfoResponse {
    #[serde(default)]
    loc: Option<serde_json::Value>,
}

impl IpInfoLocator {
    /// Create a locator with a specific client and endpoint
    pub fn with_client(
        client: reqwest::Client,
        base_url: impl Into<String>,
        token: impl Into<String>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            token: token.into(),
        }
    }

    fn request_url(&self) -> String {
        format!("{}?token={}", self.base_url, urlencoding::encode(&self.token))
    }
}

impl IpLocator for IpInfoLocator {
    async fn locate(&self) -> Result<Coordinate> {
        let response = self
            .client
            .get(self.request_url())
            .send()
            .await
            .map_err(Error::transport)?;

        if !response.status().is_success() {
            debug!("IP location API returned status: {}", response.status());
            return Err(Error::LocationUnavailable);
        }

        let data: IpInfoResponse = response.json().await.map_err(Error::transport)?;

        match data.loc {
            None | Some(serde_json::Value::Null) => Err(Error::LocationUnavailable),
            Some(serde_json::Value::String(loc)) if loc.trim().is_empty() => {
                Err(Error::LocationUnavailable)
            }
            Some(serde_json::Value::String(loc)) => parse_loc(&loc),
            Some(other) => Err(Error::LocationParse(format!("Invalid loc value: {}", other))),
        }
    }
}

/// Parse a `"<lat>,<lng>"` string
///
/// Extra comma-separated parts are ignored; both numbers must be finite.
pub fn parse_loc(loc: &str) -> Result<Coordinate> {
    let mut parts = loc.split(',').map(str::trim);

    let lat = parts.next().and_then(parse_finite);
    let lng = parts.next().and_then(parse_finite);

    match (lat, lng) {
        (Some(lat), Some(lng)) => Ok(Coordinate::new(lat, lng)),
        _ => Err(Error::LocationParse(format!("Invalid loc value: {}", loc))),
    }
}

fn parse_finite(value: &str) -> Option<f64> {
    value.parse::<f64>().ok().filter(|v| v.is_finite())
}
