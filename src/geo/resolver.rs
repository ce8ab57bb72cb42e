//! Location resolution
//!
//! Picks the IP locator or the geocoder depending on the requested mode and
//! runs the lookup under the caller's cancellation token. One attempt per
//! call; retrying is left to the caller.

use crate::error::{Error, Result};
use crate::geo::{Coordinate, Geocoder, IpLocator};
use crate::request::cancellable;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// How the search location is obtained
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocationMode {
    /// Use the caller's IP address
    AutoDetect,
    /// Geocode the given text
    Manual(String),
}

impl LocationMode {
    /// Build a mode from the auto-detect toggle and the location field
    pub fn from_input(auto_detect: bool, location_text: &str) -> Self {
        if auto_detect {
            LocationMode::AutoDetect
        } else {
            LocationMode::Manual(location_text.trim().to_string())
        }
    }
}

/// Resolves a coordinate from one of two lookup providers
#[derive(Debug, Clone)]
pub struct LocationResolver<I, G> {
    ip_locator: I,
    geocoder: G,
}

impl<I: IpLocator, G: Geocoder> LocationResolver<I, G> {
    pub fn new(ip_locator: I, geocoder: G) -> Self {
        Self {
            ip_locator,
            geocoder,
        }
    }

    pub fn ip_locator(&self) -> &I {
        &self.ip_locator
    }

    pub fn geocoder(&self) -> &G {
        &self.geocoder
    }

    /// Resolve the coordinate for `mode`
    ///
    /// Fails with `Cancelled` as soon as `cancel` fires, without waiting for
    /// the provider. The returned coordinate is always in range.
    pub async fn resolve(&self, mode: &LocationMode, cancel: &CancellationToken) -> Result<Coordinate> {
        match mode {
            LocationMode::AutoDetect => {
                debug!("Resolving location from IP address");
                let coord = cancellable(cancel, self.ip_locator.locate()).await?;
                coord
                    .validate()
                    .map_err(|e| Error::LocationParse(e.to_string()))?;
                Ok(coord)
            }
            LocationMode::Manual(text) => {
                let text = text.trim();
                if text.is_empty() {
                    return Err(Error::GeocodingFailed("location text is empty".to_string()));
                }
                debug!("Geocoding location '{}'", text);
                let coord = cancellable(cancel, self.geocoder.geocode(text)).await?;
                coord
                    .validate()
                    .map_err(|e| Error::GeocodingFailed(e.to_string()))?;
                Ok(coord)
            }
        }
    }
}
