//! Location lookup and encoding
//!
//! Provides the coordinate type, the two lookup providers (IP location and
//! geocoding), the resolver that picks between them, and geohash encoding.

pub mod geohash;
pub mod google;
pub mod ip_location;
pub mod resolver;

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

pub use resolver::{LocationMode, LocationResolver};

/// A geographic coordinate (latitude, longitude)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    /// Create a new coordinate
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Validate that the coordinate is finite and within range
    ///
    /// Latitude: -90 to 90
    /// Longitude: -180 to 180
    pub fn validate(&self) -> Result<()> {
        if !self.lat.is_finite() || !(-90.0..=90.0).contains(&self.lat) {
            return Err(Error::InvalidCoordinates(format!(
                "Latitude {} is out of range [-90, 90]",
                self.lat
            )));
        }
        if !self.lng.is_finite() || !(-180.0..=180.0).contains(&self.lng) {
            return Err(Error::InvalidCoordinates(format!(
                "Longitude {} is out of range [-180, 180]",
                self.lng
            )));
        }
        Ok(())
    }
}

/// Locates the caller from their public IP address
pub trait IpLocator: Send + Sync {
    /// Look up the current location
    fn locate(&self) -> impl std::future::Future<Output = Result<Coordinate>> + Send;
}

/// Turns free-form location text into a coordinate
pub trait Geocoder: Send + Sync {
    /// Geocode a location string to the best matching coordinate
    fn geocode(&self, address: &str) -> impl std::future::Future<Output = Result<Coordinate>> + Send;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_serialization() {
        let coord = Coordinate::new(40.7128, -74.0060);

        let json = serde_json::to_string(&coord).unwrap();
        let parsed: Coordinate = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, coord);
    }

    #[test]
    fn test_validate_in_range() {
        assert!(Coordinate::new(0.0, 0.0).validate().is_ok());
        assert!(Coordinate::new(90.0, 180.0).validate().is_ok());
        assert!(Coordinate::new(-90.0, -180.0).validate().is_ok());
    }

    #[test]
    fn test_validate_out_of_range() {
        assert!(Coordinate::new(91.0, 0.0).validate().is_err());
        assert!(Coordinate::new(0.0, -180.5).validate().is_err());
        assert!(Coordinate::new(f64::NAN, 0.0).validate().is_err());
        assert!(Coordinate::new(0.0, f64::INFINITY).validate().is_err());
    }
}
