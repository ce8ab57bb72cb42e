//! Google geocoding backend
//!
//! Looks up free-form location text and takes the first result's
//! `geometry.location`.

use crate::error::{Error, Result};
use crate::geo::{Coordinate, Geocoder};
use serde::Deserialize;

/// Google geocoding backend
#[derive(Debug, Clone)]
pub struct GoogleGeocoder {
    client: reqwest::Client,
    base_url: String,
    key: String,
}

#[derive(Debug, Default, Deserialize)]
struct GeocodeResponse {
    #[serde(default)]
    results: Vec<GeocodeResult>,
    #[serde(default)]
    status: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeocodeResult {
    #[serde(default)]
    geometry: Option<Geometry>,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    #[serde(default)]
    location: Option<LatLng>,
}

#[derive(Debug, Deserialize)]
struct LatLng {
    #[serde(default)]
    lat: Option<f64>,
    #[serde(default)]
    lng: Option<f64>,
}

impl GoogleGeocoder {
    /// Create a geocoder with a specific client and endpoint
    pub fn with_client(
        client: reqwest::Client,
        base_url: impl Into<String>,
        key: impl Into<String>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            key: key.into(),
        }
    }

    fn request_url(&self, address: &str) -> String {
        format!(
            "{}?address={}&key={}",
            self.base_url,
            urlencoding::encode(address),
            urlencoding::encode(&self.key)
        )
    }

    fn first_location(response: GeocodeResponse) -> Result<Coordinate> {
        response
            .results
            .into_iter()
            .next()
            .and_then(|r| r.geometry)
            .and_then(|g| g.location)
            .and_then(|loc| Some(Coordinate::new(loc.lat?, loc.lng?)))
            .ok_or_else(|| {
                Error::GeocodingFailed(
                    response.status.unwrap_or_else(|| "no results".to_string()),
                )
            })
    }
}

impl Geocoder for GoogleGeocoder {
    async fn geocode(&self, address: &str) -> Result<Coordinate> {
        let response = self
            .client
            .get(self.request_url(address))
            .send()
            .await
            .map_err(Error::transport)?;

        if !response.status().is_success() {
            return Err(Error::GeocodingFailed(format!(
                "geocoding API returned status: {}",
                response.status()
            )));
        }

        let data: GeocodeResponse = response.json().await.map_err(Error::transport)?;
        Self::first_location(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use axum::{extract::Query, routing::get, Json, Router};
    use std::collections::HashMap;
    use tokio::net::TcpListener;

    async fn spawn_mock() -> String {
        let app = Router::new().route(
            "/geocode/json",
            get(|Query(params): Query<HashMap<String, String>>| async move {
                assert_eq!(params.get("key").map(String::as_str), Some("k"));
                let body = match params.get("address").map(String::as_str) {
                    Some("Los Angeles, CA") => serde_json::json!({
                        "status": "OK",
                        "results": [{"geometry": {"location": {"lat": 34.0522, "lng": -118.2437}}}]
                    }),
                    Some("Null Island") => serde_json::json!({
                        "status": "OK",
                        "results": [{"geometry": {"location": {"lat": null, "lng": null}}}]
                    }),
                    Some("Half Known") => serde_json::json!({
                        "status": "OK",
                        "results": [{"geometry": {"location": {"lat": 12.5}}}]
                    }),
                    _ => serde_json::json!({"status": "ZERO_RESULTS", "results": []}),
                };
                Json(body)
            }),
        );
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}/geocode/json", addr)
    }

    #[test]
    fn test_request_url_encodes_address() {
        let geocoder = GoogleGeocoder::with_client(reqwest::Client::new(), "http://x/json", "k");
        assert_eq!(
            geocoder.request_url("New York, NY"),
            "http://x/json?address=New%20York%2C%20NY&key=k"
        );
    }

    #[test]
    fn test_first_location_missing_geometry() {
        let response: GeocodeResponse =
            serde_json::from_value(serde_json::json!({"results": [{"formatted_address": "x"}]}))
                .unwrap();
        assert!(matches!(
            GoogleGeocoder::first_location(response),
            Err(Error::GeocodingFailed(_))
        ));
    }

    #[tokio::test]
    async fn test_geocode_success() {
        let url = spawn_mock().await;
        let geocoder = GoogleGeocoder::with_client(reqwest::Client::new(), url, "k");

        let coord = geocoder.geocode("Los Angeles, CA").await.unwrap();
        assert_relative_eq!(coord.lat, 34.0522);
        assert_relative_eq!(coord.lng, -118.2437);
    }

    #[tokio::test]
    async fn test_geocode_no_results() {
        let url = spawn_mock().await;
        let geocoder = GoogleGeocoder::with_client(reqwest::Client::new(), url, "k");

        match geocoder.geocode("Nowhere at all").await {
            Err(Error::GeocodingFailed(reason)) => assert_eq!(reason, "ZERO_RESULTS"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_geocode_location_without_coordinates() {
        let url = spawn_mock().await;
        let geocoder = GoogleGeocoder::with_client(reqwest::Client::new(), url, "k");

        for address in ["Null Island", "Half Known"] {
            match geocoder.geocode(address).await {
                Err(Error::GeocodingFailed(reason)) => assert_eq!(reason, "OK"),
                other => panic!("unexpected result for {}: {:?}", address, other),
            }
        }
    }
}
