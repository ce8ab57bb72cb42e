//! Wire models for the search, event and venue endpoints
//!
//! Every field is optional: upstream payloads routinely omit parts of an
//! event, and a missing field must render as a placeholder rather than fail
//! the whole response.

use serde::{Deserialize, Serialize};

/// `GET /search` response: `{_embedded:{events:[...]}}`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(rename = "_embedded", default, skip_serializing_if = "Option::is_none")]
    pub embedded: Option<SearchEmbedded>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchEmbedded {
    #[serde(default)]
    pub events: Vec<Event>,
}

impl SearchResponse {
    /// Events in received order (empty when the payload has none)
    pub fn events(&self) -> &[Event] {
        self.embedded
            .as_ref()
            .map(|e| e.events.as_slice())
            .unwrap_or(&[])
    }
}

/// An event, as returned by both the search and the detail endpoints
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: Option<String>,
    pub name: Option<String>,
    pub url: Option<String>,
    pub dates: Option<Dates>,
    #[serde(default)]
    pub images: Vec<Image>,
    #[serde(default)]
    pub classifications: Vec<Classification>,
    #[serde(default)]
    pub price_ranges: Vec<PriceRange>,
    pub seatmap: Option<Seatmap>,
    #[serde(rename = "_embedded")]
    pub embedded: Option<EventEmbedded>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dates {
    pub start: Option<DateStart>,
    pub status: Option<DateStatus>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateStart {
    pub local_date: Option<String>,
    pub local_time: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DateStatus {
    pub code: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Image {
    pub width: Option<u32>,
    pub url: Option<String>,
}

/// A named classification level (segment, genre, ...)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Named {
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Classification {
    pub segment: Option<Named>,
    pub genre: Option<Named>,
    pub sub_genre: Option<Named>,
    #[serde(rename = "type")]
    pub kind: Option<Named>,
    pub sub_type: Option<Named>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Seatmap {
    pub static_url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventEmbedded {
    #[serde(default)]
    pub venues: Vec<Venue>,
    #[serde(default)]
    pub attractions: Vec<Attraction>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Attraction {
    pub name: Option<String>,
    pub url: Option<String>,
}

/// `GET /venue` response: `{_embedded:{venues:[...]}}`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VenueResponse {
    #[serde(rename = "_embedded", default, skip_serializing_if = "Option::is_none")]
    pub embedded: Option<VenueEmbedded>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VenueEmbedded {
    #[serde(default)]
    pub venues: Vec<Venue>,
}

impl VenueResponse {
    pub fn first_venue(&self) -> Option<&Venue> {
        self.embedded.as_ref().and_then(|e| e.venues.first())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Venue {
    pub name: Option<String>,
    pub url: Option<String>,
    pub postal_code: Option<String>,
    pub address: Option<Address>,
    pub city: Option<City>,
    pub state: Option<State>,
    #[serde(default)]
    pub images: Vec<Image>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Address {
    pub line1: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct City {
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct State {
    pub state_code: Option<String>,
}

impl Event {
    pub fn first_classification(&self) -> Option<&Classification> {
        self.classifications.first()
    }

    pub fn first_venue(&self) -> Option<&Venue> {
        self.embedded.as_ref().and_then(|e| e.venues.first())
    }

    pub fn attractions(&self) -> &[Attraction] {
        self.embedded
            .as_ref()
            .map(|e| e.attractions.as_slice())
            .unwrap_or(&[])
    }

    pub fn start(&self) -> Option<&DateStart> {
        self.dates.as_ref().and_then(|d| d.start.as_ref())
    }

    pub fn status_code(&self) -> Option<&str> {
        self.dates
            .as_ref()
            .and_then(|d| d.status.as_ref())
            .and_then(|s| s.code.as_deref())
    }
}
