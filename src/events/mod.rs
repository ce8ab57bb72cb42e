//! Event search data
//!
//! Wire models for the search, event and venue endpoints, the client that
//! fetches them, and the plain-data views built from them.

pub mod client;
pub mod model;
pub mod table;
pub mod view;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub use client::{EventsApi, HttpEventsClient};
pub use table::{Column, ResultTable, SortDirection};
pub use view::{EventDetails, EventRow, VenueDetails};

/// Event category used as an optional search filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Segment {
    Music,
    Sports,
    ArtsTheatre,
    Film,
    Miscellaneous,
}

impl Segment {
    /// Upstream segment identifier
    pub fn id(self) -> &'static str {
        match self {
            Segment::Music => "KZFzniwnSyZfZ7v7nJ",
            Segment::Sports => "KZFzniwnSyZfZ7v7nE",
            Segment::ArtsTheatre => "KZFzniwnSyZfZ7v7na",
            Segment::Film => "KZFzniwnSyZfZ7v7nn",
            Segment::Miscellaneous => "KZFzniwnSyZfZ7v7n1",
        }
    }

    pub fn all() -> [Segment; 5] {
        [
            Segment::Music,
            Segment::Sports,
            Segment::ArtsTheatre,
            Segment::Film,
            Segment::Miscellaneous,
        ]
    }

    /// Parse a category name; "default" (or empty) means no filter
    pub fn parse_filter(value: &str) -> Result<Option<Segment>, String> {
        match value.trim().to_lowercase().as_str() {
            "" | "default" => Ok(None),
            other => other.parse().map(Some),
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Music => write!(f, "music"),
            Segment::Sports => write!(f, "sports"),
            Segment::ArtsTheatre => write!(f, "arts"),
            Segment::Film => write!(f, "film"),
            Segment::Miscellaneous => write!(f, "miscellaneous"),
        }
    }
}

impl FromStr for Segment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "music" => Ok(Segment::Music),
            "sports" => Ok(Segment::Sports),
            "arts" | "arts_theatre" | "arts & theatre" | "theatre" => Ok(Segment::ArtsTheatre),
            "film" => Ok(Segment::Film),
            "miscellaneous" | "misc" => Ok(Segment::Miscellaneous),
            _ => Err(format!(
                "Unknown category: {}. Valid: default, music, sports, arts, film, miscellaneous",
                s
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_from_str() {
        assert_eq!("music".parse::<Segment>().unwrap(), Segment::Music);
        assert_eq!("Arts & Theatre".parse::<Segment>().unwrap(), Segment::ArtsTheatre);
        assert!("opera".parse::<Segment>().is_err());
    }

    #[test]
    fn test_segment_filter() {
        assert_eq!(Segment::parse_filter("default").unwrap(), None);
        assert_eq!(Segment::parse_filter("").unwrap(), None);
        assert_eq!(Segment::parse_filter("Sports").unwrap(), Some(Segment::Sports));
    }

    #[test]
    fn test_segment_ids_are_distinct() {
        let mut ids: Vec<_> = Segment::all().iter().map(|s| s.id()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 5);
        assert_eq!(Segment::Music.id(), "KZFzniwnSyZfZ7v7nJ");
    }

    #[test]
    fn test_display_roundtrip() {
        for segment in Segment::all() {
            assert_eq!(segment.to_string().parse::<Segment>().unwrap(), segment);
        }
    }
}
