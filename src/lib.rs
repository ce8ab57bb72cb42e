//! event-search: nearby event search client and proxy
//!
//! A library and CLI tool for finding events near a place, by keyword and
//! category, against a ticketing API fronted by a small proxy.
//!
//! ## Features
//!
//! - Geohash encoding of the search location
//! - Location from IP address or from a geocoded place name
//! - Per-flow request tracking: a new search cancels the one in flight
//! - Event and venue detail cards, sortable result table
//! - HTTP proxy that keeps the API key server side
//!
//! ## Quick Start
//!
//! ```rust
//! use event_search::geo::geohash;
//! use event_search::request::normalize_radius;
//!
//! // NYC at the default precision
//! assert_eq!(geohash::encode(40.7128, -74.0060, 7), "dr5regw");
//!
//! // Empty input falls back to 10 miles, out-of-range input is clamped
//! assert_eq!(normalize_radius(""), 10);
//! assert_eq!(normalize_radius("500"), 200);
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod events;
pub mod format;
pub mod geo;
pub mod request;
pub mod server;

// Re-export commonly used types
pub use config::Config;
pub use error::{Error, Result};
pub use geo::{Coordinate, LocationMode};
pub use request::{Notice, Outcome, RequestCoordinator, SearchParams};
