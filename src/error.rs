//! Error types for event-search

use thiserror::Error;

/// Main error type for event-search operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("IP location unavailable")]
    LocationUnavailable,

    #[error("IP location parse error: {0}")]
    LocationParse(String),

    #[error("Geocoding failed: {0}")]
    GeocodingFailed(String),

    #[error("Server responded {status}")]
    ServerError { status: u16 },

    #[error("Request cancelled")]
    Cancelled,

    #[error("Request timed out")]
    Timeout,

    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Server error: {0}")]
    Server(String),
}

impl Error {
    /// Map a transport failure, keeping timeouts distinguishable
    pub fn transport(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Error::Timeout
        } else {
            Error::Http(err)
        }
    }

    /// True for the one failure kind that is never shown to the user
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Error::Cancelled)
    }
}

/// Result type alias for event-search operations
pub type Result<T> = std::result::Result<T, Error>;
