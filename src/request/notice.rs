//! User-facing failure notices
//!
//! Failures reach the user as one short banner. Cancellation never does.

use crate::constants::messages;
use crate::error::Error;
use serde::Serialize;
use std::fmt;

/// Banner shown in place of results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Notice {
    LocationNotDetermined,
    LocationNotDetected,
    Authorization,
    TimedOut,
    NoRecords,
    EventLoadFailed,
    VenueLoadFailed,
}

impl Notice {
    /// Classify a search failure
    ///
    /// Checked in order: geocoding, IP location, 401/403, timeout. Anything
    /// else reads as "no records". Returns `None` for cancellation.
    pub fn classify(err: &Error) -> Option<Notice> {
        let notice = match err {
            Error::Cancelled => return None,
            Error::GeocodingFailed(_) => Notice::LocationNotDetermined,
            Error::LocationUnavailable | Error::LocationParse(_) => Notice::LocationNotDetected,
            Error::ServerError { status: 401 | 403 } => Notice::Authorization,
            Error::Timeout => Notice::TimedOut,
            _ => Notice::NoRecords,
        };
        Some(notice)
    }

    pub fn message(&self) -> &'static str {
        match self {
            Notice::LocationNotDetermined => messages::LOCATION_NOT_DETERMINED,
            Notice::LocationNotDetected => messages::LOCATION_NOT_DETECTED,
            Notice::Authorization => messages::AUTHORIZATION,
            Notice::TimedOut => messages::TIMED_OUT,
            Notice::NoRecords => messages::NO_RECORDS,
            Notice::EventLoadFailed => messages::EVENT_LOAD_FAILED,
            Notice::VenueLoadFailed => messages::VENUE_LOAD_FAILED,
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}
