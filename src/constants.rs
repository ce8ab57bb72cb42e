//! Centralized constants for the event-search crate
//!
//! Values shared between the client side (coordinator, CLI) and the
//! upstream proxy.

/// Geohash constants
pub mod geohash {
    /// 32-symbol base32 alphabet (no a, i, l, o)
    pub const BASE32: &[u8; 32] = b"0123456789bcdefghjkmnpqrstuvwxyz";

    /// Precision used for search queries
    pub const DEFAULT_PRECISION: usize = 7;
}

/// Search constants
pub mod search {
    /// Radius used when the input is empty or not a number
    pub const DEFAULT_RADIUS: u32 = 10;

    /// Smallest accepted radius
    pub const MIN_RADIUS: u32 = 1;

    /// Largest accepted radius
    pub const MAX_RADIUS: u32 = 200;

    /// Distance unit sent with every search
    pub const UNIT: &str = "miles";

    /// Number of result rows presented
    pub const MAX_RESULTS: usize = 20;
}

/// External API endpoints
pub mod api {
    /// IP geolocation API (token passed as query parameter)
    pub const IPINFO_URL: &str = "https://ipinfo.io/";

    /// Google geocoding API
    pub const GOOGLE_GEOCODE_URL: &str = "https://maps.googleapis.com/maps/api/geocode/json";

    /// Ticketmaster discovery API
    pub const TICKETMASTER_URL: &str = "https://app.ticketmaster.com/discovery/v2";

    /// Google Maps search link base
    pub const GOOGLE_MAPS_SEARCH_URL: &str = "https://www.google.com/maps/search/?api=1&query=";

    /// Environment variable that overrides the configured Ticketmaster key
    pub const TM_API_KEY_ENV: &str = "TM_API_KEY";
}

/// User-facing messages
pub mod messages {
    pub const NO_RECORDS: &str = "No records found";
    pub const LOCATION_NOT_DETERMINED: &str = "Could not determine location";
    pub const LOCATION_NOT_DETECTED: &str = "Could not auto-detect location";
    pub const AUTHORIZATION: &str = "Authorization error";
    pub const TIMED_OUT: &str = "Request timed out";
    pub const EVENT_LOAD_FAILED: &str = "Failed to load event details";
    pub const VENUE_LOAD_FAILED: &str = "Failed to load venue details";
}
