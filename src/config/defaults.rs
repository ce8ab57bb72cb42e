//! Default configuration values
//!
//! Named constants for all tunable parameters

use crate::constants::{api, geohash, search};

/// Default search radius in miles
pub const DEFAULT_RADIUS: u32 = search::DEFAULT_RADIUS;

/// Default geohash precision
pub const DEFAULT_PRECISION: usize = geohash::DEFAULT_PRECISION;

/// Default number of result rows
pub const DEFAULT_MAX_RESULTS: usize = search::MAX_RESULTS;

/// Default server host
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default server port
pub const DEFAULT_PORT: u16 = 7878;

/// Default proxy URL used by client commands
pub const DEFAULT_CLIENT_BASE_URL: &str = "http://127.0.0.1:7878";

/// Default timeout for outbound requests, in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Default upstream ticketing API
pub const DEFAULT_UPSTREAM_URL: &str = api::TICKETMASTER_URL;

/// Default IP location endpoint
pub const DEFAULT_IP_LOCATION_URL: &str = api::IPINFO_URL;

/// Default geocoding endpoint
pub const DEFAULT_GEOCODE_URL: &str = api::GOOGLE_GEOCODE_URL;

/// Config file name
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Application directory name (for XDG paths)
pub const APP_DIR_NAME: &str = "event-search";
