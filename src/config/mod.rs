//! Configuration management
//!
//! Loads and saves configuration from XDG-compliant paths.
//! Config location: ~/.config/event-search/config.toml

pub mod defaults;

use crate::constants::api::TM_API_KEY_ENV;
use crate::error::{Error, Result};
use defaults::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Search behaviour
    #[serde(default)]
    pub search: SearchConfig,

    /// Proxy server settings
    #[serde(default)]
    pub server: ServerConfig,

    /// How client commands reach the proxy
    #[serde(default)]
    pub client: ClientConfig,

    /// Upstream ticketing API
    #[serde(default)]
    pub upstream: UpstreamConfig,

    /// Location lookup endpoints
    #[serde(default)]
    pub providers: ProvidersConfig,

    /// API keys for external services
    #[serde(default)]
    pub api_keys: ApiKeysConfig,
}

/// Search behaviour
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Radius used when none is given, in miles
    #[serde(default = "default_radius")]
    pub default_radius: u32,

    /// Geohash precision of the search location
    #[serde(default = "default_precision")]
    pub precision: usize,

    /// Number of result rows shown
    #[serde(default = "default_max_results")]
    pub max_results: usize,
}

/// Proxy server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Client settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the proxy
    #[serde(default = "default_client_base_url")]
    pub base_url: String,

    /// Timeout for every outbound request, in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

/// Upstream ticketing API settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamConfig {
    /// Base URL of the discovery API
    #[serde(default = "default_upstream_url")]
    pub base_url: String,

    /// Timeout for upstream calls, in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

/// Location lookup endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProvidersConfig {
    /// IP location endpoint
    #[serde(default = "default_ip_location_url")]
    pub ip_location_url: String,

    /// Geocoding endpoint
    #[serde(default = "default_geocode_url")]
    pub geocode_url: String,
}

/// API keys for external services
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ApiKeysConfig {
    /// IP location token
    #[serde(default)]
    pub ipinfo: String,

    /// Geocoding API key
    #[serde(default)]
    pub google_geocode: String,

    /// Ticketing API key (overridden by TM_API_KEY)
    #[serde(default)]
    pub ticketmaster: String,
}

// Default value functions for serde
fn default_radius() -> u32 {
    DEFAULT_RADIUS
}
fn default_precision() -> usize {
    DEFAULT_PRECISION
}
fn default_max_results() -> usize {
    DEFAULT_MAX_RESULTS
}
fn default_host() -> String {
    DEFAULT_HOST.to_string()
}
fn default_port() -> u16 {
    DEFAULT_PORT
}
fn default_client_base_url() -> String {
    DEFAULT_CLIENT_BASE_URL.to_string()
}
fn default_timeout() -> u64 {
    DEFAULT_TIMEOUT_SECS
}
fn default_upstream_url() -> String {
    DEFAULT_UPSTREAM_URL.to_string()
}
fn default_ip_location_url() -> String {
    DEFAULT_IP_LOCATION_URL.to_string()
}
fn default_geocode_url() -> String {
    DEFAULT_GEOCODE_URL.to_string()
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_radius: default_radius(),
            precision: default_precision(),
            max_results: default_max_results(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_client_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: default_upstream_url(),
            timeout_secs: default_timeout(),
        }
    }
}

impl Default for ProvidersConfig {
    fn default() -> Self {
        Self {
            ip_location_url: default_ip_location_url(),
            geocode_url: default_geocode_url(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|p| p.join(APP_DIR_NAME))
            .ok_or_else(|| Error::Config("Could not determine config directory".to_string()))
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE_NAME))
    }

    /// Load configuration from the default path
    ///
    /// Creates default config if file doesn't exist
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if path.exists() {
            let content = fs::read_to_string(&path).map_err(|e| {
                Error::Config(format!("Failed to read config file: {}", e))
            })?;

            toml::from_str(&content).map_err(|e| {
                Error::Config(format!("Failed to parse config file: {}", e))
            })
        } else {
            let config = Config::default();
            config.save()?;
            Ok(config)
        }
    }

    /// Save configuration to the default path
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                Error::Config(format!("Failed to create config directory: {}", e))
            })?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            Error::Config(format!("Failed to serialize config: {}", e))
        })?;

        fs::write(&path, content).map_err(|e| {
            Error::Config(format!("Failed to write config file: {}", e))
        })?;

        Ok(())
    }

    /// Get a configuration value by key path
    ///
    /// Key format: "section.key"
    /// Returns the value as a string, or None if not found
    pub fn get(&self, key: &str) -> Option<String> {
        let parts: Vec<&str> = key.split('.').collect();

        match parts.as_slice() {
            ["search", "default_radius"] => Some(self.search.default_radius.to_string()),
            ["search", "precision"] => Some(self.search.precision.to_string()),
            ["search", "max_results"] => Some(self.search.max_results.to_string()),

            ["server", "host"] => Some(self.server.host.clone()),
            ["server", "port"] => Some(self.server.port.to_string()),

            ["client", "base_url"] => Some(self.client.base_url.clone()),
            ["client", "timeout_secs"] => Some(self.client.timeout_secs.to_string()),

            ["upstream", "base_url"] => Some(self.upstream.base_url.clone()),
            ["upstream", "timeout_secs"] => Some(self.upstream.timeout_secs.to_string()),

            ["providers", "ip_location_url"] => Some(self.providers.ip_location_url.clone()),
            ["providers", "geocode_url"] => Some(self.providers.geocode_url.clone()),

            ["api_keys", "ipinfo"] => Some(self.api_keys.ipinfo.clone()),
            ["api_keys", "google_geocode"] => Some(self.api_keys.google_geocode.clone()),
            ["api_keys", "ticketmaster"] => Some(self.api_keys.ticketmaster.clone()),

            _ => None,
        }
    }

    /// Set a configuration value by key path
    ///
    /// Key format: "section.key"
    /// Returns error if key is invalid or value type is wrong
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let parts: Vec<&str> = key.split('.').collect();

        match parts.as_slice() {
            ["search", "default_radius"] => {
                self.search.default_radius = parse_value(value, "radius")?;
            }
            ["search", "precision"] => {
                let precision: usize = parse_value(value, "precision")?;
                if precision == 0 {
                    return Err(Error::Config("Precision must be at least 1".to_string()));
                }
                self.search.precision = precision;
            }
            ["search", "max_results"] => {
                self.search.max_results = parse_value(value, "max_results")?;
            }

            ["server", "host"] => {
                self.server.host = value.to_string();
            }
            ["server", "port"] => {
                self.server.port = parse_value(value, "port")?;
            }

            ["client", "base_url"] => {
                self.client.base_url = value.to_string();
            }
            ["client", "timeout_secs"] => {
                self.client.timeout_secs = parse_value(value, "timeout")?;
            }

            ["upstream", "base_url"] => {
                self.upstream.base_url = value.to_string();
            }
            ["upstream", "timeout_secs"] => {
                self.upstream.timeout_secs = parse_value(value, "timeout")?;
            }

            ["providers", "ip_location_url"] => {
                self.providers.ip_location_url = value.to_string();
            }
            ["providers", "geocode_url"] => {
                self.providers.geocode_url = value.to_string();
            }

            ["api_keys", "ipinfo"] => {
                self.api_keys.ipinfo = value.to_string();
            }
            ["api_keys", "google_geocode"] => {
                self.api_keys.google_geocode = value.to_string();
            }
            ["api_keys", "ticketmaster"] => {
                self.api_keys.ticketmaster = value.to_string();
            }

            _ => {
                return Err(Error::Config(format!("Unknown config key: {}", key)));
            }
        }

        Ok(())
    }

    /// List all available config keys
    pub fn available_keys() -> Vec<&'static str> {
        vec![
            "search.default_radius",
            "search.precision",
            "search.max_results",
            "server.host",
            "server.port",
            "client.base_url",
            "client.timeout_secs",
            "upstream.base_url",
            "upstream.timeout_secs",
            "providers.ip_location_url",
            "providers.geocode_url",
            "api_keys.ipinfo",
            "api_keys.google_geocode",
            "api_keys.ticketmaster",
        ]
    }

    /// Get server address as "host:port"
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Ticketing API key, preferring the TM_API_KEY environment variable
    pub fn ticketmaster_key(&self) -> Option<String> {
        std::env::var(TM_API_KEY_ENV)
            .ok()
            .filter(|k| !k.is_empty())
            .or_else(|| Some(self.api_keys.ticketmaster.clone()).filter(|k| !k.is_empty()))
    }

    pub fn client_timeout(&self) -> Duration {
        Duration::from_secs(self.client.timeout_secs)
    }

    pub fn upstream_timeout(&self) -> Duration {
        Duration::from_secs(self.upstream.timeout_secs)
    }
}

fn parse_value<T: std::str::FromStr>(value: &str, what: &str) -> Result<T> {
    value
        .parse()
        .map_err(|_| Error::Config(format!("Invalid {} value: {}", what, value)))
}
