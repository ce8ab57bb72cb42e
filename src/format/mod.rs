//! Output formatters
//!
//! Provides trait-based output formatting for search results, detail
//! cards and user-facing notices.

pub mod json;
pub mod text;

use crate::error::Result;
use crate::events::{EventDetails, ResultTable, VenueDetails};
use crate::request::Notice;
use serde::{Deserialize, Serialize};

/// Information about an output format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormatInfo {
    /// Format name
    pub name: String,
    /// Format description
    pub description: String,
}

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Get the format name
    fn name(&self) -> &str;

    /// Get the format description
    fn description(&self) -> &str;

    /// Format a search results table
    fn table(&self, table: &ResultTable) -> Result<String>;

    /// Format an event detail card
    fn event(&self, details: &EventDetails) -> Result<String>;

    /// Format a venue detail card
    fn venue(&self, details: &VenueDetails) -> Result<String>;

    /// Format a user-facing notice
    fn notice(&self, notice: Notice) -> Result<String>;
}

/// Get a formatter by name
pub fn get_formatter(name: &str) -> Option<Box<dyn OutputFormatter>> {
    match name.to_lowercase().as_str() {
        "json" => Some(Box::new(json::JsonFormatter)),
        "text" => Some(Box::new(text::TextFormatter)),
        _ => None,
    }
}

/// List all available formatters
pub fn available_formats() -> Vec<FormatInfo> {
    vec![
        FormatInfo {
            name: "text".to_string(),
            description: "Human-readable text".to_string(),
        },
        FormatInfo {
            name: "json".to_string(),
            description: "Pretty-printed JSON".to_string(),
        },
    ]
}
