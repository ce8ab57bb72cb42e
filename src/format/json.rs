//! JSON output formatter

use crate::error::Result;
use crate::events::{EventDetails, ResultTable, VenueDetails};
use crate::format::OutputFormatter;
use crate::request::Notice;
use serde_json::json;

/// JSON formatter - outputs pretty-printed JSON
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "Pretty-printed JSON"
    }

    fn table(&self, table: &ResultTable) -> Result<String> {
        Ok(serde_json::to_string_pretty(table)?)
    }

    fn event(&self, details: &EventDetails) -> Result<String> {
        Ok(serde_json::to_string_pretty(details)?)
    }

    fn venue(&self, details: &VenueDetails) -> Result<String> {
        Ok(serde_json::to_string_pretty(details)?)
    }

    fn notice(&self, notice: Notice) -> Result<String> {
        Ok(serde_json::to_string_pretty(&json!({
            "notice": notice,
            "message": notice.message(),
        }))?)
    }
}
