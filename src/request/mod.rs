//! Request lifecycle coordination
//!
//! Everything that decides which asynchronous lookup is allowed to reach the
//! user: per-flow request handles, the coordinator that supersedes stale
//! work, and the mapping from failures to user-facing notices.
//!
//! ## Cancellation
//! Each logical request carries one `CancellationToken`. Every suspending
//! step (location lookup, search fetch, detail fetch, venue fetch) runs
//! through [`cancellable`], so cancelling the token short-circuits the rest
//! of the chain before it starts.

pub mod coordinator;
pub mod handle;
pub mod notice;

use crate::constants::search::{DEFAULT_RADIUS, MAX_RADIUS, MIN_RADIUS, UNIT};
use crate::error::{Error, Result};
use crate::geo::LocationMode;
use std::future::Future;
use tokio_util::sync::CancellationToken;

pub use coordinator::{Outcome, RequestCoordinator};
pub use handle::{ActiveRequests, Flow, RequestHandle};
pub use notice::Notice;

/// Run `fut` unless or until `cancel` fires
///
/// An already-cancelled token never polls `fut`.
pub async fn cancellable<F, T>(cancel: &CancellationToken, fut: F) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    if cancel.is_cancelled() {
        return Err(Error::Cancelled);
    }

    tokio::select! {
        biased;
        _ = cancel.cancelled() => Err(Error::Cancelled),
        result = fut => result,
    }
}

/// Normalize the raw radius field
///
/// Empty or non-numeric input falls back to 10; everything else is clamped
/// to [1, 200] and rounded to whole miles. A literal too large for `f64`
/// clamps like any other large value.
pub fn normalize_radius(input: &str) -> u32 {
    let input = input.trim();
    if input.is_empty() {
        return DEFAULT_RADIUS;
    }

    // "inf" and "nan" spellings are words, not numbers
    if input.chars().any(|c| c.is_ascii_alphabetic() && !c.eq_ignore_ascii_case(&'e')) {
        return DEFAULT_RADIUS;
    }

    match input.parse::<f64>() {
        Ok(value) if !value.is_nan() => {
            value.clamp(MIN_RADIUS as f64, MAX_RADIUS as f64).round() as u32
        }
        _ => DEFAULT_RADIUS,
    }
}

/// What the user asked for, before any lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchParams {
    pub keyword: String,
    pub location: LocationMode,
    /// Raw radius input, normalized when the search starts
    pub radius: String,
    pub segment_id: Option<String>,
}

impl SearchParams {
    pub fn new(keyword: impl Into<String>, location: LocationMode) -> Self {
        Self {
            keyword: keyword.into(),
            location,
            radius: String::new(),
            segment_id: None,
        }
    }

    pub fn with_radius(mut self, radius: impl Into<String>) -> Self {
        self.radius = radius.into();
        self
    }

    pub fn with_segment(mut self, segment_id: Option<String>) -> Self {
        self.segment_id = segment_id;
        self
    }
}

/// A fully resolved search, built fresh for each attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub keyword: String,
    pub geo_point: String,
    pub radius: u32,
    pub unit: &'static str,
    pub segment_id: Option<String>,
}

impl SearchQuery {
    pub fn new(params: &SearchParams, geo_point: String) -> Self {
        let segment_id = params
            .segment_id
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string);

        Self {
            keyword: params.keyword.trim().to_string(),
            geo_point,
            radius: normalize_radius(&params.radius),
            unit: UNIT,
            segment_id,
        }
    }

    /// Encoded query string (without the leading `?`)
    pub fn to_query_string(&self) -> String {
        let mut query = format!(
            "keyword={}&geoPoint={}&radius={}&unit={}",
            urlencoding::encode(&self.keyword),
            urlencoding::encode(&self.geo_point),
            self.radius,
            self.unit
        );

        if let Some(segment_id) = &self.segment_id {
            query.push_str(&format!("&segmentId={}", urlencoding::encode(segment_id)));
        }

        query
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_normalize_radius() {
        assert_eq!(normalize_radius(""), 10);
        assert_eq!(normalize_radius("   "), 10);
        assert_eq!(normalize_radius("0"), 1);
        assert_eq!(normalize_radius("-20"), 1);
        assert_eq!(normalize_radius("500"), 200);
        assert_eq!(normalize_radius("abc"), 10);
        assert_eq!(normalize_radius("25"), 25);
        assert_eq!(normalize_radius(" 42 "), 42);
        assert_eq!(normalize_radius("12.6"), 13);
        assert_eq!(normalize_radius("inf"), 10);
        assert_eq!(normalize_radius("NaN"), 10);
    }

    #[test]
    fn test_normalize_radius_overflowing_literal_clamps() {
        assert_eq!(normalize_radius("1e400"), 200);
        assert_eq!(normalize_radius("-1e400"), 1);
        assert_eq!(normalize_radius("2.5E1"), 25);
    }

    #[test]
    fn test_query_string() {
        let params = SearchParams::new(" Taylor Swift ", LocationMode::AutoDetect)
            .with_radius("15")
            .with_segment(Some("KZFzniwnSyZfZ7v7nJ".to_string()));
        let query = SearchQuery::new(&params, "9q5ctr1".to_string());

        assert_eq!(
            query.to_query_string(),
            "keyword=Taylor%20Swift&geoPoint=9q5ctr1&radius=15&unit=miles&segmentId=KZFzniwnSyZfZ7v7nJ"
        );
    }

    #[test]
    fn test_query_drops_blank_segment() {
        let params = SearchParams::new("", LocationMode::AutoDetect).with_segment(Some(String::new()));
        let query = SearchQuery::new(&params, "dr5regw".to_string());

        assert_eq!(query.segment_id, None);
        assert_eq!(query.radius, 10);
        assert_eq!(
            query.to_query_string(),
            "keyword=&geoPoint=dr5regw&radius=10&unit=miles"
        );
    }

    #[tokio::test]
    async fn test_cancellable_passes_result_through() {
        let token = CancellationToken::new();
        let value = cancellable(&token, async { Ok(7) }).await.unwrap();
        assert_eq!(value, 7);
    }

    #[tokio::test]
    async fn test_cancellable_aborts_pending_work() {
        let token = CancellationToken::new();
        let canceller = token.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(10)).await;
            canceller.cancel();
        });

        let result: Result<()> = cancellable(&token, async {
            tokio::time::sleep(Duration::from_secs(30)).await;
            Ok(())
        })
        .await;
        assert!(matches!(result, Err(Error::Cancelled)));
    }
}
