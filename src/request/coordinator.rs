//! Request coordinator
//!
//! Entry point for user actions. Each handler supersedes the previous
//! attempt of its flow, threads one cancellation token through every
//! suspending step, and only lets the flow's current attempt produce a
//! visible outcome.
//!
//! ```text
//! search:        begin(Search) -> resolve location -> geohash -> /search -> table
//! event detail:  begin(VenueDetail) -> /event -> detail card
//! venue detail:  begin(VenueDetail) -> /venue -> venue card
//! ```

use crate::constants::{geohash::DEFAULT_PRECISION, search::MAX_RESULTS};
use crate::error::{Error, Result};
use crate::events::{EventDetails, EventsApi, ResultTable, VenueDetails};
use crate::geo::{geohash, Geocoder, IpLocator, LocationResolver};
use crate::request::handle::{ActiveRequests, Flow, RequestHandle, Settlement};
use crate::request::{cancellable, Notice, SearchParams, SearchQuery};
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

/// Terminal state of one attempt, as seen by the presenter
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    /// Render this
    Completed(T),
    /// Show this banner instead
    Failed(Notice),
    /// Cancelled with no successor; show nothing
    Cancelled,
    /// A newer attempt owns the view; show nothing
    Superseded,
}

impl<T> Outcome<T> {
    pub fn is_completed(&self) -> bool {
        matches!(self, Outcome::Completed(_))
    }

    /// Whether the presenter should update the view at all
    pub fn is_visible(&self) -> bool {
        matches!(self, Outcome::Completed(_) | Outcome::Failed(_))
    }

    pub fn completed(self) -> Option<T> {
        match self {
            Outcome::Completed(value) => Some(value),
            _ => None,
        }
    }

    pub fn notice(&self) -> Option<Notice> {
        match self {
            Outcome::Failed(notice) => Some(*notice),
            _ => None,
        }
    }
}

/// Owns the active request per flow and runs the lookup chains
pub struct RequestCoordinator<I, G, A> {
    resolver: LocationResolver<I, G>,
    api: A,
    active: ActiveRequests,
    precision: usize,
    max_results: usize,
}

impl<I, G, A> RequestCoordinator<I, G, A>
where
    I: IpLocator,
    G: Geocoder,
    A: EventsApi,
{
    pub fn new(resolver: LocationResolver<I, G>, api: A) -> Self {
        Self {
            resolver,
            api,
            active: ActiveRequests::new(),
            precision: DEFAULT_PRECISION,
            max_results: MAX_RESULTS,
        }
    }

    /// Geohash precision used for search queries
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision.max(1);
        self
    }

    /// Number of result rows presented
    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    pub fn active(&self) -> &ActiveRequests {
        &self.active
    }

    /// Run a search, superseding any search still in flight
    ///
    /// An empty result set is reported as "no records found".
    pub async fn handle_search_requested(&self, params: &SearchParams) -> Outcome<ResultTable> {
        let handle = self.active.begin(Flow::Search);
        debug!(id = handle.id(), keyword = %params.keyword, "Search started");

        let result = self.run_search(params, handle.token()).await;

        match self.settle(&handle, result, |err| {
            Notice::classify(err).unwrap_or(Notice::NoRecords)
        }) {
            Outcome::Completed(table) if table.is_empty() => Outcome::Failed(Notice::NoRecords),
            outcome => outcome,
        }
    }

    /// Fetch the detail card for a selected result row
    ///
    /// Shares the venue-detail flow, so a pending venue fetch is cancelled.
    pub async fn handle_event_selected(&self, event_id: &str) -> Outcome<EventDetails> {
        let handle = self.active.begin(Flow::VenueDetail);
        debug!(id = handle.id(), event_id, "Event detail requested");

        let result = cancellable(handle.token(), self.api.event(event_id))
            .await
            .map(|event| EventDetails::from_event(&event));

        self.settle(&handle, result, |_| Notice::EventLoadFailed)
    }

    /// Fetch the venue card for `venue_name`
    pub async fn handle_venue_requested(&self, venue_name: &str) -> Outcome<VenueDetails> {
        let handle = self.active.begin(Flow::VenueDetail);
        debug!(id = handle.id(), venue = venue_name, "Venue detail requested");

        let result = cancellable(handle.token(), self.api.venue(venue_name))
            .await
            .map(|response| {
                VenueDetails::from_venue(&response.first_venue().cloned().unwrap_or_default())
            });

        self.settle(&handle, result, |_| Notice::VenueLoadFailed)
    }

    /// Cancel everything in flight and return both flows to idle
    pub fn reset(&self) {
        let search = self.active.cancel(Flow::Search);
        let venue = self.active.cancel(Flow::VenueDetail);
        debug!(search, venue, "Reset");
    }

    async fn run_search(&self, params: &SearchParams, cancel: &CancellationToken) -> Result<ResultTable> {
        let coord = self.resolver.resolve(&params.location, cancel).await?;
        let geo_point = geohash::encode_coordinate(coord, self.precision);
        let query = SearchQuery::new(params, geo_point);
        debug!(geo_point = %query.geo_point, radius = query.radius, "Resolved search query");

        let response = cancellable(cancel, self.api.search(&query)).await?;
        Ok(ResultTable::from_response(&response, self.max_results))
    }

    /// Turn a finished attempt into an outcome
    ///
    /// The active slot is released only by the attempt that owns it; a late
    /// result from a superseded attempt is dropped whatever it contains.
    fn settle<T>(
        &self,
        handle: &RequestHandle,
        result: Result<T>,
        notice_for: impl FnOnce(&Error) -> Notice,
    ) -> Outcome<T> {
        match self.active.finish(handle) {
            Settlement::Superseded => {
                debug!(flow = %handle.flow(), id = handle.id(), "Discarding superseded result");
                Outcome::Superseded
            }
            Settlement::Cancelled => {
                debug!(flow = %handle.flow(), id = handle.id(), "Discarding cancelled result");
                Outcome::Cancelled
            }
            Settlement::Current => match result {
                Ok(value) => Outcome::Completed(value),
                Err(err) if err.is_cancelled() => Outcome::Cancelled,
                Err(err) => {
                    warn!(flow = %handle.flow(), id = handle.id(), error = %err, "Request failed");
                    Outcome::Failed(notice_for(&err))
                }
            },
        }
    }
}
