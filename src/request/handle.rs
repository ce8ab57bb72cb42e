//! Request handles and per-flow ownership
//!
//! A [`RequestHandle`] is issued for exactly one attempt of one flow and is
//! never reused. [`ActiveRequests`] remembers which handle is current for
//! each flow; starting a new attempt cancels and forgets the previous one.

use std::fmt;
use std::sync::{Mutex, MutexGuard, PoisonError};
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Independent request lifecycles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flow {
    /// Location lookup followed by the event search
    Search,
    /// Event detail and venue detail fetches
    VenueDetail,
}

impl fmt::Display for Flow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Flow::Search => write!(f, "search"),
            Flow::VenueDetail => write!(f, "venue-detail"),
        }
    }
}

/// Cancellation-capable handle for one outstanding attempt
#[derive(Debug)]
pub struct RequestHandle {
    id: u64,
    flow: Flow,
    token: CancellationToken,
}

impl RequestHandle {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn flow(&self) -> Flow {
        self.flow
    }

    /// Token to thread through every step of this attempt
    pub fn token(&self) -> &CancellationToken {
        &self.token
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }
}

/// How an attempt relates to its flow when it finishes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settlement {
    /// Still the flow's active attempt; its result may be shown
    Current,
    /// A newer attempt for the same flow has started since
    Superseded,
    /// Cancelled without a successor (e.g. a reset)
    Cancelled,
}

#[derive(Debug)]
struct Active {
    id: u64,
    token: CancellationToken,
}

#[derive(Debug, Default)]
struct Slot {
    latest: u64,
    active: Option<Active>,
}

#[derive(Debug, Default)]
struct Slots {
    next_id: u64,
    search: Slot,
    venue_detail: Slot,
}

impl Slots {
    fn slot(&mut self, flow: Flow) -> &mut Slot {
        match flow {
            Flow::Search => &mut self.search,
            Flow::VenueDetail => &mut self.venue_detail,
        }
    }
}

/// At most one live attempt per flow
///
/// All state sits behind one short-lived lock that is never held across an
/// await point.
#[derive(Debug, Default)]
pub struct ActiveRequests {
    slots: Mutex<Slots>,
}

impl ActiveRequests {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Slots> {
        self.slots.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Start a new attempt for `flow`, cancelling any attempt still live
    pub fn begin(&self, flow: Flow) -> RequestHandle {
        let mut slots = self.lock();
        slots.next_id += 1;
        let id = slots.next_id;

        let slot = slots.slot(flow);
        if let Some(previous) = slot.active.take() {
            debug!(%flow, superseded = previous.id, by = id, "Cancelling in-flight request");
            previous.token.cancel();
        }

        let token = CancellationToken::new();
        slot.latest = id;
        slot.active = Some(Active {
            id,
            token: token.clone(),
        });

        RequestHandle { id, flow, token }
    }

    /// Cancel the live attempt for `flow`, if any
    ///
    /// Returns true if something was cancelled.
    pub fn cancel(&self, flow: Flow) -> bool {
        let mut slots = self.lock();
        match slots.slot(flow).active.take() {
            Some(active) => {
                debug!(%flow, id = active.id, "Cancelling request");
                active.token.cancel();
                true
            }
            None => false,
        }
    }

    /// Whether `handle` is still the active attempt of its flow
    pub fn is_current(&self, handle: &RequestHandle) -> bool {
        let mut slots = self.lock();
        slots
            .slot(handle.flow)
            .active
            .as_ref()
            .is_some_and(|a| a.id == handle.id)
    }

    /// Whether `flow` has no live attempt
    pub fn is_idle(&self, flow: Flow) -> bool {
        self.lock().slot(flow).active.is_none()
    }

    /// Mark `handle` as finished
    ///
    /// Only the current attempt clears the slot; a superseded attempt leaves
    /// its successor untouched.
    pub fn finish(&self, handle: &RequestHandle) -> Settlement {
        let mut slots = self.lock();
        let slot = slots.slot(handle.flow);

        if slot.active.as_ref().is_some_and(|a| a.id == handle.id) {
            slot.active = None;
            Settlement::Current
        } else if slot.latest > handle.id {
            Settlement::Superseded
        } else {
            Settlement::Cancelled
        }
    }
}
