//! Session-scoped result slot
//!
//! Holds the last successful itinerary or the last failure message, never
//! both. A new attempt clears the slot before the request goes out (the
//! previous itinerary dies whether or not the new attempt succeeds), and the
//! outcome overwrites the whole slot in one assignment - no stale/new mix is
//! representable.

use tracing::debug;

use crate::itinerary::TripItinerary;
use crate::planner::PlannerError;

/// What the session currently holds
#[derive(Debug, Clone, Default, PartialEq)]
pub enum SessionState {
    /// No attempt yet, or an attempt is in flight
    #[default]
    Empty,
    /// Last attempt succeeded
    Ready(TripItinerary),
    /// Last attempt failed, with the caller-facing message
    Failed(String),
}

/// Caller-owned single slot for the current planning result
#[derive(Debug, Clone, Default)]
pub struct PlannerSession {
    state: SessionState,
}

impl PlannerSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear the slot because a new generation request is being issued
    pub fn begin_attempt(&mut self) {
        debug!("begin_attempt: clearing session slot");
        self.state = SessionState::Empty;
    }

    /// Record the outcome of the attempt, replacing the slot wholesale
    pub fn finish(&mut self, outcome: Result<TripItinerary, PlannerError>) {
        self.state = match outcome {
            Ok(trip) => {
                debug!(destination = %trip.destination, "finish: storing itinerary");
                SessionState::Ready(trip)
            }
            Err(e) => {
                debug!(error = %e, "finish: storing failure");
                SessionState::Failed(e.user_message())
            }
        };
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// The current itinerary, if the last attempt succeeded
    pub fn itinerary(&self) -> Option<&TripItinerary> {
        match &self.state {
            SessionState::Ready(trip) => Some(trip),
            _ => None,
        }
    }

    /// The current failure message, if the last attempt failed
    pub fn error(&self) -> Option<&str> {
        match &self.state {
            SessionState::Failed(message) => Some(message),
            _ => None,
        }
    }
}
