//! Prompt construction for itinerary generation
//!
//! Pure, deterministic string building from trip parameters. No side
//! effects, no network - the Generation Client owns everything beyond
//! producing the instruction text.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Placeholder interests line used when the traveler picked none
pub const DEFAULT_INTERESTS: &str = "General sightseeing";

/// Budget tier for the trip (closed set, mirrors the UI selector)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum BudgetTier {
    /// Free activities and street food only
    UltraBudget,
    /// Cheap but allows a few paid highlights
    Budget,
    /// Comfortable without being extravagant
    Moderate,
}

impl std::fmt::Display for BudgetTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UltraBudget => write!(f, "Ultra-budget"),
            Self::Budget => write!(f, "Budget"),
            Self::Moderate => write!(f, "Moderate"),
        }
    }
}

/// Everything needed to ask for one itinerary
#[derive(Debug, Clone)]
pub struct TripRequest {
    /// Destination city/country (non-empty)
    pub destination: String,

    /// Trip length in days (>= 1; any UI-level cap is the caller's business)
    pub days: u32,

    /// Budget tier
    pub budget: BudgetTier,

    /// Interest tags, may be empty
    pub interests: Vec<String>,

    /// Free-text notes, may be empty
    pub notes: String,
}

/// Build the generation instruction for a trip request
///
/// Embeds the destination, the exact day count, and the budget tier
/// verbatim, and directs the backend to bias toward low-cost options, emit
/// one daily plan per day, attach realistic coordinates to every activity,
/// and keep each day geographically clustered. Empty interests become the
/// [`DEFAULT_INTERESTS`] placeholder; empty notes are omitted entirely.
pub fn build_prompt(request: &TripRequest) -> String {
    debug!(
        destination = %request.destination,
        days = request.days,
        budget = %request.budget,
        interest_count = request.interests.len(),
        "build_prompt: called"
    );

    let interests = if request.interests.is_empty() {
        DEFAULT_INTERESTS.to_string()
    } else {
        request.interests.join(", ")
    };

    let notes = if request.notes.is_empty() {
        String::new()
    } else {
        format!("\nAdditional Notes: {}", request.notes)
    };

    format!(
        "You are an expert travel planner specializing in budget travel for college students.\n\
         Create a detailed {days}-day itinerary for {destination}.\n\
         \n\
         Constraints & Preferences:\n\
         - Budget Level: {budget}. Prioritize free activities, student discounts, street food, and cheap transport.\n\
         - Interests: {interests}.{notes}\n\
         \n\
         For every activity, you must provide realistic latitude and longitude coordinates.\n\
         Ensure locations for a single day are geographically close to minimize transit time and costs.\n\
         Respond with exactly one JSON document matching the provided schema - no prose, no markdown fencing.",
        days = request.days,
        destination = request.destination,
        budget = request.budget,
        interests = interests,
        notes = notes,
    )
}
