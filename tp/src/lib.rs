//! TripPlanner - structured-output travel itinerary generation
//!
//! Turns a handful of trip parameters into a day-by-day itinerary with
//! geocoordinates by issuing one schema-constrained request to the Gemini
//! backend, then derives a map view and a textual daily breakdown from the
//! validated result.
//!
//! # Modules
//!
//! - [`itinerary`] - canonical itinerary shape and the response schema
//! - [`prompt`] - deterministic prompt construction
//! - [`llm`] - backend trait, Gemini implementation, transport errors
//! - [`planner`] - the one-shot generation client and failure taxonomy
//! - [`map`] - map view and daily breakdown derivation (pure)
//! - [`session`] - caller-owned single-slot result holder
//! - [`config`] - configuration types and loading
//! - [`cli`] - command-line interface

pub mod cli;
pub mod config;
pub mod itinerary;
pub mod llm;
pub mod map;
pub mod planner;
pub mod prompt;
pub mod session;

// Re-export commonly used types
pub use config::{Config, LlmConfig};
pub use itinerary::{Activity, DailyPlan, TripItinerary, response_schema};
pub use llm::{GeminiClient, GenerativeBackend, LlmError};
pub use map::{
    BoundingBox, DayEntry, DaySection, LatLng, MapView, Marker, color_for_day, compute_daily_breakdown,
    compute_map_view,
};
pub use planner::{PlannerError, generate_itinerary};
pub use prompt::{BudgetTier, TripRequest, build_prompt};
pub use session::{PlannerSession, SessionState};
