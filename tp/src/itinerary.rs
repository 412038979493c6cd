//! Itinerary schema definitions
//!
//! The canonical shape of a generated trip: Activity -> DailyPlan ->
//! TripItinerary. These types serve double duty: `response_schema()` tells
//! the backend exactly what JSON to emit, and serde deserialization is the
//! strict consumer-side validation of whatever comes back. A missing field,
//! a string where a number belongs, or a scalar where a sequence belongs
//! rejects the whole payload - there is no partial-record acceptance.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// One stop in a day: a place, sight, or restaurant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    /// Name of the activity, place, or restaurant
    pub name: String,

    /// Suggested time label, e.g. "Morning 09:00 AM" (free-form, not a clock time)
    pub time: String,

    /// Short description of the stop
    pub description: String,

    /// Estimated cost, currency-tagged free text or the literal "Free"
    pub cost_estimate: String,

    /// Latitude of the location, expected in [-90, 90]
    pub latitude: f64,

    /// Longitude of the location, expected in [-180, 180]
    pub longitude: f64,
}

/// One day of the trip: a theme and an ordered visiting sequence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyPlan {
    /// Day number (the backend's numbering is accepted as-is)
    pub day: u32,

    /// Theme for the day, e.g. "Historical Highlights"
    pub theme: String,

    /// Activities in visiting order
    pub activities: Vec<Activity>,
}

/// The full multi-day plan returned by one generation call
///
/// Immutable once parsed; a new generation attempt replaces it wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripItinerary {
    /// The destination city/country
    pub destination: String,

    /// Rough total estimated cost for the trip (free text)
    pub total_estimated_cost: String,

    /// Specific budget tips for this destination (3-5 expected)
    pub budget_tips: Vec<String>,

    /// Day by day plan, in day order
    pub itinerary: Vec<DailyPlan>,
}

impl TripItinerary {
    /// Strictly parse a raw backend reply into a typed itinerary
    ///
    /// Fails fast on anything that does not satisfy the schema; the caller
    /// classifies the error, nothing is coerced or defaulted here.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        debug!(raw_len = raw.len(), "from_json: called");
        serde_json::from_str(raw)
    }

    /// Total number of activities across every day
    pub fn activity_count(&self) -> usize {
        self.itinerary.iter().map(|d| d.activities.len()).sum()
    }
}

/// The machine-checkable response schema sent with every generation request
///
/// Gemini's `responseSchema` dialect (an OpenAPI subset with uppercase type
/// names). Field descriptions double as generation guidance, so they stay
/// close to the doc comments on the structs above.
pub fn response_schema() -> serde_json::Value {
    debug!("response_schema: called");
    serde_json::json!({
        "type": "OBJECT",
        "properties": {
            "destination": {
                "type": "STRING",
                "description": "The destination city/country"
            },
            "total_estimated_cost": {
                "type": "STRING",
                "description": "Rough total estimated cost for the trip"
            },
            "budget_tips": {
                "type": "ARRAY",
                "description": "List of 3-5 specific budget tips for this destination",
                "items": { "type": "STRING" }
            },
            "itinerary": {
                "type": "ARRAY",
                "description": "Day by day plan",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "day": { "type": "INTEGER", "description": "Day number" },
                        "theme": {
                            "type": "STRING",
                            "description": "Theme for the day, e.g. 'Historical Highlights'"
                        },
                        "activities": {
                            "type": "ARRAY",
                            "description": "List of activities for the day",
                            "items": {
                                "type": "OBJECT",
                                "properties": {
                                    "name": {
                                        "type": "STRING",
                                        "description": "Name of the activity, place, or restaurant"
                                    },
                                    "time": {
                                        "type": "STRING",
                                        "description": "Suggested time, e.g. 'Morning 09:00 AM'"
                                    },
                                    "description": {
                                        "type": "STRING",
                                        "description": "Short description appealing to a student"
                                    },
                                    "cost_estimate": {
                                        "type": "STRING",
                                        "description": "Estimated cost (or 'Free')"
                                    },
                                    "latitude": {
                                        "type": "NUMBER",
                                        "description": "Latitude coordinate of the location"
                                    },
                                    "longitude": {
                                        "type": "NUMBER",
                                        "description": "Longitude coordinate of the location"
                                    }
                                },
                                "required": [
                                    "name", "time", "description",
                                    "cost_estimate", "latitude", "longitude"
                                ]
                            }
                        }
                    },
                    "required": ["day", "theme", "activities"]
                }
            }
        },
        "required": ["destination", "total_estimated_cost", "budget_tips", "itinerary"]
    })
}
