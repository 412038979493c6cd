//! Generation client - the sole boundary between trip parameters and the
//! generative backend
//!
//! One call = one prompt, one schema-constrained request, one strict parse.
//! Failures are classified, never recovered from here: retrying a
//! non-deterministic generative call changes cost and latency tradeoffs the
//! caller must own.

use thiserror::Error;
use tracing::{debug, warn};

use crate::config::PLACEHOLDER_API_KEY;
use crate::itinerary::{TripItinerary, response_schema};
use crate::llm::{GenerativeBackend, LlmError};
use crate::prompt::{TripRequest, build_prompt};

/// Classified outcome of a generation attempt
#[derive(Debug, Error)]
pub enum PlannerError {
    /// Credential missing or still the placeholder; detected before any
    /// network call, never sent to the backend
    #[error("Planner is not configured: {0}")]
    Configuration(String),

    /// The backend explicitly rejected the credential
    #[error("Credential rejected: {0}")]
    Auth(String),

    /// The backend replied, but not with schema-conformant JSON
    #[error("Response validation failed: {0}")]
    Validation(String),

    /// Network or backend-side failure before any reply could be validated
    #[error("Backend request failed: {0}")]
    Transport(String),
}

impl PlannerError {
    /// Check if the backend explicitly rejected the credential
    pub fn is_auth(&self) -> bool {
        matches!(self, PlannerError::Auth(_))
    }

    /// The message a caller should put in front of a user
    ///
    /// Configuration and Auth get specific guidance; Validation and
    /// Transport collapse into one generic failure with the detail appended
    /// for diagnosis.
    pub fn user_message(&self) -> String {
        match self {
            PlannerError::Configuration(detail) => {
                format!("Please provide an API key before planning a trip. ({})", detail)
            }
            PlannerError::Auth(_) => "Invalid API key provided. Please check your Gemini API key.".to_string(),
            PlannerError::Validation(detail) | PlannerError::Transport(detail) => {
                format!("Could not generate an itinerary: {}", detail)
            }
        }
    }
}

impl From<LlmError> for PlannerError {
    fn from(err: LlmError) -> Self {
        match err {
            LlmError::Auth(message) => PlannerError::Auth(message),
            LlmError::InvalidResponse(detail) => PlannerError::Validation(detail),
            LlmError::Json(e) => PlannerError::Validation(e.to_string()),
            LlmError::ApiError { status, message } => {
                PlannerError::Transport(format!("API error {}: {}", status, message))
            }
            LlmError::Network(e) => PlannerError::Transport(e.to_string()),
        }
    }
}

/// Generate one itinerary through the given backend
///
/// Preflights the credential, builds the prompt, issues exactly one
/// schema-constrained request, and strictly parses the reply. Out-of-range
/// day counts pass through untouched; the backend and the schema are the
/// final arbiters. Nothing is retried and nothing is swallowed.
pub async fn generate_itinerary(
    backend: &dyn GenerativeBackend,
    credential: &str,
    request: &TripRequest,
) -> Result<TripItinerary, PlannerError> {
    debug!(destination = %request.destination, days = request.days, "generate_itinerary: called");

    if credential.is_empty() || credential == PLACEHOLDER_API_KEY {
        warn!("generate_itinerary: credential missing or placeholder, skipping backend call");
        return Err(PlannerError::Configuration(
            "API key is missing or still the placeholder".to_string(),
        ));
    }

    let prompt = build_prompt(request);
    let schema = response_schema();

    let raw = backend.generate_json(credential, &prompt, &schema).await?;

    let trip = TripItinerary::from_json(&raw).map_err(|e| {
        warn!(error = %e, "generate_itinerary: reply failed schema validation");
        PlannerError::Validation(format!("Failed to parse backend response: {}", e))
    })?;

    debug!(
        destination = %trip.destination,
        days = trip.itinerary.len(),
        activities = trip.activity_count(),
        "generate_itinerary: success"
    );
    Ok(trip)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::client::mock::MockBackend;
    use crate::prompt::BudgetTier;

    fn paris_request() -> TripRequest {
        TripRequest {
            destination: "Paris, France".to_string(),
            days: 2,
            budget: BudgetTier::Budget,
            interests: vec!["History".to_string(), "Food".to_string()],
            notes: String::new(),
        }
    }

    fn two_day_reply() -> String {
        serde_json::json!({
            "destination": "Paris, France",
            "total_estimated_cost": "€180",
            "budget_tips": [
                "Walk between sights on the Right Bank",
                "Museums are free for EU students under 26",
                "Grab baguette sandwiches instead of café lunches"
            ],
            "itinerary": [
                {
                    "day": 1,
                    "theme": "Historic Paris",
                    "activities": [{
                        "name": "Notre-Dame Cathedral",
                        "time": "Morning 09:00 AM",
                        "description": "Start at the medieval heart of the city",
                        "cost_estimate": "Free",
                        "latitude": 48.8530,
                        "longitude": 2.3499
                    }]
                },
                {
                    "day": 2,
                    "theme": "Food Crawl",
                    "activities": [{
                        "name": "Marché des Enfants Rouges",
                        "time": "Morning 10:00 AM",
                        "description": "Oldest covered market in Paris",
                        "cost_estimate": "€10",
                        "latitude": 48.8627,
                        "longitude": 2.3615
                    }]
                }
            ]
        })
        .to_string()
    }

    // Scenario A: valid request against a well-behaved backend
    #[tokio::test]
    async fn test_generate_itinerary_success_two_days() {
        let backend = MockBackend::with_text(two_day_reply());

        let trip = generate_itinerary(&backend, "valid-key", &paris_request())
            .await
            .unwrap();

        assert_eq!(trip.itinerary.len(), 2);
        assert_eq!(trip.destination, "Paris, France");
        assert_eq!(backend.call_count(), 1);
    }

    // Scenario B: empty credential short-circuits before any backend call
    #[tokio::test]
    async fn test_empty_credential_is_configuration_error_with_zero_calls() {
        let backend = MockBackend::with_text(two_day_reply());

        let err = generate_itinerary(&backend, "", &paris_request()).await.unwrap_err();

        assert!(matches!(err, PlannerError::Configuration(_)));
        assert_eq!(backend.call_count(), 0);
    }

    #[tokio::test]
    async fn test_placeholder_credential_is_configuration_error() {
        let backend = MockBackend::with_text(two_day_reply());

        let err = generate_itinerary(&backend, PLACEHOLDER_API_KEY, &paris_request())
            .await
            .unwrap_err();

        assert!(matches!(err, PlannerError::Configuration(_)));
        assert_eq!(backend.call_count(), 0);
    }

    // Scenario C: non-JSON reply becomes a classified validation error
    #[tokio::test]
    async fn test_non_json_reply_is_validation_error() {
        let backend = MockBackend::with_text("not json");

        let err = generate_itinerary(&backend, "valid-key", &paris_request())
            .await
            .unwrap_err();

        match err {
            PlannerError::Validation(detail) => {
                assert!(detail.contains("Failed to parse backend response"));
            }
            other => panic!("expected Validation, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_schema_violation_is_validation_error() {
        // Valid JSON, but budget_tips is missing
        let backend = MockBackend::with_text(
            serde_json::json!({
                "destination": "Paris",
                "total_estimated_cost": "€100",
                "itinerary": []
            })
            .to_string(),
        );

        let err = generate_itinerary(&backend, "valid-key", &paris_request())
            .await
            .unwrap_err();

        assert!(matches!(err, PlannerError::Validation(_)));
    }

    #[tokio::test]
    async fn test_rejected_credential_is_auth_error() {
        let backend = MockBackend::rejecting_credential();

        let err = generate_itinerary(&backend, "bad-key", &paris_request())
            .await
            .unwrap_err();

        assert!(err.is_auth());
        assert_eq!(
            err.user_message(),
            "Invalid API key provided. Please check your Gemini API key."
        );
    }

    #[tokio::test]
    async fn test_backend_failure_is_transport_error_single_attempt() {
        let backend = MockBackend::new(vec![Err(LlmError::ApiError {
            status: 503,
            message: "overloaded".to_string(),
        })]);

        let err = generate_itinerary(&backend, "valid-key", &paris_request())
            .await
            .unwrap_err();

        assert!(matches!(err, PlannerError::Transport(_)));
        // No retries: exactly one outbound attempt
        assert_eq!(backend.call_count(), 1);
    }

    #[test]
    fn test_user_message_generic_for_validation_and_transport() {
        let validation = PlannerError::Validation("bad field".to_string());
        let transport = PlannerError::Transport("connection reset".to_string());

        assert!(validation.user_message().starts_with("Could not generate an itinerary"));
        assert!(transport.user_message().starts_with("Could not generate an itinerary"));
        assert!(validation.user_message().contains("bad field"));
    }
}
