//! Gemini API client implementation
//!
//! Implements the GenerativeBackend trait against the generateContent
//! endpoint with schema-constrained JSON output. One request per call, no
//! retries - the planner treats a generative call as a single shot.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

use super::{GenerativeBackend, LlmError};
use crate::config::LlmConfig;

/// Fixed sampling temperature - balances itinerary creativity against
/// structural reliability of the JSON output
pub const GENERATION_TEMPERATURE: f64 = 0.7;

/// Gemini generateContent client
pub struct GeminiClient {
    model: String,
    base_url: String,
    http: Client,
}

impl GeminiClient {
    /// Create a new client from configuration
    ///
    /// The credential is not held here; it is supplied per call so the
    /// caller can preflight it before any request is built.
    pub fn from_config(config: &LlmConfig) -> Result<Self, LlmError> {
        debug!(model = %config.model, base_url = %config.base_url, "from_config: called");
        let timeout = Duration::from_millis(config.timeout_ms);

        let http = Client::builder().timeout(timeout).build().map_err(LlmError::Network)?;

        Ok(Self {
            model: config.model.clone(),
            base_url: config.base_url.clone(),
            http,
        })
    }

    /// Build the request body for the generateContent API
    fn build_request_body(&self, prompt: &str, schema: &Value) -> Value {
        debug!(%self.model, prompt_len = prompt.len(), "build_request_body: called");
        serde_json::json!({
            "contents": [{
                "role": "user",
                "parts": [{ "text": prompt }]
            }],
            "generationConfig": {
                "temperature": GENERATION_TEMPERATURE,
                "responseMimeType": "application/json",
                "responseSchema": schema,
            }
        })
    }

    /// Pull the reply text out of a generateContent response
    ///
    /// A response with no usable text (empty candidates, safety block) is
    /// an invalid response carrying whatever reason the API gave.
    fn extract_text(&self, api_response: GenerateContentResponse) -> Result<String, LlmError> {
        debug!("extract_text: called");

        if let Some(feedback) = &api_response.prompt_feedback
            && let Some(reason) = &feedback.block_reason
        {
            debug!(%reason, "extract_text: prompt blocked");
            return Err(LlmError::InvalidResponse(format!("Prompt blocked: {}", reason)));
        }

        let candidate = api_response
            .candidates
            .into_iter()
            .flatten()
            .next()
            .ok_or_else(|| LlmError::InvalidResponse("No candidates in response".to_string()))?;

        let text: String = candidate
            .content
            .and_then(|c| c.parts)
            .into_iter()
            .flatten()
            .filter_map(|p| p.text)
            .collect();

        if text.is_empty() {
            let reason = candidate.finish_reason.unwrap_or_else(|| "unknown".to_string());
            debug!(%reason, "extract_text: empty candidate text");
            return Err(LlmError::InvalidResponse(format!(
                "Empty response (finish reason: {})",
                reason
            )));
        }

        debug!(text_len = text.len(), "extract_text: success");
        Ok(text)
    }

    /// Classify a non-success HTTP response
    ///
    /// An explicit credential rejection (401/403, or the 400 INVALID_ARGUMENT
    /// the API returns for a bad key) becomes Auth; everything else keeps its
    /// status and message.
    fn classify_error(&self, status: u16, body: &str) -> LlmError {
        debug!(status, "classify_error: called");

        let api_error: Option<ApiErrorBody> = serde_json::from_str(body).ok();
        let (message, error_status) = match &api_error {
            Some(e) => (e.error.message.clone(), e.error.status.clone()),
            None => (body.to_string(), None),
        };

        let invalid_key =
            status == 400 && error_status.as_deref() == Some("INVALID_ARGUMENT") && message.contains("API key");

        if status == 401 || status == 403 || invalid_key {
            debug!(status, "classify_error: credential rejected");
            return LlmError::Auth(message);
        }

        LlmError::ApiError { status, message }
    }
}

#[async_trait]
impl GenerativeBackend for GeminiClient {
    async fn generate_json(&self, api_key: &str, prompt: &str, schema: &Value) -> Result<String, LlmError> {
        debug!(%self.model, "generate_json: called");
        let url = format!("{}/v1beta/models/{}:generateContent", self.base_url, self.model);
        let body = self.build_request_body(prompt, schema);

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", api_key)
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(LlmError::Network)?;

        let status = response.status().as_u16();
        if !response.status().is_success() {
            debug!(status, "generate_json: API error");
            let text = response.text().await.unwrap_or_default();
            return Err(self.classify_error(status, &text));
        }

        debug!("generate_json: success");
        let api_response: GenerateContentResponse = response.json().await?;
        self.extract_text(api_response)
    }
}

// Gemini API response types

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<CandidateContent>,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    parts: Option<Vec<CandidatePart>>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
    status: Option<String>,
}
