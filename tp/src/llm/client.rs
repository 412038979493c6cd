//! GenerativeBackend trait definition

use async_trait::async_trait;
use serde_json::Value;
#[allow(unused_imports)]
use tracing::debug;

use super::LlmError;

/// Stateless structured-output backend - each call is independent
///
/// The sole abstraction between the planner and the generative service.
/// One call carries one prompt plus one response schema and yields the raw
/// text the backend produced; no conversation state is kept between calls
/// and no retries happen at this layer. Retry policy, if any, belongs to
/// the caller.
#[async_trait]
pub trait GenerativeBackend: Send + Sync {
    /// Issue a single schema-constrained generation request
    ///
    /// The backend is configured with `api_key` for this call only. It is
    /// instructed to return exactly one JSON document conforming to
    /// `schema`. The raw reply text is returned unparsed; validating it
    /// against the schema is the caller's job.
    async fn generate_json(&self, api_key: &str, prompt: &str, schema: &Value) -> Result<String, LlmError>;
}
