//! Generative backend boundary
//!
//! The trait, the Gemini implementation, and the error taxonomy for the one
//! outbound call the planner makes.

mod error;
mod gemini;

pub mod client;

pub use client::GenerativeBackend;
pub use error::LlmError;
pub use gemini::{GENERATION_TEMPERATURE, GeminiClient};
