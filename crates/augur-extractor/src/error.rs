//! Error types for the Extractor
//!
//! None of these reach callers of [`crate::EntityExtractor::extract`]; they
//! select the fallback path and are logged.

use thiserror::Error;

/// Errors that can occur during entity extraction
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// LLM provider error
    #[error("LLM error: {0}")]
    Llm(String),

    /// Extraction timeout
    #[error("Extraction timeout")]
    Timeout,

    /// The model answered with nothing
    #[error("Empty response from LLM")]
    EmptyResponse,

    /// Response parsed but lacks required content
    #[error("Invalid entity format: {0}")]
    InvalidFormat(String),

    /// JSON parsing error
    #[error("JSON parse error: {0}")]
    JsonParse(String),
}

impl From<serde_json::Error> for ExtractorError {
    fn from(e: serde_json::Error) -> Self {
        ExtractorError::JsonParse(e.to_string())
    }
}
