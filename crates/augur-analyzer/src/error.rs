//! Error types for the Analyzer

use thiserror::Error;

/// Errors raised inside the analysis pipeline
///
/// These are converted into degraded results at the component boundary.
#[derive(Error, Debug)]
pub enum AnalyzerError {
    /// LLM provider error
    #[error("LLM error: {0}")]
    Llm(String),

    /// Analysis timeout
    #[error("Analysis timed out after {0}s")]
    Timeout(u64),

    /// No recognizable structure in the model response
    #[error("Unparsable response: {0}")]
    Unparsable(String),
}
