//! Trait definitions for external capabilities
//!
//! The engine depends only on these narrow contracts. Implementations live in
//! other crates (`augur-llm`) or are supplied by the host application.

use crate::EvidenceItem;

/// Language-model capability: prompt in, text out
///
/// Implemented by the infrastructure layer (augur-llm)
pub trait LlmProvider {
    /// Error type for LLM operations
    type Error;

    /// Generate text completion
    fn generate(&self, prompt: &str) -> Result<String, Self::Error>;

    /// Generate with structured output (if supported)
    ///
    /// Providers without a structured mode fall back to plain generation.
    fn generate_structured(&self, prompt: &str, _schema: &str) -> Result<String, Self::Error> {
        self.generate(prompt)
    }

    /// Name of the backing model, used in logs
    fn model_name(&self) -> &str {
        "llm"
    }
}

/// Evidence-collection capability: search queries in, evidence out
///
/// The crawl/search mechanism behind it is outside the engine.
pub trait EvidenceCollector {
    /// Error type for search operations
    type Error;

    /// Collect evidence items for the given queries
    fn search(&self, queries: &[String]) -> Result<Vec<EvidenceItem>, Self::Error>;
}
