//! Augur Entity Extractor
//!
//! Turns a raw market claim into subjects, keywords and search queries.
//!
//! # Architecture
//!
//! ```text
//! Claim → EntityExtractor → LLM (strict JSON) → EntitySet → evidence search
//!                         ↘ local tokenization fallback ↗
//! ```
//!
//! Extraction never fails: a timeout, model error, empty response or
//! malformed JSON routes to a deterministic fallback built from the claim's
//! own tokens, so the pipeline always has something to search for.
//!
//! # Example Usage
//!
//! ```no_run
//! use augur_domain::Claim;
//! use augur_extractor::{EntityExtractor, ExtractorConfig};
//! use augur_llm::MockProvider;
//!
//! # async fn example() {
//! let llm = MockProvider::new("not json");
//! let extractor = EntityExtractor::new(llm, ExtractorConfig::default());
//!
//! let entities = extractor.extract(&Claim::new("Bitcoin will reach $100,000")).await;
//! assert_eq!(entities.main_subject, "Bitcoin");
//! # }
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod extractor;
mod fallback;
mod parser;
mod prompt;

#[cfg(test)]
mod tests;

pub use config::ExtractorConfig;
pub use error::ExtractorError;
pub use extractor::EntityExtractor;
pub use fallback::local_extraction;
pub use parser::parse_entity_response;
