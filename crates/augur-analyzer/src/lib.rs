//! Augur Evidence Analyzer
//!
//! Asks a language model to fact-check a claim against collected evidence
//! and turns its answer into a typed [`AnalysisResult`].
//!
//! # Architecture
//!
//! ```text
//! Claim + Evidence → AnalysisPromptBuilder → LLM → raw text → ResponseParser → AnalysisResult
//! ```
//!
//! # Failure Model
//!
//! The analyzer never returns an error to its caller:
//!
//! - no evidence: canonical INCONCLUSIVE, confidence 0, no model call
//! - model error or timeout: INCONCLUSIVE with a technical-error reasoning
//! - unparsable response: INCONCLUSIVE with the fixed parse-failure reasoning
//!
//! Every path records the wall-clock duration in `processing_time_ms`.
//!
//! [`AnalysisResult`]: augur_domain::AnalysisResult

#![warn(missing_docs)]

mod analyzer;
mod config;
mod error;
mod parser;
mod prompt;


pub use analyzer::EvidenceAnalyzer;
pub use config::{AnalyzerConfig, OutputFormat};
pub use error::AnalyzerError;
pub use parser::{parse_analysis_response, try_parse_analysis, SOURCE_CONFIDENCE_FACTOR};
pub use prompt::AnalysisPromptBuilder;
