//! Augur Resolution Engine
//!
//! Runs the whole resolution pipeline for one market claim:
//!
//! ```text
//! claim → EntityExtractor → search queries → EvidenceCollector → evidence
//!       → EvidenceAnalyzer → AnalysisResult → consensus → strategy
//!       → ResolutionAggregator → FinalVerdict
//! ```
//!
//! Model and collector failures never surface to the caller; they degrade
//! into INCONCLUSIVE analyses or empty evidence. Only configuration problems
//! are reported, when the engine is built.
//!
//! # Examples
//!
//! ```
//! use augur_domain::Claim;
//! use augur_engine::{EngineConfig, ResolutionEngine, ResolutionRequest, StaticCollector};
//! use augur_llm::MockProvider;
//!
//! let runtime = tokio::runtime::Runtime::new().unwrap();
//! let engine = ResolutionEngine::new(
//!     MockProvider::new("garbage"),
//!     StaticCollector::new(Vec::new()),
//!     EngineConfig::default(),
//! )
//! .unwrap();
//!
//! let request = ResolutionRequest::new(Claim::new("Will it snow in Lisbon?"), 0.1);
//! let outcome = runtime.block_on(engine.resolve(request));
//! assert_eq!(outcome.verdict.decision.to_string(), "NO");
//! ```

#![warn(missing_docs)]

mod collector;
mod config;
mod engine;
mod error;

pub use collector::{CollectorMode, StaticCollector};
pub use config::EngineConfig;
pub use engine::{ResolutionEngine, ResolutionOutcome, ResolutionRequest};
pub use error::EngineError;
