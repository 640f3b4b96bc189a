//! Augur Domain Layer
//!
//! Value objects and capability traits for the Adaptive Resolution Engine.
//! Every type here is transient: created for one resolution request and
//! discarded once the verdict is returned. Nothing is mutated after
//! construction.
//!
//! ## Key Concepts
//!
//! - **Claim**: the natural-language market question being resolved
//! - **Evidence item**: one piece of externally sourced text with a relevance score
//! - **Entity set**: subjects, keywords and search queries derived from a claim
//! - **Analysis result**: the language model's structured judgment of a claim
//! - **Weight set / strategy**: how market, evidence and AI signals are blended
//!
//! ## Architecture
//!
//! Infrastructure (LLM providers, evidence collectors) lives in other crates
//! and is reached only through the traits in [`traits`].

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod analysis;
pub mod claim;
pub mod entities;
pub mod evidence;
pub mod resolution;
pub mod traits;

// Re-exports for convenience
pub use analysis::{AnalysisResult, Position, Recommendation, SourceAnalysis, SourcePosition};
pub use claim::{Claim, ResolutionId};
pub use entities::EntitySet;
pub use evidence::{EvidenceItem, EvidenceQuality};
pub use resolution::{
    Decision, EvidenceMultipliers, FinalVerdict, ResolutionThresholds, Strategy, WeightSet,
    WEIGHT_SUM_TOLERANCE,
};
