//! Augur Resolver
//!
//! Pure scoring and blending that turns an analysis into a final verdict.
//!
//! The resolver provides:
//! - Consensus scoring between evidence positions and market odds
//! - Strategy selection from two ordered consensus thresholds
//! - Weighted aggregation of market, evidence and AI signals, with
//!   evidence-quality multipliers
//!
//! Nothing here performs I/O except [`ResolutionConfig::from_file`].
//!
//! # Examples
//!
//! ```
//! use augur_domain::{AnalysisResult, EvidenceQuality, Strategy};
//! use augur_resolver::{consensus_score, ResolutionAggregator, ResolutionConfig};
//!
//! let aggregator = ResolutionAggregator::new(ResolutionConfig::default()).unwrap();
//! let analysis = AnalysisResult::no_evidence(0);
//!
//! let consensus = consensus_score(&analysis, &[], 0.7);
//! assert_eq!(aggregator.select_strategy(consensus), Strategy::Standard);
//!
//! let verdict = aggregator.resolve(Strategy::Standard, 0.7, 0.5, &analysis, EvidenceQuality::REGULAR);
//! assert_eq!(verdict.decision.to_string(), "YES");
//! ```

#![warn(missing_docs)]

mod aggregator;
mod config;
mod consensus;
mod error;
mod strategy;

pub use aggregator::{clamp_probability, ResolutionAggregator};
pub use config::{ResolutionConfig, StrategyWeights, TieBreak};
pub use consensus::{consensus_score, evidence_score, UNMATCHED_RELEVANCE};
pub use error::ResolverError;
pub use strategy::{
    select_strategy, EVIDENCE_CONTRADICTS_WEIGHTS, MARKET_VALIDATED_WEIGHTS, STANDARD_WEIGHTS,
};
