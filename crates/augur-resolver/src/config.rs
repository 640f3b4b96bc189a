//! Resolver configuration

use crate::error::ResolverError;
use crate::strategy::{EVIDENCE_CONTRADICTS_WEIGHTS, MARKET_VALIDATED_WEIGHTS, STANDARD_WEIGHTS};
use augur_domain::{EvidenceMultipliers, ResolutionThresholds, Strategy, WeightSet};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Side chosen when the blended score is exactly 0.5
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TieBreak {
    /// The side favored by the market probability (YES at 0.5)
    #[default]
    Market,
    /// Always YES
    Yes,
    /// Always NO
    No,
}

/// One weight set per strategy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrategyWeights {
    /// Weights for MARKET_VALIDATED
    pub market_validated: WeightSet,
    /// Weights for EVIDENCE_CONTRADICTS
    pub evidence_contradicts: WeightSet,
    /// Weights for STANDARD
    pub standard: WeightSet,
}

impl StrategyWeights {
    /// Weight set bound to a strategy
    pub fn for_strategy(&self, strategy: Strategy) -> WeightSet {
        match strategy {
            Strategy::MarketValidated => self.market_validated,
            Strategy::EvidenceContradicts => self.evidence_contradicts,
            Strategy::Standard => self.standard,
        }
    }

    /// Validate every weight set
    pub fn validate(&self) -> Result<(), String> {
        for strategy in [
            Strategy::MarketValidated,
            Strategy::EvidenceContradicts,
            Strategy::Standard,
        ] {
            self.for_strategy(strategy)
                .validate()
                .map_err(|e| format!("{} {}", strategy, e))?;
        }
        Ok(())
    }
}

impl Default for StrategyWeights {
    fn default() -> Self {
        Self {
            market_validated: MARKET_VALIDATED_WEIGHTS,
            evidence_contradicts: EVIDENCE_CONTRADICTS_WEIGHTS,
            standard: STANDARD_WEIGHTS,
        }
    }
}

/// Configuration for strategy selection and aggregation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolutionConfig {
    /// Decision when the blended score is exactly 0.5
    pub tie_break: TieBreak,

    /// Consensus thresholds
    pub thresholds: ResolutionThresholds,

    /// Weight set per strategy
    pub weights: StrategyWeights,

    /// Evidence weight multipliers by quality
    pub multipliers: EvidenceMultipliers,
}

impl ResolutionConfig {
    /// Strict preset: the market must be strongly confirmed or refuted
    /// before a non-standard strategy applies
    pub fn strict() -> Self {
        Self {
            thresholds: ResolutionThresholds {
                market_validated: 0.9,
                evidence_contradicts: 0.1,
            },
            ..Default::default()
        }
    }

    /// Permissive preset: non-standard strategies kick in early
    pub fn permissive() -> Self {
        Self {
            thresholds: ResolutionThresholds {
                market_validated: 0.7,
                evidence_contradicts: 0.3,
            },
            ..Default::default()
        }
    }

    /// Validate thresholds, weights and multipliers
    pub fn validate(&self) -> Result<(), String> {
        self.thresholds.validate()?;
        self.weights.validate()?;
        self.multipliers.validate()?;
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }

    /// Load and validate configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ResolverError> {
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_toml(&contents).map_err(ResolverError::Config)?;
        config.validate().map_err(ResolverError::Config)?;
        Ok(config)
    }
}
