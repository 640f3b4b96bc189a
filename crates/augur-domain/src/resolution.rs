//! Weighting policy and verdict types

use crate::evidence::EvidenceQuality;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Allowed deviation of a weight set's sum from 1.0
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-3;

/// Relative influence of the market, evidence and AI signals
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightSet {
    /// Weight of the market-implied probability
    pub market: f64,
    /// Weight of the evidence-derived score
    pub evidence: f64,
    /// Weight of the AI judgment
    pub ai: f64,
}

impl WeightSet {
    /// Create a weight set (not validated)
    pub const fn new(market: f64, evidence: f64, ai: f64) -> Self {
        Self {
            market,
            evidence,
            ai,
        }
    }

    /// Sum of the three weights
    pub fn total(&self) -> f64 {
        self.market + self.evidence + self.ai
    }

    /// Check the weights are finite, non-negative and sum to 1.0
    pub fn validate(&self) -> Result<(), String> {
        for (name, w) in [("market", self.market), ("evidence", self.evidence), ("ai", self.ai)] {
            if !w.is_finite() || w < 0.0 {
                return Err(format!("{} weight {} must be a non-negative number", name, w));
            }
        }
        let total = self.total();
        if (total - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(format!(
                "weights must sum to 1.0 (got {:.4}: market {}, evidence {}, ai {})",
                total, self.market, self.evidence, self.ai
            ));
        }
        Ok(())
    }

    /// Scale each weight so the set sums to 1.0
    ///
    /// Returns `None` when the total is zero or not finite.
    pub fn normalized(&self) -> Option<Self> {
        let total = self.total();
        if !total.is_finite() || total <= 0.0 {
            return None;
        }
        Some(Self::new(
            self.market / total,
            self.evidence / total,
            self.ai / total,
        ))
    }
}

/// Consensus thresholds separating the three strategies
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolutionThresholds {
    /// At or above this consensus the market is trusted
    pub market_validated: f64,
    /// At or below this consensus the evidence is trusted over the market
    pub evidence_contradicts: f64,
}

impl ResolutionThresholds {
    /// Check `0 <= evidence_contradicts < market_validated <= 1`
    pub fn validate(&self) -> Result<(), String> {
        if !self.market_validated.is_finite() || !self.evidence_contradicts.is_finite() {
            return Err("thresholds must be finite numbers".to_string());
        }
        if self.evidence_contradicts < 0.0 {
            return Err(format!(
                "evidence_contradicts {} must be >= 0",
                self.evidence_contradicts
            ));
        }
        if self.market_validated > 1.0 {
            return Err(format!(
                "market_validated {} must be <= 1",
                self.market_validated
            ));
        }
        if self.evidence_contradicts >= self.market_validated {
            return Err(format!(
                "evidence_contradicts {} must be below market_validated {}",
                self.evidence_contradicts, self.market_validated
            ));
        }
        Ok(())
    }
}

impl Default for ResolutionThresholds {
    fn default() -> Self {
        Self {
            market_validated: 0.8,
            evidence_contradicts: 0.2,
        }
    }
}

/// Named weighting policy chosen from the consensus score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Strategy {
    /// Evidence agrees with the market: trust the market more
    MarketValidated,
    /// Evidence disputes the market: discount it
    EvidenceContradicts,
    /// Balanced blend with a slight AI tiebreak
    Standard,
}

impl Strategy {
    /// Label used in logs and output
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::MarketValidated => "MARKET_VALIDATED",
            Strategy::EvidenceContradicts => "EVIDENCE_CONTRADICTS",
            Strategy::Standard => "STANDARD",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Evidence weight multipliers keyed by evidence quality
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvidenceMultipliers {
    /// Evidence that is legitimate and disagrees with the market
    pub legitimate_and_contrarian: f64,
    /// Legitimate evidence that agrees with the market
    pub legitimate_only: f64,
    /// Untagged evidence
    pub regular: f64,
}

impl EvidenceMultipliers {
    /// Multiplier for a quality tag
    pub fn factor_for(&self, quality: EvidenceQuality) -> f64 {
        match (quality.legitimate, quality.contrarian) {
            (true, true) => self.legitimate_and_contrarian,
            (true, false) => self.legitimate_only,
            _ => self.regular,
        }
    }

    /// Check every multiplier is finite and at least 1
    pub fn validate(&self) -> Result<(), String> {
        for (name, m) in [
            ("legitimate_and_contrarian", self.legitimate_and_contrarian),
            ("legitimate_only", self.legitimate_only),
            ("regular", self.regular),
        ] {
            if !m.is_finite() || m < 1.0 {
                return Err(format!("{} multiplier {} must be >= 1", name, m));
            }
        }
        Ok(())
    }
}

impl Default for EvidenceMultipliers {
    fn default() -> Self {
        Self {
            legitimate_and_contrarian: 3.0,
            legitimate_only: 1.5,
            regular: 1.0,
        }
    }
}

/// Side chosen by the final verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Decision {
    /// Market resolves YES
    Yes,
    /// Market resolves NO
    No,
}

impl Decision {
    /// Side favored by a YES probability (YES at or above 0.5)
    pub fn favored_by(probability: f64) -> Self {
        if probability >= 0.5 {
            Decision::Yes
        } else {
            Decision::No
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Decision::Yes => "YES",
            Decision::No => "NO",
        })
    }
}

/// Final blended verdict
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinalVerdict {
    /// Chosen side
    pub decision: Decision,
    /// Blended probability of the chosen side, in [0, 1]
    pub confidence: f64,
    /// Normalized weights actually applied
    pub breakdown: WeightSet,
    /// Strategy the weights came from
    pub strategy: Strategy,
    /// Blended probability of YES before the decision
    pub blended_score: f64,
}
