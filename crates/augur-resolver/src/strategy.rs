//! Strategy selection from the consensus score

use augur_domain::{ResolutionThresholds, Strategy, WeightSet};

/// Weights when evidence agrees with the market
pub const MARKET_VALIDATED_WEIGHTS: WeightSet = WeightSet::new(0.60, 0.10, 0.30);

/// Weights when evidence disputes the market
pub const EVIDENCE_CONTRADICTS_WEIGHTS: WeightSet = WeightSet::new(0.20, 0.30, 0.50);

/// Weights for everything in between
pub const STANDARD_WEIGHTS: WeightSet = WeightSet::new(0.35, 0.25, 0.40);

/// Map a consensus score to a strategy
///
/// Both thresholds are inclusive. A NaN score selects STANDARD.
pub fn select_strategy(score: f64, thresholds: &ResolutionThresholds) -> Strategy {
    if score >= thresholds.market_validated {
        Strategy::MarketValidated
    } else if score <= thresholds.evidence_contradicts {
        Strategy::EvidenceContradicts
    } else {
        Strategy::Standard
    }
}
