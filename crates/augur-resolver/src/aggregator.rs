//! Weighted aggregation into the final verdict

use crate::config::{ResolutionConfig, TieBreak};
use crate::error::ResolverError;
use crate::strategy::select_strategy;
use augur_domain::{
    AnalysisResult, Decision, EvidenceQuality, FinalVerdict, Strategy, WeightSet,
};
use tracing::debug;

/// Blended scores closer than this to 0.5 are ties
const TIE_EPSILON: f64 = 1e-9;

/// Clamp a probability into [0, 1]; NaN becomes 0.5
pub fn clamp_probability(probability: f64) -> f64 {
    if probability.is_nan() {
        0.5
    } else {
        probability.clamp(0.0, 1.0)
    }
}

/// Combines market, evidence and AI signals into a [`FinalVerdict`]
///
/// Pure computation over a validated [`ResolutionConfig`].
#[derive(Debug, Clone)]
pub struct ResolutionAggregator {
    config: ResolutionConfig,
}

impl ResolutionAggregator {
    /// Create an aggregator, rejecting invalid configuration
    pub fn new(config: ResolutionConfig) -> Result<Self, ResolverError> {
        config.validate().map_err(ResolverError::Config)?;
        Ok(Self { config })
    }

    /// The active configuration
    pub fn config(&self) -> &ResolutionConfig {
        &self.config
    }

    /// Strategy for a consensus score under the configured thresholds
    pub fn select_strategy(&self, consensus: f64) -> Strategy {
        select_strategy(consensus, &self.config.thresholds)
    }

    /// Configured weights for a strategy
    pub fn weights_for(&self, strategy: Strategy) -> WeightSet {
        self.config.weights.for_strategy(strategy)
    }

    /// Blend the three signals under a strategy
    ///
    /// The evidence weight is scaled by the quality multiplier and the set
    /// renormalized; `breakdown` on the verdict carries the weights applied.
    pub fn resolve(
        &self,
        strategy: Strategy,
        market_probability: f64,
        evidence_score: f64,
        analysis: &AnalysisResult,
        quality: EvidenceQuality,
    ) -> FinalVerdict {
        let market = clamp_probability(market_probability);
        let evidence = clamp_probability(evidence_score);
        let ai = analysis.implied_yes_probability();

        let base = self.weights_for(strategy);
        let factor = self.config.multipliers.factor_for(quality);
        let scaled = WeightSet::new(base.market, base.evidence * factor, base.ai);
        let breakdown = scaled.normalized().unwrap_or(base);

        let blended = clamp_probability(
            breakdown.market * market + breakdown.evidence * evidence + breakdown.ai * ai,
        );

        let decision = if blended > 0.5 + TIE_EPSILON {
            Decision::Yes
        } else if blended < 0.5 - TIE_EPSILON {
            Decision::No
        } else {
            self.break_tie(market)
        };

        let confidence = match decision {
            Decision::Yes => blended,
            Decision::No => 1.0 - blended,
        };

        debug!(
            "Blended {:.4} (market {:.3}, evidence {:.3}, ai {:.3}) with {} weights x{} evidence",
            blended, market, evidence, ai, strategy, factor
        );

        FinalVerdict {
            decision,
            confidence,
            breakdown,
            strategy,
            blended_score: blended,
        }
    }

    fn break_tie(&self, market_probability: f64) -> Decision {
        match self.config.tie_break {
            TieBreak::Market => Decision::favored_by(market_probability),
            TieBreak::Yes => Decision::Yes,
            TieBreak::No => Decision::No,
        }
    }
}
