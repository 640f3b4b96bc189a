//! Consensus between evidence positions and market odds
//!
//! Each source position in the analysis is weighted by its confidence times
//! the relevance of the evidence item it came from. YES counts 1, NO counts
//! 0 and NEUTRAL counts 0.5; the weighted mean is the evidence-implied
//! probability of YES. Consensus is that probability read from the side the
//! market favors.
//!
//! With no usable positions the overall recommendation stands in:
//! `0.5 + 0.5 × confidence` for YES, `0.5 - 0.5 × confidence` for NO and
//! 0.5 for INCONCLUSIVE.

use augur_domain::{AnalysisResult, Decision, EvidenceItem, Position, Recommendation};
use tracing::debug;

/// Relevance assumed for a source with no matching evidence item
pub const UNMATCHED_RELEVANCE: f64 = 0.5;

/// Evidence-implied probability of YES, in [0, 1]
pub fn evidence_score(analysis: &AnalysisResult, evidence: &[EvidenceItem]) -> f64 {
    let mut weighted = 0.0;
    let mut total_weight = 0.0;

    for position in analysis.source_analysis.iter() {
        let relevance = evidence
            .iter()
            .find(|item| item.source.eq_ignore_ascii_case(&position.source))
            .map(EvidenceItem::relevance_fraction)
            .unwrap_or(UNMATCHED_RELEVANCE);
        let confidence = if position.confidence.is_nan() {
            0.0
        } else {
            position.confidence.clamp(0.0, 1.0)
        };

        let weight = confidence * relevance;
        weighted += weight * position_value(position.position);
        total_weight += weight;
    }

    if total_weight > 0.0 {
        (weighted / total_weight).clamp(0.0, 1.0)
    } else {
        debug!("No weighted source positions, using overall recommendation");
        recommendation_stand_in(analysis)
    }
}

/// Agreement between the evidence and the market-favored side, in [0, 1]
///
/// 1.0 is full agreement with the market odds, 0.0 full disagreement.
pub fn consensus_score(
    analysis: &AnalysisResult,
    evidence: &[EvidenceItem],
    market_probability: f64,
) -> f64 {
    let yes = evidence_score(analysis, evidence);
    match Decision::favored_by(market_probability) {
        Decision::Yes => yes,
        Decision::No => 1.0 - yes,
    }
}

fn position_value(position: Position) -> f64 {
    match position {
        Position::Yes => 1.0,
        Position::No => 0.0,
        Position::Neutral => 0.5,
    }
}

fn recommendation_stand_in(analysis: &AnalysisResult) -> f64 {
    let confidence = if analysis.confidence.is_nan() {
        0.0
    } else {
        analysis.confidence.clamp(0.0, 1.0)
    };
    match analysis.recommendation {
        Recommendation::Yes => 0.5 + 0.5 * confidence,
        Recommendation::No => 0.5 - 0.5 * confidence,
        Recommendation::Inconclusive => 0.5,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use augur_domain::{SourceAnalysis, SourcePosition};

    fn position(source: &str, position: Position, confidence: f64) -> SourcePosition {
        SourcePosition {
            source: source.to_string(),
            position,
            confidence,
            summary: String::new(),
        }
    }

    fn analysis(recommendation: Recommendation, confidence: f64, positions: Vec<SourcePosition>) -> AnalysisResult {
        AnalysisResult {
            recommendation,
            confidence,
            reasoning: "test".to_string(),
            key_factors: Vec::new(),
            source_analysis: positions.into_iter().collect::<SourceAnalysis>(),
            processing_time_ms: 0,
        }
    }

    fn item(source: &str, relevance: f64) -> EvidenceItem {
        EvidenceItem::new(source, "https://example.org", "title", "content", relevance)
    }

    #[test]
    fn test_unanimous_agreement_with_market() {
        let a = analysis(
            Recommendation::Yes,
            0.9,
            vec![
                position("BBC", Position::Yes, 0.72),
                position("Reuters", Position::Yes, 0.72),
            ],
        );
        let evidence = vec![item("BBC", 90.0), item("Reuters", 60.0)];
        assert_eq!(consensus_score(&a, &evidence, 0.8), 1.0);
        assert_eq!(consensus_score(&a, &evidence, 0.2), 0.0);
    }

    #[test]
    fn test_relevance_weights_positions() {
        let a = analysis(
            Recommendation::Yes,
            0.5,
            vec![
                position("High", Position::Yes, 0.4),
                position("Low", Position::No, 0.4),
            ],
        );
        let evidence = vec![item("High", 90.0), item("Low", 10.0)];
        // 0.9 / (0.9 + 0.1)
        assert!((evidence_score(&a, &evidence) - 0.9).abs() < 1e-12);
    }

    #[test]
    fn test_unmatched_source_uses_default_relevance() {
        let a = analysis(
            Recommendation::No,
            0.5,
            vec![
                position("Known", Position::Yes, 0.4),
                position("Unknown", Position::No, 0.4),
            ],
        );
        let evidence = vec![item("known", 100.0)];
        // 1.0 / (1.0 + 0.5)
        assert!((evidence_score(&a, &evidence) - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_neutral_counts_half() {
        let a = analysis(
            Recommendation::Inconclusive,
            0.3,
            vec![position("AP", Position::Neutral, 0.5)],
        );
        assert_eq!(evidence_score(&a, &[item("AP", 50.0)]), 0.5);
    }

    #[test]
    fn test_no_positions_uses_recommendation() {
        let yes = analysis(Recommendation::Yes, 0.6, vec![]);
        assert!((consensus_score(&yes, &[], 0.9) - 0.8).abs() < 1e-12);
        assert!((consensus_score(&yes, &[], 0.1) - 0.2).abs() < 1e-12);

        let no_evidence = AnalysisResult::no_evidence(0);
        assert_eq!(consensus_score(&no_evidence, &[], 0.9), 0.5);
    }

    #[test]
    fn test_zero_weight_positions_use_recommendation() {
        let a = analysis(
            Recommendation::No,
            1.0,
            vec![position("BBC", Position::Yes, 0.8)],
        );
        assert_eq!(evidence_score(&a, &[item("BBC", 0.0)]), 0.0);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use augur_domain::{SourceAnalysis, SourcePosition};
    use proptest::prelude::*;

    fn arb_position() -> impl Strategy<Value = Position> {
        prop_oneof![Just(Position::Yes), Just(Position::No), Just(Position::Neutral)]
    }

    fn arb_sources() -> impl Strategy<Value = Vec<(Position, f64, f64)>> {
        prop::collection::vec((arb_position(), 0.0f64..=1.0, 0.0f64..=100.0), 0..8)
    }

    fn build(sources: &[(Position, f64, f64)]) -> (AnalysisResult, Vec<EvidenceItem>) {
        let mut positions = SourceAnalysis::new();
        let mut evidence = Vec::new();
        for (i, (position, confidence, relevance)) in sources.iter().enumerate() {
            let name = format!("source-{}", i);
            positions.insert(SourcePosition {
                source: name.clone(),
                position: *position,
                confidence: *confidence,
                summary: String::new(),
            });
            evidence.push(EvidenceItem::new(name, "u", "t", "c", *relevance));
        }
        let analysis = AnalysisResult {
            recommendation: Recommendation::Inconclusive,
            confidence: 0.5,
            reasoning: String::new(),
            key_factors: Vec::new(),
            source_analysis: positions,
            processing_time_ms: 0,
        };
        (analysis, evidence)
    }

    proptest! {
        /// Property: consensus stays in [0, 1]
        #[test]
        fn test_consensus_bounded(sources in arb_sources(), p in 0.0f64..=1.0) {
            let (analysis, evidence) = build(&sources);
            let score = consensus_score(&analysis, &evidence, p);
            prop_assert!((0.0..=1.0).contains(&score));
        }

        /// Property: one more source agreeing with the market never lowers consensus
        #[test]
        fn test_consensus_monotonic_in_agreement(
            sources in arb_sources(),
            p in 0.0f64..=1.0,
            confidence in 0.01f64..=1.0,
            relevance in 1.0f64..=100.0,
        ) {
            let (before_analysis, before_evidence) = build(&sources);
            let before = consensus_score(&before_analysis, &before_evidence, p);

            let agreeing = match Decision::favored_by(p) {
                Decision::Yes => Position::Yes,
                Decision::No => Position::No,
            };
            let mut extended = sources.clone();
            extended.push((agreeing, confidence, relevance));
            let (after_analysis, after_evidence) = build(&extended);
            let after = consensus_score(&after_analysis, &after_evidence, p);

            prop_assert!(after + 1e-9 >= before, "before {} after {}", before, after);
        }

        /// Property: consensus for the two market sides is complementary
        #[test]
        fn test_consensus_complementary(sources in arb_sources()) {
            let (analysis, evidence) = build(&sources);
            let yes_side = consensus_score(&analysis, &evidence, 0.9);
            let no_side = consensus_score(&analysis, &evidence, 0.1);
            prop_assert!((yes_side + no_side - 1.0).abs() < 1e-9);
        }
    }
}
