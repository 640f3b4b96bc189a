//! Core ResolutionEngine implementation

use crate::config::EngineConfig;
use crate::error::EngineError;
use augur_analyzer::EvidenceAnalyzer;
use augur_domain::traits::{EvidenceCollector, LlmProvider};
use augur_domain::{
    AnalysisResult, Claim, EntitySet, EvidenceItem, EvidenceQuality, FinalVerdict, ResolutionId,
    Strategy,
};
use augur_extractor::EntityExtractor;
use augur_resolver::{clamp_probability, consensus_score, evidence_score, ResolutionAggregator};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;
use tracing::{debug, info, warn};

/// One claim to resolve, with the market's probability of YES
#[derive(Debug, Clone)]
pub struct ResolutionRequest {
    /// The market question
    pub claim: Claim,
    /// Market-implied probability of YES
    pub market_probability: f64,
}

impl ResolutionRequest {
    /// Create a request
    pub fn new(claim: Claim, market_probability: f64) -> Self {
        Self {
            claim,
            market_probability,
        }
    }
}

/// Everything produced while resolving one claim
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolutionOutcome {
    /// Identifier used in logs for this attempt
    pub resolution_id: ResolutionId,
    /// The claim that was resolved
    pub claim: Claim,
    /// Market probability actually used, after clamping
    pub market_probability: f64,
    /// Extracted entities and search queries
    pub entities: EntitySet,
    /// Evidence returned by the collector
    pub evidence: Vec<EvidenceItem>,
    /// Quality tag summarized from the evidence
    pub evidence_quality: EvidenceQuality,
    /// The model's judgment
    pub analysis: AnalysisResult,
    /// Evidence-implied probability of YES
    pub evidence_score: f64,
    /// Agreement between evidence and market odds
    pub consensus_score: f64,
    /// Strategy chosen from the consensus
    pub strategy: Strategy,
    /// Final blended verdict
    pub verdict: FinalVerdict,
}

/// Orchestrates extraction, collection, analysis and aggregation
///
/// Holds its capabilities behind `Arc`, so one engine can serve concurrent
/// resolutions.
pub struct ResolutionEngine<L, C>
where
    L: LlmProvider,
{
    extractor: EntityExtractor<L>,
    analyzer: EvidenceAnalyzer<L>,
    aggregator: ResolutionAggregator,
    collector: Arc<C>,
    search_timeout: Duration,
}

impl<L, C> ResolutionEngine<L, C>
where
    L: LlmProvider + Send + Sync + 'static,
    L::Error: std::fmt::Display,
    C: EvidenceCollector + Send + Sync + 'static,
    C::Error: std::fmt::Display,
{
    /// Build an engine, refusing invalid configuration
    pub fn new(llm_provider: L, collector: C, config: EngineConfig) -> Result<Self, EngineError> {
        config.validate().map_err(EngineError::Config)?;

        let llm = Arc::new(llm_provider);
        let extractor = EntityExtractor::with_shared_provider(Arc::clone(&llm), config.extractor);
        let analyzer = EvidenceAnalyzer::with_shared_provider(llm, config.analyzer);
        let aggregator = ResolutionAggregator::new(config.resolution)?;

        Ok(Self {
            extractor,
            analyzer,
            aggregator,
            collector: Arc::new(collector),
            search_timeout: Duration::from_secs(config.search_timeout_secs),
        })
    }

    /// The resolver used for the final blend
    pub fn aggregator(&self) -> &ResolutionAggregator {
        &self.aggregator
    }

    /// Resolve one claim; never fails
    pub async fn resolve(&self, request: ResolutionRequest) -> ResolutionOutcome {
        let resolution_id = ResolutionId::new();
        let ResolutionRequest {
            claim,
            market_probability,
        } = request;

        if market_probability.is_nan() || !(0.0..=1.0).contains(&market_probability) {
            warn!(
                "[{}] Market probability {} out of range, clamping",
                resolution_id, market_probability
            );
        }
        let market_probability = clamp_probability(market_probability);

        info!("[{}] Resolving '{}' at market {:.3}", resolution_id, claim.text, market_probability);

        let entities = self.extractor.extract(&claim).await;
        debug!("[{}] Search queries: {:?}", resolution_id, entities.search_queries);

        let evidence = self.collect_evidence(resolution_id, &entities.search_queries).await;
        let evidence_quality = EvidenceQuality::summarize(&evidence);

        let analysis = self.analyzer.analyze(&claim, &evidence).await;

        let evidence_score = evidence_score(&analysis, &evidence);
        let consensus_score = consensus_score(&analysis, &evidence, market_probability);
        let strategy = self.aggregator.select_strategy(consensus_score);

        let verdict = self.aggregator.resolve(
            strategy,
            market_probability,
            evidence_score,
            &analysis,
            evidence_quality,
        );

        info!(
            "[{}] Verdict {} at {:.3} via {} (consensus {:.3}, {} evidence items)",
            resolution_id,
            verdict.decision,
            verdict.confidence,
            strategy,
            consensus_score,
            evidence.len()
        );

        ResolutionOutcome {
            resolution_id,
            claim,
            market_probability,
            entities,
            evidence,
            evidence_quality,
            analysis,
            evidence_score,
            consensus_score,
            strategy,
            verdict,
        }
    }

    /// Run the collector; failures and timeouts yield no evidence
    async fn collect_evidence(&self, id: ResolutionId, queries: &[String]) -> Vec<EvidenceItem> {
        let collector = Arc::clone(&self.collector);
        let queries = queries.to_vec();

        // EvidenceCollector is synchronous
        let search = tokio::task::spawn_blocking(move || {
            collector.search(&queries).map_err(|e| e.to_string())
        });

        match timeout(self.search_timeout, search).await {
            Ok(Ok(Ok(items))) => {
                debug!("[{}] Collected {} evidence items", id, items.len());
                items
            }
            Ok(Ok(Err(e))) => {
                warn!("[{}] Evidence search failed: {}", id, e);
                Vec::new()
            }
            Ok(Err(e)) => {
                warn!("[{}] Evidence search task failed: {}", id, e);
                Vec::new()
            }
            Err(_) => {
                warn!(
                    "[{}] Evidence search timed out after {}s",
                    id,
                    self.search_timeout.as_secs()
                );
                Vec::new()
            }
        }
    }
}
