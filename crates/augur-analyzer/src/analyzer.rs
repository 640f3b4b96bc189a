//! Core EvidenceAnalyzer implementation

use crate::config::{AnalyzerConfig, OutputFormat};
use crate::error::AnalyzerError;
use crate::parser::parse_analysis_response;
use crate::prompt::{AnalysisPromptBuilder, ANALYSIS_SCHEMA};
use augur_domain::traits::LlmProvider;
use augur_domain::{AnalysisResult, Claim, EvidenceItem};
use std::sync::Arc;
use std::time::Instant;
use tokio::time::timeout;
use tracing::{debug, info, warn};

/// Fact-checks a claim against collected evidence
///
/// One model call per non-empty evidence set. Failures become degraded
/// INCONCLUSIVE results rather than errors.
pub struct EvidenceAnalyzer<L>
where
    L: LlmProvider,
{
    llm_provider: Arc<L>,
    config: AnalyzerConfig,
}

impl<L> EvidenceAnalyzer<L>
where
    L: LlmProvider + Send + Sync + 'static,
    L::Error: std::fmt::Display,
{
    /// Create a new EvidenceAnalyzer
    pub fn new(llm_provider: L, config: AnalyzerConfig) -> Self {
        Self::with_shared_provider(Arc::new(llm_provider), config)
    }

    /// Create an EvidenceAnalyzer sharing a provider with other components
    pub fn with_shared_provider(llm_provider: Arc<L>, config: AnalyzerConfig) -> Self {
        Self {
            llm_provider,
            config,
        }
    }

    /// The active configuration
    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Analyze evidence for a claim; never fails
    pub async fn analyze(&self, claim: &Claim, evidence: &[EvidenceItem]) -> AnalysisResult {
        let started = Instant::now();

        if evidence.is_empty() {
            debug!("No evidence for '{}', skipping model call", claim.text);
            return AnalysisResult::no_evidence(elapsed_ms(started));
        }

        let builder = AnalysisPromptBuilder::new(claim, evidence, &self.config);
        let prompt = builder.build();
        debug!(
            "Analysis prompt: {} evidence items, {} chars",
            builder.evidence_count(),
            prompt.len()
        );

        let raw = match self.call_with_timeout(prompt).await {
            Ok(raw) => raw,
            Err(e) => {
                warn!("Evidence analysis failed: {}", e);
                return AnalysisResult::technical_failure(e, elapsed_ms(started));
            }
        };

        debug!("LLM response length: {} chars", raw.len());

        let result = parse_analysis_response(&raw, evidence, started);
        info!(
            "Analysis: {} at confidence {:.2} ({} sources, {}ms)",
            result.recommendation,
            result.confidence,
            result.source_analysis.len(),
            result.processing_time_ms
        );
        result
    }

    async fn call_with_timeout(&self, prompt: String) -> Result<String, AnalyzerError> {
        timeout(self.config.analysis_timeout(), self.call_llm(prompt))
            .await
            .map_err(|_| AnalyzerError::Timeout(self.config.analysis_timeout_secs))?
    }

    /// Call the LLM provider
    async fn call_llm(&self, prompt: String) -> Result<String, AnalyzerError> {
        let llm = Arc::clone(&self.llm_provider);
        let output_format = self.config.output_format;

        // LlmProvider is synchronous
        tokio::task::spawn_blocking(move || {
            let result = match output_format {
                OutputFormat::Json => llm.generate_structured(&prompt, ANALYSIS_SCHEMA),
                OutputFormat::Labeled => llm.generate(&prompt),
            };
            result.map_err(|e| AnalyzerError::Llm(e.to_string()))
        })
        .await
        .map_err(|e| AnalyzerError::Llm(format!("Task join error: {}", e)))?
    }
}

fn elapsed_ms(started: Instant) -> u64 {
    u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX)
}
