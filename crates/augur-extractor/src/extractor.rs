//! Core EntityExtractor implementation

use crate::config::ExtractorConfig;
use crate::error::ExtractorError;
use crate::fallback::local_extraction;
use crate::parser::parse_entity_response;
use crate::prompt::{EntityPromptBuilder, ENTITY_SCHEMA};
use augur_domain::traits::LlmProvider;
use augur_domain::{Claim, EntitySet};
use std::sync::Arc;
use tokio::time::timeout;
use tracing::{debug, info, warn};

/// Turns a claim into entities and search queries
///
/// Makes a single model call per claim; any failure falls back to
/// [`local_extraction`].
pub struct EntityExtractor<L>
where
    L: LlmProvider,
{
    llm_provider: Arc<L>,
    config: ExtractorConfig,
}

impl<L> EntityExtractor<L>
where
    L: LlmProvider + Send + Sync + 'static,
    L::Error: std::fmt::Display,
{
    /// Create a new EntityExtractor
    pub fn new(llm_provider: L, config: ExtractorConfig) -> Self {
        Self::with_shared_provider(Arc::new(llm_provider), config)
    }

    /// Create an EntityExtractor sharing a provider with other components
    pub fn with_shared_provider(llm_provider: Arc<L>, config: ExtractorConfig) -> Self {
        Self {
            llm_provider,
            config,
        }
    }

    /// The active configuration
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Extract entities from a claim; never fails
    pub async fn extract(&self, claim: &Claim) -> EntitySet {
        match self.try_extract(claim).await {
            Ok(entities) => {
                info!(
                    "Extracted main subject '{}' with {} search queries",
                    entities.main_subject,
                    entities.search_queries.len()
                );
                entities
            }
            Err(e) => {
                warn!("Entity extraction failed, using local fallback: {}", e);
                local_extraction(&claim.text)
            }
        }
    }

    /// Extract entities, surfacing the reason when the model path fails
    pub async fn try_extract(&self, claim: &Claim) -> Result<EntitySet, ExtractorError> {
        let prompt = EntityPromptBuilder::new(claim, self.config.max_claim_length).build();

        debug!("Entity prompt length: {} chars", prompt.len());

        let response = timeout(self.config.extraction_timeout(), self.call_llm(prompt))
            .await
            .map_err(|_| ExtractorError::Timeout)??;

        debug!("LLM response length: {} chars", response.len());

        parse_entity_response(&response, &claim.text)
    }

    /// Call the LLM provider
    async fn call_llm(&self, prompt: String) -> Result<String, ExtractorError> {
        let llm = Arc::clone(&self.llm_provider);
        let structured = self.config.structured_output;

        // LlmProvider is synchronous
        tokio::task::spawn_blocking(move || {
            let result = if structured {
                llm.generate_structured(&prompt, ENTITY_SCHEMA)
            } else {
                llm.generate(&prompt)
            };
            result.map_err(|e| ExtractorError::Llm(e.to_string()))
        })
        .await
        .map_err(|e| ExtractorError::Llm(format!("Task join error: {}", e)))?
    }
}
