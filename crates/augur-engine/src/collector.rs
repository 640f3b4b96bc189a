//! In-memory evidence collector

use crate::error::EngineError;
use augur_domain::traits::EvidenceCollector;
use augur_domain::EvidenceItem;
use std::convert::Infallible;
use std::path::Path;
use tracing::debug;

/// Query terms shorter than this never filter anything
const MIN_TERM_CHARS: usize = 3;

/// How a [`StaticCollector`] answers searches
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CollectorMode {
    /// Items whose title or content mention any query term
    #[default]
    Matching,
    /// Every item, regardless of the queries
    All,
}

/// Evidence collector backed by a fixed list of items
///
/// Stands in for a crawler when evidence was gathered ahead of time,
/// e.g. from a JSON file.
#[derive(Debug, Clone, Default)]
pub struct StaticCollector {
    items: Vec<EvidenceItem>,
    mode: CollectorMode,
}

impl StaticCollector {
    /// Collector that filters items by query terms
    pub fn new(items: Vec<EvidenceItem>) -> Self {
        Self {
            items,
            mode: CollectorMode::Matching,
        }
    }

    /// Collector that returns every item for any search
    pub fn returning_all(items: Vec<EvidenceItem>) -> Self {
        Self {
            items,
            mode: CollectorMode::All,
        }
    }

    /// Change how searches are answered
    pub fn with_mode(mut self, mode: CollectorMode) -> Self {
        self.mode = mode;
        self
    }

    /// Parse a JSON array of evidence items (camelCase keys)
    pub fn from_json(json: &str) -> Result<Self, EngineError> {
        let items: Vec<EvidenceItem> = serde_json::from_str(json)?;
        Ok(Self::new(items))
    }

    /// Load a JSON evidence file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, EngineError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// All items held by the collector
    pub fn items(&self) -> &[EvidenceItem] {
        &self.items
    }

    /// The active search mode
    pub fn mode(&self) -> CollectorMode {
        self.mode
    }

    fn matches(item: &EvidenceItem, terms: &[String]) -> bool {
        let title = item.title.to_lowercase();
        let content = item.content.to_lowercase();
        terms
            .iter()
            .any(|term| title.contains(term.as_str()) || content.contains(term.as_str()))
    }
}

impl EvidenceCollector for StaticCollector {
    type Error = Infallible;

    fn search(&self, queries: &[String]) -> Result<Vec<EvidenceItem>, Self::Error> {
        if self.mode == CollectorMode::All {
            return Ok(self.items.clone());
        }

        let mut terms: Vec<String> = queries
            .iter()
            .flat_map(|q| q.split_whitespace())
            .map(|t| {
                t.trim_matches(|c: char| !c.is_alphanumeric())
                    .to_lowercase()
            })
            .filter(|t| t.chars().count() >= MIN_TERM_CHARS)
            .collect();
        terms.sort();
        terms.dedup();

        let found: Vec<EvidenceItem> = self
            .items
            .iter()
            .filter(|item| Self::matches(item, &terms))
            .cloned()
            .collect();

        debug!(
            "Static search: {} terms matched {} of {} items",
            terms.len(),
            found.len(),
            self.items.len()
        );
        Ok(found)
    }
}
