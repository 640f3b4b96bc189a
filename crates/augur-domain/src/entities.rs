//! Structured entities extracted from a claim

use serde::{Deserialize, Serialize};

/// Maximum number of secondary entities
pub const MAX_SECONDARY_ENTITIES: usize = 4;

/// Maximum number of keywords
pub const MAX_KEYWORDS: usize = 5;

/// Maximum number of search queries
pub const MAX_SEARCH_QUERIES: usize = 5;

/// Minimum number of search queries a model response should provide
pub const MIN_SEARCH_QUERIES: usize = 3;

/// Entities, keywords and search queries derived from a claim
///
/// `main_subject` is never empty: when extraction fails a fallback built from
/// the claim's own tokens is produced instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntitySet {
    /// Primary subject of the claim
    pub main_subject: String,

    /// Other entities mentioned (1..=4)
    pub secondary_entities: Vec<String>,

    /// Search keywords (3..=5)
    pub keywords: Vec<String>,

    /// Short context string
    pub context: String,

    /// Queries handed to the evidence collector (3..=5)
    pub search_queries: Vec<String>,
}
