//! Evidence items produced by the external collector

use serde::{Deserialize, Serialize};

/// Quality annotation attached to evidence by whoever collected it
///
/// The engine never computes these flags; it only consumes them when
/// scaling the evidence weight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EvidenceQuality {
    /// Source is considered legitimate (verified, reputable)
    #[serde(default)]
    pub legitimate: bool,

    /// Evidence disagrees with community/market consensus
    #[serde(default)]
    pub contrarian: bool,
}

impl EvidenceQuality {
    /// Untagged evidence
    pub const REGULAR: Self = Self {
        legitimate: false,
        contrarian: false,
    };

    /// Legitimate, non-contrarian evidence
    pub const LEGITIMATE: Self = Self {
        legitimate: true,
        contrarian: false,
    };

    /// Legitimate evidence that disagrees with the market
    pub const LEGITIMATE_CONTRARIAN: Self = Self {
        legitimate: true,
        contrarian: true,
    };

    /// Summarize the tags of a whole evidence set into one tag
    ///
    /// A single legitimate contrarian item is enough to tag the set as such;
    /// otherwise any legitimate item tags it legitimate.
    pub fn summarize(items: &[EvidenceItem]) -> Self {
        if items
            .iter()
            .any(|i| i.quality.legitimate && i.quality.contrarian)
        {
            Self::LEGITIMATE_CONTRARIAN
        } else if items.iter().any(|i| i.quality.legitimate) {
            Self::LEGITIMATE
        } else {
            Self::REGULAR
        }
    }
}

/// A single piece of externally sourced text relevant to a claim
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvidenceItem {
    /// Source name, e.g. "BBC"
    pub source: String,

    /// Where the content was retrieved from
    pub url: String,

    /// Title of the page or article
    pub title: String,

    /// Extracted text content
    pub content: String,

    /// Relevance to the claim in [0, 100]
    pub relevance_score: f64,

    /// Externally supplied quality tags
    #[serde(default)]
    pub quality: EvidenceQuality,
}

impl EvidenceItem {
    /// Create an untagged evidence item
    ///
    /// The relevance score is clamped into [0, 100].
    pub fn new(
        source: impl Into<String>,
        url: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<String>,
        relevance_score: f64,
    ) -> Self {
        Self {
            source: source.into(),
            url: url.into(),
            title: title.into(),
            content: content.into(),
            relevance_score: clamp_relevance(relevance_score),
            quality: EvidenceQuality::default(),
        }
    }

    /// Attach quality tags
    pub fn with_quality(mut self, quality: EvidenceQuality) -> Self {
        self.quality = quality;
        self
    }

    /// Relevance as a fraction in [0, 1]
    pub fn relevance_fraction(&self) -> f64 {
        clamp_relevance(self.relevance_score) / 100.0
    }
}

fn clamp_relevance(score: f64) -> f64 {
    if score.is_nan() {
        0.0
    } else {
        score.clamp(0.0, 100.0)
    }
}
