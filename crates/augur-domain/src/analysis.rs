//! Structured result of the language model's evidence analysis

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Reasoning used when no evidence was available
pub const NO_EVIDENCE_REASONING: &str = "No external content found to analyze.";

/// Reasoning used when the model response could not be parsed
pub const PARSE_FAILURE_REASONING: &str = "Failed to parse AI analysis response.";

/// Key factor recorded when the model response could not be parsed
pub const PARSE_FAILURE_FACTOR: &str = "Response parsing error";

/// Key factor recorded when the model call itself failed
pub const TECHNICAL_FAILURE_FACTOR: &str = "Technical error during analysis";

/// The model's overall answer to the claim
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Recommendation {
    /// The claim is supported
    Yes,
    /// The claim is refuted
    No,
    /// Evidence is mixed or insufficient
    Inconclusive,
}

impl Recommendation {
    /// Label as it appears in the model grammar
    pub fn as_str(&self) -> &'static str {
        match self {
            Recommendation::Yes => "YES",
            Recommendation::No => "NO",
            Recommendation::Inconclusive => "INCONCLUSIVE",
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Recommendation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "YES" => Ok(Recommendation::Yes),
            "NO" => Ok(Recommendation::No),
            "INCONCLUSIVE" => Ok(Recommendation::Inconclusive),
            other => Err(format!("Unknown recommendation: {}", other)),
        }
    }
}

/// One source's stance on the claim
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Position {
    /// Source supports the claim
    Yes,
    /// Source refutes the claim
    No,
    /// Source takes no side
    Neutral,
}

impl Position {
    /// Label as it appears in the model grammar
    pub fn as_str(&self) -> &'static str {
        match self {
            Position::Yes => "YES",
            Position::No => "NO",
            Position::Neutral => "NEUTRAL",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Position {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "YES" => Ok(Position::Yes),
            "NO" => Ok(Position::No),
            "NEUTRAL" => Ok(Position::Neutral),
            other => Err(format!("Unknown position: {}", other)),
        }
    }
}

/// A source's position, with confidence derived from the overall analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourcePosition {
    /// Source name as it appears in evidence
    pub source: String,

    /// Stance taken by the source
    pub position: Position,

    /// Confidence in [0, 1]
    pub confidence: f64,

    /// One-line summary of what the source says
    pub summary: String,
}

/// Ordered mapping from source name to its position
///
/// Insertion order is preserved. Inserting a name that already exists
/// replaces the earlier entry in place (last write wins).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SourceAnalysis {
    entries: Vec<SourcePosition>,
}

impl SourceAnalysis {
    /// Create an empty mapping
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a position, replacing any earlier entry with the same source name
    pub fn insert(&mut self, entry: SourcePosition) {
        match self.entries.iter_mut().find(|e| e.source == entry.source) {
            Some(existing) => *existing = entry,
            None => self.entries.push(entry),
        }
    }

    /// Look up a source by exact name
    pub fn get(&self, source: &str) -> Option<&SourcePosition> {
        self.entries.iter().find(|e| e.source == source)
    }

    /// Iterate in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &SourcePosition> {
        self.entries.iter()
    }

    /// Number of sources
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no source positions were recorded
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<SourcePosition> for SourceAnalysis {
    fn from_iter<I: IntoIterator<Item = SourcePosition>>(iter: I) -> Self {
        let mut analysis = SourceAnalysis::new();
        for entry in iter {
            analysis.insert(entry);
        }
        analysis
    }
}

/// Structured analysis produced once per resolution attempt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// Overall answer
    pub recommendation: Recommendation,

    /// Confidence in [0, 1]
    pub confidence: f64,

    /// Free-text reasoning
    pub reasoning: String,

    /// Up to five key factors
    pub key_factors: Vec<String>,

    /// Per-source positions
    pub source_analysis: SourceAnalysis,

    /// Wall-clock duration of the analysis step
    pub processing_time_ms: u64,
}

impl AnalysisResult {
    /// Canonical result when there is no evidence to analyze
    pub fn no_evidence(processing_time_ms: u64) -> Self {
        Self::degraded(NO_EVIDENCE_REASONING.to_string(), Vec::new(), processing_time_ms)
    }

    /// Canonical result when the model call failed
    pub fn technical_failure(error: impl fmt::Display, processing_time_ms: u64) -> Self {
        Self::degraded(
            format!("Analysis failed due to technical error: {}", error),
            vec![TECHNICAL_FAILURE_FACTOR.to_string()],
            processing_time_ms,
        )
    }

    /// Canonical result when the model response could not be parsed
    pub fn parse_failure(processing_time_ms: u64) -> Self {
        Self::degraded(
            PARSE_FAILURE_REASONING.to_string(),
            vec![PARSE_FAILURE_FACTOR.to_string()],
            processing_time_ms,
        )
    }

    fn degraded(reasoning: String, key_factors: Vec<String>, processing_time_ms: u64) -> Self {
        Self {
            recommendation: Recommendation::Inconclusive,
            confidence: 0.0,
            reasoning,
            key_factors,
            source_analysis: SourceAnalysis::new(),
            processing_time_ms,
        }
    }

    /// Probability of YES implied by this analysis
    ///
    /// YES maps to the confidence, NO to its complement, INCONCLUSIVE to 0.5.
    pub fn implied_yes_probability(&self) -> f64 {
        let confidence = self.confidence.clamp(0.0, 1.0);
        match self.recommendation {
            Recommendation::Yes => confidence,
            Recommendation::No => 1.0 - confidence,
            Recommendation::Inconclusive => 0.5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn position(source: &str, position: Position, summary: &str) -> SourcePosition {
        SourcePosition {
            source: source.to_string(),
            position,
            confidence: 0.5,
            summary: summary.to_string(),
        }
    }

    #[test]
    fn test_recommendation_parse_case_insensitive() {
        assert_eq!("yes".parse::<Recommendation>().unwrap(), Recommendation::Yes);
        assert_eq!(" No ".parse::<Recommendation>().unwrap(), Recommendation::No);
        assert_eq!(
            "Inconclusive".parse::<Recommendation>().unwrap(),
            Recommendation::Inconclusive
        );
        assert!("maybe".parse::<Recommendation>().is_err());
    }

    #[test]
    fn test_position_parse() {
        assert_eq!("neutral".parse::<Position>().unwrap(), Position::Neutral);
        assert!("INCONCLUSIVE".parse::<Position>().is_err());
    }

    #[test]
    fn test_source_analysis_last_write_wins() {
        let mut analysis = SourceAnalysis::new();
        analysis.insert(position("BBC", Position::Yes, "first"));
        analysis.insert(position("Reuters", Position::No, "other"));
        analysis.insert(position("BBC", Position::Neutral, "second"));

        assert_eq!(analysis.len(), 2);
        let bbc = analysis.get("BBC").unwrap();
        assert_eq!(bbc.position, Position::Neutral);
        assert_eq!(bbc.summary, "second");

        // Replacement keeps the original slot
        let order: Vec<_> = analysis.iter().map(|e| e.source.as_str()).collect();
        assert_eq!(order, vec!["BBC", "Reuters"]);
    }

    #[test]
    fn test_no_evidence_result() {
        let result = AnalysisResult::no_evidence(3);
        assert_eq!(result.recommendation, Recommendation::Inconclusive);
        assert_eq!(result.confidence, 0.0);
        assert_eq!(result.reasoning, NO_EVIDENCE_REASONING);
        assert!(result.key_factors.is_empty());
        assert!(result.source_analysis.is_empty());
        assert_eq!(result.processing_time_ms, 3);
    }

    #[test]
    fn test_technical_failure_result() {
        let result = AnalysisResult::technical_failure("connection refused", 12);
        assert_eq!(result.recommendation, Recommendation::Inconclusive);
        assert!(result.reasoning.contains("connection refused"));
        assert_eq!(result.key_factors, vec![TECHNICAL_FAILURE_FACTOR.to_string()]);
    }

    #[test]
    fn test_implied_yes_probability() {
        let mut result = AnalysisResult::no_evidence(0);
        assert_eq!(result.implied_yes_probability(), 0.5);

        result.recommendation = Recommendation::Yes;
        result.confidence = 0.8;
        assert!((result.implied_yes_probability() - 0.8).abs() < 1e-12);

        result.recommendation = Recommendation::No;
        assert!((result.implied_yes_probability() - 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_serializes_labels_uppercase() {
        let json = serde_json::to_string(&Recommendation::Inconclusive).unwrap();
        assert_eq!(json, "\"INCONCLUSIVE\"");
        let json = serde_json::to_string(&Position::Neutral).unwrap();
        assert_eq!(json, "\"NEUTRAL\"");
    }
}
