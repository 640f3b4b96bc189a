//! Parse the model's analysis response into an [`AnalysisResult`]
//!
//! Two contracts are accepted, tried in order:
//!
//! 1. A strict JSON object (`recommendation`, `confidence`, `reasoning`,
//!    `keyFactors`, `sourceAnalysis`), optionally fenced.
//! 2. The labeled grammar:
//!
//! ```text
//! RECOMMENDATION: YES|NO|INCONCLUSIVE
//! CONFIDENCE: <float>
//! REASONING: <free text, may span multiple lines>
//!
//! KEY_FACTORS:
//! - <fact>
//!
//! SOURCE_ANALYSIS:
//! <source name>: YES|NO|NEUTRAL - <summary>
//! ```
//!
//! Labels are case-insensitive. Missing fields take defaults; text with no
//! recognizable structure at all becomes the degraded parse-failure result.

use crate::error::AnalyzerError;
use augur_domain::{
    AnalysisResult, EvidenceItem, Position, Recommendation, SourceAnalysis, SourcePosition,
};
use augur_llm::strip_code_fences;
use regex::Regex;
use serde::Deserialize;
use std::sync::LazyLock;
use std::time::Instant;
use tracing::{debug, warn};

/// Per-source confidence as a fraction of the overall confidence
pub const SOURCE_CONFIDENCE_FACTOR: f64 = 0.8;

/// Per-source confidence for NEUTRAL positions
const NEUTRAL_SOURCE_CONFIDENCE: f64 = 0.5;

/// Confidence assumed when the model states none
const DEFAULT_CONFIDENCE: f64 = 0.5;

/// Key factors shorter than this (in characters) are noise
const MIN_FACTOR_CHARS: usize = 6;

/// Maximum key factors kept
const MAX_KEY_FACTORS: usize = 5;

/// Reasoning used when the response has no REASONING section
const DEFAULT_REASONING: &str = "No reasoning provided in AI analysis.";

struct Grammar {
    any_label: Regex,
    recommendation: Regex,
    confidence: Regex,
    reasoning: Regex,
    key_factors: Regex,
    source_analysis: Regex,
    source_line: Regex,
}

impl Grammar {
    fn compile() -> Result<Self, regex::Error> {
        Ok(Self {
            any_label: Regex::new(
                r"(?i)\b(?:RECOMMENDATION|CONFIDENCE|REASONING|KEY_FACTORS|SOURCE_ANALYSIS):",
            )?,
            recommendation: Regex::new(r"(?i)RECOMMENDATION:\s*(YES|NO|INCONCLUSIVE)\b")?,
            confidence: Regex::new(r"(?i)CONFIDENCE:\s*([-+]?(?:\d+(?:\.\d*)?|\.\d+))")?,
            // Sections end only at a label that opens a line
            reasoning: Regex::new(
                r"(?ism)REASONING:\s*(.*?)\s*(?:^\s*(?:KEY_FACTORS|SOURCE_ANALYSIS)\s*:|\z)",
            )?,
            key_factors: Regex::new(r"(?ism)^\s*KEY_FACTORS:(.*?)(?:^\s*SOURCE_ANALYSIS\s*:|\z)")?,
            source_analysis: Regex::new(r"(?ism)^\s*SOURCE_ANALYSIS:(.*)\z")?,
            source_line: Regex::new(
                r"(?i)^\s*(?:[-•*]\s*)?(.+?)\s*:\s*(YES|NO|NEUTRAL)\s*[-–—]\s*(.+?)\s*$",
            )?,
        })
    }
}

static GRAMMAR: LazyLock<Result<Grammar, regex::Error>> = LazyLock::new(Grammar::compile);

fn grammar() -> Result<&'static Grammar, AnalyzerError> {
    GRAMMAR
        .as_ref()
        .map_err(|e| AnalyzerError::Unparsable(format!("response grammar failed to compile: {}", e)))
}

/// JSON form of the analysis contract
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct JsonAnalysis {
    recommendation: Option<String>,
    confidence: Option<f64>,
    reasoning: Option<String>,
    #[serde(default)]
    key_factors: Vec<String>,
    #[serde(default)]
    source_analysis: Vec<JsonSource>,
}

#[derive(Debug, Deserialize)]
struct JsonSource {
    source: String,
    position: String,
    #[serde(default)]
    summary: String,
}

/// Parse a raw model response; never fails
///
/// `started` marks the beginning of the analysis step. The elapsed time is
/// recorded on the result whether or not parsing succeeds.
pub fn parse_analysis_response(
    raw: &str,
    evidence: &[EvidenceItem],
    started: Instant,
) -> AnalysisResult {
    let processing_time_ms = elapsed_ms(started);
    match try_parse_analysis(raw, evidence, processing_time_ms) {
        Ok(result) => result,
        Err(e) => {
            warn!("Failed to parse analysis response: {}", e);
            AnalysisResult::parse_failure(processing_time_ms)
        }
    }
}

/// Parse a raw model response, reporting why it was unusable
///
/// Pure and deterministic: the same input always yields the same result.
pub fn try_parse_analysis(
    raw: &str,
    evidence: &[EvidenceItem],
    processing_time_ms: u64,
) -> Result<AnalysisResult, AnalyzerError> {
    let text = strip_code_fences(raw);
    if text.is_empty() {
        return Err(AnalyzerError::Unparsable("empty response".to_string()));
    }

    if text.starts_with('{') {
        match serde_json::from_str::<JsonAnalysis>(text) {
            Ok(json) if json.recommendation.is_some() => {
                debug!("Parsed analysis via JSON contract");
                return Ok(from_json(json, evidence, processing_time_ms));
            }
            Ok(_) => debug!("JSON response lacks a recommendation, trying labeled grammar"),
            Err(e) => debug!("JSON contract not met ({}), trying labeled grammar", e),
        }
    }

    from_labeled(text, evidence, processing_time_ms)
}

fn from_json(json: JsonAnalysis, evidence: &[EvidenceItem], processing_time_ms: u64) -> AnalysisResult {
    let recommendation = json
        .recommendation
        .and_then(|r| r.parse::<Recommendation>().ok())
        .unwrap_or(Recommendation::Inconclusive);
    let confidence = clamp_confidence(json.confidence.unwrap_or(DEFAULT_CONFIDENCE));
    let reasoning = json
        .reasoning
        .map(|r| r.trim().to_string())
        .filter(|r| !r.is_empty())
        .unwrap_or_else(|| DEFAULT_REASONING.to_string());

    let key_factors = clean_factors(json.key_factors.iter().map(String::as_str));

    let source_analysis = json
        .source_analysis
        .into_iter()
        .filter_map(|s| {
            let position = s.position.parse::<Position>().ok()?;
            Some(source_position(&s.source, position, &s.summary, confidence, evidence))
        })
        .filter(|p| !p.source.is_empty())
        .collect();

    AnalysisResult {
        recommendation,
        confidence,
        reasoning,
        key_factors,
        source_analysis,
        processing_time_ms,
    }
}

fn from_labeled(
    text: &str,
    evidence: &[EvidenceItem],
    processing_time_ms: u64,
) -> Result<AnalysisResult, AnalyzerError> {
    let grammar = grammar()?;

    if !grammar.any_label.is_match(text) {
        return Err(AnalyzerError::Unparsable(
            "no labeled sections found".to_string(),
        ));
    }

    let recommendation = grammar
        .recommendation
        .captures(text)
        .and_then(|c| c[1].parse::<Recommendation>().ok())
        .unwrap_or(Recommendation::Inconclusive);

    let confidence = clamp_confidence(
        grammar
            .confidence
            .captures(text)
            .and_then(|c| c[1].parse::<f64>().ok())
            .unwrap_or(DEFAULT_CONFIDENCE),
    );

    let reasoning = grammar
        .reasoning
        .captures(text)
        .map(|c| c[1].trim().to_string())
        .filter(|r| !r.is_empty())
        .unwrap_or_else(|| DEFAULT_REASONING.to_string());

    let key_factors = grammar
        .key_factors
        .captures(text)
        .map(|c| clean_factors(c.get(1).map_or("", |m| m.as_str()).lines()))
        .unwrap_or_default();

    let mut source_analysis = SourceAnalysis::new();
    if let Some(section) = grammar.source_analysis.captures(text) {
        let body = section.get(1).map_or("", |m| m.as_str());
        for line in body.lines() {
            let Some(caps) = grammar.source_line.captures(line) else {
                continue;
            };
            let Ok(position) = caps[2].parse::<Position>() else {
                continue;
            };
            source_analysis.insert(source_position(
                &caps[1],
                position,
                &caps[3],
                confidence,
                evidence,
            ));
        }
    }

    Ok(AnalysisResult {
        recommendation,
        confidence,
        reasoning,
        key_factors,
        source_analysis,
        processing_time_ms,
    })
}

fn source_position(
    name: &str,
    position: Position,
    summary: &str,
    overall_confidence: f64,
    evidence: &[EvidenceItem],
) -> SourcePosition {
    let name = name.trim();
    // Prefer the collector's spelling so positions can be joined to evidence
    let source = evidence
        .iter()
        .find(|e| e.source.eq_ignore_ascii_case(name))
        .map(|e| e.source.clone())
        .unwrap_or_else(|| name.to_string());

    let confidence = match position {
        Position::Neutral => NEUTRAL_SOURCE_CONFIDENCE,
        Position::Yes | Position::No => overall_confidence * SOURCE_CONFIDENCE_FACTOR,
    };

    SourcePosition {
        source,
        position,
        confidence,
        summary: summary.trim().to_string(),
    }
}

fn clean_factors<'a>(lines: impl Iterator<Item = &'a str>) -> Vec<String> {
    lines
        .map(|line| {
            line.trim_start_matches(|c: char| c == '-' || c == '•' || c == '*' || c.is_whitespace())
                .trim_end()
        })
        .filter(|line| line.chars().count() >= MIN_FACTOR_CHARS)
        .take(MAX_KEY_FACTORS)
        .map(str::to_string)
        .collect()
}

fn clamp_confidence(value: f64) -> f64 {
    if value.is_nan() {
        DEFAULT_CONFIDENCE
    } else {
        value.clamp(0.0, 1.0)
    }
}

fn elapsed_ms(started: Instant) -> u64 {
    u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX)
}
