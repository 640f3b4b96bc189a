//! Fact-checking prompt construction

use crate::config::{AnalyzerConfig, OutputFormat};
use augur_domain::{Claim, EvidenceItem};

/// JSON schema hint passed to providers when the JSON contract is requested
pub const ANALYSIS_SCHEMA: &str = r#"{"type":"object","required":["recommendation","confidence","reasoning","keyFactors","sourceAnalysis"],"properties":{"recommendation":{"enum":["YES","NO","INCONCLUSIVE"]},"confidence":{"type":"number"},"reasoning":{"type":"string"},"keyFactors":{"type":"array","items":{"type":"string"}},"sourceAnalysis":{"type":"array","items":{"type":"object","required":["source","position","summary"],"properties":{"source":{"type":"string"},"position":{"enum":["YES","NO","NEUTRAL"]},"summary":{"type":"string"}}}}}}"#;

/// Builds the evidence-analysis prompt for one claim
pub struct AnalysisPromptBuilder<'a> {
    claim: &'a Claim,
    evidence: Vec<&'a EvidenceItem>,
    max_content_chars: usize,
    output_format: OutputFormat,
}

impl<'a> AnalysisPromptBuilder<'a> {
    /// Create a builder, keeping the most relevant evidence the config allows
    pub fn new(claim: &'a Claim, evidence: &'a [EvidenceItem], config: &AnalyzerConfig) -> Self {
        let mut selected: Vec<&EvidenceItem> = evidence.iter().collect();
        // Stable sort keeps collector order among equally relevant items
        selected.sort_by(|a, b| b.relevance_score.total_cmp(&a.relevance_score));
        selected.truncate(config.max_evidence_items);

        Self {
            claim,
            evidence: selected,
            max_content_chars: config.max_content_chars,
            output_format: config.output_format,
        }
    }

    /// Number of evidence items that made it into the prompt
    pub fn evidence_count(&self) -> usize {
        self.evidence.len()
    }

    /// Build the complete analysis prompt
    pub fn build(&self) -> String {
        let mut prompt = String::new();

        prompt.push_str(ROLE_INSTRUCTIONS);
        prompt.push_str("\n\n");

        prompt.push_str(&format!("MARKET QUESTION: {}\n", self.claim.text));
        if let Some(description) = &self.claim.description {
            prompt.push_str(&format!("MARKET DESCRIPTION: {}\n", description));
        }
        prompt.push('\n');

        prompt.push_str(ANALYSIS_RUBRIC);
        prompt.push_str("\n\n");

        prompt.push_str(&format!("EVIDENCE ({} sources):\n\n", self.evidence.len()));
        for (idx, item) in self.evidence.iter().enumerate() {
            prompt.push_str(&self.format_evidence(idx + 1, item));
        }

        prompt.push_str(match self.output_format {
            OutputFormat::Labeled => LABELED_TEMPLATE,
            OutputFormat::Json => JSON_TEMPLATE,
        });
        prompt.push_str("\n\n");
        prompt.push_str(CONSERVATISM_REMINDER);

        prompt
    }

    fn format_evidence(&self, index: usize, item: &EvidenceItem) -> String {
        let content: String = item.content.chars().take(self.max_content_chars).collect();
        format!(
            "--- Source {}: {} ---\nURL: {}\nTitle: {}\nRelevance Score: {:.0}\nContent:\n{}\n\n",
            index,
            item.source,
            item.url,
            item.title,
            item.relevance_fraction() * 100.0,
            content.trim()
        )
    }
}

const ROLE_INSTRUCTIONS: &str = "You are a careful fact-checker resolving a prediction market. \
Decide whether the market question below resolved YES or NO, using only the evidence provided.";

const ANALYSIS_RUBRIC: &str = r#"ANALYSIS RUBRIC:
1. Favor factual, verifiable statements over opinion, speculation or forecasts.
2. Weight each source by its credibility: official records and established news outlets count more than blogs, forums or social media.
3. Prefer recent reporting when sources disagree about facts that change over time.
4. Surface contradictions between sources explicitly instead of averaging them away.
5. Judge only what the evidence shows; do not rely on outside knowledge."#;

const LABELED_TEMPLATE: &str = r#"Respond in EXACTLY this format:

RECOMMENDATION: [YES|NO|INCONCLUSIVE]
CONFIDENCE: [a number between 0.0 and 1.0]
REASONING: [your reasoning, citing the sources]

KEY_FACTORS:
- [factor 1]
- [factor 2]
- [factor 3]

SOURCE_ANALYSIS:
[source name]: [YES|NO|NEUTRAL] - [one-line summary of what this source says]
(one line per source)"#;

const JSON_TEMPLATE: &str = r#"Respond with ONLY a JSON object, no markdown code blocks, no explanations:

{
  "recommendation": "YES" | "NO" | "INCONCLUSIVE",
  "confidence": 0.0-1.0,
  "reasoning": "your reasoning, citing the sources",
  "keyFactors": ["factor 1", "factor 2", "factor 3"],
  "sourceAnalysis": [
    {"source": "source name", "position": "YES" | "NO" | "NEUTRAL", "summary": "one-line summary"}
  ]
}"#;

const CONSERVATISM_REMINDER: &str = "Be conservative with confidence. If the evidence is mixed, \
insufficient, or does not directly address the question, answer INCONCLUSIVE. \
A wrong YES or NO is worse than an honest INCONCLUSIVE.";
