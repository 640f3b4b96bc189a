//! Output formatting for the CLI.

use crate::config::{Config, OutputFormat};
use crate::error::Result;
use augur_domain::{Decision, EntitySet, Recommendation};
use augur_engine::ResolutionOutcome;
use colored::*;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format a resolution outcome.
    pub fn format_outcome(&self, outcome: &ResolutionOutcome) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(outcome)?),
            OutputFormat::Table => Ok(self.format_outcome_table(outcome)),
        }
    }

    /// Format extracted entities.
    pub fn format_entities(&self, entities: &EntitySet) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(entities)?),
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["Field", "Value"]);
                builder.push_record(["Main subject", entities.main_subject.as_str()]);
                builder.push_record([
                    "Secondary entities".to_string(),
                    entities.secondary_entities.join(", "),
                ]);
                builder.push_record(["Keywords".to_string(), entities.keywords.join(", ")]);
                builder.push_record(["Context", entities.context.as_str()]);
                builder.push_record([
                    "Search queries".to_string(),
                    entities.search_queries.join("\n"),
                ]);
                Ok(self.finish_table(builder))
            }
        }
    }

    /// Format the effective configuration.
    pub fn format_config(&self, config: &Config) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(config)?),
            OutputFormat::Table => config.to_toml(),
        }
    }

    fn format_outcome_table(&self, outcome: &ResolutionOutcome) -> String {
        let verdict = &outcome.verdict;
        let analysis = &outcome.analysis;

        let mut summary = Builder::default();
        summary.push_record(["Field", "Value"]);
        summary.push_record(["Resolution".to_string(), outcome.resolution_id.to_string()]);
        summary.push_record(["Claim", outcome.claim.text.as_str()]);
        summary.push_record([
            "Decision".to_string(),
            self.decision(verdict.decision),
        ]);
        summary.push_record([
            "Confidence".to_string(),
            format!("{:.1}%", verdict.confidence * 100.0),
        ]);
        summary.push_record(["Strategy".to_string(), verdict.strategy.to_string()]);
        summary.push_record([
            "Weights (market/evidence/ai)".to_string(),
            format!(
                "{:.2} / {:.2} / {:.2}",
                verdict.breakdown.market, verdict.breakdown.evidence, verdict.breakdown.ai
            ),
        ]);
        summary.push_record([
            "Market probability".to_string(),
            format!("{:.3}", outcome.market_probability),
        ]);
        summary.push_record([
            "Evidence score".to_string(),
            format!("{:.3}", outcome.evidence_score),
        ]);
        summary.push_record([
            "Consensus".to_string(),
            format!("{:.3}", outcome.consensus_score),
        ]);
        summary.push_record([
            "AI recommendation".to_string(),
            format!(
                "{} ({:.2})",
                self.recommendation(analysis.recommendation),
                analysis.confidence
            ),
        ]);
        summary.push_record(["Reasoning", analysis.reasoning.as_str()]);
        if !analysis.key_factors.is_empty() {
            summary.push_record(["Key factors".to_string(), analysis.key_factors.join("\n")]);
        }
        summary.push_record([
            "Evidence items".to_string(),
            outcome.evidence.len().to_string(),
        ]);

        let mut output = self.finish_table(summary);

        if !analysis.source_analysis.is_empty() {
            let mut sources = Builder::default();
            sources.push_record(["Source", "Position", "Confidence", "Summary"]);
            for position in analysis.source_analysis.iter() {
                sources.push_record([
                    position.source.clone(),
                    position.position.to_string(),
                    format!("{:.2}", position.confidence),
                    position.summary.clone(),
                ]);
            }
            output.push('\n');
            output.push_str(&self.finish_table(sources));
        }

        output
    }

    fn finish_table(&self, builder: Builder) -> String {
        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));
        table.to_string()
    }

    fn decision(&self, decision: Decision) -> String {
        match decision {
            Decision::Yes => self.colorize("YES", "green"),
            Decision::No => self.colorize("NO", "red"),
        }
    }

    fn recommendation(&self, recommendation: Recommendation) -> String {
        match recommendation {
            Recommendation::Yes => self.colorize("YES", "green"),
            Recommendation::No => self.colorize("NO", "red"),
            Recommendation::Inconclusive => self.colorize("INCONCLUSIVE", "yellow"),
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use augur_domain::{
        AnalysisResult, Claim, EvidenceQuality, FinalVerdict, Position, ResolutionId,
        SourcePosition, Strategy, WeightSet,
    };

    fn create_test_outcome() -> ResolutionOutcome {
        let mut analysis = AnalysisResult {
            recommendation: Recommendation::Yes,
            confidence: 0.82,
            reasoning: "Strong agreement.".to_string(),
            key_factors: vec!["Fact A".to_string()],
            ..AnalysisResult::no_evidence(12)
        };
        analysis.source_analysis.insert(SourcePosition {
            source: "BBC".to_string(),
            position: Position::Yes,
            confidence: 0.656,
            summary: "Confirmed event occurred.".to_string(),
        });

        ResolutionOutcome {
            resolution_id: ResolutionId::new(),
            claim: Claim::new("Will the event happen?"),
            market_probability: 0.85,
            entities: EntitySet {
                main_subject: "event".to_string(),
                secondary_entities: vec!["venue".to_string()],
                keywords: vec!["event".to_string()],
                context: "An event".to_string(),
                search_queries: vec!["event news".to_string()],
            },
            evidence: Vec::new(),
            evidence_quality: EvidenceQuality::REGULAR,
            analysis,
            evidence_score: 1.0,
            consensus_score: 1.0,
            strategy: Strategy::MarketValidated,
            verdict: FinalVerdict {
                decision: Decision::Yes,
                confidence: 0.91,
                breakdown: WeightSet::new(0.6, 0.1, 0.3),
                strategy: Strategy::MarketValidated,
                blended_score: 0.91,
            },
        }
    }

    #[test]
    fn test_outcome_table() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_outcome(&create_test_outcome()).unwrap();
        assert!(output.contains("Decision"));
        assert!(output.contains("YES"));
        assert!(output.contains("91.0%"));
        assert!(output.contains("MARKET_VALIDATED"));
        assert!(output.contains("BBC"));
        assert!(output.contains("Confirmed event occurred."));
    }

    #[test]
    fn test_outcome_json() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter.format_outcome(&create_test_outcome()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["verdict"]["decision"], "YES");
        assert_eq!(value["analysis"]["sourceAnalysis"][0]["source"], "BBC");
    }

    #[test]
    fn test_entities_table() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter
            .format_entities(&create_test_outcome().entities)
            .unwrap();
        assert!(output.contains("Main subject"));
        assert!(output.contains("event news"));
    }

    #[test]
    fn test_config_table_is_toml() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_config(&Config::default()).unwrap();
        assert!(output.contains("[llm]"));
        assert!(toml::from_str::<Config>(&output).is_ok());
    }

    #[test]
    fn test_colorize_disabled() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        assert_eq!(formatter.success("test"), "✓ test");
        assert_eq!(formatter.warning("careful"), "⚠ careful");
    }
}
