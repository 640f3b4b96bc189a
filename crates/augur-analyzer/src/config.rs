//! Configuration for the Analyzer

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Response format requested from the model
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Labeled sections (RECOMMENDATION, CONFIDENCE, ...)
    #[default]
    Labeled,
    /// A strict JSON object with the same fields
    Json,
}

/// Configuration for the Analyzer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Maximum time for the analysis model call (seconds)
    pub analysis_timeout_secs: u64,

    /// Evidence items included in the prompt, most relevant first
    pub max_evidence_items: usize,

    /// Characters of each item's content included in the prompt
    pub max_content_chars: usize,

    /// Response format requested from the model
    pub output_format: OutputFormat,
}

impl AnalyzerConfig {
    /// Get the analysis timeout as a Duration
    pub fn analysis_timeout(&self) -> Duration {
        Duration::from_secs(self.analysis_timeout_secs)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.analysis_timeout_secs == 0 {
            return Err("analysis_timeout_secs must be greater than 0".to_string());
        }
        if self.max_evidence_items == 0 {
            return Err("max_evidence_items must be greater than 0".to_string());
        }
        if self.max_content_chars == 0 {
            return Err("max_content_chars must be greater than 0".to_string());
        }
        Ok(())
    }

    /// Aggressive preset: fewer, shorter evidence sections and a short timeout
    pub fn aggressive() -> Self {
        Self {
            analysis_timeout_secs: 30,
            max_evidence_items: 5,
            max_content_chars: 1_000,
            output_format: OutputFormat::Labeled,
        }
    }

    /// Lenient preset: more context for large local models
    pub fn lenient() -> Self {
        Self {
            analysis_timeout_secs: 300,
            max_evidence_items: 20,
            max_content_chars: 5_000,
            output_format: OutputFormat::Labeled,
        }
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            analysis_timeout_secs: 120,
            max_evidence_items: 10,
            max_content_chars: 2_000,
            output_format: OutputFormat::Labeled,
        }
    }
}
