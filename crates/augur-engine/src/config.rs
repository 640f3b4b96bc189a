//! Engine configuration
//!
//! One TOML document nests every component's section:
//!
//! ```toml
//! search_timeout_secs = 30
//!
//! [extractor]
//! extraction_timeout_secs = 30
//! max_claim_length = 2000
//!
//! [analyzer]
//! analysis_timeout_secs = 120
//! max_evidence_items = 10
//! max_content_chars = 2000
//!
//! [resolution]
//! tie_break = "market"
//! ```

use crate::error::EngineError;
use augur_analyzer::AnalyzerConfig;
use augur_extractor::ExtractorConfig;
use augur_resolver::ResolutionConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Configuration for the whole pipeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Maximum time for the evidence search (seconds)
    pub search_timeout_secs: u64,

    /// Entity extraction settings
    pub extractor: ExtractorConfig,

    /// Evidence analysis settings
    pub analyzer: AnalyzerConfig,

    /// Strategy selection and aggregation settings
    pub resolution: ResolutionConfig,
}

impl EngineConfig {
    /// Get the search timeout as a Duration
    pub fn search_timeout(&self) -> Duration {
        Duration::from_secs(self.search_timeout_secs)
    }

    /// Aggressive preset: short timeouts and compact prompts
    pub fn aggressive() -> Self {
        Self {
            search_timeout_secs: 10,
            extractor: ExtractorConfig::aggressive(),
            analyzer: AnalyzerConfig::aggressive(),
            resolution: ResolutionConfig::strict(),
        }
    }

    /// Lenient preset: generous timeouts for slow local models
    pub fn lenient() -> Self {
        Self {
            search_timeout_secs: 120,
            extractor: ExtractorConfig::lenient(),
            analyzer: AnalyzerConfig::lenient(),
            resolution: ResolutionConfig::default(),
        }
    }

    /// Validate every section
    pub fn validate(&self) -> Result<(), String> {
        if self.search_timeout_secs == 0 {
            return Err("search_timeout_secs must be greater than 0".to_string());
        }
        self.extractor
            .validate()
            .map_err(|e| format!("extractor: {}", e))?;
        self.analyzer
            .validate()
            .map_err(|e| format!("analyzer: {}", e))?;
        self.resolution
            .validate()
            .map_err(|e| format!("resolution: {}", e))?;
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }

    /// Load and validate configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, EngineError> {
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_toml(&contents).map_err(EngineError::Config)?;
        config.validate().map_err(EngineError::Config)?;
        Ok(config)
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            search_timeout_secs: 30,
            extractor: ExtractorConfig::default(),
            analyzer: AnalyzerConfig::default(),
            resolution: ResolutionConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use augur_resolver::{StrategyWeights, TieBreak};
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = EngineConfig::default();
        assert_eq!(config.search_timeout_secs, 30);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_presets_are_valid() {
        assert!(EngineConfig::aggressive().validate().is_ok());
        assert!(EngineConfig::lenient().validate().is_ok());
    }

    #[test]
    fn test_validation_names_the_section() {
        let mut config = EngineConfig::default();
        config.analyzer.max_evidence_items = 0;
        assert!(config.validate().unwrap_err().starts_with("analyzer:"));

        let mut config = EngineConfig::default();
        config.resolution.thresholds.evidence_contradicts = 0.95;
        assert!(config.validate().unwrap_err().starts_with("resolution:"));

        let config = EngineConfig {
            search_timeout_secs: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = EngineConfig::aggressive();
        let toml_str = config.to_toml().unwrap();
        assert_eq!(EngineConfig::from_toml(&toml_str).unwrap(), config);
    }

    #[test]
    fn test_partial_toml() {
        let config = EngineConfig::from_toml(
            "search_timeout_secs = 5\n\n[resolution]\ntie_break = \"yes\"\n",
        )
        .unwrap();
        assert_eq!(config.search_timeout_secs, 5);
        assert_eq!(config.resolution.tie_break, TieBreak::Yes);
        assert_eq!(config.analyzer, AnalyzerConfig::default());
    }

    #[test]
    fn test_partial_subtables() {
        let config =
            EngineConfig::from_toml("[resolution.thresholds]\nmarket_validated = 0.9\n").unwrap();
        assert_eq!(config.resolution.thresholds.market_validated, 0.9);
        assert_eq!(config.resolution.thresholds.evidence_contradicts, 0.2);

        let config =
            EngineConfig::from_toml("[extractor]\nextraction_timeout_secs = 60\n").unwrap();
        assert_eq!(config.extractor.extraction_timeout_secs, 60);
        assert_eq!(config.extractor.max_claim_length, 2000);

        let config = EngineConfig::from_toml(
            "[analyzer]\nmax_evidence_items = 4\n\n[resolution.multipliers]\nlegitimate_and_contrarian = 4.0\n\n[resolution.weights.standard]\nmarket = 0.5\nevidence = 0.3\nai = 0.2\n",
        )
        .unwrap();
        assert_eq!(config.analyzer.max_evidence_items, 4);
        assert_eq!(config.analyzer.analysis_timeout_secs, 120);
        assert_eq!(config.resolution.multipliers.legitimate_and_contrarian, 4.0);
        assert_eq!(config.resolution.multipliers.legitimate_only, 1.5);
        assert_eq!(config.resolution.weights.standard.market, 0.5);
        assert_eq!(
            config.resolution.weights.market_validated,
            StrategyWeights::default().market_validated
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "search_timeout_secs = 12").unwrap();
        let config = EngineConfig::from_file(file.path()).unwrap();
        assert_eq!(config.search_timeout_secs, 12);
    }

    #[test]
    fn test_from_file_rejects_invalid() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[resolution.thresholds]\nmarket_validated = 0.2\nevidence_contradicts = 0.8"
        )
        .unwrap();
        let err = EngineConfig::from_file(file.path()).unwrap_err();
        assert!(matches!(err, EngineError::Config(ref msg) if msg.starts_with("resolution:")));
    }
}
