//! Configuration for the Extractor

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the Extractor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Maximum time for the extraction model call (seconds)
    pub extraction_timeout_secs: u64,

    /// Claims longer than this (characters) are truncated before prompting
    pub max_claim_length: usize,

    /// Ask the provider for structured (JSON mode) output
    pub structured_output: bool,
}

impl ExtractorConfig {
    /// Get the extraction timeout as a Duration
    pub fn extraction_timeout(&self) -> Duration {
        Duration::from_secs(self.extraction_timeout_secs)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.extraction_timeout_secs == 0 {
            return Err("extraction_timeout_secs must be greater than 0".to_string());
        }
        if self.max_claim_length == 0 {
            return Err("max_claim_length must be greater than 0".to_string());
        }
        Ok(())
    }

    /// Aggressive preset: short timeout, short claims
    pub fn aggressive() -> Self {
        Self {
            extraction_timeout_secs: 10,
            max_claim_length: 500,
            structured_output: true,
        }
    }

    /// Lenient preset: long timeout for slow local models
    pub fn lenient() -> Self {
        Self {
            extraction_timeout_secs: 120,
            max_claim_length: 4_000,
            structured_output: true,
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

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            extraction_timeout_secs: 30,
            max_claim_length: 2_000,
            structured_output: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_are_valid() {
        assert!(ExtractorConfig::default().validate().is_ok());
        assert!(ExtractorConfig::aggressive().validate().is_ok());
        assert!(ExtractorConfig::lenient().validate().is_ok());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let config = ExtractorConfig {
            extraction_timeout_secs: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_claim_length_rejected() {
        let config = ExtractorConfig {
            max_claim_length: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = ExtractorConfig::lenient();
        let parsed = ExtractorConfig::from_toml(&config.to_toml().unwrap()).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_structured_output_defaults_on() {
        let config =
            ExtractorConfig::from_toml("extraction_timeout_secs = 5\nmax_claim_length = 100\n")
                .unwrap();
        assert!(config.structured_output);
        assert_eq!(config.extraction_timeout(), Duration::from_secs(5));
    }
}
