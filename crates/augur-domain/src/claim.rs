//! Claim module - the market question under resolution

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier for a single resolution attempt, based on UUIDv7
///
/// Chronologically sortable, so log lines from one attempt can be
/// correlated and ordered without coordination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ResolutionId(u128);

impl ResolutionId {
    /// Generate a new UUIDv7-based ResolutionId
    ///
    /// # Examples
    ///
    /// ```
    /// use augur_domain::ResolutionId;
    ///
    /// let id = ResolutionId::new();
    /// assert!(id.value() > 0);
    /// ```
    pub fn new() -> Self {
        Self(uuid::Uuid::now_v7().as_u128())
    }

    /// Create a ResolutionId from a raw u128 value
    pub fn from_value(value: u128) -> Self {
        Self(value)
    }

    /// Parse a ResolutionId from its string form
    pub fn from_string(s: &str) -> Result<Self, String> {
        uuid::Uuid::parse_str(s)
            .map(|u| Self(u.as_u128()))
            .map_err(|e| format!("Invalid UUIDv7 string: {}", e))
    }

    /// Get the raw u128 value
    pub fn value(&self) -> u128 {
        self.0
    }
}

impl Default for ResolutionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ResolutionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", uuid::Uuid::from_u128(self.0))
    }
}

impl Serialize for ResolutionId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ResolutionId {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_string(&s).map_err(serde::de::Error::custom)
    }
}

/// The natural-language market question being resolved
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claim {
    /// The question itself, e.g. "Bitcoin will reach $100,000 by March"
    pub text: String,

    /// Optional market description with resolution criteria
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Claim {
    /// Create a claim without a description
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            description: None,
        }
    }

    /// Attach a market description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

impl fmt::Display for Claim {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolution_id_uniqueness() {
        let id1 = ResolutionId::new();
        let id2 = ResolutionId::new();
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_resolution_id_ordering() {
        let id1 = ResolutionId::new();
        std::thread::sleep(std::time::Duration::from_millis(2));
        let id2 = ResolutionId::new();
        assert!(id1 < id2);
    }

    #[test]
    fn test_resolution_id_string_roundtrip() {
        let id = ResolutionId::new();
        let parsed = ResolutionId::from_string(&id.to_string()).unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_resolution_id_invalid_string() {
        assert!(ResolutionId::from_string("not-a-uuid").is_err());
    }

    #[test]
    fn test_resolution_id_serde() {
        let id = ResolutionId::new();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", id));
        assert_eq!(serde_json::from_str::<ResolutionId>(&json).unwrap(), id);

        let err = serde_json::from_str::<ResolutionId>("\"not-a-uuid\"").unwrap_err();
        assert!(err.to_string().contains("Invalid UUIDv7 string"));
    }

    #[test]
    fn test_claim_builder() {
        let claim = Claim::new("Will it rain?").with_description("Resolves YES on rain");
        assert_eq!(claim.text, "Will it rain?");
        assert_eq!(claim.description.as_deref(), Some("Resolves YES on rain"));
        assert_eq!(claim.to_string(), "Will it rain?");
    }

    #[test]
    fn test_claim_deserialize_without_description() {
        let claim: Claim = serde_json::from_str(r#"{"text": "Will it rain?"}"#).unwrap();
        assert!(claim.description.is_none());
    }
}
