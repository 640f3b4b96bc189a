//! Engine error types

use augur_resolver::ResolverError;
use thiserror::Error;

/// Errors raised while building the engine or loading its inputs
#[derive(Error, Debug)]
pub enum EngineError {
    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Resolver rejected its configuration
    #[error("Resolver error: {0}")]
    Resolver(#[from] ResolverError),

    /// File could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Evidence file is not a JSON array of evidence items
    #[error("Invalid evidence: {0}")]
    Evidence(#[from] serde_json::Error),
}
