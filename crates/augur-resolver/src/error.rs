//! Resolver error types

use thiserror::Error;

/// Errors that can occur while configuring the resolver
#[derive(Error, Debug)]
pub enum ResolverError {
    /// Invalid weights, thresholds or multipliers
    #[error("Configuration error: {0}")]
    Config(String),

    /// Configuration file could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
