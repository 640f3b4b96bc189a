//! Command implementations.

pub mod config;
pub mod extract;
pub mod resolve;

pub use self::config::execute_config;
pub use self::extract::execute_extract;
pub use self::resolve::execute_resolve;

use crate::cli::ModelArgs;
use crate::config::Config;
use crate::error::Result;
use augur_llm::OllamaProvider;
use std::time::Duration;

/// Build the Ollama provider from configuration and command-line overrides.
pub(crate) fn build_provider(args: &ModelArgs, config: &Config) -> Result<OllamaProvider> {
    let endpoint = args.endpoint.as_deref().unwrap_or(&config.llm.endpoint);
    let model = args.model.as_deref().unwrap_or(&config.llm.model);
    let provider = OllamaProvider::with_timeout(
        endpoint,
        model,
        Duration::from_secs(config.llm.request_timeout_secs),
    )?;
    Ok(provider)
}
