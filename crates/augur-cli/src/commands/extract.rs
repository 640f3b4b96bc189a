//! Extract command implementation.

use super::build_provider;
use crate::cli::ExtractArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use augur_domain::Claim;
use augur_extractor::EntityExtractor;

/// Execute the extract command.
pub async fn execute_extract(args: ExtractArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    config
        .engine
        .extractor
        .validate()
        .map_err(|e| CliError::Config(format!("engine.extractor: {}", e)))?;

    let provider = build_provider(&args.model, config)?;
    let extractor = EntityExtractor::new(provider, config.engine.extractor.clone());

    let mut claim = Claim::new(args.claim);
    if let Some(description) = args.description {
        claim = claim.with_description(description);
    }

    let entities = extractor.extract(&claim).await;
    println!("{}", formatter.format_entities(&entities)?);
    Ok(())
}
