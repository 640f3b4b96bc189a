//! Resolve command implementation.

use super::build_provider;
use crate::cli::ResolveArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use augur_domain::Claim;
use augur_engine::{CollectorMode, ResolutionEngine, ResolutionRequest, StaticCollector};
use tracing::info;

/// Execute the resolve command.
pub async fn execute_resolve(args: ResolveArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let mode = if args.filter_evidence {
        CollectorMode::Matching
    } else {
        CollectorMode::All
    };
    let collector = StaticCollector::from_file(&args.evidence)?.with_mode(mode);
    info!(
        "Loaded {} evidence items from {}",
        collector.items().len(),
        args.evidence
    );

    let provider = build_provider(&args.model, config)?;
    let engine = ResolutionEngine::new(provider, collector, config.engine.clone())?;

    let mut claim = Claim::new(args.claim);
    if let Some(description) = args.description {
        claim = claim.with_description(description);
    }

    let outcome = engine
        .resolve(ResolutionRequest::new(claim, args.market))
        .await;

    println!("{}", formatter.format_outcome(&outcome)?);
    Ok(())
}
