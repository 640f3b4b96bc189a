//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};

/// Augur CLI - Resolve prediction-market claims against evidence.
#[derive(Debug, Parser)]
#[command(name = "augur")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path (default: ~/.augur/config.toml)
    #[arg(short, long, global = true, env = "AUGUR_CONFIG")]
    pub config: Option<String>,

    /// Log pipeline steps to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Resolve a claim against an evidence file
    Resolve(ResolveArgs),

    /// Extract entities and search queries from a claim
    Extract(ExtractArgs),

    /// Show, validate or create the configuration file
    Config(ConfigArgs),
}

/// Language-model connection overrides.
#[derive(Debug, Parser)]
pub struct ModelArgs {
    /// Ollama model name
    #[arg(short, long)]
    pub model: Option<String>,

    /// Ollama API endpoint
    #[arg(short, long, env = "AUGUR_OLLAMA_ENDPOINT")]
    pub endpoint: Option<String>,
}

/// Arguments for the resolve command.
#[derive(Debug, Parser)]
pub struct ResolveArgs {
    /// Market question to resolve
    #[arg(long)]
    pub claim: String,

    /// Market description or resolution criteria
    #[arg(short, long)]
    pub description: Option<String>,

    /// Market-implied probability of YES (0.0-1.0)
    #[arg(long, value_parser = parse_probability)]
    pub market: f64,

    /// JSON file containing an array of evidence items
    #[arg(long)]
    pub evidence: String,

    /// Only pass evidence mentioning the extracted search terms
    #[arg(long)]
    pub filter_evidence: bool,

    #[command(flatten)]
    pub model: ModelArgs,
}

/// Arguments for the extract command.
#[derive(Debug, Parser)]
pub struct ExtractArgs {
    /// Market question
    #[arg(long)]
    pub claim: String,

    /// Market description or resolution criteria
    #[arg(short, long)]
    pub description: Option<String>,

    #[command(flatten)]
    pub model: ModelArgs,
}

/// Arguments for configuration management.
#[derive(Debug, Parser)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,

    /// Check the configuration file for errors
    Validate,

    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Parse a probability in [0, 1].
pub fn parse_probability(value: &str) -> std::result::Result<f64, String> {
    let p: f64 = value
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a number", value))?;
    if !(0.0..=1.0).contains(&p) {
        return Err(format!("probability {} must be between 0 and 1", p));
    }
    Ok(p)
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_command() {
        let cli = Cli::parse_from([
            "augur",
            "resolve",
            "--claim",
            "Will BTC close above $100k?",
            "--market",
            "0.62",
            "--evidence",
            "evidence.json",
            "--model",
            "llama3",
        ]);
        match cli.command {
            Command::Resolve(args) => {
                assert_eq!(args.claim, "Will BTC close above $100k?");
                assert_eq!(args.market, 0.62);
                assert_eq!(args.evidence, "evidence.json");
                assert_eq!(args.model.model.as_deref(), Some("llama3"));
                assert!(!args.filter_evidence);
            }
            _ => panic!("Expected Resolve command"),
        }
    }

    #[test]
    fn test_market_out_of_range_rejected() {
        let result = Cli::try_parse_from([
            "augur",
            "resolve",
            "--claim",
            "x",
            "--market",
            "1.5",
            "--evidence",
            "e.json",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["augur", "config", "show", "--format", "json", "--no-color", "-v"]);
        assert!(matches!(cli.format, Some(CliFormat::Json)));
        assert!(cli.no_color);
        assert!(cli.verbose);
        assert!(matches!(
            cli.command,
            Command::Config(ConfigArgs {
                action: ConfigAction::Show
            })
        ));
    }

    #[test]
    fn test_config_init_force() {
        let cli = Cli::parse_from(["augur", "config", "init", "--force"]);
        match cli.command {
            Command::Config(ConfigArgs {
                action: ConfigAction::Init { force },
            }) => assert!(force),
            _ => panic!("Expected config init"),
        }
    }

    #[test]
    fn test_parse_probability() {
        assert_eq!(parse_probability("0.5"), Ok(0.5));
        assert_eq!(parse_probability(" 1 "), Ok(1.0));
        assert!(parse_probability("-0.1").is_err());
        assert!(parse_probability("abc").is_err());
        assert!(parse_probability("NaN").is_err());
    }
}
