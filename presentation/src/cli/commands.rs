//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for finished games
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Colored game-over screen
    Text,
    /// JSON summary per game
    Json,
}

impl From<OutputFormat> for flagquiz_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => flagquiz_domain::OutputFormat::Text,
            OutputFormat::Json => flagquiz_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for guess-the-flag
#[derive(Parser, Debug)]
#[command(name = "guess-the-flag")]
#[command(author, version, about = "Guess the Flag - tap the flag that matches the country")]
#[command(long_about = r#"
Guess the Flag shows three flags and the name of a country. Type the number
of the matching flag. After every answer a message shows whether you were
right; press Enter to move on. After the last question your final score is
shown and you can play again.

Configuration files are loaded from (in priority order):
1. FLAGQUIZ_<SECTION>__<KEY>   Environment variables
2. --config <path>             Explicit config file
3. ./flagquiz.toml             Project-level config
4. ~/.config/guess-the-flag/config.toml   Global config

Example:
  guess-the-flag
  guess-the-flag --max-questions 5 --seed 42
  guess-the-flag -c France -c Germany -c Italy -c Spain
"#)]
pub struct Cli {
    /// Number of questions per game
    #[arg(short = 'n', long, value_name = "N")]
    pub max_questions: Option<u32>,

    /// Seed for reproducible rounds
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Countries to draw flags from (can be specified multiple times)
    #[arg(short, long = "country", value_name = "COUNTRY")]
    pub countries: Vec<String>,

    /// Output format for finished games
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// List the known countries and exit
    #[arg(long)]
    pub list_countries: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_overrides() {
        let cli = Cli::parse_from([
            "guess-the-flag",
            "-n",
            "5",
            "--seed",
            "42",
            "-c",
            "France",
            "--country",
            "Spain",
            "--output",
            "json",
            "-vv",
        ]);
        assert_eq!(cli.max_questions, Some(5));
        assert_eq!(cli.seed, Some(42));
        assert_eq!(cli.countries, vec!["France", "Spain"]);
        assert!(matches!(cli.output, Some(OutputFormat::Json)));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["guess-the-flag"]);
        assert!(cli.max_questions.is_none());
        assert!(cli.countries.is_empty());
        assert!(cli.output.is_none());
        assert!(!cli.no_color);
    }
}
