//! CLI entrypoint for Guess the Flag
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result};
use clap::Parser;
use flagquiz_application::PlayQuizUseCase;
use flagquiz_domain::Country;
use flagquiz_infrastructure::{ConfigLoader, FileConfig};
use flagquiz_presentation::{
    Cli, ConsoleFormatter, ConsoleProgress, OutputConfig, ReplConfig, TerminalPlayer,
};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        let mut file_config = load_config(&cli)?;
        apply_cli_overrides(&mut file_config, &cli);
        match file_config.validate() {
            Ok(()) => println!("\nConfiguration is valid"),
            Err(e) => println!("\nConfiguration is invalid: {}", e),
        }
        return Ok(());
    }

    if cli.list_countries {
        for country in Country::ALL {
            println!("{} {}", country.flag_emoji(), country);
        }
        return Ok(());
    }

    // === Configuration ===
    let mut file_config = load_config(&cli)?;
    apply_cli_overrides(&mut file_config, &cli);

    let quiz_config = file_config
        .to_quiz_config()
        .context("Invalid game configuration")?;

    let output_config = OutputConfig {
        format: file_config.output.format.unwrap_or_default(),
        color: file_config.output.color,
    };
    let repl_config = ReplConfig {
        history_file: file_config.repl.history_file.as_ref().map(PathBuf::from),
    };

    if !output_config.color {
        colored::control::set_override(false);
    }

    info!(
        "Starting Guess the Flag ({} questions, {} countries)",
        quiz_config.rules.max_questions(),
        quiz_config.pool.len()
    );

    // === Dependency Injection ===
    let mut player = TerminalPlayer::new(&repl_config, output_config.screen_stream())?;
    let progress = ConsoleProgress::new(&output_config);
    let mut use_case = PlayQuizUseCase::new(quiz_config.build_session());

    progress.show(&ConsoleFormatter::banner());
    let output = use_case.execute_with_progress(&mut player, &progress)?;

    if let Some(best) = output.best_score() {
        info!(
            "Played {} game(s), best score {}",
            output.games.len(),
            best
        );
    }
    progress.show("Bye!");

    Ok(())
}

fn load_config(cli: &Cli) -> Result<FileConfig> {
    if cli.no_config {
        return Ok(ConfigLoader::load_defaults());
    }
    ConfigLoader::load(cli.config.as_deref())
        .map_err(|e| anyhow::anyhow!("{}", e))
        .context("Failed to load configuration")
}

/// Command-line flags take priority over every config source
fn apply_cli_overrides(config: &mut FileConfig, cli: &Cli) {
    if let Some(max_questions) = cli.max_questions {
        config.game.max_questions = max_questions;
    }
    if let Some(seed) = cli.seed {
        config.game.seed = Some(seed);
    }
    if !cli.countries.is_empty() {
        config.game.countries = cli.countries.clone();
    }
    if let Some(format) = cli.output {
        config.output.format = Some(format.into());
    }
    if cli.no_color {
        config.output.color = false;
    }
}
