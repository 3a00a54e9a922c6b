//! Console progress reporting for quiz games

use crate::config::{OutputConfig, ScreenStream};
use crate::output::console::ConsoleFormatter;
use flagquiz_application::QuizProgressNotifier;
use flagquiz_domain::{DomainError, GameSummary, Outcome, OutputFormat, Round, ScoreBoard};

/// Prints rounds, outcomes and the game-over screen
///
/// With [`OutputFormat::Json`] the game-over screen is replaced by a JSON
/// summary on stdout and every other screen moves to stderr, so finished
/// games can be piped into other tools.
pub struct ConsoleProgress {
    format: OutputFormat,
    screens: ScreenStream,
}

impl ConsoleProgress {
    pub fn new(config: &OutputConfig) -> Self {
        Self {
            format: config.format,
            screens: config.screen_stream(),
        }
    }

    pub fn screen_stream(&self) -> ScreenStream {
        self.screens
    }

    /// Print an interactive screen (banner, round, notice)
    pub fn show(&self, text: &str) {
        self.screens.print(text);
    }
}

impl Default for ConsoleProgress {
    fn default() -> Self {
        Self::new(&OutputConfig::default())
    }
}

impl QuizProgressNotifier for ConsoleProgress {
    fn on_round_start(&self, round: &Round, scoreboard: &ScoreBoard) {
        self.show(&ConsoleFormatter::format_round(round, scoreboard));
    }

    fn on_answer(&self, round: &Round, outcome: &Outcome, scoreboard: &ScoreBoard) {
        self.show(&ConsoleFormatter::format_outcome(round, outcome, scoreboard));
    }

    fn on_game_over(&self, summary: &GameSummary) {
        match self.format {
            OutputFormat::Text => println!("{}", ConsoleFormatter::format_game_over(summary)),
            OutputFormat::Json => println!("{}", ConsoleFormatter::format_json(summary)),
        }
    }

    fn on_invalid_choice(&self, index: usize, _error: &DomainError) {
        self.show(&ConsoleFormatter::format_invalid_choice(index));
    }

    fn on_restart(&self, _round: &Round) {
        self.show(&ConsoleFormatter::banner());
    }
}
