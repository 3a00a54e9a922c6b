//! Progress notification port
//!
//! Defines the interface for reporting game events while a quiz runs.

use flagquiz_domain::{DomainError, GameSummary, Outcome, Round, ScoreBoard};

/// Callback for game events during a quiz
///
/// Implementations live in the presentation layer and render the round,
/// score and messages in whatever way they like.
pub trait QuizProgressNotifier {
    /// Called when a round is ready to be shown
    fn on_round_start(&self, round: &Round, scoreboard: &ScoreBoard);

    /// Called after an answer to `round` was recorded
    fn on_answer(&self, round: &Round, outcome: &Outcome, scoreboard: &ScoreBoard);

    /// Called when the final answer has been acknowledged
    fn on_game_over(&self, summary: &GameSummary);

    /// Called when a choice was rejected; the round is unchanged
    fn on_invalid_choice(&self, _index: usize, _error: &DomainError) {}

    /// Called after a new game was started from the game-over screen
    fn on_restart(&self, _round: &Round) {}
}

/// No-op progress notifier for when nothing should be rendered
pub struct NoProgress;

impl QuizProgressNotifier for NoProgress {
    fn on_round_start(&self, _round: &Round, _scoreboard: &ScoreBoard) {}
    fn on_answer(&self, _round: &Round, _outcome: &Outcome, _scoreboard: &ScoreBoard) {}
    fn on_game_over(&self, _summary: &GameSummary) {}
}
