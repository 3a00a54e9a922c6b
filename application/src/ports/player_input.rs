//! Player input port.
//!
//! Defines the boundary between the quiz use case and whatever collects the
//! player's decisions (terminal, scripted tests, a GUI).
//!
//! # Flow
//!
//! ```text
//! choose_flag()          -> PlayerChoice::Flag(i) | PlayerChoice::Quit
//!        ↓
//! acknowledge_outcome()  -> dismissal triggers the next round
//!        ↓ (after the last question)
//! play_again()           -> true restarts, false finishes
//! ```
//!
//! # Built-in Implementations
//!
//! - [`ScriptedPlayer`] - Replays a fixed list of choices
//!
//! For interactive use, see `TerminalPlayer` in the presentation layer.

use flagquiz_domain::{GameSummary, Outcome, Round, ScoreBoard};
use std::collections::VecDeque;
use thiserror::Error;

/// Errors raised while collecting player input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlayerInputError {
    /// Player closed the input (e.g. Ctrl+D).
    #[error("Input cancelled")]
    Cancelled,
    /// Terminal read failure.
    #[error("I/O error: {0}")]
    Io(String),
}

/// What the player did when asked to pick a flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerChoice {
    /// Raw 0-based flag index. Not yet validated.
    Flag(usize),
    /// Leave the game.
    Quit,
}

/// Port for collecting player decisions.
pub trait PlayerInputPort {
    /// Ask which of the three flags matches `round.target()`.
    fn choose_flag(
        &mut self,
        round: &Round,
        scoreboard: &ScoreBoard,
    ) -> Result<PlayerChoice, PlayerInputError>;

    /// Wait until the player dismisses the result message.
    fn acknowledge_outcome(
        &mut self,
        outcome: &Outcome,
        scoreboard: &ScoreBoard,
    ) -> Result<(), PlayerInputError>;

    /// Ask whether to start another game after `summary` was shown.
    fn play_again(&mut self, summary: &GameSummary) -> Result<bool, PlayerInputError>;
}

/// Player that replays pre-recorded decisions.
///
/// Once the script runs out it quits, and declines to play again.
#[derive(Debug, Clone, Default)]
pub struct ScriptedPlayer {
    choices: VecDeque<PlayerChoice>,
    replays: VecDeque<bool>,
    acknowledged: usize,
}

impl ScriptedPlayer {
    pub fn new(choices: impl IntoIterator<Item = PlayerChoice>) -> Self {
        Self {
            choices: choices.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Answers to successive "play again?" prompts
    pub fn with_replays(mut self, replays: impl IntoIterator<Item = bool>) -> Self {
        self.replays = replays.into_iter().collect();
        self
    }

    /// Number of result messages dismissed so far
    pub fn acknowledged(&self) -> usize {
        self.acknowledged
    }
}

impl PlayerInputPort for ScriptedPlayer {
    fn choose_flag(
        &mut self,
        _round: &Round,
        _scoreboard: &ScoreBoard,
    ) -> Result<PlayerChoice, PlayerInputError> {
        Ok(self.choices.pop_front().unwrap_or(PlayerChoice::Quit))
    }

    fn acknowledge_outcome(
        &mut self,
        _outcome: &Outcome,
        _scoreboard: &ScoreBoard,
    ) -> Result<(), PlayerInputError> {
        self.acknowledged += 1;
        Ok(())
    }

    fn play_again(&mut self, _summary: &GameSummary) -> Result<bool, PlayerInputError> {
        Ok(self.replays.pop_front().unwrap_or(false))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flagquiz_domain::{CountryPool, QuizRules, QuizSession};

    #[test]
    fn test_scripted_player_quits_when_exhausted() {
        let session = QuizSession::with_seed(CountryPool::default(), QuizRules::default(), 1);
        let round = session.current_round();
        let board = session.scoreboard();
        let mut player = ScriptedPlayer::new([PlayerChoice::Flag(2)]);

        assert_eq!(
            player.choose_flag(&round, &board).unwrap(),
            PlayerChoice::Flag(2)
        );
        assert_eq!(
            player.choose_flag(&round, &board).unwrap(),
            PlayerChoice::Quit
        );
    }

    #[test]
    fn test_scripted_player_replays() {
        let summary = GameSummary {
            final_score: 3,
            total: 8,
        };
        let mut player = ScriptedPlayer::default().with_replays([true]);

        assert!(player.play_again(&summary).unwrap());
        assert!(!player.play_again(&summary).unwrap());
    }

    #[test]
    fn test_error_display() {
        assert_eq!(PlayerInputError::Cancelled.to_string(), "Input cancelled");
        assert_eq!(
            PlayerInputError::Io("broken pipe".to_string()).to_string(),
            "I/O error: broken pipe"
        );
    }
}
