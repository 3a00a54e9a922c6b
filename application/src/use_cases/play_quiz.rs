//! Play Quiz use case
//!
//! Drives a [`QuizSession`] through rounds using a [`PlayerInputPort`] until
//! the player quits or declines to play again.

use crate::ports::player_input::{PlayerChoice, PlayerInputError, PlayerInputPort};
use crate::ports::progress::{NoProgress, QuizProgressNotifier};
use flagquiz_domain::{Advance, DomainError, GameSummary, QuizSession, SessionPhase};
use rand::Rng;
use rand::rngs::StdRng;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur while playing
#[derive(Error, Debug)]
pub enum PlayQuizError {
    #[error("Game rule violated: {0}")]
    Domain(#[from] DomainError),

    #[error("Player input failed: {0}")]
    Input(#[from] PlayerInputError),
}

/// Output of the PlayQuiz use case
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayQuizOutput {
    /// Summaries of every game that reached game over, in order
    pub games: Vec<GameSummary>,
    /// Player left before finishing the last game
    pub quit_early: bool,
}

impl PlayQuizOutput {
    pub fn best_score(&self) -> Option<u32> {
        self.games.iter().map(|g| g.final_score).max()
    }
}

/// Use case for playing one or more games in a row
pub struct PlayQuizUseCase<R: Rng = StdRng> {
    session: QuizSession<R>,
}

impl<R: Rng> PlayQuizUseCase<R> {
    pub fn new(session: QuizSession<R>) -> Self {
        Self { session }
    }

    pub fn session(&self) -> &QuizSession<R> {
        &self.session
    }

    /// Execute the use case with default (no-op) progress
    pub fn execute(
        &mut self,
        player: &mut dyn PlayerInputPort,
    ) -> Result<PlayQuizOutput, PlayQuizError> {
        self.execute_with_progress(player, &NoProgress)
    }

    /// Execute the use case with progress callbacks
    pub fn execute_with_progress(
        &mut self,
        player: &mut dyn PlayerInputPort,
        progress: &dyn QuizProgressNotifier,
    ) -> Result<PlayQuizOutput, PlayQuizError> {
        let mut output = PlayQuizOutput::default();

        if self.session.phase() != SessionPhase::AwaitingAnswer {
            debug!("Session in phase '{}', restarting", self.session.phase());
            self.session.restart();
        }

        info!(
            "Starting game: {} questions, {} countries",
            self.session.max_questions(),
            self.session.pool().len()
        );

        let mut round = self.session.current_round();
        progress.on_round_start(&round, &self.session.scoreboard());

        loop {
            let choice = match player.choose_flag(&round, &self.session.scoreboard()) {
                Ok(PlayerChoice::Flag(index)) => index,
                Ok(PlayerChoice::Quit) | Err(PlayerInputError::Cancelled) => {
                    return Ok(self.quit(output));
                }
                Err(e) => return Err(e.into()),
            };

            let outcome = match self.session.submit_answer_at(choice) {
                Ok(outcome) => outcome,
                Err(e @ DomainError::InvalidChoice { .. }) => {
                    warn!("Rejected choice {}: {}", choice, e);
                    progress.on_invalid_choice(choice, &e);
                    continue;
                }
                Err(e) => return Err(e.into()),
            };

            let scoreboard = self.session.scoreboard();
            debug!(
                "Answer {}/{}: {}",
                scoreboard.questions_asked, scoreboard.max_questions, outcome
            );
            progress.on_answer(&round, &outcome, &scoreboard);

            match player.acknowledge_outcome(&outcome, &scoreboard) {
                Ok(()) => {}
                Err(PlayerInputError::Cancelled) => return Ok(self.quit(output)),
                Err(e) => return Err(e.into()),
            }

            match self.session.advance()? {
                Advance::NextRound(next) => {
                    round = next;
                    progress.on_round_start(&round, &self.session.scoreboard());
                }
                Advance::GameOver(summary) => {
                    info!("Game over: {}", summary.message());
                    output.games.push(summary);
                    progress.on_game_over(&summary);

                    let again = match player.play_again(&summary) {
                        Ok(again) => again,
                        Err(PlayerInputError::Cancelled) => false,
                        Err(e) => return Err(e.into()),
                    };
                    if !again {
                        return Ok(output);
                    }

                    round = self.session.restart();
                    debug!("Restarted session");
                    progress.on_restart(&round);
                    progress.on_round_start(&round, &self.session.scoreboard());
                }
            }
        }
    }

    fn quit(&self, mut output: PlayQuizOutput) -> PlayQuizOutput {
        info!(
            "Player quit after {} of {} questions",
            self.session.questions_asked(),
            self.session.max_questions()
        );
        output.quit_early = true;
        output
    }
}
