//! Quiz session (Entity)
//!
//! [`QuizSession`] owns every piece of mutable game state and enforces the
//! two-phase answer/acknowledge cycle:
//!
//! ```text
//! AwaitingAnswer ──submit_answer──▶ AwaitingAcknowledgment
//!       ▲                                   │
//!       └────────advance (< max)────────────┤
//!                                           │ advance (== max)
//!                                           ▼
//!       ◀───────────restart──────────── GameOver
//! ```
//!
//! Randomness comes from an injected [`Rng`], so a seeded session replays
//! the same sequence of rounds.

use super::outcome::Outcome;
use super::pool::CountryPool;
use super::round::{ChoiceIndex, Round};
use super::rules::QuizRules;
use super::summary::{GameSummary, ScoreBoard};
use crate::core::country::Country;
use crate::core::error::DomainError;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Where a session is in the answer/acknowledge cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// A round is on screen and waits for a tap
    AwaitingAnswer,
    /// The result message is shown and must be dismissed
    AwaitingAcknowledgment,
    /// All questions answered; only `restart` leaves this phase
    GameOver,
}

impl SessionPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionPhase::AwaitingAnswer => "awaiting an answer",
            SessionPhase::AwaitingAcknowledgment => "awaiting acknowledgment",
            SessionPhase::GameOver => "game over",
        }
    }
}

impl std::fmt::Display for SessionPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Result of [`QuizSession::advance`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    NextRound(Round),
    GameOver(GameSummary),
}

/// A single player's quiz session
#[derive(Debug)]
pub struct QuizSession<R: Rng = StdRng> {
    pool: CountryPool,
    rules: QuizRules,
    /// Shuffled permutation of the pool; the first three entries are on screen
    countries: Vec<Country>,
    correct_answer: ChoiceIndex,
    score: u32,
    questions_asked: u32,
    selected: Option<ChoiceIndex>,
    last_outcome: Option<Outcome>,
    phase: SessionPhase,
    rng: R,
}

impl QuizSession<StdRng> {
    /// Session whose rounds are fully determined by `seed`
    pub fn with_seed(pool: CountryPool, rules: QuizRules, seed: u64) -> Self {
        Self::new(pool, rules, StdRng::seed_from_u64(seed))
    }

    /// Session seeded from operating system entropy
    pub fn from_entropy(pool: CountryPool, rules: QuizRules) -> Self {
        Self::new(pool, rules, StdRng::from_entropy())
    }
}

impl<R: Rng> QuizSession<R> {
    /// Create a session with round 1 already drawn
    pub fn new(pool: CountryPool, rules: QuizRules, mut rng: R) -> Self {
        let mut countries = pool.countries().to_vec();
        countries.shuffle(&mut rng);
        let correct_answer = ChoiceIndex::random(&mut rng);

        Self {
            pool,
            rules,
            countries,
            correct_answer,
            score: 0,
            questions_asked: 0,
            selected: None,
            last_outcome: None,
            phase: SessionPhase::AwaitingAnswer,
            rng,
        }
    }

    // ==================== Transitions ====================

    /// Record the player's tap on the flag at `choice`
    pub fn submit_answer(&mut self, choice: ChoiceIndex) -> Result<Outcome, DomainError> {
        if self.phase != SessionPhase::AwaitingAnswer {
            return Err(DomainError::NotAwaitingAnswer {
                phase: self.phase.as_str(),
            });
        }

        let round = self.current_round();
        let outcome = if round.is_correct(choice) {
            self.score += 1;
            Outcome::Correct
        } else {
            Outcome::Incorrect {
                tapped: round.choice(choice),
            }
        };

        self.questions_asked += 1;
        self.selected = Some(choice);
        self.last_outcome = Some(outcome);
        self.phase = SessionPhase::AwaitingAcknowledgment;
        Ok(outcome)
    }

    /// Same as [`submit_answer`](Self::submit_answer) for an unchecked index
    pub fn submit_answer_at(&mut self, index: usize) -> Result<Outcome, DomainError> {
        let choice = ChoiceIndex::new(index)?;
        self.submit_answer(choice)
    }

    /// Move past the acknowledged result message
    ///
    /// Once the last question has been answered this ends the game. Calling
    /// it again after the game is over returns the same summary.
    pub fn advance(&mut self) -> Result<Advance, DomainError> {
        match self.phase {
            SessionPhase::AwaitingAnswer => Err(DomainError::NotAwaitingAcknowledgment {
                phase: self.phase.as_str(),
            }),
            SessionPhase::GameOver => Ok(Advance::GameOver(self.summary())),
            SessionPhase::AwaitingAcknowledgment => {
                if self.questions_asked >= self.rules.max_questions() {
                    self.phase = SessionPhase::GameOver;
                    return Ok(Advance::GameOver(self.summary()));
                }

                self.next_round();
                self.phase = SessionPhase::AwaitingAnswer;
                Ok(Advance::NextRound(self.current_round()))
            }
        }
    }

    /// Start a new game from any phase
    pub fn restart(&mut self) -> Round {
        self.score = 0;
        self.questions_asked = 0;
        self.last_outcome = None;
        self.next_round();
        self.phase = SessionPhase::AwaitingAnswer;
        self.current_round()
    }

    fn next_round(&mut self) {
        self.countries.shuffle(&mut self.rng);
        self.correct_answer = ChoiceIndex::random(&mut self.rng);
        self.selected = None;
    }

    // ==================== Queries ====================

    pub fn current_round(&self) -> Round {
        Round::from_prefix(&self.countries, self.correct_answer)
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn questions_asked(&self) -> u32 {
        self.questions_asked
    }

    pub fn max_questions(&self) -> u32 {
        self.rules.max_questions()
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == SessionPhase::GameOver
    }

    /// Flag tapped in the current round, cleared when the next round starts
    pub fn selected(&self) -> Option<ChoiceIndex> {
        self.selected
    }

    pub fn last_outcome(&self) -> Option<Outcome> {
        self.last_outcome
    }

    pub fn pool(&self) -> &CountryPool {
        &self.pool
    }

    pub fn rules(&self) -> QuizRules {
        self.rules
    }

    pub fn scoreboard(&self) -> ScoreBoard {
        ScoreBoard {
            score: self.score,
            questions_asked: self.questions_asked,
            max_questions: self.rules.max_questions(),
        }
    }

    pub fn summary(&self) -> GameSummary {
        GameSummary {
            final_score: self.score,
            total: self.rules.max_questions(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(seed: u64) -> QuizSession {
        QuizSession::with_seed(CountryPool::default(), QuizRules::default(), seed)
    }

    fn wrong_choice(round: &Round) -> ChoiceIndex {
        ChoiceIndex::all()
            .find(|c| *c != round.correct_answer())
            .unwrap()
    }

    fn assert_valid_round(round: &Round) {
        let [a, b, c] = *round.choices();
        assert!(a != b && b != c && a != c, "choices not distinct: {round:?}");
        assert!(round.correct_answer().get() < 3);
    }

    fn assert_score_invariant(session: &QuizSession) {
        assert!(session.score() <= session.questions_asked());
        assert!(session.questions_asked() <= session.max_questions());
    }

    #[test]
    fn test_initial_state() {
        let session = session(1);
        assert_eq!(session.score(), 0);
        assert_eq!(session.questions_asked(), 0);
        assert_eq!(session.max_questions(), 8);
        assert_eq!(session.phase(), SessionPhase::AwaitingAnswer);
        assert_eq!(session.selected(), None);
        assert_eq!(session.last_outcome(), None);
        assert_valid_round(&session.current_round());
    }

    #[test]
    fn test_correct_answer_scores() {
        let mut session = session(2);
        let round = session.current_round();

        let outcome = session.submit_answer(round.correct_answer()).unwrap();

        assert_eq!(outcome, Outcome::Correct);
        assert_eq!(session.score(), 1);
        assert_eq!(session.questions_asked(), 1);
        assert_eq!(session.phase(), SessionPhase::AwaitingAcknowledgment);
        assert_eq!(session.selected(), Some(round.correct_answer()));
    }

    #[test]
    fn test_incorrect_answer_names_tapped_flag() {
        let mut session = session(3);
        let round = session.current_round();
        let wrong = wrong_choice(&round);

        let outcome = session.submit_answer(wrong).unwrap();

        assert_eq!(
            outcome,
            Outcome::Incorrect {
                tapped: round.choice(wrong)
            }
        );
        assert_eq!(session.score(), 0);
        assert_eq!(session.questions_asked(), 1);
    }

    #[test]
    fn test_double_submit_rejected_without_state_change() {
        let mut session = session(4);
        let round = session.current_round();
        session.submit_answer(round.correct_answer()).unwrap();

        let err = session.submit_answer(round.correct_answer()).unwrap_err();

        assert!(err.is_wrong_phase());
        assert_eq!(session.score(), 1);
        assert_eq!(session.questions_asked(), 1);
        assert_eq!(session.current_round(), round);
    }

    #[test]
    fn test_out_of_range_index_rejected() {
        let mut session = session(5);
        let round = session.current_round();

        let err = session.submit_answer_at(3).unwrap_err();

        assert_eq!(err, DomainError::InvalidChoice { index: 3 });
        assert_eq!(session.questions_asked(), 0);
        assert_eq!(session.phase(), SessionPhase::AwaitingAnswer);
        assert_eq!(session.current_round(), round);
    }

    #[test]
    fn test_advance_before_answer_rejected() {
        let mut session = session(6);
        let round = session.current_round();

        let err = session.advance().unwrap_err();

        assert!(err.is_wrong_phase());
        assert_eq!(session.phase(), SessionPhase::AwaitingAnswer);
        assert_eq!(session.current_round(), round);
    }

    #[test]
    fn test_advance_draws_next_round_and_clears_selection() {
        let mut session = session(7);
        let round = session.current_round();
        session.submit_answer(round.correct_answer()).unwrap();

        let next = match session.advance().unwrap() {
            Advance::NextRound(next) => next,
            other => panic!("expected next round, got {other:?}"),
        };

        assert_valid_round(&next);
        assert_eq!(next, session.current_round());
        assert_eq!(session.selected(), None);
        assert_eq!(session.phase(), SessionPhase::AwaitingAnswer);
    }

    #[test]
    fn test_five_correct_three_incorrect() {
        let mut session = session(8);
        let plan = [true, false, true, true, false, true, false, true];

        let mut last = None;
        for correct in plan {
            let round = session.current_round();
            let choice = if correct {
                round.correct_answer()
            } else {
                wrong_choice(&round)
            };
            session.submit_answer(choice).unwrap();
            assert_score_invariant(&session);
            last = Some(session.advance().unwrap());
        }

        assert_eq!(
            last,
            Some(Advance::GameOver(GameSummary {
                final_score: 5,
                total: 8
            }))
        );
        assert!(session.is_game_over());
    }

    #[test]
    fn test_game_over_does_not_regenerate_round() {
        let mut session = QuizSession::with_seed(
            CountryPool::default(),
            QuizRules::new(1).unwrap(),
            9,
        );
        let round = session.current_round();
        session.submit_answer(round.correct_answer()).unwrap();

        let result = session.advance().unwrap();

        assert_eq!(
            result,
            Advance::GameOver(GameSummary {
                final_score: 1,
                total: 1
            })
        );
        assert_eq!(session.current_round(), round);
        assert_eq!(session.selected(), Some(round.correct_answer()));

        // Repeated advance is idempotent
        assert_eq!(session.advance().unwrap(), result);
        assert_eq!(session.current_round(), round);
    }

    #[test]
    fn test_submit_after_game_over_rejected() {
        let mut session = QuizSession::with_seed(
            CountryPool::default(),
            QuizRules::new(1).unwrap(),
            10,
        );
        session.submit_answer_at(0).unwrap();
        session.advance().unwrap();
        let score = session.score();

        let err = session.submit_answer_at(0).unwrap_err();

        assert_eq!(err, DomainError::NotAwaitingAnswer { phase: "game over" });
        assert_eq!(session.score(), score);
        assert_eq!(session.questions_asked(), 1);
    }

    #[test]
    fn test_restart_from_game_over() {
        let mut session = QuizSession::with_seed(
            CountryPool::default(),
            QuizRules::new(2).unwrap(),
            11,
        );
        for _ in 0..2 {
            let round = session.current_round();
            session.submit_answer(round.correct_answer()).unwrap();
            session.advance().unwrap();
        }
        assert!(session.is_game_over());

        let round = session.restart();

        assert_valid_round(&round);
        assert_eq!(round, session.current_round());
        assert_eq!(session.score(), 0);
        assert_eq!(session.questions_asked(), 0);
        assert_eq!(session.phase(), SessionPhase::AwaitingAnswer);
        assert_eq!(session.last_outcome(), None);
    }

    #[test]
    fn test_restart_mid_game() {
        let mut session = session(12);
        let round = session.current_round();
        session.submit_answer(round.correct_answer()).unwrap();

        session.restart();

        assert_eq!(session.score(), 0);
        assert_eq!(session.questions_asked(), 0);
        assert_eq!(session.selected(), None);
        assert_eq!(session.phase(), SessionPhase::AwaitingAnswer);
    }

    #[test]
    fn test_same_seed_same_rounds() {
        let mut a = session(42);
        let mut b = session(42);

        for _ in 0..5 {
            assert_eq!(a.current_round(), b.current_round());
            a.submit_answer_at(0).unwrap();
            b.submit_answer_at(0).unwrap();
            a.advance().unwrap();
            b.advance().unwrap();
        }
    }

    #[test]
    fn test_rounds_valid_across_seeds() {
        for seed in 0..200 {
            let mut session = session(seed);
            assert_valid_round(&session.current_round());
            for _ in 0..7 {
                session.submit_answer_at((seed % 3) as usize).unwrap();
                assert_score_invariant(&session);
                match session.advance().unwrap() {
                    Advance::NextRound(round) => {
                        assert_valid_round(&round);
                        for country in round.choices() {
                            assert!(session.pool().contains(*country));
                        }
                    }
                    Advance::GameOver(_) => panic!("game ended early"),
                }
            }
        }
    }

    #[test]
    fn test_correct_index_covers_all_positions() {
        let mut seen = [false; 3];
        for seed in 0..100 {
            seen[session(seed).current_round().correct_answer().get()] = true;
        }
        assert_eq!(seen, [true; 3]);
    }

    #[test]
    fn test_minimal_pool_uses_every_country() {
        let pool = CountryPool::new([Country::Spain, Country::Italy, Country::France]).unwrap();
        let session = QuizSession::with_seed(pool, QuizRules::default(), 13);
        let mut choices = session.current_round().choices().to_vec();
        choices.sort();
        assert_eq!(
            choices,
            vec![Country::France, Country::Italy, Country::Spain]
        );
    }
}
