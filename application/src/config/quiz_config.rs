//! Quiz configuration — how sessions are built.
//!
//! [`QuizConfig`] groups the parameters that shape a session: rules, the
//! country pool, and an optional seed for reproducible rounds.

use flagquiz_domain::{CountryPool, QuizRules, QuizSession};
use rand::rngs::StdRng;

/// Session construction parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuizConfig {
    /// Game rules (number of questions).
    pub rules: QuizRules,
    /// Countries rounds are drawn from.
    pub pool: CountryPool,
    /// Seed for the round generator. `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl QuizConfig {
    // ==================== Builder Methods ====================

    pub fn with_rules(mut self, rules: QuizRules) -> Self {
        self.rules = rules;
        self
    }

    pub fn with_pool(mut self, pool: CountryPool) -> Self {
        self.pool = pool;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Create a session with round 1 drawn
    pub fn build_session(&self) -> QuizSession<StdRng> {
        match self.seed {
            Some(seed) => QuizSession::with_seed(self.pool.clone(), self.rules, seed),
            None => QuizSession::from_entropy(self.pool.clone(), self.rules),
        }
    }
}
