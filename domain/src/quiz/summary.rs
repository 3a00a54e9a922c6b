//! Score views

use serde::{Deserialize, Serialize};

/// Running score shown while a game is in progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBoard {
    pub score: u32,
    pub questions_asked: u32,
    pub max_questions: u32,
}

impl ScoreBoard {
    /// Message shown under each outcome title
    pub fn message(&self) -> String {
        format!("Your score is {}", self.score)
    }

    /// Questions still to be answered in this game
    pub fn remaining(&self) -> u32 {
        self.max_questions.saturating_sub(self.questions_asked)
    }
}

/// Final result of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    pub final_score: u32,
    pub total: u32,
}

impl GameSummary {
    pub fn message(&self) -> String {
        format!(
            "Your final score is {} out of {}.",
            self.final_score, self.total
        )
    }

    /// Share of correct answers in `0.0..=1.0`
    pub fn accuracy(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            f64::from(self.final_score) / f64::from(self.total)
        }
    }

    pub fn is_perfect(&self) -> bool {
        self.final_score == self.total
    }
}
