//! Quiz rules value object

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Number of questions in a game when nothing else is configured
pub const DEFAULT_MAX_QUESTIONS: u32 = 8;

/// Rules that bound a single game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawQuizRules")]
pub struct QuizRules {
    max_questions: u32,
}

#[derive(Deserialize)]
struct RawQuizRules {
    max_questions: u32,
}

impl TryFrom<RawQuizRules> for QuizRules {
    type Error = DomainError;

    fn try_from(raw: RawQuizRules) -> Result<Self, Self::Error> {
        Self::new(raw.max_questions)
    }
}

impl QuizRules {
    /// Create rules for a game of `max_questions` answers
    pub fn new(max_questions: u32) -> Result<Self, DomainError> {
        if max_questions == 0 {
            return Err(DomainError::InvalidMaxQuestions);
        }
        Ok(Self { max_questions })
    }

    pub fn max_questions(&self) -> u32 {
        self.max_questions
    }
}

impl Default for QuizRules {
    fn default() -> Self {
        Self {
            max_questions: DEFAULT_MAX_QUESTIONS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_eight_questions() {
        assert_eq!(QuizRules::default().max_questions(), 8);
    }

    #[test]
    fn test_zero_questions_rejected() {
        assert_eq!(QuizRules::new(0), Err(DomainError::InvalidMaxQuestions));
    }

    #[test]
    fn test_single_question_allowed() {
        assert_eq!(QuizRules::new(1).unwrap().max_questions(), 1);
    }

    #[test]
    fn test_deserialize_rejects_zero_questions() {
        assert!(serde_json::from_str::<QuizRules>(r#"{"max_questions":0}"#).is_err());
    }

    #[test]
    fn test_deserialize_keeps_field_shape() {
        let rules: QuizRules = serde_json::from_str(r#"{"max_questions":3}"#).unwrap();
        assert_eq!(rules.max_questions(), 3);
        assert_eq!(
            serde_json::to_string(&rules).unwrap(),
            r#"{"max_questions":3}"#
        );
    }
}
