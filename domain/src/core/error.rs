//! Domain error types

use thiserror::Error;

/// Domain-level errors
///
/// Every variant describes an invalid invocation. Returning one never
/// changes the state of the object that rejected it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid choice {index}: a round has exactly 3 flags (0, 1 or 2)")]
    InvalidChoice { index: usize },

    #[error("Unknown country: {0}")]
    UnknownCountry(String),

    #[error("Country pool needs at least {required} countries, got {actual}")]
    PoolTooSmall { required: usize, actual: usize },

    #[error("Duplicate country in pool: {0}")]
    DuplicateCountry(String),

    #[error("max_questions must be at least 1")]
    InvalidMaxQuestions,

    #[error("Cannot submit an answer while {phase}")]
    NotAwaitingAnswer { phase: &'static str },

    #[error("Cannot advance while {phase}")]
    NotAwaitingAcknowledgment { phase: &'static str },
}

impl DomainError {
    /// Check if this error comes from calling a session operation in the wrong phase
    pub fn is_wrong_phase(&self) -> bool {
        matches!(
            self,
            DomainError::NotAwaitingAnswer { .. } | DomainError::NotAwaitingAcknowledgment { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_choice_display() {
        let error = DomainError::InvalidChoice { index: 5 };
        assert_eq!(
            error.to_string(),
            "Invalid choice 5: a round has exactly 3 flags (0, 1 or 2)"
        );
    }

    #[test]
    fn test_is_wrong_phase_check() {
        assert!(DomainError::NotAwaitingAnswer { phase: "game over" }.is_wrong_phase());
        assert!(
            DomainError::NotAwaitingAcknowledgment {
                phase: "awaiting an answer"
            }
            .is_wrong_phase()
        );
        assert!(!DomainError::InvalidChoice { index: 3 }.is_wrong_phase());
        assert!(!DomainError::InvalidMaxQuestions.is_wrong_phase());
    }
}
