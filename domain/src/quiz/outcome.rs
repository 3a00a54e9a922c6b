//! Answer outcome value object

use crate::core::country::Country;
use serde::{Deserialize, Serialize};

/// Result of a single answer submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum Outcome {
    Correct,
    /// The player tapped the flag of `tapped`
    Incorrect { tapped: Country },
}

impl Outcome {
    pub fn is_correct(&self) -> bool {
        matches!(self, Outcome::Correct)
    }

    /// Title of the message shown before the next round
    pub fn title(&self) -> String {
        match self {
            Outcome::Correct => "Correct".to_string(),
            Outcome::Incorrect { tapped } => format!("Incorrect, that is the flag of {}", tapped),
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.title())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_titles() {
        assert_eq!(Outcome::Correct.title(), "Correct");
        assert_eq!(
            Outcome::Incorrect {
                tapped: Country::Germany
            }
            .title(),
            "Incorrect, that is the flag of Germany"
        );
    }

    #[test]
    fn test_serialize_tagged() {
        let json = serde_json::to_string(&Outcome::Incorrect {
            tapped: Country::UnitedKingdom,
        })
        .unwrap();
        assert_eq!(json, r#"{"result":"incorrect","tapped":"UK"}"#);
    }
}
