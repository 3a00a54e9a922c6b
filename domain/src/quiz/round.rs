//! Round value objects

use crate::core::country::Country;
use crate::core::error::DomainError;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Number of flags shown in every round
pub const CHOICES_PER_ROUND: usize = 3;

/// Index of one of the flags in a round, always in `0..CHOICES_PER_ROUND`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct ChoiceIndex(usize);

impl ChoiceIndex {
    pub fn new(index: usize) -> Result<Self, DomainError> {
        if index < CHOICES_PER_ROUND {
            Ok(Self(index))
        } else {
            Err(DomainError::InvalidChoice { index })
        }
    }

    /// Draw an index uniformly from `0..CHOICES_PER_ROUND`
    pub(crate) fn random<R: Rng>(rng: &mut R) -> Self {
        Self(rng.gen_range(0..CHOICES_PER_ROUND))
    }

    /// All valid indices in presentation order
    pub fn all() -> impl Iterator<Item = ChoiceIndex> {
        (0..CHOICES_PER_ROUND).map(ChoiceIndex)
    }

    pub fn get(&self) -> usize {
        self.0
    }

    /// 1-based number shown to players
    pub fn label(&self) -> usize {
        self.0 + 1
    }
}

impl TryFrom<usize> for ChoiceIndex {
    type Error = DomainError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Self::new(index)
    }
}

impl From<ChoiceIndex> for usize {
    fn from(index: ChoiceIndex) -> Self {
        index.0
    }
}

/// One question: three distinct flags plus which of them is correct
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Round {
    choices: [Country; CHOICES_PER_ROUND],
    correct_answer: ChoiceIndex,
}

impl Round {
    /// Build a round from the first three entries of a shuffled country list
    ///
    /// # Panics
    /// Panics if `countries` has fewer than three entries. Callers hold a
    /// [`CountryPool`](super::pool::CountryPool), which guarantees the length.
    pub(crate) fn from_prefix(countries: &[Country], correct_answer: ChoiceIndex) -> Self {
        let choices = [countries[0], countries[1], countries[2]];
        Self {
            choices,
            correct_answer,
        }
    }

    /// Flags in presentation order
    pub fn choices(&self) -> &[Country; CHOICES_PER_ROUND] {
        &self.choices
    }

    pub fn choice(&self, index: ChoiceIndex) -> Country {
        self.choices[index.get()]
    }

    pub fn correct_answer(&self) -> ChoiceIndex {
        self.correct_answer
    }

    /// Country whose name the player is asked to find
    pub fn target(&self) -> Country {
        self.choice(self.correct_answer)
    }

    pub fn is_correct(&self, index: ChoiceIndex) -> bool {
        index == self.correct_answer
    }
}
