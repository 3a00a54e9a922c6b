//! Domain layer for guess-the-flag
//!
//! This crate contains the game rules, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Round
//!
//! Three distinct flags drawn from a [`CountryPool`] plus the index of the
//! one matching the country name shown to the player.
//!
//! ## Session
//!
//! A [`QuizSession`] runs from start (or restart) to game over. Each answer
//! moves it to `AwaitingAcknowledgment`; acknowledging either draws the next
//! round or, after the last question, ends the game.

pub mod config;
pub mod core;
pub mod quiz;

// Re-export commonly used types
pub use config::OutputFormat;
pub use core::{country::Country, error::DomainError};
pub use quiz::{
    outcome::Outcome,
    pool::CountryPool,
    round::{CHOICES_PER_ROUND, ChoiceIndex, Round},
    rules::{DEFAULT_MAX_QUESTIONS, QuizRules},
    session::{Advance, QuizSession, SessionPhase},
    summary::{GameSummary, ScoreBoard},
};
