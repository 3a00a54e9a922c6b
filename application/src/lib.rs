//! Application layer for guess-the-flag
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::QuizConfig;
pub use ports::{
    player_input::{PlayerChoice, PlayerInputError, PlayerInputPort, ScriptedPlayer},
    progress::{NoProgress, QuizProgressNotifier},
};
pub use use_cases::play_quiz::{PlayQuizError, PlayQuizOutput, PlayQuizUseCase};
