//! Application-level configuration.

mod quiz_config;

pub use quiz_config::QuizConfig;
