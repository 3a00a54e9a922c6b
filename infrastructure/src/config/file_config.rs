//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

use flagquiz_application::QuizConfig;
use flagquiz_domain::{
    CountryPool, DEFAULT_MAX_QUESTIONS, DomainError, OutputFormat, QuizRules,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

// Re-export OutputFormat from domain for convenience
pub use flagquiz_domain::OutputFormat as FileOutputFormat;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("max_questions cannot be 0")]
    ZeroMaxQuestions,

    #[error("unknown country in [game].countries: {0}")]
    UnknownCountry(String),

    #[error("duplicate country in [game].countries: {0}")]
    DuplicateCountry(String),

    #[error("[game].countries needs at least {required} entries, got {actual}")]
    PoolTooSmall { required: usize, actual: usize },

    #[error("invalid [game] section: {0}")]
    Invalid(String),
}

impl From<DomainError> for ConfigValidationError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::UnknownCountry(name) => ConfigValidationError::UnknownCountry(name),
            DomainError::DuplicateCountry(name) => ConfigValidationError::DuplicateCountry(name),
            DomainError::PoolTooSmall { required, actual } => {
                ConfigValidationError::PoolTooSmall { required, actual }
            }
            DomainError::InvalidMaxQuestions => ConfigValidationError::ZeroMaxQuestions,
            other => ConfigValidationError::Invalid(other.to_string()),
        }
    }
}

/// Raw game configuration from TOML (`[game]` section)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGameConfig {
    /// Questions per game
    pub max_questions: u32,
    /// Country names to draw flags from; empty uses the full catalog
    pub countries: Vec<String>,
    /// Fixed seed for reproducible rounds
    pub seed: Option<u64>,
}

impl Default for FileGameConfig {
    fn default() -> Self {
        Self {
            max_questions: DEFAULT_MAX_QUESTIONS,
            countries: Vec::new(),
            seed: None,
        }
    }
}

/// Raw output configuration from TOML (`[output]` section)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Output format (uses domain type)
    pub format: Option<OutputFormat>,
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            color: true,
        }
    }
}

/// Raw REPL configuration from TOML (`[repl]` section)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileReplConfig {
    /// Path to the input history file
    pub history_file: Option<String>,
}

/// Complete configuration file structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub game: FileGameConfig,
    pub output: FileOutputConfig,
    pub repl: FileReplConfig,
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        self.to_quiz_config().map(|_| ())
    }

    /// Convert into application-level quiz parameters
    pub fn to_quiz_config(&self) -> Result<QuizConfig, ConfigValidationError> {
        let rules = QuizRules::new(self.game.max_questions)?;

        let pool = if self.game.countries.is_empty() {
            CountryPool::default()
        } else {
            CountryPool::from_names(&self.game.countries)?
        };

        Ok(QuizConfig {
            rules,
            pool,
            seed: self.game.seed,
        })
    }
}
