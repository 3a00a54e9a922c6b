//! Infrastructure layer for guess-the-flag
//!
//! This crate contains adapters for the outside world, currently
//! configuration file discovery, loading and validation.

pub mod config;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileGameConfig, FileOutputConfig,
    FileOutputFormat, FileReplConfig,
};
