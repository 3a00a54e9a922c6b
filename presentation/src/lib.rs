//! Presentation layer for guess-the-flag
//!
//! This crate contains CLI definitions, output formatters,
//! progress reporters, and the interactive terminal player.

pub mod cli;
pub mod config;
pub mod game;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::{Cli, OutputFormat};
pub use config::{OutputConfig, ReplConfig, ScreenStream};
pub use game::terminal::TerminalPlayer;
pub use output::console::ConsoleFormatter;
pub use progress::reporter::ConsoleProgress;
