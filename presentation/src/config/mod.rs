//! Presentation-level configuration
//!
//! Configuration for output formatting and terminal input.

use flagquiz_domain::OutputFormat;
use std::path::PathBuf;

/// Output configuration for the presentation layer
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// How finished games are reported
    pub format: OutputFormat,
    /// Enable colored terminal output
    pub color: bool,
}

impl OutputConfig {
    /// Where interactive screens are written
    ///
    /// JSON mode keeps stdout for game summaries only.
    pub fn screen_stream(&self) -> ScreenStream {
        match self.format {
            OutputFormat::Text => ScreenStream::Stdout,
            OutputFormat::Json => ScreenStream::Stderr,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            color: true,
        }
    }
}

/// Standard stream that receives banners, rounds and notices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScreenStream {
    #[default]
    Stdout,
    Stderr,
}

impl ScreenStream {
    pub fn print(self, text: &str) {
        match self {
            ScreenStream::Stdout => println!("{}", text),
            ScreenStream::Stderr => eprintln!("{}", text),
        }
    }
}

/// REPL configuration for the presentation layer
#[derive(Debug, Clone, Default)]
pub struct ReplConfig {
    /// Path to history file; `None` uses the platform data directory
    pub history_file: Option<PathBuf>,
}

impl ReplConfig {
    /// History file to load and save, if any location is available
    pub fn resolved_history_file(&self) -> Option<PathBuf> {
        self.history_file.clone().or_else(|| {
            dirs::data_dir().map(|p| p.join("guess-the-flag").join("history.txt"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_screens_on_stdout() {
        assert_eq!(OutputConfig::default().screen_stream(), ScreenStream::Stdout);
    }

    #[test]
    fn test_json_screens_on_stderr() {
        let config = OutputConfig {
            format: OutputFormat::Json,
            color: true,
        };
        assert_eq!(config.screen_stream(), ScreenStream::Stderr);
    }

    #[test]
    fn test_explicit_history_file_wins() {
        let config = ReplConfig {
            history_file: Some(PathBuf::from("/tmp/flags.txt")),
        };
        assert_eq!(
            config.resolved_history_file(),
            Some(PathBuf::from("/tmp/flags.txt"))
        );
    }
}
