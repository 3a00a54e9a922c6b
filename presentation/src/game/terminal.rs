//! Interactive terminal player
//!
//! Reads the player's decisions from a line editor. Rendering is done by
//! [`ConsoleProgress`](crate::progress::reporter::ConsoleProgress); this
//! adapter only prompts and parses.

use crate::config::{ReplConfig, ScreenStream};
use colored::Colorize;
use flagquiz_application::{PlayerChoice, PlayerInputError, PlayerInputPort};
use flagquiz_domain::{CHOICES_PER_ROUND, GameSummary, Outcome, Round, ScoreBoard};
use rustyline::{Behavior, Config, DefaultEditor};
use rustyline::error::ReadlineError;
use std::path::PathBuf;
use tracing::debug;

/// A parsed line typed at the flag prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputCommand {
    /// 0-based flag index (typed 1-based)
    Choose(usize),
    Quit,
    Help,
    Invalid,
}

impl InputCommand {
    pub fn parse(line: &str) -> Self {
        let line = line.trim().to_ascii_lowercase();
        match line.as_str() {
            "q" | "quit" | "/q" | "/quit" | "/exit" => InputCommand::Quit,
            "h" | "?" | "/h" | "/help" => InputCommand::Help,
            other => match other.parse::<usize>() {
                Ok(n) if n >= 1 => InputCommand::Choose(n - 1),
                _ => InputCommand::Invalid,
            },
        }
    }
}

/// Parse an answer to a yes/no prompt; empty input means yes
pub fn parse_yes_no(line: &str) -> Option<bool> {
    match line.trim().to_ascii_lowercase().as_str() {
        "" | "y" | "yes" => Some(true),
        "n" | "no" | "q" | "quit" => Some(false),
        _ => None,
    }
}

/// [`PlayerInputPort`] backed by a `rustyline` editor
pub struct TerminalPlayer {
    editor: DefaultEditor,
    history_path: Option<PathBuf>,
    screens: ScreenStream,
}

impl TerminalPlayer {
    /// Create a player whose notices go to `screens`
    ///
    /// When screens are on stderr the editor prompts on the terminal device
    /// instead of stdout.
    pub fn new(config: &ReplConfig, screens: ScreenStream) -> Result<Self, PlayerInputError> {
        let behavior = match screens {
            ScreenStream::Stdout => Behavior::Stdio,
            ScreenStream::Stderr => Behavior::PreferTerm,
        };
        let editor_config = Config::builder().behavior(behavior).build();
        let mut editor = DefaultEditor::with_config(editor_config)
            .map_err(|e| PlayerInputError::Io(e.to_string()))?;

        let history_path = config.resolved_history_file();
        if let Some(ref path) = history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            if editor.load_history(path).is_err() {
                debug!("No history loaded from {}", path.display());
            }
        }

        Ok(Self {
            editor,
            history_path,
            screens,
        })
    }

    fn read_line(&mut self, prompt: &str) -> Result<String, PlayerInputError> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(line),
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                Err(PlayerInputError::Cancelled)
            }
            Err(e) => Err(PlayerInputError::Io(e.to_string())),
        }
    }

    fn print_help(&self) {
        self.screens.print(
            "\nCommands:\n  \
             1, 2, 3         - Tap a flag\n  \
             /help, h, ?     - Show this help\n  \
             /quit, q        - Leave the game\n",
        );
    }
}

impl PlayerInputPort for TerminalPlayer {
    fn choose_flag(
        &mut self,
        _round: &Round,
        _scoreboard: &ScoreBoard,
    ) -> Result<PlayerChoice, PlayerInputError> {
        loop {
            let line = self.read_line("flag> ")?;
            match InputCommand::parse(&line) {
                InputCommand::Choose(index) => {
                    let _ = self.editor.add_history_entry(line.trim());
                    return Ok(PlayerChoice::Flag(index));
                }
                InputCommand::Quit => return Ok(PlayerChoice::Quit),
                InputCommand::Help => self.print_help(),
                InputCommand::Invalid => {
                    self.screens.print(&format!(
                        "Type a number from 1 to {}, or /help",
                        CHOICES_PER_ROUND
                    ));
                }
            }
        }
    }

    fn acknowledge_outcome(
        &mut self,
        _outcome: &Outcome,
        _scoreboard: &ScoreBoard,
    ) -> Result<(), PlayerInputError> {
        let line = self.read_line(&format!("{} ", "Continue [Enter]".dimmed()))?;
        match InputCommand::parse(&line) {
            InputCommand::Quit => Err(PlayerInputError::Cancelled),
            _ => Ok(()),
        }
    }

    fn play_again(&mut self, _summary: &GameSummary) -> Result<bool, PlayerInputError> {
        loop {
            let line = self.read_line("Play again? [Y/n] ")?;
            match parse_yes_no(&line) {
                Some(answer) => return Ok(answer),
                None => self.screens.print("Please answer y or n"),
            }
        }
    }
}

impl Drop for TerminalPlayer {
    fn drop(&mut self) {
        if let Some(ref path) = self.history_path
            && let Err(e) = self.editor.save_history(path)
        {
            debug!("Could not save history to {}: {}", path.display(), e);
        }
    }
}
