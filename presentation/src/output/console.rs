//! Console output formatter for quiz screens

use colored::Colorize;
use flagquiz_domain::{ChoiceIndex, GameSummary, Outcome, Round, ScoreBoard};
use serde::Serialize;

/// Formats quiz screens and messages for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Title banner shown once at start-up
    pub fn banner() -> String {
        Self::header("Guess the Flag")
    }

    /// Round screen: question counter, target name, numbered flags, score
    pub fn format_round(round: &Round, scoreboard: &ScoreBoard) -> String {
        let mut output = String::new();

        output.push_str(&Self::section_header(&format!(
            "Question {} of {}",
            scoreboard.questions_asked + 1,
            scoreboard.max_questions
        )));

        output.push_str(&format!("{}\n", "Tap the flag of".dimmed()));
        output.push_str(&format!("  {}\n\n", round.target().as_str().bold()));

        let flags = ChoiceIndex::all()
            .map(|index| {
                format!(
                    "[{}] {}",
                    index.label().to_string().yellow().bold(),
                    round.choice(index).flag_emoji()
                )
            })
            .collect::<Vec<_>>()
            .join("    ");
        output.push_str(&format!("  {}\n\n", flags));

        output.push_str(&Self::score_line(scoreboard));
        output
    }

    /// Result message shown after an answer, with the correct flag revealed
    pub fn format_outcome(round: &Round, outcome: &Outcome, scoreboard: &ScoreBoard) -> String {
        let title = match outcome {
            Outcome::Correct => outcome.title().green().bold(),
            Outcome::Incorrect { .. } => outcome.title().red().bold(),
        };

        let mut output = format!("\n{}\n", title);
        if !outcome.is_correct() {
            let answer = round.correct_answer();
            output.push_str(&format!(
                "{} was [{}] {}\n",
                format!("The flag of {}", round.target()).dimmed(),
                answer.label(),
                round.choice(answer).flag_emoji()
            ));
        }
        output.push_str(&format!("{}\n", scoreboard.message()));
        output
    }

    /// Game-over message
    pub fn format_game_over(summary: &GameSummary) -> String {
        let mut output = String::new();
        output.push('\n');
        output.push_str(&Self::header("Game Over"));
        output.push_str(&format!("\n{}\n", summary.message().bold()));
        output.push_str(&format!(
            "{} {:.0}%\n",
            "Accuracy:".cyan().bold(),
            summary.accuracy() * 100.0
        ));
        if summary.is_perfect() {
            output.push_str(&format!("{}\n", "Perfect game!".green().bold()));
        }
        output.push_str(&Self::footer());
        output
    }

    /// Notice for a rejected choice
    pub fn format_invalid_choice(index: usize) -> String {
        format!(
            "{} {} is not a flag on screen. Pick 1, 2 or 3.",
            "!".yellow().bold(),
            index + 1
        )
    }

    /// Format any serializable value as JSON
    pub fn format_json<T: Serialize>(value: &T) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
    }

    fn score_line(scoreboard: &ScoreBoard) -> String {
        format!(
            "{} {}   {} {}\n",
            "Score:".cyan().bold(),
            scoreboard.score,
            "Remaining:".cyan().bold(),
            scoreboard.remaining()
        )
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(44);
        format!("{}\n{:^44}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(30))
    }

    fn footer() -> String {
        format!("{}\n", "=".repeat(44).cyan())
    }
}
