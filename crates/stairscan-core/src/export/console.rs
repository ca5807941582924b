//! Console output in the classic double-stair finder layout

use std::fmt::Write as _;

use owo_colors::OwoColorize;

use crate::chart::Difficulty;
use crate::scan::{MatchEvent, ScanSummary};

/// Message printed once a chart has been fully checked.
pub const FINISHED_MESSAGE: &str = "Finished checking for double-stairs.";

/// Renders matches of one chart file.
///
/// The difficulty is printed as a header only when it changes, so the
/// report needs to see every match of a file in order.
#[derive(Debug, Clone, Default)]
pub struct ConsoleReport {
    color: bool,
    printed_difficulty: Option<Difficulty>,
}

impl ConsoleReport {
    pub fn new(color: bool) -> Self {
        Self {
            color,
            printed_difficulty: None,
        }
    }

    /// Format one match, preceded by difficulty/description headers when
    /// needed. Returns lines without a trailing newline.
    pub fn format_match(&mut self, event: &MatchEvent) -> String {
        let mut output = String::new();

        if event.difficulty != self.printed_difficulty {
            let label = event.difficulty.map_or("unknown", |d| d.label());
            let label = self.paint_difficulty(event.difficulty, label);
            let _ = writeln!(output, "Difficulty: {}", label);
            self.printed_difficulty = event.difficulty;
        }

        if event.difficulty == Some(Difficulty::Edit) {
            let _ = writeln!(
                output,
                "Description: {}",
                event.description.as_deref().unwrap_or_default()
            );
        }

        let pattern = event.pattern.as_str();
        if self.color {
            let _ = write!(
                output,
                "{} found ending in measure {}",
                pattern.green().bold(),
                event.measure.bold()
            );
        } else {
            let _ = write!(output, "{} found ending in measure {}", pattern, event.measure);
        }

        output
    }

    pub fn format_complete(&self, summary: &ScanSummary) -> String {
        if self.color && summary.matches == 0 {
            FINISHED_MESSAGE.dimmed().to_string()
        } else {
            FINISHED_MESSAGE.to_string()
        }
    }

    fn paint_difficulty(&self, difficulty: Option<Difficulty>, label: &str) -> String {
        if !self.color {
            return label.to_string();
        }
        match difficulty {
            Some(Difficulty::Beginner) => label.cyan().to_string(),
            Some(Difficulty::Easy) => label.green().to_string(),
            Some(Difficulty::Medium) => label.yellow().to_string(),
            Some(Difficulty::Hard) => label.red().to_string(),
            Some(Difficulty::Challenge) => label.purple().to_string(),
            Some(Difficulty::Edit) => label.bold().to_string(),
            None => label.dimmed().to_string(),
        }
    }
}
