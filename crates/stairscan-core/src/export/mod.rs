//! Output formats for staircase matches.

mod console;

pub use console::{ConsoleReport, FINISHED_MESSAGE};

use serde::Serialize;

use crate::error::Result;
use crate::scan::MatchEvent;

/// A match tagged with the chart file it came from.
#[derive(Debug, Clone, Serialize)]
pub struct MatchRecord<'a> {
    pub file: &'a str,
    #[serde(flatten)]
    pub event: &'a MatchEvent,
}

/// One JSON object per match, for JSON-lines output.
pub fn format_json_line(file: &str, event: &MatchEvent) -> Result<String> {
    Ok(serde_json::to_string(&MatchRecord { file, event })?)
}

pub fn format_tsv_header() -> String {
    ["File", "Difficulty", "Description", "Pattern", "Measure", "Line"].join("\t")
}

pub fn format_tsv_row(file: &str, event: &MatchEvent) -> String {
    format!(
        "{}\t{}\t{}\t{}\t{}\t{}",
        tsv_field(file),
        event.difficulty.map_or("", |d| d.label()),
        tsv_field(event.description.as_deref().unwrap_or_default()),
        event.pattern,
        event.measure,
        event.line
    )
}

fn tsv_field(value: &str) -> String {
    value.replace(['\t', '\n', '\r'], " ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::Difficulty;
    use crate::scan::Staircase;

    fn edit_event() -> MatchEvent {
        MatchEvent {
            pattern: Staircase::Rudl,
            difficulty: Some(Difficulty::Edit),
            description: Some("Tab\tHere".to_string()),
            measure: 12,
            line: 340,
        }
    }

    #[test]
    fn test_format_json_line() {
        let line = format_json_line("songs/a.sm", &edit_event()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["file"], "songs/a.sm");
        assert_eq!(value["pattern"], "RUDLRUDL");
        assert_eq!(value["difficulty"], "Edit");
        assert_eq!(value["description"], "Tab\tHere");
        assert_eq!(value["measure"], 12);
        assert_eq!(value["line"], 340);
        assert!(!line.contains('\n'));
    }

    #[test]
    fn test_format_tsv() {
        assert_eq!(
            format_tsv_header(),
            "File\tDifficulty\tDescription\tPattern\tMeasure\tLine"
        );
        assert_eq!(
            format_tsv_row("a.sm", &edit_event()),
            "a.sm\tEdit\tTab Here\tRUDLRUDL\t12\t340"
        );
    }

    #[test]
    fn test_format_tsv_without_difficulty() {
        let event = MatchEvent {
            pattern: Staircase::Ldur,
            difficulty: None,
            description: None,
            measure: 0,
            line: 9,
        };
        assert_eq!(format_tsv_row("b.sm", &event), "b.sm\t\t\tLDURLDUR\t0\t9");
    }
}
