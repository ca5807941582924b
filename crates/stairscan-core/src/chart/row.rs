//! Classification of individual chart lines.
//!
//! A step file mixes `#TAG:value;` headers, difficulty labels, `//` comments,
//! `,` measure separators and fixed-width note rows. [`Row`] wraps one line and
//! answers the questions the scanner asks about it. Header attributes
//! ([`Row::description`], [`Row::difficulty`]) are independent of the row's
//! [`RowKind`], since a single line can carry both.

use std::borrow::Cow;

use super::difficulty::Difficulty;
use super::step::{StepCode, lookup, normalize_mines};

const DESCRIPTION_TAG: &str = "DESCRIPTION";
const COMMENT_PREFIX: &str = "//";
const MEASURE_SEPARATOR: &str = ",";
const JUMP_DIGIT: char = '3';

/// Rows that open a chart without being a single step.
const CHART_START_ROWS: [&str; 9] = [
    "3000", "0300", "0030", "0003", // Hold/roll end
    "M000", "0M00", "00M0", "000M", // Mine
    "0000", // Empty row
];

/// What a line means to the pattern scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    /// `//` comment: ends the current chart's note data.
    SectionBoundary,
    /// `,` on its own line.
    MeasureSeparator,
    /// Exactly one panel stepped on.
    Step(StepCode),
    /// Row holding a hold/roll tail that is not a single step.
    Jump,
    /// Blank rows, multi-panel rows and everything else.
    Other,
}

#[derive(Debug, Clone)]
pub struct Row<'a> {
    raw: &'a str,
    normalized: Cow<'a, str>,
}

impl<'a> Row<'a> {
    pub fn new(raw: &'a str) -> Self {
        Self {
            raw,
            normalized: normalize_mines(raw),
        }
    }

    pub fn raw(&self) -> &'a str {
        self.raw
    }

    /// The line with mines replaced by empty columns.
    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    /// Step encoded by this row after mine normalization.
    pub fn step(&self) -> Option<StepCode> {
        lookup(&self.normalized)
    }

    /// Value of a `DESCRIPTION` header: everything after the first colon,
    /// minus the line's final character (the `;` terminator).
    pub fn description(&self) -> Option<&'a str> {
        if !self.raw.contains(DESCRIPTION_TAG) {
            return None;
        }
        let (_, value) = self.raw.split_once(':')?;
        let end = value.char_indices().last().map_or(0, |(i, _)| i);
        Some(&value[..end])
    }

    pub fn difficulty(&self) -> Option<Difficulty> {
        Difficulty::find_in(self.raw)
    }

    /// Whether this line proves we are inside note data.
    pub fn starts_chart(&self) -> bool {
        self.step().is_some()
            || CHART_START_ROWS.contains(&self.raw)
            || CHART_START_ROWS.contains(&self.normalized())
    }

    pub fn is_jump(&self) -> bool {
        self.raw.contains(JUMP_DIGIT)
    }

    pub fn kind(&self) -> RowKind {
        if self.raw.starts_with(COMMENT_PREFIX) {
            return RowKind::SectionBoundary;
        }
        if self.raw == MEASURE_SEPARATOR {
            return RowKind::MeasureSeparator;
        }
        if let Some(code) = self.step() {
            return RowKind::Step(code);
        }
        if self.is_jump() {
            return RowKind::Jump;
        }
        RowKind::Other
    }
}
