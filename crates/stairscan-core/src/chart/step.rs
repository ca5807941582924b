use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use strum::IntoStaticStr;

/// Arrow direction of a single-panel step.
///
/// Columns of a singles row map to directions in the order L, D, U, R.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, IntoStaticStr)]
pub enum StepCode {
    #[strum(serialize = "L")]
    Left,
    #[strum(serialize = "D")]
    Down,
    #[strum(serialize = "U")]
    Up,
    #[strum(serialize = "R")]
    Right,
}

impl StepCode {
    pub fn as_char(&self) -> char {
        match self {
            Self::Left => 'L',
            Self::Down => 'D',
            Self::Up => 'U',
            Self::Right => 'R',
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'L' => Some(Self::Left),
            'D' => Some(Self::Down),
            'U' => Some(Self::Up),
            'R' => Some(Self::Right),
            _ => None,
        }
    }

    /// Left and right are the only panels a staircase can start from.
    pub fn is_side(&self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }
}

impl std::fmt::Display for StepCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Single-panel rows and the direction they step on.
///
/// Taps (`1`), hold heads (`2`) and roll heads (`4`) all count as a step.
const STEP_TABLE: [(&str, StepCode); 12] = [
    // Taps
    ("1000", StepCode::Left),
    ("0100", StepCode::Down),
    ("0010", StepCode::Up),
    ("0001", StepCode::Right),
    // Holds
    ("2000", StepCode::Left),
    ("0200", StepCode::Down),
    ("0020", StepCode::Up),
    ("0002", StepCode::Right),
    // Rolls
    ("4000", StepCode::Left),
    ("0400", StepCode::Down),
    ("0040", StepCode::Up),
    ("0004", StepCode::Right),
];

/// Look up the direction of a mine-normalized row.
///
/// Returns `None` for blank rows, jumps, hold tails, mines and anything that
/// is not exactly four columns wide.
pub fn lookup(row: &str) -> Option<StepCode> {
    STEP_TABLE
        .iter()
        .find(|(pattern, _)| *pattern == row)
        .map(|(_, code)| *code)
}

/// Replace every mine (`M`) with an empty column.
pub fn normalize_mines(row: &str) -> Cow<'_, str> {
    if row.contains('M') {
        Cow::Owned(row.replace('M', "0"))
    } else {
        Cow::Borrowed(row)
    }
}
