use serde::{Deserialize, Serialize};
use strum::{Display, IntoStaticStr};

/// Chart difficulty slot as written in a step file.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, IntoStaticStr,
)]
pub enum Difficulty {
    Beginner,
    Easy,
    Medium,
    Hard,
    Challenge,
    Edit,
}

impl Difficulty {
    /// All difficulties in the order they are searched for.
    pub const ALL: [Difficulty; 6] = [
        Self::Beginner,
        Self::Easy,
        Self::Medium,
        Self::Hard,
        Self::Challenge,
        Self::Edit,
    ];

    pub fn label(&self) -> &'static str {
        self.into()
    }

    /// Find the difficulty named in a line of chart text.
    ///
    /// Labels are matched as substrings; if several appear, the one latest in
    /// [`Difficulty::ALL`] wins.
    pub fn find_in(line: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .rev()
            .find(|difficulty| line.contains(difficulty.label()))
            .copied()
    }

    /// Edit charts share one slot, so they are told apart by description.
    pub fn is_edit(&self) -> bool {
        *self == Self::Edit
    }
}
