//! Step file vocabulary.
//!
//! - [`StepCode`] and the single-step lookup table
//! - [`Difficulty`] labels
//! - [`Row`] line classification

mod difficulty;
mod row;
mod step;

pub use difficulty::Difficulty;
pub use row::{Row, RowKind};
pub use step::{StepCode, lookup, normalize_mines};
