//! Double staircase detection.
//!
//! - [`SectionContext`] - difficulty, description and measure of the current chart
//! - [`PatternBuffer`] - steps of the run in progress
//! - [`Staircase`] / [`MatchEvent`] - the four patterns and a found occurrence
//! - [`StairScanner`] - the per-line state machine
//! - [`ChartScan`] - lazy iterator over a whole chart

mod buffer;
mod context;
mod matcher;
mod scanner;
mod stream;

pub use buffer::PatternBuffer;
pub use context::SectionContext;
pub use matcher::{MatchEvent, Staircase};
pub use scanner::{RowOutcome, StairScanner};
pub use stream::{ChartScan, ScanEvent, ScanSummary};
