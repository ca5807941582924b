pub mod chart;
pub mod config;
pub mod error;
pub mod export;
pub mod scan;
pub mod source;

pub use chart::{Difficulty, Row, RowKind, StepCode};
pub use config::{ResyncPolicy, ScanConfig};
pub use error::{Error, Result};
pub use export::{ConsoleReport, format_json_line, format_tsv_header, format_tsv_row};
pub use scan::{
    ChartScan, MatchEvent, PatternBuffer, RowOutcome, ScanEvent, ScanSummary, SectionContext,
    StairScanner, Staircase,
};
pub use source::{read_chart, scan_file};
