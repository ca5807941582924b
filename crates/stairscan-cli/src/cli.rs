//! CLI argument definitions for stairscan.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use stairscan_core::{ResyncPolicy, ScanConfig};

#[derive(Parser)]
#[command(name = "stairscan")]
#[command(about = "Find double staircases in StepMania charts", version)]
pub struct Args {
    /// Chart files to scan (.sm / .ssc)
    #[arg(required = true, value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Output format
    #[arg(long, short, value_enum, default_value = "console")]
    pub format: OutputFormat,

    /// How to trim the step buffer after a step that breaks the staircase
    #[arg(long, value_enum, default_value = "compatible", env = "STAIRSCAN_RESYNC")]
    pub resync: ResyncArg,

    /// Text encoding of the chart files (e.g. utf-8, shift_jis)
    #[arg(long, default_value = "utf-8", env = "STAIRSCAN_ENCODING")]
    pub encoding: String,

    /// Disable colored console output
    #[arg(long)]
    pub no_color: bool,
}

impl Args {
    pub fn scan_config(&self) -> ScanConfig {
        ScanConfig::default()
            .with_resync(self.resync.into())
            .with_encoding(self.encoding.clone())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Console,
    Json,
    Tsv,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ResyncArg {
    Compatible,
    LongestSuffix,
}

impl From<ResyncArg> for ResyncPolicy {
    fn from(arg: ResyncArg) -> Self {
        match arg {
            ResyncArg::Compatible => ResyncPolicy::Compatible,
            ResyncArg::LongestSuffix => ResyncPolicy::LongestSuffix,
        }
    }
}
