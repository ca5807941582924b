//! Scan command implementation.
//!
//! Scans each chart file in turn and prints its double staircases. A file
//! that cannot be read is reported and skipped; the command still fails at
//! the end so scripts notice.

use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use stairscan_core::{
    ConsoleReport, ScanConfig, ScanEvent, format_json_line, format_tsv_header, format_tsv_row,
    scan_file,
};
use tracing::{error, info};

use crate::cli::OutputFormat;

/// Run the scan command
pub fn run(
    files: &[PathBuf],
    format: OutputFormat,
    config: &ScanConfig,
    color: bool,
) -> Result<()> {
    // Fail before touching any file if the encoding label is bad
    config.text_encoding()?;

    if format == OutputFormat::Tsv {
        println!("{}", format_tsv_header());
    }

    let mut failed = 0;
    for path in files {
        if let Err(e) = scan_one(path, format, config, color, files.len() > 1) {
            error!("{}", e);
            failed += 1;
        }
    }

    if failed > 0 {
        bail!("{} of {} chart files could not be scanned", failed, files.len());
    }
    Ok(())
}

fn scan_one(
    path: &Path,
    format: OutputFormat,
    config: &ScanConfig,
    color: bool,
    show_path: bool,
) -> Result<()> {
    info!("Scanning {} (resync: {})", path.display(), config.resync);
    let scan = scan_file(path, config)?;
    let file = path.display().to_string();

    if show_path && format == OutputFormat::Console {
        println!("{}", file);
    }

    let mut report = ConsoleReport::new(color);
    for event in scan {
        match event {
            ScanEvent::Match(event) => match format {
                OutputFormat::Console => println!("{}", report.format_match(&event)),
                OutputFormat::Json => println!("{}", format_json_line(&file, &event)?),
                OutputFormat::Tsv => println!("{}", format_tsv_row(&file, &event)),
            },
            ScanEvent::Complete(summary) => {
                info!(
                    "{}: {} double stairs in {} lines",
                    file, summary.matches, summary.lines
                );
                if format == OutputFormat::Console {
                    println!("{}", report.format_complete(&summary));
                }
            }
        }
    }

    Ok(())
}
