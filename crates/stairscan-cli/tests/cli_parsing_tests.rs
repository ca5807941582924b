//! CLI argument parsing tests.
//!
//! These tests verify that command-line arguments are parsed correctly
//! without scanning any chart.

#[path = "../src/cli.rs"]
mod cli;

use std::path::PathBuf;

use clap::Parser;
use cli::{Args, OutputFormat, ResyncArg};
use stairscan_core::ResyncPolicy;

#[test]
fn test_parse_requires_file() {
    assert!(Args::try_parse_from(["stairscan"]).is_err());
}

#[test]
fn test_parse_defaults() {
    let args = Args::try_parse_from(["stairscan", "song.sm"]).unwrap();
    assert_eq!(args.files, vec![PathBuf::from("song.sm")]);
    assert_eq!(args.format, OutputFormat::Console);
    assert!(!args.no_color);

    let config = args.scan_config();
    assert_eq!(config.resync, ResyncPolicy::Compatible);
    assert_eq!(config.encoding, "utf-8");
}

#[test]
fn test_parse_multiple_files() {
    let args = Args::try_parse_from(["stairscan", "a.sm", "b.ssc", "c.sm"]).unwrap();
    assert_eq!(args.files.len(), 3);
    assert_eq!(args.files[1], PathBuf::from("b.ssc"));
}

#[test]
fn test_parse_format() {
    let args = Args::try_parse_from(["stairscan", "--format", "json", "a.sm"]).unwrap();
    assert_eq!(args.format, OutputFormat::Json);

    let args = Args::try_parse_from(["stairscan", "-f", "tsv", "a.sm"]).unwrap();
    assert_eq!(args.format, OutputFormat::Tsv);

    assert!(Args::try_parse_from(["stairscan", "--format", "xml", "a.sm"]).is_err());
}

#[test]
fn test_parse_resync() {
    let args = Args::try_parse_from(["stairscan", "--resync", "longest-suffix", "a.sm"]).unwrap();
    assert_eq!(args.resync, ResyncArg::LongestSuffix);
    assert_eq!(args.scan_config().resync, ResyncPolicy::LongestSuffix);

    assert!(Args::try_parse_from(["stairscan", "--resync", "greedy", "a.sm"]).is_err());
}

#[test]
fn test_parse_encoding_and_color() {
    let args = Args::try_parse_from([
        "stairscan",
        "--encoding",
        "shift_jis",
        "--no-color",
        "a.sm",
    ])
    .unwrap();
    assert!(args.no_color);
    assert_eq!(args.scan_config().encoding, "shift_jis");
    assert_eq!(
        args.scan_config().text_encoding().unwrap().name(),
        "Shift_JIS"
    );
}
