use clap::Parser;
use std::path::PathBuf;

use super::types::ReportArg;

/// Apply an ordered change-list to a playlist dataset
#[derive(Parser, Debug)]
#[command(name = "mixtape")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Input dataset (JSON with playlists, songs and users)
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Change-list to apply (JSON with an "actions" list)
    #[arg(value_name = "CHANGES")]
    pub changes: PathBuf,

    /// Where to write the updated dataset; "-" writes to stdout
    #[arg(value_name = "OUTPUT")]
    pub output: String,

    /// Apply the changes and report, but write nothing
    #[arg(long)]
    pub dry_run: bool,

    /// Report format (defaults to the config file, then summary)
    #[arg(long, value_enum)]
    pub report: Option<ReportArg>,

    /// Suppress the summary and table reports
    #[arg(short, long)]
    pub quiet: bool,

    /// Indentation of the written dataset, 0 for compact output
    #[arg(long, value_name = "N")]
    pub indent: Option<usize>,

    /// Read configuration from this file instead of .mixtape/config.toml
    #[arg(long, value_name = "PATH", env = "MIXTAPE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace). RUST_LOG overrides.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Disable colored output. Any non-empty NO_COLOR value other than a
    /// false-like one ("0", "false", "no", "off") also disables it.
    #[arg(
        long,
        env = "NO_COLOR",
        value_parser = clap::builder::FalseyValueParser::new()
    )]
    pub no_color: bool,
}
