//! CLI argument definitions for the usage translator.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "usage-translator",
    version,
    about = "Translate partner usage reports into chargeable SQL inserts",
    long_about = "Translate a partner usage report (CSV) into SQL INSERT statements\n\
                  for the chargeable and domains tables, applying validation, unit\n\
                  normalization, and deduplication rules along the way."
)]
pub struct Cli {
    /// Path to the usage report CSV file.
    #[arg(long = "csv", value_name = "PATH", default_value = "data/Sample_Report.csv")]
    pub csv: PathBuf,

    /// Path to the part-number typemap JSON file.
    #[arg(
        long = "typemap",
        value_name = "PATH",
        default_value = "data/typemap.json"
    )]
    pub typemap: PathBuf,

    /// Directory the generated SQL files are written to.
    #[arg(long = "output-dir", value_name = "DIR", default_value = "output")]
    pub output_dir: PathBuf,

    /// Rows per INSERT statement (0 = one unbounded statement).
    #[arg(long = "batch-insert-size", value_name = "N", default_value_t = 0)]
    pub batch_insert_size: usize,

    /// Partner id to exclude; repeatable. Replaces the built-in skip list.
    #[arg(long = "skip-partner", value_name = "ID")]
    pub skip_partner: Vec<i64>,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
