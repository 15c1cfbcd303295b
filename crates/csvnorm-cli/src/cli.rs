//! CLI argument definitions for `csvnorm`.

use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "csvnorm",
    version,
    about = "Normalize timestamp, duration, zip and name columns of a CSV stream",
    long_about = "Normalize the rows of an 8-column CSV file.\n\n\
                  Timestamps are converted from US/Pacific to US/Eastern RFC 3339,\n\
                  durations to seconds, zip codes are zero-padded and names upper-cased.\n\
                  Rows that cannot be normalized are reported and left out."
)]
pub struct Cli {
    /// Input CSV file (`-` or omitted reads stdin).
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Output CSV file (default: stdout).
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Write diagnostics to a file instead of stderr.
    #[arg(long = "diagnostics-file", value_name = "PATH")]
    pub diagnostics_file: Option<PathBuf>,

    /// Exit with status 1 when any row was dropped.
    #[arg(long = "fail-on-row-errors")]
    pub fail_on_row_errors: bool,

    /// Print a run summary table to stderr.
    #[arg(long = "summary")]
    pub summary: bool,

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

    /// Prefix log lines with a timestamp.
    #[arg(long = "log-timestamps")]
    pub log_timestamps: bool,

    /// Allow row values in trace-level logs.
    #[arg(long = "log-data")]
    pub log_data: bool,
}

impl Cli {
    /// Input path, or `None` for stdin.
    pub fn input_path(&self) -> Option<&Path> {
        self.input.as_deref().filter(|path| path.as_os_str() != "-")
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
