//! CLI argument definitions for the UUID CSV validator.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "uuidcsv",
    version,
    about = "UUID CSV Validator - check CSV files of UUIDs",
    long_about = "Validate a CSV file whose lines are UUIDs.\n\n\
                  Each line is checked against the canonical hyphenated UUID form,\n\
                  per-line validity and aggregate statistics are reported, and the\n\
                  valid UUIDs can be exported or submitted to a backend."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Validate a CSV file and print per-record results and statistics.
    Check(CheckArgs),

    /// List the validation rules and limits.
    Rules,
}

#[derive(Parser)]
pub struct CheckArgs {
    /// Path to the CSV file containing one UUID per line.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Print the full per-record table in addition to the summary.
    #[arg(long = "records")]
    pub records: bool,

    /// Directory to write validation reports (JSON and CSV) into.
    #[arg(long = "report", value_name = "DIR")]
    pub report: Option<PathBuf>,

    /// Write the valid UUIDs, newline-separated, to this path ("-" for stdout).
    #[arg(long = "export", value_name = "PATH")]
    pub export: Option<PathBuf>,

    /// Submit the valid UUIDs to the (simulated) backend.
    #[arg(long = "submit")]
    pub submit: bool,

    /// Exit nonzero when any record fails the format check.
    ///
    /// By default invalid records are reported but do not fail the run,
    /// matching the interactive upload flow this tool replaces.
    #[arg(long = "fail-on-invalid")]
    pub fail_on_invalid: bool,
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
