//! CLI argument definitions for the patient record mapper.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

pub const DEFAULT_INPUT: &str = "input.xml";
pub const DEFAULT_CONFIG: &str = "config.json";
pub const DEFAULT_OUTPUT: &str = "output.json";

#[derive(Parser)]
#[command(
    name = "patmap",
    version,
    about = "Convert patient XML records to JSON using a mapping config",
    long_about = "Convert patient XML records to JSON.\n\n\
                  The output layout and value transformations are driven by a\n\
                  declarative JSON mapping config. Without a subcommand, reads\n\
                  input.xml and config.json and writes output.json."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

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

    /// Prefix log lines with timestamps.
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,

    /// Include the emitting module path in log lines.
    #[arg(long = "log-target", global = true)]
    pub log_target: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Map every patient record and write the JSON document.
    Convert(ConvertArgs),

    /// List the available value transformations.
    Transforms,
}

#[derive(Args, Clone)]
pub struct ConvertArgs {
    /// Patient XML document.
    #[arg(long = "input", value_name = "FILE", default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// Mapping configuration (JSON).
    #[arg(long = "config", value_name = "FILE", default_value = DEFAULT_CONFIG)]
    pub config: PathBuf,

    /// Where to persist the JSON document.
    #[arg(long = "output", value_name = "FILE", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Do not print the JSON document to stdout.
    #[arg(long = "quiet-json")]
    pub quiet_json: bool,

    /// Reference date for age calculations (default: today).
    #[arg(long = "today", value_name = "YYYY-MM-DD")]
    pub today: Option<NaiveDate>,

    /// Allow raw patient field values in diagnostics.
    ///
    /// Values are redacted by default since they are patient data.
    #[arg(long = "log-data")]
    pub log_data: bool,
}

impl Default for ConvertArgs {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            config: PathBuf::from(DEFAULT_CONFIG),
            output: PathBuf::from(DEFAULT_OUTPUT),
            quiet_json: false,
            today: None,
            log_data: false,
        }
    }
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
