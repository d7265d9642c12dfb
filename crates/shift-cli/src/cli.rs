//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "sheetshift",
    version,
    about = "Transform CSV and Excel tables with natural language instructions",
    long_about = "Parse a CSV or Excel file into a uniform table, preview it, and send it\n\
                  together with a natural language instruction to the transformation\n\
                  service, which returns a rewritten table."
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
    /// Parse a tabular file and preview it.
    Preview(PreviewArgs),

    /// Parse a file and transform it with a natural language instruction.
    Process(ProcessArgs),

    /// List the supported file formats.
    Formats,

    /// Check that the transformation service is reachable.
    Health(ServiceArgs),
}

#[derive(Parser)]
pub struct PreviewArgs {
    /// Path to the CSV or Excel file.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Maximum number of data rows to display.
    #[arg(long = "limit", value_name = "ROWS", default_value_t = 20)]
    pub limit: usize,
}

#[derive(Parser)]
pub struct ProcessArgs {
    /// Path to the CSV or Excel file.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Natural language instruction for the transformation service,
    /// e.g. "find email addresses and replace them with REDACTED".
    #[arg(long = "instruction", short = 'i', value_name = "TEXT")]
    pub instruction: String,

    #[command(flatten)]
    pub service: ServiceArgs,

    /// Write the processed table to a CSV file.
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Maximum number of data rows to display.
    #[arg(long = "limit", value_name = "ROWS", default_value_t = 20)]
    pub limit: usize,
}

#[derive(Parser)]
pub struct ServiceArgs {
    /// Base URL of the transformation service.
    #[arg(
        long = "endpoint",
        value_name = "URL",
        env = "SHEETSHIFT_ENDPOINT",
        default_value = "http://127.0.0.1:8000/api"
    )]
    pub endpoint: String,

    /// Request timeout in seconds.
    #[arg(long = "timeout", value_name = "SECONDS", default_value_t = 120)]
    pub timeout: u64,
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
