//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "tabula",
    version,
    about = "Infer a canonical analytical model from tabular data",
    long_about = "Turn an arbitrary tabular dataset into a canonical analytical model\n\
                  (measure, entity, time, dimensions) with explicit human confirmation,\n\
                  then run only the aggregate analyses the model makes safe."
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
    /// Infer, confirm, and analyze a dataset interactively.
    Analyze(AnalyzeArgs),

    /// Print extracted column signals without confirming anything.
    Signals(SignalsArgs),
}

#[derive(Parser)]
pub struct AnalyzeArgs {
    /// Path to the CSV dataset.
    #[arg(value_name = "DATASET")]
    pub dataset: PathBuf,

    /// Initial active measure (default: first confirmed measure).
    #[arg(long = "measure", value_name = "COLUMN")]
    pub measure: Option<String>,

    /// Disable advisory similarity hints on proposals.
    #[arg(long = "no-advisor")]
    pub no_advisor: bool,
}

#[derive(Parser)]
pub struct SignalsArgs {
    /// Path to the CSV dataset.
    #[arg(value_name = "DATASET")]
    pub dataset: PathBuf,
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
