//! CLI argument definitions for the scenario filter tool.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use vru_model::{FieldEdit, VruKind};

#[derive(Parser)]
#[command(
    name = "vru-filter",
    version,
    about = "VRU radar scenario filter - inspect, check and apply filter presets",
    long_about = "Build the query for the VRU radar dataset from a filter preset.\n\n\
                  Starts from a TOML preset (or the default filters), applies field\n\
                  edits and VRU preferences, then reports visibility, validation\n\
                  issues and the resulting query payload."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
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
    /// List every field with its kind, value and visibility.
    Fields(FieldsArgs),

    /// Report validation issues, changes and action availability.
    Check(EditArgs),

    /// Build the query payload and print it as JSON.
    Apply(EditArgs),

    /// List the VRU kinds accepted by --must and --must-not.
    Kinds,
}

#[derive(Args)]
pub struct FieldsArgs {
    /// Preset file to start from (default filters when omitted).
    #[arg(value_name = "PRESET")]
    pub preset: Option<PathBuf>,
}

#[derive(Args)]
pub struct EditArgs {
    /// Preset file to start from (default filters when omitted).
    #[arg(value_name = "PRESET")]
    pub preset: Option<PathBuf>,

    /// Set a field, e.g. `--set numVRUs=3` or `--set azimuth=-10..10`.
    #[arg(long = "set", value_name = "KEY=VALUE")]
    pub set: Vec<FieldEdit>,

    /// Require a VRU kind to be present.
    #[arg(long = "must", value_name = "KIND")]
    pub must: Vec<VruKind>,

    /// Require a VRU kind to be absent.
    #[arg(long = "must-not", value_name = "KIND")]
    pub must_not: Vec<VruKind>,
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
