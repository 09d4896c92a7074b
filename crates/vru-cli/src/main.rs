//! VRU scenario filter CLI.

use clap::{ColorChoice, Parser};
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;
use vru_cli::logging::{LogConfig, LogFormat, init_logging};

mod cli;
mod commands;
mod summary;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use crate::commands::{ApplyResult, run_apply, run_check, run_fields, run_kinds};
use crate::summary::{print_blocked, print_check, print_fields, print_payload};

/// The configuration cannot be applied (invalid or unchanged).
const EXIT_NOT_APPLICABLE: i32 = 2;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match cli.command {
        Command::Fields(args) => match run_fields(&args) {
            Ok(store) => {
                print_fields(&store);
                0
            }
            Err(error) => report(&error),
        },
        Command::Check(args) => match run_check(&args) {
            Ok(result) => {
                print_check(&result);
                if result.can_apply() {
                    0
                } else {
                    EXIT_NOT_APPLICABLE
                }
            }
            Err(error) => report(&error),
        },
        Command::Apply(args) => match run_apply(&args) {
            Ok(ApplyResult::Applied(payload)) => match print_payload(&payload) {
                Ok(()) => 0,
                Err(error) => report(&error.into()),
            },
            Ok(ApplyResult::Blocked(result)) => {
                print_blocked(&result);
                EXIT_NOT_APPLICABLE
            }
            Err(error) => report(&error),
        },
        Command::Kinds => {
            run_kinds();
            0
        }
    };
    std::process::exit(exit_code);
}

fn report(error: &anyhow::Error) -> i32 {
    eprintln!("error: {error:#}");
    1
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
