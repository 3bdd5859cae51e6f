//! Bulk Reviewer CLI.

use clap::{ColorChoice, Parser};
use br_cli::logging::{LogConfig, LogFormat, init_logging};
use br_ingest::IngestError;
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

mod cli;
mod commands;
mod summary;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use crate::commands::{run_exclusions, run_review, run_summary};
use crate::summary::{print_applied, print_summary};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match cli.command {
        Command::Summary(args) => match run_summary(&args) {
            Ok(session) => {
                print_summary(&args.document, &session);
                0
            }
            Err(error) => report_error(&error),
        },
        Command::Review(args) => match run_review(&args) {
            Ok(outcome) => {
                print_applied(&outcome.applied);
                print_summary(&args.document, &outcome.session);
                if let Some(output) = args.output.as_ref().filter(|_| outcome.saved) {
                    println!("Saved: {}", output.display());
                }
                0
            }
            Err(error) => report_error(&error),
        },
        Command::Exclusions(args) => match run_exclusions(&args) {
            Ok(_) => 0,
            Err(error) => report_error(&error),
        },
    };
    std::process::exit(exit_code);
}

/// Print an error chain, with a hint when the document itself was the problem.
fn report_error(error: &anyhow::Error) -> i32 {
    match error.downcast_ref::<IngestError>() {
        Some(ingest) => {
            eprintln!("error: {}", ingest.user_message());
            if let Some(hint) = ingest.suggestion() {
                eprintln!("hint: {hint}");
            }
        }
        None => eprintln!("error: {error:#}"),
    }
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
    config.log_data = cli.log_data;
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
