//! vcf-clean CLI.

use std::io::{self, IsTerminal};
use std::process::ExitCode;

use clap::{ColorChoice, Parser};
use tracing::level_filters::LevelFilter;
use vcf_cli::logging::{LogConfig, LogFormat, init_logging};
use vcf_cli::pipeline::run;
use vcf_cli::types::RunConfig;

mod cli;
mod summary;

use crate::cli::{Cli, LogFormatArg, LogLevelArg};
use crate::summary::print_summary;

fn main() -> ExitCode {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    let _logging = match init_logging(&log_config) {
        Ok(guard) => guard,
        Err(error) => {
            eprintln!("error: failed to initialize logging: {error}");
            return ExitCode::FAILURE;
        }
    };
    match run(&run_config_from_cli(&cli)) {
        Ok(result) => {
            print_summary(&result);
            ExitCode::SUCCESS
        }
        Err(error) => {
            tracing::error!("run failed: {error:#}");
            eprintln!("error: {error:#}");
            ExitCode::FAILURE
        }
    }
}

fn run_config_from_cli(cli: &Cli) -> RunConfig {
    RunConfig {
        explanations: cli.explanations.clone(),
        encoding: cli.encoding.clone(),
        fallback_encoding: cli.fallback_encoding.clone(),
        normalize: !cli.no_normalize,
        dry_run: cli.dry_run,
        report_json: cli.report_json.clone(),
        log_data: cli.log_data,
        ..RunConfig::new(&cli.input, &cli.valid_output, &cli.invalid_output)
    }
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
