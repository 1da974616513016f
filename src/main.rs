// src/main.rs

use anyhow::Context;
use clap::Parser;
use jokecli::{
    exit_status, run_interactive, run_kind, AppError, CommandLineInput, ReqwestTransport, Result,
    RunConfig, RunMode,
};
use log::LevelFilter;
use log4rs::{
    append::console::{ConsoleAppender, Target},
    append::file::FileAppender,
    config::{Appender, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
    Config,
};
use std::io;
use std::process::ExitCode;

/// Sets up logging configuration.
///
/// Console output goes to stderr so stdout carries nothing but the joke.
fn setup_logging(config: &RunConfig) -> anyhow::Result<()> {
    let log_level = if config.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    let pattern = if config.verbose {
        "{d(%Y-%m-%d %H:%M:%S)} [{l}] - {m}{n}"
    } else {
        "{m}{n}"
    };

    let stderr_appender = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(pattern)))
        .build();

    let file_appender = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(
            "{d(%Y-%m-%d %H:%M:%S)} [{l}] - {m}{n}",
        )))
        .build(&config.log_file)
        .with_context(|| format!("cannot open log file {}", config.log_file.display()))?;

    let log_config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr_appender)))
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(LevelFilter::Debug)))
                .build("file", Box::new(file_appender)),
        )
        .build(
            Root::builder()
                .appender("stderr")
                .appender("file")
                .build(log_level),
        )
        .context("invalid logging configuration")?;

    log4rs::init_config(log_config).context("logger already initialized")?;
    log::info!("Logging initialized. Log file: {}", config.log_file.display());
    Ok(())
}

/// Carries out the resolved run mode against the real network.
fn execute(config: &RunConfig) -> Result<()> {
    match config.mode {
        RunMode::Idle => {
            log::debug!("No subcommand and prompting disabled; nothing to do");
            Ok(())
        }
        RunMode::Direct(kind) => {
            let transport = ReqwestTransport::new()?;
            run_kind(kind, &transport, &mut io::stdout().lock())
        }
        RunMode::Interactive => {
            let transport = ReqwestTransport::new()?;
            run_interactive(
                &transport,
                &mut io::stdin().lock(),
                &mut io::stderr(),
                &mut io::stdout().lock(),
            )
        }
    }
}

fn run() -> Result<()> {
    let cli = CommandLineInput::parse();
    let config = RunConfig::resolve(cli);

    setup_logging(&config).map_err(|e| AppError::Logging(format!("{:#}", e)))?;

    execute(&config)
}

fn main() -> ExitCode {
    ExitCode::from(exit_status(run(), &mut io::stderr()))
}
