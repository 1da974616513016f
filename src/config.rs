// src/config.rs
use crate::constants::LOG_FILE_NAME;
use crate::selection::JokeKind;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Parsed command-line input.
#[derive(Parser, Debug)]
#[command(
    name = "jokecli",
    author,
    version,
    about = "A CLI tool for fetching jokes from various sources",
    long_about = "jokecli is a command line interface that provides jokes and funny facts \
from various sources across the internet. You can get Chuck Norris facts, dad jokes, and more!\n\n\
Run it without a subcommand to pick a joke interactively."
)]
pub struct CommandLineInput {
    #[command(subcommand)]
    pub command: Option<JokeCommand>,

    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,

    /// Never prompt; without a subcommand, exit without fetching anything
    #[arg(long, hide = true, default_value_t = false)]
    pub non_interactive: bool,
}

/// One subcommand per joke source.
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum JokeCommand {
    /// Get a random Chuck Norris fact
    #[command(long_about = "Fetches a random Chuck Norris fact from api.chucknorris.io")]
    Chuck,

    /// Get a random dad joke
    #[command(long_about = "Fetches a random dad joke from icanhazdadjoke.com")]
    Dad,
}

impl From<JokeCommand> for JokeKind {
    fn from(command: JokeCommand) -> Self {
        match command {
            JokeCommand::Chuck => JokeKind::ChuckNorris,
            JokeCommand::Dad => JokeKind::Dad,
        }
    }
}

/// What a single invocation is going to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    /// Fetch and print the given kind straight away.
    Direct(JokeKind),
    /// Ask the user which kind they want first.
    Interactive,
    /// Nothing to do: no subcommand and prompting is disabled.
    Idle,
}

/// Resolved run configuration, ready to drive `main`.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub mode: RunMode,
    pub verbose: bool,
    pub log_file: PathBuf,
}

impl RunConfig {
    /// Resolves the run configuration from CLI input.
    pub fn resolve(cli: CommandLineInput) -> Self {
        let mode = match (cli.command, cli.non_interactive) {
            (Some(command), _) => RunMode::Direct(command.into()),
            (None, false) => RunMode::Interactive,
            (None, true) => RunMode::Idle,
        };

        RunConfig {
            mode,
            verbose: cli.verbose,
            log_file: std::env::temp_dir().join(LOG_FILE_NAME),
        }
    }
}
