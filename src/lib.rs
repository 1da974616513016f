// src/lib.rs
//! jokecli library — fetches Chuck Norris facts and dad jokes over HTTP.
//!
//! # Public API
//!
//! The library exposes types organized by concern:
//! - **Error handling** — `FetchError`, `AppError`
//! - **Configuration** — `CommandLineInput`, `RunConfig`, `RunMode`
//! - **Domain model** — `ChuckNorrisJoke`, `DadJoke`, `Joke`
//! - **API client** — `Transport`, `ReqwestTransport`, `ScriptedTransport`, fetchers
//! - **Dispatch** — `JokeKind`, `run_kind`, interactive prompt

pub mod api;
mod config;
mod constants;
mod error;
mod interactive;
mod model;
mod output;
mod selection;

// --- Error Handling ---
pub use crate::error::{AppError, FetchError, Result};

// --- Configuration ---
pub use crate::config::{CommandLineInput, JokeCommand, RunConfig, RunMode};
pub use crate::constants::{ACCEPT_JSON, CHUCK_NORRIS_ENDPOINT, DAD_JOKE_ENDPOINT, USER_AGENT};

// --- Domain Model ---
pub use crate::model::{ChuckNorrisJoke, DadJoke, Joke};

// --- API Client ---
pub use crate::api::{
    fetch_chuck_norris_joke, fetch_dad_joke, fetch_joke, JokeSource, RecordedRequest,
    ReqwestTransport, ScriptedTransport, Transport, TransportError, TransportResponse,
    CHUCK_NORRIS, DAD_JOKES,
};

// --- Dispatch ---
pub use crate::interactive::{run_interactive, select_kind};
pub use crate::output::{exit_status, print_joke, EXIT_FAILURE, EXIT_SUCCESS};
pub use crate::selection::{run_kind, JokeKind};
