// src/error.rs
//! Application error types with structured error handling.
//!
//! Error types form the vocabulary for failure modes in the system.
//! A fetch can fail at exactly one stage, and each stage has its own
//! variant so callers (and tests) can tell them apart without string
//! matching.

use crate::api::sources::JokeSource;
use crate::api::transport::TransportError;
use thiserror::Error;

/// Why fetching a single joke failed.
///
/// Every variant carries the source it came from, so the rendered message
/// always names the API that misbehaved.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The request itself could not be assembled (bad URL or header).
    #[error("failed to create {} request: {reason}", .joke_source.subject)]
    RequestConstruction {
        joke_source: JokeSource,
        reason: String,
    },

    /// The transport could not deliver the request or receive a response.
    #[error("failed to fetch {}: {cause}", .joke_source.subject)]
    Transport {
        joke_source: JokeSource,
        #[source]
        cause: TransportError,
    },

    /// The API answered with something other than 200 OK. The body is never read.
    #[error("{} returned unexpected status code: {status}", .joke_source.api)]
    UnexpectedStatus { joke_source: JokeSource, status: u16 },

    /// The response body stream broke before it was fully consumed.
    #[error("failed to read {} response: {cause}", .joke_source.subject)]
    BodyRead {
        joke_source: JokeSource,
        #[source]
        cause: std::io::Error,
    },

    /// The body was not a JSON document of the expected shape.
    #[error("failed to parse {}: {cause}", .joke_source.subject)]
    Decode {
        joke_source: JokeSource,
        #[source]
        cause: serde_json::Error,
    },
}

impl FetchError {
    /// The source whose fetch failed.
    pub fn joke_source(&self) -> &JokeSource {
        match self {
            Self::RequestConstruction { joke_source, .. }
            | Self::Transport { joke_source, .. }
            | Self::UnexpectedStatus { joke_source, .. }
            | Self::BodyRead { joke_source, .. }
            | Self::Decode { joke_source, .. } => joke_source,
        }
    }

    /// The HTTP status code, for `UnexpectedStatus` failures.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::UnexpectedStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Main application error type.
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("Failed to set up HTTP client: {0}")]
    Transport(#[from] TransportError),

    #[error("invalid selection: {0}")]
    InvalidSelection(String),

    #[error("failed to run interactive mode: {0}")]
    Interactive(String),

    #[error("Filesystem IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to initialize logging: {0}")]
    Logging(String),
}

/// Result type alias for convenience
pub type Result<T, E = AppError> = std::result::Result<T, E>;
