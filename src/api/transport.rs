// src/api/transport.rs
//! The ability to send one HTTP request and get one response back.
//!
//! Fetchers depend on the [`Transport`] trait, never on reqwest directly.
//! [`ReqwestTransport`] is the thin production wrapper around
//! `reqwest::blocking::Client`; it adds no retries, timeouts or pool tuning
//! on top of the client's defaults.

use reqwest::blocking::{Client, Request};
use reqwest::StatusCode;
use std::fmt;
use std::io::{Cursor, Read};
use thiserror::Error;

/// A failure to deliver a request or receive its response.
///
/// Wraps the underlying cause verbatim: its message is the cause's message.
#[derive(Error, Debug)]
#[error("{0}")]
pub struct TransportError(Box<dyn std::error::Error + Send + Sync>);

impl TransportError {
    /// Wraps any error (or plain message) as a transport failure.
    pub fn new(cause: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self(cause.into())
    }

    /// The wrapped cause.
    pub fn cause(&self) -> &(dyn std::error::Error + Send + Sync + 'static) {
        self.0.as_ref()
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        Self::new(err)
    }
}

/// Status line and body stream of a received response.
pub struct TransportResponse {
    pub status: StatusCode,
    pub body: Box<dyn Read + Send>,
}

impl TransportResponse {
    /// Creates a response whose body is read from `body`.
    pub fn new(status: StatusCode, body: impl Read + Send + 'static) -> Self {
        Self {
            status,
            body: Box::new(body),
        }
    }

    /// Creates a response with an in-memory body.
    pub fn from_text(status: StatusCode, body: impl Into<String>) -> Self {
        Self::new(status, Cursor::new(body.into().into_bytes()))
    }
}

impl fmt::Debug for TransportResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransportResponse")
            .field("status", &self.status)
            .finish_non_exhaustive()
    }
}

/// Sends a fully-formed request and hands back the raw response.
///
/// Implementations must not retry or cache; one call is one request.
pub trait Transport {
    fn execute(&self, request: Request) -> Result<TransportResponse, TransportError>;
}

/// Production transport backed by the platform's network stack.
#[derive(Clone, Debug)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Builds a blocking client with default settings.
    pub fn new() -> Result<Self, TransportError> {
        let client = Client::builder().build()?;
        Ok(Self { client })
    }
}

impl Transport for ReqwestTransport {
    fn execute(&self, request: Request) -> Result<TransportResponse, TransportError> {
        log::debug!("{} {}", request.method(), request.url());

        let response = self.client.execute(request)?;

        log::debug!("{} responded with {}", response.url(), response.status());

        Ok(TransportResponse {
            status: response.status(),
            body: Box::new(response),
        })
    }
}
