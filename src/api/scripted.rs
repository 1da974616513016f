// src/api/scripted.rs
//! A transport that answers from a script instead of the network.
//!
//! Each incoming request is recorded and handed to a responder closure,
//! which decides the canned response (or simulated failure) by inspecting
//! it. No I/O happens.

use super::transport::{Transport, TransportError, TransportResponse};
use parking_lot::Mutex;
use reqwest::blocking::Request;
use reqwest::header::HeaderMap;
use reqwest::{Method, StatusCode, Url};

type Responder =
    Box<dyn Fn(&Request) -> Result<TransportResponse, TransportError> + Send + Sync>;

/// What the scripted transport saw for one request.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
}

impl RecordedRequest {
    fn capture(request: &Request) -> Self {
        Self {
            method: request.method().clone(),
            url: request.url().clone(),
            headers: request.headers().clone(),
        }
    }

    /// Header value as a string, if present and valid UTF-8.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

/// Transport test double driven by a responder closure.
pub struct ScriptedTransport {
    responder: Responder,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl ScriptedTransport {
    /// Answers every request with whatever `responder` returns for it.
    pub fn new<F>(responder: F) -> Self
    where
        F: Fn(&Request) -> Result<TransportResponse, TransportError> + Send + Sync + 'static,
    {
        Self {
            responder: Box::new(responder),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Answers every request with the same status and body.
    pub fn replying(status: StatusCode, body: impl Into<String>) -> Self {
        let body = body.into();
        Self::new(move |_| Ok(TransportResponse::from_text(status, body.clone())))
    }

    /// Fails every request as if the connection could not be made.
    pub fn failing(message: impl Into<String>) -> Self {
        let message = message.into();
        Self::new(move |_| Err(TransportError::new(message.clone())))
    }

    /// Requests received so far, oldest first.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().clone()
    }

    /// The most recent request, if any.
    pub fn last_request(&self) -> Option<RecordedRequest> {
        self.requests.lock().last().cloned()
    }
}

impl Transport for ScriptedTransport {
    fn execute(&self, request: Request) -> Result<TransportResponse, TransportError> {
        self.requests.lock().push(RecordedRequest::capture(&request));
        (self.responder)(&request)
    }
}

impl std::fmt::Debug for ScriptedTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScriptedTransport")
            .field("requests", &self.requests.lock().len())
            .finish_non_exhaustive()
    }
}
