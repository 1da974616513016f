// src/api/mod.rs
//! Joke API interaction — the ability to retrieve a joke from a remote source.
//!
//! Fetching is split into a transport capability (send one request, get one
//! response) and the fetch routine that builds requests and decodes
//! responses on top of it. Business logic depends on [`Transport`], never
//! on HTTP client details.

pub mod fetch;
pub mod scripted;
pub mod sources;
pub mod transport;

// Re-export the public interface
pub use fetch::{fetch_chuck_norris_joke, fetch_dad_joke, fetch_joke};
pub use scripted::{RecordedRequest, ScriptedTransport};
pub use sources::{JokeSource, CHUCK_NORRIS, DAD_JOKES};
pub use transport::{ReqwestTransport, Transport, TransportError, TransportResponse};
