// src/api/sources.rs
//! Descriptors for the remote joke APIs.

use crate::constants::{CHUCK_NORRIS_ENDPOINT, DAD_JOKE_ENDPOINT};

/// Everything the fetcher needs to know about one joke API besides its
/// response shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JokeSource {
    /// Short name used to refer to the source in messages.
    pub name: &'static str,
    /// What a single fetch returns, e.g. "dad joke".
    pub subject: &'static str,
    /// How the remote service is referred to in status errors.
    pub api: &'static str,
    /// Absolute URL fetched with GET.
    pub endpoint: &'static str,
}

/// The fact source: api.chucknorris.io.
pub const CHUCK_NORRIS: JokeSource = JokeSource {
    name: "Chuck Norris",
    subject: "Chuck Norris joke",
    api: "Chuck Norris API",
    endpoint: CHUCK_NORRIS_ENDPOINT,
};

/// The pun source: icanhazdadjoke.com.
pub const DAD_JOKES: JokeSource = JokeSource {
    name: "dad joke",
    subject: "dad joke",
    api: "dad joke API",
    endpoint: DAD_JOKE_ENDPOINT,
};

impl JokeSource {
    /// Same source, different endpoint. Used to point a fetcher at a mirror.
    pub fn with_endpoint(self, endpoint: &'static str) -> Self {
        Self { endpoint, ..self }
    }
}
