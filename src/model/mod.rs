// src/model/mod.rs
//! Domain model — the joke records returned by each API.
//!
//! The two records are deliberately separate types: each mirrors the JSON
//! its API returns. Missing fields decode to their empty defaults and
//! unknown fields are ignored.

mod jokes;

pub use jokes::{ChuckNorrisJoke, DadJoke};

/// Uniform read access to a decoded joke.
pub trait Joke {
    /// Identifier assigned by the remote API.
    fn id(&self) -> &str;

    /// The joke itself, ready to print.
    fn text(&self) -> &str;
}
