// src/constants.rs
//! Domain constants that define where jokes come from and how we ask for them.
//!
//! Each constant is named for the remote concept it pins down. Reading these
//! tells you which endpoints the tool talks to and how it introduces itself.

// ---------------------------------------------------------------------------
// Joke API endpoints
// ---------------------------------------------------------------------------

/// Random Chuck Norris fact, served by api.chucknorris.io.
pub const CHUCK_NORRIS_ENDPOINT: &str = "https://api.chucknorris.io/jokes/random";

/// Random dad joke. icanhazdadjoke.com serves HTML unless asked for JSON.
pub const DAD_JOKE_ENDPOINT: &str = "https://icanhazdadjoke.com/";

// ---------------------------------------------------------------------------
// Request headers
// ---------------------------------------------------------------------------

/// Media type both APIs must be asked for explicitly.
pub const ACCEPT_JSON: &str = "application/json";

/// Identifies this client to the joke APIs.
///
/// icanhazdadjoke.com asks every consumer to send a descriptive User-Agent
/// that says where the client lives.
pub const USER_AGENT: &str = concat!(
    "jokecli/",
    env!("CARGO_PKG_VERSION"),
    " (+",
    env!("CARGO_PKG_REPOSITORY"),
    ")"
);

// ---------------------------------------------------------------------------
// Logging
// ---------------------------------------------------------------------------

/// File name of the debug log written to the system temp directory.
pub const LOG_FILE_NAME: &str = "jokecli.log";

// ---------------------------------------------------------------------------
// Error display
// ---------------------------------------------------------------------------

/// Maximum characters shown when previewing an undecodable response body.
pub const ERROR_BODY_PREVIEW_LENGTH: usize = 200;
