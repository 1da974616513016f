// src/selection.rs
//! Selection and dispatch — turns a chosen joke kind into printed text.

use crate::api::{fetch_chuck_norris_joke, fetch_dad_joke, JokeSource, Transport};
use crate::api::{CHUCK_NORRIS, DAD_JOKES};
use crate::error::{AppError, FetchError, Result};
use crate::model::Joke;
use crate::output::print_joke;
use std::fmt;
use std::io::Write;
use std::str::FromStr;

/// The kinds of joke a user can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JokeKind {
    ChuckNorris,
    Dad,
}

impl JokeKind {
    /// Every kind, in menu order.
    pub const ALL: [JokeKind; 2] = [JokeKind::ChuckNorris, JokeKind::Dad];

    /// Stable token used as the subcommand name and menu value.
    pub fn token(self) -> &'static str {
        match self {
            JokeKind::ChuckNorris => "chuck",
            JokeKind::Dad => "dad",
        }
    }

    /// Human-facing menu label.
    pub fn label(self) -> &'static str {
        match self {
            JokeKind::ChuckNorris => "Chuck Norris Fact",
            JokeKind::Dad => "Dad Joke",
        }
    }

    /// The remote API this kind is fetched from.
    pub fn source(self) -> JokeSource {
        match self {
            JokeKind::ChuckNorris => CHUCK_NORRIS,
            JokeKind::Dad => DAD_JOKES,
        }
    }

    /// Fetches one joke of this kind and returns only its text.
    pub fn fetch_text<T>(self, transport: &T) -> Result<String, FetchError>
    where
        T: Transport + ?Sized,
    {
        let text = match self {
            JokeKind::ChuckNorris => fetch_chuck_norris_joke(transport)?.text().to_owned(),
            JokeKind::Dad => fetch_dad_joke(transport)?.text().to_owned(),
        };
        Ok(text)
    }
}

impl fmt::Display for JokeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for JokeKind {
    type Err = AppError;

    /// Accepts the token or the menu label, ignoring case and surrounding space.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        JokeKind::ALL
            .into_iter()
            .find(|kind| {
                kind.token().eq_ignore_ascii_case(wanted)
                    || kind.label().eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| AppError::InvalidSelection(wanted.to_string()))
    }
}

/// Fetches a joke of `kind` and writes its text, newline-terminated, to `out`.
pub fn run_kind<T, W>(kind: JokeKind, transport: &T, out: &mut W) -> Result<()>
where
    T: Transport + ?Sized,
    W: Write,
{
    log::info!("Fetching a {}", kind.source().subject);
    let text = kind.fetch_text(transport)?;
    print_joke(out, &text)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tokens_and_labels() {
        assert_eq!("chuck".parse::<JokeKind>().unwrap(), JokeKind::ChuckNorris);
        assert_eq!(" DAD ".parse::<JokeKind>().unwrap(), JokeKind::Dad);
        assert_eq!("dad joke".parse::<JokeKind>().unwrap(), JokeKind::Dad);
        assert_eq!(
            "Chuck Norris Fact".parse::<JokeKind>().unwrap(),
            JokeKind::ChuckNorris
        );
    }

    #[test]
    fn test_parse_rejects_unknown_kind() {
        let err = "knock-knock".parse::<JokeKind>().unwrap_err();
        assert_eq!(err.to_string(), "invalid selection: knock-knock");
    }

    #[test]
    fn test_kind_maps_to_source() {
        assert_eq!(JokeKind::ChuckNorris.source(), CHUCK_NORRIS);
        assert_eq!(JokeKind::Dad.source(), DAD_JOKES);
        assert_eq!(JokeKind::Dad.to_string(), "dad");
    }
}
