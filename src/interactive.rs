// src/interactive.rs
//! Interactive mode — a single-choice prompt between the joke kinds.
//!
//! The prompt reads one line from any `BufRead` and writes to any `Write`,
//! so it can be driven from tests exactly as from a terminal.

use crate::api::Transport;
use crate::error::{AppError, Result};
use crate::selection::{run_kind, JokeKind};
use std::io::{BufRead, Write};

const PROMPT_TITLE: &str = "What kind of joke would you like?";

/// Shows the menu on `prompt_out` and reads the user's choice from `input`.
///
/// Accepts the option number, the token (`chuck`, `dad`) or the label.
pub fn select_kind<R, W>(input: &mut R, prompt_out: &mut W) -> Result<JokeKind>
where
    R: BufRead + ?Sized,
    W: Write + ?Sized,
{
    render_menu(prompt_out).map_err(interactive_failure)?;

    let mut answer = String::new();
    input.read_line(&mut answer).map_err(interactive_failure)?;

    let answer = answer.trim();
    if answer.is_empty() {
        return Err(AppError::Interactive("no selection made".to_string()));
    }

    let kind = parse_choice(answer)?;
    log::debug!("Interactive selection: {}", kind);
    Ok(kind)
}

/// Runs the full interactive flow: prompt, fetch, print.
pub fn run_interactive<T, R, W, O>(
    transport: &T,
    input: &mut R,
    prompt_out: &mut W,
    out: &mut O,
) -> Result<()>
where
    T: Transport + ?Sized,
    R: BufRead + ?Sized,
    W: Write + ?Sized,
    O: Write,
{
    let kind = select_kind(input, prompt_out)?;
    run_kind(kind, transport, out)
}

fn render_menu<W: Write + ?Sized>(out: &mut W) -> std::io::Result<()> {
    writeln!(out, "{}", PROMPT_TITLE)?;
    for (index, kind) in JokeKind::ALL.iter().enumerate() {
        writeln!(out, "  {}) {}", index + 1, kind.label())?;
    }
    write!(out, "> ")?;
    out.flush()
}

fn parse_choice(answer: &str) -> Result<JokeKind> {
    if answer.chars().all(|c| c.is_ascii_digit()) {
        let number = answer
            .parse::<usize>()
            .map_err(|_| AppError::InvalidSelection(answer.to_string()))?;
        return number
            .checked_sub(1)
            .and_then(|index| JokeKind::ALL.get(index).copied())
            .ok_or_else(|| AppError::InvalidSelection(answer.to_string()));
    }
    answer.parse()
}

fn interactive_failure(err: std::io::Error) -> AppError {
    AppError::Interactive(err.to_string())
}
