// src/output.rs
//! Executes output by performing the actual write.
//!
//! This is the only place where joke text or an error message reaches a
//! terminal, keeping the fetch path free of I/O other than the request itself.

use crate::error::Result;
use std::io::Write;

/// Process status for a run that printed its joke (or had nothing to do).
pub const EXIT_SUCCESS: u8 = 0;

/// Process status for any fetch or interactive-mode failure.
pub const EXIT_FAILURE: u8 = 1;

/// Writes the joke followed by a newline and flushes the sink.
pub fn print_joke<W: Write + ?Sized>(out: &mut W, text: &str) -> Result<()> {
    log::debug!("Printing {} bytes of joke text", text.len());
    writeln!(out, "{}", text)?;
    out.flush()?;
    Ok(())
}

/// Maps the outcome of a run to its process status.
///
/// Failures are reported on `err_out` as `Error: <message>`.
pub fn exit_status<W: Write + ?Sized>(outcome: Result<()>, err_out: &mut W) -> u8 {
    match outcome {
        Ok(()) => EXIT_SUCCESS,
        Err(err) => {
            log::debug!("Exiting after error: {:?}", err);
            if let Err(write_err) = writeln!(err_out, "Error: {}", err) {
                log::warn!("Could not report error: {}", write_err);
            }
            EXIT_FAILURE
        }
    }
}
