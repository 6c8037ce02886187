//! Raw mode: echo and canonical line buffering switched off for a scope.
//!
//! Only `ECHO` and `ICANON` are cleared. Output post-processing and signal
//! generation keep their cooked settings, so Ctrl-C still raises `SIGINT`,
//! which the session turns into an orderly exit.

use crate::error::{EditorError, Result};
use rustix::termios::{self, LocalModes, OptionalActions, Termios};
use std::io::{self, Stdin};

/// Holds the terminal in raw mode until dropped.
///
/// Dropping the guard writes back the exact attributes that were in place
/// when it was created, on every exit path including unwinding.
pub struct RawModeGuard {
    stdin: Stdin,
    original: Termios,
}

impl RawModeGuard {
    /// Save the current attributes of stdin and switch it to raw mode.
    ///
    /// # Errors
    ///
    /// [`EditorError::TerminalAttributes`] if the attributes cannot be read,
    /// [`EditorError::RawMode`] if they cannot be updated.
    pub fn enable() -> Result<Self> {
        let stdin = io::stdin();
        let original = termios::tcgetattr(&stdin)
            .map_err(|e| EditorError::TerminalAttributes(e.into()))?;

        let raw = raw_attributes(&original);
        termios::tcsetattr(&stdin, OptionalActions::Now, &raw)
            .map_err(|e| EditorError::RawMode(e.into()))?;

        tracing::debug!("raw mode enabled");
        Ok(Self { stdin, original })
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if let Err(e) = termios::tcsetattr(&self.stdin, OptionalActions::Now, &self.original) {
            tracing::error!(error = %e, "could not restore terminal attributes");
        } else {
            tracing::debug!("raw mode disabled");
        }
    }
}

impl std::fmt::Debug for RawModeGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RawModeGuard")
            .field("local_modes", &self.original.local_modes)
            .finish_non_exhaustive()
    }
}

/// Copy of `original` with echo and canonical mode disabled.
fn raw_attributes(original: &Termios) -> Termios {
    let mut raw = original.clone();
    raw.local_modes.remove(LocalModes::ECHO | LocalModes::ICANON);
    raw
}
