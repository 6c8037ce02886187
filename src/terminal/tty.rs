//! The process's controlling terminal.

use super::input::{InputDecoder, InputEvent};
use super::output::OutputBuffer;
use super::raw_mode::RawModeGuard;
use super::signals::SignalPipes;
use super::Terminal;
use crate::error::{EditorError, Result};
use crossterm::tty::IsTty;
use std::io::{self, Stdin, Stdout, Write};

/// [`Terminal`] on stdin and stdout.
///
/// Acquiring one switches the terminal to raw mode, installs the signal
/// handlers and clears the screen. Dropping it clears the screen again,
/// removes the handlers and restores the saved attributes, in that order.
#[derive(Debug)]
pub struct TtyTerminal {
    stdout: Stdout,
    input: InputDecoder<Stdin>,
    // Declared last so the attributes are restored after everything else.
    _raw_mode: RawModeGuard,
}

impl TtyTerminal {
    /// Take over the terminal.
    ///
    /// # Errors
    ///
    /// [`EditorError::NotATerminal`] if stdin or stdout is not a terminal.
    /// Otherwise the first failing step's error; steps already taken are
    /// undone before returning.
    pub fn acquire() -> Result<Self> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        if !stdin.is_tty() || !stdout.is_tty() {
            return Err(EditorError::NotATerminal);
        }

        let raw_mode = RawModeGuard::enable()?;
        let signals = SignalPipes::register().map_err(EditorError::SignalHandler)?;

        let mut terminal = Self {
            stdout,
            input: InputDecoder::new(stdin, signals),
            _raw_mode: raw_mode,
        };
        terminal.clear()?;
        tracing::info!("terminal acquired");
        Ok(terminal)
    }

    fn clear(&mut self) -> Result<()> {
        let mut out = OutputBuffer::with_capacity(16);
        out.clear_screen();
        out.cursor_home();
        out.flush_to(&mut self.stdout).map_err(EditorError::Output)
    }
}

impl Terminal for TtyTerminal {
    fn size(&self) -> Result<(usize, usize)> {
        let (cols, rows) = crossterm::terminal::size().map_err(EditorError::TerminalSize)?;
        Ok((usize::from(rows), usize::from(cols)))
    }

    fn read_event(&mut self) -> Result<InputEvent> {
        self.input.next_event()
    }

    fn write_frame(&mut self, frame: &[u8]) -> Result<()> {
        self.stdout
            .write_all(frame)
            .and_then(|()| self.stdout.flush())
            .map_err(EditorError::Output)
    }
}

impl Drop for TtyTerminal {
    fn drop(&mut self) {
        if let Err(e) = self.clear() {
            tracing::warn!(error = %e, "could not clear the screen on exit");
        }
        tracing::info!("terminal released");
    }
}
