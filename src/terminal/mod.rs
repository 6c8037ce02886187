//! Terminal layer: raw mode, input decoding and frame output.
//!
//! The editor only talks to the [`Terminal`] trait. [`TtyTerminal`] is the
//! real implementation backed by the process's stdin and stdout.

mod input;
mod output;
mod raw_mode;
mod signals;
mod tty;

pub use input::{InputDecoder, InputEvent, Token};
pub use output::{OutputBuffer, CLEAR_SCREEN, CURSOR_HOME};
pub use raw_mode::RawModeGuard;
pub use signals::SignalPipes;
pub use tty::TtyTerminal;

use crate::error::Result;

/// What the editor needs from a terminal.
pub trait Terminal {
    /// Current size as `(rows, cols)`.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::TerminalSize`](crate::EditorError::TerminalSize)
    /// if the size cannot be queried.
    fn size(&self) -> Result<(usize, usize)>;

    /// Block until the next input event.
    ///
    /// # Errors
    ///
    /// Returns an error when input can no longer be read. The session ends.
    fn read_event(&mut self) -> Result<InputEvent>;

    /// Write a complete frame.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::Output`](crate::EditorError::Output) on a
    /// failed write.
    fn write_frame(&mut self, frame: &[u8]) -> Result<()>;
}
