//! Error types shared by the buffer, terminal and editor layers.

use std::io;
use std::path::PathBuf;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, EditorError>;

/// Everything that can go wrong while opening, editing or saving a file.
///
/// Setup variants are reported before the terminal is switched into raw mode.
/// File variants raised during an interactive session are logged and absorbed
/// by the editor; session variants end the main loop.
#[derive(Debug, thiserror::Error)]
pub enum EditorError {
    /// Stdin or stdout is not attached to a terminal.
    #[error("please run the editor in the terminal")]
    NotATerminal,

    /// The terminal attributes could not be read.
    #[error("could not get the state of the terminal: {0}")]
    TerminalAttributes(#[source] io::Error),

    /// The terminal attributes could not be updated.
    #[error("could not update the state of the terminal: {0}")]
    RawMode(#[source] io::Error),

    /// The resize or termination signal handlers could not be installed.
    #[error("could not set up window resize signal: {0}")]
    SignalHandler(#[source] io::Error),

    /// The terminal size could not be queried.
    #[error("could not query the size of the terminal: {0}")]
    TerminalSize(#[source] io::Error),

    /// The path exists but does not name a regular file.
    #[error("{} is not a regular file", path.display())]
    NotRegularFile {
        /// Offending path.
        path: PathBuf,
    },

    /// Reading the file failed.
    #[error("could not read file {}: {source}", path.display())]
    Read {
        /// File being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Writing the file failed.
    #[error("could not write into file {}: {source}", path.display())]
    Write {
        /// File being written.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Reading user input failed.
    #[error("something went wrong during reading of the user input: {0}")]
    Input(#[source] io::Error),

    /// Stdin reached end of file.
    #[error("the input stream was closed")]
    InputClosed,

    /// Writing a frame to the terminal failed.
    #[error("could not write to the terminal: {0}")]
    Output(#[source] io::Error),

    /// The log file could not be created.
    #[error("could not open log file {}: {source}", path.display())]
    LogFile {
        /// Requested log path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
}
