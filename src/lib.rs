//! # noed
//!
//! A small modal text editor for the terminal.
//!
//! The whole file is held in memory as raw bytes. A line index is rebuilt
//! after every edit, a viewport projects a scrollable window of the buffer
//! onto a character grid, and a two-mode state machine turns raw terminal
//! input into edits and cursor motions.
//!
//! ## Core Concepts
//!
//! - **Byte buffer**: No encoding, no normalization; load and save are exact
//! - **Full redraw**: Every frame rewrites the grid from scratch, without
//!   clearing the screen
//! - **Modes**: `Normal` binds single keys to motions, `Insert` types text
//! - **Guarded terminal**: Raw mode and signal handlers are restored on
//!   every exit path
//!
//! ## Example
//!
//! ```rust,no_run
//! use noed::{Editor, TextBuffer, TtyTerminal};
//!
//! let buffer = TextBuffer::open("notes.txt")?;
//! let mut editor = Editor::new(buffer, "notes.txt");
//! let mut terminal = TtyTerminal::acquire()?;
//! let exit = editor.run(&mut terminal)?;
//! # let _ = exit;
//! # Ok::<(), noed::EditorError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod buffer;
pub mod config;
pub mod editor;
pub mod error;
pub mod logging;
pub mod terminal;
pub mod view;

// Re-exports for convenience
pub use buffer::{Line, Motion, TextBuffer};
pub use config::EditorConfig;
pub use editor::{Action, Editor, Exit, Key, Mode};
pub use error::{EditorError, Result};
pub use terminal::{InputEvent, Terminal, Token, TtyTerminal};
pub use view::{Grid, ScreenCursor, Viewport};
