//! Editor: The state machine that owns the buffer and drives the main loop.
//!
//! One iteration of the loop renders a frame, waits for one input event and
//! applies it. Everything the loop mutates lives in [`Editor`]; the terminal
//! is borrowed for the length of [`Editor::run`].

use super::key::Key;
use super::mode::{Action, Mode};
use crate::buffer::TextBuffer;
use crate::config::EditorConfig;
use crate::error::Result;
use crate::terminal::{InputEvent, OutputBuffer, Terminal};
use crate::view::Viewport;
use std::path::{Path, PathBuf};

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    /// The user pressed the quit key.
    Quit,
    /// `SIGINT` or `SIGTERM` arrived.
    Terminated,
}

impl Exit {
    /// Process exit status for this outcome.
    #[inline]
    pub const fn code(self) -> u8 {
        match self {
            Self::Quit => 0,
            Self::Terminated => 1,
        }
    }
}

/// A modal editor bound to one file.
#[derive(Debug)]
pub struct Editor {
    /// The text being edited.
    buffer: TextBuffer,
    /// Scroll state and render target.
    viewport: Viewport,
    /// Current mode.
    mode: Mode,
    /// Where the buffer is saved.
    path: PathBuf,
    /// Reused frame buffer.
    output: OutputBuffer,
    /// Set by the quit key; the loop stops before the next render.
    quit: bool,
}

impl Editor {
    /// Create an editor with the default configuration.
    pub fn new(buffer: TextBuffer, path: impl Into<PathBuf>) -> Self {
        Self::with_config(buffer, path, &EditorConfig::default())
    }

    /// Create an editor with a custom configuration.
    ///
    /// The viewport starts at 0x0 and is sized from the terminal when
    /// [`run`](Self::run) starts.
    pub fn with_config(buffer: TextBuffer, path: impl Into<PathBuf>, config: &EditorConfig) -> Self {
        Self {
            buffer,
            viewport: Viewport::new(0, 0, config),
            mode: Mode::Normal,
            path: path.into(),
            output: OutputBuffer::new(),
            quit: false,
        }
    }

    /// Get the buffer.
    #[inline]
    pub const fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    /// Get the viewport.
    #[inline]
    pub const fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Get the current mode.
    #[inline]
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    /// Get the file path.
    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Check if the quit key was pressed.
    #[inline]
    pub const fn should_quit(&self) -> bool {
        self.quit
    }

    /// Apply one key in the current mode.
    pub fn handle_key(&mut self, key: Key) {
        let action = self.mode.action(key);
        tracing::trace!(?key, ?action, mode = ?self.mode, "key");

        match action {
            Action::Quit => self.quit = true,
            Action::EnterInsert => self.set_mode(Mode::Insert),
            Action::LeaveInsert => {
                self.save();
                self.set_mode(Mode::Normal);
            }
            Action::Move(motion) => self.buffer.apply(motion),
            Action::Insert(byte) => {
                let cursor = self.buffer.cursor();
                self.buffer.insert_char(cursor, byte);
            }
            Action::DeleteForward => {
                let cursor = self.buffer.cursor();
                self.buffer.delete_char_forward(cursor);
            }
            Action::DeleteBackward => {
                let cursor = self.buffer.cursor();
                self.buffer.delete_char_backward(cursor);
            }
            Action::Ignore => {}
        }
    }

    /// Write the buffer to its file.
    ///
    /// Failures are logged and otherwise ignored: the session keeps running
    /// and the buffer is left as it was.
    pub fn save(&self) -> bool {
        match self.buffer.save(&self.path) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(error = %e, "save failed");
                false
            }
        }
    }

    /// Resize the viewport to `rows x cols`.
    pub fn resize(&mut self, rows: usize, cols: usize) {
        self.viewport.resize(rows, cols);
    }

    /// Render the current state into a frame.
    ///
    /// Returns `None` when the terminal is too small to draw into.
    pub fn render(&mut self) -> Option<&[u8]> {
        let cursor = self.viewport.render(&self.buffer, self.mode)?;
        self.output.clear();
        self.output.frame(self.viewport.grid(), cursor);
        Some(self.output.as_bytes())
    }

    /// Run the main loop until quit, a termination signal or a fatal error.
    ///
    /// # Errors
    ///
    /// Returns the first terminal error. Input errors, including end of
    /// input, are fatal; file errors never reach this point.
    pub fn run<T: Terminal>(&mut self, terminal: &mut T) -> Result<Exit> {
        let result = self.run_loop(terminal);
        match &result {
            Ok(exit) => tracing::info!(?exit, "session ended"),
            Err(e) => tracing::error!(error = %e, "session aborted"),
        }
        result
    }

    fn run_loop<T: Terminal>(&mut self, terminal: &mut T) -> Result<Exit> {
        let (rows, cols) = terminal.size()?;
        self.resize(rows, cols);
        tracing::info!(path = %self.path.display(), rows, cols, "session started");

        while !self.quit {
            if let Some(frame) = self.render() {
                terminal.write_frame(frame)?;
            }

            match terminal.read_event()? {
                InputEvent::Token(token) => self.handle_key(Key::classify(token.as_bytes())),
                InputEvent::Overflow => tracing::debug!("discarded oversized input"),
                InputEvent::Resize => {
                    let (rows, cols) = terminal.size()?;
                    self.resize(rows, cols);
                }
                InputEvent::Terminate => return Ok(Exit::Terminated),
            }
        }
        Ok(Exit::Quit)
    }

    fn set_mode(&mut self, mode: Mode) {
        tracing::debug!(from = ?self.mode, to = ?mode, "mode change");
        self.mode = mode;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn type_keys(editor: &mut Editor, keys: &[u8]) {
        for &byte in keys {
            editor.handle_key(Key::classify(&[byte]));
        }
    }

    #[test]
    fn test_starts_in_normal_mode() {
        let editor = Editor::new(TextBuffer::new(), "unused.txt");
        assert_eq!(editor.mode(), Mode::Normal);
        assert!(!editor.should_quit());
        assert_eq!(editor.viewport().grid().rows(), 0);
    }

    #[test]
    fn test_insert_scenario() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        let mut editor = Editor::new(TextBuffer::open(&path).unwrap(), &path);

        editor.handle_key(Key::Char(b'e'));
        assert_eq!(editor.mode(), Mode::Insert);
        type_keys(&mut editor, b"ab\ncd");
        assert_eq!(editor.buffer().data(), b"ab\ncd");
        assert_eq!(editor.buffer().cursor(), 5);

        editor.handle_key(Key::Escape);
        assert_eq!(editor.mode(), Mode::Normal);
        assert_eq!(std::fs::read(&path).unwrap(), b"ab\ncd");

        editor.handle_key(Key::Char(b'k'));
        assert_eq!(editor.buffer().cursor(), 3);
        editor.handle_key(Key::Char(b'q'));
        assert!(editor.should_quit());
    }

    #[test]
    fn test_normal_mode_keys_do_not_insert() {
        let mut editor = Editor::new(TextBuffer::from_bytes(b"one\ntwo".to_vec()), "unused.txt");
        type_keys(&mut editor, b"xyzw");
        assert_eq!(editor.buffer().data(), b"one\ntwo");
        assert_eq!(editor.buffer().current_line(), 1);

        editor.handle_key(Key::Char(b's'));
        assert_eq!(editor.buffer().current_line(), 0);
    }

    #[test]
    fn test_edit_keys_in_normal_mode() {
        let mut editor = Editor::new(TextBuffer::from_bytes(b"abc".to_vec()), "unused.txt");
        editor.handle_key(Key::Delete);
        assert_eq!(editor.buffer().data(), b"bc");

        editor.handle_key(Key::Char(b':'));
        editor.handle_key(Key::Backspace);
        assert_eq!(editor.buffer().data(), b"b");

        editor.handle_key(Key::Newline);
        assert_eq!(editor.buffer().data(), b"b\n");
        assert_eq!(editor.buffer().cursor(), 2);
    }

    #[test]
    fn test_escape_space_toggles_modes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("toggle.txt");
        let mut editor = Editor::new(TextBuffer::new(), &path);

        editor.handle_key(Key::EscapeSpace);
        assert_eq!(editor.mode(), Mode::Insert);
        editor.handle_key(Key::Char(b'x'));
        editor.handle_key(Key::EscapeSpace);
        assert_eq!(editor.mode(), Mode::Normal);
        assert_eq!(std::fs::read(&path).unwrap(), b"x");
    }

    #[test]
    fn test_failed_save_keeps_session_alive() {
        let dir = tempfile::tempdir().unwrap();
        let mut editor = Editor::new(TextBuffer::new(), dir.path());

        editor.handle_key(Key::Char(b'e'));
        editor.handle_key(Key::Char(b'z'));
        editor.handle_key(Key::Escape);

        assert_eq!(editor.mode(), Mode::Normal);
        assert_eq!(editor.buffer().data(), b"z");
        assert!(!editor.save());
    }

    #[test]
    fn test_render_needs_a_size() {
        let mut editor = Editor::new(TextBuffer::new(), "unused.txt");
        assert!(editor.render().is_none());

        editor.resize(5, 20);
        let frame = editor.render().unwrap().to_vec();
        assert!(frame.starts_with(b"\x1b[H"));
        assert!(frame.ends_with(b"\x1b[1;1H"));
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(Exit::Quit.code(), 0);
        assert_eq!(Exit::Terminated.code(), 1);
    }
}
