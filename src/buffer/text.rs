//! `TextBuffer`: The edited bytes, the cursor and the line index.
//!
//! The buffer is a flat `Vec<u8>`. Every structural mutation rebuilds the
//! whole line index with a single `\n` scan, so every operation here is
//! O(n) in the size of the file.

use super::line::Line;
use super::motion::Motion;
use crate::error::{EditorError, Result};
use std::fs::{self, File};
use std::io::{self, Read, Write};
use std::path::Path;

/// In-memory file content with a byte cursor and a derived line index.
///
/// # Invariants
///
/// - `0 <= cursor <= data.len()`
/// - `lines` is never empty; `lines[0].begin == 0`,
///   `lines[i].end + 1 == lines[i + 1].begin` and the last line ends at
///   `data.len()`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBuffer {
    /// Raw file bytes.
    data: Vec<u8>,
    /// One span per line, rebuilt after every mutation.
    lines: Vec<Line>,
    /// Byte offset into `data`.
    cursor: usize,
}

impl TextBuffer {
    /// Create an empty buffer with a single empty line.
    pub fn new() -> Self {
        Self::from_bytes(Vec::new())
    }

    /// Create a buffer holding `data`, with the cursor at the start.
    pub fn from_bytes(data: Vec<u8>) -> Self {
        let mut buffer = Self {
            data,
            lines: Vec::new(),
            cursor: 0,
        };
        buffer.recompute_lines();
        buffer
    }

    /// Load a file into a new buffer.
    ///
    /// A path that does not exist yields an empty buffer, so the file is
    /// created on the first save.
    ///
    /// # Errors
    ///
    /// Fails with [`EditorError::NotRegularFile`] when the path names a
    /// directory or a device, and with [`EditorError::Read`] when the
    /// metadata or the content cannot be read.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let read_err = |source: io::Error| EditorError::Read {
            path: path.to_path_buf(),
            source,
        };

        let metadata = match fs::metadata(path) {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "file does not exist, starting empty");
                return Ok(Self::new());
            }
            Err(e) => return Err(read_err(e)),
        };

        if !metadata.is_file() {
            return Err(EditorError::NotRegularFile {
                path: path.to_path_buf(),
            });
        }

        let mut file = File::open(path).map_err(read_err)?;
        let mut data = Vec::with_capacity(usize::try_from(metadata.len()).unwrap_or(0));
        // `read_to_end` keeps reading across short reads until EOF.
        file.read_to_end(&mut data).map_err(read_err)?;

        let buffer = Self::from_bytes(data);
        tracing::debug!(
            path = %path.display(),
            bytes = buffer.len(),
            lines = buffer.line_count(),
            "opened file"
        );
        Ok(buffer)
    }

    /// Write the buffer content to `path`, creating or truncating it.
    ///
    /// The buffer itself is never modified, whether or not the write succeeds.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        write_file(path.as_ref(), &self.data)
    }

    /// Get the raw bytes.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Get the number of bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the buffer holds no bytes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get the line index.
    #[inline]
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Get the number of lines (always at least one).
    #[inline]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Get a line span by index.
    #[inline]
    pub fn line(&self, index: usize) -> Option<Line> {
        self.lines.get(index).copied()
    }

    /// Get the content of a line, without its `\n`.
    pub fn line_bytes(&self, index: usize) -> Option<&[u8]> {
        self.line(index).map(|line| &self.data[line.begin..line.end])
    }

    /// Get the cursor offset.
    #[inline]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Move the cursor, clamping it to `[0, len]`.
    #[inline]
    pub fn set_cursor(&mut self, cursor: usize) {
        self.cursor = cursor.min(self.data.len());
    }

    /// Rebuild the line index from scratch.
    pub fn recompute_lines(&mut self) {
        self.lines.clear();

        let mut begin = 0;
        for (i, &byte) in self.data.iter().enumerate() {
            if byte == b'\n' {
                self.lines.push(Line::new(begin, i));
                begin = i + 1;
            }
        }

        self.lines.push(Line::new(begin, self.data.len()));
    }

    /// Insert `byte` at `pos` (clamped to `[0, len]`).
    ///
    /// The cursor advances past the new byte only when it sat exactly at `pos`.
    pub fn insert_char(&mut self, pos: usize, byte: u8) {
        let pos = pos.min(self.data.len());
        self.data.insert(pos, byte);
        if pos == self.cursor {
            self.cursor += 1;
        }
        self.recompute_lines();
    }

    /// Delete the byte at `pos`. No-op at the end of the buffer.
    pub fn delete_char_forward(&mut self, pos: usize) {
        if pos >= self.data.len() {
            return;
        }
        self.data.remove(pos);
        self.cursor = self.cursor.min(self.data.len());
        self.recompute_lines();
    }

    /// Delete the byte before `pos` and step the cursor back. No-op at 0.
    pub fn delete_char_backward(&mut self, pos: usize) {
        let pos = pos.min(self.data.len());
        if pos == 0 {
            return;
        }
        self.data.remove(pos - 1);
        self.cursor = self.cursor.saturating_sub(1).min(self.data.len());
        self.recompute_lines();
    }

    /// Index of the line holding `offset`.
    ///
    /// At a line boundary the first matching line wins.
    ///
    /// # Panics
    ///
    /// Panics if no line covers `offset`, which means the line index is out
    /// of sync with the data.
    pub fn line_of(&self, offset: usize) -> usize {
        match self.lines.iter().position(|line| line.contains(offset)) {
            Some(index) => index,
            None => panic!(
                "offset {offset} is not covered by any of the {} lines (len {})",
                self.lines.len(),
                self.data.len()
            ),
        }
    }

    /// Index of the line holding the cursor.
    #[inline]
    pub fn current_line(&self) -> usize {
        self.line_of(self.cursor)
    }

    /// Cursor offset relative to the beginning of its line.
    pub fn cursor_column(&self) -> usize {
        self.cursor - self.lines[self.current_line()].begin
    }

    /// Put the cursor at the beginning of a zero-based line.
    ///
    /// An index past the end of the buffer lands on the last line.
    pub fn place_cursor_at_line(&mut self, index: usize) {
        let index = index.min(self.lines.len() - 1);
        self.cursor = self.lines[index].begin;
    }

    /// Apply a cursor motion.
    pub fn apply(&mut self, motion: Motion) {
        self.cursor = motion.apply(self, self.cursor);
    }
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new()
    }
}

/// Create or truncate `path` and write all of `data` into it.
///
/// `write_all` retries partial writes until every byte is out.
fn write_file(path: &Path, data: &[u8]) -> Result<()> {
    let write_err = |source: io::Error| EditorError::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut file = File::create(path).map_err(write_err)?;
    file.write_all(data).map_err(write_err)?;
    file.flush().map_err(write_err)?;

    tracing::info!(path = %path.display(), bytes = data.len(), "saved file");
    Ok(())
}
