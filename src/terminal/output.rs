//! `OutputBuffer`: Single-syscall output buffer for ANSI sequences.

use crate::view::{Grid, ScreenCursor};
use std::io::Write;

/// Cursor home, `CSI H`.
pub const CURSOR_HOME: &[u8] = b"\x1b[H";

/// Erase the whole screen, `CSI 2 J`.
pub const CLEAR_SCREEN: &[u8] = b"\x1b[2J";

/// Pre-allocated buffer for building a frame.
///
/// All output is accumulated here, then flushed in a single `write()` syscall
/// to keep the terminal from showing half-drawn frames.
#[derive(Debug, Clone)]
pub struct OutputBuffer {
    data: Vec<u8>,
}

impl OutputBuffer {
    /// Create a new output buffer with the given capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Create a buffer sized for a typical terminal (4KB).
    pub fn new() -> Self {
        Self::with_capacity(4096)
    }

    /// Clear the buffer for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Get the buffer contents.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Get the buffer length.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if buffer is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Write raw bytes.
    #[inline]
    pub fn write_raw(&mut self, bytes: &[u8]) {
        self.data.extend_from_slice(bytes);
    }

    /// Move cursor to the top-left corner.
    #[inline]
    pub fn cursor_home(&mut self) {
        self.data.extend_from_slice(CURSOR_HOME);
    }

    /// Move cursor to (row, col), both 0-indexed.
    #[inline]
    pub fn cursor_move(&mut self, row: usize, col: usize) {
        // CSI row ; col H. Writing into a Vec cannot fail.
        write!(self.data, "\x1b[{};{}H", row + 1, col + 1).ok();
    }

    /// Clear the entire screen.
    #[inline]
    pub fn clear_screen(&mut self) {
        self.data.extend_from_slice(CLEAR_SCREEN);
    }

    /// Queue a full frame: home, every grid row, then the cursor position.
    ///
    /// Each row is written in full, so blank cells overwrite whatever the
    /// previous frame left there and no per-frame clear is needed.
    pub fn frame(&mut self, grid: &Grid, cursor: ScreenCursor) {
        self.cursor_home();
        for (row, cells) in grid.iter_rows().enumerate() {
            self.cursor_move(row, 0);
            self.write_raw(cells);
        }
        self.cursor_move(cursor.row, cursor.col);
    }

    /// Flush to a writer in a single syscall.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying writer fails.
    pub fn flush_to<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        writer.write_all(&self.data)?;
        writer.flush()
    }
}

impl Default for OutputBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_cursor_move_is_one_indexed() {
        let mut out = OutputBuffer::new();
        out.cursor_move(0, 0);
        out.cursor_move(4, 11);
        assert_eq!(out.as_bytes(), b"\x1b[1;1H\x1b[5;12H");
    }

    #[test]
    fn test_frame_layout() {
        let mut grid = Grid::new(2, 3);
        grid.put_row(0, b"ab");
        let mut out = OutputBuffer::new();
        out.frame(&grid, ScreenCursor { row: 0, col: 2 });

        assert_eq!(
            out.as_bytes(),
            b"\x1b[H\x1b[1;1Hab \x1b[2;1H   \x1b[1;3H".as_slice()
        );
        assert!(!out.as_bytes().windows(4).any(|w| w == CLEAR_SCREEN));
    }

    fn screen_row(screen: &vt100::Screen, row: u16, cols: u16) -> String {
        (0..cols)
            .map(|col| {
                screen
                    .cell(row, col)
                    .and_then(|cell| cell.contents().chars().next())
                    .unwrap_or(' ')
            })
            .collect()
    }

    #[test]
    fn test_frame_on_vt100_screen() {
        let mut grid = Grid::new(3, 10);
        grid.put_row(0, b"hello");
        grid.put_row(1, b"~");
        let mut out = OutputBuffer::new();
        out.frame(&grid, ScreenCursor { row: 0, col: 5 });

        let mut parser = vt100::Parser::new(3, 10, 0);
        parser.process(b"garbage everywhere");
        parser.process(out.as_bytes());

        let screen = parser.screen();
        assert_eq!(screen_row(screen, 0, 10), "hello     ");
        assert_eq!(screen_row(screen, 1, 10), "~         ");
        assert_eq!(screen_row(screen, 2, 10), "          ");
        assert_eq!(parser.screen().cursor_position(), (0, 5));
    }

    #[test]
    fn test_flush_to_writer() {
        let mut out = OutputBuffer::new();
        out.clear_screen();
        out.cursor_home();
        let mut sink = Vec::new();
        out.flush_to(&mut sink).unwrap();
        assert_eq!(sink, b"\x1b[2J\x1b[H");

        out.clear();
        assert!(out.is_empty());
    }
}
