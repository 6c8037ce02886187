//! Viewport: Projects a scrollable window of the buffer onto a [`Grid`].
//!
//! The last grid row is reserved for the mode indicator, so only
//! `rows - 1` buffer lines are ever visible. Scrolling is lazy: the
//! offsets only move when the cursor leaves the visible window.

use super::grid::Grid;
use crate::buffer::TextBuffer;
use crate::config::EditorConfig;
use crate::editor::Mode;

/// Position of the terminal cursor inside the grid (0-indexed).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ScreenCursor {
    /// Grid row.
    pub row: usize,
    /// Grid column.
    pub col: usize,
}

/// Drawing parameters taken from the editor configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Style {
    indicator: Vec<u8>,
    end_marker: u8,
    placeholder: u8,
}

/// Scroll state plus the grid it renders into.
#[derive(Debug, Clone)]
pub struct Viewport {
    /// First visible line.
    view_row: usize,
    /// First visible byte column.
    view_col: usize,
    /// Render target, reallocated on resize.
    grid: Grid,
    style: Style,
}

impl Viewport {
    /// Create a viewport for a terminal of `rows x cols`.
    pub fn new(rows: usize, cols: usize, config: &EditorConfig) -> Self {
        Self {
            view_row: 0,
            view_col: 0,
            grid: Grid::new(rows, cols),
            style: Style {
                indicator: config.insert_indicator.as_bytes().to_vec(),
                end_marker: config.end_of_buffer_marker,
                placeholder: config.placeholder,
            },
        }
    }

    /// Get the first visible line.
    #[inline]
    pub const fn view_row(&self) -> usize {
        self.view_row
    }

    /// Get the first visible column.
    #[inline]
    pub const fn view_col(&self) -> usize {
        self.view_col
    }

    /// Get the grid produced by the last render.
    #[inline]
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Number of buffer lines that fit on screen.
    #[inline]
    pub const fn visible_rows(&self) -> usize {
        self.grid.rows().saturating_sub(1)
    }

    /// Number of bytes per line that fit on screen.
    #[inline]
    pub const fn visible_cols(&self) -> usize {
        self.grid.cols()
    }

    /// Reallocate the grid for a new terminal size.
    ///
    /// Scroll offsets are kept; the next render pulls them back around the
    /// cursor.
    pub fn resize(&mut self, rows: usize, cols: usize) {
        if rows == self.grid.rows() && cols == self.grid.cols() {
            return;
        }
        tracing::debug!(rows, cols, "viewport resized");
        self.grid = Grid::new(rows, cols);
    }

    /// Check if the terminal is too small to draw anything useful.
    pub fn is_degenerate(&self) -> bool {
        self.grid.rows() < 2
            || self.grid.cols() == 0
            || self.grid.cols() < self.style.indicator.len()
    }

    /// Scroll to the cursor and redraw the grid.
    ///
    /// Returns where the terminal cursor should be placed, or `None` when the
    /// terminal is too small, in which case nothing is drawn.
    pub fn render(&mut self, buffer: &TextBuffer, mode: Mode) -> Option<ScreenCursor> {
        if self.is_degenerate() {
            return None;
        }

        let cursor_row = buffer.current_line();
        let cursor_col = buffer.cursor() - buffer.lines()[cursor_row].begin;
        self.follow_cursor(cursor_row, cursor_col);

        self.grid.clear();
        for i in 0..self.visible_rows() {
            if let Some(bytes) = buffer.line_bytes(self.view_row + i) {
                let start = self.view_col.min(bytes.len());
                let written = self.grid.put_row(i, &bytes[start..]);
                self.mask_unprintable(i, written);
            } else {
                self.grid.set(i, 0, self.style.end_marker);
            }
        }

        if mode == Mode::Insert {
            let last = self.grid.rows() - 1;
            self.grid.put_row(last, &self.style.indicator);
        }

        Some(ScreenCursor {
            row: cursor_row - self.view_row,
            col: (cursor_col - self.view_col).min(self.grid.cols()),
        })
    }

    /// Move the offsets the least amount that puts the cursor on screen.
    fn follow_cursor(&mut self, cursor_row: usize, cursor_col: usize) {
        let rows = self.visible_rows();
        let cols = self.visible_cols();

        if cursor_row < self.view_row {
            self.view_row = cursor_row;
        }
        if cursor_row >= self.view_row + rows {
            self.view_row = cursor_row + 1 - rows;
        }

        if cursor_col < self.view_col {
            self.view_col = cursor_col;
        }
        if cursor_col >= self.view_col + cols {
            self.view_col = cursor_col + 1 - cols;
        }
    }

    /// Replace control and non-ASCII bytes so they can't drive the terminal.
    fn mask_unprintable(&mut self, row: usize, len: usize) {
        let placeholder = self.style.placeholder;
        if let Some(cells) = self.grid.row_mut(row) {
            for cell in &mut cells[..len] {
                if !is_printable(*cell) {
                    *cell = placeholder;
                }
            }
        }
    }
}

/// Printable ASCII, `0x20..=0x7E`.
#[inline]
pub const fn is_printable(byte: u8) -> bool {
    matches!(byte, b' '..=b'~')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::Motion;
    use pretty_assertions::assert_eq;

    fn viewport(rows: usize, cols: usize) -> Viewport {
        Viewport::new(rows, cols, &EditorConfig::default())
    }

    fn buffer(text: &str) -> TextBuffer {
        TextBuffer::from_bytes(text.as_bytes().to_vec())
    }

    fn rows_of(viewport: &Viewport) -> Vec<String> {
        viewport
            .grid()
            .iter_rows()
            .map(|row| String::from_utf8_lossy(row).into_owned())
            .collect()
    }

    fn assert_cursor_visible(viewport: &Viewport, buffer: &TextBuffer) {
        let row = buffer.current_line();
        let col = buffer.cursor_column();
        assert!(viewport.view_row() <= row && row < viewport.view_row() + viewport.visible_rows());
        assert!(viewport.view_col() <= col && col < viewport.view_col() + viewport.visible_cols());
    }

    #[test]
    fn test_render_small_file() {
        let mut vp = viewport(4, 12);
        let buf = buffer("ab\ncd");
        let cursor = vp.render(&buf, Mode::Normal).unwrap();

        assert_eq!(
            rows_of(&vp),
            vec!["ab          ", "cd          ", "~           ", "            "]
        );
        assert_eq!(cursor, ScreenCursor { row: 0, col: 0 });
    }

    #[test]
    fn test_render_insert_indicator() {
        let mut vp = viewport(3, 14);
        let buf = TextBuffer::new();
        vp.render(&buf, Mode::Insert).unwrap();
        assert_eq!(rows_of(&vp)[2], "-- INSERT --  ");
    }

    #[test]
    fn test_render_degenerate_sizes() {
        let buf = buffer("text");
        assert_eq!(viewport(1, 80).render(&buf, Mode::Normal), None);
        assert_eq!(viewport(24, 5).render(&buf, Mode::Normal), None);
        assert_eq!(viewport(0, 0).render(&buf, Mode::Normal), None);
        assert!(viewport(2, 12).render(&buf, Mode::Normal).is_some());
    }

    #[test]
    fn test_scrolls_down_and_back_up() {
        let text: String = (0..10).map(|i| format!("line{i}\n")).collect();
        let mut buf = buffer(&text);
        let mut vp = viewport(4, 20);

        buf.place_cursor_at_line(7);
        let cursor = vp.render(&buf, Mode::Normal).unwrap();
        assert_eq!(vp.view_row(), 5);
        assert_eq!(cursor.row, 2);
        assert_eq!(rows_of(&vp)[0].trim_end(), "line5");

        buf.place_cursor_at_line(1);
        let cursor = vp.render(&buf, Mode::Normal).unwrap();
        assert_eq!(vp.view_row(), 1);
        assert_eq!(cursor.row, 0);
    }

    #[test]
    fn test_scrolls_horizontally() {
        let mut buf = buffer("0123456789abcdefghij");
        let mut vp = viewport(3, 12);

        buf.apply(Motion::LineEnd);
        let cursor = vp.render(&buf, Mode::Normal).unwrap();
        assert_eq!(vp.view_col(), 9);
        assert_eq!(rows_of(&vp)[0], "9abcdefghij ");
        assert_eq!(cursor, ScreenCursor { row: 0, col: 11 });

        buf.apply(Motion::LineStart);
        vp.render(&buf, Mode::Normal).unwrap();
        assert_eq!(vp.view_col(), 0);
    }

    #[test]
    fn test_short_lines_clip_when_scrolled() {
        let mut buf = buffer("ab\n0123456789abcdefghij");
        let mut vp = viewport(3, 12);
        buf.apply(Motion::BufferEnd);
        vp.render(&buf, Mode::Normal).unwrap();
        assert_eq!(rows_of(&vp)[0], " ".repeat(12));
    }

    #[test]
    fn test_unprintable_bytes_are_masked() {
        let mut vp = viewport(3, 12);
        let buf = TextBuffer::from_bytes(b"a\tb\x1b[2J\xff".to_vec());
        vp.render(&buf, Mode::Normal).unwrap();
        assert_eq!(rows_of(&vp)[0], "a?b?[2J?    ");
    }

    #[test]
    fn test_resize_keeps_cursor_visible() {
        let text: String = (0..50).map(|i| format!("{i:>30}\n")).collect();
        let mut buf = buffer(&text);
        let mut vp = viewport(20, 40);

        let sizes = [(20, 40), (5, 13), (3, 12), (30, 80), (2, 12)];
        let moves = [
            Motion::ParagraphDown,
            Motion::LineUp,
            Motion::LineEnd,
            Motion::WordLeft,
            Motion::BufferStart,
            Motion::LineDown,
            Motion::BufferEnd,
            Motion::LineUp,
        ];
        for (rows, cols) in sizes {
            vp.resize(rows, cols);
            for motion in moves {
                buf.apply(motion);
                vp.render(&buf, Mode::Normal).unwrap();
                assert_cursor_visible(&vp, &buf);
            }
        }
    }

    #[test]
    fn test_is_printable() {
        assert!(is_printable(b' '));
        assert!(is_printable(b'~'));
        assert!(!is_printable(0x7f));
        assert!(!is_printable(b'\n'));
    }
}
