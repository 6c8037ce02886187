//! Cursor motions: pure functions from a buffer and a cursor to a new cursor.
//!
//! None of these touch the buffer content. Every function returns an offset
//! in `[0, buffer.len()]` for any cursor in that same range.

use super::text::TextBuffer;

/// A cursor movement the editor can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Motion {
    /// One byte to the left.
    CharLeft,
    /// One byte to the right.
    CharRight,
    /// Same column on the previous line.
    LineUp,
    /// Same column on the next line.
    LineDown,
    /// Start of the previous word.
    WordLeft,
    /// End of the next word.
    WordRight,
    /// Start of the previous paragraph boundary.
    ParagraphUp,
    /// Start of the next paragraph boundary.
    ParagraphDown,
    /// First byte of the buffer.
    BufferStart,
    /// Past the last byte of the buffer.
    BufferEnd,
    /// First byte of the current line.
    LineStart,
    /// End of the current line.
    LineEnd,
}

impl Motion {
    /// Compute the cursor this motion lands on.
    pub fn apply(self, buffer: &TextBuffer, cursor: usize) -> usize {
        match self {
            Self::CharLeft => char_left(buffer, cursor),
            Self::CharRight => char_right(buffer, cursor),
            Self::LineUp => line_up(buffer, cursor),
            Self::LineDown => line_down(buffer, cursor),
            Self::WordLeft => word_left(buffer, cursor),
            Self::WordRight => word_right(buffer, cursor),
            Self::ParagraphUp => paragraph_up(buffer, cursor),
            Self::ParagraphDown => paragraph_down(buffer, cursor),
            Self::BufferStart => buffer_start(buffer, cursor),
            Self::BufferEnd => buffer_end(buffer, cursor),
            Self::LineStart => line_start(buffer, cursor),
            Self::LineEnd => line_end(buffer, cursor),
        }
    }
}

#[inline]
const fn is_word(byte: u8) -> bool {
    byte.is_ascii_alphanumeric()
}

/// Step one byte left, stopping at 0.
pub const fn char_left(_buffer: &TextBuffer, cursor: usize) -> usize {
    cursor.saturating_sub(1)
}

/// Step one byte right, stopping at the end of the buffer.
pub fn char_right(buffer: &TextBuffer, cursor: usize) -> usize {
    (cursor + 1).min(buffer.len())
}

/// Move to the previous line, keeping the column when it fits.
///
/// A column past the end of the shorter line is clamped and forgotten.
pub fn line_up(buffer: &TextBuffer, cursor: usize) -> usize {
    let row = buffer.line_of(cursor);
    if row == 0 {
        return cursor;
    }
    let lines = buffer.lines();
    let column = cursor - lines[row].begin;
    let target = lines[row - 1];
    (target.begin + column).min(target.end)
}

/// Move to the next line, keeping the column when it fits.
pub fn line_down(buffer: &TextBuffer, cursor: usize) -> usize {
    let row = buffer.line_of(cursor);
    let lines = buffer.lines();
    if row + 1 >= lines.len() {
        return cursor;
    }
    let column = cursor - lines[row].begin;
    let target = lines[row + 1];
    (target.begin + column).min(target.end)
}

/// Skip non-word bytes then word bytes, going left.
pub fn word_left(buffer: &TextBuffer, cursor: usize) -> usize {
    let data = buffer.data();
    let mut cursor = cursor.min(data.len());
    while cursor > 0 && !is_word(data[cursor - 1]) {
        cursor -= 1;
    }
    while cursor > 0 && is_word(data[cursor - 1]) {
        cursor -= 1;
    }
    cursor
}

/// Skip non-word bytes then word bytes, going right.
pub fn word_right(buffer: &TextBuffer, cursor: usize) -> usize {
    let data = buffer.data();
    let mut cursor = cursor.min(data.len());
    while cursor < data.len() && !is_word(data[cursor]) {
        cursor += 1;
    }
    while cursor < data.len() && is_word(data[cursor]) {
        cursor += 1;
    }
    cursor
}

/// Skip empty lines then non-empty lines upwards; land at a line start.
pub fn paragraph_up(buffer: &TextBuffer, cursor: usize) -> usize {
    let lines = buffer.lines();
    let mut row = buffer.line_of(cursor);
    while row > 0 && lines[row].is_empty() {
        row -= 1;
    }
    while row > 0 && !lines[row].is_empty() {
        row -= 1;
    }
    lines[row].begin
}

/// Skip empty lines then non-empty lines downwards; land at a line start.
pub fn paragraph_down(buffer: &TextBuffer, cursor: usize) -> usize {
    let lines = buffer.lines();
    let last = lines.len() - 1;
    let mut row = buffer.line_of(cursor);
    while row < last && lines[row].is_empty() {
        row += 1;
    }
    while row < last && !lines[row].is_empty() {
        row += 1;
    }
    lines[row].begin
}

/// Jump to offset 0.
pub const fn buffer_start(_buffer: &TextBuffer, _cursor: usize) -> usize {
    0
}

/// Jump past the last byte.
pub fn buffer_end(buffer: &TextBuffer, _cursor: usize) -> usize {
    buffer.len()
}

/// Jump to the first byte of the current line.
pub fn line_start(buffer: &TextBuffer, cursor: usize) -> usize {
    buffer.lines()[buffer.line_of(cursor)].begin
}

/// Jump to the end of the current line.
pub fn line_end(buffer: &TextBuffer, cursor: usize) -> usize {
    buffer.lines()[buffer.line_of(cursor)].end
}
