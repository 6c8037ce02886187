//! Line: A span of one line inside the text buffer.

/// Byte span of a single line, excluding its terminating `\n`.
///
/// `end` is exclusive for the line content but is also a valid cursor
/// position: the cursor may sit right after the last byte of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Line {
    /// Offset of the first byte of the line.
    pub begin: usize,
    /// Offset one past the last byte of the line (the `\n`, or end of data).
    pub end: usize,
}

impl Line {
    /// Create a new span.
    #[inline]
    pub const fn new(begin: usize, end: usize) -> Self {
        Self { begin, end }
    }

    /// Number of bytes in the line.
    #[inline]
    pub const fn len(&self) -> usize {
        self.end - self.begin
    }

    /// Check if the line has no content.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.begin == self.end
    }

    /// Check if a cursor offset falls on this line (both ends inclusive).
    #[inline]
    pub const fn contains(&self, offset: usize) -> bool {
        self.begin <= offset && offset <= self.end
    }
}
