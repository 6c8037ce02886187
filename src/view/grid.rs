//! Grid: A fixed-size block of screen bytes.
//!
//! The grid uses contiguous memory allocation for cache efficiency.
//! Cells are stored in row-major order, one byte per terminal cell.

/// Byte written into every cell when the grid is cleared.
pub const BLANK: u8 = b' ';

/// A `rows x cols` character grid, rebuilt from scratch on every render.
///
/// Access is in row-major order: `index = row * cols + col`.
#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    /// Contiguous cell storage (row-major order).
    cells: Vec<u8>,
    /// Number of rows.
    rows: usize,
    /// Number of columns.
    cols: usize,
}

impl Grid {
    /// Create a blank grid with the given dimensions.
    ///
    /// Zero-sized grids are allowed: a terminal can report 0x0 and the
    /// viewport treats that as a degenerate size.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            cells: vec![BLANK; rows * cols],
            rows,
            cols,
        }
    }

    /// Get the number of rows.
    #[inline]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Get the number of columns.
    #[inline]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Get the underlying cells.
    #[inline]
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// Convert (row, col) to a linear index.
    ///
    /// Returns `None` if coordinates are out of bounds.
    #[inline]
    pub const fn index_of(&self, row: usize, col: usize) -> Option<usize> {
        if row < self.rows && col < self.cols {
            Some(row * self.cols + col)
        } else {
            None
        }
    }

    /// Get the byte at (row, col).
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<u8> {
        self.index_of(row, col).map(|i| self.cells[i])
    }

    /// Set the byte at (row, col).
    ///
    /// Returns `false` if coordinates are out of bounds.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, byte: u8) -> bool {
        if let Some(idx) = self.index_of(row, col) {
            self.cells[idx] = byte;
            true
        } else {
            false
        }
    }

    /// Copy `bytes` into a row starting at column 0, clipped to the width.
    ///
    /// Returns the number of bytes written.
    pub fn put_row(&mut self, row: usize, bytes: &[u8]) -> usize {
        let Some(start) = self.index_of(row, 0) else {
            return 0;
        };
        let n = bytes.len().min(self.cols);
        self.cells[start..start + n].copy_from_slice(&bytes[..n]);
        n
    }

    /// Fill every cell with blanks.
    pub fn clear(&mut self) {
        self.cells.fill(BLANK);
    }

    /// Get a row as a byte slice.
    pub fn row(&self, row: usize) -> Option<&[u8]> {
        let start = self.index_of(row, 0)?;
        Some(&self.cells[start..start + self.cols])
    }

    /// Get a mutable row as a byte slice.
    pub fn row_mut(&mut self, row: usize) -> Option<&mut [u8]> {
        let start = self.index_of(row, 0)?;
        Some(&mut self.cells[start..start + self.cols])
    }

    /// Get an iterator over rows.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[u8]> {
        // `chunks` panics on 0; a zero-width grid has no rows worth yielding.
        self.cells.chunks(self.cols.max(1)).take(self.rows)
    }
}

impl std::fmt::Debug for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut list = f.debug_list();
        for row in self.iter_rows() {
            list.entry(&String::from_utf8_lossy(row));
        }
        list.finish()
    }
}
