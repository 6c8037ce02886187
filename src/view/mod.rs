//! View module: Turns buffer state into a screen-sized character grid.
//!
//! This module contains:
//! - [`Grid`]: The `rows x cols` byte grid that gets flushed to the terminal
//! - [`Viewport`]: Scroll offsets and the render algorithm
//! - [`ScreenCursor`]: Where the terminal cursor lands after a render

mod grid;
mod viewport;

pub use grid::{Grid, BLANK};
pub use viewport::{is_printable, ScreenCursor, Viewport};
