//! Buffer module: the edited bytes and everything derived from them.
//!
//! This module contains:
//! - [`TextBuffer`]: The byte storage, cursor and line index
//! - [`Line`]: A `{begin, end}` span of one line inside the buffer
//! - [`motion`]: Pure cursor movement functions and the [`Motion`] enum

mod line;
mod text;
pub mod motion;

pub use line::Line;
pub use motion::Motion;
pub use text::TextBuffer;
