//! Editor module: key classification, modes and the main loop.
//!
//! This module contains:
//! - [`Key`]: Classification of raw input tokens
//! - [`Mode`] and [`Action`]: The per-mode key bindings
//! - [`Editor`]: The state machine and its loop

mod key;
mod mode;
mod session;

pub use key::Key;
pub use mode::{Action, Mode};
pub use session::{Editor, Exit};
