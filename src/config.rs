//! Editor configuration.

use std::path::PathBuf;
use tracing::level_filters::LevelFilter;

/// Maximum number of bytes a single input token can hold.
///
/// A read that fills this many bytes is treated as an unrecognized sequence.
pub const TOKEN_CAPACITY: usize = 32;

/// Configuration for the [`Editor`](crate::Editor).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorConfig {
    /// Label drawn on the last row while in Insert mode.
    pub insert_indicator: String,
    /// Byte drawn at the start of rows past the end of the buffer.
    pub end_of_buffer_marker: u8,
    /// Byte drawn in place of control and non-ASCII bytes.
    pub placeholder: u8,
    /// Where to write logs. `None` disables logging.
    pub log_file: Option<PathBuf>,
    /// Most verbose level written to the log file.
    pub log_level: LevelFilter,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            insert_indicator: String::from("-- INSERT --"),
            end_of_buffer_marker: b'~',
            placeholder: b'?',
            log_file: None,
            log_level: LevelFilter::DEBUG,
        }
    }
}
