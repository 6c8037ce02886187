//! File logging.
//!
//! The terminal is owned by the editor while a session runs, so log output
//! only ever goes to a file, and only when one is configured.

use crate::config::EditorConfig;
use crate::error::{EditorError, Result};
use std::io;
use std::path::Path;
use tracing_appender::rolling::{RollingFileAppender, Rotation};

/// Install the global subscriber described by `config`.
///
/// Returns `false` without touching global state when no log file is set.
/// A subscriber installed earlier by someone else is left in place.
///
/// # Errors
///
/// [`EditorError::LogFile`] if the path has no file name or the file cannot
/// be created.
pub fn init(config: &EditorConfig) -> Result<bool> {
    let Some(path) = config.log_file.as_deref() else {
        return Ok(false);
    };

    let appender = create_appender(path).map_err(|source| EditorError::LogFile {
        path: path.to_path_buf(),
        source,
    })?;

    let installed = tracing_subscriber::fmt()
        .with_writer(appender)
        .with_ansi(false)
        .with_max_level(config.log_level)
        .try_init()
        .is_ok();
    if installed {
        tracing::info!(path = %path.display(), level = %config.log_level, "logging started");
    }
    Ok(true)
}

/// Open `path` for appending, never rotating.
fn create_appender(path: &Path) -> io::Result<RollingFileAppender> {
    let file_name = path
        .file_name()
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "path has no file name"))?;
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name.to_string_lossy())
        .build(parent)
        .map_err(io::Error::other)
}
