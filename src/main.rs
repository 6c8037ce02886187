//! `noed` binary: argument parsing and process exit plumbing.

use clap::Parser;
use noed::{Editor, EditorConfig, EditorError, TextBuffer, TtyTerminal};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::level_filters::LevelFilter;

/// Modal text editor for the terminal.
#[derive(Parser, Debug)]
#[command(name = "noed", version, about)]
struct Cli {
    /// File to edit. Created on the first save if it does not exist.
    file: PathBuf,

    /// Line to start on, counted from 1. Clamped to the last line.
    line: Option<usize>,

    /// Append logs to this file.
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Most verbose level written to the log file.
    #[arg(long, value_name = "LEVEL", default_value_t = LevelFilter::DEBUG)]
    log_level: LevelFilter,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = EditorConfig {
        log_file: cli.log_file,
        log_level: cli.log_level,
        ..EditorConfig::default()
    };

    match run(&cli.file, cli.line, &config) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("noed: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(file: &Path, line: Option<usize>, config: &EditorConfig) -> Result<u8, EditorError> {
    noed::logging::init(config)?;

    let mut buffer = TextBuffer::open(file)?;
    if let Some(line) = line {
        buffer.place_cursor_at_line(line.saturating_sub(1));
    }

    let mut editor = Editor::with_config(buffer, file, config);
    // The terminal is restored when `terminal` drops, before the error
    // (if any) is printed.
    let mut terminal = TtyTerminal::acquire()?;
    let exit = editor.run(&mut terminal);
    drop(terminal);

    Ok(exit?.code())
}
