// File-based logging.
// The TUI owns the terminal, so tracing output goes to a log file only.

use std::fs::{File, OpenOptions};
use std::path::Path;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

use reviewbud::error::Result;

/// Line count above which the log is trimmed.
const MAX_LOG_LINES: usize = 1000;
/// Lines kept after trimming.
const KEEP_LOG_LINES: usize = 750;

/// Trim the log file to its most recent lines once it grows too long.
pub fn rotate_log(path: &Path) {
    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(_) => return,
    };

    let lines: Vec<&str> = content.lines().collect();
    if lines.len() <= MAX_LOG_LINES {
        return;
    }

    let start = lines.len() - KEEP_LOG_LINES;
    let trimmed = lines[start..].join("\n");
    let _ = std::fs::write(path, format!("{}\n", trimmed));
}

/// Set up file-based logging with tracing-subscriber.
///
/// Default level: DEBUG for reviewbud, WARN for dependencies. `RUST_LOG`
/// overrides it.
pub fn setup_logging(path: &Path) -> Result<()> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)?;
    }
    let log_file = open_log_file(path)?;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("reviewbud=debug,warn"));

    let file_layer = fmt::layer()
        .with_writer(log_file)
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .init();

    tracing::debug!("Logging initialized, writing to {}", path.display());

    Ok(())
}

fn open_log_file(path: &Path) -> Result<File> {
    Ok(OpenOptions::new().create(true).append(true).open(path)?)
}
