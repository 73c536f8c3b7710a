//! Logging setup.
//!
//! The game owns the terminal (raw mode, alternate screen), so log records go
//! to a file instead of stderr.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use env_logger::{Builder, Env, Target};

/// Environment variable holding the `env_logger` filter.
pub const LOG_ENV: &str = "TUI_BRICKS_LOG";

pub fn default_log_path() -> PathBuf {
    std::env::temp_dir().join("tui-bricks.log")
}

/// Route `log` records to `path` (appending). Filter from [`LOG_ENV`], default `info`.
pub fn init(path: &Path) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    Builder::from_env(Env::default().filter_or(LOG_ENV, "info"))
        .target(Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init()
        .context("logger already initialised")?;

    Ok(())
}
