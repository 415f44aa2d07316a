//! Logging init: file under the XDG state dir, or graceful fallback to
//! stderr.

use anyhow::Result;
use std::fs;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,urlnorm=debug"))
}

/// Initialize structured logging to `~/.local/state/urlnorm/urlnorm.log`.
/// Returns Err when the state dir is unwritable so the caller can fall
/// back to [`init_logging_stderr`].
pub fn init_logging() -> Result<()> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("urlnorm")?;
    let log_path = xdg_dirs.get_state_home().join("urlnorm.log");
    if let Some(parent) = log_path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    tracing::info!("urlnorm logging initialized at {}", log_path.display());
    Ok(())
}

/// Initialize logging to stderr only. Use when [`init_logging`] fails so
/// the CLI still runs.
pub fn init_logging_stderr() {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}
