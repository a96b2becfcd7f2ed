//! Log setup.
//!
//! The terminal belongs to the game, so logs only ever go to a file.

use std::fs::OpenOptions;
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};

use crate::config::AppConfig;

/// Install a file-backed `tracing` subscriber when `MINES_LOG_PATH` is set.
///
/// Returns whether a subscriber was installed.
pub fn init(config: &AppConfig) -> Result<bool> {
    let Some(path) = &config.log_path else {
        return Ok(false);
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(config.log_level)
        .try_init()
        .map_err(|err| anyhow!("install log subscriber: {err}"))?;

    Ok(true)
}
