//! Runtime configuration from environment variables.
//!
//! Grid size and mine count are compile-time constants; only the things that
//! do not change the rules are configurable:
//!
//! - `MINES_SEED`: RNG seed for mine placement (random when unset or invalid)
//! - `MINES_LOG_PATH`: append logs to this file (no logging when unset)
//! - `MINES_LOG_LEVEL`: `error`, `warn`, `info`, `debug` or `trace` (default `info`)

use std::path::PathBuf;

use rand::Rng;
use tracing::Level;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub seed: Option<u64>,
    pub log_path: Option<PathBuf>,
    pub log_level: Level,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seed: None,
            log_path: None,
            log_level: Level::INFO,
        }
    }
}

impl AppConfig {
    /// Create from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from an arbitrary key lookup (the environment in production).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let seed = lookup("MINES_SEED").and_then(|s| s.trim().parse().ok());

        let log_path = lookup("MINES_LOG_PATH")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);

        let log_level = lookup("MINES_LOG_LEVEL")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(Level::INFO);

        Self {
            seed,
            log_path,
            log_level,
        }
    }

    /// The configured seed, or a fresh random one.
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| rand::rng().random())
    }
}
