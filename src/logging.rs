//! Logging setup using `tracing` and `tracing-subscriber`.
//!
//! The engine emits `debug` events for accepted actions and `info` events
//! for wins and losses. Nothing is printed unless a subscriber is installed.
//!
//! - 0 (no `-v`): warn
//! - 1 (`-v`): info
//! - 2 (`-vv`): debug
//! - 3+: trace
//!
//! `RUST_LOG` overrides the level when set.

use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Configuration for logging behavior.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Log level filter.
    pub level: Level,
    /// Optional log file path. When set, logs are written to the file.
    pub log_file: Option<PathBuf>,
    /// Whether logging is wanted at all.
    pub enabled: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: Level::WARN,
            log_file: None,
            enabled: true,
        }
    }
}

impl LogConfig {
    /// Create a `LogConfig` from CLI verbosity count.
    #[must_use]
    pub fn from_verbosity(verbosity: u8) -> Self {
        let level = match verbosity {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        };
        Self {
            level,
            ..Default::default()
        }
    }

    /// Set the log file path (writes to stderr when None).
    #[must_use]
    pub fn with_log_file(mut self, path: Option<PathBuf>) -> Self {
        self.log_file = path;
        self
    }

    /// Drop stderr output. The terminal UI owns the screen, so it only logs
    /// when a file is given.
    #[must_use]
    pub fn file_only(mut self) -> Self {
        self.enabled = self.log_file.is_some();
        self
    }
}

/// Initialize the global tracing subscriber.
///
/// Call once at startup.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened.
pub fn init_logging(config: &LogConfig) -> io::Result<()> {
    if !config.enabled {
        return Ok(());
    }

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.as_str().to_lowercase()));

    if let Some(path) = &config.log_file {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        let layer = fmt::layer()
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .with_target(false);
        tracing_subscriber::registry().with(filter).with(layer).try_init().ok();
    } else {
        let layer = fmt::layer()
            .with_writer(io::stderr)
            .with_target(false)
            .without_time();
        tracing_subscriber::registry().with(filter).with(layer).try_init().ok();
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_levels() {
        assert_eq!(LogConfig::from_verbosity(0).level, Level::WARN);
        assert_eq!(LogConfig::from_verbosity(1).level, Level::INFO);
        assert_eq!(LogConfig::from_verbosity(2).level, Level::DEBUG);
        assert_eq!(LogConfig::from_verbosity(7).level, Level::TRACE);
    }

    #[test]
    fn file_only_without_file_disables() {
        let config = LogConfig::from_verbosity(2).file_only();
        assert!(!config.enabled);

        let config = LogConfig::from_verbosity(2)
            .with_log_file(Some(PathBuf::from("clusters.log")))
            .file_only();
        assert!(config.enabled);
    }
}
