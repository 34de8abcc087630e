//! Logging setup using `tracing` and `tracing-subscriber`.
//!
//! The TUI owns stdout while it runs, so the binary points logs at a file in
//! the data directory. Without a file, events go to stderr.
//!
//! Levels in use:
//!
//! - `error`: a profile save or clear failed
//! - `warn`: a stored profile could not be read or parsed, bad config values
//! - `info`: start-up, profile saved/cleared, onboarding and reset
//! - `debug`: verse draws, translation switches, store opening

use std::fs::{self, OpenOptions};
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Clone)]
pub struct LogConfig {
    /// `EnvFilter` directive, e.g. `info` or `simple_bible=debug`.
    pub filter: String,
    /// Append to this file instead of writing to stderr.
    pub file: Option<PathBuf>,
}

/// Install the global subscriber. Fails if one is already installed or the
/// log file cannot be opened.
pub fn init_logging(config: &LogConfig) -> Result<()> {
    let filter = EnvFilter::try_new(&config.filter)
        .with_context(|| format!("invalid log filter `{}`", config.filter))?;

    match &config.file {
        Some(path) => {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).context("failed to create log directory")?;
            }
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("failed to open log file {}", path.display()))?;
            let layer = fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(true);
            tracing_subscriber::registry()
                .with(filter)
                .with(layer)
                .try_init()
                .map_err(|err| anyhow!("failed to install log subscriber: {err}"))
        }
        None => {
            let layer = fmt::layer().with_writer(io::stderr).with_target(true);
            tracing_subscriber::registry()
                .with(filter)
                .with(layer)
                .try_init()
                .map_err(|err| anyhow!("failed to install log subscriber: {err}"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_malformed_filter() {
        let config = LogConfig {
            filter: "simple_bible=loud".to_string(),
            file: None,
        };
        assert!(init_logging(&config).is_err());
    }
}
