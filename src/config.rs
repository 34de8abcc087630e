//! Runtime configuration resolved from the environment with fixed fallbacks.

use std::path::PathBuf;

use anyhow::{anyhow, Result};
use directories::BaseDirs;
use tracing::warn;

use crate::corpus::Corpus;

/// Folder name used beneath the user's home directory for application data.
const DATA_DIR_NAME: &str = ".simple-bible";
/// SQLite file name stored inside the application data directory.
const DB_FILE_NAME: &str = "simple-bible.sqlite";
/// Log file written next to the database while the TUI owns the terminal.
const LOG_FILE_NAME: &str = "simple-bible.log";
const DEFAULT_LOG_FILTER: &str = "info";

pub const DATA_DIR_ENV: &str = "SIMPLE_BIBLE_DATA_DIR";
pub const TRANSLATION_ENV: &str = "SIMPLE_BIBLE_TRANSLATION";
pub const LOG_FILTER_ENV: &str = "RUST_LOG";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub db_path: PathBuf,
    pub log_path: PathBuf,
    /// Translation used for the first verse after start-up.
    pub default_translation: String,
    /// Unknown translation code that was requested and replaced by the
    /// primary one. Reported by `report_fallbacks` once logging is up.
    pub rejected_translation: Option<String>,
    pub log_filter: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Resolve the configuration through an arbitrary variable lookup so the
    /// rules can be exercised without touching the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let data_dir = match non_blank(lookup(DATA_DIR_ENV)) {
            Some(dir) => PathBuf::from(dir),
            None => default_data_dir()?,
        };

        let corpus = Corpus::bundled();
        let (default_translation, rejected_translation) =
            match non_blank(lookup(TRANSLATION_ENV)) {
                Some(code) if corpus.translation(&code).is_some() => (code, None),
                Some(code) => (corpus.primary().code.clone(), Some(code)),
                None => (corpus.primary().code.clone(), None),
            };

        let log_filter =
            non_blank(lookup(LOG_FILTER_ENV)).unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Ok(Self {
            db_path: data_dir.join(DB_FILE_NAME),
            log_path: data_dir.join(LOG_FILE_NAME),
            data_dir,
            default_translation,
            rejected_translation,
            log_filter,
        })
    }

    /// Log the fallbacks taken during resolution. Call after the subscriber
    /// is installed; resolution itself runs before logging exists.
    pub fn report_fallbacks(&self) {
        if let Some(code) = &self.rejected_translation {
            warn!(
                code = %code,
                fallback = %self.default_translation,
                "unknown translation requested, using the primary one"
            );
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn default_data_dir() -> Result<PathBuf> {
    let base_dirs = BaseDirs::new().ok_or_else(|| anyhow!("could not locate home directory"))?;
    Ok(base_dirs.home_dir().join(DATA_DIR_NAME))
}
