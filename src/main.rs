//! Binary entry point: resolve configuration, start file logging, open the
//! profile database and hand control to the Ratatui event loop.
use anyhow::Context;
use simple_bible::config::AppConfig;
use simple_bible::logging::{init_logging, LogConfig};
use simple_bible::{run_app, App, KeyValueStore, ProfileStore, SqliteStore};
use tracing::info;

fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env()?;
    init_logging(&LogConfig {
        filter: config.log_filter.clone(),
        file: Some(config.log_path.clone()),
    })?;
    info!(data_dir = %config.data_dir.display(), "starting simple-bible");
    config.report_fallbacks();

    let store: Box<dyn KeyValueStore> = Box::new(
        SqliteStore::open(&config.db_path).context("failed to open profile database")?,
    );
    let mut app = App::new(ProfileStore::new(store), config.default_translation);
    let result = run_app(&mut app);
    info!("shutting down");
    result
}
