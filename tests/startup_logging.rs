//! Start-up sequence: config resolution runs before logging, so its
//! fallbacks must still reach the log file once the subscriber is up.

use std::fs;

use simple_bible::config::{AppConfig, DATA_DIR_ENV, TRANSLATION_ENV};
use simple_bible::logging::{init_logging, LogConfig};

#[test]
fn unknown_translation_fallback_reaches_log_file() {
    let dir = tempfile::tempdir().unwrap();
    let data_dir = dir.path().to_string_lossy().into_owned();
    let config = AppConfig::from_lookup(|name| match name {
        DATA_DIR_ENV => Some(data_dir.clone()),
        TRANSLATION_ENV => Some("KJV".to_string()),
        _ => None,
    })
    .unwrap();
    assert_eq!(config.default_translation, "NVI");

    init_logging(&LogConfig {
        filter: "warn".to_string(),
        file: Some(config.log_path.clone()),
    })
    .unwrap();
    config.report_fallbacks();

    let log = fs::read_to_string(&config.log_path).unwrap();
    assert!(log.contains("unknown translation requested"), "log was: {log}");
    assert!(log.contains("KJV"));
}
