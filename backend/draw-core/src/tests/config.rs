use crate::config::LotteryConfig;
use crate::error::config::ConfigError;
use crate::session::SessionConfig;

use std::time::Duration;

use tempfile::TempDir;

#[test]
fn given_no_config_file_when_loading_then_returns_defaults() {
    let dir = TempDir::new().unwrap();

    let config = LotteryConfig::load(dir.path()).unwrap();

    assert_eq!(config, LotteryConfig::default());
    assert_eq!(config.countdown.start_from, 3);
    assert_eq!(config.countdown.tick_interval(), Duration::from_secs(1));
    assert_eq!(config.storage.file_name, "lottery-store.json");
}

/// **VALUE**: Verifies save + load round-trips through the atomic write path.
#[test]
fn given_saved_config_when_loaded_then_values_match() {
    let dir = TempDir::new().unwrap();
    let mut config = LotteryConfig::default();
    config.countdown.start_from = 5;
    config.countdown.tick_interval_ms = 250;

    config.save(dir.path()).unwrap();
    let loaded = LotteryConfig::load(dir.path()).unwrap();

    assert_eq!(loaded, config);
    assert!(!dir.path().join("config.json.tmp").exists());
}

#[test]
fn given_partial_config_file_when_loading_then_missing_fields_use_defaults() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("config.json"),
        r#"{ "countdown": { "tick_interval_ms": 500 } }"#,
    )
    .unwrap();

    let config = LotteryConfig::load(dir.path()).unwrap();

    assert_eq!(config.version, 1);
    assert_eq!(config.countdown.start_from, 3);
    assert_eq!(config.countdown.tick_interval_ms, 500);
}

#[test]
fn given_corrupted_config_file_when_loading_then_returns_parse_error() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("config.json"), "countdown = 3").unwrap();

    let result = LotteryConfig::load(dir.path());

    assert!(matches!(result, Err(ConfigError::ParseError { .. })));
}

/// **VALUE**: Verifies out-of-range values are rejected on load and on save.
///
/// **BUG THIS CATCHES**: Would catch a zero tick interval slipping through, which would
/// make the countdown fire all steps at once.
#[test]
fn given_invalid_values_when_validating_then_returns_validation_error() {
    let mut zero_interval = LotteryConfig::default();
    zero_interval.countdown.tick_interval_ms = 0;

    let mut zero_start = LotteryConfig::default();
    zero_start.countdown.start_from = 0;

    let mut huge_start = LotteryConfig::default();
    huge_start.countdown.start_from = 11;

    let mut future_version = LotteryConfig::default();
    future_version.version = 2;

    let mut blank_store = LotteryConfig::default();
    blank_store.storage.file_name = "  ".to_string();

    for config in [zero_interval, zero_start, huge_start, future_version, blank_store] {
        assert!(
            matches!(config.validate(), Err(ConfigError::ValidationError { .. })),
            "{config:?} should be invalid"
        );
    }
}

#[test]
fn given_invalid_config_when_saving_then_nothing_is_written() {
    let dir = TempDir::new().unwrap();
    let mut config = LotteryConfig::default();
    config.countdown.tick_interval_ms = 0;

    assert!(config.save(dir.path()).is_err());
    assert!(!dir.path().join("config.json").exists());
}

#[test]
fn given_countdown_config_when_converted_then_session_config_matches() {
    let mut config = LotteryConfig::default();
    config.countdown.start_from = 4;
    config.countdown.tick_interval_ms = 20;

    let session = SessionConfig::from(&config.countdown);

    assert_eq!(session.countdown_start, 4);
    assert_eq!(session.tick_interval, Duration::from_millis(20));
    assert_eq!(
        SessionConfig::default(),
        SessionConfig::from(&LotteryConfig::default().countdown)
    );
}

#[test]
fn given_data_dir_when_resolving_store_path_then_uses_configured_file_name() {
    let dir = TempDir::new().unwrap();
    let config = LotteryConfig::default();

    assert_eq!(
        config.store_path(dir.path()),
        dir.path().join("lottery-store.json")
    );
}
