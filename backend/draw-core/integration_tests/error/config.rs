use draw_core::config::LotteryConfig;
use draw_core::error::config::ConfigError;
use draw_core::error::store::StoreError;
use draw_core::store::JsonFileStore;

use tempfile::TempDir;

/// **VALUE**: Verifies config parse errors name the file that failed.
///
/// **WHY THIS MATTERS**: A hand-edited config.json is the most likely cause of a
/// failed start; the message must point at it.
#[test]
fn given_invalid_json_config_when_loaded_then_error_names_path_and_location() {
    // GIVEN: A broken config file
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{").unwrap();

    // WHEN: Loading
    let err = LotteryConfig::load(dir.path()).unwrap_err();

    // THEN: Display includes kind, path and a location suffix
    let rendered = err.to_string();
    assert!(rendered.starts_with("Config Parse Error: "));
    assert!(rendered.contains("config.json"));
    assert!(rendered.ends_with(']'));
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn given_config_path_is_directory_when_loaded_then_returns_read_error() {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir(dir.path().join("config.json")).unwrap();

    let err = LotteryConfig::load(dir.path()).unwrap_err();

    assert!(matches!(err, ConfigError::ReadError { .. }));
}

#[test]
fn given_store_path_is_directory_when_strictly_opened_then_returns_read_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("store.json");
    std::fs::create_dir(&path).unwrap();

    let err = JsonFileStore::try_open(&path).unwrap_err();

    assert!(matches!(err, StoreError::Read { .. }));
    assert!(err.to_string().starts_with("Store Read Error: "));
}
