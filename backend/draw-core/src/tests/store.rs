use crate::error::store::StoreError;
use crate::store::{JsonFileStore, KeyValueStore, MemoryStore};
use crate::{LANGUAGE_STORAGE_KEY, NAMES_STORAGE_KEY};

use tempfile::TempDir;

#[test]
fn given_storage_keys_then_match_persisted_names() {
    assert_eq!(NAMES_STORAGE_KEY, "lottery-names");
    assert_eq!(LANGUAGE_STORAGE_KEY, "lottery-language");
}

#[test]
fn given_memory_store_when_set_then_get_returns_latest_value() {
    let mut store = MemoryStore::new().with_entry(NAMES_STORAGE_KEY, "old");

    assert_eq!(store.get(NAMES_STORAGE_KEY).as_deref(), Some("old"));
    store.set(NAMES_STORAGE_KEY, "new").unwrap();

    assert_eq!(store.get(NAMES_STORAGE_KEY).as_deref(), Some("new"));
    assert_eq!(store.get(LANGUAGE_STORAGE_KEY), None);
}

/// **VALUE**: Verifies values written by one JsonFileStore are read back by the next.
///
/// **WHY THIS MATTERS**: This is the cross-session persistence of the names text and
/// language. If it breaks users retype their list on every start.
#[test]
fn given_written_values_when_store_reopened_then_values_survive() {
    // GIVEN: A store in a fresh directory
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("store.json");
    let mut store = JsonFileStore::open(&path);

    // WHEN: Writing and reopening
    store.set(NAMES_STORAGE_KEY, "Ana\nBruno").unwrap();
    store.set(LANGUAGE_STORAGE_KEY, "pt-BR").unwrap();
    let reopened = JsonFileStore::open(&path);

    // THEN: Both values are back, and no temp file is left over
    assert_eq!(reopened.get(NAMES_STORAGE_KEY).as_deref(), Some("Ana\nBruno"));
    assert_eq!(reopened.get(LANGUAGE_STORAGE_KEY).as_deref(), Some("pt-BR"));
    assert!(!dir.path().join("nested").join("store.json.tmp").exists());
}

#[test]
fn given_missing_file_when_opening_then_store_is_empty() {
    let dir = TempDir::new().unwrap();

    let store = JsonFileStore::try_open(&dir.path().join("absent.json")).unwrap();

    assert_eq!(store.get(NAMES_STORAGE_KEY), None);
}

/// **VALUE**: Verifies a corrupted file degrades to an empty store instead of failing startup.
#[test]
fn given_corrupted_file_when_opening_then_strict_open_fails_and_lenient_open_is_empty() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("store.json");
    std::fs::write(&path, "{ not json").unwrap();

    match JsonFileStore::try_open(&path) {
        Err(StoreError::Parse { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("Expected Parse error, got {other:?}"),
    }

    let store = JsonFileStore::open(&path);
    assert_eq!(store.get(NAMES_STORAGE_KEY), None);
    assert_eq!(store.path(), path.as_path());
}

#[test]
fn given_unwritable_location_when_setting_then_returns_write_error() {
    let dir = TempDir::new().unwrap();
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, "a file, not a directory").unwrap();
    let mut store = JsonFileStore::open(blocker.join("store.json"));

    let result = store.set(NAMES_STORAGE_KEY, "Ana");

    assert!(matches!(result, Err(StoreError::Write { .. })));
}
