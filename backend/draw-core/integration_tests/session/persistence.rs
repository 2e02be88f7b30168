use super::helpers::{spawn_session, test_config};

use draw_core::session::DrawSession;
use draw_core::store::{JsonFileStore, KeyValueStore, MemoryStore};
use draw_core::{LANGUAGE_STORAGE_KEY, NAMES_STORAGE_KEY};

use models::Language;

use tempfile::TempDir;

/// **VALUE**: Verifies names and language survive a restart through the file store.
///
/// **WHY THIS MATTERS**: Both values are written on every change and read once at
/// startup; that is the only persistence the application has.
#[tokio::test(start_paused = true)]
async fn given_edited_session_when_restarted_then_names_and_language_are_restored() {
    // GIVEN: A session backed by a file store
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("store.json");
    let first = spawn_session(JsonFileStore::open(&path));

    // WHEN: Editing and shutting down
    first.set_names_text("Ana\nBruno").await.unwrap();
    first.set_language(Language::PtBr).await.unwrap();
    first.shutdown().await.unwrap();

    // THEN: A new session over the same file starts from the edits
    let second = spawn_session(JsonFileStore::open(&path));
    let snapshot = second.snapshot();
    assert_eq!(snapshot.names_text, "Ana\nBruno");
    assert_eq!(snapshot.name_count, 2);
    assert_eq!(snapshot.language, Language::PtBr);
}

#[tokio::test(start_paused = true)]
async fn given_no_persisted_language_when_spawned_then_locale_is_detected() {
    let session = DrawSession::spawn(
        test_config(),
        Box::new(MemoryStore::new()),
        Some("pt_BR.UTF-8"),
    );

    assert_eq!(session.snapshot().language, Language::PtBr);
}

#[tokio::test(start_paused = true)]
async fn given_persisted_language_when_spawned_then_it_overrides_locale() {
    let store = MemoryStore::new().with_entry(LANGUAGE_STORAGE_KEY, "en-US");

    let session = DrawSession::spawn(test_config(), Box::new(store), Some("pt-BR"));

    assert_eq!(session.snapshot().language, Language::EnUs);
}

#[tokio::test(start_paused = true)]
async fn given_invalid_persisted_language_when_spawned_then_falls_back_to_locale() {
    let store = MemoryStore::new().with_entry(LANGUAGE_STORAGE_KEY, "cucos");

    let session = DrawSession::spawn(test_config(), Box::new(store), Some("pt"));

    assert_eq!(session.snapshot().language, Language::PtBr);
}

#[tokio::test(start_paused = true)]
async fn given_persisted_names_when_spawned_then_snapshot_starts_with_them() {
    let store = MemoryStore::new().with_entry(NAMES_STORAGE_KEY, "x, y, z");

    let session = spawn_session(store);

    assert_eq!(session.snapshot().name_count, 3);
}

/// **VALUE**: Verifies a failing store never breaks the session.
///
/// **BUG THIS CATCHES**: Would catch a store error being propagated out of a setter,
/// which would make the names field unusable whenever the disk is full.
#[tokio::test(start_paused = true)]
async fn given_unwritable_store_when_editing_then_session_keeps_working() {
    let dir = TempDir::new().unwrap();
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, "file").unwrap();
    let store = JsonFileStore::open(blocker.join("store.json"));

    let session = spawn_session(store);
    session.set_names_text("A,B").await.unwrap();
    session.set_language(Language::PtBr).await.unwrap();

    let snapshot = session.snapshot();
    assert_eq!(snapshot.name_count, 2);
    assert_eq!(snapshot.language, Language::PtBr);
}

#[test]
fn given_json_store_written_by_session_keys_then_file_uses_storage_keys() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("store.json");
    let mut store = JsonFileStore::open(&path);

    store.set(NAMES_STORAGE_KEY, "A").unwrap();

    let raw = std::fs::read_to_string(&path).unwrap();
    assert!(raw.contains("\"lottery-names\": \"A\""));
}

/// **VALUE**: Verifies the language detected on first start is saved immediately.
///
/// **WHY THIS MATTERS**: Once a language has been shown, later runs must keep it even
/// if the system locale changes, until the user picks another one.
///
/// **BUG THIS CATCHES**: Would catch the detected language only living in memory, so a
/// second run under a different locale silently switches the display language.
#[tokio::test(start_paused = true)]
async fn given_detected_language_when_restarted_under_other_locale_then_first_choice_is_kept() {
    // GIVEN: A first run detecting Portuguese over an empty file store
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("store.json");
    let first = DrawSession::spawn(
        test_config(),
        Box::new(JsonFileStore::open(&path)),
        Some("pt_BR.UTF-8"),
    );
    first.shutdown().await.unwrap();

    // THEN: The tag is on disk without any explicit change
    let store = JsonFileStore::open(&path);
    assert_eq!(store.get(LANGUAGE_STORAGE_KEY).as_deref(), Some("pt-BR"));

    // WHEN: Starting again under an English locale
    let second = DrawSession::spawn(test_config(), Box::new(store), Some("en_US.UTF-8"));

    // THEN: The saved language wins
    assert_eq!(second.snapshot().language, Language::PtBr);
}

#[tokio::test(start_paused = true)]
async fn given_invalid_persisted_language_when_spawned_then_it_is_replaced() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("store.json");
    let mut seeded = JsonFileStore::open(&path);
    seeded.set(LANGUAGE_STORAGE_KEY, "cucos").unwrap();

    let session = DrawSession::spawn(test_config(), Box::new(seeded), Some("pt"));
    session.shutdown().await.unwrap();

    let reopened = JsonFileStore::open(&path);
    assert_eq!(reopened.get(LANGUAGE_STORAGE_KEY).as_deref(), Some("pt-BR"));
}
