// Unit tests for logger module initialization logic
// The global logger can only be installed once per process, so the whole
// sequence lives in a single test.

use crate::error::LotteryError;
use crate::logger::initialize;

use std::path::PathBuf;

/// **VALUE**: Verifies a failed initialization returns an error and later calls are no-ops.
///
/// **WHY THIS MATTERS**: If the data directory can't hold a log file (permissions,
/// disk full), the app must report it instead of panicking. A second call from
/// another code path must not try to install a second global logger.
///
/// **BUG THIS CATCHES**: Would catch `fern::log_file()` being unwrapped, or the
/// Once/AtomicBool guards being removed so fern panics on a second `apply()`.
#[test]
fn given_invalid_log_dir_when_initialize_called_then_errors_once_and_is_idempotent_after() {
    // GIVEN: A path that can never hold a file
    let invalid_dir = PathBuf::from("/dev/null/invalid-path");

    // WHEN: Calling initialize with the invalid directory
    let result = initialize(&invalid_dir);

    // THEN: Should return the app error variant (not panic)
    assert!(
        matches!(result, Err(LotteryError::Lottery { .. })),
        "Should return LotteryError::Lottery for invalid log directory"
    );

    // WHEN: Calling again with a valid directory
    let temp_dir = tempfile::TempDir::new().unwrap();
    let second = initialize(temp_dir.path());

    // THEN: Later calls are accepted without reinstalling
    assert!(second.is_ok(), "Repeated initialization should be a no-op");
}
