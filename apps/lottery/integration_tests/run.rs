use draw_core::NAMES_STORAGE_KEY;

use lottery::cli::Cli;
use lottery::commands::draw::run;
use lottery::error::LotteryError;

use std::path::Path;

use clap::Parser;
use tempfile::TempDir;

// ============================================================================
// Integration tests for the complete command: config + store + session wiring
// ============================================================================

fn cli(data_dir: &Path, extra: &[&str]) -> Cli {
    let data_dir = data_dir.to_string_lossy().into_owned();
    let mut args = vec!["lottery", "--data-dir", data_dir.as_str(), "--tick-ms", "50"];
    args.extend_from_slice(extra);
    Cli::try_parse_from(args).unwrap()
}

/// **VALUE**: Tests that names typed in one run are reused by the next.
///
/// **WHY THIS MATTERS**: The saved names are the main convenience of the app; a
/// second run without `--names` must draw from the same list.
///
/// **BUG THIS CATCHES**: Would catch the store being opened at a different path
/// than it is written to, or names not being persisted on change.
#[tokio::test(start_paused = true)]
async fn given_names_saved_by_first_run_when_running_again_then_reuses_them() {
    // GIVEN: A first run with explicit names
    let dir = TempDir::new().unwrap();
    let mut out = Vec::new();
    run(cli(dir.path(), &["--names", "Ana,Bruno", "--language", "en-US"]), &mut out)
        .await
        .unwrap();

    // THEN: The store file holds the names under the expected key
    let store = std::fs::read_to_string(dir.path().join("lottery-store.json")).unwrap();
    assert!(store.contains(NAMES_STORAGE_KEY));
    assert!(store.contains("Ana,Bruno"));

    // WHEN: Running again with no names
    let mut second = Vec::new();
    let winners = run(cli(dir.path(), &["--winners", "2"]), &mut second)
        .await
        .unwrap();

    // THEN: Both saved names are drawn
    let mut drawn: Vec<&str> = winners.iter().collect();
    drawn.sort_unstable();
    assert_eq!(drawn, vec!["Ana", "Bruno"]);
}

#[tokio::test(start_paused = true)]
async fn given_ephemeral_run_when_finished_then_nothing_is_saved() {
    let dir = TempDir::new().unwrap();
    let mut out = Vec::new();

    run(cli(dir.path(), &["--names", "Ana", "--ephemeral"]), &mut out)
        .await
        .unwrap();

    assert!(!dir.path().join("lottery-store.json").exists());
}

#[tokio::test(start_paused = true)]
async fn given_names_file_when_running_then_draws_from_file() {
    let dir = TempDir::new().unwrap();
    let names_file = dir.path().join("names.txt");
    std::fs::write(&names_file, "Ana\nBruno\n\nCarla\n").unwrap();
    let names_path = names_file.to_string_lossy().into_owned();
    let mut out = Vec::new();

    let winners = run(
        cli(dir.path(), &["--names-file", names_path.as_str(), "--winners", "3", "--ephemeral"]),
        &mut out,
    )
    .await
    .unwrap();

    assert_eq!(winners.len(), 3);
}

/// **VALUE**: Tests that an out-of-range override is refused before any draw.
///
/// **BUG THIS CATCHES**: Would catch `--tick-ms` bypassing config validation, which
/// would schedule a zero-length countdown.
#[tokio::test(start_paused = true)]
async fn given_zero_tick_override_when_running_then_returns_core_error() {
    let dir = TempDir::new().unwrap();
    let data_dir = dir.path().to_string_lossy().into_owned();
    let cli = Cli::try_parse_from([
        "lottery",
        "--data-dir",
        data_dir.as_str(),
        "--tick-ms",
        "0",
        "--names",
        "Ana",
    ])
    .unwrap();
    let mut out = Vec::new();

    let result = run(cli, &mut out).await;

    match result {
        Err(err @ LotteryError::Core { .. }) => {
            assert!(err.to_string().contains("Invalid tick interval"));
            assert_eq!(err.exit_code(), 1);
        }
        other => panic!("Expected Core error, got {other:?}"),
    }
    assert!(out.is_empty());
}

#[tokio::test(start_paused = true)]
async fn given_missing_names_file_when_running_then_returns_lottery_error() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing.txt");
    let missing = missing.to_string_lossy().into_owned();
    let mut out = Vec::new();

    let result = run(
        cli(dir.path(), &["--names-file", missing.as_str(), "--ephemeral"]),
        &mut out,
    )
    .await;

    assert!(matches!(result, Err(LotteryError::Lottery { .. })));
}
