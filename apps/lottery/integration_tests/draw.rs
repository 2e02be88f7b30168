use draw_core::i18n::translations;
use draw_core::session::{DrawSession, SessionConfig};
use draw_core::store::MemoryStore;

use lottery::commands::draw::{DrawOptions, draw};
use lottery::error::LotteryError;
use lottery::render::REVEAL_MARKER;

use models::{Language, WinnerCount};

// ============================================================================
// Integration tests for the front-end draw loop against a real session actor
// ============================================================================

fn spawn_session() -> DrawSession {
    DrawSession::spawn(SessionConfig::default(), Box::new(MemoryStore::new()), None)
}

fn options(names: &str, winners: i64, language: Language) -> DrawOptions {
    DrawOptions {
        names_text: Some(names.to_string()),
        winner_count: Some(WinnerCount::new(winners)),
        language: Some(language),
    }
}

/// **VALUE**: Tests the full front-end flow: count, countdown, reveal, close.
///
/// **WHY THIS MATTERS**: This is what the user sees. Every step must be printed
/// exactly once and in order, even though the loop is driven by snapshot updates
/// that also fire for non-countdown changes.
///
/// **BUG THIS CATCHES**: Would catch duplicate steps (missing dedupe), a skipped
/// reveal marker, or the session being left in `Revealing` after the draw.
#[tokio::test(start_paused = true)]
async fn given_valid_names_when_drawing_then_prints_countdown_and_winners() {
    // GIVEN: A session and three names
    let session = spawn_session();
    let mut out = Vec::new();

    // WHEN: Drawing two winners
    let winners = draw(&session, options("Ana, Bruno\nCarla", 2, Language::EnUs), &mut out)
        .await
        .unwrap();

    // THEN: Two distinct names from the list
    assert_eq!(winners.len(), 2);
    assert_ne!(winners.as_slice()[0], winners.as_slice()[1]);
    for name in winners.iter() {
        assert!(["Ana", "Bruno", "Carla"].contains(&name));
    }

    // AND: The output follows the draw step by step
    let text = translations(Language::EnUs);
    let output = String::from_utf8(out).unwrap();
    let expected_prefix = format!(
        "{}\n3 names\n{}\n3\n2\n1\n{REVEAL_MARKER}\n{}\n",
        text.title, text.drawing, text.winners
    );
    assert!(
        output.starts_with(&expected_prefix),
        "unexpected output: {output:?}"
    );

    // AND: The reveal was closed
    assert!(session.snapshot().countdown.is_idle());
}

/// **VALUE**: Tests that a refused draw prints the localized alert and stays idle.
///
/// **BUG THIS CATCHES**: Would catch the alert being shown in the wrong language,
/// or a rejection being reported as an infrastructure error (wrong exit code).
#[tokio::test(start_paused = true)]
async fn given_too_many_winners_when_drawing_in_portuguese_then_rejected_with_alert() {
    // GIVEN: Two names and five requested winners
    let session = spawn_session();
    let mut out = Vec::new();

    // WHEN: Drawing
    let result = draw(&session, options("Ana, Bruno", 5, Language::PtBr), &mut out).await;

    // THEN: Rejected with the Portuguese message
    let expected = translations(Language::PtBr).too_many_winners(5, 2);
    match result {
        Err(LotteryError::Rejected { message, .. }) => assert_eq!(message, expected),
        other => panic!("Expected Rejected, got {other:?}"),
    }

    // AND: The alert was printed and no countdown started
    let output = String::from_utf8(out).unwrap();
    assert!(output.ends_with(&format!("{expected}\n")));
    assert!(!output.contains(REVEAL_MARKER));
    assert!(session.snapshot().countdown.is_idle());
}

#[tokio::test(start_paused = true)]
async fn given_blank_names_when_drawing_then_rejected_with_no_names_alert() {
    let session = spawn_session();
    let mut out = Vec::new();

    let result = draw(&session, options(" , \n ", 1, Language::EnUs), &mut out).await;

    match result {
        Err(LotteryError::Rejected { message, .. }) => {
            assert_eq!(message, translations(Language::EnUs).alert_no_names)
        }
        other => panic!("Expected Rejected, got {other:?}"),
    }
}

/// **VALUE**: Tests that a stopped session surfaces as an error, not a hang.
///
/// **BUG THIS CATCHES**: Would catch the draw loop waiting forever on a session
/// whose actor is gone.
#[tokio::test(start_paused = true)]
async fn given_shut_down_session_when_drawing_then_returns_core_error() {
    let session = spawn_session();
    session.shutdown().await.unwrap();
    let mut out = Vec::new();

    let result = draw(&session, options("Ana", 1, Language::EnUs), &mut out).await;

    assert!(
        matches!(result, Err(LotteryError::Core { .. })),
        "Expected Core error, got {result:?}"
    );
}
