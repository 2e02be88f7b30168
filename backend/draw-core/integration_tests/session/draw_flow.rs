use super::helpers::{TICK, session_with, spawn_session, wait_for_countdown};

use draw_core::error::SessionError;
use draw_core::store::MemoryStore;
use draw_core::validator::DrawRejection;

use models::{CountdownState, WinnerCount};

use tokio::time::{Instant, sleep};

/// **VALUE**: End-to-end draw: Idle -> Ticking(3..0) -> Revealing -> Idle.
///
/// **WHY THIS MATTERS**: This is the whole user-visible feature. Every countdown step must be
/// published, one tick interval apart, and the reveal must carry exactly the requested
/// number of winners from the entered names.
///
/// **BUG THIS CATCHES**: Would catch skipped or reordered steps, a timer that is not
/// rescheduled after a tick, or winners drawn from outside the list.
#[tokio::test(start_paused = true)]
async fn given_three_names_when_draw_requested_then_counts_down_and_reveals_two_winners() {
    // GIVEN: Names A, B, C and two winners
    let session = session_with(MemoryStore::new(), "A,B,C", 2).await;
    let mut updates = session.subscribe();
    let started = Instant::now();

    // WHEN: Requesting a draw
    let ticket = session.request_draw().await.unwrap();

    // THEN: The ticket reflects the snapshot and the countdown starts at 3
    assert_eq!(ticket.name_count, 3);
    assert_eq!(ticket.winner_count, WinnerCount::new(2));
    assert_eq!(ticket.countdown_from, 3);
    assert_eq!(session.snapshot().countdown, CountdownState::Ticking(3));
    assert!(!session.snapshot().can_draw());

    // AND: Every step is observed in order, then the reveal
    let mut steps = Vec::new();
    let winners = loop {
        updates.changed().await.unwrap();
        let countdown = updates.borrow_and_update().countdown.clone();
        match countdown {
            CountdownState::Ticking(remaining) => steps.push(remaining),
            CountdownState::Revealing(winners) => break winners,
            CountdownState::Idle => panic!("countdown returned to Idle before revealing"),
        }
    };

    assert_eq!(steps, [3, 2, 1, 0]);
    let elapsed = started.elapsed();
    assert!(elapsed >= TICK * 4 && elapsed < TICK * 5, "reveal after {elapsed:?}");
    assert_eq!(winners.len(), 2);
    assert!(winners.iter().all(|w| ["A", "B", "C"].contains(&w)));
    assert_ne!(winners.as_slice()[0], winners.as_slice()[1]);
    assert_eq!(session.snapshot().winners(), winners);

    // AND: Closing returns to Idle with no winners
    assert!(session.close_winners().await.unwrap());
    let snapshot = session.snapshot();
    assert_eq!(snapshot.countdown, CountdownState::Idle);
    assert!(snapshot.winners().is_empty());
    assert!(snapshot.can_draw());
}

/// **VALUE**: Verifies an empty list is refused without starting a countdown.
#[tokio::test(start_paused = true)]
async fn given_no_names_when_draw_requested_then_rejected_and_stays_idle() {
    // GIVEN: A session with no names
    let session = spawn_session(MemoryStore::new());

    // WHEN: Requesting a draw
    let err = session.request_draw().await.unwrap_err();

    // THEN: NoNames, and nothing happens even after waiting
    assert_eq!(err.rejection(), Some(DrawRejection::NoNames));
    sleep(TICK * 10).await;
    assert_eq!(session.snapshot().countdown, CountdownState::Idle);
}

#[tokio::test(start_paused = true)]
async fn given_more_winners_than_names_when_draw_requested_then_too_many_winners() {
    let session = session_with(MemoryStore::new(), "A, B", 3).await;

    let err = session.request_draw().await.unwrap_err();

    match err {
        SessionError::Rejected { rejection, .. } => assert_eq!(
            rejection,
            DrawRejection::TooManyWinners {
                requested: 3,
                available: 2
            }
        ),
        other => panic!("Expected Rejected, got {other:?}"),
    }
    assert!(session.snapshot().countdown.is_idle());
}

#[tokio::test(start_paused = true)]
async fn given_running_countdown_when_draw_requested_again_then_draw_in_progress() {
    let session = session_with(MemoryStore::new(), "A,B", 1).await;
    let first = session.request_draw().await.unwrap();

    let err = session.request_draw().await.unwrap_err();

    assert!(matches!(err, SessionError::DrawInProgress { .. }));
    let revealed = wait_for_countdown(&session, CountdownState::is_revealing).await;
    assert_eq!(revealed.winners().len(), 1);
    assert_eq!(first.winner_count.get(), 1);
}

/// **VALUE**: Verifies edits during the countdown do not change what is drawn.
///
/// **WHY THIS MATTERS**: The input stays editable while the countdown runs. The reveal
/// must use the snapshot taken when the draw started.
///
/// **BUG THIS CATCHES**: Would catch re-parsing the live text at reveal time.
#[tokio::test(start_paused = true)]
async fn given_names_edited_during_countdown_when_revealed_then_winners_come_from_snapshot() {
    // GIVEN: A draw of all three of A, B, C in progress
    let session = session_with(MemoryStore::new(), "A,B,C", 3).await;
    session.request_draw().await.unwrap();

    // WHEN: The input is replaced mid-countdown
    wait_for_countdown(&session, |state| *state == CountdownState::Ticking(1)).await;
    session.set_names_text("X,Y,Z,W").await.unwrap();
    session.set_winner_count(WinnerCount::new(1)).await.unwrap();

    // THEN: The reveal still uses A, B, C and three winners
    let revealed = wait_for_countdown(&session, CountdownState::is_revealing).await;
    let mut winners: Vec<String> = revealed.winners().as_slice().to_vec();
    winners.sort();
    assert_eq!(winners, ["A", "B", "C"]);
    assert_eq!(revealed.names_text, "X,Y,Z,W");
    assert_eq!(revealed.name_count, 4);
}

#[tokio::test(start_paused = true)]
async fn given_revealed_winners_when_new_draw_requested_then_old_winners_are_discarded() {
    let session = session_with(MemoryStore::new(), "A,B,C", 1).await;
    session.request_draw().await.unwrap();
    wait_for_countdown(&session, CountdownState::is_revealing).await;

    session.request_draw().await.unwrap();

    let snapshot = session.snapshot();
    assert_eq!(snapshot.countdown, CountdownState::Ticking(3));
    assert!(snapshot.winners().is_empty());
}

#[tokio::test(start_paused = true)]
async fn given_rejected_draw_while_revealing_then_winners_stay_on_display() {
    let session = session_with(MemoryStore::new(), "A,B", 2).await;
    session.request_draw().await.unwrap();
    let revealed = wait_for_countdown(&session, CountdownState::is_revealing).await;

    session.set_names_text("").await.unwrap();
    let err = session.request_draw().await.unwrap_err();

    assert_eq!(err.rejection(), Some(DrawRejection::NoNames));
    assert_eq!(session.snapshot().winners(), revealed.winners());
}

#[tokio::test(start_paused = true)]
async fn given_idle_or_ticking_session_when_closing_winners_then_no_op() {
    let session = session_with(MemoryStore::new(), "A,B", 1).await;
    assert!(!session.close_winners().await.unwrap());

    session.request_draw().await.unwrap();
    assert!(!session.close_winners().await.unwrap());
    assert_eq!(session.snapshot().countdown, CountdownState::Ticking(3));
}

/// **VALUE**: Verifies typed winner counts are coerced, never rejected.
#[tokio::test(start_paused = true)]
async fn given_invalid_winner_input_when_applied_then_coerced_to_one() {
    let session = spawn_session(MemoryStore::new());

    for input in ["0", "-3", "abc", ""] {
        let applied = session.set_winner_count_input(input).await.unwrap();
        assert_eq!(applied.get(), 1, "{input:?}");
        assert_eq!(session.snapshot().winner_count.get(), 1);
    }

    let applied = session.set_winner_count_input("4 winners").await.unwrap();
    assert_eq!(applied.get(), 4);
}

#[tokio::test(start_paused = true)]
async fn given_names_text_when_set_then_snapshot_counts_parsed_names() {
    let session = spawn_session(MemoryStore::new());

    session.set_names_text(" a , ,b \nc,c").await.unwrap();

    let snapshot = session.snapshot();
    assert_eq!(snapshot.name_count, 4);
    assert_eq!(snapshot.names_text, " a , ,b \nc,c");
}
