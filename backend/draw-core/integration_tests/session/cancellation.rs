use super::helpers::{TICK, session_with, wait_for_countdown};

use draw_core::error::SessionError;
use draw_core::store::MemoryStore;

use models::CountdownState;

use tokio::time::sleep;

/// **VALUE**: Verifies a reset during `Ticking(1)` stops the countdown for good.
///
/// **WHY THIS MATTERS**: The pending timer must be cancelled on reset. A late tick that
/// still fired would either reveal winners nobody asked for or corrupt the next draw.
///
/// **BUG THIS CATCHES**: Would catch a reset that only changes state without aborting the
/// scheduled tick, or a tick that is applied without checking its draw id.
#[tokio::test(start_paused = true)]
async fn given_ticking_one_when_reset_then_no_further_tick_and_never_reveals() {
    // GIVEN: A countdown that has reached Ticking(1)
    let session = session_with(MemoryStore::new(), "A,B,C", 2).await;
    session.request_draw().await.unwrap();
    wait_for_countdown(&session, |state| *state == CountdownState::Ticking(1)).await;

    // WHEN: Resetting the session
    assert!(session.reset().await.unwrap());
    let mut after_reset = session.subscribe();
    let _ = after_reset.borrow_and_update();

    // THEN: Long after every tick would have fired, nothing has changed
    sleep(TICK * 10).await;
    assert!(!after_reset.has_changed().unwrap(), "a stale tick mutated state");
    let snapshot = session.snapshot();
    assert_eq!(snapshot.countdown, CountdownState::Idle);
    assert!(snapshot.winners().is_empty());
}

/// **VALUE**: Verifies a new draw after a reset gets a full, independent countdown.
///
/// **BUG THIS CATCHES**: Would catch a leftover timer from the cancelled draw advancing
/// the new one early (it would reach the reveal in fewer than four intervals).
#[tokio::test(start_paused = true)]
async fn given_reset_draw_when_new_draw_started_then_old_timer_does_not_advance_it() {
    let session = session_with(MemoryStore::new(), "A,B,C", 1).await;
    session.request_draw().await.unwrap();
    wait_for_countdown(&session, |state| *state == CountdownState::Ticking(2)).await;
    session.reset().await.unwrap();

    let restarted = tokio::time::Instant::now();
    let second = session.request_draw().await.unwrap();
    wait_for_countdown(&session, CountdownState::is_revealing).await;

    assert!(restarted.elapsed() >= TICK * 4);
    assert_eq!(second.countdown_from, 3);
}

#[tokio::test(start_paused = true)]
async fn given_idle_session_when_reset_then_reports_no_change() {
    let session = session_with(MemoryStore::new(), "A", 1).await;

    assert!(!session.reset().await.unwrap());
}

#[tokio::test(start_paused = true)]
async fn given_revealing_session_when_reset_then_winners_are_cleared() {
    let session = session_with(MemoryStore::new(), "A", 1).await;
    session.request_draw().await.unwrap();
    wait_for_countdown(&session, CountdownState::is_revealing).await;

    assert!(session.reset().await.unwrap());

    assert!(session.snapshot().countdown.is_idle());
}

/// **VALUE**: Verifies teardown during a countdown cancels the timer and stops the actor.
#[tokio::test(start_paused = true)]
async fn given_ticking_session_when_shut_down_then_never_reveals_and_rejects_commands() {
    // GIVEN: A running countdown
    let session = session_with(MemoryStore::new(), "A,B", 1).await;
    session.request_draw().await.unwrap();

    // WHEN: Shutting down
    session.shutdown().await.unwrap();
    sleep(TICK * 10).await;

    // THEN: Last published state is Idle and the handle reports the stopped actor
    assert_eq!(session.snapshot().countdown, CountdownState::Idle);
    let err = session.request_draw().await.unwrap_err();
    assert!(matches!(err, SessionError::ActorStopped { .. }));
}
