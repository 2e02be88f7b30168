//! Shared setup for session integration tests.

use draw_core::session::{DrawSession, SessionConfig, SessionSnapshot};
use draw_core::store::KeyValueStore;

use models::{CountdownState, WinnerCount};

use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::StdRng;

pub const TICK: Duration = Duration::from_millis(1000);
pub const TEST_SEED: u64 = 0xD4A7;

pub fn test_config() -> SessionConfig {
    SessionConfig {
        countdown_start: 3,
        tick_interval: TICK,
    }
}

/// Spawn a seeded session on the current (paused-clock) runtime.
pub fn spawn_session(store: impl KeyValueStore + 'static) -> DrawSession {
    DrawSession::spawn_with_rng(
        test_config(),
        Box::new(store),
        None,
        StdRng::seed_from_u64(TEST_SEED),
    )
}

/// Spawn a session already holding `names` and `winners`.
pub async fn session_with(
    store: impl KeyValueStore + 'static,
    names: &str,
    winners: i64,
) -> DrawSession {
    let session = spawn_session(store);
    session
        .set_names_text(names)
        .await
        .expect("Failed to set names");
    session
        .set_winner_count(WinnerCount::new(winners))
        .await
        .expect("Failed to set winner count");
    session
}

/// Wait (letting the paused clock auto-advance) until the countdown matches.
pub async fn wait_for_countdown<F>(session: &DrawSession, predicate: F) -> SessionSnapshot
where
    F: Fn(&CountdownState) -> bool,
{
    let mut updates = session.subscribe();
    updates
        .wait_for(|snapshot| predicate(&snapshot.countdown))
        .await
        .expect("Session stopped while waiting")
        .clone()
}
