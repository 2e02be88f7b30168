//! Draw session controller.
//!
//! [`DrawSession`] is a cheap, cloneable handle to an actor task that owns
//! the names text, winner count, language and countdown. Every mutation is a
//! command processed in order by that task; reads go through a `watch`
//! channel carrying the latest [`SessionSnapshot`].
//!
//! # Draw lifecycle
//!
//! 1. [`DrawSession::request_draw`] parses and validates the current input.
//!    A refusal comes back as [`SessionError::Rejected`] and nothing changes.
//! 2. On success the input is frozen into a `DrawRequest` and the countdown
//!    starts at [`SessionConfig::countdown_start`].
//! 3. A timer advances the countdown once per [`SessionConfig::tick_interval`];
//!    after `Ticking(0)` the winners are drawn from the frozen request.
//! 4. [`DrawSession::close_winners`] returns to `Idle`.
//!
//! [`DrawSession::reset`] and [`DrawSession::shutdown`] cancel a running
//! countdown; no tick scheduled before the cancellation takes effect after it.

mod actor;
mod snapshot;
mod timer;

pub use snapshot::{DrawTicket, SessionSnapshot};

use crate::config::CountdownConfig;
use crate::countdown::DEFAULT_COUNTDOWN_START;
use crate::error::SessionError;
use crate::store::KeyValueStore;

use actor::{SessionActor, SessionCommand};

use models::{ErrorLocation, Language, WinnerCount};

use std::panic::Location;
use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tokio::sync::{mpsc, oneshot, watch};

const COMMAND_CHANNEL_CAPACITY: usize = 64;
const DEFAULT_TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Explicit construction parameters for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    pub countdown_start: u8,
    pub tick_interval: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            countdown_start: DEFAULT_COUNTDOWN_START,
            tick_interval: DEFAULT_TICK_INTERVAL,
        }
    }
}

impl From<&CountdownConfig> for SessionConfig {
    fn from(config: &CountdownConfig) -> Self {
        Self {
            countdown_start: config.start_from,
            tick_interval: config.tick_interval(),
        }
    }
}

/// Handle to a running draw session.
///
/// Clones share the same session. The actor stops after
/// [`shutdown`](Self::shutdown) or once every handle has been dropped.
#[derive(Clone)]
pub struct DrawSession {
    command_tx: mpsc::Sender<SessionCommand>,
    snapshot_rx: watch::Receiver<SessionSnapshot>,
}

impl DrawSession {
    /// Start a session with an entropy-seeded RNG.
    ///
    /// `store` is read once here for the persisted names and language;
    /// `locale` is only consulted when no valid language was persisted.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn(
        config: SessionConfig,
        store: Box<dyn KeyValueStore>,
        locale: Option<&str>,
    ) -> Self {
        Self::spawn_with_rng(config, store, locale, StdRng::from_entropy())
    }

    /// Start a session with a caller-supplied RNG (seeded in tests).
    pub fn spawn_with_rng(
        config: SessionConfig,
        store: Box<dyn KeyValueStore>,
        locale: Option<&str>,
        rng: StdRng,
    ) -> Self {
        let (command_tx, command_rx) = mpsc::channel(COMMAND_CHANNEL_CAPACITY);
        let (actor, snapshot_rx) =
            SessionActor::new(config, store, locale, rng, command_tx.downgrade());

        tokio::spawn(actor.run(command_rx));

        Self {
            command_tx,
            snapshot_rx,
        }
    }

    /// Replace the raw names text. Allowed at any time; a running countdown
    /// keeps drawing from the input it captured.
    pub async fn set_names_text(&self, text: impl Into<String>) -> Result<(), SessionError> {
        let text = text.into();
        self.call(|reply| SessionCommand::SetNamesText { text, reply })
            .await
    }

    pub async fn set_winner_count(&self, count: WinnerCount) -> Result<(), SessionError> {
        self.call(|reply| SessionCommand::SetWinnerCount { count, reply })
            .await
    }

    /// Coerce typed input (see [`WinnerCount::from_input`]) and apply it.
    pub async fn set_winner_count_input(&self, input: &str) -> Result<WinnerCount, SessionError> {
        let count = WinnerCount::from_input(input);
        self.set_winner_count(count).await?;
        Ok(count)
    }

    pub async fn set_language(&self, language: Language) -> Result<(), SessionError> {
        self.call(|reply| SessionCommand::SetLanguage { language, reply })
            .await
    }

    /// Validate the current input and start the countdown.
    ///
    /// # Errors
    ///
    /// - [`SessionError::Rejected`] when validation fails; state is unchanged.
    /// - [`SessionError::DrawInProgress`] while a countdown is running.
    /// - [`SessionError::ActorStopped`] after shutdown.
    pub async fn request_draw(&self) -> Result<DrawTicket, SessionError> {
        self.call(|reply| SessionCommand::RequestDraw { reply })
            .await?
    }

    /// Dismiss revealed winners. Returns `false` (no-op) unless revealing.
    pub async fn close_winners(&self) -> Result<bool, SessionError> {
        self.call(|reply| SessionCommand::CloseWinners { reply })
            .await
    }

    /// Cancel any countdown and return to `Idle`. Returns whether anything changed.
    pub async fn reset(&self) -> Result<bool, SessionError> {
        self.call(|reply| SessionCommand::Reset { reply }).await
    }

    /// Cancel pending ticks and stop the actor.
    pub async fn shutdown(&self) -> Result<(), SessionError> {
        self.call(|reply| SessionCommand::Shutdown { reply }).await
    }

    /// Latest published state.
    pub fn snapshot(&self) -> SessionSnapshot {
        self.snapshot_rx.borrow().clone()
    }

    /// Receiver notified after every state change.
    pub fn subscribe(&self) -> watch::Receiver<SessionSnapshot> {
        self.snapshot_rx.clone()
    }

    async fn call<T, F>(&self, make_command: F) -> Result<T, SessionError>
    where
        F: FnOnce(oneshot::Sender<T>) -> SessionCommand,
    {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(make_command(reply_tx))
            .await
            .map_err(|e| SessionError::ActorStopped {
                message: format!("Session actor is not running: {e}"),
                location: ErrorLocation::from(Location::caller()),
            })?;

        reply_rx.await.map_err(|e| SessionError::ActorStopped {
            message: format!("Session actor dropped the reply: {e}"),
            location: ErrorLocation::from(Location::caller()),
        })
    }
}
