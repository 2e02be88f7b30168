//! The task that owns all mutable draw state.
//!
//! Handles on the outside send [`SessionCommand`]s; this task applies them
//! one at a time, so the countdown is only ever written from here. Timer
//! tasks do not touch state either: they send a `Tick` back through the same
//! channel and the countdown checks that it still belongs to the active draw.

use super::snapshot::{DrawTicket, SessionSnapshot};
use super::timer::TickScheduler;
use super::SessionConfig;
use crate::countdown::{Countdown, Transition};
use crate::error::SessionError;
use crate::i18n::resolve_language;
use crate::parser::parse_names;
use crate::store::KeyValueStore;
use crate::validator::validate_draw;
use crate::{LANGUAGE_STORAGE_KEY, NAMES_STORAGE_KEY};

use models::{DrawRequestBuilder, ErrorLocation, Language, WinnerCount};

use std::ops::ControlFlow;
use std::panic::Location;

use log::{debug, info, warn};
use rand::rngs::StdRng;
use tokio::sync::{mpsc, oneshot, watch};
use uuid::Uuid;

#[derive(Debug)]
pub(crate) enum SessionCommand {
    SetNamesText {
        text: String,
        reply: oneshot::Sender<()>,
    },
    SetWinnerCount {
        count: WinnerCount,
        reply: oneshot::Sender<()>,
    },
    SetLanguage {
        language: Language,
        reply: oneshot::Sender<()>,
    },
    RequestDraw {
        reply: oneshot::Sender<Result<DrawTicket, SessionError>>,
    },
    CloseWinners {
        reply: oneshot::Sender<bool>,
    },
    Reset {
        reply: oneshot::Sender<bool>,
    },
    Tick(Uuid),
    Shutdown {
        reply: oneshot::Sender<()>,
    },
}

pub(crate) struct SessionActor {
    config: SessionConfig,
    store: Box<dyn KeyValueStore>,
    names_text: String,
    winner_count: WinnerCount,
    language: Language,
    countdown: Countdown,
    scheduler: TickScheduler,
    rng: StdRng,
    command_tx: mpsc::WeakSender<SessionCommand>,
    snapshot_tx: watch::Sender<SessionSnapshot>,
}

impl SessionActor {
    /// Read the persisted input once and build the actor with its first snapshot.
    pub(crate) fn new(
        config: SessionConfig,
        mut store: Box<dyn KeyValueStore>,
        locale: Option<&str>,
        rng: StdRng,
        command_tx: mpsc::WeakSender<SessionCommand>,
    ) -> (Self, watch::Receiver<SessionSnapshot>) {
        let names_text = store.get(NAMES_STORAGE_KEY).unwrap_or_default();
        let persisted_language = store.get(LANGUAGE_STORAGE_KEY);
        let language = resolve_language(persisted_language.as_deref(), locale);

        // Pin a detected language from the first run on.
        if persisted_language.as_deref().and_then(Language::from_tag).is_none() {
            persist(store.as_mut(), LANGUAGE_STORAGE_KEY, language.tag());
        }

        debug!(
            "Session starting with {} stored characters of names, language {language}",
            names_text.len()
        );

        let countdown = Countdown::new(config.countdown_start);
        let winner_count = WinnerCount::default();
        let (snapshot_tx, snapshot_rx) = watch::channel(SessionSnapshot::new(
            names_text.clone(),
            winner_count,
            countdown.state().clone(),
            language,
        ));

        let actor = Self {
            config,
            store,
            names_text,
            winner_count,
            language,
            countdown,
            scheduler: TickScheduler::default(),
            rng,
            command_tx,
            snapshot_tx,
        };

        (actor, snapshot_rx)
    }

    /// Process commands until shutdown or until every handle is dropped.
    pub(crate) async fn run(mut self, mut command_rx: mpsc::Receiver<SessionCommand>) {
        info!("Draw session actor started");

        while let Some(cmd) = command_rx.recv().await {
            if self.handle(cmd).is_break() {
                break;
            }
        }

        self.scheduler.cancel();
        info!("Draw session actor stopped");
    }

    fn handle(&mut self, cmd: SessionCommand) -> ControlFlow<()> {
        match cmd {
            SessionCommand::SetNamesText { text, reply } => {
                self.set_names_text(text);
                self.publish();
                let _ = reply.send(());
            }
            SessionCommand::SetWinnerCount { count, reply } => {
                self.winner_count = count;
                self.publish();
                let _ = reply.send(());
            }
            SessionCommand::SetLanguage { language, reply } => {
                self.set_language(language);
                self.publish();
                let _ = reply.send(());
            }
            SessionCommand::RequestDraw { reply } => {
                let result = self.request_draw();
                self.publish();
                let _ = reply.send(result);
            }
            SessionCommand::CloseWinners { reply } => {
                let closed = self.countdown.close() == Transition::Closed;
                if closed {
                    info!("Winners closed");
                }
                self.publish();
                let _ = reply.send(closed);
            }
            SessionCommand::Reset { reply } => {
                let changed = self.reset();
                self.publish();
                let _ = reply.send(changed);
            }
            SessionCommand::Tick(draw_id) => {
                self.on_tick(draw_id);
                self.publish();
            }
            SessionCommand::Shutdown { reply } => {
                self.reset();
                self.publish();
                let _ = reply.send(());
                return ControlFlow::Break(());
            }
        }

        ControlFlow::Continue(())
    }

    fn set_names_text(&mut self, text: String) {
        if text == self.names_text {
            return;
        }

        self.names_text = text;
        persist(self.store.as_mut(), NAMES_STORAGE_KEY, &self.names_text);
    }

    fn set_language(&mut self, language: Language) {
        if language == self.language {
            return;
        }

        info!("Language changed from {} to {language}", self.language);
        self.language = language;
        persist(self.store.as_mut(), LANGUAGE_STORAGE_KEY, language.tag());
    }

    fn request_draw(&mut self) -> Result<DrawTicket, SessionError> {
        let location = ErrorLocation::from(Location::caller());

        if self.countdown.state().is_ticking() {
            return Err(SessionError::DrawInProgress {
                message: "A countdown is already running".to_string(),
                location,
            });
        }

        let names = parse_names(&self.names_text);

        if let Err(rejection) = validate_draw(&names, self.winner_count) {
            info!("Draw rejected: {rejection}");
            return Err(SessionError::Rejected {
                rejection,
                location,
            });
        }

        let request = DrawRequestBuilder::default()
            .with_names(names)
            .with_winner_count(self.winner_count)
            .build()?;

        let ticket = DrawTicket {
            draw_id: request.id(),
            name_count: request.names().len(),
            winner_count: request.winner_count(),
            countdown_from: self.config.countdown_start,
        };

        // A new draw replaces winners still on display.
        self.countdown.close();

        match self.countdown.start(request) {
            Transition::Started { remaining } => {
                info!(
                    "Draw {} started: {} winners from {} names, countdown from {remaining}",
                    ticket.draw_id, ticket.winner_count, ticket.name_count
                );
                self.schedule_tick(ticket.draw_id);
                Ok(ticket)
            }
            other => Err(SessionError::DrawInProgress {
                message: format!("Countdown refused to start: {other:?}"),
                location,
            }),
        }
    }

    fn on_tick(&mut self, draw_id: Uuid) {
        match self.countdown.tick(draw_id, &mut self.rng) {
            Transition::Ticked { remaining } => {
                debug!("Draw {draw_id} countdown at {remaining}");
                self.schedule_tick(draw_id);
            }
            Transition::Revealed(winners) => {
                self.scheduler.clear();
                info!("Draw {draw_id} revealed {} winners", winners.len());
            }
            _ => warn!("Ignoring stale tick for draw {draw_id}"),
        }
    }

    fn reset(&mut self) -> bool {
        self.scheduler.cancel();

        match (self.countdown.cancel(), self.countdown.close()) {
            (Transition::Cancelled, _) => {
                info!("Countdown cancelled");
                true
            }
            (_, Transition::Closed) => true,
            _ => false,
        }
    }

    fn schedule_tick(&mut self, draw_id: Uuid) {
        match self.command_tx.upgrade() {
            Some(command_tx) => {
                self.scheduler
                    .schedule(draw_id, self.config.tick_interval, command_tx)
            }
            None => warn!("Session handles dropped; draw {draw_id} will not advance"),
        }
    }

    fn publish(&self) {
        self.snapshot_tx.send_replace(SessionSnapshot::new(
            self.names_text.clone(),
            self.winner_count,
            self.countdown.state().clone(),
            self.language,
        ));
    }
}

/// Store failures never interrupt the session; the value just isn't persisted.
fn persist(store: &mut dyn KeyValueStore, key: &str, value: &str) {
    if let Err(e) = store.set(key, value) {
        warn!("Failed to persist {key}: {e}");
    }
}
