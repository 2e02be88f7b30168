//! Countdown state machine.
//!
//! `Idle -> Ticking(start) -> ... -> Ticking(0) -> Revealing -> Idle`.
//!
//! This type only applies transitions; it never sleeps. The session decides
//! when a tick is due and drives [`Countdown::tick`] from its timer. Ticks
//! carry the id of the draw they were scheduled for, so a tick that outlives
//! its draw (cancelled, closed, replaced) is dropped instead of advancing a
//! different countdown.

use crate::selector::select_winners;

use models::{CountdownState, DrawRequest, WinnerList};

use log::debug;
use rand::Rng;
use uuid::Uuid;

pub const DEFAULT_COUNTDOWN_START: u8 = 3;

/// Result of applying one input to the state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// A draw entered `Ticking(remaining)`.
    Started { remaining: u8 },

    /// `Ticking(n)` moved to `Ticking(remaining)`.
    Ticked { remaining: u8 },

    /// Winners were selected and are now on display.
    Revealed(WinnerList),

    /// `Revealing` returned to `Idle`.
    Closed,

    /// A countdown in progress was abandoned.
    Cancelled,

    /// The input did not apply to the current state.
    Ignored,
}

#[derive(Debug)]
pub struct Countdown {
    start_from: u8,
    state: CountdownState,
    active: Option<DrawRequest>,
}

impl Countdown {
    pub fn new(start_from: u8) -> Self {
        Self {
            start_from,
            state: CountdownState::Idle,
            active: None,
        }
    }

    pub fn state(&self) -> &CountdownState {
        &self.state
    }

    /// The snapshot the running countdown will draw from.
    pub fn active_request(&self) -> Option<&DrawRequest> {
        self.active.as_ref()
    }

    /// Begin counting down for `request`. Only valid from `Idle`.
    pub fn start(&mut self, request: DrawRequest) -> Transition {
        if !self.state.is_idle() {
            debug!(
                "Refusing to start draw {} while countdown is {:?}",
                request.id(),
                self.state
            );
            return Transition::Ignored;
        }

        debug!(
            "Draw {} entering countdown at {}",
            request.id(),
            self.start_from
        );
        self.state = CountdownState::Ticking(self.start_from);
        self.active = Some(request);

        Transition::Started {
            remaining: self.start_from,
        }
    }

    /// Advance one step for draw `draw_id`.
    ///
    /// From `Ticking(0)` this runs the selector against the snapshot captured
    /// by [`start`](Self::start) and moves to `Revealing`.
    pub fn tick<R>(&mut self, draw_id: Uuid, rng: &mut R) -> Transition
    where
        R: Rng + ?Sized,
    {
        let matches_active = self
            .active
            .as_ref()
            .is_some_and(|request| request.id() == draw_id);

        let remaining = match self.state {
            CountdownState::Ticking(remaining) if matches_active => remaining,
            _ => return Transition::Ignored,
        };

        if remaining > 0 {
            self.state = CountdownState::Ticking(remaining - 1);
            return Transition::Ticked {
                remaining: remaining - 1,
            };
        }

        let Some(request) = self.active.take() else {
            return Transition::Ignored;
        };

        let winners = select_winners(request.names(), request.winner_count(), rng);
        self.state = CountdownState::Revealing(winners.clone());

        Transition::Revealed(winners)
    }

    /// Leave `Revealing`, discarding the winners. No-op elsewhere.
    pub fn close(&mut self) -> Transition {
        if !self.state.is_revealing() {
            return Transition::Ignored;
        }

        self.state = CountdownState::Idle;
        Transition::Closed
    }

    /// Abandon a countdown in progress. No-op unless ticking.
    pub fn cancel(&mut self) -> Transition {
        if !self.state.is_ticking() {
            return Transition::Ignored;
        }

        self.state = CountdownState::Idle;
        self.active = None;
        Transition::Cancelled
    }
}

impl Default for Countdown {
    fn default() -> Self {
        Self::new(DEFAULT_COUNTDOWN_START)
    }
}
