use crate::parser::count_names;

use models::{CountdownState, Language, WinnerCount, WinnerList};

use serde::Serialize;
use uuid::Uuid;

/// Read-only view of a session, published after every command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionSnapshot {
    pub names_text: String,
    pub name_count: usize,
    pub winner_count: WinnerCount,
    pub countdown: CountdownState,
    pub language: Language,
}

impl SessionSnapshot {
    pub(crate) fn new(
        names_text: String,
        winner_count: WinnerCount,
        countdown: CountdownState,
        language: Language,
    ) -> Self {
        Self {
            name_count: count_names(&names_text),
            names_text,
            winner_count,
            countdown,
            language,
        }
    }

    /// Winners on display, empty unless revealing.
    pub fn winners(&self) -> WinnerList {
        self.countdown.winners().cloned().unwrap_or_default()
    }

    /// Whether the draw trigger is enabled.
    pub fn can_draw(&self) -> bool {
        !self.countdown.is_ticking()
    }
}

/// Returned when a draw has been accepted and its countdown started.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DrawTicket {
    pub draw_id: Uuid,
    pub name_count: usize,
    pub winner_count: WinnerCount,
    pub countdown_from: u8,
}
