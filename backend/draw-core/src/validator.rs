//! Checks whether a draw can start.

use models::{NameList, WinnerCount};

use serde::Serialize;
use thiserror::Error as ThisError;

/// Why a draw was refused.
///
/// These are ordinary values handed back to the caller, who decides how to
/// show them (see [`Translations::rejection_message`](crate::i18n::Translations::rejection_message)).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ThisError)]
#[serde(tag = "kind")]
pub enum DrawRejection {
    #[error("no names to draw from")]
    NoNames,

    #[error("cannot select {requested} winners from {available} names")]
    TooManyWinners { requested: usize, available: usize },
}

pub type ValidationResult = Result<(), DrawRejection>;

/// Validate a candidate list against the requested winner count.
///
/// An empty list is always `NoNames`, whatever the count.
pub fn validate_draw(names: &NameList, winner_count: WinnerCount) -> ValidationResult {
    if names.is_empty() {
        return Err(DrawRejection::NoNames);
    }

    if winner_count.get() > names.len() {
        return Err(DrawRejection::TooManyWinners {
            requested: winner_count.get(),
            available: names.len(),
        });
    }

    Ok(())
}
