//! Observable countdown phase.

use crate::WinnerList;

use serde::Serialize;

/// Where the draw countdown currently is.
///
/// `Ticking(n)` counts down to zero; the step after `Ticking(0)` selects
/// the winners and moves to `Revealing`, which holds them until closed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "value")]
pub enum CountdownState {
    #[default]
    Idle,
    Ticking(u8),
    Revealing(WinnerList),
}

impl CountdownState {
    #[inline]
    pub fn is_idle(&self) -> bool {
        matches!(self, CountdownState::Idle)
    }

    #[inline]
    pub fn is_ticking(&self) -> bool {
        matches!(self, CountdownState::Ticking(_))
    }

    #[inline]
    pub fn is_revealing(&self) -> bool {
        matches!(self, CountdownState::Revealing(_))
    }

    /// Remaining steps while ticking.
    pub fn remaining(&self) -> Option<u8> {
        match self {
            CountdownState::Ticking(remaining) => Some(*remaining),
            _ => None,
        }
    }

    pub fn winners(&self) -> Option<&WinnerList> {
        match self {
            CountdownState::Revealing(winners) => Some(winners),
            _ => None,
        }
    }
}
