mod builder;

pub use builder::DrawRequestBuilder;

use crate::{NameList, WinnerCount};

use serde::Serialize;
use uuid::Uuid;

/// Frozen snapshot of one draw attempt.
///
/// Captured when a draw starts and used unchanged when the countdown
/// finishes, so edits made to the input during the countdown never reach
/// the selection. Only [`DrawRequestBuilder`] creates one, which guarantees
/// `1 <= winner_count <= names.len()`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DrawRequest {
    id: Uuid,
    names: NameList,
    winner_count: WinnerCount,
}

impl DrawRequest {
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn names(&self) -> &NameList {
        &self.names
    }

    pub fn winner_count(&self) -> WinnerCount {
        self.winner_count
    }
}
