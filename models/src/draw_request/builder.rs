use crate::error::model_error::ModelError;
use crate::{DrawRequest, ErrorLocation, NameList, WinnerCount};

use std::panic::Location;

use uuid::Uuid;

/// Builder for creating validated DrawRequest instances.
///
/// The id defaults to a fresh v4 UUID when none is supplied.
#[derive(Debug, Default)]
pub struct DrawRequestBuilder {
    id: Option<Uuid>,
    names: Option<NameList>,
    winner_count: Option<WinnerCount>,
}

impl DrawRequestBuilder {
    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_names(mut self, names: NameList) -> Self {
        self.names = Some(names);
        self
    }

    pub fn with_winner_count(mut self, winner_count: WinnerCount) -> Self {
        self.winner_count = Some(winner_count);
        self
    }

    /// Build the DrawRequest with validation.
    ///
    /// Errors report the caller's location, captured once on entry.
    #[track_caller]
    pub fn build(self) -> Result<DrawRequest, ModelError> {
        let location = ErrorLocation::from(Location::caller());

        let names = self.names.ok_or_else(|| ModelError::Validation {
            message: String::from("Names are required"),
            location,
        })?;

        if names.is_empty() {
            return Err(ModelError::Validation {
                message: String::from("Names cannot be empty"),
                location,
            });
        }

        let winner_count = self.winner_count.ok_or_else(|| ModelError::Validation {
            message: String::from("Winner count is required"),
            location,
        })?;

        if winner_count.get() > names.len() {
            return Err(ModelError::Validation {
                message: format!(
                    "Winner count {} exceeds {} available names",
                    winner_count,
                    names.len()
                ),
                location,
            });
        }

        Ok(DrawRequest {
            id: self.id.unwrap_or_else(Uuid::new_v4),
            names,
            winner_count,
        })
    }
}
