use crate::validator::DrawRejection;

use models::{ErrorLocation, ModelError};

use std::panic::Location;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum SessionError {
    /// Validation refused the draw; the session state is unchanged.
    #[error("Draw Rejected: {rejection} {location}")]
    Rejected {
        rejection: DrawRejection,
        location: ErrorLocation,
    },

    #[error("Draw In Progress Error: {message} {location}")]
    DrawInProgress {
        message: String,
        location: ErrorLocation,
    },

    #[error("Session Actor Stopped Error: {message} {location}")]
    ActorStopped {
        message: String,
        location: ErrorLocation,
    },

    #[error("Draw Request Error: {source} {location}")]
    Request {
        location: ErrorLocation,
        #[source]
        source: ModelError,
    },
}

impl SessionError {
    /// The user-facing rejection, if this is one.
    pub fn rejection(&self) -> Option<DrawRejection> {
        match self {
            SessionError::Rejected { rejection, .. } => Some(*rejection),
            _ => None,
        }
    }
}

impl From<ModelError> for SessionError {
    #[track_caller]
    fn from(error: ModelError) -> Self {
        SessionError::Request {
            location: ErrorLocation::from(Location::caller()),
            source: error,
        }
    }
}
