use draw_core::error::CoreError;

use models::ErrorLocation;

use serde::Serialize;
use thiserror::Error;

/// Errors surfaced by the terminal front end.
///
/// `Core` keeps only the rendered message of the underlying error so the
/// whole enum stays serializable.
#[derive(Debug, Error, Serialize)]
#[serde(tag = "type", content = "data")]
pub enum LotteryError {
    /// Error from this App
    #[error("Lottery Error: {message} {location}")]
    Lottery {
        message: String,
        location: ErrorLocation,
    },

    /// Error from draw-core operations (config, store, session)
    #[error("Core Error: {message} {location}")]
    Core {
        message: String,
        location: ErrorLocation,
    },

    /// The draw was refused; `message` is already localized
    #[error("Rejected Error: {message} {location}")]
    Rejected {
        message: String,
        location: ErrorLocation,
    },
}

impl LotteryError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            LotteryError::Rejected { .. } => 2,
            LotteryError::Lottery { .. } | LotteryError::Core { .. } => 1,
        }
    }
}

impl From<CoreError> for LotteryError {
    #[track_caller]
    fn from(error: CoreError) -> Self {
        LotteryError::Core {
            message: error.to_string(),
            location: ErrorLocation::from(std::panic::Location::caller()),
        }
    }
}
