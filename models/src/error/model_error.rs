use crate::ErrorLocation;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum ModelError {
    #[error("Validation Error: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    #[error("Unknown Language Error: {tag} {location}")]
    UnknownLanguage {
        tag: String,
        location: ErrorLocation,
    },
}
