pub mod config;
pub mod session;
pub mod store;

pub use session::SessionError;

use models::ModelError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Config(#[from] config::ConfigError),

    #[error(transparent)]
    Store(#[from] store::StoreError),

    #[error(transparent)]
    Session(#[from] session::SessionError),

    #[error(transparent)]
    Model(#[from] ModelError),
}
