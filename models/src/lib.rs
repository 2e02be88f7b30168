//! Domain models for the name lottery.
//!
//! This crate contains the plain data structures the draw engine passes
//! around. Constructors keep each type's invariants (trimmed non-empty
//! names, a winner count of at least one, a validated draw snapshot), but
//! the behavior that operates on them lives in `draw-core`.
//!
//! ## Architecture
//!
//! - **models** (this crate): Pure data structures
//! - **draw-core**: Parsing, validation, selection, countdown, session
//! - **lottery**: Terminal front end wiring everything together

pub mod countdown_state;
pub mod draw_request;
pub mod error;
pub mod language;
pub mod names;
pub mod winner_count;

#[cfg(test)]
mod tests;

pub use countdown_state::CountdownState;
pub use draw_request::{DrawRequest, DrawRequestBuilder};
pub use error::error_location::ErrorLocation;
pub use error::model_error::ModelError;
pub use language::Language;
pub use names::{NameList, WinnerList, trim_name};
pub use winner_count::WinnerCount;
