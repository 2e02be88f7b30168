//! String tables and language resolution.
//!
//! - [`translations`] maps a [`Language`] to its fixed message table.
//! - [`detect_language`] maps an ambient locale signal to a supported language.
//! - [`resolve_language`] prefers a persisted choice over detection.

mod detection;
mod translations;

pub use detection::{detect_language, locale_from_env, locale_from_vars, resolve_language};
pub use translations::{Translations, translations};

pub use models::Language;
