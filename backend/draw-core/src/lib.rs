pub mod config;
pub mod countdown;
pub mod error;
pub mod i18n;
pub mod parser;
pub mod selector;
pub mod session;
pub mod store;
pub mod validator;

#[cfg(test)]
mod tests;

pub const APP_DIR_NAME: &str = "name-lottery";
pub const STORAGE_KEY_PREFIX: &str = "lottery";
pub const NAMES_STORAGE_KEY: &str = const_format::concatcp!(STORAGE_KEY_PREFIX, "-names");
pub const LANGUAGE_STORAGE_KEY: &str = const_format::concatcp!(STORAGE_KEY_PREFIX, "-language");
