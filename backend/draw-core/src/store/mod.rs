//! String key-value persistence for user input.
//!
//! The session reads its initial names text and language through this trait
//! once at startup and writes each change back. Implementations decide where
//! the values live; the draw engine never touches global storage directly.

mod json_file;
mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

use crate::error::store::StoreError;

/// Minimal string-to-string store.
pub trait KeyValueStore: Send {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}
