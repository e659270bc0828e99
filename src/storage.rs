//! Persistent storage for the active language
/// JSON file backed store
mod file;
/// In-memory store
mod memory;

use thiserror::Error;

pub use file::FileStore;
pub use memory::MemoryStore;

/// Errors from writing to a [`LanguageStore`].
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Failed to write storage file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize storage contents: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Host storage refused the write (quota, privacy mode, ...)
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// Durable string key-value storage.
///
/// Reads never fail: anything unreadable counts as absent.
pub trait LanguageStore {
    fn load(&self, key: &str) -> Option<String>;

    fn save(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}
