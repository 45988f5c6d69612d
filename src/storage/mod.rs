//! Key-value persistence.
//!
//! Values are JSON documents stored whole under a string key. Callers read a
//! value entirely and write it back entirely; there is no partial update.

mod file;
mod memory;

use std::path::PathBuf;

use serde_json::Value;
use thiserror::Error;

pub use file::JsonFileStore;
pub use memory::MemoryStore;

/// Errors raised by a [`KeyValueStore`] or while (de)serializing its values.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to access '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to lock '{path}': {source}")]
    Lock {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Store file '{path}' is not a JSON object: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to encode value: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("Failed to decode value for key '{key}': {source}")]
    Decode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Whole-value key-value storage.
pub trait KeyValueStore: Send {
    /// Read the value stored under `key`, or `None` if absent.
    fn get(&self, key: &str) -> Result<Option<Value>, StorageError>;

    /// Replace the value stored under `key`.
    fn set(&mut self, key: &str, value: Value) -> Result<(), StorageError>;
}
