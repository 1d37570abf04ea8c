//! # Storage Traits
//!
//! Key-based access to JSON blobs in browser-persisted storage. The domain
//! layer only ever talks to [`KeyValueStore`], so the same services run
//! against `localStorage`, `sessionStorage` or an in-memory map.

use log::warn;
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage is not available: {0}")]
    Unavailable(String),

    #[error("failed to write key '{key}': {reason}")]
    Write { key: String, reason: String },

    #[error("failed to serialize value: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Flat string namespace of string values.
///
/// Writes are immediately visible to every reader of the same store; there is
/// no grouping of writes across keys.
pub trait KeyValueStore {
    fn get_raw(&self, key: &str) -> StorageResult<Option<String>>;

    fn set_raw(&self, key: &str, value: &str) -> StorageResult<()>;

    fn remove(&self, key: &str) -> StorageResult<()>;
}

/// Read and parse a JSON value, falling back to `T::default()` when the key
/// is missing, the store is unavailable or the stored text does not parse.
pub fn get_json<T, S>(store: &S, key: &str) -> T
where
    T: DeserializeOwned + Default,
    S: KeyValueStore + ?Sized,
{
    get_json_opt(store, key).unwrap_or_default()
}

/// Like [`get_json`] but distinguishes "nothing usable stored" as `None`.
pub fn get_json_opt<T, S>(store: &S, key: &str) -> Option<T>
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    let raw = match store.get_raw(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(e) => {
            warn!("Reading '{}' failed, using default: {}", key, e);
            return None;
        }
    };

    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!("Stored '{}' is not valid JSON for its type, using default: {}", key, e);
            None
        }
    }
}

pub fn set_json<T, S>(store: &S, key: &str, value: &T) -> StorageResult<()>
where
    T: Serialize + ?Sized,
    S: KeyValueStore + ?Sized,
{
    let raw = serde_json::to_string(value)?;
    store.set_raw(key, &raw)
}

/// Flags are stored as the literal string `"true"` and removed when cleared.
pub fn get_flag<S: KeyValueStore + ?Sized>(store: &S, key: &str) -> bool {
    matches!(store.get_raw(key), Ok(Some(value)) if value == "true")
}

pub fn set_flag<S: KeyValueStore + ?Sized>(store: &S, key: &str, enabled: bool) -> StorageResult<()> {
    if enabled {
        store.set_raw(key, "true")
    } else {
        store.remove(key)
    }
}
