//! Key-value persistence for the session.
//!
//! Values are opaque strings at the trait level; [`read_or_default`] and
//! [`write_json`] layer JSON on top.

mod error;
mod file_store;
mod memory_store;

pub use error::{Result as StoreResult, StoreError};
pub use file_store::FileStore;
pub use memory_store::MemoryStore;

use log::warn;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Minimal string key-value storage, last writer wins.
pub trait KeyValueStore {
    fn read(&self, key: &str) -> StoreResult<Option<String>>;

    fn write(&mut self, key: &str, value: &str) -> StoreResult<()>;

    /// Removing a missing key is not an error.
    fn remove(&mut self, key: &str) -> StoreResult<()>;
}

/// Reads and decodes `key`, falling back to `T::default()` when the entry is
/// missing or does not decode.
pub fn read_or_default<T, S>(store: &S, key: &str) -> StoreResult<T>
where
    T: DeserializeOwned + Default,
    S: KeyValueStore + ?Sized,
{
    let Some(raw) = store.read(key)? else {
        return Ok(T::default());
    };

    match serde_json::from_str(&raw) {
        Ok(value) => Ok(value),
        Err(e) => {
            warn!("Ignoring malformed value under '{key}': {e}");
            Ok(T::default())
        }
    }
}

pub fn write_json<T, S>(store: &mut S, key: &str, value: &T) -> StoreResult<()>
where
    T: Serialize + ?Sized,
    S: KeyValueStore + ?Sized,
{
    let json = serde_json::to_string(value)?;
    store.write(key, &json)
}
