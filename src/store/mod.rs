//! Persistence for the user profile. The profile layer only needs a tiny
//! key-value contract, so the SQLite database is hidden behind
//! `KeyValueStore` and an in-memory implementation covers tests and
//! throwaway sessions.

mod memory;
mod profile;
mod sqlite;

use thiserror::Error;

pub use memory::MemoryStore;
pub use profile::{ProfileStore, USER_PROFILE_KEY};
pub use sqlite::SqliteStore;

/// Failures surfaced at the storage boundary.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage query failed: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("could not encode stored value: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

pub type Result<T> = std::result::Result<T, StoreError>;

/// Single-key, single-value text storage. Writes replace any previous value
/// (last write wins) and removing a missing key is not an error.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>>;
    fn set_item(&self, key: &str, value: &str) -> Result<()>;
    fn remove_item(&self, key: &str) -> Result<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        (**self).remove_item(key)
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        (**self).remove_item(key)
    }
}
