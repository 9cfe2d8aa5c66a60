//! Key-value persistence for puzzle sessions.
//!
//! Backends never fail towards the caller: a store that cannot read or
//! write degrades to behaving like an empty one, and the failure is logged.

mod error;
mod file;
mod memory;

pub use error::StoreError;
pub use file::JsonFileStore;
pub use memory::{MemoryStore, NullStore};

/// Keys a session is persisted under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::AsRefStr, strum::Display, strum::EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum StorageKey {
    /// The secret of the current game.
    Secret,
    /// JSON array of `[guess, {bulls, cows}]` pairs, newest first.
    History,
    /// Text typed but not yet submitted.
    Guess,
    /// Alphabet the secret was drawn from.
    Base,
    /// Secret length.
    Length,
}

/// A string key-value store.
pub trait KeyValueStore {
    /// Reads a value.
    fn get(&self, key: StorageKey) -> Option<String>;

    /// Writes a value.
    fn set(&mut self, key: StorageKey, value: &str);

    /// Deletes a value.
    fn remove(&mut self, key: StorageKey);

    /// Deletes every value.
    fn clear(&mut self);
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: StorageKey) -> Option<String> {
        (**self).get(key)
    }

    fn set(&mut self, key: StorageKey, value: &str) {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: StorageKey) {
        (**self).remove(key)
    }

    fn clear(&mut self) {
        (**self).clear()
    }
}
