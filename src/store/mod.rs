//! Persistent key-value storage for the saved theme preference.
//!
//! The resolver only needs string get/set/remove under one fixed key, so the
//! store is a small trait. [`MemoryStore`] keeps values for the lifetime of the
//! process; [`FileStore`] keeps them in a JSON file so they survive restarts,
//! the way browser local storage survives page reloads.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use std::path::PathBuf;

/// Key under which the dark-mode preference is stored.
pub const DARK_MODE_KEY: &str = "darkMode";

/// Failure reading or writing a [`PreferenceStore`].
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to access preference file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("preference file {path} is not a JSON object: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("preference store unavailable: {0}")]
    Unavailable(String),
}

/// A string-keyed store that outlives a single document.
///
/// Methods take `&self`: stores are shared between the resolver and the
/// change listener it registers, all on one thread.
pub trait PreferenceStore {
    /// Returns the stored value, or `None` if the key was never set.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Stores `value`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Removes the key. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for std::rc::Rc<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        (**self).remove(key)
    }
}

/// Default location of the preference file: `<data_local_dir>/folio/preferences.json`.
pub fn default_store_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join("folio").join("preferences.json"))
}
