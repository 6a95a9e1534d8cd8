//! Durable key/value storage consumed by the theme preference store.
//!
//! Browser `localStorage` is not available everywhere: there is no window on
//! native targets or during non-interactive rendering, and privacy modes may
//! deny access. [`LocalPreferences::probe`] only hands out an adapter when the
//! capability is actually present, so callers hold an `Option` and branch on
//! it instead of reaching for ambient globals.

pub trait PreferenceStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;
}

#[derive(thiserror::Error, Debug)]
pub enum StorageError {
    #[error("Storage is unavailable")]
    Unavailable,

    #[error("Storage rejected the operation: {0}")]
    Rejected(String),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// `localStorage` of the current window.
#[derive(Clone, Debug)]
pub struct LocalPreferences(());

impl LocalPreferences {
    pub fn probe() -> Option<Self> {
        if local_storage_accessible() {
            Some(Self(()))
        } else {
            log::info!("localStorage is not accessible, preferences won't be remembered");
            None
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn local_storage_accessible() -> bool {
    web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .is_some()
}

// wasm-bindgen imports abort when called outside of wasm
#[cfg(not(target_arch = "wasm32"))]
fn local_storage_accessible() -> bool {
    false
}

// Values are stored as the bare string (`theme=light`), not JSON-encoded, so
// preferences written by earlier versions of the site keep working.
impl PreferenceStorage for LocalPreferences {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let value = LocalStorage::raw()
            .get_item(key)
            .map_err(|e| StorageError::Rejected(format!("{:?}", e)))?;

        Ok(value.map(decode))
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        LocalStorage::raw()
            .set_item(key, value)
            .map_err(|e| StorageError::Rejected(format!("{:?}", e)))
    }
}

/// Reads a stored value. Builds that went through gloo's JSON encoding left
/// quoted strings (`"\"light\""`) behind, those are unquoted.
fn decode(stored: String) -> String {
    match serde_json::from_str::<String>(&stored) {
        Ok(unquoted) => unquoted,
        Err(_) => stored,
    }
}

/// In-memory storage. Clones share the same entries, so several stores built
/// over clones of one `MemoryStorage` behave like sessions sharing a browser
/// profile.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(key: &str, value: &str) -> Self {
        let storage = Self::new();
        storage
            .entries
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
        storage
    }

    pub fn entry(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl PreferenceStorage for MemoryStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.entry(key))
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claim::{assert_none, assert_ok, assert_some_eq};

    #[test]
    fn memory_storage_clones_share_entries() {
        let storage = MemoryStorage::new();
        let other_session = storage.clone();

        assert_ok!(storage.set("theme", "light"));

        assert_some_eq!(assert_ok!(other_session.get("theme")), "light".to_owned());
        assert_eq!(other_session.len(), 1);
    }

    #[test]
    fn missing_key_reads_as_none() {
        let storage = MemoryStorage::with_entry("unrelated", "value");
        assert_none!(assert_ok!(storage.get("theme")));
    }

    #[test]
    fn stored_values_are_read_as_plain_strings() {
        assert_eq!(decode("light".to_owned()), "light");
        assert_eq!(decode("dark".to_owned()), "dark");
        assert_eq!(decode("blue".to_owned()), "blue");
    }

    #[test]
    fn json_quoted_values_are_unquoted() {
        assert_eq!(decode("\"light\"".to_owned()), "light");
        assert_eq!(decode("\"\"".to_owned()), "");
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn local_storage_is_never_probed_natively() {
        assert!(LocalPreferences::probe().is_none());
    }
}

use gloo_storage::{LocalStorage, Storage};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
