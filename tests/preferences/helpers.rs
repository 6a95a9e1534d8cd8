use portfolio::theme::prelude::*;
use portfolio::theme::storage::{StorageError, StorageResult};

pub type MemoryStore = ThemePreferenceStore<MemoryStorage>;

/// A fresh session over `storage`, already initialized.
pub fn session(storage: &MemoryStorage) -> MemoryStore {
    ThemePreferenceStore::initialized(Some(storage.clone()))
}

pub fn remembered(storage: &MemoryStorage) -> Option<String> {
    storage.entry(STORAGE_KEY)
}

/// Storage that exists but refuses every operation, like a profile with a
/// full quota or denied access.
#[derive(Clone, Debug, Default)]
pub struct FailingStorage;

impl PreferenceStorage for FailingStorage {
    fn get(&self, _key: &str) -> StorageResult<Option<String>> {
        Err(StorageError::Unavailable)
    }

    fn set(&self, _key: &str, _value: &str) -> StorageResult<()> {
        Err(StorageError::Unavailable)
    }
}
