use crate::helpers::{remembered, session, FailingStorage};
use claim::{assert_none, assert_some_eq};
use portfolio::theme::prelude::*;

#[test]
fn selection_survives_a_new_session() {
    let storage = MemoryStorage::new();

    let mut first = session(&storage);
    first.update("light");
    assert_eq!(session(&storage).current(), ThemeName::Light);

    first.update("dark");
    assert_eq!(session(&storage).current(), ThemeName::Dark);
}

#[test]
fn empty_storage_starts_dark() {
    let storage = MemoryStorage::new();
    let mut store = ThemePreferenceStore::new(Some(storage.clone()));

    assert_eq!(store.initialize(), ThemeName::Dark);
    assert_some_eq!(remembered(&storage), "dark".to_owned());
}

#[test]
fn malformed_remembered_value_is_replaced_by_default() {
    let storage = MemoryStorage::with_entry(STORAGE_KEY, "blue");
    let mut store = ThemePreferenceStore::new(Some(storage.clone()));

    assert_eq!(store.initialize(), ThemeName::Dark);
    assert_some_eq!(remembered(&storage), "dark".to_owned());
}

#[test]
fn works_without_storage() {
    let mut store = ThemePreferenceStore::<MemoryStorage>::new(None);

    assert_eq!(store.initialize(), ThemeName::Dark);

    store.update("light");
    assert_eq!(store.current(), ThemeName::Light);

    // nothing was remembered, a new session starts from the default again
    let next = ThemePreferenceStore::<MemoryStorage>::initialized(None);
    assert_eq!(next.current(), ThemeName::Dark);
}

#[test]
fn storage_failures_are_swallowed() {
    let mut store = ThemePreferenceStore::initialized(Some(FailingStorage));
    assert_eq!(store.current(), ThemeName::Dark);

    store.update("light");
    assert_eq!(store.current(), ThemeName::Light);
}

#[test]
fn repeated_update_is_idempotent() {
    let once = MemoryStorage::new();
    let twice = MemoryStorage::new();

    session(&once).update("light");

    let mut store = session(&twice);
    store.update("light");
    store.update("light");

    assert_eq!(store.current(), ThemeName::Light);
    assert_eq!(remembered(&once), remembered(&twice));
    assert_some_eq!(remembered(&twice), "light".to_owned());
}

#[test]
fn other_keys_are_left_alone() {
    let storage = MemoryStorage::with_entry("unrelated", "value");

    session(&storage).update("light");

    assert_some_eq!(storage.entry("unrelated"), "value".to_owned());
    assert_eq!(storage.len(), 2);
}

#[test]
fn uninitialized_store_has_not_written_anything() {
    let storage = MemoryStorage::new();
    let _store = ThemePreferenceStore::new(Some(storage.clone()));

    assert_none!(remembered(&storage));
}

#[test]
fn selection_is_stored_as_the_bare_name() {
    let storage = MemoryStorage::with_entry(STORAGE_KEY, "light");

    let mut store = session(&storage);
    assert_eq!(store.current(), ThemeName::Light);

    store.update("dark");
    assert_some_eq!(remembered(&storage), "dark".to_owned());
}
