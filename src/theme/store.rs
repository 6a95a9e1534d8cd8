/// Key the selected theme is remembered under. Changing it forgets every
/// visitor's preference.
pub const STORAGE_KEY: &str = "theme";

/// Single source of truth for the active theme.
///
/// Storage is optional: without it the store still works, it just forgets the
/// selection when the session ends. Nothing here ever fails towards the
/// caller; invalid names are ignored and storage errors are only logged.
#[derive(Debug)]
pub struct ThemePreferenceStore<S> {
    current: ThemeName,
    storage: Option<S>,
}

impl<S: PreferenceStorage> ThemePreferenceStore<S> {
    pub fn new(storage: Option<S>) -> Self {
        Self {
            current: ThemeName::default(),
            storage,
        }
    }

    /// Builds the store and loads the remembered theme in one go.
    pub fn initialized(storage: Option<S>) -> Self {
        let mut store = Self::new(storage);
        store.initialize();
        store
    }

    pub fn initialize(&mut self) -> ThemeName {
        match self.remembered() {
            Some(theme) => self.current = theme,
            None => {
                self.current = ThemeName::default();
                self.persist();
            }
        }
        self.current
    }

    pub fn current(&self) -> ThemeName {
        self.current
    }

    /// Applies `requested` if it names a known theme, otherwise does nothing.
    pub fn update(&mut self, requested: &str) {
        match ThemeName::try_from(requested) {
            Ok(theme) => self.set(theme),
            Err(e) => log::debug!("ignoring theme update: {}", e),
        }
    }

    pub fn set(&mut self, theme: ThemeName) {
        self.current = theme;
        self.persist();
    }

    fn remembered(&self) -> Option<ThemeName> {
        let storage = self.storage.as_ref()?;

        match storage.get(STORAGE_KEY) {
            Ok(Some(value)) => match ThemeName::try_from(value.as_str()) {
                Ok(theme) => Some(theme),
                Err(e) => {
                    log::warn!("remembered theme is discarded: {}", e);
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                log::warn!("failed to read remembered theme: {}", e);
                None
            }
        }
    }

    fn persist(&self) {
        let Some(storage) = &self.storage else {
            return;
        };

        if let Err(e) = storage.set(STORAGE_KEY, self.current.as_str()) {
            log::warn!("failed to remember theme {}: {}", self.current, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::storage::MemoryStorage;
    use claim::assert_some_eq;

    #[test]
    fn new_store_starts_dark_and_does_not_touch_storage() {
        let storage = MemoryStorage::new();
        let store = ThemePreferenceStore::new(Some(storage.clone()));

        assert_eq!(store.current(), ThemeName::Dark);
        assert!(storage.is_empty());
    }

    #[test]
    fn substituted_default_is_remembered() {
        let storage = MemoryStorage::new();
        let mut store = ThemePreferenceStore::new(Some(storage.clone()));

        assert_eq!(store.initialize(), ThemeName::Dark);
        assert_some_eq!(storage.entry(STORAGE_KEY), "dark".to_owned());
    }

    #[test]
    fn remembered_value_is_not_rewritten_on_initialize() {
        let storage = MemoryStorage::with_entry(STORAGE_KEY, "light");
        let store = ThemePreferenceStore::initialized(Some(storage.clone()));

        assert_eq!(store.current(), ThemeName::Light);
        assert_some_eq!(storage.entry(STORAGE_KEY), "light".to_owned());
    }

    #[test]
    fn update_writes_through_before_returning() {
        let storage = MemoryStorage::new();
        let mut store = ThemePreferenceStore::initialized(Some(storage.clone()));

        store.update("light");

        assert_eq!(store.current(), ThemeName::Light);
        assert_some_eq!(storage.entry(STORAGE_KEY), "light".to_owned());
    }

    #[test]
    fn typed_set_switches_back() {
        let storage = MemoryStorage::with_entry(STORAGE_KEY, "light");
        let mut store = ThemePreferenceStore::initialized(Some(storage.clone()));

        store.set(ThemeName::Dark);

        assert_eq!(store.current(), ThemeName::Dark);
        assert_some_eq!(storage.entry(STORAGE_KEY), "dark".to_owned());
    }
}

use super::storage::PreferenceStorage;
use super::themes::ThemeName;
