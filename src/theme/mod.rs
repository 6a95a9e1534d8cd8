pub mod storage;
pub mod store;
pub mod themes;

pub mod prelude {
    pub use super::storage::{LocalPreferences, MemoryStorage, PreferenceStorage};
    pub use super::store::{ThemePreferenceStore, STORAGE_KEY};
    pub use super::themes::{Theme, ThemeName};
}
