use crate::helpers::{remembered, session};
use claim::assert_some_eq;
use portfolio::theme::prelude::*;

const INVALID: &[&str] = &[
    "", "blue", "pastel", "Light", "DARK", " dark", "dark ", "light\n", "null",
];

#[test]
fn invalid_names_leave_the_theme_unchanged() {
    for start in ThemeName::ALL {
        let storage = MemoryStorage::with_entry(STORAGE_KEY, start.as_str());
        let mut store = session(&storage);

        for requested in INVALID {
            store.update(requested);

            assert_eq!(store.current(), start, "{:?} changed the theme", requested);
            assert_some_eq!(remembered(&storage), start.as_str().to_owned());
        }
    }
}

#[test]
fn every_theme_is_reachable_from_every_theme() {
    for from in ThemeName::ALL {
        for to in ThemeName::ALL {
            let storage = MemoryStorage::with_entry(STORAGE_KEY, from.as_str());
            let mut store = session(&storage);

            store.update(to.as_str());

            assert_eq!(store.current(), to);
            assert_some_eq!(remembered(&storage), to.as_str().to_owned());
        }
    }
}
