pub mod media;
pub mod text;
pub mod variables;

pub use media::{media, px_to_rem, Media};
pub use text::TextSize;

/// Parses CSS assembled at runtime, e.g. rules wrapped by [`media`].
pub fn sheet(css: &str) -> StyleSource {
    match Sheet::from_str(css) {
        Ok(sheet) => sheet.into(),
        Err(e) => {
            log::error!("failed to parse generated style: {}", e);
            css!("")
        }
    }
}

use std::str::FromStr;
use stylist::ast::Sheet;
use stylist::{css, StyleSource};
