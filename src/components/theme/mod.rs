pub mod theme_ctx;
pub mod toggle;

pub mod prelude {
    pub use super::theme_ctx::{use_theme, ThemeCtx, ThemeCtxSub, ThemeState, WithTheme};
    pub use super::toggle::ThemeToggle;
}
