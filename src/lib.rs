pub mod app;
pub mod components;
pub mod content;
pub mod router;
pub mod styles;
mod switch;
pub mod theme;
