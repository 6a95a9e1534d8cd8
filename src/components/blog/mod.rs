mod list;
mod one;

pub use list::BlogIndex;
pub use one::PostViewer;
