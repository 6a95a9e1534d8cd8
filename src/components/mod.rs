#![allow(non_upper_case_globals)]

pub mod imports;

mod blog;
mod cv;
mod default_styling;
mod error;
mod header;
mod home;
pub mod icons;
mod layout;
mod markdown;
mod social;
mod title;

pub use blog::{BlogIndex, PostViewer};
pub use cv::Cv;
pub use default_styling::DefaultStyling;
pub use error::Error;
pub use header::Header;
pub use home::Home;
pub use layout::Layout;
pub use markdown::{parse_md, Markdown};
pub use title::PageTitle;

pub mod theme;
