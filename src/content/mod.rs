//! Static site content: résumé data and blog posts, embedded at build time.

pub mod posts;
pub mod resume;

pub use posts::{post, posts, Post};
pub use resume::{resume, Resume};

#[derive(thiserror::Error, Debug)]
pub enum ContentError {
    #[error("Malformed résumé data")]
    Resume(#[from] serde_json::Error),

    #[error("Malformed date {date:?} in post {path:?}")]
    PostDate {
        path: &'static str,
        date: &'static str,
        #[source]
        source: chrono::ParseError,
    },
}

pub type ContentResult<T> = Result<T, ContentError>;
