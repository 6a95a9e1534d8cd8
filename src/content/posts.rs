pub const EXCERPT_LENGTH: usize = 150;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Post {
    pub title: &'static str,
    pub path: &'static str,
    /// `YYYY-MM-DD`, drafts have none
    pub date: Option<&'static str>,
    /// Markdown
    pub body: &'static str,
}

const POSTS: &[Post] = &[
    Post {
        title: "Theming with CSS variables",
        path: "theming-with-css-variables",
        date: Some("2019-06-01"),
        body: include_str!("../../content/posts/theming-with-css-variables.md"),
    },
    Post {
        title: "A responsive type scale",
        path: "responsive-type-scale",
        date: Some("2019-09-14"),
        body: include_str!("../../content/posts/responsive-type-scale.md"),
    },
    Post {
        title: "Notes on reading",
        path: "notes-on-reading",
        date: None,
        body: include_str!("../../content/posts/notes-on-reading.md"),
    },
];

impl Post {
    pub fn date(&self) -> ContentResult<Option<NaiveDate>> {
        self.date
            .map(|date| {
                NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|source| {
                    ContentError::PostDate {
                        path: self.path,
                        date,
                        source,
                    }
                })
            })
            .transpose()
    }

    /// e.g. `June 01, 2019`
    pub fn formatted_date(&self) -> ContentResult<Option<String>> {
        Ok(self
            .date()?
            .map(|date| date.format("%B %d, %Y").to_string()))
    }

    pub fn excerpt(&self) -> String {
        excerpt(self.body, EXCERPT_LENGTH)
    }

    pub fn is_draft(&self) -> bool {
        self.date.is_none()
    }
}

/// Published posts, newest first.
pub fn posts() -> Vec<&'static Post> {
    published(POSTS)
}

pub fn post(path: &str) -> Option<&'static Post> {
    POSTS.iter().find(|post| post.path == path)
}

fn published(all: &[Post]) -> Vec<&Post> {
    let mut posts: Vec<_> = all.iter().filter(|post| !post.is_draft()).collect();
    // ISO dates order lexicographically
    posts.sort_by(|a, b| b.date.cmp(&a.date));
    posts
}

/// Plain text of `markdown`, cut at a word boundary so that it fits in
/// `prune` characters, `…` appended when something was cut.
pub fn excerpt(markdown: &str, prune: usize) -> String {
    let mut text = String::new();

    for event in Parser::new(markdown) {
        match event {
            Event::Text(t) | Event::Code(t) => text.push_str(&t),
            Event::SoftBreak | Event::HardBreak => text.push(' '),
            Event::End(Tag::Paragraph | Tag::Heading(..) | Tag::Item | Tag::CodeBlock(_)) => {
                text.push(' ')
            }
            _ => {}
        }
    }

    let words: Vec<&str> = text.split_whitespace().collect();
    let full = words.join(" ");

    if full.chars().count() <= prune {
        return full;
    }

    let mut out = String::new();
    for word in words {
        let extra = if out.is_empty() { 0 } else { 1 };
        if out.chars().count() + extra + word.chars().count() + 1 > prune {
            break;
        }
        if extra == 1 {
            out.push(' ');
        }
        out.push_str(word);
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use claim::{assert_none, assert_ok, assert_some, assert_some_eq};

    #[test]
    fn drafts_are_not_listed() {
        let listed = posts();

        assert!(listed.iter().all(|post| post.date.is_some()));
        assert_some!(post("notes-on-reading"));
        assert!(!listed.iter().any(|post| post.path == "notes-on-reading"));
    }

    #[test]
    fn newest_first() {
        let fixture = [
            Post {
                title: "old",
                path: "old",
                date: Some("2018-01-31"),
                body: "",
            },
            Post {
                title: "draft",
                path: "draft",
                date: None,
                body: "",
            },
            Post {
                title: "new",
                path: "new",
                date: Some("2020-12-01"),
                body: "",
            },
        ];

        let paths: Vec<_> = published(&fixture).iter().map(|p| p.path).collect();
        assert_eq!(paths, ["new", "old"]);
    }

    #[test]
    fn every_embedded_date_is_valid() {
        for post in POSTS {
            assert_ok!(post.date());
        }
    }

    #[test]
    fn dates_are_spelled_out() {
        let post = assert_some!(post("theming-with-css-variables"));
        assert_some_eq!(
            assert_ok!(post.formatted_date()),
            "June 01, 2019".to_owned()
        );
    }

    #[test]
    fn malformed_date_is_reported_with_its_post() {
        let post = Post {
            title: "broken",
            path: "broken",
            date: Some("01/06/2019"),
            body: "",
        };

        match post.date() {
            Err(ContentError::PostDate { path, date, .. }) => {
                assert_eq!(path, "broken");
                assert_eq!(date, "01/06/2019");
            }
            other => panic!("expected a date error, got {:?}", other),
        }
    }

    #[test]
    fn unknown_path_is_none() {
        assert_none!(post("nope"));
    }

    #[test]
    fn short_excerpt_is_kept_whole() {
        assert_eq!(
            excerpt("# Title\n\nSome *styled* `code`.", 150),
            "Title Some styled code."
        );
    }

    #[test]
    fn long_excerpt_is_pruned_at_a_word() {
        let excerpt = excerpt("one two three four five", 12);

        assert_eq!(excerpt, "one two…");
        assert!(excerpt.chars().count() <= 12);
    }

    #[test]
    fn embedded_excerpts_fit() {
        for post in POSTS {
            assert!(post.excerpt().chars().count() <= EXCERPT_LENGTH);
        }
    }
}

use super::{ContentError, ContentResult};
use chrono::NaiveDate;
use pulldown_cmark::{Event, Parser, Tag};
