#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Resume {
    pub contact: ContactDetails,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    pub expertise: Vec<Expertise>,
    pub interests: Vec<String>,
    pub hobbies: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ContactDetails {
    pub name: String,
    pub location: String,
    pub email: String,
    pub github: String,
    pub linkedin: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Experience {
    pub position: String,
    pub company: String,
    pub url: String,
    pub dates: String,
    /// Markdown
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Education {
    pub qualification: String,
    pub course: String,
    pub institute: String,
    pub dates: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Expertise {
    pub id: String,
    pub rating: u8,
}

impl Expertise {
    pub const MAX_RATING: u8 = 5;

    pub fn rating(&self) -> u8 {
        self.rating.min(Self::MAX_RATING)
    }
}

impl Resume {
    pub fn parse(json: &str) -> ContentResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Experience is listed most recent first.
    pub fn current_employer(&self) -> Option<&Experience> {
        self.experience.first()
    }
}

const RESUME_JSON: &str = include_str!("../../content/resume.json");

pub fn resume() -> ContentResult<Resume> {
    Resume::parse(RESUME_JSON)
}

#[cfg(test)]
mod tests {
    use super::*;
    use claim::{assert_err, assert_ok, assert_some};

    #[test]
    fn embedded_resume_parses() {
        let resume = assert_ok!(resume());

        assert!(!resume.contact.name.is_empty());
        assert!(!resume.education.is_empty());
        assert!(resume
            .expertise
            .iter()
            .all(|e| (1..=Expertise::MAX_RATING).contains(&e.rating)));
    }

    #[test]
    fn current_employer_is_the_first_entry() {
        let resume = assert_ok!(resume());
        let current = assert_some!(resume.current_employer());

        assert_eq!(current.company, "BCG Digital Ventures");
        assert_eq!(current.description, None);
    }

    #[test]
    fn missing_fields_are_rejected() {
        assert_err!(Resume::parse(r#"{ "contact": { "name": "x" } }"#));
    }

    #[test]
    fn ratings_are_capped() {
        let expertise = Expertise {
            id: "Rust".into(),
            rating: 9,
        };
        assert_eq!(expertise.rating(), Expertise::MAX_RATING);
    }
}

use super::ContentResult;
use serde::Deserialize;
