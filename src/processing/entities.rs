//! Contact details and candidate name from raw resume text

use regex::Regex;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedEntities {
    /// Every email-looking token, in order of appearance. Not deduplicated
    /// and not validated beyond the loose `x@y` shape.
    pub emails: Vec<String>,
    /// Best-effort guess, present only when the text opens with two
    /// capitalized words.
    pub candidate_name: Option<String>,
}

impl ExtractedEntities {
    pub fn primary_email(&self) -> Option<&str> {
        self.emails.first().map(String::as_str)
    }
}

pub struct EntityExtractor {
    email_regex: Regex,
    name_regex: Regex,
}

impl Default for EntityExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl EntityExtractor {
    pub fn new() -> Self {
        let email_regex = Regex::new(r"\S+@\S+").expect("Invalid email regex");

        // `^` without multi-line mode: only the very start of the text counts.
        // One literal space keeps the match on the first line.
        let name_regex =
            Regex::new(r"^([A-Z][a-z]+) ([A-Z][a-z]+)").expect("Invalid name regex");

        Self {
            email_regex,
            name_regex,
        }
    }

    pub fn extract(&self, text: &str) -> ExtractedEntities {
        ExtractedEntities {
            emails: self.extract_emails(text),
            candidate_name: self.extract_candidate_name(text),
        }
    }

    pub fn extract_emails(&self, text: &str) -> Vec<String> {
        self.email_regex
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect()
    }

    pub fn extract_candidate_name(&self, text: &str) -> Option<String> {
        self.name_regex
            .captures(text)
            .map(|caps| format!("{} {}", &caps[1], &caps[2]))
    }
}
