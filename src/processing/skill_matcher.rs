//! Required-skill matching and gap analysis

use crate::processing::text_processor::TextProcessor;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Present vs. missing required skills for one document.
///
/// Together the two lists hold every required skill exactly once, each in
/// catalog order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GapReport {
    pub present_skills: Vec<String>,
    pub missing_skills: Vec<String>,
}

impl GapReport {
    /// Share of required skills found, 0.0 to 1.0.
    pub fn coverage(&self) -> f32 {
        let total = self.present_skills.len() + self.missing_skills.len();
        if total == 0 {
            0.0
        } else {
            self.present_skills.len() as f32 / total as f32
        }
    }
}

/// Whole-token, case-insensitive skill lookup against one text.
///
/// A skill is present only when it equals an entire whitespace-separated
/// token, so `"Java"` is not found inside `"JavaScript"` and multi-word
/// skills never match a single token.
pub struct SkillMatcher {
    words: HashSet<String>,
}

impl SkillMatcher {
    pub fn for_text(text: &str) -> Self {
        Self {
            words: TextProcessor::word_set(text),
        }
    }

    pub fn is_present(&self, skill: &str) -> bool {
        self.words.contains(&skill.to_lowercase())
    }

    pub fn present(&self, required: &[String]) -> Vec<String> {
        required
            .iter()
            .filter(|skill| self.is_present(skill))
            .cloned()
            .collect()
    }

    pub fn missing(&self, required: &[String]) -> Vec<String> {
        required
            .iter()
            .filter(|skill| !self.is_present(skill))
            .cloned()
            .collect()
    }

    pub fn partition(&self, required: &[String]) -> GapReport {
        let (present_skills, missing_skills): (Vec<String>, Vec<String>) = required
            .iter()
            .cloned()
            .partition(|skill| self.is_present(skill));

        GapReport {
            present_skills,
            missing_skills,
        }
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }
}

pub fn present_skills(required: &[String], text: &str) -> Vec<String> {
    SkillMatcher::for_text(text).present(required)
}

pub fn missing_skills(required: &[String], text: &str) -> Vec<String> {
    SkillMatcher::for_text(text).missing(required)
}

/// Seeker-mode analysis: which required skills the text covers and which it lacks.
pub fn analyze_gap(required: &[String], text: &str) -> GapReport {
    SkillMatcher::for_text(text).partition(required)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skills(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_case_insensitive_match() {
        let required = skills(&["Python", "SQL"]);

        assert_eq!(present_skills(&required, "I write PYTHON daily"), vec!["Python"]);
    }

    #[test]
    fn test_whole_token_only() {
        let required = skills(&["Java"]);

        assert!(present_skills(&required, "JavaScripting all day").is_empty());
        assert!(present_skills(&required, "JavaScript and Java.").is_empty());
        assert_eq!(present_skills(&required, "JavaScript and Java"), vec!["Java"]);
    }

    #[test]
    fn test_multi_word_skill_never_matches() {
        let required = skills(&["Machine Learning"]);

        assert_eq!(
            missing_skills(&required, "Machine Learning engineer"),
            vec!["Machine Learning"]
        );
    }

    #[test]
    fn test_output_keeps_catalog_order() {
        let required = skills(&["HTML", "CSS", "React", "PHP"]);
        let text = "php react html";

        assert_eq!(present_skills(&required, text), vec!["HTML", "React", "PHP"]);
        assert_eq!(missing_skills(&required, text), vec!["CSS"]);
    }

    #[test]
    fn test_gap_partitions_required_skills() {
        let required = skills(&["HTML", "CSS", "JavaScript", "React", "Node.js", "MongoDB"]);
        let texts = [
            "",
            "html css",
            "Node.js React react JavaScript MongoDB HTML CSS",
            "nothing relevant here",
        ];

        for text in texts {
            let report = analyze_gap(&required, text);
            let present: HashSet<_> = report.present_skills.iter().collect();
            let missing: HashSet<_> = report.missing_skills.iter().collect();
            let all: HashSet<_> = required.iter().collect();

            assert!(present.is_disjoint(&missing));
            assert_eq!(present.union(&missing).cloned().collect::<HashSet<_>>(), all);
            assert_eq!(report.present_skills, present_skills(&required, text));
            assert_eq!(report.missing_skills, missing_skills(&required, text));
        }
    }

    #[test]
    fn test_coverage() {
        let required = skills(&["Git", "Java", "Spring", "JUnit"]);
        let report = analyze_gap(&required, "git java");

        assert!((report.coverage() - 0.5).abs() < f32::EPSILON);
        assert_eq!(GapReport::default().coverage(), 0.0);
    }
}
