//! Role → required skills lookup

use crate::error::{Result, ResumeRankerError};
use log::warn;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const DEFAULT_ROLE: &str = "Web Developer";

/// Read-only mapping from a role name to its ordered list of required skills.
///
/// Skill names are stored in their canonical casing and matched
/// case-insensitively. The catalog is built once from configuration and
/// shared behind an `Arc`; nothing mutates it afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillCatalog {
    /// Role used when the caller gives none, or one the catalog does not know.
    pub default_role: String,
    pub roles: BTreeMap<String, Vec<String>>,
}

impl Default for SkillCatalog {
    fn default() -> Self {
        let mut roles = BTreeMap::new();
        roles.insert(
            "Web Developer".to_string(),
            to_owned(&[
                "HTML", "CSS", "JavaScript", "React", "Node.js", "PHP", "MySQL", "CSS3", "jQuery",
                "Bootstrap", "Vue.js", "Angular", "SASS", "MongoDB",
            ]),
        );
        roles.insert(
            "Data Scientist".to_string(),
            to_owned(&[
                "Python", "R", "Machine Learning", "Deep Learning", "TensorFlow", "Keras",
                "Pandas", "NumPy", "Scikit-learn", "Matplotlib", "SQL",
            ]),
        );
        roles.insert(
            "Software Engineer".to_string(),
            to_owned(&[
                "Java", "C++", "Python", "Algorithms", "Data Structures", "Software Development",
                "Git", "JUnit", "Spring",
            ]),
        );

        Self {
            default_role: DEFAULT_ROLE.to_string(),
            roles,
        }
    }
}

fn to_owned(skills: &[&str]) -> Vec<String> {
    skills.iter().map(|s| s.to_string()).collect()
}

impl SkillCatalog {
    pub fn new(default_role: impl Into<String>, roles: BTreeMap<String, Vec<String>>) -> Result<Self> {
        let catalog = Self {
            default_role: default_role.into(),
            roles,
        };
        catalog.validate()?;
        Ok(catalog)
    }

    /// The default role has to be one of the catalog's roles.
    pub fn validate(&self) -> Result<()> {
        if !self.roles.contains_key(&self.default_role) {
            return Err(ResumeRankerError::Configuration(format!(
                "Default role '{}' is not defined in the skill catalog",
                self.default_role
            )));
        }
        Ok(())
    }

    /// Required skills for exactly this role, if the catalog knows it.
    pub fn required_skills(&self, role: &str) -> Option<&[String]> {
        self.roles.get(role).map(|skills| skills.as_slice())
    }

    /// Pick the role a request should be evaluated against.
    ///
    /// Absent or unknown roles fall back to the default role.
    pub fn resolve_role<'a>(&'a self, role: Option<&'a str>) -> &'a str {
        match role {
            Some(name) if self.roles.contains_key(name) => name,
            Some(name) => {
                warn!(
                    "Unknown role '{}', falling back to '{}'",
                    name, self.default_role
                );
                &self.default_role
            }
            None => &self.default_role,
        }
    }

    /// Resolved role name together with its skill list.
    pub fn skills_for<'a>(&'a self, role: Option<&'a str>) -> (&'a str, &'a [String]) {
        let resolved = self.resolve_role(role);
        let skills = self.required_skills(resolved).unwrap_or(&[]);
        (resolved, skills)
    }

    pub fn role_names(&self) -> impl Iterator<Item = &str> {
        self.roles.keys().map(|k| k.as_str())
    }

    pub fn role_count(&self) -> usize {
        self.roles.len()
    }
}
