//! Report structures handed to the formatters

use crate::processing::analyzer::{BatchReport, GapAnalysis};
use crate::processing::ranking::RankedResult;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const NOT_AVAILABLE: &str = "N/A";

pub const EXPORT_HEADER: [&str; 5] = ["Rank", "Name", "Email", "Skills Present", "Similarity"];

/// Recruiter-mode report: the ranked batch plus generation info.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankingReport {
    pub metadata: ReportMetadata,
    pub batch: BatchReport,
}

/// Seeker-mode report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GapAnalysisReport {
    pub metadata: ReportMetadata,
    pub analysis: GapAnalysis,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub generated_at: DateTime<Utc>,
    pub ranker_version: String,
}

impl ReportMetadata {
    pub fn now() -> Self {
        Self {
            generated_at: Utc::now(),
            ranker_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

impl RankingReport {
    pub fn new(batch: BatchReport) -> Self {
        Self {
            metadata: ReportMetadata::now(),
            batch,
        }
    }

    pub fn export_rows(&self) -> Vec<ExportRow> {
        self.batch.results.iter().map(ExportRow::from).collect()
    }
}

impl GapAnalysisReport {
    pub fn new(analysis: GapAnalysis) -> Self {
        Self {
            metadata: ReportMetadata::now(),
            analysis,
        }
    }
}

/// One line of the ranked-results export, already rendered to text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportRow {
    pub rank: String,
    pub name: String,
    pub email: String,
    pub skills: String,
    pub similarity: String,
}

impl From<&RankedResult> for ExportRow {
    fn from(result: &RankedResult) -> Self {
        let skills = if result.present_skills.is_empty() {
            NOT_AVAILABLE.to_string()
        } else {
            result.present_skills.join(", ")
        };

        Self {
            rank: result.rank.to_string(),
            name: result
                .candidate_name
                .clone()
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            email: result
                .primary_email()
                .unwrap_or(NOT_AVAILABLE)
                .to_string(),
            skills,
            similarity: format_similarity(result.similarity),
        }
    }
}

impl ExportRow {
    pub fn fields(&self) -> [&str; 5] {
        [
            self.rank.as_str(),
            self.name.as_str(),
            self.email.as_str(),
            self.skills.as_str(),
            self.similarity.as_str(),
        ]
    }
}

/// Rounded percentage with at least one decimal place: `90.0`, `73.46`.
pub fn format_similarity(similarity: f64) -> String {
    // Debug always keeps the decimal point; values here never need exponents.
    format!("{:?}", similarity)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ranked(rank: usize, name: Option<&str>, emails: &[&str], skills: &[&str], similarity: f64) -> RankedResult {
        RankedResult {
            rank,
            filename: format!("cv{}.pdf", rank),
            candidate_name: name.map(str::to_string),
            emails: emails.iter().map(|s| s.to_string()).collect(),
            present_skills: skills.iter().map(|s| s.to_string()).collect(),
            similarity,
        }
    }

    #[test]
    fn test_export_row_fills_not_available() {
        let row = ExportRow::from(&ranked(2, None, &[], &[], 0.0));

        assert_eq!(row.fields(), ["2", "N/A", "N/A", "N/A", "0.0"]);
    }

    #[test]
    fn test_export_row_uses_first_email_and_joins_skills() {
        let row = ExportRow::from(&ranked(
            1,
            Some("Jane Doe"),
            &["jane@doe.dev", "jd@work.io"],
            &["HTML", "React"],
            73.46,
        ));

        assert_eq!(row.name, "Jane Doe");
        assert_eq!(row.email, "jane@doe.dev");
        assert_eq!(row.skills, "HTML, React");
        assert_eq!(row.similarity, "73.46");
    }

    #[test]
    fn test_similarity_formatting() {
        assert_eq!(format_similarity(90.0), "90.0");
        assert_eq!(format_similarity(100.0), "100.0");
        assert_eq!(format_similarity(0.01), "0.01");
        assert_eq!(format_similarity(12.5), "12.5");
    }
}
