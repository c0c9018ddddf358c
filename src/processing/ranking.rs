//! Ordering scored candidates into a ranked list

use crate::processing::entities::ExtractedEntities;
use serde::{Deserialize, Serialize};

/// One successfully processed document in a recruiter batch.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredCandidate {
    pub filename: String,
    pub entities: ExtractedEntities,
    pub raw_text: String,
    /// Subset of the role's required skills, in catalog order.
    pub present_skills: Vec<String>,
    /// Full-precision relevance in `[0, 100]`.
    pub similarity: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedResult {
    /// 1-based position after sorting.
    pub rank: usize,
    pub filename: String,
    pub candidate_name: Option<String>,
    pub emails: Vec<String>,
    pub present_skills: Vec<String>,
    /// Similarity rounded to two decimals, for presentation only.
    pub similarity: f64,
}

impl RankedResult {
    pub fn primary_email(&self) -> Option<&str> {
        self.emails.first().map(String::as_str)
    }
}

/// Two decimal places, exact halves to the even neighbour: `50.125` becomes
/// `50.12`, `0.375` becomes `0.38`.
pub fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

/// Sort by similarity, highest first, and number the result from 1.
///
/// The sort runs on full-precision scores and is stable: candidates with
/// equal scores keep their submission order.
pub fn rank(mut candidates: Vec<ScoredCandidate>) -> Vec<RankedResult> {
    candidates.sort_by(|a, b| b.similarity.total_cmp(&a.similarity));

    candidates
        .into_iter()
        .enumerate()
        .map(|(position, candidate)| RankedResult {
            rank: position + 1,
            filename: candidate.filename,
            candidate_name: candidate.entities.candidate_name,
            emails: candidate.entities.emails,
            present_skills: candidate.present_skills,
            similarity: round_to_hundredths(candidate.similarity),
        })
        .collect()
}
