//! Screening engine: runs the extraction → scoring → ranking pipeline

use crate::config::PipelineConfig;
use crate::error::{Result, ResumeRankerError};
use crate::processing::catalog::SkillCatalog;
use crate::processing::document::{Document, DocumentInput};
use crate::processing::entities::EntityExtractor;
use crate::processing::ranking::{rank, RankedResult, ScoredCandidate};
use crate::processing::similarity::SimilarityScorer;
use crate::processing::skill_matcher::{GapReport, SkillMatcher};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::Semaphore;

/// A document that could not be processed, kept so the caller can report it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentFailure {
    pub filename: String,
    pub reason: String,
}

/// Outcome of a recruiter-mode batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchReport {
    /// Role the documents were matched against, after fallback.
    pub role: String,
    pub required_skills: Vec<String>,
    /// Ordered by rank, ascending.
    pub results: Vec<RankedResult>,
    /// In submission order.
    pub failures: Vec<DocumentFailure>,
    pub processing_time_ms: u64,
}

/// Outcome of a seeker-mode run over a single document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GapAnalysis {
    pub role: String,
    pub filename: String,
    pub gap: GapReport,
}

/// Score one document. Runs on a worker thread and touches no shared
/// mutable state.
pub fn score_document(
    scorer: &SimilarityScorer,
    extractor: &EntityExtractor,
    required_skills: &[String],
    input: DocumentInput,
) -> Result<ScoredCandidate> {
    let document = Document::from_input(input)?;

    // The PDF text layer usually opens with layout whitespace; the name
    // heuristic looks at the first printed words.
    let entities = extractor.extract(document.text().trim_start());
    let present_skills = SkillMatcher::for_text(document.text()).present(required_skills);
    let similarity = scorer.score(document.text());

    debug!(
        "Scored {}: {:.2}% similarity, {}/{} skills",
        document.filename,
        similarity,
        present_skills.len(),
        required_skills.len()
    );

    Ok(ScoredCandidate {
        filename: document.filename.clone(),
        entities,
        present_skills,
        similarity,
        raw_text: document.into_text(),
    })
}

pub struct ScreeningEngine {
    catalog: Arc<SkillCatalog>,
    extractor: Arc<EntityExtractor>,
    limiter: Arc<Semaphore>,
}

impl ScreeningEngine {
    pub fn new(catalog: Arc<SkillCatalog>, config: &PipelineConfig) -> Self {
        Self {
            catalog,
            extractor: Arc::new(EntityExtractor::new()),
            limiter: Arc::new(Semaphore::new(config.max_concurrent_documents.max(1))),
        }
    }

    pub fn catalog(&self) -> &SkillCatalog {
        &self.catalog
    }

    /// Recruiter mode: score every document against `description` and rank them.
    ///
    /// Documents are processed concurrently. A document that fails extraction
    /// is listed in `failures` and the rest of the batch carries on. A
    /// description without usable vocabulary fails the whole batch before any
    /// document is touched.
    pub async fn rank_documents(
        &self,
        description: &str,
        documents: Vec<DocumentInput>,
        role: Option<&str>,
    ) -> Result<BatchReport> {
        if documents.is_empty() {
            return Err(ResumeRankerError::Validation(
                "at least one document is required".to_string(),
            ));
        }

        let start_time = Instant::now();
        let (role, required_skills) = self.catalog.skills_for(role);
        let role = role.to_string();
        let required_skills: Arc<Vec<String>> = Arc::new(required_skills.to_vec());

        let scorer = Arc::new(SimilarityScorer::fit(description)?);
        info!(
            "Ranking {} document(s) for role '{}' ({} description terms)",
            documents.len(),
            role,
            scorer.vocabulary_size()
        );

        let mut workers = Vec::with_capacity(documents.len());
        for document in documents {
            let permit = Arc::clone(&self.limiter)
                .acquire_owned()
                .await
                .map_err(|e| ResumeRankerError::Processing(format!("Worker pool closed: {}", e)))?;

            let filename = document.filename.clone();
            let scorer = Arc::clone(&scorer);
            let extractor = Arc::clone(&self.extractor);
            let required_skills = Arc::clone(&required_skills);

            let handle = tokio::task::spawn_blocking(move || {
                let _permit = permit;
                score_document(&scorer, &extractor, &required_skills, document)
            });
            workers.push((filename, handle));
        }

        // Join in submission order so ties in the ranking stay stable.
        let mut candidates = Vec::with_capacity(workers.len());
        let mut failures = Vec::new();
        for (filename, handle) in workers {
            match handle.await {
                Ok(Ok(candidate)) => candidates.push(candidate),
                Ok(Err(e)) if e.is_per_document() => {
                    warn!("Skipping {}: {}", filename, e);
                    failures.push(DocumentFailure {
                        filename,
                        reason: e.to_string(),
                    });
                }
                Ok(Err(e)) => return Err(e),
                Err(e) => {
                    warn!("Worker for {} did not complete: {}", filename, e);
                    failures.push(DocumentFailure {
                        filename,
                        reason: format!("Extraction error: worker aborted: {}", e),
                    });
                }
            }
        }

        let results = rank(candidates);
        let processing_time_ms = start_time.elapsed().as_millis() as u64;
        info!(
            "Ranked {} document(s), {} failed, in {}ms",
            results.len(),
            failures.len(),
            processing_time_ms
        );

        Ok(BatchReport {
            role,
            required_skills: required_skills.as_ref().clone(),
            results,
            failures,
            processing_time_ms,
        })
    }

    /// Seeker mode: split the role's required skills into present and missing.
    pub async fn analyze_gap(&self, document: DocumentInput, role: Option<&str>) -> Result<GapAnalysis> {
        let (role, required_skills) = self.catalog.skills_for(role);
        let role = role.to_string();
        let required_skills = required_skills.to_vec();
        let filename = document.filename.clone();

        let gap = tokio::task::spawn_blocking(move || -> Result<GapReport> {
            let document = Document::from_input(document)?;
            Ok(SkillMatcher::for_text(document.text()).partition(&required_skills))
        })
        .await
        .map_err(|e| ResumeRankerError::Extraction(format!("worker aborted: {}", e)))??;

        info!(
            "Gap analysis for {}: {} present, {} missing",
            filename,
            gap.present_skills.len(),
            gap.missing_skills.len()
        );

        Ok(GapAnalysis {
            role,
            filename,
            gap,
        })
    }

    /// Gap analysis over text the caller already has.
    pub fn analyze_text_gap(&self, text: &str, role: Option<&str>) -> GapReport {
        let (_, required_skills) = self.catalog.skills_for(role);
        SkillMatcher::for_text(text).partition(required_skills)
    }
}
