//! Lexical relevance scoring with TF-IDF vectors and cosine similarity

use crate::error::{Result, ResumeRankerError};
use crate::processing::text_processor::TextProcessor;
use log::debug;
use ndarray::Array1;
use std::collections::{BTreeSet, HashMap};

/// Vocabulary and inverse document frequencies learned from a corpus.
///
/// Terms are indexed in sorted order. IDF is smoothed as if one extra
/// document contained every term: `ln((1 + n) / (1 + df)) + 1`.
#[derive(Debug, Clone)]
pub struct TfidfModel {
    processor: TextProcessor,
    vocabulary: HashMap<String, usize>,
    idf: Array1<f64>,
}

impl TfidfModel {
    pub fn fit(corpus: &[&str]) -> Result<Self> {
        let processor = TextProcessor::new();
        let documents: Vec<Vec<String>> = corpus.iter().map(|text| processor.terms(text)).collect();

        let terms: BTreeSet<&str> = documents
            .iter()
            .flat_map(|terms| terms.iter().map(String::as_str))
            .collect();

        if terms.is_empty() {
            return Err(ResumeRankerError::Scoring(
                "empty vocabulary; the description contains no scoreable terms".to_string(),
            ));
        }

        let vocabulary: HashMap<String, usize> = terms
            .into_iter()
            .enumerate()
            .map(|(index, term)| (term.to_string(), index))
            .collect();

        let mut document_frequency = Array1::<f64>::zeros(vocabulary.len());
        for terms in &documents {
            let unique: BTreeSet<usize> = terms.iter().filter_map(|t| vocabulary.get(t).copied()).collect();
            for index in unique {
                document_frequency[index] += 1.0;
            }
        }

        let n = documents.len() as f64;
        let idf = document_frequency.mapv(|df| ((1.0 + n) / (1.0 + df)).ln() + 1.0);

        debug!("Fitted TF-IDF vocabulary of {} terms", vocabulary.len());

        Ok(Self {
            processor,
            vocabulary,
            idf,
        })
    }

    /// L2-normalized TF-IDF vector. Out-of-vocabulary terms are ignored; a
    /// text with no known terms maps to the zero vector.
    pub fn transform(&self, text: &str) -> Array1<f64> {
        let mut vector = Array1::<f64>::zeros(self.vocabulary.len());
        for term in self.processor.terms(text) {
            if let Some(&index) = self.vocabulary.get(&term) {
                vector[index] += 1.0;
            }
        }

        vector *= &self.idf;

        let norm = vector.dot(&vector).sqrt();
        if norm > 0.0 {
            vector /= norm;
        }
        vector
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    pub fn contains_term(&self, term: &str) -> bool {
        self.vocabulary.contains_key(term)
    }
}

/// Cosine of the angle between two vectors; 0.0 if either is all zeros.
pub fn cosine_similarity(a: &Array1<f64>, b: &Array1<f64>) -> f64 {
    let norm_a = a.dot(a).sqrt();
    let norm_b = b.dot(b).sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    a.dot(b) / (norm_a * norm_b)
}

/// Scores documents against one description.
///
/// The vocabulary comes from the description alone, so words that only
/// appear in a document contribute nothing. Fitting once and sharing the
/// scorer across documents gives the same result as fitting per document.
#[derive(Debug, Clone)]
pub struct SimilarityScorer {
    model: TfidfModel,
    description_vector: Array1<f64>,
}

impl SimilarityScorer {
    pub fn fit(description: &str) -> Result<Self> {
        let model = TfidfModel::fit(&[description])?;
        let description_vector = model.transform(description);

        Ok(Self {
            model,
            description_vector,
        })
    }

    /// Relevance of `document_text` as a percentage in `[0, 100]`.
    pub fn score(&self, document_text: &str) -> f64 {
        let document_vector = self.model.transform(document_text);
        let similarity = cosine_similarity(&self.description_vector, &document_vector);

        similarity.clamp(0.0, 1.0) * 100.0
    }

    pub fn vocabulary_size(&self) -> usize {
        self.model.vocabulary_size()
    }
}

/// One-shot scoring of a single pair.
pub fn score(description: &str, document_text: &str) -> Result<f64> {
    Ok(SimilarityScorer::fit(description)?.score(document_text))
}
