//! Error handling for the resume ranker

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResumeRankerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The document is not a readable instance of the expected format,
    /// or it has no pages to extract.
    #[error("Extraction error: {0}")]
    Extraction(String),

    /// The description yields no usable vocabulary. Fatal for a whole batch.
    #[error("Scoring error: {0}")]
    Scoring(String),

    /// A required input is missing or malformed.
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Processing error: {0}")]
    Processing(String),

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),
}

impl ResumeRankerError {
    /// Whether this error only concerns the single document it came from.
    pub fn is_per_document(&self) -> bool {
        matches!(
            self,
            ResumeRankerError::Extraction(_) | ResumeRankerError::UnsupportedFormat(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, ResumeRankerError>;

/// Convert anyhow errors to our custom error type
impl From<anyhow::Error> for ResumeRankerError {
    fn from(err: anyhow::Error) -> Self {
        ResumeRankerError::Processing(err.to_string())
    }
}
