//! Per-request document model

use crate::error::Result;
use crate::input::file_detector::FileType;
use crate::input::text_extractor::{PdfExtractor, TextExtractor};

/// A raw upload as handed over by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentInput {
    pub filename: String,
    pub bytes: Vec<u8>,
}

impl DocumentInput {
    pub fn new(filename: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            filename: filename.into(),
            bytes,
        }
    }
}

/// A candidate document whose text has been extracted.
///
/// The text is derived once, when the document is built, and never changes
/// afterwards. Documents live for a single request.
#[derive(Debug, Clone)]
pub struct Document {
    pub filename: String,
    pub file_type: FileType,
    pub byte_len: usize,
    text: String,
}

impl Document {
    /// Extract the text layer of an uploaded PDF.
    pub fn from_input(input: DocumentInput) -> Result<Self> {
        let text = PdfExtractor.extract(&input.bytes)?;

        Ok(Self {
            filename: input.filename,
            file_type: FileType::Pdf,
            byte_len: input.bytes.len(),
            text,
        })
    }

    /// Wrap text that was obtained some other way.
    pub fn from_text(filename: impl Into<String>, file_type: FileType, text: String) -> Self {
        Self {
            filename: filename.into(),
            file_type,
            byte_len: text.len(),
            text,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn into_text(self) -> String {
        self.text
    }

    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }
}
