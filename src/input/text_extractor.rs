//! Text extraction from various file formats

use crate::error::{Result, ResumeRankerError};
use crate::input::file_detector::FileType;
use log::debug;
use pulldown_cmark::{Event, Parser, Tag};
use std::panic;

pub trait TextExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String>;
}

/// Pulls the text layer out of a PDF, one page at a time.
pub struct PdfExtractor;

impl PdfExtractor {
    /// Text of every page in page order. Pages without a text layer come
    /// back as empty strings.
    pub fn extract_pages(&self, bytes: &[u8]) -> Result<Vec<String>> {
        if !FileType::looks_like_pdf(bytes) {
            return Err(ResumeRankerError::Extraction(
                "payload is not a PDF document".to_string(),
            ));
        }

        // The parser panics on some malformed files; that must stay a
        // failure of this one document.
        let parsed = panic::catch_unwind(|| pdf_extract::extract_text_from_mem_by_pages(bytes))
            .map_err(|_| {
                ResumeRankerError::Extraction("PDF parser aborted on malformed input".to_string())
            })?;

        let pages = parsed.map_err(|e| {
            ResumeRankerError::Extraction(format!("Failed to extract text from PDF: {}", e))
        })?;

        debug!("Extracted {} page(s) from PDF", pages.len());
        Ok(pages)
    }
}

impl TextExtractor for PdfExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String> {
        let pages = self.extract_pages(bytes)?;
        if pages.is_empty() {
            return Err(ResumeRankerError::Extraction(
                "PDF contains no pages".to_string(),
            ));
        }
        Ok(pages.concat())
    }
}

pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String> {
        String::from_utf8(bytes.to_vec()).map_err(|e| {
            ResumeRankerError::Extraction(format!("Text file is not valid UTF-8: {}", e))
        })
    }
}

pub struct MarkdownExtractor;

impl TextExtractor for MarkdownExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String> {
        let markdown = PlainTextExtractor.extract(bytes)?;
        Ok(Self::markdown_to_text(&markdown))
    }
}

impl MarkdownExtractor {
    fn markdown_to_text(markdown: &str) -> String {
        let mut text = String::new();

        for event in Parser::new(markdown) {
            match event {
                Event::Text(t) | Event::Code(t) => text.push_str(&t),
                Event::SoftBreak | Event::HardBreak => text.push('\n'),
                Event::End(Tag::Paragraph)
                | Event::End(Tag::Heading(..))
                | Event::End(Tag::Item)
                | Event::End(Tag::CodeBlock(_)) => text.push('\n'),
                _ => {}
            }
        }

        text.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Route a payload to the extractor for its type.
pub fn extract_text(file_type: FileType, bytes: &[u8]) -> Result<String> {
    match file_type {
        FileType::Pdf => PdfExtractor.extract(bytes),
        FileType::Text => PlainTextExtractor.extract(bytes),
        FileType::Markdown => MarkdownExtractor.extract(bytes),
        FileType::Unknown => Err(ResumeRankerError::UnsupportedFormat(
            "cannot extract text from an unknown file type".to_string(),
        )),
    }
}
