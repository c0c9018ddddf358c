//! Input manager: reads resumes and job descriptions from disk

use crate::error::{Result, ResumeRankerError};
use crate::input::file_detector::FileType;
use crate::input::text_extractor::extract_text;
use crate::processing::document::DocumentInput;
use log::info;
use std::path::Path;
use tokio::fs;

#[derive(Debug, Default)]
pub struct InputManager;

impl InputManager {
    pub fn new() -> Self {
        Self
    }

    /// Read a resume as raw bytes. Format checks happen later, per document,
    /// so one unreadable resume does not stop the batch.
    pub async fn read_document(&self, path: &Path) -> Result<DocumentInput> {
        self.ensure_exists(path)?;

        let bytes = fs::read(path).await?;
        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());

        info!("Read {} ({} bytes)", filename, bytes.len());
        Ok(DocumentInput::new(filename, bytes))
    }

    /// Read a job description file (TXT, MD or PDF) as plain text.
    pub async fn read_description(&self, path: &Path) -> Result<String> {
        self.ensure_exists(path)?;

        let file_type = self.detect_file_type(path)?;
        if file_type == FileType::Unknown {
            return Err(ResumeRankerError::UnsupportedFormat(format!(
                "Unsupported job description file: {}",
                path.display()
            )));
        }

        let bytes = fs::read(path).await?;
        info!("Extracting job description from {:?} file: {}", file_type, path.display());

        tokio::task::spawn_blocking(move || extract_text(file_type, &bytes))
            .await
            .map_err(|e| ResumeRankerError::Extraction(format!("worker aborted: {}", e)))?
    }

    fn ensure_exists(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            return Err(ResumeRankerError::Validation(format!(
                "File does not exist: {}",
                path.display()
            )));
        }
        Ok(())
    }

    fn detect_file_type(&self, path: &Path) -> Result<FileType> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| {
                ResumeRankerError::Validation(format!("File has no extension: {}", path.display()))
            })?;

        Ok(FileType::from_extension(extension))
    }
}
