//! File type detection

const PDF_MAGIC: &[u8] = b"%PDF-";

/// Readers tolerate junk before the header as long as it shows up early.
const PDF_HEADER_WINDOW: usize = 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    Pdf,
    Text,
    Markdown,
    Unknown,
}

impl FileType {
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "pdf" => FileType::Pdf,
            "txt" => FileType::Text,
            "md" | "markdown" => FileType::Markdown,
            _ => FileType::Unknown,
        }
    }

    /// Sniff an uploaded payload. Only PDF has a reliable signature.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        if Self::looks_like_pdf(bytes) {
            FileType::Pdf
        } else {
            FileType::Unknown
        }
    }

    pub fn looks_like_pdf(bytes: &[u8]) -> bool {
        let window = &bytes[..bytes.len().min(PDF_HEADER_WINDOW)];
        window
            .windows(PDF_MAGIC.len())
            .any(|candidate| candidate == PDF_MAGIC)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_extension() {
        assert_eq!(FileType::from_extension("PDF"), FileType::Pdf);
        assert_eq!(FileType::from_extension("md"), FileType::Markdown);
        assert_eq!(FileType::from_extension("docx"), FileType::Unknown);
    }

    #[test]
    fn test_pdf_sniffing() {
        assert_eq!(FileType::from_bytes(b"%PDF-1.7\n..."), FileType::Pdf);
        assert_eq!(FileType::from_bytes(b"\r\n%PDF-1.4"), FileType::Pdf);
        assert_eq!(FileType::from_bytes(b"plain resume text"), FileType::Unknown);
        assert_eq!(FileType::from_bytes(b""), FileType::Unknown);
    }
}
