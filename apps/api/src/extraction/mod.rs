//! Plain-text extraction for uploaded resume documents.
//!
//! Sync and CPU-bound. Handlers call `extract_text` inside `spawn_blocking`.

mod docx;

#[cfg(test)]
pub(crate) use docx::build_docx;

use thiserror::Error;

const PDF_MIME: &str = "application/pdf";
const DOCX_MIME: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
const TEXT_MIME: &str = "text/plain";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Docx,
    PlainText,
    /// Unrecognised upload. Decoded as UTF-8 on a best-effort basis.
    Unknown,
}

impl DocumentKind {
    /// Picks a kind from the declared content type, falling back to the file extension.
    pub fn detect(file_name: Option<&str>, content_type: Option<&str>) -> Self {
        let mime = content_type.unwrap_or_default();
        let name = file_name.unwrap_or_default().to_lowercase();

        if mime == PDF_MIME || name.ends_with(".pdf") {
            DocumentKind::Pdf
        } else if mime == DOCX_MIME || name.ends_with(".docx") {
            DocumentKind::Docx
        } else if mime == TEXT_MIME || name.ends_with(".txt") {
            DocumentKind::PlainText
        } else {
            DocumentKind::Unknown
        }
    }
}

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("PDF extraction failed: {0}")]
    Pdf(String),

    #[error("DOCX extraction failed: {0}")]
    Docx(String),
}

/// Best-effort plain text of an uploaded document.
pub fn extract_text(bytes: &[u8], kind: DocumentKind) -> Result<String, ExtractError> {
    match kind {
        DocumentKind::Pdf => {
            pdf_extract::extract_text_from_mem(bytes).map_err(|e| ExtractError::Pdf(e.to_string()))
        }
        DocumentKind::Docx => docx::extract_docx_text(bytes),
        DocumentKind::PlainText | DocumentKind::Unknown => {
            Ok(String::from_utf8_lossy(bytes).into_owned())
        }
    }
}
