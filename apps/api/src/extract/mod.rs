//! Format-specific text extraction.
//!
//! Each supported format gets a small [`TextExtractor`] adapter; the
//! [`ExtractorRegistry`] maps file extensions to adapters so new formats can be
//! added without touching the parser.

mod docx;
mod pdf;
mod registry;
mod text;

use std::io::ErrorKind;
use std::path::Path;

pub use docx::DocxExtractor;
pub use pdf::PdfExtractor;
pub use registry::ExtractorRegistry;
pub use text::PlainTextExtractor;

use crate::error::ParseError;

/// Pulls the full text out of one document on disk.
pub trait TextExtractor: Send + Sync {
    /// Short name used in logs ("pdf", "docx", ...).
    fn name(&self) -> &'static str;

    fn extract_text(&self, path: &Path) -> Result<String, ParseError>;
}

/// Reads a document's bytes, mapping a missing path to `FileNotFound` and any
/// other I/O failure to `UnreadableDocument`.
pub(crate) fn read_document(path: &Path) -> Result<Vec<u8>, ParseError> {
    std::fs::read(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => ParseError::FileNotFound(path.to_path_buf()),
        _ => ParseError::unreadable(path, e),
    })
}

/// Trims every line and drops the empty ones.
pub(crate) fn clean_extracted_text(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
