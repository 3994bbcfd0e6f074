use std::path::Path;

use tracing::{debug, warn};

use super::{clean_extracted_text, read_document, TextExtractor};
use crate::error::ParseError;

/// Extractor for PDF résumés, backed by `pdf-extract`.
#[derive(Debug, Default, Clone, Copy)]
pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    fn name(&self) -> &'static str {
        "pdf"
    }

    fn extract_text(&self, path: &Path) -> Result<String, ParseError> {
        let bytes = read_document(path)?;

        let text = pdf_extract::extract_text_from_mem(&bytes).map_err(|e| {
            warn!("PDF extraction failed for {}: {e}", path.display());
            ParseError::unreadable(path, format!("failed to extract PDF text: {e}"))
        })?;

        let cleaned = clean_extracted_text(&text);
        debug!("PDF extraction successful: {} characters", cleaned.len());
        Ok(cleaned)
    }
}
