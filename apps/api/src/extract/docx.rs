use std::path::Path;

use docx_rs::{DocumentChild, Paragraph, ParagraphChild, RunChild};
use tracing::{debug, warn};

use super::{clean_extracted_text, read_document, TextExtractor};
use crate::error::ParseError;

/// Extractor for Word (`.docx`) résumés, backed by `docx-rs`.
///
/// Runs are concatenated per paragraph and paragraphs become lines.
#[derive(Debug, Default, Clone, Copy)]
pub struct DocxExtractor;

impl TextExtractor for DocxExtractor {
    fn name(&self) -> &'static str {
        "docx"
    }

    fn extract_text(&self, path: &Path) -> Result<String, ParseError> {
        let bytes = read_document(path)?;

        let docx = docx_rs::read_docx(&bytes).map_err(|e| {
            warn!("DOCX extraction failed for {}: {e}", path.display());
            ParseError::unreadable(path, format!("failed to read DOCX container: {e}"))
        })?;

        let paragraphs: Vec<String> = docx
            .document
            .children
            .iter()
            .filter_map(|child| match child {
                DocumentChild::Paragraph(para) => Some(paragraph_text(para)),
                _ => None,
            })
            .filter(|text| !text.trim().is_empty())
            .collect();

        let cleaned = clean_extracted_text(&paragraphs.join("\n"));
        debug!("DOCX extraction successful: {} characters", cleaned.len());
        Ok(cleaned)
    }
}

fn paragraph_text(para: &Paragraph) -> String {
    para.children
        .iter()
        .filter_map(|pc| match pc {
            ParagraphChild::Run(run) => Some(
                run.children
                    .iter()
                    .filter_map(|rc| match rc {
                        RunChild::Text(t) => Some(t.text.as_str()),
                        RunChild::Tab(_) => Some(" "),
                        _ => None,
                    })
                    .collect::<String>(),
            ),
            _ => None,
        })
        .collect()
}
