//! Extension-keyed registry of text extractors.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use super::{DocxExtractor, PdfExtractor, PlainTextExtractor, TextExtractor};
use crate::error::ParseError;

/// Maps lower-cased file extensions (without the dot) to extractors.
#[derive(Clone)]
pub struct ExtractorRegistry {
    extractors: HashMap<String, Arc<dyn TextExtractor>>,
}

impl ExtractorRegistry {
    /// Create a registry with no formats registered.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            extractors: HashMap::new(),
        }
    }

    /// Register (or replace) the extractor for an extension.
    pub fn register<E: TextExtractor + 'static>(&mut self, extension: &str, extractor: E) {
        let key = extension.trim_start_matches('.').to_lowercase();
        self.extractors.insert(key, Arc::new(extractor));
    }

    /// Resolve the extractor for a path purely from its extension. No I/O.
    pub fn for_path(&self, path: &Path) -> Result<Arc<dyn TextExtractor>, ParseError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();

        self.extractors
            .get(&extension)
            .cloned()
            .ok_or(ParseError::UnsupportedFormat(extension))
    }

    /// Registered extensions, sorted.
    pub fn extensions(&self) -> Vec<&str> {
        let mut exts: Vec<&str> = self.extractors.keys().map(String::as_str).collect();
        exts.sort_unstable();
        exts
    }
}

impl Default for ExtractorRegistry {
    /// PDF, DOCX and plain text.
    fn default() -> Self {
        let mut registry = Self::empty();
        registry.register("pdf", PdfExtractor);
        registry.register("docx", DocxExtractor);
        registry.register("txt", PlainTextExtractor);
        registry
    }
}

impl std::fmt::Debug for ExtractorRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExtractorRegistry")
            .field("extensions", &self.extensions())
            .finish()
    }
}
