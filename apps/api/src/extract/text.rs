use std::path::Path;

use tracing::warn;

use super::{read_document, TextExtractor};
use crate::error::ParseError;

const UTF8_BOM: &str = "\u{feff}";

/// Extractor for UTF-8 plain-text résumés.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    fn name(&self) -> &'static str {
        "txt"
    }

    fn extract_text(&self, path: &Path) -> Result<String, ParseError> {
        let bytes = read_document(path)?;
        let text = String::from_utf8(bytes).map_err(|e| {
            warn!("Text extraction failed for {}: {e}", path.display());
            ParseError::unreadable(path, format!("invalid UTF-8: {e}"))
        })?;
        Ok(text.strip_prefix(UTF8_BOM).unwrap_or(&text).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_reads_utf8_text() {
        let mut file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
        write!(file, "Jean Dupont\nDéveloppeur").unwrap();
        let text = PlainTextExtractor.extract_text(file.path()).unwrap();
        assert_eq!(text, "Jean Dupont\nDéveloppeur");
    }

    #[test]
    fn test_strips_bom() {
        let mut file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
        file.write_all("\u{feff}Jean".as_bytes()).unwrap();
        assert_eq!(PlainTextExtractor.extract_text(file.path()).unwrap(), "Jean");
    }

    #[test]
    fn test_invalid_utf8_is_unreadable() {
        let mut file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
        file.write_all(&[0x4a, 0xff, 0xfe, 0x00, 0xc3]).unwrap();
        assert!(matches!(
            PlainTextExtractor.extract_text(file.path()),
            Err(ParseError::UnreadableDocument { .. })
        ));
    }
}
