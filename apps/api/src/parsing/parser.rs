//! Parser orchestrator — resolves the extractor, pulls the text, runs every field
//! extractor in a fixed order and assembles the `ParsedResume`.

use std::path::Path;

use chrono::Utc;
use tracing::{debug, info, instrument};

use super::entries::{extract_education, extract_experience};
use super::fields::{extract_address, extract_email, extract_name, extract_phone};
use super::lexicon::{Lexicon, Section};
use super::lists::{extract_languages, extract_skills};
use super::sections::find_section;
use super::summary::extract_summary;
use crate::error::ParseError;
use crate::extract::ExtractorRegistry;
use crate::models::resume::ParsedResume;

/// Entry point of the engine. Cheap to share: holds only immutable configuration.
#[derive(Debug, Clone, Default)]
pub struct ResumeParser {
    lexicon: Lexicon,
    registry: ExtractorRegistry,
}

impl ResumeParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_lexicon(lexicon: Lexicon) -> Self {
        Self {
            lexicon,
            registry: ExtractorRegistry::default(),
        }
    }

    pub fn with_registry(mut self, registry: ExtractorRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Registered file extensions, sorted.
    pub fn supported_extensions(&self) -> Vec<&str> {
        self.registry.extensions()
    }

    /// Whether a file with this path's extension can be parsed. No I/O.
    pub fn supports(&self, path: &Path) -> bool {
        self.registry.for_path(path).is_ok()
    }

    /// Parses one résumé document.
    ///
    /// The extension is resolved before touching the filesystem, so an unsupported
    /// format fails without any I/O.
    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn parse(&self, path: &Path) -> Result<ParsedResume, ParseError> {
        let extractor = self.registry.for_path(path)?;

        if !path.exists() {
            return Err(ParseError::FileNotFound(path.to_path_buf()));
        }

        let text = extractor.extract_text(path)?;
        info!(
            extractor = extractor.name(),
            chars = text.chars().count(),
            "Extracted document text"
        );

        Ok(self.parse_text(&text))
    }

    /// Runs the extraction pipeline over already-extracted text.
    pub fn parse_text(&self, text: &str) -> ParsedResume {
        let lines: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        debug!(lines = lines.len(), "Running field extractors");

        let lexicon = &self.lexicon;

        let full_name = extract_name(&lines);
        let email = extract_email(text);
        let phone = extract_phone(text);
        let address = extract_address(text);
        let experience = extract_experience(&find_section(&lines, Section::Experience, lexicon));
        let education = extract_education(&find_section(&lines, Section::Education, lexicon));
        let skills = extract_skills(&find_section(&lines, Section::Skills, lexicon));
        let languages =
            extract_languages(&find_section(&lines, Section::Languages, lexicon), lexicon);
        let summary = extract_summary(&lines, &full_name, lexicon);

        ParsedResume {
            full_name,
            email,
            phone,
            address,
            experience,
            education,
            skills,
            languages,
            summary,
            extracted_at: Utc::now(),
        }
    }
}
