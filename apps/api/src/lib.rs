//! Heuristic résumé (CV) parsing engine.
//!
//! Text is pulled out of PDF, DOCX or plain-text documents by a per-extension
//! [`extract::TextExtractor`], then keyword- and regex-driven extractors recover
//! contact fields, experience and education entries, skills, languages and a summary.
//! Results are best-effort: a field that cannot be found is reported with the
//! [`models::resume::NOT_DETECTED`] sentinel or an empty collection, never as an error.

pub mod error;
pub mod export;
pub mod extract;
pub mod models;
pub mod parsing;

pub use error::{ExportError, ParseError};
pub use models::resume::{EducationEntry, ExperienceEntry, ParsedResume, NOT_DETECTED};
pub use parsing::lexicon::{Lexicon, Section};
pub use parsing::parser::ResumeParser;
