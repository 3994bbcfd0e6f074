use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Placeholder used for scalar contact fields that could not be detected.
pub const NOT_DETECTED: &str = "Non détecté";

/// One work-experience record recovered from the experience section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    /// Literal date token as found in the header line, e.g. `2019-2022`.
    pub period: String,
    pub title: String,
    /// Set only when the header line carried a separator (` chez `, ` at `, ` - `, ` à `).
    pub company: Option<String>,
    /// Non-header lines of the entry, space-joined in document order.
    pub description: String,
}

/// One education record recovered from the education section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationEntry {
    /// First 4-digit year token of the header line.
    pub year: String,
    pub degree: String,
    pub school: Option<String>,
}

/// Structured result of parsing one résumé document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedResume {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub skills: BTreeSet<String>,
    /// Language names, optionally annotated with a level: `Anglais (C1)`.
    pub languages: BTreeSet<String>,
    pub summary: String,
    pub extracted_at: DateTime<Utc>,
}

impl ParsedResume {
    pub fn has_name(&self) -> bool {
        self.full_name != NOT_DETECTED
    }

    /// Equality ignoring `extracted_at`.
    pub fn same_content(&self, other: &ParsedResume) -> bool {
        ParsedResume {
            extracted_at: other.extracted_at,
            ..self.clone()
        } == *other
    }
}
