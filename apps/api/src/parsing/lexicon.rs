//! Keyword lexicon — section trigger words plus the closed vocabularies used by
//! the language extractor.
//!
//! A `Lexicon` is an immutable value owned by the parser. The built-in one covers
//! French and English résumés; a replacement can be loaded from JSON.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Logical résumé sections recognised by keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Experience,
    Education,
    Skills,
    Languages,
    Summary,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Experience,
        Section::Education,
        Section::Skills,
        Section::Languages,
        Section::Summary,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Experience => "experience",
            Section::Education => "education",
            Section::Skills => "skills",
            Section::Languages => "languages",
            Section::Summary => "summary",
        }
    }
}

const EXPERIENCE_KEYWORDS: &[&str] = &[
    "expérience",
    "experience",
    "parcours professionnel",
    "emplois",
    "work history",
    "employment",
];

const EDUCATION_KEYWORDS: &[&str] = &[
    "formation",
    "education",
    "éducation",
    "diplômes",
    "études",
    "cursus",
];

const SKILLS_KEYWORDS: &[&str] = &["compétences", "competences", "skills", "technologies", "outils"];

const LANGUAGES_KEYWORDS: &[&str] = &["langues", "langue", "languages", "language"];

/// Ordered by priority: the summary extractor tries them one at a time.
const SUMMARY_KEYWORDS: &[&str] = &[
    "profil",
    "résumé",
    "summary",
    "à propos",
    "about me",
    "objectif",
];

const LANGUAGE_NAMES: &[&str] = &[
    "français",
    "anglais",
    "espagnol",
    "allemand",
    "italien",
    "portugais",
    "arabe",
    "chinois",
    "mandarin",
    "japonais",
    "russe",
    "néerlandais",
    "polonais",
    "turc",
    "coréen",
    "hindi",
    "french",
    "english",
    "spanish",
    "german",
    "italian",
    "portuguese",
    "arabic",
    "chinese",
    "japanese",
    "russian",
    "dutch",
    "polish",
    "turkish",
    "korean",
];

/// Longer phrases first so "langue maternelle" wins over "maternelle".
const PROFICIENCY_LEVELS: &[&str] = &[
    "langue maternelle",
    "maternelle",
    "natif",
    "native",
    "bilingue",
    "bilingual",
    "courant",
    "fluent",
    "professionnel",
    "professional",
    "avancé",
    "advanced",
    "intermédiaire",
    "intermediate",
    "scolaire",
    "notions",
    "débutant",
    "beginner",
    "basic",
];

/// Section keywords and closed vocabularies. All entries are lower-case.
///
/// Fields missing from a JSON lexicon fall back to the built-in defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Lexicon {
    pub sections: BTreeMap<Section, Vec<String>>,
    pub language_names: Vec<String>,
    pub proficiency_levels: Vec<String>,
}

impl Default for Lexicon {
    fn default() -> Self {
        let owned = |words: &[&str]| words.iter().map(|w| w.to_string()).collect::<Vec<_>>();

        let sections = BTreeMap::from([
            (Section::Experience, owned(EXPERIENCE_KEYWORDS)),
            (Section::Education, owned(EDUCATION_KEYWORDS)),
            (Section::Skills, owned(SKILLS_KEYWORDS)),
            (Section::Languages, owned(LANGUAGES_KEYWORDS)),
            (Section::Summary, owned(SUMMARY_KEYWORDS)),
        ]);

        Lexicon {
            sections,
            language_names: owned(LANGUAGE_NAMES),
            proficiency_levels: owned(PROFICIENCY_LEVELS),
        }
    }
}

impl Lexicon {
    /// Parses a lexicon from JSON and lower-cases every entry.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        let lexicon: Lexicon = serde_json::from_str(json)?;
        Ok(lexicon.normalized())
    }

    fn normalized(self) -> Self {
        let lower = |words: Vec<String>| {
            words
                .into_iter()
                .map(|w| w.trim().to_lowercase())
                .filter(|w| !w.is_empty())
                .collect::<Vec<_>>()
        };

        Lexicon {
            sections: self
                .sections
                .into_iter()
                .map(|(section, words)| (section, lower(words)))
                .collect(),
            language_names: lower(self.language_names),
            proficiency_levels: lower(self.proficiency_levels),
        }
    }

    /// Trigger keywords for a section, in priority order. Empty if none configured.
    pub fn keywords(&self, section: Section) -> &[String] {
        self.sections
            .get(&section)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// First section (in `Section::ALL` order) whose keyword occurs in the line.
    pub fn section_of(&self, line: &str) -> Option<Section> {
        let lower = line.to_lowercase();
        Section::ALL
            .into_iter()
            .find(|&section| contains_any(&lower, self.keywords(section)))
    }

    /// True when the line carries a keyword of any section other than `owner`.
    pub fn is_other_section_header(&self, line: &str, owner: Section) -> bool {
        let lower = line.to_lowercase();
        Section::ALL
            .into_iter()
            .filter(|&section| section != owner)
            .any(|section| contains_any(&lower, self.keywords(section)))
    }
}

/// Case-sensitive containment of any keyword; callers pass lower-cased text.
pub(crate) fn contains_any(lower: &str, keywords: &[String]) -> bool {
    keywords.iter().any(|k| lower.contains(k.as_str()))
}
