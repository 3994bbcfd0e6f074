//! Year-triggered segmentation of experience and education blocks.
//!
//! Any line containing a four-digit token opens a new entry; the remaining lines
//! are handed to the open entry, whose [`EntryRecord::absorb`] decides what to keep.
//! Experience entries accumulate every follow-up line into their description, while
//! education entries only take the first follow-up line as the school name.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::models::resume::{EducationEntry, ExperienceEntry};

pub(crate) static YEAR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d{4}").expect("valid year regex"));

/// A year range (`2019-2022`, `2021 - présent`) or a lone year.
static PERIOD_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\d{4}\s*[-–—]\s*(?:\d{4}|présent|present|aujourd'hui|aujourd’hui|actuel|now|current|today)|\d{4}",
    )
    .expect("valid period regex")
});

/// Split on the first separator found, tried in this order.
const HEADER_SEPARATORS: [&str; 4] = [" chez ", " at ", " - ", " à "];

/// Strategy for one kind of year-headed record.
pub trait EntryRecord: Sized {
    /// Builds a record from a header line: the matched date token, the text before
    /// the first separator, and the text after it (if a separator was present).
    fn open(period: &str, head: String, tail: Option<String>) -> Self;

    /// Feeds a non-header line that follows the header.
    fn absorb(&mut self, line: &str);
}

impl EntryRecord for ExperienceEntry {
    fn open(period: &str, head: String, tail: Option<String>) -> Self {
        ExperienceEntry {
            period: period.to_string(),
            title: head,
            company: tail,
            description: String::new(),
        }
    }

    fn absorb(&mut self, line: &str) {
        if !self.description.is_empty() {
            self.description.push(' ');
        }
        self.description.push_str(line);
    }
}

impl EntryRecord for EducationEntry {
    fn open(period: &str, head: String, tail: Option<String>) -> Self {
        let year = YEAR_REGEX
            .find(period)
            .map_or(period, |m| m.as_str())
            .to_string();
        EducationEntry {
            year,
            degree: head,
            school: tail,
        }
    }

    fn absorb(&mut self, line: &str) {
        if self.school.is_none() {
            self.school = Some(line.to_string());
        }
    }
}

/// Runs the segmentation state machine over a section block.
pub fn segment_entries<E: EntryRecord>(block: &str) -> Vec<E> {
    let mut entries = Vec::new();
    let mut current: Option<E> = None;

    for line in block.lines().map(str::trim).filter(|l| !l.is_empty()) {
        if !YEAR_REGEX.is_match(line) {
            if let Some(entry) = current.as_mut() {
                entry.absorb(line);
            }
            continue;
        }

        if let Some(done) = current.take() {
            entries.push(done);
        }

        let (period, remainder) = match PERIOD_REGEX.find(line) {
            Some(m) => (m.as_str(), format!("{} {}", &line[..m.start()], &line[m.end()..])),
            None => ("", line.to_string()),
        };
        let (head, tail) = split_header(&tidy(&remainder));
        current = Some(E::open(period, head, tail));
    }

    entries.extend(current);
    debug!(count = entries.len(), "entries segmented");
    entries
}

pub fn extract_experience(block: &str) -> Vec<ExperienceEntry> {
    segment_entries(block)
}

pub fn extract_education(block: &str) -> Vec<EducationEntry> {
    segment_entries(block)
}

/// Collapses whitespace and trims punctuation left behind by the removed date.
fn tidy(text: &str) -> String {
    trim_punctuation(&text.split_whitespace().collect::<Vec<_>>().join(" ")).to_string()
}

fn trim_punctuation(text: &str) -> &str {
    text.trim_matches(|c: char| {
        c.is_whitespace()
            || matches!(c, ',' | ';' | ':' | '|' | '(' | ')' | '[' | ']' | '-' | '–' | '—')
    })
}

/// Both halves are trimmed again: a date between two separators leaves one
/// dangling after the split ("Dev - 2020 - Acme").
fn split_header(text: &str) -> (String, Option<String>) {
    HEADER_SEPARATORS
        .iter()
        .find_map(|sep| text.split_once(sep))
        .map(|(head, tail)| {
            let tail = trim_punctuation(tail);
            (
                trim_punctuation(head).to_string(),
                (!tail.is_empty()).then(|| tail.to_string()),
            )
        })
        .unwrap_or_else(|| (text.to_string(), None))
}
