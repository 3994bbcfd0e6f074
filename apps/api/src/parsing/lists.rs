//! Delimited list extraction for skills and languages.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

use super::lexicon::Lexicon;

const MIN_ITEM_CHARS: usize = 2;

static LIST_DELIMITERS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[,;•·▪●◦■►✓\-]").expect("valid delimiter regex"));

static CEFR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[ABC][12]\b").expect("valid CEFR regex"));

/// Trimmed items of one line, shorter-than-two-character items dropped.
fn split_items(line: &str) -> impl Iterator<Item = &str> {
    LIST_DELIMITERS
        .split(line)
        .map(str::trim)
        .filter(|item| item.chars().count() >= MIN_ITEM_CHARS)
}

/// Skills block → deduplicated item set.
pub fn extract_skills(block: &str) -> BTreeSet<String> {
    block
        .lines()
        .flat_map(split_items)
        .map(str::to_string)
        .collect()
}

/// Languages block → language names from the lexicon, each annotated with a
/// proficiency level when one is found on the same item or, failing that, the same line.
pub fn extract_languages(block: &str, lexicon: &Lexicon) -> BTreeSet<String> {
    let mut languages = BTreeSet::new();

    for line in block.lines() {
        let line_level = detect_level(line, lexicon);

        for item in split_items(line) {
            let lower = item.to_lowercase();
            let level = detect_level(item, lexicon).or_else(|| line_level.clone());

            for name in lexicon
                .language_names
                .iter()
                .filter(|name| lower.contains(name.as_str()))
            {
                let display = capitalize(name);
                languages.insert(match &level {
                    Some(level) => format!("{display} ({level})"),
                    None => display,
                });
            }
        }
    }

    languages
}

/// CEFR code first, then the first proficiency word of the lexicon.
fn detect_level(text: &str, lexicon: &Lexicon) -> Option<String> {
    if let Some(m) = CEFR_REGEX.find(text) {
        return Some(m.as_str().to_string());
    }
    let lower = text.to_lowercase();
    lexicon
        .proficiency_levels
        .iter()
        .find(|word| lower.contains(word.as_str()))
        .cloned()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
