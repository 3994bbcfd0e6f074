//! Summary / profile extraction.

use super::lexicon::{Lexicon, Section};
use super::sections::find_section_with;

/// Fallback only looks at the top of the document.
const FALLBACK_WINDOW_LINES: usize = 10;
const FALLBACK_MAX_LINES: usize = 3;

/// Tries each summary keyword in priority order as its own section; the first
/// non-empty block wins. Otherwise collects up to three free-text lines following
/// the name line near the top of the document.
pub fn extract_summary(lines: &[&str], full_name: &str, lexicon: &Lexicon) -> String {
    for keyword in lexicon.keywords(Section::Summary) {
        let block = find_section_with(
            lines,
            std::slice::from_ref(keyword),
            Section::Summary,
            lexicon,
        );
        if !block.trim().is_empty() {
            return strip_keyword(&block, keyword);
        }
    }

    fallback_summary(lines, full_name, lexicon)
}

/// Removes every case-insensitive occurrence of the (lower-case) keyword.
fn strip_keyword(block: &str, keyword: &str) -> String {
    let joined = block.lines().collect::<Vec<_>>().join(" ");
    let mut stripped = String::with_capacity(joined.len());
    let mut rest = joined.as_str();
    while let Some(c) = rest.chars().next() {
        match keyword_prefix_len(rest, keyword) {
            Some(len) => rest = &rest[len..],
            None => {
                stripped.push(c);
                rest = &rest[c.len_utf8()..];
            }
        }
    }
    stripped
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .trim_start_matches([':', '-', ' '])
        .to_string()
}

/// Byte length of the prefix of `text` that lower-cases to `keyword`.
fn keyword_prefix_len(text: &str, keyword: &str) -> Option<usize> {
    let mut wanted = keyword.chars();
    for (idx, c) in text.char_indices() {
        for lower in c.to_lowercase() {
            if wanted.next() != Some(lower) {
                return None;
            }
        }
        if wanted.as_str().is_empty() {
            return Some(idx + c.len_utf8());
        }
    }
    None
}

fn fallback_summary(lines: &[&str], full_name: &str, lexicon: &Lexicon) -> String {
    let start = lines
        .iter()
        .position(|line| *line == full_name)
        .map_or(0, |idx| idx + 1);
    let end = lines.len().min(FALLBACK_WINDOW_LINES);
    if start >= end {
        return String::new();
    }

    lines[start..end]
        .iter()
        .take_while(|line| lexicon.section_of(line).is_none())
        .filter(|line| is_free_text(line))
        .take(FALLBACK_MAX_LINES)
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Not contact data: no `@`, and not starting with a digit or a `+`.
fn is_free_text(line: &str) -> bool {
    !line.contains('@')
        && !line
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_digit() || c == '+')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::NOT_DETECTED;

    fn lines(text: &str) -> Vec<&str> {
        text.lines().collect()
    }

    #[test]
    fn test_profile_section_wins() {
        let text = "Jean Dupont\nProfil\nDéveloppeur backend passionné\npar Rust\nExpérience\nDev 2020";
        let summary = extract_summary(&lines(text), "Jean Dupont", &Lexicon::default());
        assert_eq!(summary, "Développeur backend passionné par Rust");
    }

    #[test]
    fn test_keyword_priority_order() {
        let text = "Objectif\nTrouver un CDI\nCompétences\nRust\nSummary\nSeasoned engineer";
        let summary = extract_summary(&lines(text), NOT_DETECTED, &Lexicon::default());
        assert_eq!(summary, "Seasoned engineer");
    }

    #[test]
    fn test_keyword_inside_block_is_stripped() {
        let text = "About me\nAbout me: curious engineer\nSkills\nRust";
        let summary = extract_summary(&lines(text), NOT_DETECTED, &Lexicon::default());
        assert_eq!(summary, "curious engineer");
    }

    #[test]
    fn test_accented_keyword_stripped_regardless_of_case() {
        let text = "Résumé\nRÉSUMÉ : Ingénieur Rust\nCompétences\nRust";
        let summary = extract_summary(&lines(text), NOT_DETECTED, &Lexicon::default());
        assert_eq!(summary, "Ingénieur Rust");
    }

    #[test]
    fn test_keyword_prefix_len() {
        assert_eq!(keyword_prefix_len("PROFIL: x", "profil"), Some(6));
        assert_eq!(keyword_prefix_len("Résumé x", "résumé"), Some("Résumé".len()));
        assert_eq!(keyword_prefix_len("Prof", "profil"), None);
        assert_eq!(keyword_prefix_len("x", ""), None);
    }

    #[test]
    fn test_fallback_collects_lines_after_name() {
        let text = "Jean Dupont\njean@x.fr\n+33 6 12 34 56 78\nIngénieur logiciel\nSpécialiste des systèmes distribués\nCurieux\nMentor\nCompétences\nRust";
        let summary = extract_summary(&lines(text), "Jean Dupont", &Lexicon::default());
        assert_eq!(
            summary,
            "Ingénieur logiciel Spécialiste des systèmes distribués Curieux"
        );
    }

    #[test]
    fn test_fallback_stops_at_section_header() {
        let text = "Jean Dupont\njean@x.fr\nEXPERIENCE\nDéveloppeur chez Acme 2020-2022";
        let summary = extract_summary(&lines(text), "Jean Dupont", &Lexicon::default());
        assert_eq!(summary, "");
    }

    #[test]
    fn test_fallback_respects_window() {
        let mut owned: Vec<String> = (0..10).map(|i| format!("{i} ligne")).collect();
        owned.push("Texte libre tardif".to_string());
        let refs: Vec<&str> = owned.iter().map(String::as_str).collect();
        assert_eq!(extract_summary(&refs, NOT_DETECTED, &Lexicon::default()), "");
    }

    #[test]
    fn test_empty_document() {
        assert_eq!(extract_summary(&[], NOT_DETECTED, &Lexicon::default()), "");
    }
}
