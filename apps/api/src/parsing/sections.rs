//! Section finder.
//!
//! A section starts at the first line containing one of its trigger keywords (the
//! header line itself is dropped) and runs up to, but excluding, the next line that
//! carries a keyword of a *different* section. A missing header yields an empty block.

use tracing::debug;

use super::lexicon::{contains_any, Lexicon, Section};

/// Raw content block of `section`, lines joined with `\n`. Empty when absent.
pub fn find_section(lines: &[&str], section: Section, lexicon: &Lexicon) -> String {
    find_section_with(lines, lexicon.keywords(section), section, lexicon)
}

/// Like [`find_section`] but triggered by an explicit keyword list, while `owner`
/// decides which keywords terminate the block.
pub fn find_section_with(
    lines: &[&str],
    triggers: &[String],
    owner: Section,
    lexicon: &Lexicon,
) -> String {
    let Some(header) = lines
        .iter()
        .position(|line| contains_any(&line.to_lowercase(), triggers))
    else {
        return String::new();
    };

    let body: Vec<&str> = lines[header + 1..]
        .iter()
        .take_while(|line| !lexicon.is_other_section_header(line, owner))
        .copied()
        .collect();

    debug!(
        section = owner.as_str(),
        header_line = header,
        content_lines = body.len(),
        "section located"
    );
    body.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(text: &str) -> Vec<&str> {
        text.lines().collect()
    }

    #[test]
    fn test_stops_at_next_section_header() {
        let text = "EXPERIENCE\nJob A 2020\nEDUCATION\nDegree B 2018";
        let block = find_section(&lines(text), Section::Experience, &Lexicon::default());
        assert_eq!(block, "Job A 2020");
    }

    #[test]
    fn test_runs_to_end_without_terminator() {
        let text = "Jean\nCompétences\nRust, Go\nSQL";
        let block = find_section(&lines(text), Section::Skills, &Lexicon::default());
        assert_eq!(block, "Rust, Go\nSQL");
    }

    #[test]
    fn test_missing_header_is_empty() {
        let text = "Jean Dupont\nRust, Go";
        assert_eq!(
            find_section(&lines(text), Section::Education, &Lexicon::default()),
            ""
        );
    }

    #[test]
    fn test_terminator_right_after_header_is_empty() {
        let text = "Expérience\nFormation\nMaster 2018";
        assert_eq!(
            find_section(&lines(text), Section::Experience, &Lexicon::default()),
            ""
        );
    }

    #[test]
    fn test_header_on_last_line_is_empty() {
        let text = "Jean Dupont\nLangues";
        assert_eq!(
            find_section(&lines(text), Section::Languages, &Lexicon::default()),
            ""
        );
    }

    #[test]
    fn test_same_section_keyword_does_not_terminate() {
        let text = "Expérience\nDev 2020\n5 ans d'expérience Rust\nFormation\nMaster";
        let block = find_section(&lines(text), Section::Experience, &Lexicon::default());
        assert_eq!(block, "Dev 2020\n5 ans d'expérience Rust");
    }

    #[test]
    fn test_first_header_wins() {
        let text = "Skills\nRust\nEducation\nMaster\nSkills\nGo";
        assert_eq!(
            find_section(&lines(text), Section::Skills, &Lexicon::default()),
            "Rust"
        );
    }

    #[test]
    fn test_explicit_triggers() {
        let text = "Jean\nObjectif\nRejoindre une équipe Rust\nExpérience\nDev 2020";
        let triggers = vec!["objectif".to_string()];
        let block = find_section_with(&lines(text), &triggers, Section::Summary, &Lexicon::default());
        assert_eq!(block, "Rejoindre une équipe Rust");
    }
}
