//! Scalar field extractors: name, email, phone, address.
//!
//! Each returns the `NOT_DETECTED` sentinel on a miss.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::resume::NOT_DETECTED;

const NAME_SCAN_LINES: usize = 5;
const NAME_MIN_CHARS: usize = 3;
const NAME_MAX_CHARS: usize = 49;
const PHONE_MIN_DIGITS: usize = 8;

static NAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-zÀ-ÖØ-öø-ÿ\s'.\-]+$").expect("valid name regex"));

static YEAR_TOKEN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:19|20)\d{2}$").expect("valid year token regex"));

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[A-Za-z0-9._%+\-]+@[A-Za-z0-9.\-]+\.[A-Za-z]{2,}").expect("valid email regex")
});

/// Tried in order; the first candidate with enough digits wins.
/// The order is a tie-break for ambiguous input, not a correctness guarantee.
static PHONE_CASCADE: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        // International with a leading +: +33 6 12 34 56 78, +1 (415) 555-0100
        r"\+\d{1,3}[ .\-]?\(?\d{1,4}\)?(?:[ .\-]?\d{1,4}){2,5}",
        // French national: 06 12 34 56 78, 01.23.45.67.89
        r"\b0[1-9](?:[ .\-]?\d{2}){4}\b",
        // Anything phone-shaped
        r"\(?\d{2,4}\)?(?:[ .\-]?\d{2,4}){2,}",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("valid phone regex"))
    .collect()
});

/// Street number, then either a French-order street ("12 rue de la Paix") or a
/// few name tokens closed by an English street type ("221 Baker Street"),
/// then an optional postcode and city.
static ADDRESS_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?i)\b\d{1,4}(?:\s?(?:bis|ter))?,?[ \t]+",
        r"(?:",
        r"(?:(?:rue|avenue|boulevard|bd|place|chemin|allée|impasse|route|quai|cours|street|road|lane|drive)\b|(?:av|st|rd)\.)[^\n,\d@]*",
        r"|",
        r"(?:[A-Za-zÀ-ÿ'\-]+[ \t]+){1,4}(?:(?:street|road|avenue|lane|drive)\b|(?:st|rd)\.)",
        r")",
        r"(?:,?[ \t]*\d{5})?(?:[ ,]+[^\n,\d@]+)?",
    ))
    .expect("valid address regex")
});

/// First of the top lines that looks like a person's name.
pub fn extract_name(lines: &[&str]) -> String {
    lines
        .iter()
        .take(NAME_SCAN_LINES)
        .map(|line| line.trim())
        .find(|line| looks_like_name(line))
        .map(str::to_string)
        .unwrap_or_else(|| NOT_DETECTED.to_string())
}

fn looks_like_name(line: &str) -> bool {
    let len = line.chars().count();
    (NAME_MIN_CHARS..=NAME_MAX_CHARS).contains(&len)
        && !line.contains('@')
        && !line.chars().any(|c| c.is_ascii_digit())
        && NAME_REGEX.is_match(line)
}

pub fn extract_email(text: &str) -> String {
    EMAIL_REGEX
        .find(text)
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| NOT_DETECTED.to_string())
}

pub fn extract_phone(text: &str) -> String {
    PHONE_CASCADE
        .iter()
        .flat_map(|pattern| pattern.find_iter(text))
        .map(|m| m.as_str().trim())
        .find(|candidate| is_phone_candidate(candidate))
        .map(str::to_string)
        .unwrap_or_else(|| NOT_DETECTED.to_string())
}

fn is_phone_candidate(candidate: &str) -> bool {
    let digits = candidate.chars().filter(char::is_ascii_digit).count();
    digits >= PHONE_MIN_DIGITS && !is_only_years(candidate)
}

/// "2019-2022" or "2018 2020": eight digits, but dates.
fn is_only_years(candidate: &str) -> bool {
    candidate
        .split(|c: char| !c.is_ascii_digit())
        .filter(|group| !group.is_empty())
        .all(|group| YEAR_TOKEN_REGEX.is_match(group))
}

pub fn extract_address(text: &str) -> String {
    ADDRESS_REGEX
        .find(text)
        .map(|m| m.as_str().trim().trim_end_matches(',').to_string())
        .unwrap_or_else(|| NOT_DETECTED.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_first_line() {
        assert_eq!(extract_name(&["Jean Dupont", "jean@x.fr"]), "Jean Dupont");
    }

    #[test]
    fn test_name_accents_hyphen_apostrophe() {
        assert_eq!(
            extract_name(&["Hélène D'Arcy-Lefèvre"]),
            "Hélène D'Arcy-Lefèvre"
        );
    }

    #[test]
    fn test_name_skips_contact_lines() {
        let lines = ["jean@x.fr", "+33 6 12 34 56 78", "J. Dupont"];
        assert_eq!(extract_name(&lines), "J. Dupont");
    }

    #[test]
    fn test_name_only_scans_five_lines() {
        let lines = ["01", "02", "03", "04", "05", "Jean Dupont"];
        assert_eq!(extract_name(&lines), NOT_DETECTED);
    }

    #[test]
    fn test_name_length_bounds() {
        assert_eq!(extract_name(&["Al"]), NOT_DETECTED);
        let long = "A".repeat(50);
        assert_eq!(extract_name(&[long.as_str()]), NOT_DETECTED);
        let max = "B".repeat(49);
        assert_eq!(extract_name(&[max.as_str()]), max);
    }

    #[test]
    fn test_name_rejects_symbols() {
        assert_eq!(extract_name(&["Jean | Dev"]), NOT_DETECTED);
    }

    #[test]
    fn test_email_first_match() {
        let text = "Contact: jean.dupont@example.com / backup: jd@other.org";
        assert_eq!(extract_email(text), "jean.dupont@example.com");
    }

    #[test]
    fn test_email_missing() {
        assert_eq!(extract_email("no address here"), NOT_DETECTED);
    }

    #[test]
    fn test_phone_international() {
        assert_eq!(
            extract_phone("Tél : +33 6 12 34 56 78\n"),
            "+33 6 12 34 56 78"
        );
    }

    #[test]
    fn test_phone_french_dotted() {
        assert_eq!(extract_phone("Tel 06.12.34.56.78"), "06.12.34.56.78");
    }

    #[test]
    fn test_phone_too_few_digits() {
        assert_eq!(extract_phone("Code 12 34 56"), NOT_DETECTED);
    }

    #[test]
    fn test_phone_ignores_year_range() {
        assert_eq!(extract_phone("Développeur 2019-2022"), NOT_DETECTED);
    }

    #[test]
    fn test_address_with_postcode_and_city() {
        let text = "Jean Dupont\n12 rue de la Paix, 75002 Paris\njean@x.fr";
        assert_eq!(extract_address(text), "12 rue de la Paix, 75002 Paris");
    }

    #[test]
    fn test_phone_ignores_space_separated_years() {
        assert_eq!(extract_phone("Jean\nDéveloppeur 2018 2020"), NOT_DETECTED);
        assert_eq!(
            extract_phone("Stage 2018 2020\nTel 06 12 34 56 78"),
            "06 12 34 56 78"
        );
    }

    #[test]
    fn test_address_english_street() {
        assert_eq!(
            extract_address("221 Baker Street, London"),
            "221 Baker Street, London"
        );
        assert_eq!(
            extract_address("1600 Pennsylvania Avenue"),
            "1600 Pennsylvania Avenue"
        );
        assert_eq!(extract_address("Lives at 10 Downing St. London"), "10 Downing St. London");
    }

    #[test]
    fn test_address_french_avenue() {
        assert_eq!(
            extract_address("Home: 42 avenue Victor Hugo 69003 Lyon"),
            "42 avenue Victor Hugo 69003 Lyon"
        );
    }

    #[test]
    fn test_address_missing() {
        assert_eq!(extract_address("Jean Dupont\nRust"), NOT_DETECTED);
    }
}
