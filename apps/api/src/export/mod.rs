//! Exporters for parsed résumés.
//!
//! JSON is a lossless serialization of one [`ParsedResume`]. CSV is a *summary*
//! export over many résumés: list fields are joined or counted, so it cannot be
//! parsed back into the original records.

use std::path::Path;

use crate::error::ExportError;
use crate::models::resume::ParsedResume;

pub const CSV_HEADERS: [&str; 9] = [
    "Nom",
    "Email",
    "Téléphone",
    "Adresse",
    "Compétences",
    "Expériences",
    "Formations",
    "Langues",
    "Date Extraction",
];

const LIST_SEPARATOR: &str = "; ";

/// Pretty-printed JSON of the full record.
pub fn to_json(resume: &ParsedResume) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(resume)?)
}

/// One header row, then one summary row per résumé.
pub fn to_csv(resumes: &[ParsedResume]) -> Result<String, ExportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(CSV_HEADERS)?;

    for resume in resumes {
        writer.write_record(csv_row(resume))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ExportError::Io(e.into_error()))?;
    String::from_utf8(bytes).map_err(|e| ExportError::Encoding(e.to_string()))
}

/// Writes [`to_csv`] output to a file.
pub fn write_csv(path: &Path, resumes: &[ParsedResume]) -> Result<(), ExportError> {
    std::fs::write(path, to_csv(resumes)?)?;
    Ok(())
}

fn csv_row(resume: &ParsedResume) -> [String; 9] {
    [
        resume.full_name.clone(),
        resume.email.clone(),
        resume.phone.clone(),
        resume.address.clone(),
        join_list(&resume.skills),
        format!("{} expérience(s)", resume.experience.len()),
        format!("{} formation(s)", resume.education.len()),
        join_list(&resume.languages),
        resume.extracted_at.format("%Y-%m-%d %H:%M:%S").to_string(),
    ]
}

fn join_list<'a>(items: impl IntoIterator<Item = &'a String>) -> String {
    items
        .into_iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(LIST_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{EducationEntry, ExperienceEntry, NOT_DETECTED};
    use chrono::{TimeZone, Utc};
    use std::collections::BTreeSet;

    fn resume() -> ParsedResume {
        ParsedResume {
            full_name: "Jean Dupont".to_string(),
            email: "jean.dupont@example.com".to_string(),
            phone: "+33 6 12 34 56 78".to_string(),
            address: NOT_DETECTED.to_string(),
            experience: vec![ExperienceEntry {
                period: "2020-2022".to_string(),
                title: "Développeur".to_string(),
                company: Some("Acme".to_string()),
                description: "Maintenance des systèmes".to_string(),
            }],
            education: vec![EducationEntry {
                year: "2018".to_string(),
                degree: "Master Informatique".to_string(),
                school: Some("Université X".to_string()),
            }],
            skills: BTreeSet::from(["Go".to_string(), "Rust".to_string()]),
            languages: BTreeSet::from(["Anglais (C1)".to_string()]),
            summary: String::new(),
            extracted_at: Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap(),
        }
    }

    #[test]
    fn test_csv_empty_is_header_only() {
        let csv = to_csv(&[]).unwrap();
        assert_eq!(
            csv,
            "Nom,Email,Téléphone,Adresse,Compétences,Expériences,Formations,Langues,Date Extraction\n"
        );
    }

    #[test]
    fn test_csv_summary_row() {
        let csv = to_csv(&[resume()]).unwrap();
        let rows: Vec<&str> = csv.lines().collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(
            rows[1],
            "Jean Dupont,jean.dupont@example.com,+33 6 12 34 56 78,Non détecté,Go; Rust,1 expérience(s),1 formation(s),Anglais (C1),2024-03-01 09:30:00"
        );
    }

    #[test]
    fn test_csv_quotes_fields_with_commas() {
        let mut r = resume();
        r.address = "12 rue de la Paix, 75002 Paris".to_string();
        let csv = to_csv(&[r]).unwrap();
        assert!(csv.contains("\"12 rue de la Paix, 75002 Paris\""));
    }

    #[test]
    fn test_json_is_lossless() {
        let original = resume();
        let json = to_json(&original).unwrap();
        let back: ParsedResume = serde_json::from_str(&json).unwrap();
        assert_eq!(back, original);
        assert!(json.contains("\"full_name\": \"Jean Dupont\""));
    }

    #[test]
    fn test_write_csv_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("export.csv");
        write_csv(&path, &[resume(), resume()]).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written.lines().count(), 3);
    }
}
