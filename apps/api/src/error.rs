use std::path::PathBuf;

use thiserror::Error;

/// Fatal failures of a single `parse` call.
///
/// A heuristic miss (field or section not found) is never one of these.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Unsupported format: '{0}'")]
    UnsupportedFormat(String),

    #[error("Unreadable document {}: {reason}", .path.display())]
    UnreadableDocument { path: PathBuf, reason: String },
}

impl ParseError {
    pub(crate) fn unreadable(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        ParseError::UnreadableDocument {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV serialization failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Encoding error: {0}")]
    Encoding(String),
}
