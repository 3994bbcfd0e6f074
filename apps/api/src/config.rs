use std::path::PathBuf;

use anyhow::{Context, Result};
use cv_parser::Lexicon;

const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub max_upload_bytes: usize,
    /// Optional JSON file replacing the built-in keyword lexicon.
    pub lexicon_path: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            max_upload_bytes: match std::env::var("MAX_UPLOAD_BYTES") {
                Ok(raw) => raw
                    .parse::<usize>()
                    .context("MAX_UPLOAD_BYTES must be a byte count")?,
                Err(_) => DEFAULT_MAX_UPLOAD_BYTES,
            },
            lexicon_path: std::env::var_os("CV_LEXICON_PATH").map(PathBuf::from),
        })
    }

    /// The configured lexicon, or the built-in one.
    pub fn load_lexicon(&self) -> Result<Lexicon> {
        let Some(path) = &self.lexicon_path else {
            return Ok(Lexicon::default());
        };
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read lexicon file '{}'", path.display()))?;
        Lexicon::from_json(&raw)
            .with_context(|| format!("Invalid lexicon JSON in '{}'", path.display()))
    }
}
