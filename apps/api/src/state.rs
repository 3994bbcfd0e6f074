use std::sync::Arc;

use cv_parser::ResumeParser;

use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Immutable parser (lexicon + extractor registry), shared across requests.
    pub parser: Arc<ResumeParser>,
    pub config: Config,
}
