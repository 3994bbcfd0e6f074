//! Upload endpoints. Every document is parsed on its own blocking task; in a batch,
//! one bad document is reported and the rest still go through.

use std::io::Write;
use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use axum::{
    body::Bytes,
    extract::{Multipart, Query, State},
    http::{header, HeaderName},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use cv_parser::{export, ParseError, ParsedResume, ResumeParser};

use crate::errors::AppError;
use crate::state::AppState;

const FAILED_DOCUMENTS_HEADER: &str = "x-failed-documents";

struct Upload {
    file_name: String,
    data: Bytes,
}

#[derive(Debug, Default, Deserialize, Clone, Copy, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum BatchFormat {
    #[default]
    Json,
    Csv,
}

#[derive(Debug, Deserialize)]
pub struct BatchQuery {
    #[serde(default)]
    pub format: BatchFormat,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ParsedDocument {
    pub file_name: String,
    pub resume: ParsedResume,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FailedDocument {
    pub file_name: String,
    pub error: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BatchResponse {
    pub parsed: Vec<ParsedDocument>,
    pub failed: Vec<FailedDocument>,
}

/// POST /api/v1/cv/parse
pub async fn handle_parse(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ParsedResume>, AppError> {
    let upload = read_uploads(&mut multipart)
        .await?
        .into_iter()
        .next()
        .ok_or_else(|| AppError::Validation("Expected one uploaded file".to_string()))?;

    let file_name = upload.file_name.clone();
    let resume = parse_upload(state.parser.clone(), upload).await?;
    if !resume.has_name() {
        warn!("No candidate name found in '{file_name}'");
    }
    info!("Parsed résumé '{file_name}'");
    Ok(Json(resume))
}

/// POST /api/v1/cv/batch?format=json|csv
pub async fn handle_batch(
    State(state): State<AppState>,
    Query(query): Query<BatchQuery>,
    mut multipart: Multipart,
) -> Result<Response, AppError> {
    let uploads = read_uploads(&mut multipart).await?;
    if uploads.is_empty() {
        return Err(AppError::Validation(
            "Expected at least one uploaded file".to_string(),
        ));
    }

    let tasks: Vec<_> = uploads
        .into_iter()
        .map(|upload| {
            let file_name = upload.file_name.clone();
            (file_name, tokio::spawn(parse_upload(state.parser.clone(), upload)))
        })
        .collect();

    let mut parsed = Vec::new();
    let mut failed = Vec::new();
    for (file_name, task) in tasks {
        let outcome = match task.await {
            Ok(result) => result,
            Err(join_err) => Err(AppError::Internal(anyhow::anyhow!(join_err))),
        };
        match outcome {
            Ok(resume) => parsed.push(ParsedDocument { file_name, resume }),
            Err(e) => {
                warn!("Failed to parse '{file_name}': {e}");
                failed.push(FailedDocument {
                    file_name,
                    error: e.to_string(),
                });
            }
        }
    }
    info!(
        parsed = parsed.len(),
        failed = failed.len(),
        "Batch parse finished"
    );

    match query.format {
        BatchFormat::Json => Ok(Json(BatchResponse { parsed, failed }).into_response()),
        BatchFormat::Csv => {
            let resumes: Vec<ParsedResume> = parsed.into_iter().map(|d| d.resume).collect();
            let csv = export::to_csv(&resumes)?;
            let headers = [
                (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
                (
                    HeaderName::from_static(FAILED_DOCUMENTS_HEADER),
                    failed.len().to_string(),
                ),
            ];
            Ok((headers, csv).into_response())
        }
    }
}

/// Collects every multipart field that carries a file name.
async fn read_uploads(multipart: &mut Multipart) -> Result<Vec<Upload>, AppError> {
    let mut uploads = Vec::new();
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart body: {e}")))?
    {
        let Some(file_name) = field.file_name().map(str::to_string) else {
            continue;
        };
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Failed to read '{file_name}': {e}")))?;
        uploads.push(Upload { file_name, data });
    }
    Ok(uploads)
}

/// Stages the upload in a temp file carrying the original extension and parses it.
async fn parse_upload(parser: Arc<ResumeParser>, upload: Upload) -> Result<ParsedResume, AppError> {
    let extension = Path::new(&upload.file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default()
        .to_lowercase();

    if !parser.supports(Path::new(&upload.file_name)) {
        return Err(ParseError::UnsupportedFormat(extension).into());
    }

    tokio::task::spawn_blocking(move || -> Result<ParsedResume, AppError> {
        let mut staged = tempfile::Builder::new()
            .prefix("cv-")
            .suffix(&format!(".{extension}"))
            .tempfile()
            .context("Failed to create temp file for upload")?;
        staged
            .write_all(&upload.data)
            .context("Failed to stage upload")?;
        staged.flush().context("Failed to stage upload")?;

        Ok(parser.parse(staged.path())?)
    })
    .await
    .context("Parse task panicked")?
}
