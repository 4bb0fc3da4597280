//! Axum route handlers for the Scoring API.

use std::sync::Arc;

use axum::{
    extract::{multipart::MultipartRejection, rejection::JsonRejection, Multipart, State},
    Json,
};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::errors::AppError;
use crate::extraction::{extract_text, DocumentKind};
use crate::scoring::text::preview;
use crate::scoring::{ResumeScorer, ScoreReport};
use crate::state::AppState;

const NO_FILE_MESSAGE: &str = "No file uploaded. Use form field name `file`.";
const NO_TEXT_MESSAGE: &str = "Unable to extract text from uploaded file.";
const MISSING_FIELDS_MESSAGE: &str = "Both resume and jobDescription required.";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreRequest {
    #[serde(default)]
    pub resume: Option<String>,
    #[serde(default)]
    pub job_description: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    #[serde(flatten)]
    pub report: ScoreReport,
    pub preview: String,
}

struct UploadedFile {
    file_name: Option<String>,
    content_type: Option<String>,
    bytes: Bytes,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /score
///
/// Scores pasted resume text against a job description. Both fields are required.
pub async fn handle_score(
    State(state): State<AppState>,
    payload: Result<Json<ScoreRequest>, JsonRejection>,
) -> Result<Json<ScoreReport>, AppError> {
    let Json(request) = payload?;

    let resume = request.resume.filter(|r| !r.is_empty());
    let job_description = request.job_description.filter(|jd| !jd.is_empty());
    let (Some(resume), Some(job_description)) = (resume, job_description) else {
        return Err(AppError::Validation(MISSING_FIELDS_MESSAGE.to_string()));
    };

    let report = run_scorer(state.scorer.clone(), resume, job_description).await?;
    Ok(Json(report))
}

/// POST /upload
///
/// Accepts a `file` part (PDF, DOCX or plain text) and an optional `jobDescription` part.
/// Returns the score plus a preview of the extracted text.
pub async fn handle_upload(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<UploadResponse>, AppError> {
    let mut multipart = multipart?;
    let mut file = None;
    let mut job_description = String::new();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().map(str::to_owned);
        match name.as_deref() {
            Some("file") => {
                let file_name = field.file_name().map(str::to_owned);
                let content_type = field.content_type().map(str::to_owned);
                let bytes = field.bytes().await?;
                file = Some(UploadedFile {
                    file_name,
                    content_type,
                    bytes,
                });
            }
            Some("jobDescription") => job_description = field.text().await?,
            _ => {}
        }
    }

    let file = file.ok_or_else(|| AppError::Validation(NO_FILE_MESSAGE.to_string()))?;
    let kind = DocumentKind::detect(file.file_name.as_deref(), file.content_type.as_deref());
    info!(
        ?kind,
        bytes = file.bytes.len(),
        file_name = file.file_name.as_deref().unwrap_or("<unnamed>"),
        "Extracting uploaded resume"
    );

    let text = extract_upload(file.bytes, kind).await?;
    if text.trim().is_empty() {
        return Err(AppError::Validation(NO_TEXT_MESSAGE.to_string()));
    }

    let preview = preview(&text, state.config.preview_chars);
    let report = run_scorer(state.scorer.clone(), text, job_description).await?;

    Ok(Json(UploadResponse { report, preview }))
}

// ────────────────────────────────────────────────────────────────────────────
// Blocking helpers
// ────────────────────────────────────────────────────────────────────────────

/// Scoring is regex-bound; run it off the async executor.
async fn run_scorer(
    scorer: Arc<dyn ResumeScorer>,
    resume: String,
    job_description: String,
) -> Result<ScoreReport, AppError> {
    tokio::task::spawn_blocking(move || scorer.score(&resume, &job_description))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("spawn_blocking failed in scoring: {e}")))
}

/// Extraction failures collapse to empty text so the caller reports a single
/// "unable to extract" error.
async fn extract_upload(bytes: Bytes, kind: DocumentKind) -> Result<String, AppError> {
    let joined = tokio::task::spawn_blocking(move || extract_text(&bytes, kind)).await;

    match joined {
        Ok(Ok(text)) => Ok(text),
        Ok(Err(e)) => {
            warn!("Error extracting file text: {e}");
            Ok(String::new())
        }
        Err(e) => {
            warn!("Extraction task aborted: {e}");
            Ok(String::new())
        }
    }
}
