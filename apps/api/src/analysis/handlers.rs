//! Axum route handlers for the Analysis API.

use axum::{
    extract::{multipart::MultipartError, Multipart, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::analysis::document::{extract_document_text, DocumentKind};
use crate::analysis::engine::{analyze, keyword_frequency, AnalyzerConfig};
use crate::analysis::frequency::KeywordCount;
use crate::analysis::report::AnalysisReport;
use crate::errors::AppError;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// Per-request overrides of the engine defaults.
#[derive(Debug, Default, Deserialize)]
pub struct AnalysisOptions {
    pub min_token_length: Option<usize>,
    pub top_keyword_cap: Option<usize>,
}

impl AnalysisOptions {
    fn apply(&self, base: &AnalyzerConfig) -> Result<AnalyzerConfig, AppError> {
        if self.top_keyword_cap == Some(0) {
            return Err(AppError::Validation(
                "top_keyword_cap must be at least 1".to_string(),
            ));
        }
        Ok(AnalyzerConfig {
            stopwords: base.stopwords.clone(),
            min_token_length: self.min_token_length.unwrap_or(base.min_token_length),
            top_keyword_cap: self.top_keyword_cap.unwrap_or(base.top_keyword_cap),
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub resume_text: String,
    pub job_description_text: String,
    #[serde(default)]
    pub options: AnalysisOptions,
}

#[derive(Debug, Deserialize)]
pub struct KeywordsRequest {
    pub text: String,
    #[serde(default)]
    pub options: AnalysisOptions,
}

#[derive(Debug, Serialize)]
pub struct KeywordsResponse {
    pub unique_keywords: usize,
    pub keywords: Vec<KeywordCount>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/analyze
///
/// Scores résumé text against job-description text. Empty inputs are valid and
/// produce a zero score.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalysisReport>, AppError> {
    let config = request.options.apply(&state.analyzer)?;
    let report = run_analysis(&request.resume_text, &request.job_description_text, &config);
    Ok(Json(report))
}

/// POST /api/v1/analyze/upload
///
/// Multipart form: `resume` (PDF or text file, or a text field), `job_description`
/// (text field or file), optional `min_token_length` / `top_keyword_cap` fields.
pub async fn handle_analyze_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalysisReport>, AppError> {
    let mut resume_text = None;
    let mut job_text = None;
    let mut options = AnalysisOptions::default();

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        let name = field.name().unwrap_or_default().to_string();
        let kind = DocumentKind::detect(field.file_name(), field.content_type());
        let bytes = field.bytes().await.map_err(multipart_error)?;

        match name.as_str() {
            "resume" => resume_text = Some(extract_document_text(kind?, bytes.to_vec()).await?),
            "job_description" => {
                job_text = Some(extract_document_text(kind?, bytes.to_vec()).await?)
            }
            "min_token_length" => options.min_token_length = Some(parse_number(&name, &bytes)?),
            "top_keyword_cap" => options.top_keyword_cap = Some(parse_number(&name, &bytes)?),
            other => debug!("Ignoring multipart field '{other}'"),
        }
    }

    let resume_text = resume_text
        .ok_or_else(|| AppError::Validation("missing 'resume' part".to_string()))?;
    let job_text = job_text
        .ok_or_else(|| AppError::Validation("missing 'job_description' part".to_string()))?;

    let config = options.apply(&state.analyzer)?;
    Ok(Json(run_analysis(&resume_text, &job_text, &config)))
}

/// POST /api/v1/keywords
///
/// Returns one document's ranked keyword inventory — what the matcher would rank if
/// this text were the job description.
pub async fn handle_keywords(
    State(state): State<AppState>,
    Json(request): Json<KeywordsRequest>,
) -> Result<Json<KeywordsResponse>, AppError> {
    let config = request.options.apply(&state.analyzer)?;
    let frequency = keyword_frequency(&request.text, &config);
    Ok(Json(KeywordsResponse {
        unique_keywords: frequency.unique_count(),
        keywords: frequency.ranked(),
    }))
}

fn run_analysis(resume_text: &str, job_text: &str, config: &AnalyzerConfig) -> AnalysisReport {
    let report = AnalysisReport::from(analyze(resume_text, job_text, config));
    info!(
        "Analyzed {} resume chars against {} job chars: {:.1}% ({} matched, {} missing)",
        resume_text.len(),
        job_text.len(),
        report.match_percentage,
        report.matched_keywords.len(),
        report.missing_keywords.len()
    );
    report
}

fn multipart_error(err: MultipartError) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(err.body_text())
    } else {
        AppError::Validation(format!("invalid multipart body: {}", err.body_text()))
    }
}

fn parse_number(name: &str, bytes: &[u8]) -> Result<usize, AppError> {
    std::str::from_utf8(bytes)
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .ok_or_else(|| AppError::Validation(format!("'{name}' must be a non-negative integer")))
}
