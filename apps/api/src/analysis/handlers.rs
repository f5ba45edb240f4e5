use std::path::PathBuf;

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::analysis::prompts::{build_prompt, ANALYSIS_SYSTEM};
use crate::errors::AppError;
use crate::reports::batch;
use crate::reports::record::ReportCollection;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct DirectoryRequest {
    pub directory: String,
}

#[derive(Debug, Serialize)]
pub struct ParseResponse {
    pub reports: ReportCollection,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub reports: ReportCollection,
    pub prompt: String,
    pub analysis: String,
}

/// POST /api/v1/reports/parse
pub async fn handle_parse(
    State(_state): State<AppState>,
    Json(req): Json<DirectoryRequest>,
) -> Result<Json<ParseResponse>, AppError> {
    let dir = validate_directory(&req)?;
    let reports = batch::collect(&dir)?;
    info!("parsed {} report(s) from {}", reports.len(), dir.display());
    Ok(Json(ParseResponse { reports }))
}

/// POST /api/v1/reports/analyze
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(req): Json<DirectoryRequest>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let dir = validate_directory(&req)?;
    let reports = batch::collect(&dir)?;
    batch::persist(&reports, &state.config.report_dump_path)?;
    info!(
        "parsed {} report(s) from {}, dump written to {}",
        reports.len(),
        dir.display(),
        state.config.report_dump_path.display()
    );

    let prompt = build_prompt(&reports);
    let response = state
        .llm
        .call(&prompt, ANALYSIS_SYSTEM)
        .await
        .map_err(|e| AppError::Llm(format!("Report analysis failed: {e}")))?;
    let analysis = response
        .text()
        .ok_or_else(|| AppError::Llm("LLM returned empty content".to_string()))?
        .to_string();

    Ok(Json(AnalyzeResponse {
        reports,
        prompt,
        analysis,
    }))
}

fn validate_directory(req: &DirectoryRequest) -> Result<PathBuf, AppError> {
    let trimmed = req.directory.trim();
    if trimmed.is_empty() {
        return Err(AppError::Validation(
            "directory must not be empty".to_string(),
        ));
    }
    Ok(PathBuf::from(trimmed))
}
