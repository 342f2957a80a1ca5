//! Request handlers

use super::AppState;
use super::error::ApiError;
use crate::analysis::{AnalysisResult, ProfileUrlError};
use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use serde::{Deserialize, Serialize};

/// Body of `POST /api/analyze`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(rename = "githubUrl", default)]
    pub github_url: Option<String>,
}

/// `POST /api/analyze`
///
/// A missing `githubUrl` is rejected before the provider is contacted.
pub(crate) async fn analyze(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<AnalysisResult>, ApiError> {
    let Json(request) = payload?;
    let github_url = request.github_url.ok_or(ProfileUrlError::Missing)?;

    let result = state.analyzer.analyze(&github_url).await?;
    Ok(Json(result))
}
