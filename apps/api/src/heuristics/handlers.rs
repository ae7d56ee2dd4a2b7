use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::editor::handlers::UserIdQuery;
use crate::errors::AppError;
use crate::heuristics::progress::{compute_progress, ProgressReport};
use crate::heuristics::warnings::{compute_warnings, ContentWarning, Severity};
use crate::models::resume::ResumeContent;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct InsightsResponse {
    pub progress: ProgressReport,
    /// Full ordered list, never truncated.
    pub warnings: Vec<ContentWarning>,
    pub warning_count: usize,
    pub info_count: usize,
}

impl InsightsResponse {
    pub fn for_content(content: &ResumeContent) -> Self {
        let warnings = compute_warnings(content);
        let warning_count = warnings
            .iter()
            .filter(|w| w.severity == Severity::Warning)
            .count();
        Self {
            progress: compute_progress(content),
            info_count: warnings.len() - warning_count,
            warning_count,
            warnings,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct InsightsRequest {
    pub content: ResumeContent,
}

/// GET /api/v1/resumes/:id/insights
pub async fn handle_resume_insights(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<InsightsResponse>, AppError> {
    let resume = state.store.get(params.user_id, id).await?;
    Ok(Json(InsightsResponse::for_content(&resume.content)))
}

/// POST /api/v1/insights
///
/// Same report for content that has not been saved yet.
pub async fn handle_content_insights(
    Json(req): Json<InsightsRequest>,
) -> Json<InsightsResponse> {
    Json(InsightsResponse::for_content(&req.content))
}
