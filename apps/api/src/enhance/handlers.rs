//! AI endpoints. The resume-scoped ones return the merged content without
//! persisting it; saving stays an explicit client action.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::editor::handlers::UserIdQuery;
use crate::editor::session::{EditorSession, OptimizedSection};
use crate::enhance::normalize::{
    AnalysisResult, EnhanceResult, ImprovedExperience, JdOptimization, SkillSuggestions,
    SummaryResult,
};
use crate::enhance::request::{EnhanceKind, EnhanceRequest};
use crate::enhance::service::run_enhancement;
use crate::errors::AppError;
use crate::models::resume::ResumeContent;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct MergedResponse<T> {
    pub result: T,
    pub content: ResumeContent,
}

#[derive(Debug, Deserialize)]
pub struct OptimizeRequest {
    pub job_description: String,
}

#[derive(Debug, Serialize)]
pub struct OptimizeResponse {
    pub result: JdOptimization,
    /// Empty when no optimizations are needed.
    pub sections: Vec<OptimizedSection>,
    /// Content with every proposed section applied.
    pub content: ResumeContent,
}

/// POST /api/v1/ai/enhance
///
/// Stateless: typed request in, normalized result out.
pub async fn handle_enhance(
    State(state): State<AppState>,
    Json(request): Json<EnhanceRequest>,
) -> Result<Json<EnhanceResult>, AppError> {
    Ok(Json(run_enhancement(state.ai.as_ref(), &request).await?))
}

async fn open_session(state: &AppState, owner: Uuid, id: Uuid) -> Result<EditorSession, AppError> {
    Ok(EditorSession::open(state.store.get(owner, id).await?))
}

// ────────────────────────────────────────────────────────────────────────────
// Resume-scoped actions
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/resumes/:id/ai/summary
pub async fn handle_generate_summary(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<MergedResponse<SummaryResult>>, AppError> {
    let _permit = state.actions.begin(id, EnhanceKind::GenerateSummary)?;
    let mut session = open_session(&state, params.user_id, id).await?;
    let request = EnhanceRequest::summary_for(session.content())?;

    let result = match run_enhancement(state.ai.as_ref(), &request).await? {
        EnhanceResult::Summary(summary) => summary,
        other => return Err(unexpected_result(EnhanceKind::GenerateSummary, &other)),
    };
    session.merge_summary(&result);
    info!("Generated summary for resume {}", id);

    Ok(Json(MergedResponse {
        result,
        content: session.into_content(),
    }))
}

/// POST /api/v1/resumes/:id/ai/experience/:exp_id
pub async fn handle_improve_experience(
    State(state): State<AppState>,
    Path((id, exp_id)): Path<(Uuid, String)>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<MergedResponse<ImprovedExperience>>, AppError> {
    let _permit = state.actions.begin(id, EnhanceKind::ImproveExperience)?;
    let mut session = open_session(&state, params.user_id, id).await?;
    let experience = session
        .content()
        .experience
        .iter()
        .find(|e| e.id == exp_id)
        .ok_or_else(|| AppError::NotFound(format!("No experience entry with id {exp_id}")))?;
    let request = EnhanceRequest::improve_for(experience)?;

    let result = match run_enhancement(state.ai.as_ref(), &request).await? {
        EnhanceResult::Experience(improved) => improved,
        other => return Err(unexpected_result(EnhanceKind::ImproveExperience, &other)),
    };
    session.merge_improved_bullets(&exp_id, &result)?;
    info!("Improved bullets of experience {} in resume {}", exp_id, id);

    Ok(Json(MergedResponse {
        result,
        content: session.into_content(),
    }))
}

/// POST /api/v1/resumes/:id/ai/skills
pub async fn handle_suggest_skills(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<MergedResponse<SkillSuggestions>>, AppError> {
    let _permit = state.actions.begin(id, EnhanceKind::SuggestSkills)?;
    let mut session = open_session(&state, params.user_id, id).await?;
    let request = EnhanceRequest::skills_for(session.content())?;

    let result = match run_enhancement(state.ai.as_ref(), &request).await? {
        EnhanceResult::Skills(skills) => skills,
        other => return Err(unexpected_result(EnhanceKind::SuggestSkills, &other)),
    };
    let added = session.merge_suggested_skills(&result);
    info!("Added {} suggested skills to resume {}", added, id);

    Ok(Json(MergedResponse {
        result,
        content: session.into_content(),
    }))
}

/// POST /api/v1/resumes/:id/ai/analyze
pub async fn handle_analyze(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<MergedResponse<AnalysisResult>>, AppError> {
    let _permit = state.actions.begin(id, EnhanceKind::AnalyzeResume)?;
    let session = open_session(&state, params.user_id, id).await?;
    let request = EnhanceRequest::analysis_for(session.content())?;

    let result = match run_enhancement(state.ai.as_ref(), &request).await? {
        EnhanceResult::Analysis(analysis) => analysis,
        other => return Err(unexpected_result(EnhanceKind::AnalyzeResume, &other)),
    };
    info!("Analyzed resume {}: score {}", id, result.score);

    Ok(Json(MergedResponse {
        result,
        content: session.into_content(),
    }))
}

/// POST /api/v1/resumes/:id/ai/optimize
pub async fn handle_optimize(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<UserIdQuery>,
    Json(req): Json<OptimizeRequest>,
) -> Result<Json<OptimizeResponse>, AppError> {
    let _permit = state.actions.begin(id, EnhanceKind::OptimizeForJd)?;
    let mut session = open_session(&state, params.user_id, id).await?;
    let request = EnhanceRequest::optimize_for(session.content(), &req.job_description)?;

    let result = match run_enhancement(state.ai.as_ref(), &request).await? {
        EnhanceResult::Optimization(optimization) => optimization,
        other => return Err(unexpected_result(EnhanceKind::OptimizeForJd, &other)),
    };
    let sections = session.propose_optimizations(&result);
    session.apply_optimizations(&sections);
    info!("Proposed {} optimized sections for resume {}", sections.len(), id);

    Ok(Json(OptimizeResponse {
        result,
        sections,
        content: session.into_content(),
    }))
}

fn unexpected_result(kind: EnhanceKind, result: &EnhanceResult) -> AppError {
    AppError::Internal(anyhow::anyhow!(
        "{} produced an unexpected result: {result:?}",
        kind.as_str()
    ))
}
