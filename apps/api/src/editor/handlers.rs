use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::editor::session::EditorSession;
use crate::editor::update::{ContentEdit, ContentUpdate};
use crate::errors::AppError;
use crate::models::resume::{Resume, ResumeContent, ResumeRole, UNTITLED_RESUME};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct UserIdQuery {
    pub user_id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct RoleResponse {
    pub id: ResumeRole,
    pub label: &'static str,
    pub description: &'static str,
    pub keywords: &'static [&'static str],
}

#[derive(Debug, Deserialize)]
pub struct CreateResumeRequest {
    pub user_id: Uuid,
    pub role: Option<ResumeRole>,
    /// Prefills the personal info email.
    pub email: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SaveResumeRequest {
    pub title: String,
    pub content: ResumeContent,
}

#[derive(Debug, Deserialize)]
pub struct PatchResumeRequest {
    pub title: Option<String>,
    #[serde(default)]
    pub updates: Vec<ContentUpdate>,
    #[serde(default)]
    pub edits: Vec<ContentEdit>,
}

/// GET /api/v1/roles
pub async fn handle_list_roles() -> Json<Vec<RoleResponse>> {
    Json(
        ResumeRole::ALL
            .iter()
            .map(|role| RoleResponse {
                id: *role,
                label: role.label(),
                description: role.description(),
                keywords: role.keywords(),
            })
            .collect(),
    )
}

/// GET /api/v1/resumes
pub async fn handle_list_resumes(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<Vec<Resume>>, AppError> {
    Ok(Json(state.store.list(params.user_id).await?))
}

/// POST /api/v1/resumes
pub async fn handle_create_resume(
    State(state): State<AppState>,
    Json(req): Json<CreateResumeRequest>,
) -> Result<(StatusCode, Json<Resume>), AppError> {
    let content = ResumeContent::starter(req.email, req.role);
    let resume = state
        .store
        .insert(req.user_id, UNTITLED_RESUME, &content)
        .await?;
    info!("Created resume {} for user {}", resume.id, req.user_id);
    Ok((StatusCode::CREATED, Json(resume)))
}

/// GET /api/v1/resumes/:id
pub async fn handle_get_resume(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<Resume>, AppError> {
    Ok(Json(state.store.get(params.user_id, id).await?))
}

/// PUT /api/v1/resumes/:id
///
/// Explicit save of the whole title and content.
pub async fn handle_save_resume(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<UserIdQuery>,
    Json(req): Json<SaveResumeRequest>,
) -> Result<Json<Resume>, AppError> {
    let mut session = EditorSession::open(state.store.get(params.user_id, id).await?);
    session.rename(req.title);
    session.replace_content(req.content);
    session.save(state.store.as_ref()).await?;
    Ok(Json(session.resume().clone()))
}

/// PATCH /api/v1/resumes/:id
///
/// Applies title, section updates and list edits in order, then saves if
/// anything changed. A failing edit aborts the whole request.
pub async fn handle_patch_resume(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<UserIdQuery>,
    Json(req): Json<PatchResumeRequest>,
) -> Result<Json<Resume>, AppError> {
    let mut session = EditorSession::open(state.store.get(params.user_id, id).await?);

    if let Some(title) = req.title {
        session.rename(title);
    }
    for update in req.updates {
        session.merge(update);
    }
    session.apply_edits(req.edits)?;

    if session.is_dirty() {
        session.save(state.store.as_ref()).await?;
    }
    Ok(Json(session.resume().clone()))
}

/// DELETE /api/v1/resumes/:id
pub async fn handle_delete_resume(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<UserIdQuery>,
) -> Result<StatusCode, AppError> {
    state.store.delete(params.user_id, id).await?;
    info!("Deleted resume {}", id);
    Ok(StatusCode::NO_CONTENT)
}
