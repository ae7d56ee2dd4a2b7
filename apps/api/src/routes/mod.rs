pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::editor::handlers as editor;
use crate::enhance::handlers as enhance;
use crate::heuristics::handlers as heuristics;
use crate::render::handlers as render;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/roles", get(editor::handle_list_roles))
        // Resumes
        .route(
            "/api/v1/resumes",
            get(editor::handle_list_resumes).post(editor::handle_create_resume),
        )
        .route(
            "/api/v1/resumes/:id",
            get(editor::handle_get_resume)
                .put(editor::handle_save_resume)
                .patch(editor::handle_patch_resume)
                .delete(editor::handle_delete_resume),
        )
        // Heuristics
        .route(
            "/api/v1/resumes/:id/insights",
            get(heuristics::handle_resume_insights),
        )
        .route("/api/v1/insights", post(heuristics::handle_content_insights))
        // Rendering
        .route("/api/v1/resumes/:id/preview", get(render::handle_preview))
        .route(
            "/api/v1/resumes/:id/preview.html",
            get(render::handle_preview_html),
        )
        .route("/api/v1/resumes/:id/export", post(render::handle_export))
        // AI
        .route("/api/v1/ai/enhance", post(enhance::handle_enhance))
        .route(
            "/api/v1/resumes/:id/ai/summary",
            post(enhance::handle_generate_summary),
        )
        .route(
            "/api/v1/resumes/:id/ai/experience/:exp_id",
            post(enhance::handle_improve_experience),
        )
        .route(
            "/api/v1/resumes/:id/ai/skills",
            post(enhance::handle_suggest_skills),
        )
        .route("/api/v1/resumes/:id/ai/analyze", post(enhance::handle_analyze))
        .route(
            "/api/v1/resumes/:id/ai/optimize",
            post(enhance::handle_optimize),
        )
        .with_state(state)
}
