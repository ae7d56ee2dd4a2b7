use axum::{
    extract::{Path, Query, State},
    response::Html,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::render::document::{build_document, RenderedDocument};
use crate::render::export::ExportedFile;
use crate::render::template::{RenderConfig, ResumeFont, Template};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct RenderQuery {
    pub user_id: Uuid,
    pub template: Option<String>,
    pub font: Option<String>,
}

impl RenderQuery {
    fn config(&self, defaults: RenderConfig) -> Result<RenderConfig, AppError> {
        let template = self
            .template
            .as_deref()
            .map(str::parse::<Template>)
            .transpose()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        let font = self
            .font
            .as_deref()
            .map(str::parse::<ResumeFont>)
            .transpose()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        Ok(defaults.with_overrides(template, font))
    }
}

async fn render(state: &AppState, id: Uuid, query: &RenderQuery) -> Result<RenderedDocument, AppError> {
    let config = query.config(state.render_defaults)?;
    let resume = state.store.get(query.user_id, id).await?;
    Ok(build_document(&resume.content, &resume.title, &config))
}

/// GET /api/v1/resumes/:id/preview
pub async fn handle_preview(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<RenderQuery>,
) -> Result<Json<RenderedDocument>, AppError> {
    Ok(Json(render(&state, id, &query).await?))
}

/// GET /api/v1/resumes/:id/preview.html
pub async fn handle_preview_html(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<RenderQuery>,
) -> Result<Html<String>, AppError> {
    Ok(Html(render(&state, id, &query).await?.to_html()))
}

/// POST /api/v1/resumes/:id/export
pub async fn handle_export(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<RenderQuery>,
) -> Result<Json<ExportedFile>, AppError> {
    let document = render(&state, id, &query).await?;
    Ok(Json(state.exporter.export(id, &document).await?))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(template: Option<&str>, font: Option<&str>) -> RenderQuery {
        RenderQuery {
            user_id: Uuid::nil(),
            template: template.map(str::to_string),
            font: font.map(str::to_string),
        }
    }

    #[test]
    fn test_query_overrides_defaults() {
        let config = query(Some("minimal"), None).config(RenderConfig::default()).unwrap();
        assert_eq!(config.template, Template::Minimal);
        assert_eq!(config.font, ResumeFont::Inter);
    }

    #[test]
    fn test_unknown_font_is_validation_error() {
        let err = query(None, Some("papyrus")).config(RenderConfig::default()).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
