use std::sync::Arc;

use crate::editor::guard::ActionGuard;
use crate::llm_client::TextGenerator;
use crate::render::export::DocumentExporter;
use crate::render::template::RenderConfig;
use crate::store::ResumeStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ResumeStore>,
    /// Every AI call goes through this; production uses `LlmClient`.
    pub ai: Arc<dyn TextGenerator>,
    pub exporter: Arc<dyn DocumentExporter>,
    pub actions: ActionGuard,
    /// Template and font used when a request does not pick its own.
    pub render_defaults: RenderConfig,
}
