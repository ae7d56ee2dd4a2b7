// Template renderer: (content, RenderConfig) -> RenderedDocument, plus HTML
// markup and the export collaborator that stores it.

pub mod document;
pub mod export;
pub mod handlers;
pub mod html;
pub mod template;
