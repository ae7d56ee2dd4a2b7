//! Export collaborator: hands a rendered document to file storage.

use async_trait::async_trait;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client as S3Client;
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::render::document::RenderedDocument;

pub const HTML_CONTENT_TYPE: &str = "text/html; charset=utf-8";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportedFile {
    /// Storage key, `exports/<resume id>/<slug>.html`.
    pub key: String,
    pub filename: String,
    pub content_type: String,
}

#[async_trait]
pub trait DocumentExporter: Send + Sync {
    async fn export(
        &self,
        resume_id: Uuid,
        document: &RenderedDocument,
    ) -> Result<ExportedFile, AppError>;
}

/// Lowercase ASCII alphanumerics joined by single dashes. Falls back to "resume".
pub fn slug(title: &str) -> String {
    let slug = title
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(str::to_ascii_lowercase)
        .collect::<Vec<_>>()
        .join("-");
    if slug.is_empty() {
        "resume".to_string()
    } else {
        slug
    }
}

pub fn export_target(resume_id: Uuid, document: &RenderedDocument) -> ExportedFile {
    let filename = format!("{}.html", slug(&document.title));
    ExportedFile {
        key: format!("exports/{resume_id}/{filename}"),
        filename,
        content_type: HTML_CONTENT_TYPE.to_string(),
    }
}

/// Uploads the HTML markup to an S3-compatible bucket.
#[derive(Clone)]
pub struct S3Exporter {
    client: S3Client,
    bucket: String,
}

impl S3Exporter {
    pub fn new(client: S3Client, bucket: String) -> Self {
        Self { client, bucket }
    }
}

#[async_trait]
impl DocumentExporter for S3Exporter {
    async fn export(
        &self,
        resume_id: Uuid,
        document: &RenderedDocument,
    ) -> Result<ExportedFile, AppError> {
        let target = export_target(resume_id, document);

        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(&target.key)
            .body(ByteStream::from(document.to_html().into_bytes()))
            .content_type(&target.content_type)
            .send()
            .await
            .map_err(|e| AppError::Export(format!("S3 upload failed: {e}")))?;

        info!("Exported resume {} to s3://{}/{}", resume_id, self.bucket, target.key);
        Ok(target)
    }
}
