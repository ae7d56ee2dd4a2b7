//! Persistence collaborator for resume records, scoped to the owning user.

use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::resume::{Resume, ResumeContent, ResumeRow};

#[async_trait]
pub trait ResumeStore: Send + Sync {
    /// Most recently updated first.
    async fn list(&self, owner: Uuid) -> Result<Vec<Resume>, AppError>;

    async fn get(&self, owner: Uuid, id: Uuid) -> Result<Resume, AppError>;

    async fn insert(
        &self,
        owner: Uuid,
        title: &str,
        content: &ResumeContent,
    ) -> Result<Resume, AppError>;

    /// Overwrites title and content and bumps `updated_at`.
    async fn update(
        &self,
        owner: Uuid,
        id: Uuid,
        title: &str,
        content: &ResumeContent,
    ) -> Result<Resume, AppError>;

    async fn delete(&self, owner: Uuid, id: Uuid) -> Result<(), AppError>;
}

pub(crate) fn resume_not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Resume {id} not found"))
}

/// `ResumeStore` over the `resumes` table. Content lives in a jsonb column.
#[derive(Clone)]
pub struct PgResumeStore {
    pool: PgPool,
}

impl PgResumeStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ResumeStore for PgResumeStore {
    async fn list(&self, owner: Uuid) -> Result<Vec<Resume>, AppError> {
        let rows = sqlx::query_as::<_, ResumeRow>(
            "SELECT * FROM resumes WHERE user_id = $1 ORDER BY updated_at DESC",
        )
        .bind(owner)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(Resume::from).collect())
    }

    async fn get(&self, owner: Uuid, id: Uuid) -> Result<Resume, AppError> {
        sqlx::query_as::<_, ResumeRow>("SELECT * FROM resumes WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(owner)
            .fetch_optional(&self.pool)
            .await?
            .map(Resume::from)
            .ok_or_else(|| resume_not_found(id))
    }

    async fn insert(
        &self,
        owner: Uuid,
        title: &str,
        content: &ResumeContent,
    ) -> Result<Resume, AppError> {
        let row = sqlx::query_as::<_, ResumeRow>(
            r#"
            INSERT INTO resumes (id, user_id, title, content)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(owner)
        .bind(title)
        .bind(Json(content))
        .fetch_one(&self.pool)
        .await?;
        Ok(row.into())
    }

    async fn update(
        &self,
        owner: Uuid,
        id: Uuid,
        title: &str,
        content: &ResumeContent,
    ) -> Result<Resume, AppError> {
        sqlx::query_as::<_, ResumeRow>(
            r#"
            UPDATE resumes
            SET title = $3, content = $4, updated_at = now()
            WHERE id = $1 AND user_id = $2
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(owner)
        .bind(title)
        .bind(Json(content))
        .fetch_optional(&self.pool)
        .await?
        .map(Resume::from)
        .ok_or_else(|| resume_not_found(id))
    }

    async fn delete(&self, owner: Uuid, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM resumes WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(owner)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(resume_not_found(id));
        }
        Ok(())
    }
}
