//! Test-only fakes for the store, text-generation and export collaborators.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::editor::guard::ActionGuard;
use crate::errors::AppError;
use crate::llm_client::{LlmError, TextGenerator};
use crate::models::resume::{Resume, ResumeContent, UNTITLED_RESUME};
use crate::render::document::RenderedDocument;
use crate::render::export::{export_target, DocumentExporter, ExportedFile};
use crate::render::template::RenderConfig;
use crate::state::AppState;
use crate::store::{resume_not_found, ResumeStore};

pub fn sample_resume() -> Resume {
    let now = Utc::now();
    Resume {
        id: Uuid::new_v4(),
        user_id: Uuid::new_v4(),
        title: UNTITLED_RESUME.to_string(),
        content: ResumeContent::default(),
        created_at: now,
        updated_at: now,
    }
}

#[derive(Default)]
pub struct InMemoryResumeStore {
    resumes: Mutex<Vec<Resume>>,
}

impl InMemoryResumeStore {
    pub fn seed(&self, resume: Resume) -> Resume {
        self.resumes.lock().unwrap().push(resume.clone());
        resume
    }
}

#[async_trait]
impl ResumeStore for InMemoryResumeStore {
    async fn list(&self, owner: Uuid) -> Result<Vec<Resume>, AppError> {
        let mut owned: Vec<Resume> = self
            .resumes
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.user_id == owner)
            .cloned()
            .collect();
        owned.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        Ok(owned)
    }

    async fn get(&self, owner: Uuid, id: Uuid) -> Result<Resume, AppError> {
        self.resumes
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.id == id && r.user_id == owner)
            .cloned()
            .ok_or_else(|| resume_not_found(id))
    }

    async fn insert(
        &self,
        owner: Uuid,
        title: &str,
        content: &ResumeContent,
    ) -> Result<Resume, AppError> {
        let now = Utc::now();
        Ok(self.seed(Resume {
            id: Uuid::new_v4(),
            user_id: owner,
            title: title.to_string(),
            content: content.clone(),
            created_at: now,
            updated_at: now,
        }))
    }

    async fn update(
        &self,
        owner: Uuid,
        id: Uuid,
        title: &str,
        content: &ResumeContent,
    ) -> Result<Resume, AppError> {
        let mut resumes = self.resumes.lock().unwrap();
        let resume = resumes
            .iter_mut()
            .find(|r| r.id == id && r.user_id == owner)
            .ok_or_else(|| resume_not_found(id))?;
        resume.title = title.to_string();
        resume.content = content.clone();
        resume.updated_at = Utc::now();
        Ok(resume.clone())
    }

    async fn delete(&self, owner: Uuid, id: Uuid) -> Result<(), AppError> {
        let mut resumes = self.resumes.lock().unwrap();
        let before = resumes.len();
        resumes.retain(|r| !(r.id == id && r.user_id == owner));
        if resumes.len() == before {
            return Err(resume_not_found(id));
        }
        Ok(())
    }
}

enum Script {
    Reply(String),
    FailWithStatus(u16),
}

/// Returns the same scripted answer to every call and records the prompts.
pub struct ScriptedGenerator {
    script: Script,
    calls: Mutex<Vec<(String, String)>>,
}

impl ScriptedGenerator {
    pub fn replying(text: &str) -> Self {
        Self {
            script: Script::Reply(text.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing_with_status(status: u16) -> Self {
        Self {
            script: Script::FailWithStatus(status),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// (system, user) prompt pairs received so far.
    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for ScriptedGenerator {
    async fn complete(&self, system: &str, user: &str) -> Result<String, LlmError> {
        self.calls
            .lock()
            .unwrap()
            .push((system.to_string(), user.to_string()));
        match &self.script {
            Script::Reply(text) => Ok(text.clone()),
            Script::FailWithStatus(status) => Err(LlmError::Api {
                status: *status,
                message: "scripted failure".to_string(),
            }),
        }
    }
}

/// Records exported documents instead of uploading them.
#[derive(Default)]
pub struct MemoryExporter {
    pub exported: Mutex<Vec<(ExportedFile, String)>>,
}

#[async_trait]
impl DocumentExporter for MemoryExporter {
    async fn export(
        &self,
        resume_id: Uuid,
        document: &RenderedDocument,
    ) -> Result<ExportedFile, AppError> {
        let target = export_target(resume_id, document);
        self.exported
            .lock()
            .unwrap()
            .push((target.clone(), document.to_html()));
        Ok(target)
    }
}

pub struct TestApp {
    pub state: AppState,
    pub store: Arc<InMemoryResumeStore>,
    pub ai: Arc<ScriptedGenerator>,
    pub exporter: Arc<MemoryExporter>,
}

impl TestApp {
    pub fn new(ai: ScriptedGenerator) -> Self {
        let store = Arc::new(InMemoryResumeStore::default());
        let ai = Arc::new(ai);
        let exporter = Arc::new(MemoryExporter::default());
        let state = AppState {
            store: store.clone(),
            ai: ai.clone(),
            exporter: exporter.clone(),
            actions: ActionGuard::new(),
            render_defaults: RenderConfig::default(),
        };
        Self {
            state,
            store,
            ai,
            exporter,
        }
    }
}
