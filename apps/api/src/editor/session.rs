//! One editing session over a single resume.
//!
//! Holds the canonical content, tracks unsaved changes, and merges AI results
//! back in. Every operation either applies fully or leaves content untouched.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::editor::update::{dedup_preserving_order, push_unique, ContentEdit, ContentUpdate};
use crate::enhance::normalize::{ImprovedExperience, JdOptimization, SkillSuggestions, SummaryResult};
use crate::errors::AppError;
use crate::models::resume::{Resume, ResumeContent};
use crate::store::ResumeStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptimizedSectionId {
    Summary,
    Skills,
}

/// One proposed job-description rewrite, reviewed before it is applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizedSection {
    pub id: OptimizedSectionId,
    pub label: String,
    pub original: String,
    pub optimized: String,
    #[serde(default = "accepted_by_default")]
    pub accepted: bool,
}

fn accepted_by_default() -> bool {
    true
}

pub struct EditorSession {
    resume: Resume,
    dirty: bool,
}

impl EditorSession {
    pub fn open(resume: Resume) -> Self {
        Self {
            resume,
            dirty: false,
        }
    }

    pub fn resume(&self) -> &Resume {
        &self.resume
    }

    pub fn content(&self) -> &ResumeContent {
        &self.resume.content
    }

    pub fn into_content(self) -> ResumeContent {
        self.resume.content
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn replace_content(&mut self, content: ResumeContent) {
        self.resume.content = content;
        self.dirty = true;
    }

    pub fn merge(&mut self, update: ContentUpdate) {
        update.apply(&mut self.resume.content);
        self.dirty = true;
    }

    pub fn rename(&mut self, title: impl Into<String>) {
        self.resume.title = title.into();
        self.dirty = true;
    }

    /// Applies a batch of edits atomically: the first failing edit discards
    /// the whole batch.
    pub fn apply_edits(&mut self, edits: Vec<ContentEdit>) -> Result<(), AppError> {
        let mut working = self.resume.content.clone();
        let mut changed = false;
        for edit in edits {
            changed |= edit.apply(&mut working)?;
        }
        if changed {
            self.resume.content = working;
            self.dirty = true;
        }
        Ok(())
    }

    // ────────────────────────────────────────────────────────────────────
    // AI result merging
    // ────────────────────────────────────────────────────────────────────

    pub fn merge_summary(&mut self, result: &SummaryResult) {
        self.merge(ContentUpdate::Summary(result.summary.clone()));
    }

    /// Replaces the entry's bullets with the non-blank lines of the result.
    pub fn merge_improved_bullets(
        &mut self,
        experience_id: &str,
        result: &ImprovedExperience,
    ) -> Result<(), AppError> {
        let bullets = result.bullets();
        let exp = self
            .resume
            .content
            .experience
            .iter_mut()
            .find(|e| e.id == experience_id)
            .ok_or_else(|| {
                AppError::NotFound(format!("No experience entry with id {experience_id}"))
            })?;
        if bullets.is_empty() {
            return Ok(());
        }
        exp.description = bullets;
        self.dirty = true;
        Ok(())
    }

    /// Appends suggestions not already listed. Returns how many were added.
    pub fn merge_suggested_skills(&mut self, result: &SkillSuggestions) -> usize {
        let added = result
            .skills
            .iter()
            .filter(|skill| push_unique(&mut self.resume.content.skills, skill))
            .count();
        if added > 0 {
            self.dirty = true;
        }
        added
    }

    /// Sections worth reviewing. Empty means no optimizations are needed.
    pub fn propose_optimizations(&self, result: &JdOptimization) -> Vec<OptimizedSection> {
        let content = &self.resume.content;
        let mut sections = Vec::new();

        if !result.summary.is_empty() && result.summary != content.summary {
            sections.push(OptimizedSection {
                id: OptimizedSectionId::Summary,
                label: "Professional Summary".to_string(),
                original: placeholder_if_empty(content.summary.clone(), "No summary"),
                optimized: result.summary.clone(),
                accepted: true,
            });
        }

        if !result.skills.is_empty() {
            sections.push(OptimizedSection {
                id: OptimizedSectionId::Skills,
                label: "Skills".to_string(),
                original: placeholder_if_empty(content.skills.join(", "), "No skills"),
                optimized: result.skills.join(", "),
                accepted: true,
            });
        }

        sections
    }

    /// Applies the accepted sections. Returns how many were applied.
    pub fn apply_optimizations(&mut self, sections: &[OptimizedSection]) -> usize {
        let mut applied = 0;
        for section in sections.iter().filter(|s| s.accepted) {
            match section.id {
                OptimizedSectionId::Summary => {
                    self.merge(ContentUpdate::Summary(section.optimized.clone()));
                }
                OptimizedSectionId::Skills => {
                    let skills = section
                        .optimized
                        .split(", ")
                        .map(str::trim)
                        .filter(|s| !s.is_empty())
                        .map(str::to_string)
                        .collect();
                    self.merge(ContentUpdate::Skills(dedup_preserving_order(skills)));
                }
            }
            applied += 1;
        }
        applied
    }

    /// Persists title and content. On failure the session keeps its state and
    /// stays dirty.
    pub async fn save(&mut self, store: &dyn ResumeStore) -> Result<(), AppError> {
        let saved = store
            .update(
                self.resume.user_id,
                self.resume.id,
                &self.resume.title,
                &self.resume.content,
            )
            .await?;
        info!("Saved resume {}", saved.id);
        self.resume = saved;
        self.dirty = false;
        Ok(())
    }
}

fn placeholder_if_empty(value: String, placeholder: &str) -> String {
    if value.is_empty() {
        placeholder.to_string()
    } else {
        value
    }
}
