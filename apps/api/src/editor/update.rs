//! Explicit content mutations.
//!
//! `ContentUpdate` replaces one top-level field. `ContentEdit` is a single
//! list-level edit as issued by the section forms.

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::resume::{Education, Experience, PersonalInfo, Project, ResumeContent};

/// Shallow replacement of one top-level content field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "section", content = "value", rename_all = "snake_case")]
pub enum ContentUpdate {
    PersonalInfo(PersonalInfo),
    Summary(String),
    Education(Vec<Education>),
    Experience(Vec<Experience>),
    Projects(Vec<Project>),
    /// Replaces the whole list. Duplicates are dropped, first one wins.
    Skills(Vec<String>),
}

impl ContentUpdate {
    pub fn apply(self, content: &mut ResumeContent) {
        match self {
            ContentUpdate::PersonalInfo(info) => content.personal_info = info,
            ContentUpdate::Summary(summary) => content.summary = summary,
            ContentUpdate::Education(education) => content.education = education,
            ContentUpdate::Experience(experience) => content.experience = experience,
            ContentUpdate::Projects(projects) => content.projects = projects,
            ContentUpdate::Skills(skills) => content.skills = dedup_preserving_order(skills),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EducationField {
    Institution,
    Degree,
    Field,
    StartDate,
    EndDate,
    /// Blank clears it.
    Gpa,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceField {
    Company,
    Position,
    Location,
    StartDate,
    EndDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectField {
    Name,
    Description,
    /// Blank clears it.
    Link,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum ContentEdit {
    AddEducation,
    RemoveEducation { id: String },
    SetEducationField { id: String, field: EducationField, value: String },

    AddExperience,
    RemoveExperience { id: String },
    SetExperienceField { id: String, field: ExperienceField, value: String },
    SetExperienceCurrent { id: String, current: bool },
    AddBullet { experience_id: String },
    UpdateBullet { experience_id: String, index: usize, text: String },
    /// Ignored while the entry has a single bullet left.
    RemoveBullet { experience_id: String, index: usize },

    AddProject,
    RemoveProject { id: String },
    SetProjectField { id: String, field: ProjectField, value: String },
    AddTechnology { project_id: String, technology: String },
    RemoveTechnology { project_id: String, technology: String },

    AddSkill { skill: String },
    RemoveSkill { skill: String },
}

impl ContentEdit {
    /// Applies the edit in place. Returns whether anything changed; ignored
    /// edits (duplicate or blank adds, removing the last bullet) return false.
    ///
    /// Unknown ids and bullet indexes fail with `NotFound` without touching
    /// `content`.
    pub fn apply(self, content: &mut ResumeContent) -> Result<bool, AppError> {
        match self {
            ContentEdit::AddEducation => {
                content.education.push(Education::blank());
                Ok(true)
            }
            ContentEdit::RemoveEducation { id } => {
                let index = position_of(&content.education, &id, |e| &e.id, "education")?;
                content.education.remove(index);
                Ok(true)
            }
            ContentEdit::SetEducationField { id, field, value } => {
                let edu = find_mut(&mut content.education, &id, |e| &e.id, "education")?;
                match field {
                    EducationField::Institution => edu.institution = value,
                    EducationField::Degree => edu.degree = value,
                    EducationField::Field => edu.field = value,
                    EducationField::StartDate => edu.start_date = value,
                    EducationField::EndDate => edu.end_date = value,
                    EducationField::Gpa => edu.gpa = non_blank(value),
                }
                Ok(true)
            }

            ContentEdit::AddExperience => {
                content.experience.push(Experience::blank());
                Ok(true)
            }
            ContentEdit::RemoveExperience { id } => {
                let index = position_of(&content.experience, &id, |e| &e.id, "experience")?;
                content.experience.remove(index);
                Ok(true)
            }
            ContentEdit::SetExperienceField { id, field, value } => {
                let exp = find_mut(&mut content.experience, &id, |e| &e.id, "experience")?;
                match field {
                    ExperienceField::Company => exp.company = value,
                    ExperienceField::Position => exp.position = value,
                    ExperienceField::Location => exp.location = value,
                    ExperienceField::StartDate => exp.start_date = value,
                    ExperienceField::EndDate => exp.end_date = value,
                }
                Ok(true)
            }
            ContentEdit::SetExperienceCurrent { id, current } => {
                find_mut(&mut content.experience, &id, |e| &e.id, "experience")?.current = current;
                Ok(true)
            }
            ContentEdit::AddBullet { experience_id } => {
                find_mut(&mut content.experience, &experience_id, |e| &e.id, "experience")?
                    .description
                    .push(String::new());
                Ok(true)
            }
            ContentEdit::UpdateBullet {
                experience_id,
                index,
                text,
            } => {
                let exp = find_mut(&mut content.experience, &experience_id, |e| &e.id, "experience")?;
                let bullet = exp
                    .description
                    .get_mut(index)
                    .ok_or_else(|| bullet_not_found(index))?;
                *bullet = text;
                Ok(true)
            }
            ContentEdit::RemoveBullet {
                experience_id,
                index,
            } => {
                let exp = find_mut(&mut content.experience, &experience_id, |e| &e.id, "experience")?;
                if index >= exp.description.len() {
                    return Err(bullet_not_found(index));
                }
                if exp.description.len() <= 1 {
                    return Ok(false);
                }
                exp.description.remove(index);
                Ok(true)
            }

            ContentEdit::AddProject => {
                content.projects.push(Project::blank());
                Ok(true)
            }
            ContentEdit::RemoveProject { id } => {
                let index = position_of(&content.projects, &id, |p| &p.id, "project")?;
                content.projects.remove(index);
                Ok(true)
            }
            ContentEdit::SetProjectField { id, field, value } => {
                let project = find_mut(&mut content.projects, &id, |p| &p.id, "project")?;
                match field {
                    ProjectField::Name => project.name = value,
                    ProjectField::Description => project.description = value,
                    ProjectField::Link => project.link = non_blank(value),
                }
                Ok(true)
            }
            ContentEdit::AddTechnology {
                project_id,
                technology,
            } => {
                let project = find_mut(&mut content.projects, &project_id, |p| &p.id, "project")?;
                Ok(push_unique(&mut project.technologies, &technology))
            }
            ContentEdit::RemoveTechnology {
                project_id,
                technology,
            } => {
                let project = find_mut(&mut content.projects, &project_id, |p| &p.id, "project")?;
                Ok(remove_value(&mut project.technologies, &technology))
            }

            ContentEdit::AddSkill { skill } => Ok(push_unique(&mut content.skills, &skill)),
            ContentEdit::RemoveSkill { skill } => Ok(remove_value(&mut content.skills, &skill)),
        }
    }
}

/// Appends the trimmed value unless it is blank or already present.
pub(crate) fn push_unique(list: &mut Vec<String>, value: &str) -> bool {
    let value = value.trim();
    if value.is_empty() || list.iter().any(|existing| existing == value) {
        return false;
    }
    list.push(value.to_string());
    true
}

fn remove_value(list: &mut Vec<String>, value: &str) -> bool {
    let before = list.len();
    list.retain(|existing| existing != value);
    list.len() != before
}

pub(crate) fn dedup_preserving_order(items: Vec<String>) -> Vec<String> {
    let mut unique: Vec<String> = Vec::with_capacity(items.len());
    for item in items {
        if !unique.contains(&item) {
            unique.push(item);
        }
    }
    unique
}

fn non_blank(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

fn position_of<T>(
    items: &[T],
    id: &str,
    id_of: impl Fn(&T) -> &String,
    what: &str,
) -> Result<usize, AppError> {
    items
        .iter()
        .position(|item| id_of(item) == id)
        .ok_or_else(|| AppError::NotFound(format!("No {what} entry with id {id}")))
}

fn find_mut<'a, T>(
    items: &'a mut [T],
    id: &str,
    id_of: impl Fn(&T) -> &String,
    what: &str,
) -> Result<&'a mut T, AppError> {
    let index = position_of(items, id, id_of, what)?;
    Ok(&mut items[index])
}

fn bullet_not_found(index: usize) -> AppError {
    AppError::NotFound(format!("No bullet at index {index}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_experience() -> (ResumeContent, String) {
        let mut content = ResumeContent::default();
        ContentEdit::AddExperience.apply(&mut content).unwrap();
        let id = content.experience[0].id.clone();
        (content, id)
    }

    #[test]
    fn test_update_wire_format() {
        let update: ContentUpdate = serde_json::from_value(serde_json::json!({
            "section": "skills",
            "value": ["Go", "Rust"]
        }))
        .unwrap();
        assert_eq!(update, ContentUpdate::Skills(vec!["Go".into(), "Rust".into()]));

        let update: ContentUpdate = serde_json::from_value(serde_json::json!({
            "section": "personal_info",
            "value": { "fullName": "Ada" }
        }))
        .unwrap();
        match update {
            ContentUpdate::PersonalInfo(info) => assert_eq!(info.full_name, "Ada"),
            other => panic!("unexpected update {other:?}"),
        }
    }

    #[test]
    fn test_skills_update_replaces_whole_list() {
        let mut content = ResumeContent {
            skills: vec!["Java".into(), "Go".into()],
            ..ResumeContent::default()
        };
        ContentUpdate::Skills(vec!["Rust".into(), "Rust".into(), "Go".into()]).apply(&mut content);
        assert_eq!(content.skills, vec!["Rust", "Go"]);
    }

    #[test]
    fn test_summary_update_leaves_other_fields() {
        let mut content = ResumeContent {
            skills: vec!["Go".into()],
            ..ResumeContent::default()
        };
        ContentUpdate::Summary("New".into()).apply(&mut content);
        assert_eq!(content.summary, "New");
        assert_eq!(content.skills, vec!["Go"]);
    }

    #[test]
    fn test_edit_wire_format() {
        let edit: ContentEdit = serde_json::from_value(serde_json::json!({
            "op": "update_bullet",
            "experience_id": "e1",
            "index": 0,
            "text": "Shipped"
        }))
        .unwrap();
        assert_eq!(
            edit,
            ContentEdit::UpdateBullet {
                experience_id: "e1".into(),
                index: 0,
                text: "Shipped".into()
            }
        );
        let edit: ContentEdit =
            serde_json::from_value(serde_json::json!({ "op": "add_project" })).unwrap();
        assert_eq!(edit, ContentEdit::AddProject);
    }

    #[test]
    fn test_add_experience_starts_with_one_blank_bullet() {
        let (content, _) = with_experience();
        assert_eq!(content.experience[0].description, vec![String::new()]);
    }

    #[test]
    fn test_last_bullet_cannot_be_removed() {
        let (mut content, id) = with_experience();
        let changed = ContentEdit::RemoveBullet {
            experience_id: id.clone(),
            index: 0,
        }
        .apply(&mut content)
        .unwrap();
        assert!(!changed);
        assert_eq!(content.experience[0].description.len(), 1);

        ContentEdit::AddBullet {
            experience_id: id.clone(),
        }
        .apply(&mut content)
        .unwrap();
        ContentEdit::UpdateBullet {
            experience_id: id.clone(),
            index: 1,
            text: "Second".into(),
        }
        .apply(&mut content)
        .unwrap();
        assert!(ContentEdit::RemoveBullet {
            experience_id: id,
            index: 0,
        }
        .apply(&mut content)
        .unwrap());
        assert_eq!(content.experience[0].description, vec!["Second"]);
    }

    #[test]
    fn test_unknown_bullet_index_is_not_found() {
        let (mut content, id) = with_experience();
        let err = ContentEdit::UpdateBullet {
            experience_id: id,
            index: 3,
            text: "x".into(),
        }
        .apply(&mut content)
        .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[test]
    fn test_unknown_id_is_not_found_and_untouched() {
        let (mut content, _) = with_experience();
        let before = content.clone();
        let err = ContentEdit::RemoveExperience { id: "nope".into() }
            .apply(&mut content)
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
        assert_eq!(content, before);
    }

    #[test]
    fn test_set_fields() {
        let (mut content, id) = with_experience();
        ContentEdit::SetExperienceField {
            id: id.clone(),
            field: ExperienceField::Position,
            value: "SRE".into(),
        }
        .apply(&mut content)
        .unwrap();
        ContentEdit::SetExperienceCurrent { id, current: true }
            .apply(&mut content)
            .unwrap();
        assert_eq!(content.experience[0].position, "SRE");
        assert!(content.experience[0].current);

        ContentEdit::AddEducation.apply(&mut content).unwrap();
        let edu_id = content.education[0].id.clone();
        ContentEdit::SetEducationField {
            id: edu_id.clone(),
            field: EducationField::Gpa,
            value: "3.9".into(),
        }
        .apply(&mut content)
        .unwrap();
        assert_eq!(content.education[0].gpa.as_deref(), Some("3.9"));
        ContentEdit::SetEducationField {
            id: edu_id,
            field: EducationField::Gpa,
            value: "  ".into(),
        }
        .apply(&mut content)
        .unwrap();
        assert_eq!(content.education[0].gpa, None);
    }

    #[test]
    fn test_technologies_are_trimmed_and_unique() {
        let mut content = ResumeContent::default();
        ContentEdit::AddProject.apply(&mut content).unwrap();
        let id = content.projects[0].id.clone();
        let add = |tech: &str| ContentEdit::AddTechnology {
            project_id: id.clone(),
            technology: tech.to_string(),
        };
        assert!(add(" Rust ").apply(&mut content).unwrap());
        assert!(!add("Rust").apply(&mut content).unwrap());
        assert!(!add("   ").apply(&mut content).unwrap());
        assert!(add("Tokio").apply(&mut content).unwrap());
        assert_eq!(content.projects[0].technologies, vec!["Rust", "Tokio"]);

        assert!(ContentEdit::RemoveTechnology {
            project_id: id.clone(),
            technology: "Rust".into(),
        }
        .apply(&mut content)
        .unwrap());
        assert_eq!(content.projects[0].technologies, vec!["Tokio"]);
    }

    #[test]
    fn test_skill_add_and_remove() {
        let mut content = ResumeContent::default();
        assert!(ContentEdit::AddSkill { skill: "Go".into() }.apply(&mut content).unwrap());
        assert!(!ContentEdit::AddSkill { skill: " Go".into() }.apply(&mut content).unwrap());
        assert!(!ContentEdit::RemoveSkill { skill: "Rust".into() }.apply(&mut content).unwrap());
        assert!(ContentEdit::RemoveSkill { skill: "Go".into() }.apply(&mut content).unwrap());
        assert!(content.skills.is_empty());
    }

    #[test]
    fn test_removed_entries_by_id() {
        let mut content = ResumeContent::default();
        ContentEdit::AddProject.apply(&mut content).unwrap();
        ContentEdit::AddProject.apply(&mut content).unwrap();
        let keep = content.projects[1].id.clone();
        let drop = content.projects[0].id.clone();
        ContentEdit::RemoveProject { id: drop }.apply(&mut content).unwrap();
        assert_eq!(content.projects.len(), 1);
        assert_eq!(content.projects[0].id, keep);
    }
}
