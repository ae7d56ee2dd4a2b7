use serde::{Deserialize, Serialize};

use crate::models::resume::{ResumeContent, ResumeSection};

/// Summaries at or below this many characters do not complete the summary step.
const MIN_SUMMARY_CHARS: usize = 20;
const MIN_SKILLS: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressStep {
    pub id: ResumeSection,
    pub label: String,
    pub completed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressReport {
    pub completed: usize,
    pub total: usize,
    /// round(completed / total * 100)
    pub percent: u8,
    pub steps: Vec<ProgressStep>,
}

type StepCheck = fn(&ResumeContent) -> bool;

/// Completeness checks in display order. Each is independent of the others.
const STEPS: &[(ResumeSection, &str, StepCheck)] = &[
    (ResumeSection::Personal, "Personal", |c: &ResumeContent| {
        !c.personal_info.full_name.is_empty() && !c.personal_info.email.is_empty()
    }),
    (ResumeSection::Summary, "Summary", |c: &ResumeContent| {
        !c.summary.is_empty() && c.summary.chars().count() > MIN_SUMMARY_CHARS
    }),
    (ResumeSection::Experience, "Experience", |c: &ResumeContent| !c.experience.is_empty()),
    (ResumeSection::Education, "Education", |c: &ResumeContent| !c.education.is_empty()),
    (ResumeSection::Projects, "Projects", |c: &ResumeContent| !c.projects.is_empty()),
    (ResumeSection::Skills, "Skills", |c: &ResumeContent| c.skills.len() >= MIN_SKILLS),
];

pub fn compute_progress(content: &ResumeContent) -> ProgressReport {
    let steps: Vec<ProgressStep> = STEPS
        .iter()
        .map(|(id, label, check)| ProgressStep {
            id: *id,
            label: label.to_string(),
            completed: check(content),
        })
        .collect();

    let total = steps.len();
    let completed = steps.iter().filter(|s| s.completed).count();
    let percent = ((completed as f64 / total as f64) * 100.0).round() as u8;

    ProgressReport {
        completed,
        total,
        percent,
        steps,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{Education, Experience, PersonalInfo, Project};

    fn complete_content() -> ResumeContent {
        ResumeContent {
            personal_info: PersonalInfo {
                full_name: "Ada Lovelace".to_string(),
                email: "ada@example.com".to_string(),
                ..PersonalInfo::default()
            },
            summary: "Analytical engine programmer of note".to_string(),
            education: vec![Education::blank()],
            experience: vec![Experience::blank()],
            projects: vec![Project::blank()],
            skills: vec!["Math".into(), "Poetry".into(), "Engines".into()],
            role: None,
        }
    }

    #[test]
    fn test_empty_content_is_zero_percent() {
        let report = compute_progress(&ResumeContent::default());
        assert_eq!(report.completed, 0);
        assert_eq!(report.total, 6);
        assert_eq!(report.percent, 0);
        assert!(report.steps.iter().all(|s| !s.completed));
    }

    #[test]
    fn test_complete_content_is_hundred_percent() {
        let report = compute_progress(&complete_content());
        assert_eq!(report.completed, 6);
        assert_eq!(report.percent, 100);
    }

    #[test]
    fn test_step_order_is_fixed() {
        let ids: Vec<_> = compute_progress(&ResumeContent::default())
            .steps
            .into_iter()
            .map(|s| s.id)
            .collect();
        assert_eq!(
            ids,
            vec![
                ResumeSection::Personal,
                ResumeSection::Summary,
                ResumeSection::Experience,
                ResumeSection::Education,
                ResumeSection::Projects,
                ResumeSection::Skills,
            ]
        );
    }

    #[test]
    fn test_personal_requires_name_and_email() {
        let mut content = ResumeContent::default();
        content.personal_info.full_name = "Ada".to_string();
        assert!(!compute_progress(&content).steps[0].completed);
        content.personal_info.email = "ada@example.com".to_string();
        assert!(compute_progress(&content).steps[0].completed);
    }

    #[test]
    fn test_summary_of_exactly_twenty_chars_is_incomplete() {
        let mut content = ResumeContent::default();
        content.summary = "a".repeat(20);
        assert!(!compute_progress(&content).steps[1].completed);
        content.summary = "a".repeat(21);
        assert!(compute_progress(&content).steps[1].completed);
    }

    #[test]
    fn test_two_skills_is_incomplete() {
        let mut content = complete_content();
        content.skills.pop();
        let report = compute_progress(&content);
        assert!(!report.steps[5].completed);
        assert_eq!(report.completed, 5);
        assert_eq!(report.percent, 83);
    }

    #[test]
    fn test_one_of_six_rounds_to_seventeen() {
        let mut content = ResumeContent::default();
        content.projects.push(Project::blank());
        assert_eq!(compute_progress(&content).percent, 17);
    }
}
