//! Typed enhancement requests and their (system, user) prompt pairs.

use serde::{Deserialize, Serialize};

use crate::enhance::prompts::{
    ANALYSIS_PROMPT_TEMPLATE, ANALYSIS_SYSTEM, EXPERIENCE_PROMPT_TEMPLATE, EXPERIENCE_SYSTEM,
    OPTIMIZE_PROMPT_TEMPLATE, OPTIMIZE_SYSTEM, SKILLS_OUTPUT_CONTRACT, SKILLS_PROMPT_TEMPLATE,
    SKILLS_SYSTEM, SUMMARY_PROMPT_TEMPLATE, SUMMARY_SYSTEM,
};
use crate::errors::AppError;
use crate::llm_client::prompts::{JSON_OBJECT_ONLY, RESUME_WRITER_PERSONA};
use crate::models::resume::{Experience, PersonalInfo, ResumeContent};

/// At most this many skills are quoted in a summary request.
const SUMMARY_SKILL_LIMIT: usize = 10;
/// Experience entries quoted in a job-description optimization request.
const OPTIMIZE_EXPERIENCE_LIMIT: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EnhanceKind {
    GenerateSummary,
    ImproveExperience,
    SuggestSkills,
    AnalyzeResume,
    OptimizeForJd,
}

impl EnhanceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EnhanceKind::GenerateSummary => "generate-summary",
            EnhanceKind::ImproveExperience => "improve-experience",
            EnhanceKind::SuggestSkills => "suggest-skills",
            EnhanceKind::AnalyzeResume => "analyze-resume",
            EnhanceKind::OptimizeForJd => "optimize-for-jd",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SummaryContext {
    pub name: String,
    pub position: String,
    pub skills: Vec<String>,
    /// Number of experience entries listed (not calendar years).
    #[serde(rename = "yearsExperience")]
    pub experience_count: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExperienceContext {
    pub position: String,
    pub company: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SkillsContext {
    pub job_role: String,
    pub existing_skills: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnalysisContext {
    pub personal_info: PersonalInfo,
    pub has_summary: bool,
    pub experience_count: usize,
    pub education_count: usize,
    pub skills_count: usize,
    pub has_projects: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OptimizeContext {
    pub current_summary: String,
    pub current_skills: Vec<String>,
    pub current_experience: Vec<Experience>,
}

/// One enhancement request: `{"type": "...", "content": "...", "context": {...}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum EnhanceRequest {
    GenerateSummary {
        #[serde(default)]
        context: SummaryContext,
    },
    ImproveExperience {
        /// Bullets joined by newlines.
        #[serde(default)]
        content: String,
        #[serde(default)]
        context: ExperienceContext,
    },
    SuggestSkills {
        #[serde(default)]
        context: SkillsContext,
    },
    AnalyzeResume {
        /// Whole resume content as JSON text.
        #[serde(default)]
        content: String,
        #[serde(default)]
        context: AnalysisContext,
    },
    OptimizeForJd {
        /// The job description.
        #[serde(default)]
        content: String,
        #[serde(default)]
        context: OptimizeContext,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct PromptPair {
    pub system: String,
    pub user: String,
}

impl EnhanceRequest {
    pub fn kind(&self) -> EnhanceKind {
        match self {
            EnhanceRequest::GenerateSummary { .. } => EnhanceKind::GenerateSummary,
            EnhanceRequest::ImproveExperience { .. } => EnhanceKind::ImproveExperience,
            EnhanceRequest::SuggestSkills { .. } => EnhanceKind::SuggestSkills,
            EnhanceRequest::AnalyzeResume { .. } => EnhanceKind::AnalyzeResume,
            EnhanceRequest::OptimizeForJd { .. } => EnhanceKind::OptimizeForJd,
        }
    }

    /// Rejects requests that cannot produce a useful answer.
    pub fn validate(&self) -> Result<(), AppError> {
        match self {
            EnhanceRequest::ImproveExperience { content, .. } if content.trim().is_empty() => Err(
                AppError::Validation("Please add some bullet points first.".to_string()),
            ),
            EnhanceRequest::SuggestSkills { context } if context.job_role.trim().is_empty() => {
                Err(AppError::Validation(
                    "Add at least one experience with a position to get skill suggestions."
                        .to_string(),
                ))
            }
            EnhanceRequest::OptimizeForJd { content, .. } if content.trim().is_empty() => {
                Err(AppError::Validation(
                    "Please paste a job description to optimize your resume.".to_string(),
                ))
            }
            _ => Ok(()),
        }
    }

    pub fn build_prompts(&self) -> PromptPair {
        match self {
            EnhanceRequest::GenerateSummary { context } => PromptPair {
                system: format!("{RESUME_WRITER_PERSONA} {SUMMARY_SYSTEM}"),
                user: SUMMARY_PROMPT_TEMPLATE
                    .replace("{name}", or_default(&context.name, "Professional"))
                    .replace("{position}", or_default(&context.position, "Professional"))
                    .replace("{skills}", &join_or(&context.skills, "Not specified"))
                    .replace("{experience_count}", &context.experience_count.to_string()),
            },
            EnhanceRequest::ImproveExperience { content, context } => PromptPair {
                system: format!("{RESUME_WRITER_PERSONA} {EXPERIENCE_SYSTEM}"),
                user: EXPERIENCE_PROMPT_TEMPLATE
                    .replace("{position}", or_default(&context.position, "professional"))
                    .replace("{company}", or_default(&context.company, "a company"))
                    .replace("{bullets}", content),
            },
            EnhanceRequest::SuggestSkills { context } => PromptPair {
                system: format!("{SKILLS_SYSTEM}\n{JSON_OBJECT_ONLY} {SKILLS_OUTPUT_CONTRACT}"),
                user: SKILLS_PROMPT_TEMPLATE
                    .replace("{job_role}", &context.job_role)
                    .replace(
                        "{existing_skills}",
                        &join_or(&context.existing_skills, "None listed"),
                    ),
            },
            EnhanceRequest::AnalyzeResume { content, context } => PromptPair {
                system: ANALYSIS_SYSTEM.replace("{json_only}", JSON_OBJECT_ONLY),
                user: ANALYSIS_PROMPT_TEMPLATE
                    .replace(
                        "{full_name}",
                        or_default(&context.personal_info.full_name, "Not provided"),
                    )
                    .replace("{has_summary}", yes_no(context.has_summary))
                    .replace("{experience_count}", &context.experience_count.to_string())
                    .replace("{education_count}", &context.education_count.to_string())
                    .replace("{skills_count}", &context.skills_count.to_string())
                    .replace("{has_projects}", yes_no(context.has_projects))
                    .replace("{content}", content),
            },
            EnhanceRequest::OptimizeForJd { content, context } => {
                let experience: Vec<&Experience> = context
                    .current_experience
                    .iter()
                    .take(OPTIMIZE_EXPERIENCE_LIMIT)
                    .collect();
                let experience_json =
                    serde_json::to_string(&experience).unwrap_or_else(|_| "[]".to_string());
                PromptPair {
                    system: OPTIMIZE_SYSTEM.replace("{json_only}", JSON_OBJECT_ONLY),
                    user: OPTIMIZE_PROMPT_TEMPLATE
                        .replace("{job_description}", content)
                        .replace(
                            "{current_summary}",
                            or_default(&context.current_summary, "No summary"),
                        )
                        .replace(
                            "{current_skills}",
                            &join_or(&context.current_skills, "No skills listed"),
                        )
                        .replace("{current_experience}", &experience_json),
                }
            }
        }
    }

    // ────────────────────────────────────────────────────────────────────
    // Builders from resume content
    // ────────────────────────────────────────────────────────────────────

    pub fn summary_for(content: &ResumeContent) -> Result<Self, AppError> {
        let position = content.latest_position();
        if position.is_none() && content.skills.is_empty() {
            return Err(AppError::Validation(
                "Add your experience or skills to generate a personalized summary.".to_string(),
            ));
        }
        Ok(EnhanceRequest::GenerateSummary {
            context: SummaryContext {
                name: content.personal_info.full_name.clone(),
                position: position.unwrap_or("Professional").to_string(),
                skills: content
                    .skills
                    .iter()
                    .take(SUMMARY_SKILL_LIMIT)
                    .cloned()
                    .collect(),
                experience_count: content.experience.len(),
            },
        })
    }

    pub fn improve_for(experience: &Experience) -> Result<Self, AppError> {
        let request = EnhanceRequest::ImproveExperience {
            content: experience.filled_bullets().collect::<Vec<_>>().join("\n"),
            context: ExperienceContext {
                position: experience.position.clone(),
                company: experience.company.clone(),
            },
        };
        request.validate()?;
        Ok(request)
    }

    pub fn skills_for(content: &ResumeContent) -> Result<Self, AppError> {
        let request = EnhanceRequest::SuggestSkills {
            context: SkillsContext {
                job_role: content.latest_position().unwrap_or_default().to_string(),
                existing_skills: content.skills.clone(),
            },
        };
        request.validate()?;
        Ok(request)
    }

    pub fn analysis_for(content: &ResumeContent) -> Result<Self, AppError> {
        let content_json = serde_json::to_string(content)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to serialize content: {e}")))?;
        Ok(EnhanceRequest::AnalyzeResume {
            content: content_json,
            context: AnalysisContext {
                personal_info: content.personal_info.clone(),
                has_summary: !content.summary.is_empty(),
                experience_count: content.experience.len(),
                education_count: content.education.len(),
                skills_count: content.skills.len(),
                has_projects: !content.projects.is_empty(),
            },
        })
    }

    pub fn optimize_for(content: &ResumeContent, job_description: &str) -> Result<Self, AppError> {
        let request = EnhanceRequest::OptimizeForJd {
            content: job_description.to_string(),
            context: OptimizeContext {
                current_summary: content.summary.clone(),
                current_skills: content.skills.clone(),
                current_experience: content.experience.clone(),
            },
        };
        request.validate()?;
        Ok(request)
    }
}

fn or_default<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.trim().is_empty() {
        fallback
    } else {
        value
    }
}

fn join_or(items: &[String], fallback: &str) -> String {
    if items.is_empty() {
        fallback.to_string()
    } else {
        items.join(", ")
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}
