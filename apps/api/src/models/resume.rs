use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

/// Title given to every freshly created resume.
pub const UNTITLED_RESUME: &str = "Untitled Resume";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalInfo {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub linkedin: String,
    pub location: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Education {
    pub id: String,
    pub institution: String,
    pub degree: String,
    pub field: String,
    pub start_date: String,
    pub end_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gpa: Option<String>,
}

impl Education {
    pub fn blank() -> Self {
        Self {
            id: new_item_id(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Experience {
    pub id: String,
    pub company: String,
    pub position: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    /// When set, `end_date` is ignored and "Present" is displayed instead.
    pub current: bool,
    /// Bullets in display order. Blank strings are kept while the user types.
    pub description: Vec<String>,
}

impl Experience {
    /// A new entry starts with a single empty bullet ready for input.
    pub fn blank() -> Self {
        Self {
            id: new_item_id(),
            description: vec![String::new()],
            ..Self::default()
        }
    }

    /// Bullets with blank (whitespace-only) lines removed.
    pub fn filled_bullets(&self) -> impl Iterator<Item = &str> {
        self.description
            .iter()
            .map(String::as_str)
            .filter(|b| !b.trim().is_empty())
    }

    /// End date as displayed: "Present" for current roles.
    pub fn display_end_date(&self) -> &str {
        if self.current {
            "Present"
        } else {
            &self.end_date
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Unique, in order of addition.
    pub technologies: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl Project {
    pub fn blank() -> Self {
        Self {
            id: new_item_id(),
            ..Self::default()
        }
    }
}

/// The root entity read by every heuristic and renderer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResumeContent {
    pub personal_info: PersonalInfo,
    pub summary: String,
    pub education: Vec<Education>,
    pub experience: Vec<Experience>,
    pub projects: Vec<Project>,
    /// Unique, in order of addition.
    pub skills: Vec<String>,
    /// Target role picked when the resume was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<ResumeRole>,
}

impl ResumeContent {
    /// Starting content for a new resume: everything blank except the
    /// optional prefilled email and target role.
    pub fn starter(email: Option<String>, role: Option<ResumeRole>) -> Self {
        Self {
            personal_info: PersonalInfo {
                email: email.unwrap_or_default(),
                ..PersonalInfo::default()
            },
            role,
            ..Self::default()
        }
    }

    /// Position of the most recent (first listed) experience entry, if filled in.
    pub fn latest_position(&self) -> Option<&str> {
        self.experience
            .first()
            .map(|e| e.position.as_str())
            .filter(|p| !p.trim().is_empty())
    }
}

/// The content sections of a resume, as named by progress steps and warnings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResumeSection {
    Personal,
    Summary,
    Experience,
    Education,
    Projects,
    Skills,
}

/// Target role chosen at creation time. Carries suggested keywords.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResumeRole {
    Frontend,
    Backend,
    Fullstack,
    DataAnalyst,
    Fresher,
    #[default]
    General,
}

impl ResumeRole {
    pub const ALL: [ResumeRole; 6] = [
        ResumeRole::Frontend,
        ResumeRole::Backend,
        ResumeRole::Fullstack,
        ResumeRole::DataAnalyst,
        ResumeRole::Fresher,
        ResumeRole::General,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ResumeRole::Frontend => "Frontend Developer",
            ResumeRole::Backend => "Backend Developer",
            ResumeRole::Fullstack => "Full Stack Developer",
            ResumeRole::DataAnalyst => "Data Analyst",
            ResumeRole::Fresher => "Fresher / Student",
            ResumeRole::General => "General / Other",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ResumeRole::Frontend => "React, Vue, Angular, UI/UX",
            ResumeRole::Backend => "APIs, Databases, Server-side",
            ResumeRole::Fullstack => "End-to-end development",
            ResumeRole::DataAnalyst => "Analytics, SQL, Visualization",
            ResumeRole::Fresher => "Entry-level, Internships",
            ResumeRole::General => "Custom role, flexible format",
        }
    }

    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            ResumeRole::Frontend => &["React", "TypeScript", "CSS", "JavaScript", "Vue.js", "Angular"],
            ResumeRole::Backend => &["Node.js", "Python", "Java", "SQL", "REST APIs", "Docker"],
            ResumeRole::Fullstack => &["React", "Node.js", "PostgreSQL", "TypeScript", "AWS", "Docker"],
            ResumeRole::DataAnalyst => &["Python", "SQL", "Tableau", "Excel", "Power BI", "Statistics"],
            ResumeRole::Fresher => &["Problem Solving", "Quick Learner", "Team Player", "Communication"],
            ResumeRole::General => &[],
        }
    }
}

/// Persisted envelope around `ResumeContent`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resume {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub content: ResumeContent,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, FromRow)]
pub struct ResumeRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub content: Json<ResumeContent>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ResumeRow> for Resume {
    fn from(row: ResumeRow) -> Self {
        Self {
            id: row.id,
            user_id: row.user_id,
            title: row.title,
            content: row.content.0,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

fn new_item_id() -> String {
    Uuid::new_v4().to_string()
}
