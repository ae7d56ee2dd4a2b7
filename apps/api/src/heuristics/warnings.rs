//! Content warnings: fixed keyword/regex heuristics over `ResumeContent`.
//!
//! The engine returns the full ordered list. Truncating it for display is the
//! caller's business.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::models::resume::{ResumeContent, ResumeSection};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WarningKind {
    WeakWords,
    LongText,
    MissingMetrics,
    Length,
    MissingSection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Info,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentWarning {
    /// Stable id derived from the location, e.g. `exp-0-bullet-2-weak`.
    pub id: String,
    #[serde(rename = "type")]
    pub kind: WarningKind,
    pub severity: Severity,
    pub message: String,
    pub section: ResumeSection,
    pub fixable: bool,
}

/// The (warning type, section) pair a fixable warning hands to the AI-fix action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixAction {
    #[serde(rename = "type")]
    pub kind: WarningKind,
    pub section: ResumeSection,
}

impl ContentWarning {
    pub fn fix_action(&self) -> Option<FixAction> {
        self.fixable.then_some(FixAction {
            kind: self.kind,
            section: self.section,
        })
    }
}

const WEAK_PHRASES: &[&str] = &[
    "helped",
    "assisted",
    "worked on",
    "responsible for",
    "duties included",
    "was in charge of",
    "participated in",
];

const MIN_SUMMARY_CHARS: usize = 50;
const MAX_SUMMARY_CHARS: usize = 400;
/// Bullets at or below this length are never flagged for missing metrics.
const METRICS_MIN_BULLET_CHARS: usize = 20;
const MAX_BULLET_CHARS: usize = 150;
const MIN_SKILLS: usize = 5;
const MAX_TOTAL_BULLETS: usize = 15;

lazy_static! {
    static ref METRICS_PATTERN: Regex = Regex::new(
        r"(?i)\d+%?|\$\d+|#\d+|\d+\+?\s*(users|customers|clients|projects|sales|revenue)"
    )
    .expect("metrics pattern is valid");
}

/// Weak phrases present in `text`, in list order. Case-insensitive substring match.
pub fn detect_weak_phrases(text: &str) -> Vec<&'static str> {
    let lower = text.to_lowercase();
    WEAK_PHRASES
        .iter()
        .copied()
        .filter(|phrase| lower.contains(phrase))
        .collect()
}

pub fn has_quantification(text: &str) -> bool {
    METRICS_PATTERN.is_match(text)
}

pub fn compute_warnings(content: &ResumeContent) -> Vec<ContentWarning> {
    let mut warnings = Vec::new();

    let summary_len = content.summary.chars().count();
    if summary_len < MIN_SUMMARY_CHARS {
        warnings.push(ContentWarning {
            id: "summary-missing".to_string(),
            kind: WarningKind::MissingSection,
            severity: Severity::Warning,
            message: "Professional summary is missing or too short".to_string(),
            section: ResumeSection::Summary,
            fixable: true,
        });
    } else if summary_len > MAX_SUMMARY_CHARS {
        warnings.push(ContentWarning {
            id: "summary-long".to_string(),
            kind: WarningKind::LongText,
            severity: Severity::Info,
            message: "Summary is quite long. Consider keeping it under 3-4 sentences.".to_string(),
            section: ResumeSection::Summary,
            fixable: false,
        });
    }

    for (exp_idx, exp) in content.experience.iter().enumerate() {
        for (bullet_idx, bullet) in exp.description.iter().enumerate() {
            if bullet.trim().is_empty() {
                continue;
            }
            let location = format!("exp-{exp_idx}-bullet-{bullet_idx}");
            let bullet_len = bullet.chars().count();

            let weak = detect_weak_phrases(bullet);
            if !weak.is_empty() {
                warnings.push(ContentWarning {
                    id: format!("{location}-weak"),
                    kind: WarningKind::WeakWords,
                    severity: Severity::Warning,
                    message: format!("\"{}\" uses weak words: {}", exp.position, weak.join(", ")),
                    section: ResumeSection::Experience,
                    fixable: true,
                });
            }

            if bullet_len > METRICS_MIN_BULLET_CHARS && !has_quantification(bullet) {
                warnings.push(ContentWarning {
                    id: format!("{location}-metrics"),
                    kind: WarningKind::MissingMetrics,
                    severity: Severity::Info,
                    message: format!("\"{}\" bullet lacks quantified achievements", exp.position),
                    section: ResumeSection::Experience,
                    fixable: true,
                });
            }

            if bullet_len > MAX_BULLET_CHARS {
                warnings.push(ContentWarning {
                    id: format!("{location}-long"),
                    kind: WarningKind::LongText,
                    severity: Severity::Info,
                    message: format!("\"{}\" has a very long bullet point", exp.position),
                    section: ResumeSection::Experience,
                    fixable: false,
                });
            }
        }
    }

    if content.skills.len() < MIN_SKILLS {
        warnings.push(ContentWarning {
            id: "skills-few".to_string(),
            kind: WarningKind::MissingSection,
            severity: Severity::Warning,
            message: "Consider adding more skills (at least 5-8 recommended)".to_string(),
            section: ResumeSection::Skills,
            fixable: true,
        });
    }

    if content.education.is_empty() {
        warnings.push(ContentWarning {
            id: "education-missing".to_string(),
            kind: WarningKind::MissingSection,
            severity: Severity::Info,
            message: "No education listed. Add if applicable.".to_string(),
            section: ResumeSection::Education,
            fixable: false,
        });
    }

    let total_bullets: usize = content
        .experience
        .iter()
        .map(|e| e.filled_bullets().count())
        .sum();
    if total_bullets > MAX_TOTAL_BULLETS {
        warnings.push(ContentWarning {
            id: "too-long".to_string(),
            kind: WarningKind::Length,
            severity: Severity::Info,
            message: "Resume may be too long. Focus on most relevant experience.".to_string(),
            section: ResumeSection::Experience,
            fixable: false,
        });
    }

    warnings
}
