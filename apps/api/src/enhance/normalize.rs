//! Turns raw model text into typed enhancement results.
//!
//! Malformed output never fails: every kind has a documented fallback.

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::enhance::json_extract::{string_list, try_parse_json_object};
use crate::enhance::request::EnhanceKind;

const DEFAULT_SCORE: u8 = 50;
/// Fallback skill lines must be shorter than this many characters.
const MAX_SKILL_CHARS: usize = 50;

lazy_static! {
    static ref LIST_MARKER: Regex =
        Regex::new(r"^[-•*\d.)\s]+").expect("list marker pattern is valid");
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryResult {
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImprovedExperience {
    /// Trimmed model text, one bullet per line.
    pub improved: String,
}

impl ImprovedExperience {
    pub fn bullets(&self) -> Vec<String> {
        self.improved
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillSuggestions {
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    /// ATS compatibility score in `0..=100`.
    pub score: u8,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub suggestions: Vec<String>,
    pub label: &'static str,
}

impl AnalysisResult {
    fn new(score: u8, strengths: Vec<String>, weaknesses: Vec<String>, suggestions: Vec<String>) -> Self {
        Self {
            score,
            strengths,
            weaknesses,
            suggestions,
            label: score_label(score),
        }
    }

    fn fallback() -> Self {
        Self::new(
            DEFAULT_SCORE,
            vec!["Resume content detected".to_string()],
            vec!["Analysis parsing failed".to_string()],
            vec!["Please try again".to_string()],
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct JdOptimization {
    pub summary: String,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum EnhanceResult {
    Summary(SummaryResult),
    Experience(ImprovedExperience),
    Skills(SkillSuggestions),
    Analysis(AnalysisResult),
    Optimization(JdOptimization),
}

impl EnhanceResult {
    /// Whether the structured parse failed and a fallback value was produced.
    pub fn is_fallback(&self, raw: &str) -> bool {
        match self {
            EnhanceResult::Summary(_) | EnhanceResult::Experience(_) => false,
            _ => try_parse_json_object(raw).is_none(),
        }
    }
}

pub fn score_label(score: u8) -> &'static str {
    match score {
        80.. => "Excellent",
        60..=79 => "Good",
        40..=59 => "Fair",
        _ => "Needs Work",
    }
}

pub fn normalize_response(kind: EnhanceKind, raw: &str) -> EnhanceResult {
    match kind {
        EnhanceKind::GenerateSummary => EnhanceResult::Summary(SummaryResult {
            summary: raw.trim().to_string(),
        }),
        EnhanceKind::ImproveExperience => EnhanceResult::Experience(ImprovedExperience {
            improved: raw.trim().to_string(),
        }),
        EnhanceKind::SuggestSkills => {
            let skills = match try_parse_json_object(raw) {
                Some(map) => string_list(&map, "skills"),
                None => split_skill_lines(raw),
            };
            EnhanceResult::Skills(SkillSuggestions { skills })
        }
        EnhanceKind::AnalyzeResume => EnhanceResult::Analysis(
            try_parse_json_object(raw)
                .map(|map| parse_analysis(&map))
                .unwrap_or_else(AnalysisResult::fallback),
        ),
        EnhanceKind::OptimizeForJd => EnhanceResult::Optimization(
            try_parse_json_object(raw)
                .map(|map| JdOptimization {
                    summary: map
                        .get("summary")
                        .and_then(Value::as_str)
                        .unwrap_or_default()
                        .to_string(),
                    skills: string_list(&map, "skills"),
                })
                .unwrap_or_default(),
        ),
    }
}

fn parse_analysis(map: &Map<String, Value>) -> AnalysisResult {
    AnalysisResult::new(
        parse_score(map.get("score")),
        string_list(map, "strengths"),
        string_list(map, "weaknesses"),
        string_list(map, "suggestions"),
    )
}

fn parse_score(value: Option<&Value>) -> u8 {
    let number = match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    match number {
        Some(n) if n.is_finite() => n.clamp(0.0, 100.0).round() as u8,
        _ => DEFAULT_SCORE,
    }
}

/// Plain-text skill list: one per line or comma, list markers stripped.
fn split_skill_lines(raw: &str) -> Vec<String> {
    raw.split(['\n', ','])
        .map(|part| LIST_MARKER.replace(part, "").trim().to_string())
        .filter(|skill| {
            let len = skill.chars().count();
            len > 0 && len < MAX_SKILL_CHARS
        })
        .collect()
}
