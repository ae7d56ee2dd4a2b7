use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown {kind} '{name}'")]
pub struct ParseNameError {
    kind: &'static str,
    name: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Template {
    #[default]
    Modern,
    Classic,
    Minimal,
}

impl Template {
    pub const ALL: [Template; 3] = [Template::Modern, Template::Classic, Template::Minimal];

    pub fn as_str(&self) -> &'static str {
        match self {
            Template::Modern => "modern",
            Template::Classic => "classic",
            Template::Minimal => "minimal",
        }
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Template {
    type Err = ParseNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Template::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseNameError {
                kind: "template",
                name: s.to_string(),
            })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResumeFont {
    #[default]
    Inter,
    Georgia,
    Merriweather,
}

impl ResumeFont {
    pub const ALL: [ResumeFont; 3] = [ResumeFont::Inter, ResumeFont::Georgia, ResumeFont::Merriweather];

    pub fn as_str(&self) -> &'static str {
        match self {
            ResumeFont::Inter => "inter",
            ResumeFont::Georgia => "georgia",
            ResumeFont::Merriweather => "merriweather",
        }
    }

    /// CSS `font-family` value.
    pub fn css_stack(&self) -> &'static str {
        match self {
            ResumeFont::Inter => "Inter, system-ui, sans-serif",
            ResumeFont::Georgia => "Georgia, serif",
            ResumeFont::Merriweather => "Merriweather, Georgia, serif",
        }
    }
}

impl fmt::Display for ResumeFont {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResumeFont {
    type Err = ParseNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ResumeFont::ALL
            .into_iter()
            .find(|f| f.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseNameError {
                kind: "font",
                name: s.to_string(),
            })
    }
}

/// Everything besides content that a render depends on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderConfig {
    pub template: Template,
    pub font: ResumeFont,
}

impl RenderConfig {
    /// Applies per-request overrides on top of these defaults.
    pub fn with_overrides(self, template: Option<Template>, font: Option<ResumeFont>) -> Self {
        Self {
            template: template.unwrap_or(self.template),
            font: font.unwrap_or(self.font),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names() {
        assert_eq!("classic".parse::<Template>(), Ok(Template::Classic));
        assert_eq!(" Minimal ".parse::<Template>(), Ok(Template::Minimal));
        assert_eq!("merriweather".parse::<ResumeFont>(), Ok(ResumeFont::Merriweather));
    }

    #[test]
    fn test_unknown_name_is_error() {
        let err = "fancy".parse::<Template>().unwrap_err();
        assert_eq!(err.to_string(), "unknown template 'fancy'");
        assert!("comic-sans".parse::<ResumeFont>().is_err());
    }

    #[test]
    fn test_font_stacks() {
        assert_eq!(ResumeFont::Inter.css_stack(), "Inter, system-ui, sans-serif");
        assert_eq!(ResumeFont::Georgia.css_stack(), "Georgia, serif");
    }

    #[test]
    fn test_overrides() {
        let defaults = RenderConfig::default();
        assert_eq!(defaults.template, Template::Modern);
        let config = defaults.with_overrides(None, Some(ResumeFont::Georgia));
        assert_eq!(config.template, Template::Modern);
        assert_eq!(config.font, ResumeFont::Georgia);
    }
}
