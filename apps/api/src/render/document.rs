//! Maps resume content plus a `RenderConfig` to a template-neutral document.
//!
//! Section inclusion and order are identical for every template; templates
//! only change headings and separators.

use serde::Serialize;

use crate::models::resume::{Education, Experience, PersonalInfo, Project, ResumeContent};
use crate::render::template::{RenderConfig, ResumeFont, Template};

const NAME_PLACEHOLDER: &str = "Your Name";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    Header,
    Summary,
    Experience,
    Projects,
    Education,
    Skills,
}

impl SectionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionKind::Header => "header",
            SectionKind::Summary => "summary",
            SectionKind::Experience => "experience",
            SectionKind::Projects => "projects",
            SectionKind::Education => "education",
            SectionKind::Skills => "skills",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedDocument {
    pub title: String,
    pub template: Template,
    pub font: ResumeFont,
    pub font_stack: &'static str,
    pub sections: Vec<RenderedSection>,
}

impl RenderedDocument {
    pub fn has_section(&self, kind: SectionKind) -> bool {
        self.sections.iter().any(|s| s.kind == kind)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedSection {
    pub kind: SectionKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading: Option<&'static str>,
    pub body: SectionBody,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SectionBody {
    Header {
        name: String,
        contact: Vec<String>,
        separator: &'static str,
    },
    Text {
        text: String,
    },
    Entries {
        entries: Vec<RenderedEntry>,
    },
    Inline {
        items: Vec<String>,
        separator: &'static str,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedEntry {
    pub title: String,
    pub subtitle: String,
    pub dates: String,
    pub bullets: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

struct Style {
    summary_heading: Option<&'static str>,
    experience_heading: &'static str,
    uppercase_name: bool,
    contact_separator: &'static str,
    detail_separator: &'static str,
    date_separator: &'static str,
    list_separator: &'static str,
}

fn style(template: Template) -> Style {
    match template {
        Template::Modern => Style {
            summary_heading: Some("Professional Summary"),
            experience_heading: "Experience",
            uppercase_name: false,
            contact_separator: " • ",
            detail_separator: " • ",
            date_separator: " - ",
            list_separator: ", ",
        },
        Template::Classic => Style {
            summary_heading: Some("Summary"),
            experience_heading: "Professional Experience",
            uppercase_name: true,
            contact_separator: " | ",
            detail_separator: ", ",
            date_separator: " - ",
            list_separator: " • ",
        },
        Template::Minimal => Style {
            summary_heading: None,
            experience_heading: "Experience",
            uppercase_name: false,
            contact_separator: " · ",
            detail_separator: " · ",
            date_separator: " – ",
            list_separator: " · ",
        },
    }
}

pub fn build_document(content: &ResumeContent, title: &str, config: &RenderConfig) -> RenderedDocument {
    let style = style(config.template);
    let mut sections = vec![header_section(&content.personal_info, &style)];

    if !content.summary.trim().is_empty() {
        sections.push(RenderedSection {
            kind: SectionKind::Summary,
            heading: style.summary_heading,
            body: SectionBody::Text {
                text: content.summary.clone(),
            },
        });
    }

    if !content.experience.is_empty() {
        sections.push(entries_section(
            SectionKind::Experience,
            style.experience_heading,
            content.experience.iter().map(|e| experience_entry(e, &style)).collect(),
        ));
    }

    if !content.projects.is_empty() {
        sections.push(entries_section(
            SectionKind::Projects,
            "Projects",
            content.projects.iter().map(|p| project_entry(p, config.template, &style)).collect(),
        ));
    }

    if !content.education.is_empty() {
        sections.push(entries_section(
            SectionKind::Education,
            "Education",
            content.education.iter().map(|e| education_entry(e, config.template, &style)).collect(),
        ));
    }

    if !content.skills.is_empty() {
        sections.push(RenderedSection {
            kind: SectionKind::Skills,
            heading: Some("Skills"),
            body: SectionBody::Inline {
                items: content.skills.clone(),
                separator: style.list_separator,
            },
        });
    }

    RenderedDocument {
        title: title.to_string(),
        template: config.template,
        font: config.font,
        font_stack: config.font.css_stack(),
        sections,
    }
}

fn header_section(info: &PersonalInfo, style: &Style) -> RenderedSection {
    let name = if info.full_name.trim().is_empty() {
        NAME_PLACEHOLDER.to_string()
    } else {
        info.full_name.clone()
    };
    let name = if style.uppercase_name {
        name.to_uppercase()
    } else {
        name
    };
    let contact = [&info.email, &info.phone, &info.linkedin, &info.location]
        .into_iter()
        .filter(|v| !v.trim().is_empty())
        .cloned()
        .collect();

    RenderedSection {
        kind: SectionKind::Header,
        heading: None,
        body: SectionBody::Header {
            name,
            contact,
            separator: style.contact_separator,
        },
    }
}

fn entries_section(kind: SectionKind, heading: &'static str, entries: Vec<RenderedEntry>) -> RenderedSection {
    RenderedSection {
        kind,
        heading: Some(heading),
        body: SectionBody::Entries { entries },
    }
}

fn experience_entry(exp: &Experience, style: &Style) -> RenderedEntry {
    RenderedEntry {
        title: exp.position.clone(),
        subtitle: join_present(&[&exp.company, &exp.location], style.detail_separator),
        dates: date_range(&exp.start_date, exp.display_end_date(), style),
        bullets: exp.filled_bullets().map(str::to_string).collect(),
        detail: None,
        link: None,
    }
}

fn project_entry(project: &Project, template: Template, style: &Style) -> RenderedEntry {
    let detail = if project.technologies.is_empty() {
        None
    } else if template == Template::Minimal {
        Some(project.technologies.join(style.list_separator))
    } else {
        Some(format!("Technologies: {}", project.technologies.join(", ")))
    };
    RenderedEntry {
        title: project.name.clone(),
        subtitle: project.description.clone(),
        dates: String::new(),
        bullets: Vec::new(),
        detail,
        link: project.link.clone().filter(|l| !l.trim().is_empty()),
    }
}

fn education_entry(edu: &Education, template: Template, style: &Style) -> RenderedEntry {
    let field_joiner = match template {
        Template::Minimal => ", ",
        Template::Modern | Template::Classic => " in ",
    };
    let subtitle = join_present(&[&edu.degree, &edu.field], field_joiner);
    let gpa = edu.gpa.as_deref().filter(|g| !g.trim().is_empty());
    let detail = gpa.map(|g| match template {
        Template::Modern => format!("GPA: {g}"),
        Template::Classic => format!("(GPA: {g})"),
        Template::Minimal => g.to_string(),
    });
    RenderedEntry {
        title: edu.institution.clone(),
        subtitle,
        dates: date_range(&edu.start_date, &edu.end_date, style),
        bullets: Vec::new(),
        detail,
        link: None,
    }
}

fn join_present(parts: &[&String], separator: &str) -> String {
    parts
        .iter()
        .filter(|p| !p.trim().is_empty())
        .map(|p| p.as_str())
        .collect::<Vec<_>>()
        .join(separator)
}

fn date_range(start: &str, end: &str, style: &Style) -> String {
    match (start.trim().is_empty(), end.trim().is_empty()) {
        (true, true) => String::new(),
        (false, true) => start.to_string(),
        (true, false) => end.to_string(),
        (false, false) => format!("{start}{}{end}", style.date_separator),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::Education;

    fn config(template: Template) -> RenderConfig {
        RenderConfig {
            template,
            font: ResumeFont::Inter,
        }
    }

    fn sample() -> ResumeContent {
        ResumeContent {
            personal_info: PersonalInfo {
                full_name: "Ada Lovelace".into(),
                email: "ada@example.com".into(),
                location: "London".into(),
                ..PersonalInfo::default()
            },
            summary: "Mathematician.".into(),
            experience: vec![Experience {
                company: "Analytical Engines".into(),
                location: "London".into(),
                position: "Programmer".into(),
                start_date: "1842".into(),
                end_date: "1843".into(),
                description: vec!["Wrote the first program".into(), "  ".into()],
                ..Experience::default()
            }],
            projects: vec![Project {
                name: "Note G".into(),
                technologies: vec!["Punch cards".into(), "Bernoulli".into()],
                ..Project::default()
            }],
            skills: vec!["Math".into(), "Poetry".into()],
            ..ResumeContent::default()
        }
    }

    fn kinds(doc: &RenderedDocument) -> Vec<SectionKind> {
        doc.sections.iter().map(|s| s.kind).collect()
    }

    fn first_entry(doc: &RenderedDocument, kind: SectionKind) -> RenderedEntry {
        let section = doc.sections.iter().find(|s| s.kind == kind).unwrap();
        match &section.body {
            SectionBody::Entries { entries } => entries[0].clone(),
            other => panic!("unexpected body {other:?}"),
        }
    }

    #[test]
    fn test_empty_education_is_omitted_for_every_template() {
        for template in Template::ALL {
            let doc = build_document(&sample(), "CV", &config(template));
            assert!(!doc.has_section(SectionKind::Education), "{template}");
            assert_eq!(
                kinds(&doc),
                vec![
                    SectionKind::Header,
                    SectionKind::Summary,
                    SectionKind::Experience,
                    SectionKind::Projects,
                    SectionKind::Skills,
                ]
            );
        }
    }

    #[test]
    fn test_section_order_is_fixed() {
        let mut content = sample();
        content.education.push(Education {
            institution: "Home".into(),
            ..Education::default()
        });
        let doc = build_document(&content, "CV", &config(Template::Classic));
        assert_eq!(
            kinds(&doc),
            vec![
                SectionKind::Header,
                SectionKind::Summary,
                SectionKind::Experience,
                SectionKind::Projects,
                SectionKind::Education,
                SectionKind::Skills,
            ]
        );
    }

    #[test]
    fn test_empty_content_renders_only_header() {
        for template in Template::ALL {
            let doc = build_document(&ResumeContent::default(), "", &config(template));
            assert_eq!(kinds(&doc), vec![SectionKind::Header]);
        }
        let doc = build_document(&ResumeContent::default(), "", &config(Template::Modern));
        match &doc.sections[0].body {
            SectionBody::Header { name, contact, .. } => {
                assert_eq!(name, "Your Name");
                assert!(contact.is_empty());
            }
            other => panic!("unexpected body {other:?}"),
        }
    }

    #[test]
    fn test_current_experience_renders_present() {
        let mut content = sample();
        content.experience[0].current = true;
        for template in Template::ALL {
            let doc = build_document(&content, "CV", &config(template));
            let entry = first_entry(&doc, SectionKind::Experience);
            assert!(entry.dates.ends_with("Present"), "{template}: {}", entry.dates);
            assert!(!entry.dates.contains("1843"));
        }
    }

    #[test]
    fn test_blank_bullets_are_filtered() {
        let doc = build_document(&sample(), "CV", &config(Template::Modern));
        let entry = first_entry(&doc, SectionKind::Experience);
        assert_eq!(entry.bullets, vec!["Wrote the first program"]);
        assert_eq!(entry.subtitle, "Analytical Engines • London");
    }

    #[test]
    fn test_templates_differ_in_headings_only() {
        let modern = build_document(&sample(), "CV", &config(Template::Modern));
        let classic = build_document(&sample(), "CV", &config(Template::Classic));
        let minimal = build_document(&sample(), "CV", &config(Template::Minimal));
        assert_eq!(modern.sections[1].heading, Some("Professional Summary"));
        assert_eq!(classic.sections[1].heading, Some("Summary"));
        assert_eq!(minimal.sections[1].heading, None);
        assert_eq!(classic.sections[2].heading, Some("Professional Experience"));
        match &classic.sections[0].body {
            SectionBody::Header { name, separator, .. } => {
                assert_eq!(name, "ADA LOVELACE");
                assert_eq!(*separator, " | ");
            }
            other => panic!("unexpected body {other:?}"),
        }
    }

    #[test]
    fn test_project_technologies_detail() {
        let modern = build_document(&sample(), "CV", &config(Template::Modern));
        let minimal = build_document(&sample(), "CV", &config(Template::Minimal));
        assert_eq!(
            first_entry(&modern, SectionKind::Projects).detail.as_deref(),
            Some("Technologies: Punch cards, Bernoulli")
        );
        assert_eq!(
            first_entry(&minimal, SectionKind::Projects).detail.as_deref(),
            Some("Punch cards · Bernoulli")
        );
    }

    #[test]
    fn test_education_gpa_formats() {
        let mut content = sample();
        content.education.push(Education {
            institution: "Cambridge".into(),
            degree: "BA".into(),
            field: "Mathematics".into(),
            gpa: Some("4.0".into()),
            ..Education::default()
        });
        let modern = build_document(&content, "CV", &config(Template::Modern));
        let entry = first_entry(&modern, SectionKind::Education);
        assert_eq!(entry.subtitle, "BA in Mathematics");
        assert_eq!(entry.detail.as_deref(), Some("GPA: 4.0"));

        let minimal = build_document(&content, "CV", &config(Template::Minimal));
        assert_eq!(first_entry(&minimal, SectionKind::Education).subtitle, "BA, Mathematics");
    }

    #[test]
    fn test_font_is_carried() {
        let doc = build_document(
            &sample(),
            "CV",
            &RenderConfig {
                template: Template::Modern,
                font: ResumeFont::Merriweather,
            },
        );
        assert_eq!(doc.font_stack, "Merriweather, Georgia, serif");
    }
}
