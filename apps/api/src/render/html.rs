//! Standalone HTML markup for a rendered document.

use std::fmt::Write;

use crate::render::document::{RenderedDocument, RenderedEntry, RenderedSection, SectionBody};

pub(crate) fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

impl RenderedDocument {
    /// One section element per rendered section, each tagged with
    /// `data-section="<kind>"`. All user text is escaped.
    pub fn to_html(&self) -> String {
        let mut html = String::new();
        let _ = write!(
            html,
            "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
             <title>{}</title>\n<style>body {{ font-family: {}; }}</style>\n</head>\n\
             <body class=\"resume template-{}\">\n",
            escape(&self.title),
            self.font_stack,
            self.template.as_str(),
        );
        for section in &self.sections {
            write_section(&mut html, section);
        }
        html.push_str("</body>\n</html>\n");
        html
    }
}

fn write_section(html: &mut String, section: &RenderedSection) {
    let _ = writeln!(html, "<section data-section=\"{}\">", section.kind.as_str());
    if let Some(heading) = section.heading {
        let _ = writeln!(html, "<h2>{}</h2>", escape(heading));
    }
    match &section.body {
        SectionBody::Header {
            name,
            contact,
            separator,
        } => {
            let _ = writeln!(html, "<h1>{}</h1>", escape(name));
            if !contact.is_empty() {
                let line: Vec<String> = contact.iter().map(|c| escape(c)).collect();
                let _ = writeln!(html, "<p class=\"contact\">{}</p>", line.join(escape(separator).as_str()));
            }
        }
        SectionBody::Text { text } => {
            let _ = writeln!(html, "<p>{}</p>", escape(text));
        }
        SectionBody::Entries { entries } => {
            for entry in entries {
                write_entry(html, entry);
            }
        }
        SectionBody::Inline { items, separator } => {
            let items: Vec<String> = items.iter().map(|i| escape(i)).collect();
            let _ = writeln!(html, "<p>{}</p>", items.join(escape(separator).as_str()));
        }
    }
    html.push_str("</section>\n");
}

fn write_entry(html: &mut String, entry: &RenderedEntry) {
    html.push_str("<article>\n");
    let _ = writeln!(html, "<h3>{}</h3>", escape(&entry.title));
    if !entry.dates.is_empty() {
        let _ = writeln!(html, "<span class=\"dates\">{}</span>", escape(&entry.dates));
    }
    if !entry.subtitle.is_empty() {
        let _ = writeln!(html, "<p class=\"subtitle\">{}</p>", escape(&entry.subtitle));
    }
    if let Some(link) = &entry.link {
        let text = escape(link);
        if has_linkable_scheme(link) {
            let _ = writeln!(html, "<a href=\"{text}\">{text}</a>");
        } else {
            let _ = writeln!(html, "<span class=\"link\">{text}</span>");
        }
    }
    if !entry.bullets.is_empty() {
        html.push_str("<ul>\n");
        for bullet in &entry.bullets {
            let _ = writeln!(html, "<li>{}</li>", escape(bullet));
        }
        html.push_str("</ul>\n");
    }
    if let Some(detail) = &entry.detail {
        let _ = writeln!(html, "<p class=\"detail\">{}</p>", escape(detail));
    }
    html.push_str("</article>\n");
}

/// Only `http`, `https` and `mailto` links become anchors.
fn has_linkable_scheme(link: &str) -> bool {
    let link = link.trim_start().to_ascii_lowercase();
    ["http://", "https://", "mailto:"]
        .iter()
        .any(|scheme| link.starts_with(scheme))
}
