//! HTML rendering for parsed resumes.

use std::fmt::Write as _;

use crate::error::Result;
use crate::model::{
    ContactBlock, Document, EducationEntry, EntryShape, ExperienceEntry, IssuerEntry, Parsed,
    Section, SectionBody, SkillsEntry,
};

use super::{RenderOptions, RenderResult, ResumeStats};

/// Built-in stylesheet.
pub const DEFAULT_STYLESHEET: &str = include_str!("theme.css");

const SUMMARY_TITLE: &str = "Professional Summary";

/// Convert a document to a standalone HTML page.
pub fn to_html(doc: &Document, options: &RenderOptions) -> Result<String> {
    let renderer = HtmlRenderer::new(options.clone());
    renderer.render(doc)
}

/// Convert a document to HTML with statistics.
pub fn to_html_with_stats(doc: &Document, options: &RenderOptions) -> Result<RenderResult> {
    let renderer = HtmlRenderer::new(options.clone());
    renderer.render_with_stats(doc)
}

/// HTML renderer.
pub struct HtmlRenderer {
    options: RenderOptions,
}

impl HtmlRenderer {
    /// Create a new HTML renderer.
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Render a document to HTML.
    pub fn render(self, doc: &Document) -> Result<String> {
        Ok(self.render_internal(doc))
    }

    /// Render a document to HTML with document statistics.
    pub fn render_with_stats(self, doc: &Document) -> Result<RenderResult> {
        let content = self.render_internal(doc);
        let stats = ResumeStats::from_document(doc);
        Ok(RenderResult::new(content, doc.metadata.clone(), stats))
    }

    fn render_internal(&self, doc: &Document) -> String {
        let mut out = String::with_capacity(8 * 1024);

        out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        out.push_str("    <meta charset=\"UTF-8\">\n");
        out.push_str(
            "    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
        );
        let title = match self.options.title {
            Some(ref title) => title.clone(),
            None => format!("{} - Resume", doc.name()),
        };
        let _ = writeln!(out, "    <title>{}</title>", escape_html(&title));
        if self.options.include_styles {
            let css = self
                .options
                .stylesheet
                .as_deref()
                .unwrap_or(DEFAULT_STYLESHEET);
            let _ = writeln!(out, "    <style>\n{}\n    </style>", css.trim_end());
        }
        out.push_str("</head>\n<body>\n");

        self.render_header(&mut out, &doc.contact);

        if let Some(ref summary) = doc.summary {
            open_section(&mut out, SUMMARY_TITLE);
            for paragraph in summary.split("\n\n") {
                let _ = writeln!(out, "        <p class=\"summary\">{}</p>", escape_html(paragraph));
            }
            close_section(&mut out);
        }

        for section in &doc.sections {
            self.render_section(&mut out, section);
        }

        out.push_str("</body>\n</html>\n");
        out
    }

    fn render_header(&self, out: &mut String, contact: &ContactBlock) {
        out.push_str("    <div class=\"header\">\n");
        let _ = writeln!(out, "        <h1 class=\"name\">{}</h1>", escape_html(&contact.name));

        for line in &contact.extra {
            let _ = writeln!(out, "        <div class=\"headline\">{}</div>", escape_html(line));
        }

        if contact.has_contact_fields() {
            out.push_str("        <div class=\"contact-info\">\n");
            if let Some(ref email) = contact.email {
                let email = escape_html(email);
                self.contact_item(out, "📧", &format!("<a href=\"mailto:{email}\">{email}</a>"));
            }
            if let Some(ref phone) = contact.phone {
                self.contact_item(out, "📱", &escape_html(phone));
            }
            if let Some(ref linkedin) = contact.linkedin {
                let href = escape_html(&profile_url(linkedin));
                let text = escape_html(linkedin);
                self.contact_item(
                    out,
                    "💼",
                    &format!("<a href=\"{href}\" target=\"_blank\">{text}</a>"),
                );
            }
            if let Some(ref location) = contact.location {
                self.contact_item(out, "📍", &escape_html(location));
            }
            out.push_str("        </div>\n");
        }

        out.push_str("    </div>\n");
    }

    fn contact_item(&self, out: &mut String, icon: &str, html: &str) {
        if self.options.contact_icons {
            let _ = writeln!(out, "            <div class=\"contact-item\">{icon} {html}</div>");
        } else {
            let _ = writeln!(out, "            <div class=\"contact-item\">{html}</div>");
        }
    }

    fn render_section(&self, out: &mut String, section: &Section) {
        if section.is_empty() {
            log::debug!("Skipping empty section {:?}", section.title);
            return;
        }

        open_section(out, section.display_title());
        match &section.body {
            SectionBody::Experience(entries) => {
                for entry in entries {
                    self.render_entry(out, entry, render_experience);
                }
            }
            SectionBody::Education(entries) => {
                for entry in entries {
                    self.render_entry(out, entry, render_education);
                }
            }
            SectionBody::Skills(entries) => {
                out.push_str("        <div class=\"skills-section\">\n");
                for entry in entries {
                    self.render_entry(out, entry, render_skills);
                }
                out.push_str("        </div>\n");
            }
            SectionBody::Certifications(entries) => {
                for entry in entries {
                    self.render_entry(out, entry, |out, e| {
                        render_issuer(out, e, "cert-group", "cert-provider")
                    });
                }
            }
            SectionBody::Honors(entries) => {
                for entry in entries {
                    self.render_entry(out, entry, |out, e| {
                        render_issuer(out, e, "award-group", "award-org")
                    });
                }
            }
            SectionBody::Other { text } => {
                let _ = writeln!(out, "        <div class=\"raw-text\">{}</div>", escape_html(text));
            }
        }
        close_section(out);
    }

    fn render_entry<T, F>(&self, out: &mut String, entry: &Parsed<T>, render: F)
    where
        T: EntryShape,
        F: FnOnce(&mut String, &T),
    {
        if self.options.raw_fallback && !entry.is_complete() && !entry.raw.is_empty() {
            let _ = writeln!(
                out,
                "        <div class=\"entry raw-text\">{}</div>",
                escape_html(&entry.raw_text())
            );
            return;
        }
        render(out, &entry.value);
    }
}

fn open_section(out: &mut String, title: &str) {
    out.push_str("    <div class=\"section\">\n");
    let _ = writeln!(out, "        <h2 class=\"section-title\">{}</h2>", escape_html(title));
}

fn close_section(out: &mut String) {
    out.push_str("    </div>\n");
}

fn render_experience(out: &mut String, job: &ExperienceEntry) {
    out.push_str("        <div class=\"entry\">\n");
    out.push_str("            <div class=\"entry-header\">\n");
    let _ = writeln!(
        out,
        "                <div class=\"company\">{}</div>",
        escape_html(&job.organization)
    );
    if !job.date_range.is_empty() {
        let _ = writeln!(
            out,
            "                <div class=\"period\">{}</div>",
            escape_html(&job.date_range)
        );
    }
    out.push_str("            </div>\n");
    if !job.role.is_empty() {
        let _ = writeln!(out, "            <div class=\"position\">{}</div>", escape_html(&job.role));
    }
    for detail in &job.details {
        let _ = writeln!(out, "            <p class=\"entry-detail\">{}</p>", escape_html(detail));
    }
    render_list(out, &job.bullets);
    out.push_str("        </div>\n");
}

fn render_education(out: &mut String, entry: &EducationEntry) {
    let _ = writeln!(out, "        <div class=\"entry\">{}</div>", escape_html(&entry.text));
}

fn render_skills(out: &mut String, entry: &SkillsEntry) {
    out.push_str("            <div class=\"skill-category\">\n");
    if let Some(ref category) = entry.category {
        let _ = writeln!(
            out,
            "                <div class=\"skill-category-title\">{}</div>",
            escape_html(category)
        );
    }
    out.push_str("                <div class=\"skill-list\">");
    for item in &entry.items {
        let _ = write!(out, "<div class=\"skill-item\">{}</div>", escape_html(item));
    }
    out.push_str("</div>\n");
    out.push_str("            </div>\n");
}

fn render_issuer(out: &mut String, entry: &IssuerEntry, group_class: &str, issuer_class: &str) {
    let _ = writeln!(out, "        <div class=\"{group_class}\">");
    if !entry.issuer.is_empty() {
        let _ = writeln!(
            out,
            "            <div class=\"{issuer_class}\">{}</div>",
            escape_html(&entry.issuer)
        );
    }
    render_list(out, &entry.items);
    out.push_str("        </div>\n");
}

fn render_list(out: &mut String, items: &[String]) {
    if items.is_empty() {
        return;
    }
    out.push_str("            <ul>");
    for item in items {
        let _ = write!(out, "<li>{}</li>", escape_html(item));
    }
    out.push_str("</ul>\n");
}

/// Make a profile link absolute.
fn profile_url(url: &str) -> String {
    if url.starts_with("http://") || url.starts_with("https://") {
        url.to_string()
    } else {
        format!("https://{url}")
    }
}

/// Escape text for use in HTML content and attribute values.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
