//! Document-level types.

use super::{Section, SectionBody, SectionKind};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Name used when the input has no preamble at all.
pub const DEFAULT_NAME: &str = "Your Name";

/// A parsed resume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Name and contact details from the preamble
    pub contact: ContactBlock,

    /// Summary prose
    pub summary: Option<String>,

    /// Sections in input order
    pub sections: Vec<Section>,

    /// Information about the source and the parse run
    pub metadata: Metadata,
}

impl Document {
    /// Create a document with a contact block and nothing else.
    pub fn new(contact: ContactBlock) -> Self {
        Self {
            contact,
            summary: None,
            sections: Vec::new(),
            metadata: Metadata::default(),
        }
    }

    /// Person's name.
    pub fn name(&self) -> &str {
        &self.contact.name
    }

    /// First section of the given kind.
    pub fn section(&self, kind: SectionKind) -> Option<&Section> {
        self.sections.iter().find(|s| s.kind() == kind)
    }

    /// All sections of the given kind, in order.
    pub fn sections_of(&self, kind: SectionKind) -> impl Iterator<Item = &Section> {
        self.sections.iter().filter(move |s| s.kind() == kind)
    }

    /// Number of sections.
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Check if the document has no summary and no sections.
    pub fn is_empty(&self) -> bool {
        self.summary.is_none() && self.sections.is_empty()
    }

    /// Get a plain-text rendition of the whole document.
    pub fn plain_text(&self) -> String {
        let mut blocks = Vec::new();

        let mut header = vec![self.contact.name.clone()];
        let contact_line = self.contact.fields().join(" | ");
        if !contact_line.is_empty() {
            header.push(contact_line);
        }
        header.extend(self.contact.extra.iter().cloned());
        blocks.push(header.join("\n"));

        if let Some(ref summary) = self.summary {
            blocks.push(format!("SUMMARY\n\n{}", summary));
        }

        for section in &self.sections {
            blocks.push(section_plain_text(section));
        }

        blocks.join("\n\n")
    }

    /// Convert document metadata to YAML frontmatter format.
    pub fn to_yaml_frontmatter(&self) -> String {
        let mut lines = vec!["---".to_string()];

        lines.push(format!("name: \"{}\"", escape_yaml(&self.contact.name)));
        if let Some(ref email) = self.contact.email {
            lines.push(format!("email: \"{}\"", escape_yaml(email)));
        }
        if let Some(ref phone) = self.contact.phone {
            lines.push(format!("phone: \"{}\"", escape_yaml(phone)));
        }
        if let Some(ref location) = self.contact.location {
            lines.push(format!("location: \"{}\"", escape_yaml(location)));
        }
        if let Some(ref linkedin) = self.contact.linkedin {
            lines.push(format!("linkedin: \"{}\"", escape_yaml(linkedin)));
        }
        if let Some(ref source) = self.metadata.source {
            lines.push(format!("source: \"{}\"", escape_yaml(source)));
        }
        lines.push(format!("parsed: {}", self.metadata.parsed_at.to_rfc3339()));

        let kinds: Vec<&str> = self.sections.iter().map(|s| s.kind().as_str()).collect();
        lines.push(format!("sections: [{}]", kinds.join(", ")));

        lines.push("---".to_string());
        lines.push(String::new());

        lines.join("\n")
    }
}

fn section_plain_text(section: &Section) -> String {
    let mut out = vec![section.title.clone(), String::new()];

    match &section.body {
        SectionBody::Experience(entries) => {
            let mut jobs = Vec::new();
            for entry in entries {
                let e = &entry.value;
                let mut lines = Vec::new();
                for field in [&e.organization, &e.role, &e.date_range] {
                    if !field.is_empty() {
                        lines.push(field.clone());
                    }
                }
                lines.extend(e.details.iter().cloned());
                lines.extend(e.bullets.iter().map(|b| format!("• {}", b)));
                jobs.push(lines.join("\n"));
            }
            out.push(jobs.join("\n\n"));
        }
        SectionBody::Education(entries) => {
            let lines: Vec<&str> = entries.iter().map(|e| e.value.text.as_str()).collect();
            out.push(lines.join("\n"));
        }
        SectionBody::Skills(entries) => {
            let mut groups = Vec::new();
            for entry in entries {
                let items = entry.value.items.join(", ");
                match entry.value.category {
                    Some(ref category) => groups.push(format!("{}:\n{}", category, items)),
                    None => groups.push(items),
                }
            }
            out.push(groups.join("\n\n"));
        }
        SectionBody::Certifications(entries) | SectionBody::Honors(entries) => {
            let mut groups = Vec::new();
            for entry in entries {
                let mut lines = Vec::new();
                if !entry.value.issuer.is_empty() {
                    lines.push(entry.value.issuer.clone());
                }
                lines.extend(entry.value.items.iter().map(|i| format!("• {}", i)));
                groups.push(lines.join("\n"));
            }
            out.push(groups.join("\n\n"));
        }
        SectionBody::Other { text } => out.push(text.clone()),
    }

    out.join("\n")
}

/// Name and contact details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactBlock {
    /// Person's name (first non-blank line)
    pub name: String,

    /// City and region
    pub location: Option<String>,

    /// Email address
    pub email: Option<String>,

    /// Phone number as written
    pub phone: Option<String>,

    /// LinkedIn or other profile URL as written
    pub linkedin: Option<String>,

    /// Preamble lines that are not contact fields
    pub extra: Vec<String>,
}

impl ContactBlock {
    /// Create a contact block with just a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            location: None,
            email: None,
            phone: None,
            linkedin: None,
            extra: Vec::new(),
        }
    }

    /// Present contact fields in display order: email, phone, LinkedIn, location.
    pub fn fields(&self) -> Vec<String> {
        [&self.email, &self.phone, &self.linkedin, &self.location]
            .into_iter()
            .flatten()
            .cloned()
            .collect()
    }

    /// Check if any contact field besides the name was found.
    pub fn has_contact_fields(&self) -> bool {
        !self.fields().is_empty()
    }
}

impl Default for ContactBlock {
    fn default() -> Self {
        Self::new(DEFAULT_NAME)
    }
}

/// Information about the source and the parse run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    /// Source file name, when parsed from a file
    pub source: Option<String>,

    /// Number of lines in the input
    pub line_count: usize,

    /// When the document was parsed
    pub parsed_at: DateTime<Utc>,
}

impl Metadata {
    /// Create metadata stamped with the current time.
    pub fn now(source: Option<String>, line_count: usize) -> Self {
        Self {
            source,
            line_count,
            parsed_at: Utc::now(),
        }
    }
}

/// Escape special characters for YAML strings.
fn escape_yaml(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}
