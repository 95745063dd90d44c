//! Entry-level types: one structured record inside a section.

use serde::{Deserialize, Serialize};

/// Shape check for entry types.
///
/// Interpretation is best effort, so an entry may come out with some
/// fields empty. Implementors report which required fields are missing.
pub trait EntryShape {
    /// Names of required fields that are empty.
    fn missing_fields(&self) -> Vec<&'static str>;
}

/// A structured entry together with the source lines it was built from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parsed<T> {
    /// Structured (possibly partial) value
    pub value: T,

    /// Original lines as written (indentation kept), in source order
    pub raw: Vec<String>,
}

impl<T> Parsed<T> {
    /// Wrap a value with its raw lines.
    pub fn new(value: T, raw: Vec<String>) -> Self {
        Self { value, raw }
    }

    /// Raw lines joined with newlines.
    pub fn raw_text(&self) -> String {
        self.raw.join("\n")
    }
}

impl<T: EntryShape> Parsed<T> {
    /// Names of required fields that could not be filled.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        self.value.missing_fields()
    }

    /// Check whether every required field was recovered.
    pub fn is_complete(&self) -> bool {
        self.value.missing_fields().is_empty()
    }
}

/// One job in an EXPERIENCE section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    /// Company or organization
    pub organization: String,

    /// Role or job title
    pub role: String,

    /// Free-form date range, e.g. "01/2020 - Present"
    pub date_range: String,

    /// Bullet points with the glyph stripped
    pub bullets: Vec<String>,

    /// Unbulleted description lines
    pub details: Vec<String>,
}

impl ExperienceEntry {
    /// Whether the date range ends at "Present" (or an equivalent).
    pub fn is_current(&self) -> bool {
        let lower = self.date_range.to_lowercase();
        ["present", "current", "now"]
            .iter()
            .any(|word| lower.trim_end_matches(')').trim_end().ends_with(word))
    }
}

impl EntryShape for ExperienceEntry {
    fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.organization.is_empty() {
            missing.push("organization");
        }
        if self.role.is_empty() {
            missing.push("role");
        }
        missing
    }
}

/// One line of an EDUCATION section.
///
/// Degree, institution and year are kept together; the input gives no
/// reliable way to tell them apart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationEntry {
    /// Free-form text
    pub text: String,
}

impl EntryShape for EducationEntry {
    fn missing_fields(&self) -> Vec<&'static str> {
        if self.text.is_empty() {
            vec!["text"]
        } else {
            Vec::new()
        }
    }
}

/// One skill category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillsEntry {
    /// Category name without the trailing colon
    pub category: Option<String>,

    /// Individual skills
    pub items: Vec<String>,
}

impl EntryShape for SkillsEntry {
    fn missing_fields(&self) -> Vec<&'static str> {
        if self.items.is_empty() {
            vec!["items"]
        } else {
            Vec::new()
        }
    }
}

/// A group of items under one issuing organization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssuerEntry {
    /// Issuer, provider or awarding organization
    pub issuer: String,

    /// Certifications or awards
    pub items: Vec<String>,
}

impl EntryShape for IssuerEntry {
    fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.issuer.is_empty() {
            missing.push("issuer");
        }
        if self.items.is_empty() {
            missing.push("items");
        }
        missing
    }
}

/// Certifications grouped by provider.
pub type CertificationEntry = IssuerEntry;

/// Awards grouped by organization.
pub type HonorEntry = IssuerEntry;
