//! Contact detail extraction from the preamble.

use regex::Regex;

use super::classifier::LineKind;
use super::segmenter::SourceLine;
use crate::model::{ContactBlock, DEFAULT_NAME};

/// Separators between contact fields on one line.
const FIELD_SEPARATORS: [char; 3] = ['|', '·', '•'];

/// Patterns for contact fields.
pub(crate) struct ContactPatterns {
    email: Regex,
    phone: Regex,
    linkedin: Regex,
    location: Regex,
}

impl ContactPatterns {
    pub(crate) fn new() -> Self {
        Self {
            email: Regex::new(r"[\w.+-]+@[\w-]+(?:\.[\w-]+)+").expect("valid email regex"),
            phone: Regex::new(r"(?:\+?1[\s.-]?)?\(?\d{3}\)?[\s.-]?\d{3}[\s.-]?\d{4}\b")
                .expect("valid phone regex"),
            linkedin: Regex::new(r"(?i)(?:https?://)?(?:www\.)?linkedin\.com/[\w/%.-]+")
                .expect("valid linkedin regex"),
            location: Regex::new(
                r"^[A-Z][A-Za-z.'-]*(?:\s+[A-Z][A-Za-z.'-]*){0,3},\s*[A-Z][A-Za-z.'-]*(?:\s+[A-Z][A-Za-z.'-]*){0,2}$",
            )
            .expect("valid location regex"),
        }
    }

    /// Whether the line carries any contact field.
    pub(crate) fn matches_any(&self, line: &str) -> bool {
        split_fields(line).any(|field| {
            self.email.is_match(field)
                || self.phone.is_match(field)
                || self.linkedin.is_match(field)
                || self.location.is_match(field)
        })
    }
}

fn split_fields(line: &str) -> impl Iterator<Item = &str> {
    line.split(FIELD_SEPARATORS)
        .map(str::trim)
        .filter(|f| !f.is_empty())
}

/// Result of reading the preamble.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Preamble {
    /// Name and contact fields
    pub contact: ContactBlock,
    /// Remaining prose paragraphs, lines within a paragraph joined by spaces
    pub prose: Vec<String>,
}

/// Pulls the name and contact fields out of the preamble lines.
pub struct ContactExtractor {
    patterns: ContactPatterns,
    scan_lines: usize,
}

impl ContactExtractor {
    /// Create an extractor that searches the first `scan_lines` preamble lines.
    pub fn new(scan_lines: usize) -> Self {
        Self {
            patterns: ContactPatterns::new(),
            scan_lines: scan_lines.max(1),
        }
    }

    /// Extract contact details from the preamble.
    pub fn extract(&self, preamble: &[SourceLine]) -> Preamble {
        let mut contact = ContactBlock::new(DEFAULT_NAME);
        let mut prose: Vec<String> = Vec::new();
        let mut paragraph: Vec<String> = Vec::new();
        let mut named = false;

        for (index, line) in preamble.iter().enumerate() {
            if line.kind == LineKind::Blank {
                flush_paragraph(&mut paragraph, &mut prose);
                continue;
            }

            let text = line.text.trim();
            if !named {
                named = true;
                let mut fields = split_fields(text);
                if let Some(name) = fields.next() {
                    contact.name = name.to_string();
                }
                for field in fields {
                    if !self.apply_field(field, &mut contact) {
                        paragraph.push(field.to_string());
                    }
                }
                continue;
            }

            if index < self.scan_lines && self.apply_line(text, &mut contact) {
                continue;
            }
            paragraph.push(text.to_string());
        }
        flush_paragraph(&mut paragraph, &mut prose);

        log::debug!(
            "Contact block: name={:?}, {} fields, {} prose paragraphs",
            contact.name,
            contact.fields().len(),
            prose.len()
        );

        Preamble { contact, prose }
    }

    /// Apply each field of a line; true if at least one was a contact field.
    fn apply_line(&self, text: &str, contact: &mut ContactBlock) -> bool {
        let mut matched = false;
        for field in split_fields(text) {
            matched |= self.apply_field(field, contact);
        }
        matched
    }

    /// Checked in order email, LinkedIn, phone, location; LinkedIn goes
    /// before phone so digits in a profile URL are not taken as a number.
    fn apply_field(&self, field: &str, contact: &mut ContactBlock) -> bool {
        if let Some(m) = self.patterns.email.find(field) {
            contact.email.get_or_insert_with(|| m.as_str().to_string());
            return true;
        }
        if let Some(m) = self.patterns.linkedin.find(field) {
            contact.linkedin.get_or_insert_with(|| m.as_str().to_string());
            return true;
        }
        if let Some(m) = self.patterns.phone.find(field) {
            contact.phone.get_or_insert_with(|| m.as_str().to_string());
            return true;
        }
        if self.patterns.location.is_match(field) {
            contact.location.get_or_insert_with(|| field.to_string());
            return true;
        }
        false
    }
}

impl Default for ContactExtractor {
    fn default() -> Self {
        Self::new(crate::parser::DEFAULT_CONTACT_SCAN_LINES)
    }
}

fn flush_paragraph(paragraph: &mut Vec<String>, prose: &mut Vec<String>) {
    if !paragraph.is_empty() {
        prose.push(paragraph.join(" "));
        paragraph.clear();
    }
}
