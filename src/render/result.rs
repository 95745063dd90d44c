//! Rendering result with metadata and statistics.

use crate::model::{Document, Metadata, SectionBody};
use serde::{Deserialize, Serialize};

/// Result of rendering a document, including content and statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderResult {
    /// The rendered content (HTML, text, etc.)
    pub content: String,

    /// Document metadata (copied from source document)
    pub metadata: Metadata,

    /// Document statistics
    pub stats: ResumeStats,
}

impl RenderResult {
    /// Create a new render result.
    pub fn new(content: String, metadata: Metadata, stats: ResumeStats) -> Self {
        Self {
            content,
            metadata,
            stats,
        }
    }

    /// Get the content length in bytes.
    pub fn content_len(&self) -> usize {
        self.content.len()
    }
}

/// Counts describing a parsed resume.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeStats {
    /// Number of sections
    pub section_count: u32,

    /// Number of entries across all sections
    pub entry_count: u32,

    /// Entries with missing required fields
    pub incomplete_count: u32,

    /// Experience bullets
    pub bullet_count: u32,

    /// Individual skills
    pub skill_count: u32,

    /// Approximate word count (whitespace-separated tokens)
    pub word_count: u32,

    /// Character count (excluding whitespace)
    pub char_count: u32,
}

impl ResumeStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect structural counts and text counts from a document.
    pub fn from_document(doc: &Document) -> Self {
        let mut stats = Self::new();

        for section in &doc.sections {
            stats.section_count += 1;
            stats.entry_count += section.entry_count() as u32;
            stats.incomplete_count += section.incomplete_count() as u32;

            match &section.body {
                SectionBody::Experience(entries) => {
                    stats.bullet_count += entries
                        .iter()
                        .map(|e| e.value.bullets.len() as u32)
                        .sum::<u32>();
                }
                SectionBody::Skills(entries) => {
                    stats.skill_count += entries
                        .iter()
                        .map(|e| e.value.items.len() as u32)
                        .sum::<u32>();
                }
                _ => {}
            }
        }

        stats.count_text(&doc.plain_text());
        stats
    }

    /// Add word and character counts from text.
    pub fn count_text(&mut self, text: &str) {
        self.word_count += text.split_whitespace().count() as u32;
        self.char_count += text.chars().filter(|c| !c.is_whitespace()).count() as u32;
    }

    /// Fraction of entries with all required fields, 1.0 for an empty resume.
    pub fn completeness(&self) -> f64 {
        if self.entry_count == 0 {
            return 1.0;
        }
        1.0 - f64::from(self.incomplete_count) / f64::from(self.entry_count)
    }
}
