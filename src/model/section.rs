//! Section-level types.

use serde::{Deserialize, Serialize};

use super::{
    CertificationEntry, EducationEntry, EntryShape, ExperienceEntry, HonorEntry, Parsed,
    SkillsEntry,
};

/// Kind of a resume section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    /// Work history
    Experience,
    /// Degrees and schools
    Education,
    /// Skill categories
    Skills,
    /// Certifications by provider
    Certifications,
    /// Honors and awards by organization
    Honors,
    /// Unrecognized heading, body passed through verbatim
    Other,
}

impl SectionKind {
    /// Short lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionKind::Experience => "experience",
            SectionKind::Education => "education",
            SectionKind::Skills => "skills",
            SectionKind::Certifications => "certifications",
            SectionKind::Honors => "honors",
            SectionKind::Other => "other",
        }
    }

    /// Title used when rendering, or `None` to use the raw heading.
    pub fn display_title(&self) -> Option<&'static str> {
        match self {
            SectionKind::Experience => Some("Professional Experience"),
            SectionKind::Education => Some("Education"),
            SectionKind::Skills => Some("Skills"),
            SectionKind::Certifications => Some("Certifications"),
            SectionKind::Honors => Some("Honors and Awards"),
            SectionKind::Other => None,
        }
    }
}

impl std::fmt::Display for SectionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Interpreted body of a section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "content", rename_all = "snake_case")]
pub enum SectionBody {
    /// Jobs
    Experience(Vec<Parsed<ExperienceEntry>>),
    /// Free-form education lines
    Education(Vec<Parsed<EducationEntry>>),
    /// Skill categories
    Skills(Vec<Parsed<SkillsEntry>>),
    /// Certification groups
    Certifications(Vec<Parsed<CertificationEntry>>),
    /// Award groups
    Honors(Vec<Parsed<HonorEntry>>),
    /// Verbatim text for unrecognized headings
    Other {
        /// Body lines joined with newlines
        text: String,
    },
}

/// A titled block of the resume.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Heading text as written in the input
    pub title: String,

    /// Interpreted content
    pub body: SectionBody,
}

impl Section {
    /// Create a section.
    pub fn new(title: impl Into<String>, body: SectionBody) -> Self {
        Self {
            title: title.into(),
            body,
        }
    }

    /// Kind of this section.
    pub fn kind(&self) -> SectionKind {
        match self.body {
            SectionBody::Experience(_) => SectionKind::Experience,
            SectionBody::Education(_) => SectionKind::Education,
            SectionBody::Skills(_) => SectionKind::Skills,
            SectionBody::Certifications(_) => SectionKind::Certifications,
            SectionBody::Honors(_) => SectionKind::Honors,
            SectionBody::Other { .. } => SectionKind::Other,
        }
    }

    /// Title to show in rendered output.
    pub fn display_title(&self) -> &str {
        self.kind().display_title().unwrap_or(&self.title)
    }

    /// Number of entries (an `Other` section counts as one when non-empty).
    pub fn entry_count(&self) -> usize {
        match &self.body {
            SectionBody::Experience(e) => e.len(),
            SectionBody::Education(e) => e.len(),
            SectionBody::Skills(e) => e.len(),
            SectionBody::Certifications(e) | SectionBody::Honors(e) => e.len(),
            SectionBody::Other { text } => usize::from(!text.is_empty()),
        }
    }

    /// Number of entries with missing required fields.
    pub fn incomplete_count(&self) -> usize {
        fn count<T: EntryShape>(entries: &[Parsed<T>]) -> usize {
            entries.iter().filter(|e| !e.is_complete()).count()
        }

        match &self.body {
            SectionBody::Experience(e) => count(e),
            SectionBody::Education(e) => count(e),
            SectionBody::Skills(e) => count(e),
            SectionBody::Certifications(e) | SectionBody::Honors(e) => count(e),
            SectionBody::Other { .. } => 0,
        }
    }

    /// Check if the section has no content.
    pub fn is_empty(&self) -> bool {
        self.entry_count() == 0
    }
}
