//! Line classification.
//!
//! Each line is labeled on its own, with only its neighbours and its
//! position relative to the first heading as context. Classification
//! cannot fail: anything unrecognized is `PlainText`.

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::contact::ContactPatterns;
use super::options::{HeadingMode, ParseOptions};
use crate::model::SectionKind;

/// Heading text recognized by the parser, with the section it opens.
const KNOWN_HEADINGS: &[(&str, KnownHeading)] = &[
    ("SUMMARY", KnownHeading::Summary),
    ("PROFESSIONAL SUMMARY", KnownHeading::Summary),
    ("EXPERIENCE", KnownHeading::Experience),
    ("WORK EXPERIENCE", KnownHeading::Experience),
    ("PROFESSIONAL EXPERIENCE", KnownHeading::Experience),
    ("EDUCATION", KnownHeading::Education),
    ("SKILLS", KnownHeading::Skills),
    ("TECHNICAL SKILLS", KnownHeading::Skills),
    ("CERTIFICATIONS", KnownHeading::Certifications),
    ("CERTIFICATES", KnownHeading::Certifications),
    ("HONORS AND AWARDS", KnownHeading::Honors),
    ("HONORS & AWARDS", KnownHeading::Honors),
    ("HONORS", KnownHeading::Honors),
    ("AWARDS", KnownHeading::Honors),
];

/// Maximum word count for a heading-shaped line.
const FALLBACK_HEADING_MAX_WORDS: usize = 4;

/// Minimum letters in a one-word fallback heading.
const FALLBACK_HEADING_MIN_SINGLE_WORD_LETTERS: usize = 5;

const MONTH: &str = r"(?:jan(?:uary)?|feb(?:ruary)?|mar(?:ch)?|apr(?:il)?|may|june?|july?|aug(?:ust)?|sep(?:t(?:ember)?)?|oct(?:ober)?|nov(?:ember)?|dec(?:ember)?)\.?";

/// One of the fixed section headings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KnownHeading {
    /// SUMMARY
    Summary,
    /// EXPERIENCE
    Experience,
    /// EDUCATION
    Education,
    /// SKILLS
    Skills,
    /// CERTIFICATIONS
    Certifications,
    /// HONORS AND AWARDS
    Honors,
}

impl KnownHeading {
    /// Match a line against the known headings, ignoring case and spacing.
    pub fn from_text(text: &str) -> Option<Self> {
        let normalized = text
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .to_uppercase();

        KNOWN_HEADINGS
            .iter()
            .find(|(heading, _)| *heading == normalized)
            .map(|(_, kind)| *kind)
    }

    /// Section kind this heading opens, or `None` for the summary.
    pub fn section_kind(&self) -> Option<SectionKind> {
        match self {
            KnownHeading::Summary => None,
            KnownHeading::Experience => Some(SectionKind::Experience),
            KnownHeading::Education => Some(SectionKind::Education),
            KnownHeading::Skills => Some(SectionKind::Skills),
            KnownHeading::Certifications => Some(SectionKind::Certifications),
            KnownHeading::Honors => Some(SectionKind::Honors),
        }
    }

    /// All heading strings that map to this heading.
    pub fn spellings(&self) -> impl Iterator<Item = &'static str> + '_ {
        KNOWN_HEADINGS
            .iter()
            .filter(move |(_, kind)| kind == self)
            .map(|(text, _)| *text)
    }
}

/// How a heading line was recognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HeadingMatch {
    /// Exact match against the known-heading list
    Known(KnownHeading),
    /// Heading-shaped line outside the known list
    Fallback,
}

/// Label assigned to one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineKind {
    /// Empty or whitespace-only
    Blank,
    /// Section heading
    Heading(HeadingMatch),
    /// List item starting with a bullet glyph
    Bullet,
    /// A line consisting of a date range
    DateRange,
    /// Name, email, phone or profile line in the preamble
    ContactInfo,
    /// Anything else
    PlainText,
}

impl LineKind {
    /// Check if this is a blank line.
    pub fn is_blank(&self) -> bool {
        matches!(self, LineKind::Blank)
    }

    /// Check if this is a heading of either kind.
    pub fn is_heading(&self) -> bool {
        matches!(self, LineKind::Heading(_))
    }
}

/// Surroundings of the line being classified.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineContext<'a> {
    /// Line before, if any
    pub previous: Option<&'a str>,
    /// Line after, if any
    pub next: Option<&'a str>,
    /// No non-blank line has been seen yet
    pub is_first_nonblank: bool,
    /// No heading has been seen yet
    pub in_preamble: bool,
}

/// Date range patterns shared by the classifier and the interpreter.
pub(crate) struct DatePatterns {
    full: Regex,
    trailing: Regex,
}

impl DatePatterns {
    pub(crate) fn new() -> Self {
        let date = format!(r"(?:\d{{1,2}}/\d{{4}}|{MONTH}\s+\d{{4}}|\d{{4}}|present|current|now)");
        let range = format!(r"{date}\s*(?:-|–|—|\bto\b)\s*{date}");

        Self {
            full: Regex::new(&format!(r"(?i)^\s*\(?\s*{range}\s*\)?\s*$"))
                .expect("valid date range regex"),
            trailing: Regex::new(&format!(
                r"(?i)^(?P<head>.*?\S)(?:\s*[|,]\s*|\t\s*|\s{{2,}})\(?(?P<range>{range})\)?\s*$"
            ))
            .expect("valid trailing date range regex"),
        }
    }

    /// Whether the whole line is a date range.
    pub(crate) fn is_range(&self, line: &str) -> bool {
        self.full.is_match(line)
    }

    /// Split `"Acme Corp | 2019 - 2021"` into `("Acme Corp", "2019 - 2021")`.
    pub(crate) fn split_trailing(&self, line: &str) -> Option<(String, String)> {
        let caps = self.trailing.captures(line.trim())?;
        Some((
            caps["head"].trim().to_string(),
            caps["range"].trim().to_string(),
        ))
    }
}

/// Strip a leading bullet glyph.
///
/// `•` may be followed directly by text; `-` and `*` need whitespace so
/// that hyphenated words and emphasis are not mistaken for list items.
pub fn strip_bullet(line: &str) -> Option<&str> {
    let trimmed = line.trim_start();
    if let Some(rest) = trimmed.strip_prefix('•') {
        return Some(rest.trim());
    }
    for marker in ['-', '*'] {
        if let Some(rest) = trimmed.strip_prefix(marker) {
            if rest.starts_with(char::is_whitespace) {
                return Some(rest.trim());
            }
        }
    }
    None
}

/// Line classifier.
pub struct Classifier {
    mode: HeadingMode,
    dates: DatePatterns,
    contact: ContactPatterns,
}

impl Classifier {
    /// Create a classifier for the given options.
    pub fn new(options: &ParseOptions) -> Self {
        Self {
            mode: options.heading_mode,
            dates: DatePatterns::new(),
            contact: ContactPatterns::new(),
        }
    }

    /// Label a single line.
    pub fn classify(&self, line: &str, ctx: &LineContext<'_>) -> LineKind {
        if line.trim().is_empty() {
            return LineKind::Blank;
        }

        if let Some(heading) = KnownHeading::from_text(line) {
            return LineKind::Heading(HeadingMatch::Known(heading));
        }

        if ctx.in_preamble && ctx.is_first_nonblank {
            return LineKind::ContactInfo;
        }

        if strip_bullet(line).is_some() {
            return LineKind::Bullet;
        }

        if self.dates.is_range(line) {
            return LineKind::DateRange;
        }

        if ctx.in_preamble {
            if self.contact.matches_any(line) {
                return LineKind::ContactInfo;
            }
            return LineKind::PlainText;
        }

        if self.mode == HeadingMode::Lenient && is_fallback_heading(line, ctx) {
            log::debug!("Treating heading-shaped line as section heading: {:?}", line.trim());
            return LineKind::Heading(HeadingMatch::Fallback);
        }

        LineKind::PlainText
    }

    /// Whether the whole line is a date range.
    pub fn is_date_range(&self, line: &str) -> bool {
        self.dates.is_range(line)
    }
}

fn is_fallback_heading(line: &str, ctx: &LineContext<'_>) -> bool {
    let is_blank = |l: &str| l.trim().is_empty();
    if !ctx.previous.map_or(true, is_blank) || !ctx.next.map_or(true, is_blank) {
        return false;
    }

    let text = line.trim();
    let words = text.split_whitespace().count();
    let letters = text.chars().filter(|c| c.is_alphabetic()).count();
    words <= FALLBACK_HEADING_MAX_WORDS
        && letters > 0
        && (words > 1 || letters >= FALLBACK_HEADING_MIN_SINGLE_WORD_LETTERS)
        && !text.chars().any(char::is_lowercase)
        && !text.ends_with(['.', ',', ';', ':', '!', '?'])
}
