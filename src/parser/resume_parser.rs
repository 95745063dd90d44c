//! Plain-text resume parser.

use std::io::Read;
use std::path::Path;

use crate::detect::decode_text;
use crate::error::{Error, Result};
use crate::model::{Document, Metadata};

use super::assembler::assemble;
use super::cleanup::CleanupPipeline;
use super::contact::ContactExtractor;
use super::interpreter::Interpreter;
use super::options::ParseOptions;
use super::segmenter::{Segmented, Segmenter};

/// Plain-text resume parser.
///
/// Loading can fail (unreadable file, binary or non-UTF-8 input). Parsing
/// itself never fails: unrecognized lines degrade to plain text.
pub struct ResumeParser {
    text: String,
    source: Option<String>,
    options: ParseOptions,
}

impl ResumeParser {
    /// Open a resume text file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open_with_options(path, ParseOptions::default())
    }

    /// Open a resume text file with custom options.
    pub fn open_with_options<P: AsRef<Path>>(path: P, options: ParseOptions) -> Result<Self> {
        let path = path.as_ref();
        let data = std::fs::read(path).map_err(|source| Error::InputUnreadable {
            path: path.to_path_buf(),
            source,
        })?;

        let mut parser = Self::from_bytes_with_options(&data, options)?;
        parser.source = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned());
        Ok(parser)
    }

    /// Parse a resume from bytes.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        Self::from_bytes_with_options(data, ParseOptions::default())
    }

    /// Parse a resume from bytes with custom options.
    pub fn from_bytes_with_options(data: &[u8], options: ParseOptions) -> Result<Self> {
        let text = decode_text(data)?;
        Ok(Self::from_text_with_options(text, options))
    }

    /// Parse a resume from a reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Self::from_reader_with_options(reader, ParseOptions::default())
    }

    /// Parse a resume from a reader with custom options.
    pub fn from_reader_with_options<R: Read>(mut reader: R, options: ParseOptions) -> Result<Self> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::from_bytes_with_options(&data, options)
    }

    /// Parse a resume from text.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self::from_text_with_options(text, ParseOptions::default())
    }

    /// Parse a resume from text with custom options.
    pub fn from_text_with_options(text: impl Into<String>, options: ParseOptions) -> Self {
        Self {
            text: text.into(),
            source: None,
            options,
        }
    }

    /// Set the source name recorded in document metadata.
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Input text after cleanup.
    pub fn cleaned_text(&self) -> String {
        match self.options.cleanup {
            Some(ref cleanup) => CleanupPipeline::new(cleanup.clone()).process(&self.text),
            None => self.text.clone(),
        }
    }

    /// Classify and group lines without interpreting sections.
    pub fn segment(&self) -> Segmented {
        let text = self.cleaned_text();
        let lines: Vec<&str> = text.lines().collect();
        Segmenter::new(&self.options).segment(&lines)
    }

    /// Parse the resume into a document.
    pub fn parse(&self) -> Document {
        let text = self.cleaned_text();
        let lines: Vec<&str> = text.lines().collect();

        let segmented = Segmenter::new(&self.options).segment(&lines);
        let preamble =
            ContactExtractor::new(self.options.contact_scan_lines).extract(&segmented.preamble);

        let interpreter = Interpreter::new();
        let interpreted = segmented
            .sections
            .iter()
            .map(|section| interpreter.interpret(section))
            .collect();

        let metadata = Metadata::now(self.source.clone(), lines.len());
        let document = assemble(preamble, interpreted, metadata);

        log::info!(
            "Parsed resume for {:?}: {} sections from {} lines",
            document.name(),
            document.section_count(),
            lines.len()
        );

        document
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{SectionBody, SectionKind, DEFAULT_NAME};

    const RESUME: &str = "\
Jane Doe
Austin, TX | jane@example.com | 555-123-4567

SUMMARY

Backend engineer focused on
reliable systems.

EXPERIENCE

Acme Corp
Senior Engineer
01/2020 - Present
• Did a thing
• Led a team of five

Globex
Engineer
2017 - 2019

EDUCATION
B.S. Computer Science, State University, 2016

SKILLS

Languages:
Rust, Go, Python

PROJECTS

resumefmt: text resume converter
";

    #[test]
    fn test_parse_full_resume() {
        let doc = ResumeParser::from_text(RESUME).parse();

        assert_eq!(doc.name(), "Jane Doe");
        assert_eq!(doc.contact.location.as_deref(), Some("Austin, TX"));
        assert_eq!(doc.contact.email.as_deref(), Some("jane@example.com"));
        assert_eq!(doc.contact.phone.as_deref(), Some("555-123-4567"));
        assert_eq!(
            doc.summary.as_deref(),
            Some("Backend engineer focused on reliable systems.")
        );

        let kinds: Vec<_> = doc.sections.iter().map(|s| s.kind()).collect();
        assert_eq!(
            kinds,
            vec![
                SectionKind::Experience,
                SectionKind::Education,
                SectionKind::Skills,
                SectionKind::Other
            ]
        );

        let Some(SectionBody::Experience(jobs)) = doc.section(SectionKind::Experience).map(|s| &s.body) else {
            panic!("expected experience section");
        };
        assert_eq!(jobs.len(), 2);
        assert_eq!(jobs[0].value.bullets, vec!["Did a thing", "Led a team of five"]);
        assert!(jobs[0].value.is_current());
        assert_eq!(jobs[1].value.date_range, "2017 - 2019");

        let projects = doc.section(SectionKind::Other).expect("projects section");
        assert_eq!(projects.title, "PROJECTS");
    }

    #[test]
    fn test_metadata() {
        let doc = ResumeParser::from_text("Jane\n\nSKILLS\nRust")
            .with_source("jane.txt")
            .parse();
        assert_eq!(doc.metadata.source.as_deref(), Some("jane.txt"));
        assert_eq!(doc.metadata.line_count, 4);
    }

    #[test]
    fn test_empty_input() {
        let doc = ResumeParser::from_text("").parse();
        assert_eq!(doc.name(), DEFAULT_NAME);
        assert!(doc.is_empty());
    }

    #[test]
    fn test_cleanup_applied() {
        let doc = ResumeParser::from_text("Jane\r\n\r\nEXPERIENCE\r\nAcme\r\nDev\r\n\u{25CF} Shipped")
            .parse();
        let Some(SectionBody::Experience(jobs)) = doc.sections.first().map(|s| &s.body) else {
            panic!("expected experience section");
        };
        assert_eq!(jobs[0].value.bullets, vec!["Shipped"]);
    }

    #[test]
    fn test_without_cleanup_keeps_glyph_text() {
        let options = ParseOptions::new().without_cleanup();
        let doc = ResumeParser::from_text_with_options(
            "Jane\n\nEXPERIENCE\nAcme\nDev\n\u{25CF} Shipped",
            options,
        )
        .parse();
        let Some(SectionBody::Experience(jobs)) = doc.sections.first().map(|s| &s.body) else {
            panic!("expected experience section");
        };
        assert!(jobs[0].value.bullets.is_empty());
        assert_eq!(jobs[0].value.details, vec!["\u{25CF} Shipped"]);
    }

    #[test]
    fn test_from_bytes_rejects_binary() {
        assert!(ResumeParser::from_bytes(b"%PDF-1.7\n...").is_err());
    }

    #[test]
    fn test_open_missing_file() {
        let result = ResumeParser::open("/nonexistent/resume.txt");
        assert!(matches!(result, Err(Error::InputUnreadable { .. })));
    }
}
