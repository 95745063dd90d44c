//! # resumefmt
//!
//! Plain-text resume parsing and formatting library for Rust.
//!
//! This library reads a loosely structured text resume (a name and contact
//! lines, then sections such as SUMMARY, EXPERIENCE, EDUCATION, SKILLS,
//! CERTIFICATIONS and HONORS AND AWARDS) and recovers a structured
//! document that can be rendered to HTML, plain text or JSON, and turned
//! into a PDF through an external engine.
//!
//! ## Quick Start
//!
//! ```no_run
//! use resumefmt::{parse_file, render};
//!
//! fn main() -> resumefmt::Result<()> {
//!     let doc = parse_file("resume.txt")?;
//!
//!     let options = render::RenderOptions::default();
//!     let html = render::to_html(&doc, &options)?;
//!     std::fs::write("resume.html", html)?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Best-effort parsing**: malformed lines degrade to plain text, never errors
//! - **Typed sections**: experience, education, skills, certifications, honors
//! - **Raw fallback**: every entry keeps its source lines
//! - **Output formats**: standalone HTML, plain text, JSON
//! - **PDF**: wkhtmltopdf or WeasyPrint, with fallback between them

pub mod convert;
pub mod detect;
pub mod error;
pub mod model;
pub mod parser;
pub mod render;

// Re-export commonly used types
pub use convert::{
    CommandEngine, ConvertOptions, ConvertResult, Converter, PdfEngine, PdfEngineRegistry,
};
pub use detect::{decode_text, detect_format_from_bytes, detect_format_from_path, is_plain_text, TextFormat};
pub use error::{Error, Result};
pub use model::{
    CertificationEntry, ContactBlock, Document, EducationEntry, ExperienceEntry, HonorEntry,
    IssuerEntry, Metadata, Parsed, Section, SectionBody, SectionKind, SkillsEntry,
};
pub use parser::{CleanupOptions, CleanupPreset, HeadingMode, ParseOptions, ResumeParser};
pub use render::{JsonFormat, RenderOptions, RenderResult, ResumeStats};

use std::io::Read;
use std::path::Path;

/// Parse a resume text file and return a structured document.
///
/// # Arguments
///
/// * `path` - Path to the text file
///
/// # Example
///
/// ```no_run
/// use resumefmt::parse_file;
///
/// let doc = parse_file("resume.txt").unwrap();
/// println!("{}: {} sections", doc.name(), doc.section_count());
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Document> {
    let parser = ResumeParser::open(path)?;
    Ok(parser.parse())
}

/// Parse a resume text file with custom options.
///
/// # Example
///
/// ```no_run
/// use resumefmt::{parse_file_with_options, ParseOptions};
///
/// let options = ParseOptions::new().strict_headings();
/// let doc = parse_file_with_options("resume.txt", options).unwrap();
/// ```
pub fn parse_file_with_options<P: AsRef<Path>>(path: P, options: ParseOptions) -> Result<Document> {
    let parser = ResumeParser::open_with_options(path, options)?;
    Ok(parser.parse())
}

/// Parse a resume from bytes.
///
/// Fails when the bytes are not UTF-8 text.
pub fn parse_bytes(data: &[u8]) -> Result<Document> {
    let parser = ResumeParser::from_bytes(data)?;
    Ok(parser.parse())
}

/// Parse a resume from bytes with custom options.
pub fn parse_bytes_with_options(data: &[u8], options: ParseOptions) -> Result<Document> {
    let parser = ResumeParser::from_bytes_with_options(data, options)?;
    Ok(parser.parse())
}

/// Parse a resume from a string. Never fails.
///
/// # Example
///
/// ```
/// use resumefmt::parse_str;
///
/// let doc = parse_str("Jane Doe\n\nSKILLS\nRust, Go");
/// assert_eq!(doc.name(), "Jane Doe");
/// ```
pub fn parse_str(text: &str) -> Document {
    ResumeParser::from_text(text).parse()
}

/// Parse a resume from a string with custom options.
pub fn parse_str_with_options(text: &str, options: ParseOptions) -> Document {
    ResumeParser::from_text_with_options(text, options).parse()
}

/// Parse a resume from a reader.
pub fn parse_reader<R: Read>(reader: R) -> Result<Document> {
    let parser = ResumeParser::from_reader(reader)?;
    Ok(parser.parse())
}

/// Parse a resume from a reader with custom options.
pub fn parse_reader_with_options<R: Read>(reader: R, options: ParseOptions) -> Result<Document> {
    let parser = ResumeParser::from_reader_with_options(reader, options)?;
    Ok(parser.parse())
}

/// Parse a resume text file asynchronously.
///
/// The file is read with `tokio::fs`; parsing runs on the calling task.
#[cfg(feature = "async")]
pub async fn parse_file_async<P: AsRef<Path>>(path: P) -> Result<Document> {
    let path = path.as_ref();
    let data = tokio::fs::read(path)
        .await
        .map_err(|source| Error::InputUnreadable {
            path: path.to_path_buf(),
            source,
        })?;

    let mut parser = ResumeParser::from_bytes(&data)?;
    if let Some(name) = path.file_name() {
        parser = parser.with_source(name.to_string_lossy());
    }
    Ok(parser.parse())
}

/// Convert a resume text file to HTML.
///
/// # Example
///
/// ```no_run
/// use resumefmt::to_html;
///
/// let html = to_html("resume.txt").unwrap();
/// std::fs::write("resume.html", html).unwrap();
/// ```
pub fn to_html<P: AsRef<Path>>(path: P) -> Result<String> {
    let doc = parse_file(path)?;
    render::to_html(&doc, &RenderOptions::default())
}

/// Convert a resume text file to HTML with custom options.
pub fn to_html_with_options<P: AsRef<Path>>(path: P, options: &RenderOptions) -> Result<String> {
    let doc = parse_file(path)?;
    render::to_html(&doc, options)
}

/// Convert a resume text file to normalized plain text.
pub fn to_text<P: AsRef<Path>>(path: P, options: &RenderOptions) -> Result<String> {
    let doc = parse_file(path)?;
    render::to_text(&doc, options)
}

/// Convert a resume text file to JSON.
///
/// # Example
///
/// ```no_run
/// use resumefmt::{to_json, JsonFormat};
///
/// let json = to_json("resume.txt", JsonFormat::Pretty).unwrap();
/// std::fs::write("resume.json", json).unwrap();
/// ```
pub fn to_json<P: AsRef<Path>>(path: P, format: JsonFormat) -> Result<String> {
    let doc = parse_file(path)?;
    render::to_json(&doc, format)
}

/// Builder for parsing and rendering resumes.
///
/// # Example
///
/// ```no_run
/// use resumefmt::Resumefmt;
///
/// let html = Resumefmt::new()
///     .strict_headings()
///     .with_title("Jane Doe - CV")
///     .parse("resume.txt")?
///     .to_html()?;
/// # Ok::<(), resumefmt::Error>(())
/// ```
pub struct Resumefmt {
    parse_options: ParseOptions,
    render_options: RenderOptions,
}

impl Resumefmt {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            parse_options: ParseOptions::default(),
            render_options: RenderOptions::default(),
        }
    }

    /// Only accept the known section headings.
    pub fn strict_headings(mut self) -> Self {
        self.parse_options = self.parse_options.strict_headings();
        self
    }

    /// Set cleanup preset.
    pub fn with_cleanup(mut self, preset: CleanupPreset) -> Self {
        self.parse_options = self.parse_options.with_cleanup_preset(preset);
        self
    }

    /// Parse the input exactly as given.
    pub fn without_cleanup(mut self) -> Self {
        self.parse_options = self.parse_options.without_cleanup();
        self
    }

    /// Set the HTML page title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.render_options = self.render_options.with_title(title);
        self
    }

    /// Replace the built-in stylesheet.
    pub fn with_stylesheet(mut self, css: impl Into<String>) -> Self {
        self.render_options = self.render_options.with_stylesheet(css);
        self
    }

    /// Emit unstyled HTML.
    pub fn without_styles(mut self) -> Self {
        self.render_options = self.render_options.without_styles();
        self
    }

    /// Enable frontmatter in text output.
    pub fn with_frontmatter(mut self) -> Self {
        self.render_options = self.render_options.with_frontmatter(true);
        self
    }

    /// Parse a resume file and return a result wrapper.
    pub fn parse<P: AsRef<Path>>(self, path: P) -> Result<ResumefmtResult> {
        let parser = ResumeParser::open_with_options(path, self.parse_options)?;
        Ok(ResumefmtResult {
            document: parser.parse(),
            render_options: self.render_options,
        })
    }

    /// Parse a resume from bytes.
    pub fn parse_bytes(self, data: &[u8]) -> Result<ResumefmtResult> {
        let parser = ResumeParser::from_bytes_with_options(data, self.parse_options)?;
        Ok(ResumefmtResult {
            document: parser.parse(),
            render_options: self.render_options,
        })
    }

    /// Parse a resume from a string.
    pub fn parse_str(self, text: &str) -> ResumefmtResult {
        ResumefmtResult {
            document: ResumeParser::from_text_with_options(text, self.parse_options).parse(),
            render_options: self.render_options,
        }
    }
}

impl Default for Resumefmt {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of parsing a resume.
pub struct ResumefmtResult {
    /// The parsed document
    pub document: Document,
    /// Render options to use
    render_options: RenderOptions,
}

impl ResumefmtResult {
    /// Convert to HTML.
    pub fn to_html(&self) -> Result<String> {
        render::to_html(&self.document, &self.render_options)
    }

    /// Convert to HTML with document statistics.
    pub fn to_html_with_stats(&self) -> Result<RenderResult> {
        render::to_html_with_stats(&self.document, &self.render_options)
    }

    /// Convert to plain text.
    pub fn to_text(&self) -> Result<String> {
        render::to_text(&self.document, &self.render_options)
    }

    /// Convert to JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.document, format)
    }

    /// Get plain text without frontmatter.
    pub fn plain_text(&self) -> String {
        self.document.plain_text()
    }

    /// Get the document.
    pub fn document(&self) -> &Document {
        &self.document
    }
}
