//! Conversion of resume files to HTML and PDF.
//!
//! PDF output is delegated to external engines behind the [`PdfEngine`]
//! trait. Engines are kept in a [`PdfEngineRegistry`] and tried in
//! registration order, so a missing or failing engine falls back to the
//! next one.
//!
//! # Example
//!
//! ```no_run
//! use resumefmt::convert::{ConvertOptions, Converter};
//!
//! fn main() -> resumefmt::Result<()> {
//!     let converter = Converter::new();
//!     let result = converter.convert_file("resume.txt", &ConvertOptions::new().with_pdf(true))?;
//!     println!("{}", result.html_path.display());
//!     Ok(())
//! }
//! ```

mod pdf;

pub use pdf::CommandEngine;

use crate::error::{Error, Result};
use crate::model::{Document, Metadata};
use crate::parser::{ParseOptions, ResumeParser};
use crate::render::{to_html, to_html_with_stats, RenderOptions, ResumeStats};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Trait for PDF engines.
///
/// Implement this trait to plug in another HTML-to-PDF backend.
pub trait PdfEngine: Send + Sync {
    /// Get the name of this engine.
    fn name(&self) -> &str;

    /// Check whether the engine can run on this system.
    fn is_available(&self) -> bool;

    /// Turn the HTML file into a PDF file.
    fn render(&self, html_path: &Path, pdf_path: &Path) -> Result<()>;
}

/// Ordered registry of PDF engines.
///
/// Lookup by name is case-insensitive.
pub struct PdfEngineRegistry {
    engines: Vec<Arc<dyn PdfEngine>>,
    by_name: HashMap<String, usize>,
}

impl PdfEngineRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            engines: Vec::new(),
            by_name: HashMap::new(),
        }
    }

    /// Create a registry with the built-in engines (wkhtmltopdf, then weasyprint).
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(CommandEngine::wkhtmltopdf()));
        registry.register(Arc::new(CommandEngine::weasyprint()));
        registry
    }

    /// Register an engine.
    ///
    /// An engine with the same name replaces the earlier one in place.
    pub fn register(&mut self, engine: Arc<dyn PdfEngine>) {
        let key = engine.name().to_lowercase();
        match self.by_name.get(&key) {
            Some(&index) => self.engines[index] = engine,
            None => {
                self.by_name.insert(key, self.engines.len());
                self.engines.push(engine);
            }
        }
    }

    /// Get an engine by name.
    pub fn get(&self, name: &str) -> Option<Arc<dyn PdfEngine>> {
        self.by_name
            .get(&name.to_lowercase())
            .map(|&index| self.engines[index].clone())
    }

    /// Names of all registered engines, in order.
    pub fn names(&self) -> Vec<&str> {
        self.engines.iter().map(|e| e.name()).collect()
    }

    /// Registered engines that are available on this system.
    pub fn available(&self) -> Vec<Arc<dyn PdfEngine>> {
        self.engines
            .iter()
            .filter(|e| e.is_available())
            .cloned()
            .collect()
    }

    /// Check if no engines are registered.
    pub fn is_empty(&self) -> bool {
        self.engines.is_empty()
    }

    /// Render a PDF from an HTML file.
    ///
    /// With `engine` set, only that engine is used. Otherwise every
    /// available engine is tried in order until one succeeds. Returns the
    /// name of the engine that produced the PDF.
    pub fn render_pdf(&self, html_path: &Path, pdf_path: &Path, engine: Option<&str>) -> Result<String> {
        let candidates = match engine {
            Some(name) => {
                let engine = self
                    .get(name)
                    .ok_or_else(|| Error::UnknownEngine(name.to_string()))?;
                if !engine.is_available() {
                    return Err(Error::PdfEngineUnavailable);
                }
                vec![engine]
            }
            None => self.available(),
        };

        if candidates.is_empty() {
            return Err(Error::PdfEngineUnavailable);
        }

        let mut last_error = Error::PdfEngineUnavailable;
        for engine in candidates {
            match engine.render(html_path, pdf_path) {
                Ok(()) => {
                    log::info!("PDF written by {}: {}", engine.name(), pdf_path.display());
                    return Ok(engine.name().to_string());
                }
                Err(e) => {
                    log::warn!("PDF generation with {} failed: {}", engine.name(), e);
                    last_error = e;
                }
            }
        }

        Err(last_error)
    }
}

impl Default for PdfEngineRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Options for converting a resume file.
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    /// Parsing options
    pub parse: ParseOptions,

    /// Rendering options
    pub render: RenderOptions,

    /// HTML output path (None = input path with `.html` extension)
    pub html_output: Option<PathBuf>,

    /// Also produce a PDF
    pub pdf: bool,

    /// PDF output path (None = HTML path with `.pdf` extension)
    pub pdf_output: Option<PathBuf>,

    /// Only use this PDF engine
    pub engine: Option<String>,

    /// Whether to collect statistics during conversion
    pub collect_stats: bool,
}

impl ConvertOptions {
    /// Create new conversion options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set parsing options.
    pub fn with_parse_options(mut self, options: ParseOptions) -> Self {
        self.parse = options;
        self
    }

    /// Set rendering options.
    pub fn with_render_options(mut self, options: RenderOptions) -> Self {
        self.render = options;
        self
    }

    /// Set the HTML output path.
    pub fn with_html_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.html_output = Some(path.into());
        self
    }

    /// Enable or disable PDF output.
    pub fn with_pdf(mut self, pdf: bool) -> Self {
        self.pdf = pdf;
        self
    }

    /// Set the PDF output path. Implies PDF output.
    pub fn with_pdf_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.pdf_output = Some(path.into());
        self.pdf = true;
        self
    }

    /// Use only the named PDF engine.
    pub fn with_engine(mut self, engine: impl Into<String>) -> Self {
        self.engine = Some(engine.into());
        self
    }

    /// Enable statistics collection.
    pub fn with_stats(mut self, collect: bool) -> Self {
        self.collect_stats = collect;
        self
    }

    /// HTML path for an input file.
    pub fn html_path_for(&self, input: &Path) -> PathBuf {
        self.html_output
            .clone()
            .unwrap_or_else(|| input.with_extension("html"))
    }

    /// PDF path for an HTML file.
    pub fn pdf_path_for(&self, html: &Path) -> PathBuf {
        self.pdf_output
            .clone()
            .unwrap_or_else(|| html.with_extension("pdf"))
    }
}

/// Result of converting a resume file.
#[derive(Debug, Clone)]
pub struct ConvertResult {
    /// Where the HTML was written
    pub html_path: PathBuf,

    /// Where the PDF was written, if requested
    pub pdf_path: Option<PathBuf>,

    /// Engine that produced the PDF
    pub engine: Option<String>,

    /// Source document metadata
    pub metadata: Metadata,

    /// Document statistics (if collected)
    pub stats: Option<ResumeStats>,
}

/// Resume file converter.
pub struct Converter {
    engines: PdfEngineRegistry,
}

impl Converter {
    /// Create a converter with the built-in PDF engines.
    pub fn new() -> Self {
        Self::with_engines(PdfEngineRegistry::with_defaults())
    }

    /// Create a converter with a custom engine registry.
    pub fn with_engines(engines: PdfEngineRegistry) -> Self {
        Self { engines }
    }

    /// Access the engine registry.
    pub fn engines(&self) -> &PdfEngineRegistry {
        &self.engines
    }

    /// Convert a resume file to HTML and, optionally, PDF.
    ///
    /// The HTML is written first. A PDF failure is returned as an error but
    /// the HTML file is left in place.
    pub fn convert_file<P: AsRef<Path>>(&self, input: P, options: &ConvertOptions) -> Result<ConvertResult> {
        let input = input.as_ref();
        let document = ResumeParser::open_with_options(input, options.parse.clone())?.parse();
        let html_path = options.html_path_for(input);
        self.convert_document(&document, &html_path, options)
    }

    /// Write an already parsed document to HTML and, optionally, PDF.
    pub fn convert_document(
        &self,
        document: &Document,
        html_path: &Path,
        options: &ConvertOptions,
    ) -> Result<ConvertResult> {
        let (html, stats) = if options.collect_stats {
            let result = to_html_with_stats(document, &options.render)?;
            (result.content, Some(result.stats))
        } else {
            (to_html(document, &options.render)?, None)
        };

        write_output(html_path, &html)?;
        log::info!("HTML written: {}", html_path.display());

        let mut result = ConvertResult {
            html_path: html_path.to_path_buf(),
            pdf_path: None,
            engine: None,
            metadata: document.metadata.clone(),
            stats,
        };

        if options.pdf {
            let pdf_path = options.pdf_path_for(html_path);
            let engine = self
                .engines
                .render_pdf(html_path, &pdf_path, options.engine.as_deref())?;
            result.pdf_path = Some(pdf_path);
            result.engine = Some(engine);
        }

        Ok(result)
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::new()
    }
}

fn write_output(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)?;
    Ok(())
}
