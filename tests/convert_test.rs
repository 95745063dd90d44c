//! Integration tests for HTML and PDF conversion.
//!
//! External PDF engines are replaced by mock engines so these tests run
//! without wkhtmltopdf or WeasyPrint installed.

use std::fs;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use resumefmt::{ConvertOptions, Converter, Error, PdfEngine, PdfEngineRegistry, Result};

const RESUME: &str = "Jane Doe\njane@example.com\n\nSKILLS\nRust, Go\n";

/// Mock engine that either writes a small PDF or fails.
struct MockEngine {
    name: &'static str,
    available: bool,
    fails: bool,
    calls: AtomicUsize,
}

impl MockEngine {
    fn new(name: &'static str, available: bool, fails: bool) -> Arc<Self> {
        Arc::new(Self {
            name,
            available,
            fails,
            calls: AtomicUsize::new(0),
        })
    }
}

impl PdfEngine for MockEngine {
    fn name(&self) -> &str {
        self.name
    }

    fn is_available(&self) -> bool {
        self.available
    }

    fn render(&self, html_path: &Path, pdf_path: &Path) -> Result<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fails {
            return Err(Error::PdfEngine {
                engine: self.name.to_string(),
                message: "mock failure".to_string(),
            });
        }
        assert!(html_path.exists(), "HTML must be written before the PDF");
        fs::write(pdf_path, b"%PDF-1.4\n%%EOF\n")?;
        Ok(())
    }
}

fn write_resume(dir: &Path) -> std::path::PathBuf {
    let input = dir.join("jane.txt");
    fs::write(&input, RESUME).unwrap();
    input
}

#[test]
fn test_convert_html_only() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_resume(dir.path());

    let converter = Converter::with_engines(PdfEngineRegistry::new());
    let result = converter
        .convert_file(&input, &ConvertOptions::new().with_stats(true))
        .unwrap();

    assert_eq!(result.html_path, dir.path().join("jane.html"));
    assert!(result.pdf_path.is_none());
    assert!(result.engine.is_none());
    assert_eq!(result.metadata.source.as_deref(), Some("jane.txt"));
    assert_eq!(result.stats.map(|s| s.skill_count), Some(2));

    let html = fs::read_to_string(&result.html_path).unwrap();
    assert!(html.contains("Jane Doe"));
}

#[test]
fn test_convert_with_pdf() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_resume(dir.path());

    let mut registry = PdfEngineRegistry::new();
    registry.register(MockEngine::new("mock", true, false));
    let converter = Converter::with_engines(registry);

    let result = converter
        .convert_file(&input, &ConvertOptions::new().with_pdf(true))
        .unwrap();

    let pdf = dir.path().join("jane.pdf");
    assert_eq!(result.pdf_path.as_deref(), Some(pdf.as_path()));
    assert_eq!(result.engine.as_deref(), Some("mock"));
    assert!(fs::read(&pdf).unwrap().starts_with(b"%PDF"));
}

#[test]
fn test_convert_custom_output_paths() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_resume(dir.path());

    let mut registry = PdfEngineRegistry::new();
    registry.register(MockEngine::new("mock", true, false));
    let converter = Converter::with_engines(registry);

    let html = dir.path().join("out").join("cv.html");
    let pdf = dir.path().join("pdf").join("cv.pdf");
    fs::create_dir_all(pdf.parent().unwrap()).unwrap();
    let options = ConvertOptions::new()
        .with_html_output(&html)
        .with_pdf_output(&pdf);

    let result = converter.convert_file(&input, &options).unwrap();
    assert_eq!(result.html_path, html);
    assert!(html.exists());
    assert!(pdf.exists());
}

#[test]
fn test_pdf_falls_back_to_next_engine() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_resume(dir.path());

    let broken = MockEngine::new("broken", true, true);
    let missing = MockEngine::new("missing", false, false);
    let working = MockEngine::new("working", true, false);

    let mut registry = PdfEngineRegistry::new();
    registry.register(broken.clone());
    registry.register(missing.clone());
    registry.register(working.clone());
    let converter = Converter::with_engines(registry);

    let result = converter
        .convert_file(&input, &ConvertOptions::new().with_pdf(true))
        .unwrap();

    assert_eq!(result.engine.as_deref(), Some("working"));
    assert_eq!(broken.calls.load(Ordering::SeqCst), 1);
    assert_eq!(missing.calls.load(Ordering::SeqCst), 0);
    assert_eq!(working.calls.load(Ordering::SeqCst), 1);
}

#[test]
fn test_pdf_failure_keeps_html() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_resume(dir.path());

    let mut registry = PdfEngineRegistry::new();
    registry.register(MockEngine::new("broken", true, true));
    let converter = Converter::with_engines(registry);

    let err = converter
        .convert_file(&input, &ConvertOptions::new().with_pdf(true))
        .unwrap_err();

    assert!(err.is_pdf_failure());
    assert!(matches!(err, Error::PdfEngine { ref engine, .. } if engine == "broken"));
    assert!(dir.path().join("jane.html").exists());
    assert!(!dir.path().join("jane.pdf").exists());
}

#[test]
fn test_no_engine_available() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_resume(dir.path());

    let converter = Converter::with_engines(PdfEngineRegistry::new());
    let err = converter
        .convert_file(&input, &ConvertOptions::new().with_pdf(true))
        .unwrap_err();

    assert!(matches!(err, Error::PdfEngineUnavailable));
    assert!(dir.path().join("jane.html").exists());
}

#[test]
fn test_named_engine() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_resume(dir.path());

    let first = MockEngine::new("first", true, false);
    let second = MockEngine::new("second", true, false);
    let mut registry = PdfEngineRegistry::new();
    registry.register(first.clone());
    registry.register(second.clone());
    let converter = Converter::with_engines(registry);

    let result = converter
        .convert_file(&input, &ConvertOptions::new().with_engine("SECOND").with_pdf(true))
        .unwrap();
    assert_eq!(result.engine.as_deref(), Some("second"));
    assert_eq!(first.calls.load(Ordering::SeqCst), 0);

    let err = converter
        .convert_file(&input, &ConvertOptions::new().with_engine("prince").with_pdf(true))
        .unwrap_err();
    assert!(matches!(err, Error::UnknownEngine(ref name) if name == "prince"));
}

#[test]
fn test_convert_rejects_binary_input() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("resume.docx");
    fs::write(&input, b"PK\x03\x04\x14\x00").unwrap();

    let converter = Converter::with_engines(PdfEngineRegistry::new());
    let err = converter
        .convert_file(&input, &ConvertOptions::new())
        .unwrap_err();

    assert!(matches!(err, Error::UnsupportedFormat(_)));
    assert!(!dir.path().join("resume.html").exists());
}
