//! Error types for resumefmt library.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for resumefmt operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while converting a resume.
///
/// Parsing itself never produces an error: lines that do not fit the
/// expected shape degrade to plain text or partial entries. Only the I/O
/// boundary, input detection, rendering and PDF engines report failures.
#[derive(Error, Debug)]
pub enum Error {
    /// The input file is missing or cannot be read.
    #[error("Cannot read input file {}: {source}", path.display())]
    InputUnreadable {
        /// Path that was requested
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input is not valid UTF-8 text.
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// The input looks like a binary or non-text document format.
    #[error("Unsupported input format: {0} (expected plain text)")]
    UnsupportedFormat(String),

    /// Error during rendering (HTML, text, JSON).
    #[error("Rendering error: {0}")]
    Render(String),

    /// No PDF engine is installed or registered.
    #[error("No PDF engine available (install wkhtmltopdf or weasyprint)")]
    PdfEngineUnavailable,

    /// A PDF engine ran but failed to produce output.
    #[error("PDF engine '{engine}' failed: {message}")]
    PdfEngine {
        /// Engine name
        engine: String,
        /// Failure description
        message: String,
    },

    /// The requested PDF engine is not registered.
    #[error("Unknown PDF engine: {0}")]
    UnknownEngine(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Check whether this error came from the PDF stage.
    ///
    /// A PDF failure never invalidates HTML output that was already written.
    pub fn is_pdf_failure(&self) -> bool {
        matches!(
            self,
            Error::PdfEngineUnavailable | Error::PdfEngine { .. } | Error::UnknownEngine(_)
        )
    }
}
