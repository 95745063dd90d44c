//! PDF engines backed by external programs.

use std::ffi::OsString;
use std::path::Path;
use std::process::{Command, Stdio};

use crate::error::{Error, Result};

use super::PdfEngine;

/// A PDF engine that runs `<program> [args...] <html> <pdf>`.
#[derive(Debug, Clone)]
pub struct CommandEngine {
    name: String,
    program: OsString,
    args: Vec<OsString>,
}

impl CommandEngine {
    /// Create an engine for a program.
    pub fn new(name: impl Into<String>, program: impl Into<OsString>) -> Self {
        Self {
            name: name.into(),
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Add an argument placed before the input and output paths.
    pub fn with_arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// wkhtmltopdf, run quietly.
    pub fn wkhtmltopdf() -> Self {
        Self::new("wkhtmltopdf", "wkhtmltopdf").with_arg("--quiet")
    }

    /// WeasyPrint.
    pub fn weasyprint() -> Self {
        Self::new("weasyprint", "weasyprint")
    }

    /// Program that will be executed.
    pub fn program(&self) -> &std::ffi::OsStr {
        &self.program
    }

    fn failure(&self, message: impl Into<String>) -> Error {
        Error::PdfEngine {
            engine: self.name.clone(),
            message: message.into(),
        }
    }
}

impl PdfEngine for CommandEngine {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_available(&self) -> bool {
        let available = Command::new(&self.program)
            .arg("--version")
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|status| status.success())
            .unwrap_or(false);

        if !available {
            log::debug!("{} not found on PATH", self.program.to_string_lossy());
        }
        available
    }

    fn render(&self, html_path: &Path, pdf_path: &Path) -> Result<()> {
        log::debug!(
            "Running {} on {} -> {}",
            self.name,
            html_path.display(),
            pdf_path.display()
        );

        let output = Command::new(&self.program)
            .args(&self.args)
            .arg(html_path)
            .arg(pdf_path)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| self.failure(format!("failed to run: {}", e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(self.failure(format!("{}: {}", output.status, stderr.trim())));
        }

        if !pdf_path.exists() {
            return Err(self.failure("exited successfully but wrote no PDF"));
        }

        Ok(())
    }
}
