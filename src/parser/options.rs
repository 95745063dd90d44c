//! Parsing options and configuration.

use super::cleanup::{CleanupOptions, CleanupPreset};

/// Default number of preamble lines searched for contact details.
pub const DEFAULT_CONTACT_SCAN_LINES: usize = 10;

/// Options for parsing resume text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    /// How heading lines are recognized
    pub heading_mode: HeadingMode,

    /// Input cleanup applied before classification (None = raw input)
    pub cleanup: Option<CleanupOptions>,

    /// How many preamble lines to search for contact details
    pub contact_scan_lines: usize,
}

impl ParseOptions {
    /// Create new parse options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set heading mode.
    pub fn with_heading_mode(mut self, mode: HeadingMode) -> Self {
        self.heading_mode = mode;
        self
    }

    /// Only accept the fixed set of known headings.
    pub fn strict_headings(mut self) -> Self {
        self.heading_mode = HeadingMode::Strict;
        self
    }

    /// Also accept heading-shaped lines as `Other` sections.
    pub fn lenient_headings(mut self) -> Self {
        self.heading_mode = HeadingMode::Lenient;
        self
    }

    /// Set cleanup options.
    pub fn with_cleanup(mut self, cleanup: CleanupOptions) -> Self {
        self.cleanup = Some(cleanup);
        self
    }

    /// Set cleanup preset.
    pub fn with_cleanup_preset(mut self, preset: CleanupPreset) -> Self {
        self.cleanup = Some(CleanupOptions::from_preset(preset));
        self
    }

    /// Parse the input exactly as given.
    pub fn without_cleanup(mut self) -> Self {
        self.cleanup = None;
        self
    }

    /// Set how many preamble lines are searched for contact details.
    pub fn with_contact_scan_lines(mut self, lines: usize) -> Self {
        self.contact_scan_lines = lines.max(1);
        self
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            heading_mode: HeadingMode::Lenient,
            cleanup: Some(CleanupOptions::standard()),
            contact_scan_lines: DEFAULT_CONTACT_SCAN_LINES,
        }
    }
}

/// Heading recognition mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeadingMode {
    /// Only the fixed known-heading list opens sections
    Strict,
    /// Known headings plus short all-caps lines set off by blank lines
    #[default]
    Lenient,
}
