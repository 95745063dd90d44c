//! Rendering options and configuration.

/// Options for rendering a resume.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Page title (None = "<name> - Resume")
    pub title: Option<String>,

    /// Stylesheet replacing the built-in theme
    pub stylesheet: Option<String>,

    /// Embed a stylesheet in the HTML head
    pub include_styles: bool,

    /// Prefix contact items with an icon
    pub contact_icons: bool,

    /// Show raw source lines for entries with missing required fields
    pub raw_fallback: bool,

    /// Include YAML frontmatter with metadata (text output)
    pub include_frontmatter: bool,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Replace the built-in stylesheet.
    pub fn with_stylesheet(mut self, css: impl Into<String>) -> Self {
        self.stylesheet = Some(css.into());
        self.include_styles = true;
        self
    }

    /// Enable or disable the embedded stylesheet.
    pub fn with_styles(mut self, include: bool) -> Self {
        self.include_styles = include;
        self
    }

    /// Emit unstyled HTML.
    pub fn without_styles(self) -> Self {
        self.with_styles(false)
    }

    /// Enable or disable contact icons.
    pub fn with_contact_icons(mut self, icons: bool) -> Self {
        self.contact_icons = icons;
        self
    }

    /// Enable or disable raw-line fallback for incomplete entries.
    pub fn with_raw_fallback(mut self, fallback: bool) -> Self {
        self.raw_fallback = fallback;
        self
    }

    /// Enable or disable frontmatter.
    pub fn with_frontmatter(mut self, include: bool) -> Self {
        self.include_frontmatter = include;
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            title: None,
            stylesheet: None,
            include_styles: true,
            contact_icons: true,
            raw_fallback: true,
            include_frontmatter: false,
        }
    }
}
