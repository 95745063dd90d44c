//! Input cleanup pipeline applied before line classification.
//!
//! Every stage works line by line, so the number of lines never changes and
//! line numbers reported by the segmenter match the source file.

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

/// Cleanup preset levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CleanupPreset {
    /// Minimal cleanup: BOM, line endings, NFC, trailing whitespace
    Minimal,
    /// Standard cleanup: Minimal + ligatures, bullets, stray characters, tabs
    #[default]
    Standard,
    /// Aggressive cleanup: Standard + PUA removal and space collapsing
    Aggressive,
}

/// Options for input cleanup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanupOptions {
    /// Normalize Unicode to NFC form
    pub normalize_unicode: bool,

    /// Standardize leading bullet characters (●, ○, ▪ → •)
    pub standardize_bullets: bool,

    /// Fix ligatures (fi, fl, etc.)
    pub fix_ligatures: bool,

    /// Remove Private Use Area (PUA) characters
    pub remove_pua: bool,

    /// Remove U+FFFD and other control characters
    pub remove_stray_chars: bool,

    /// Replace tabs with this many spaces (0 = keep tabs)
    pub tab_width: u8,

    /// Collapse runs of spaces inside a line to one space
    pub collapse_spaces: bool,
}

impl CleanupOptions {
    /// Create options from a preset.
    pub fn from_preset(preset: CleanupPreset) -> Self {
        match preset {
            CleanupPreset::Minimal => Self::minimal(),
            CleanupPreset::Standard => Self::standard(),
            CleanupPreset::Aggressive => Self::aggressive(),
        }
    }

    /// Minimal cleanup options.
    pub fn minimal() -> Self {
        Self {
            normalize_unicode: true,
            standardize_bullets: false,
            fix_ligatures: false,
            remove_pua: false,
            remove_stray_chars: false,
            tab_width: 0,
            collapse_spaces: false,
        }
    }

    /// Standard cleanup options.
    pub fn standard() -> Self {
        Self {
            normalize_unicode: true,
            standardize_bullets: true,
            fix_ligatures: true,
            remove_pua: false,
            remove_stray_chars: true,
            tab_width: 4,
            collapse_spaces: false,
        }
    }

    /// Aggressive cleanup options.
    ///
    /// Collapsing spaces also removes the wide gaps that separate an
    /// inline date range from a company name, so such dates must then be
    /// separated by `|` or a comma to be detected.
    pub fn aggressive() -> Self {
        Self {
            normalize_unicode: true,
            standardize_bullets: true,
            fix_ligatures: true,
            remove_pua: true,
            remove_stray_chars: true,
            tab_width: 4,
            collapse_spaces: true,
        }
    }
}

impl Default for CleanupOptions {
    fn default() -> Self {
        Self::standard()
    }
}

const BULLET_GLYPHS: [char; 12] = [
    '●', '○', '■', '□', '▪', '▫', '◦', '‣', '∙', '➢', '►', '\u{F0B7}',
];

/// Text cleanup pipeline.
pub struct CleanupPipeline {
    options: CleanupOptions,
    spaces_regex: Regex,
    ligature_map: Vec<(&'static str, &'static str)>,
}

impl CleanupPipeline {
    /// Create a new cleanup pipeline with the given options.
    pub fn new(options: CleanupOptions) -> Self {
        Self {
            options,
            spaces_regex: Regex::new(r"[ ]{2,}").expect("valid spaces regex"),
            ligature_map: vec![
                ("\u{FB00}", "ff"),  // ﬀ
                ("\u{FB01}", "fi"),  // ﬁ
                ("\u{FB02}", "fl"),  // ﬂ
                ("\u{FB03}", "ffi"), // ﬃ
                ("\u{FB04}", "ffl"), // ﬄ
                ("\u{FB05}", "st"),  // ﬅ
                ("\u{FB06}", "st"),  // ﬆ
            ],
        }
    }

    /// Create a pipeline from a preset.
    pub fn from_preset(preset: CleanupPreset) -> Self {
        Self::new(CleanupOptions::from_preset(preset))
    }

    /// Process text through the cleanup pipeline.
    pub fn process(&self, text: &str) -> String {
        let text = text.strip_prefix('\u{FEFF}').unwrap_or(text);
        let text = text.replace("\r\n", "\n").replace('\r', "\n");

        text.split('\n')
            .map(|line| self.process_line(line))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn process_line(&self, line: &str) -> String {
        let mut result: String = if self.options.normalize_unicode {
            line.nfc().collect()
        } else {
            line.to_string()
        };

        // Standardize bullets before PUA removal: Symbol-font bullets live in the PUA
        if self.options.standardize_bullets {
            result = self.standardize_bullet(&result);
        }

        if self.options.fix_ligatures {
            for (ligature, replacement) in &self.ligature_map {
                result = result.replace(ligature, replacement);
            }
        }

        if self.options.remove_pua {
            result = remove_pua_chars(&result);
        }

        if self.options.tab_width > 0 {
            result = result.replace('\t', &" ".repeat(self.options.tab_width as usize));
        }

        if self.options.remove_stray_chars {
            result = result
                .chars()
                .filter(|c| *c != '\u{FFFD}' && (*c == '\t' || !c.is_control()))
                .collect();
        }

        if self.options.collapse_spaces {
            let leading = result.len() - result.trim_start().len();
            let collapsed = format!(
                "{}{}",
                &result[..leading],
                self.spaces_regex.replace_all(result.trim_start(), " ")
            );
            result = collapsed;
        }

        result.trim_end().to_string()
    }

    fn standardize_bullet(&self, line: &str) -> String {
        let trimmed = line.trim_start();
        let indent = &line[..line.len() - trimmed.len()];
        let mut chars = trimmed.chars();
        match chars.next() {
            Some(c) if BULLET_GLYPHS.contains(&c) => format!("{}•{}", indent, chars.as_str()),
            _ => line.to_string(),
        }
    }
}

impl Default for CleanupPipeline {
    fn default() -> Self {
        Self::new(CleanupOptions::default())
    }
}

fn remove_pua_chars(text: &str) -> String {
    text.chars()
        .filter(|c| {
            let code = *c as u32;
            !(0xE000..=0xF8FF).contains(&code)
                && !(0xF0000..=0xFFFFD).contains(&code)
                && !(0x100000..=0x10FFFD).contains(&code)
        })
        .collect()
}
