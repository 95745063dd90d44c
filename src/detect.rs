//! Input format detection and validation.
//!
//! Resumes are accepted as plain UTF-8 text only. Common document formats
//! that users tend to pass by mistake (PDF, DOCX, RTF) are recognized by
//! their magic bytes and rejected before any parsing happens.

use crate::error::{Error, Result};
use std::path::Path;

/// Plain-text format information.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextFormat {
    /// Whether the data starts with a UTF-8 byte order mark
    pub has_bom: bool,
    /// Dominant line ending style
    pub line_ending: LineEnding,
}

impl std::fmt::Display for TextFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "UTF-8 text")?;
        if self.has_bom {
            write!(f, " with BOM")?;
        }
        match self.line_ending {
            LineEnding::Lf => write!(f, ", LF line endings"),
            LineEnding::CrLf => write!(f, ", CRLF line endings"),
            LineEnding::Cr => write!(f, ", CR line endings"),
            LineEnding::Mixed => write!(f, ", mixed line endings"),
            LineEnding::None => Ok(()),
        }
    }
}

/// Line ending style found in the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEnding {
    /// Unix `\n`
    Lf,
    /// Windows `\r\n`
    CrLf,
    /// Classic Mac `\r`
    Cr,
    /// More than one style
    Mixed,
    /// Single line, no terminator
    None,
}

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Magic prefixes of formats we refuse to treat as text.
const BINARY_SIGNATURES: &[(&[u8], &str)] = &[
    (b"%PDF-", "PDF"),
    (b"PK\x03\x04", "ZIP/DOCX"),
    (b"{\\rtf", "RTF"),
    (b"\xD0\xCF\x11\xE0", "OLE2/DOC"),
];

/// How far into the data to look for NUL bytes.
const BINARY_SNIFF_LEN: usize = 8 * 1024;

/// Detect the text format of a file.
///
/// # Example
/// ```no_run
/// use resumefmt::detect::detect_format_from_path;
///
/// let format = detect_format_from_path("resume.txt").unwrap();
/// println!("{}", format);
/// ```
pub fn detect_format_from_path<P: AsRef<Path>>(path: P) -> Result<TextFormat> {
    let path = path.as_ref();
    let data = std::fs::read(path).map_err(|source| Error::InputUnreadable {
        path: path.to_path_buf(),
        source,
    })?;
    detect_format_from_bytes(&data)
}

/// Detect the text format of raw bytes.
///
/// # Returns
/// * `Ok(TextFormat)` if the data is UTF-8 text (empty data included)
/// * `Err(Error::UnsupportedFormat)` for known binary formats
/// * `Err(Error::Encoding)` for UTF-16 or invalid UTF-8
pub fn detect_format_from_bytes(data: &[u8]) -> Result<TextFormat> {
    for (magic, name) in BINARY_SIGNATURES {
        if data.starts_with(magic) {
            return Err(Error::UnsupportedFormat((*name).to_string()));
        }
    }

    if data.starts_with(b"\xFF\xFE") || data.starts_with(b"\xFE\xFF") {
        return Err(Error::Encoding(
            "UTF-16 input is not supported, save the file as UTF-8".to_string(),
        ));
    }

    let sniff = &data[..data.len().min(BINARY_SNIFF_LEN)];
    if sniff.contains(&0) {
        return Err(Error::UnsupportedFormat("binary".to_string()));
    }

    if let Err(e) = std::str::from_utf8(data) {
        return Err(Error::Encoding(format!(
            "invalid UTF-8 at byte {}",
            e.valid_up_to()
        )));
    }

    Ok(TextFormat {
        has_bom: data.starts_with(UTF8_BOM),
        line_ending: detect_line_ending(data),
    })
}

/// Validate bytes and decode them into a string without the BOM.
pub fn decode_text(data: &[u8]) -> Result<String> {
    let format = detect_format_from_bytes(data)?;
    let body = if format.has_bom {
        &data[UTF8_BOM.len()..]
    } else {
        data
    };
    // Already validated above.
    String::from_utf8(body.to_vec()).map_err(|e| Error::Encoding(e.to_string()))
}

fn detect_line_ending(data: &[u8]) -> LineEnding {
    let mut lf = 0usize;
    let mut crlf = 0usize;
    let mut cr = 0usize;

    let mut i = 0;
    while i < data.len() {
        match data[i] {
            b'\r' if data.get(i + 1) == Some(&b'\n') => {
                crlf += 1;
                i += 1;
            }
            b'\r' => cr += 1,
            b'\n' => lf += 1,
            _ => {}
        }
        i += 1;
    }

    match (lf > 0, crlf > 0, cr > 0) {
        (false, false, false) => LineEnding::None,
        (true, false, false) => LineEnding::Lf,
        (false, true, false) => LineEnding::CrLf,
        (false, false, true) => LineEnding::Cr,
        _ => LineEnding::Mixed,
    }
}

/// Check if a file is readable plain text.
pub fn is_plain_text<P: AsRef<Path>>(path: P) -> bool {
    detect_format_from_path(path).is_ok()
}

/// Check if bytes are acceptable plain text.
pub fn is_plain_text_bytes(data: &[u8]) -> bool {
    detect_format_from_bytes(data).is_ok()
}
