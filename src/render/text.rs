//! Plain text rendering.

use crate::error::Result;
use crate::model::Document;

use super::RenderOptions;

/// Convert a document to plain text.
pub fn to_text(doc: &Document, options: &RenderOptions) -> Result<String> {
    let mut output = String::new();

    if options.include_frontmatter {
        output.push_str(&doc.to_yaml_frontmatter());
    }
    output.push_str(doc.plain_text().trim());
    output.push('\n');

    Ok(output)
}
