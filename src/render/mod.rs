//! Rendering module for converting parsed resumes to output formats.

mod html;
mod json;
mod options;
mod result;
mod text;

pub use html::{escape_html, to_html, to_html_with_stats, HtmlRenderer, DEFAULT_STYLESHEET};
pub use json::{to_json, JsonFormat};
pub use options::RenderOptions;
pub use result::{RenderResult, ResumeStats};
pub use text::to_text;
