//! Plain-text resume parsing module.
//!
//! Parsing runs in four stages: the classifier labels each line, the
//! segmenter groups lines under headings, the interpreter applies a
//! per-section grammar and the assembler builds the final document.

mod assembler;
mod classifier;
mod cleanup;
mod contact;
mod interpreter;
mod options;
mod resume_parser;
mod segmenter;

pub use assembler::assemble;
pub use classifier::{strip_bullet, Classifier, HeadingMatch, KnownHeading, LineContext, LineKind};
pub use cleanup::{CleanupOptions, CleanupPipeline, CleanupPreset};
pub use contact::{ContactExtractor, Preamble};
pub use interpreter::{Interpretation, Interpreter};
pub use options::{HeadingMode, ParseOptions, DEFAULT_CONTACT_SCAN_LINES};
pub use resume_parser::ResumeParser;
pub use segmenter::{blocks, RawSection, Segmented, Segmenter, SourceLine};
