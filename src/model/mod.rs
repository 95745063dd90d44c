//! Document model types for resume content representation.
//!
//! This module defines the intermediate representation that bridges
//! plain-text parsing and rendering. A `Document` is built once per input
//! and not modified afterwards.

mod document;
mod entry;
mod section;

pub use document::{ContactBlock, Document, Metadata, DEFAULT_NAME};
pub use entry::{
    CertificationEntry, EducationEntry, EntryShape, ExperienceEntry, HonorEntry, IssuerEntry,
    Parsed, SkillsEntry,
};
pub use section::{Section, SectionBody, SectionKind};
