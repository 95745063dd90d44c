//! Document assembly.

use super::contact::Preamble;
use super::interpreter::Interpretation;
use crate::model::{Document, Metadata};

/// Combine the preamble and interpreted sections into a document.
///
/// Summary sections are merged into the single document summary. When the
/// input has no summary section, preamble prose takes its place; otherwise
/// that prose is kept as extra contact lines.
pub fn assemble(preamble: Preamble, interpreted: Vec<Interpretation>, metadata: Metadata) -> Document {
    let Preamble { mut contact, prose } = preamble;

    let mut summaries = Vec::new();
    let mut sections = Vec::new();
    for item in interpreted {
        match item {
            Interpretation::Summary(text) => {
                if !text.trim().is_empty() {
                    summaries.push(text);
                }
            }
            Interpretation::Section(section) => sections.push(section),
        }
    }

    let summary = if summaries.is_empty() {
        (!prose.is_empty()).then(|| prose.join("\n\n"))
    } else {
        contact.extra.extend(prose);
        Some(summaries.join("\n\n"))
    };

    Document {
        contact,
        summary,
        sections,
        metadata,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ContactBlock, Section, SectionBody};

    fn preamble(prose: &[&str]) -> Preamble {
        Preamble {
            contact: ContactBlock::new("Jane Doe"),
            prose: prose.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn other(title: &str) -> Interpretation {
        Interpretation::Section(Section::new(
            title,
            SectionBody::Other {
                text: "x".to_string(),
            },
        ))
    }

    #[test]
    fn test_sections_keep_order() {
        let doc = assemble(
            preamble(&[]),
            vec![other("B"), other("A"), other("C")],
            Metadata::default(),
        );
        let titles: Vec<_> = doc.sections.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["B", "A", "C"]);
        assert_eq!(doc.summary, None);
    }

    #[test]
    fn test_summaries_merged() {
        let doc = assemble(
            preamble(&["Senior Engineer"]),
            vec![
                Interpretation::Summary("First.".to_string()),
                other("PROJECTS"),
                Interpretation::Summary("Second.".to_string()),
            ],
            Metadata::default(),
        );
        assert_eq!(doc.summary.as_deref(), Some("First.\n\nSecond."));
        assert_eq!(doc.contact.extra, vec!["Senior Engineer"]);
        assert_eq!(doc.section_count(), 1);
    }

    #[test]
    fn test_preamble_prose_becomes_summary() {
        let doc = assemble(preamble(&["Builds things."]), Vec::new(), Metadata::default());
        assert_eq!(doc.summary.as_deref(), Some("Builds things."));
        assert!(doc.contact.extra.is_empty());
    }

    #[test]
    fn test_empty_summary_section_ignored() {
        let doc = assemble(
            preamble(&["Headline"]),
            vec![Interpretation::Summary(String::new())],
            Metadata::default(),
        );
        assert_eq!(doc.summary.as_deref(), Some("Headline"));
    }
}
