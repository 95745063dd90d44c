//! Grouping of classified lines into preamble and sections.

use serde::{Deserialize, Serialize};

use super::classifier::{Classifier, HeadingMatch, LineContext, LineKind};
use super::options::ParseOptions;

/// A source line with its 1-based line number and label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceLine {
    /// 1-based line number in the input
    pub number: usize,
    /// Line text as given
    pub text: String,
    /// Classification
    pub kind: LineKind,
}

impl SourceLine {
    /// Create a new source line.
    pub fn new(number: usize, text: impl Into<String>, kind: LineKind) -> Self {
        Self {
            number,
            text: text.into(),
            kind,
        }
    }
}

/// A heading and the lines that follow it up to the next heading.
///
/// Runs of blank lines in `body` are collapsed to a single `Blank` line and
/// the body never starts or ends with one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawSection {
    /// The heading line
    pub heading: SourceLine,
    /// Body lines
    pub body: Vec<SourceLine>,
}

impl RawSection {
    /// Heading text, trimmed.
    pub fn title(&self) -> &str {
        self.heading.text.trim()
    }

    /// Blank-line separated blocks of the body.
    pub fn blocks(&self) -> Vec<&[SourceLine]> {
        blocks(&self.body)
    }
}

/// Split lines into blocks at blank lines.
pub fn blocks(lines: &[SourceLine]) -> Vec<&[SourceLine]> {
    lines
        .split(|line| line.kind.is_blank())
        .filter(|block| !block.is_empty())
        .collect()
}

/// Output of the segmenter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segmented {
    /// Lines before the first heading
    pub preamble: Vec<SourceLine>,
    /// Sections in input order
    pub sections: Vec<RawSection>,
}

impl Segmented {
    /// All retained lines in input order, headings included.
    pub fn lines(&self) -> impl Iterator<Item = &SourceLine> {
        self.preamble.iter().chain(
            self.sections
                .iter()
                .flat_map(|s| std::iter::once(&s.heading).chain(s.body.iter())),
        )
    }

    /// Number of non-blank lines retained.
    pub fn content_line_count(&self) -> usize {
        self.lines().filter(|l| !l.kind.is_blank()).count()
    }
}

/// Splits a resume into preamble and sections.
pub struct Segmenter {
    classifier: Classifier,
}

impl Segmenter {
    /// Create a segmenter for the given options.
    pub fn new(options: &ParseOptions) -> Self {
        Self {
            classifier: Classifier::new(options),
        }
    }

    /// Classify and group lines.
    pub fn segment<S: AsRef<str>>(&self, lines: &[S]) -> Segmented {
        let mut preamble: Vec<SourceLine> = Vec::new();
        let mut sections: Vec<RawSection> = Vec::new();
        let mut current: Option<RawSection> = None;
        let mut seen_content = false;
        let mut seen_heading = false;

        let mut kinds = Vec::with_capacity(lines.len());
        for (index, line) in lines.iter().enumerate() {
            let ctx = LineContext {
                previous: index.checked_sub(1).map(|i| lines[i].as_ref()),
                next: lines.get(index + 1).map(AsRef::as_ref),
                is_first_nonblank: !seen_content,
                in_preamble: !seen_heading,
            };
            let kind = self.classifier.classify(line.as_ref(), &ctx);
            seen_content |= !kind.is_blank();
            seen_heading |= kind.is_heading();
            kinds.push(kind);
        }
        confirm_fallback_headings(&mut kinds);

        for (index, (line, kind)) in lines.iter().zip(kinds).enumerate() {
            let text = line.as_ref();
            let source = SourceLine::new(index + 1, text, kind);

            if kind.is_heading() {
                if let Some(mut section) = current.take() {
                    trim_trailing_blank(&mut section.body);
                    sections.push(section);
                }
                current = Some(RawSection {
                    heading: source,
                    body: Vec::new(),
                });
                continue;
            }

            let target = match current.as_mut() {
                Some(section) => &mut section.body,
                None => &mut preamble,
            };
            push_collapsed(target, source);
        }

        if let Some(mut section) = current.take() {
            trim_trailing_blank(&mut section.body);
            sections.push(section);
        }
        trim_trailing_blank(&mut preamble);

        log::debug!(
            "Segmented {} lines: {} preamble lines, {} sections",
            lines.len(),
            preamble.len(),
            sections.len()
        );

        Segmented { preamble, sections }
    }
}

/// Demote fallback headings that have no body.
///
/// A fallback heading must be followed by a non-blank line that is not
/// itself a heading; otherwise it stays in the body of the section above.
/// Runs back to front so a demoted line counts as body for the one before.
fn confirm_fallback_headings(kinds: &mut [LineKind]) {
    let mut next_content: Option<LineKind> = None;
    for kind in kinds.iter_mut().rev() {
        if kind.is_blank() {
            continue;
        }
        if *kind == LineKind::Heading(HeadingMatch::Fallback)
            && next_content.map_or(true, |next| next.is_heading())
        {
            log::debug!("Fallback heading has no body, keeping it as text");
            *kind = LineKind::PlainText;
        }
        next_content = Some(*kind);
    }
}

fn push_collapsed(lines: &mut Vec<SourceLine>, line: SourceLine) {
    if line.kind.is_blank() && lines.last().map_or(true, |l| l.kind.is_blank()) {
        return;
    }
    lines.push(line);
}

fn trim_trailing_blank(lines: &mut Vec<SourceLine>) {
    while lines.last().is_some_and(|l| l.kind.is_blank()) {
        lines.pop();
    }
}
