//! Per-section grammars that turn raw section lines into typed entries.
//!
//! Interpretation never fails. A block that does not fit its section's
//! shape still yields an entry, with missing fields left empty and the raw
//! lines kept alongside.

use super::classifier::{strip_bullet, DatePatterns, HeadingMatch, KnownHeading, LineKind};
use super::segmenter::{blocks, RawSection, SourceLine};
use crate::model::{
    EducationEntry, ExperienceEntry, IssuerEntry, Parsed, Section, SectionBody, SkillsEntry,
};

/// Maximum words in an inline `Category: items` prefix.
const INLINE_CATEGORY_MAX_WORDS: usize = 4;

/// What a raw section turned into.
#[derive(Debug, Clone, PartialEq)]
pub enum Interpretation {
    /// Summary prose, to be lifted to the document level
    Summary(String),
    /// A typed section
    Section(Section),
}

/// Section interpreter.
pub struct Interpreter {
    dates: DatePatterns,
}

impl Interpreter {
    /// Create a new interpreter.
    pub fn new() -> Self {
        Self {
            dates: DatePatterns::new(),
        }
    }

    /// Interpret one raw section according to its heading.
    pub fn interpret(&self, raw: &RawSection) -> Interpretation {
        let title = raw.title().to_string();
        let known = match raw.heading.kind {
            LineKind::Heading(HeadingMatch::Known(heading)) => Some(heading),
            _ => None,
        };

        let body = match known {
            Some(KnownHeading::Summary) => return Interpretation::Summary(summary_text(&raw.body)),
            Some(KnownHeading::Experience) => SectionBody::Experience(self.experience(&raw.body)),
            Some(KnownHeading::Education) => SectionBody::Education(education(&raw.body)),
            Some(KnownHeading::Skills) => SectionBody::Skills(skills(&raw.body)),
            Some(KnownHeading::Certifications) => {
                SectionBody::Certifications(issuer_groups(&raw.body))
            }
            Some(KnownHeading::Honors) => SectionBody::Honors(issuer_groups(&raw.body)),
            None => SectionBody::Other {
                text: other_text(&raw.body),
            },
        };

        let section = Section::new(title, body);
        let incomplete = section.incomplete_count();
        if incomplete > 0 {
            log::debug!(
                "Section {:?} (line {}): {} of {} entries incomplete",
                section.title,
                raw.heading.number,
                incomplete,
                section.entry_count()
            );
        }
        Interpretation::Section(section)
    }

    fn experience(&self, body: &[SourceLine]) -> Vec<Parsed<ExperienceEntry>> {
        let mut entries: Vec<Parsed<ExperienceEntry>> = Vec::new();

        for block in blocks(body) {
            // A bullet list split off by a blank line still belongs to the job above
            if block.iter().all(|l| l.kind == LineKind::Bullet) {
                if let Some(last) = entries.last_mut() {
                    last.value.bullets.extend(block.iter().map(bullet_text));
                    last.raw.extend(raw_lines(block));
                    continue;
                }
            }
            entries.extend(self.jobs(block).into_iter().map(|job| self.experience_entry(job)));
        }

        entries
    }

    /// Split a block into jobs when jobs are not separated by blank lines.
    ///
    /// A plain line after a bullet starts a new job when it carries a date
    /// range itself or a date-range line follows within two lines.
    fn jobs<'a>(&self, block: &'a [SourceLine]) -> Vec<&'a [SourceLine]> {
        let mut jobs = Vec::new();
        let mut start = 0;

        for index in 1..block.len() {
            let line = &block[index];
            if line.kind != LineKind::PlainText || block[index - 1].kind != LineKind::Bullet {
                continue;
            }
            let dated = self.dates.split_trailing(&line.text).is_some()
                || block[index + 1..]
                    .iter()
                    .take(2)
                    .any(|l| l.kind == LineKind::DateRange);
            if dated {
                jobs.push(&block[start..index]);
                start = index;
            }
        }
        jobs.push(&block[start..]);

        jobs
    }

    fn experience_entry(&self, block: &[SourceLine]) -> Parsed<ExperienceEntry> {
        let mut entry = ExperienceEntry::default();
        let mut after_bullet = false;

        for line in block {
            let text = line.text.trim();
            match line.kind {
                LineKind::Bullet => {
                    entry.bullets.push(bullet_text(line));
                    after_bullet = true;
                    continue;
                }
                LineKind::PlainText if after_bullet => {
                    // Wrapped bullet text
                    if let Some(last) = entry.bullets.last_mut() {
                        last.push(' ');
                        last.push_str(text);
                    }
                    continue;
                }
                LineKind::DateRange if entry.date_range.is_empty() => {
                    entry.date_range = text.to_string();
                }
                _ if entry.organization.is_empty() => entry.organization = text.to_string(),
                _ if entry.role.is_empty() => entry.role = text.to_string(),
                _ => entry.details.push(text.to_string()),
            }
            after_bullet = false;
        }

        if entry.date_range.is_empty() {
            self.split_inline_date(&mut entry);
        }

        Parsed::new(entry, raw_lines(block))
    }

    /// Pull a trailing date range out of the role or organization line.
    fn split_inline_date(&self, entry: &mut ExperienceEntry) {
        for field in [&mut entry.role, &mut entry.organization] {
            if let Some((head, range)) = self.dates.split_trailing(field) {
                *field = head;
                entry.date_range = range;
                return;
            }
        }
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

fn bullet_text(line: &SourceLine) -> String {
    strip_bullet(&line.text)
        .unwrap_or_else(|| line.text.trim())
        .to_string()
}

fn raw_lines(block: &[SourceLine]) -> Vec<String> {
    block.iter().map(|l| l.text.clone()).collect()
}

fn summary_text(body: &[SourceLine]) -> String {
    blocks(body)
        .iter()
        .map(|block| {
            block
                .iter()
                .map(|l| l.text.trim())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn other_text(body: &[SourceLine]) -> String {
    body.iter()
        .map(|l| if l.kind.is_blank() { "" } else { l.text.as_str() })
        .collect::<Vec<_>>()
        .join("\n")
}

fn education(body: &[SourceLine]) -> Vec<Parsed<EducationEntry>> {
    body.iter()
        .filter(|l| !l.kind.is_blank())
        .map(|line| {
            Parsed::new(
                EducationEntry {
                    text: bullet_text(line),
                },
                vec![line.text.clone()],
            )
        })
        .collect()
}

fn skills(body: &[SourceLine]) -> Vec<Parsed<SkillsEntry>> {
    let mut entries = Vec::new();

    for block in blocks(body) {
        let mut current: Option<Parsed<SkillsEntry>> = None;

        for (index, line) in block.iter().enumerate() {
            let text = bullet_text(line);

            if let Some(category) = text.strip_suffix(':') {
                entries.extend(current.take());
                current = Some(skills_group(Some(category), Vec::new(), line));
                continue;
            }

            if let Some((category, rest)) = inline_category(&text) {
                entries.extend(current.take());
                current = Some(skills_group(Some(category), split_items(rest), line));
                continue;
            }

            let awaiting_items = current.as_ref().is_some_and(|c| c.value.items.is_empty());
            let next_has_list = block
                .get(index + 1)
                .is_some_and(|next| next.text.contains(','));
            if !awaiting_items && !text.contains(',') && next_has_list {
                entries.extend(current.take());
                current = Some(skills_group(Some(&text), Vec::new(), line));
                continue;
            }

            let group = current.get_or_insert_with(|| Parsed::new(SkillsEntry::default(), Vec::new()));
            group.value.items.extend(split_items(&text));
            group.raw.push(line.text.clone());
        }

        entries.extend(current);
    }

    entries
}

fn skills_group(category: Option<&str>, items: Vec<String>, line: &SourceLine) -> Parsed<SkillsEntry> {
    Parsed::new(
        SkillsEntry {
            category: category
                .map(str::trim)
                .filter(|c| !c.is_empty())
                .map(str::to_string),
            items,
        },
        vec![line.text.clone()],
    )
}

/// Split `"Languages: Rust, Go"` into `("Languages", "Rust, Go")`.
fn inline_category(text: &str) -> Option<(&str, &str)> {
    let (category, rest) = text.split_once(':')?;
    let category = category.trim();
    let rest = rest.trim();
    let words = category.split_whitespace().count();
    if category.is_empty()
        || rest.is_empty()
        || category.contains(',')
        || words > INLINE_CATEGORY_MAX_WORDS
        || rest.starts_with("//")
    {
        return None;
    }
    Some((category, rest))
}

fn split_items(text: &str) -> Vec<String> {
    text.split([',', '|'])
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// Certifications and honors: an issuer line followed by its items.
///
/// In a bulleted block, a plain line that follows a bullet starts a new
/// issuer group.
fn issuer_groups(body: &[SourceLine]) -> Vec<Parsed<IssuerEntry>> {
    let mut entries = Vec::new();

    for block in blocks(body) {
        let bulleted = block.iter().any(|l| l.kind == LineKind::Bullet);
        let mut current: Option<Parsed<IssuerEntry>> = None;
        let mut after_bullet = false;

        for line in block {
            let is_bullet = line.kind == LineKind::Bullet;
            let text = bullet_text(line);

            let starts_group = !is_bullet && (current.is_none() || (bulleted && after_bullet));
            if starts_group {
                entries.extend(current.take());
                current = Some(Parsed::new(
                    IssuerEntry {
                        issuer: text,
                        items: Vec::new(),
                    },
                    vec![line.text.clone()],
                ));
            } else {
                let group =
                    current.get_or_insert_with(|| Parsed::new(IssuerEntry::default(), Vec::new()));
                group.value.items.push(text);
                group.raw.push(line.text.clone());
            }
            after_bullet = is_bullet;
        }

        entries.extend(current);
    }

    entries
}
