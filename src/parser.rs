use crate::Document;
use crate::group::Group;
use crate::util::{strip_comment, trim};

/// What a single line of input is, after comments and surrounding whitespace are removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    /// Empty, whitespace only, or comment only.
    Blank,
    /// `[name]`. The name is the raw text between the brackets.
    Section(&'a str),
    /// `key = value`, split at the first `=`, both sides trimmed.
    Pair { key: &'a str, value: &'a str },
    /// Anything else. Dropped without an error.
    Unrecognized,
}

#[must_use]
pub fn classify_line(raw: &str) -> Line<'_> {
    let line = trim(strip_comment(raw));

    if line.is_empty() {
        return Line::Blank;
    }

    // Both brackets are single bytes, so a line matching both is at least two bytes long.
    if line.len() >= 2 && line.starts_with('[') && line.ends_with(']') {
        return Line::Section(&line[1..line.len() - 1]);
    }

    match line.split_once('=') {
        Some((key, value)) => Line::Pair {
            key: trim(key),
            value: trim(value),
        },
        None => Line::Unrecognized,
    }
}

/// The effect a line had on the document under construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    SectionOpened,
    PairInserted,
    /// The key already existed in the active group; the earlier value was kept.
    PairShadowed,
    Ignored,
}

/// Which group pairs are currently written to. Resolved against the document on every insert.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Cursor {
    Default,
    Section(String),
}

/// Represents an on-going parse. Lines are fed in order and folded into a [`Document`].
#[derive(Debug)]
pub struct Parser {
    document: Document,
    cursor: Cursor,
    line: usize,
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser {
    #[must_use]
    pub fn new() -> Self {
        Self {
            document: Document::default(),
            cursor: Cursor::Default,
            line: 0,
        }
    }

    pub fn feed_line(&mut self, raw: &str) -> Outcome {
        self.line += 1;

        let outcome = match classify_line(raw) {
            Line::Blank => Outcome::Ignored,
            Line::Section(name) => {
                self.document.sections.entry(name.to_owned()).or_default();
                self.cursor = Cursor::Section(name.to_owned());
                Outcome::SectionOpened
            }
            Line::Pair { key: "", .. } => {
                log::debug!("line {}: ignoring pair with an empty key", self.line);
                Outcome::Ignored
            }
            Line::Pair { key, value } => {
                let line = self.line;
                let Some(group) = self.active_group() else {
                    log::warn!("line {line}: no active group for key {key:?}");
                    return Outcome::Ignored;
                };

                if group.insert_if_absent(key.to_owned(), value.to_owned()) {
                    Outcome::PairInserted
                } else {
                    log::debug!("line {line}: duplicate key {key:?}, keeping the first value");
                    Outcome::PairShadowed
                }
            }
            Line::Unrecognized => {
                log::debug!("line {}: unrecognized line {raw:?}", self.line);
                Outcome::Ignored
            }
        };

        log::trace!("line {}: {outcome:?}", self.line);
        outcome
    }

    /// Number of lines fed so far.
    #[must_use]
    pub fn lines(&self) -> usize {
        self.line
    }

    #[must_use]
    pub fn finish(self) -> Document {
        log::debug!(
            "parsed {} lines: {} default pairs, {} sections",
            self.line,
            self.document.default_group.len(),
            self.document.sections.len()
        );
        self.document
    }

    /// The section a cursor names is created when its header is read, so this is only `None`
    /// if that invariant is broken.
    fn active_group(&mut self) -> Option<&mut Group> {
        match self.cursor {
            Cursor::Default => Some(&mut self.document.default_group),
            Cursor::Section(ref name) => self.document.sections.get_mut(name.as_str()),
        }
    }
}
