#![warn(
    clippy::correctness,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::style,
    clippy::pedantic
)]

mod error;
mod group;
mod parser;
mod util;

use std::collections::HashMap;
use std::collections::hash_map;
use std::convert::Infallible;
use std::fmt;
use std::io::{BufRead, BufReader, Read};
use std::str::FromStr;

pub use error::Error;
pub use group::{Group, Iter};
pub use parser::{Line, Outcome, Parser, classify_line};
pub use util::{is_space, strip_comment, trim, trim_owned};

/// Parse INI text. Never fails: lines that match no rule are dropped.
#[must_use]
pub fn parse(text: &str) -> Document {
    let mut parser = Parser::new();
    for line in text.lines() {
        parser.feed_line(line);
    }
    parser.finish()
}

/// A parsed INI file: pairs that appear before any section header, plus the named sections.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub(crate) default_group: Group,
    pub(crate) sections: HashMap<String, Group>,
}

impl Document {
    #[must_use]
    pub fn new(default_group: Group, sections: HashMap<String, Group>) -> Self {
        Self {
            default_group,
            sections,
        }
    }

    #[must_use]
    pub fn with_default(default_group: Group) -> Self {
        Self::new(default_group, HashMap::new())
    }

    #[must_use]
    pub fn with_sections(sections: HashMap<String, Group>) -> Self {
        Self::new(Group::new(), sections)
    }

    /// Read and parse a document line by line. Invalid UTF-8 is replaced rather than rejected.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Read`] if the reader fails.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, Error> {
        let mut reader = BufReader::new(reader);
        let mut parser = Parser::new();
        let mut buffer = Vec::<u8>::with_capacity(256);

        loop {
            buffer.clear();
            if reader.read_until(b'\n', &mut buffer)? == 0 {
                break;
            }

            let line = String::from_utf8_lossy(&buffer);
            parser.feed_line(line.strip_suffix('\n').unwrap_or(&line));
        }

        Ok(parser.finish())
    }

    #[must_use]
    pub fn default_group(&self) -> &Group {
        &self.default_group
    }

    /// Look up `key` among the pairs outside any section.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.default_group.get(key)
    }

    #[must_use]
    pub fn section(&self, name: &str) -> Option<&Group> {
        self.sections.get(name)
    }

    #[must_use]
    pub fn get_in(&self, section: &str, key: &str) -> Option<&str> {
        self.section(section).and_then(|group| group.get(key))
    }

    /// Iterate over the sections in arbitrary order.
    pub fn sections(&self) -> Sections<'_> {
        Sections {
            inner: self.sections.iter(),
        }
    }

    #[must_use]
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// `true` when there are no default pairs and no sections.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.default_group.is_empty() && self.sections.is_empty()
    }
}

/// Iterator over the `(name, group)` sections of a [`Document`].
#[derive(Debug, Clone)]
pub struct Sections<'a> {
    inner: hash_map::Iter<'a, String, Group>,
}

impl<'a> Iterator for Sections<'a> {
    type Item = (&'a str, &'a Group);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(name, group)| (name.as_str(), group))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl FromStr for Document {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(parse(s))
    }
}

/// Debug dump: default pairs, then every section as `[name]` followed by its pairs. Order within
/// each group is unspecified.
impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (key, value) in &self.default_group {
            writeln!(f, "{key}={value}")?;
        }

        for (name, group) in self.sections() {
            writeln!(f, "[{name}]")?;
            for (key, value) in group {
                writeln!(f, "{key}={value}")?;
            }
        }

        Ok(())
    }
}
