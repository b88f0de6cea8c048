//! Section-partitioned key/value store parsed from INI text.
//!
//! Responsibilities:
//! - Parse a raw byte buffer line by line into sections, keys, values, and comments.
//! - Track the active section while parsing.
//! - Provide key lookup with a single-level fallback to the `GLOBAL` section.
//!
//! Does NOT handle:
//! - Populating typed destinations (see `binder`).
//! - Reading files or environment variables (see `loader`).
//!
//! Invariants:
//! - Every key/value pair belongs to exactly one section.
//! - Sections and keys keep the order in which they were first seen.
//! - The active section changes only on a `[section]` line or `set_section`.
//! - Comments are kept apart from key/value pairs and are never returned by lookups.

mod parse;
mod render;

use std::collections::HashMap;

use tracing::{debug, trace};

use crate::constants::GLOBAL_SECTION;
use crate::error::ParseError;
use parse::{Line, classify};

/// A comment line preserved from the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    /// 1-based byte offset of the line's terminating boundary.
    pub offset: usize,
    /// Section that was active when the comment was read.
    pub section: String,
    /// Comment text without the leading `#`/`;` and surrounding whitespace.
    pub text: String,
}

/// One named section and its key/value pairs in discovery order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    name: String,
    entries: Vec<(String, String)>,
    index: HashMap<String, usize>,
}

impl Section {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Section name as written between the brackets.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Value stored for `key` in this section only.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.index
            .get(key)
            .map(|&position| self.entries[position].1.as_str())
    }

    /// Key/value pairs in the order the keys were first seen.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// A repeated key overwrites the value but keeps its first position.
    fn insert(&mut self, key: &str, value: &str) {
        match self.index.get(key) {
            Some(&position) => self.entries[position].1 = value.to_string(),
            None => {
                self.index.insert(key.to_string(), self.entries.len());
                self.entries.push((key.to_string(), value.to_string()));
            }
        }
    }
}

/// Parsed INI data: sections of string key/value pairs plus preserved comments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataMap {
    sections: Vec<Section>,
    section_index: HashMap<String, usize>,
    comments: Vec<Comment>,
    active: String,
}

impl Default for DataMap {
    fn default() -> Self {
        Self::new()
    }
}

impl DataMap {
    /// Create an empty map with only the (empty) `GLOBAL` section, which is active.
    pub fn new() -> Self {
        let mut map = Self {
            sections: Vec::new(),
            section_index: HashMap::new(),
            comments: Vec::new(),
            active: GLOBAL_SECTION.to_string(),
        };
        map.ensure_section(GLOBAL_SECTION);
        map
    }

    /// Parse a buffer into a fresh map.
    pub fn parse(data: &[u8]) -> Result<Self, ParseError> {
        let mut map = Self::new();
        map.parse_bytes(data)?;
        Ok(map)
    }

    /// Replace the contents of this map with the result of parsing `data`.
    ///
    /// The buffer is scanned as UTF-8 code points. Lines end at `\n`, every
    /// `\r` is dropped, and a final line without a newline is still read.
    ///
    /// # Errors
    ///
    /// - `ParseError::InvalidUtf8` if the buffer is not valid UTF-8.
    /// - `ParseError::EmptyKey` for a key/value line such as `= value`.
    pub fn parse_bytes(&mut self, data: &[u8]) -> Result<(), ParseError> {
        *self = Self::new();

        let text = std::str::from_utf8(data).map_err(|e| ParseError::InvalidUtf8 {
            offset: e.valid_up_to(),
        })?;

        let mut line = String::new();
        let mut line_number = 1;
        for (i, ch) in text.char_indices() {
            match ch {
                '\n' => {
                    self.apply_line(&line, line_number, i + 1)?;
                    line.clear();
                    line_number += 1;
                }
                '\r' => {}
                _ => line.push(ch),
            }
        }
        if !line.is_empty() {
            self.apply_line(&line, line_number, text.len())?;
        }

        debug!(
            sections = self.sections.len(),
            comments = self.comments.len(),
            bytes = data.len(),
            "parsed INI data"
        );
        Ok(())
    }

    fn apply_line(&mut self, raw: &str, line_number: usize, offset: usize) -> Result<(), ParseError> {
        match classify(raw) {
            Line::Blank => {}
            Line::Comment(text) => {
                trace!(line = line_number, offset, "comment");
                self.comments.push(Comment {
                    offset,
                    section: self.active.clone(),
                    text: text.to_string(),
                });
            }
            Line::Section(name) => {
                trace!(line = line_number, section = name, "section header");
                self.set_section(name);
            }
            Line::KeyValue {
                key,
                value,
                has_separator,
            } => {
                if key.is_empty() {
                    return Err(ParseError::EmptyKey { line: line_number });
                }
                if !has_separator {
                    debug!(line = line_number, key, "line has no '=', storing empty value");
                }
                trace!(section = %self.active, key, value, "key/value");
                let active = self.active.clone();
                self.ensure_section(&active).insert(key, value);
            }
        }
        Ok(())
    }

    fn ensure_section(&mut self, name: &str) -> &mut Section {
        let position = match self.section_index.get(name) {
            Some(&position) => position,
            None => {
                self.section_index
                    .insert(name.to_string(), self.sections.len());
                self.sections.push(Section::new(name));
                self.sections.len() - 1
            }
        };
        &mut self.sections[position]
    }

    /// Make `name` the active section, registering it if it is new.
    pub fn set_section(&mut self, name: &str) {
        self.ensure_section(name);
        self.active = name.to_string();
    }

    /// Section that the next parsed key/value pair would land in.
    pub fn active_section(&self) -> &str {
        &self.active
    }

    /// Look up `key` in `section`, falling back to `GLOBAL` once.
    ///
    /// The fallback is a single level: a miss in `GLOBAL` is final.
    pub fn get_key(&self, key: &str, section: &str) -> Option<&str> {
        self.section(section)
            .and_then(|s| s.get(key))
            .or_else(|| {
                if section == GLOBAL_SECTION {
                    None
                } else {
                    self.get_key_global(key)
                }
            })
    }

    /// Look up `key` in the `GLOBAL` section.
    pub fn get_key_global(&self, key: &str) -> Option<&str> {
        self.section(GLOBAL_SECTION).and_then(|s| s.get(key))
    }

    /// Same as [`DataMap::get_key`] but shaped as `(value, found)`.
    ///
    /// A missing key yields an empty value and `false`; it is never an error.
    pub fn lookup(&self, key: &str, section: &str) -> (String, bool) {
        match self.get_key(key, section) {
            Some(value) => (value.to_string(), true),
            None => (String::new(), false),
        }
    }

    /// Names of all discovered sections, `GLOBAL` first.
    pub fn sections(&self) -> Vec<&str> {
        self.sections.iter().map(Section::name).collect()
    }

    /// A single section by name.
    pub fn section(&self, name: &str) -> Option<&Section> {
        self.section_index
            .get(name)
            .map(|&position| &self.sections[position])
    }

    pub(crate) fn iter_sections(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter()
    }

    /// Preserved comments in source order.
    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }
}
