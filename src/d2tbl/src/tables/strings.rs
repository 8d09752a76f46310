//! Localized string tables
//!
//! A string table keeps two views of the same file: the positional row list
//! (every line, duplicates included) used for numeric string indices, and an
//! insertion-ordered key map used for lookups by key.

use std::path::Path;

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;

use super::{read_string_lines, TableError};

/// Placeholder key that is never addressable by key
const UNKEYED: &str = "x";

/// Colour codes and decorative glyphs that never belong in rendered text
static DECORATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"ÿc[\d;:]|●|★|◆|\}").expect("decoration pattern is valid"));

/// Remove colour codes and decorative glyphs, then trim
pub fn clean(text: &str) -> String {
    DECORATION.replace_all(text, "").trim().to_string()
}

/// A `key\tvalue` line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringEntry {
    pub key: String,
    pub value: String,
}

impl StringEntry {
    fn parse(line: &str, table: &'static str, line_no: usize) -> Result<Self, TableError> {
        let mut parts = line.split('\t');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(key), Some(value), None) => Ok(StringEntry {
                key: key.to_string(),
                value: value.to_string(),
            }),
            _ => Err(TableError::MalformedRow {
                table,
                line: line_no,
                reason: "expected exactly one tab".to_string(),
            }),
        }
    }
}

/// One string layer (base, expansion or patch)
#[derive(Debug, Clone, Default)]
pub struct StringTable {
    rows: Vec<StringEntry>,
    by_key: IndexMap<String, usize>,
}

impl StringTable {
    pub fn load(path: &Path) -> Result<Self, TableError> {
        let lines = read_string_lines(path)?;
        let table = Self::from_lines(lines.iter().map(String::as_str))?;
        tracing::debug!(
            path = %path.display(),
            rows = table.rows.len(),
            keys = table.by_key.len(),
            "loaded string table"
        );
        Ok(table)
    }

    pub fn from_lines<'a, I>(lines: I) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut table = StringTable::default();
        for (i, line) in lines.into_iter().enumerate() {
            if line.is_empty() {
                continue;
            }
            table.push(StringEntry::parse(line, "strings", i + 1)?);
        }
        Ok(table)
    }

    /// Build a table from `(key, value)` pairs
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        let mut table = StringTable::default();
        for (key, value) in pairs {
            table.push(StringEntry {
                key: (*key).to_string(),
                value: (*value).to_string(),
            });
        }
        table
    }

    /// Append an entry; a repeated key moves to the end of the key order
    pub fn push(&mut self, entry: StringEntry) {
        let row = self.rows.len();
        if entry.key != UNKEYED {
            self.by_key.shift_remove(&entry.key);
            self.by_key.insert(entry.key.clone(), row);
        }
        self.rows.push(entry);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.by_key.contains_key(key)
    }

    /// Cleaned text for a key
    pub fn get(&self, key: &str) -> Option<String> {
        self.by_key
            .get(key)
            .map(|&row| clean(&self.rows[row].value))
    }

    /// Cleaned text of the row at a position in the file
    pub fn get_index(&self, index: usize) -> Option<String> {
        self.rows.get(index).map(|e| clean(&e.value))
    }

    /// Cleaned text of the key `offset` places after `key` in key order
    pub fn get_offset(&self, key: &str, offset: isize) -> Option<String> {
        let position = self.by_key.get_index_of(key)?;
        let target = position.checked_add_signed(offset)?;
        let (_, &row) = self.by_key.get_index(target)?;
        Some(clean(&self.rows[row].value))
    }

    /// Keys in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.by_key.keys().map(String::as_str)
    }
}
