//! Tab-delimited game data tables
//!
//! Every table is read into memory once and is read-only afterwards. Loaders
//! take already-split [`Row`]s so the tables can be built from fixtures
//! without touching the file system; the `load` constructors are thin
//! wrappers that read and decode a file first.

mod charstats;
mod gems;
mod items;
mod itemstats;
mod properties;
mod runewords;
mod skills;
mod strings;
mod uniques;

pub use charstats::{CharStat, CharStatTable};
pub use gems::{Gem, GemTable};
pub use items::{Armor, ArmorTable, BaseItemTable, Misc, MiscTable, Weapon, WeaponTable};
pub use itemstats::{ItemStatCostTable, StatDescriptor};
pub use properties::{PropertyDescriptor, PropertyTable, StatFunction};
pub use runewords::{RuneWord, RuneWordTable};
pub use skills::{Skill, SkillDesc, SkillDescTable, SkillTable, NO_CLASS};
pub use strings::{StringEntry, StringTable};
pub use uniques::{UniqueItem, UniqueItemTable};

use std::fs;
use std::path::Path;

use encoding_rs::{Encoding, UTF_8, WINDOWS_1252};
use thiserror::Error;

use crate::property::Property;

/// Name/code value marking a disabled template row
pub const EXPANSION_SENTINEL: &str = "Expansion";

#[derive(Error, Debug)]
pub enum TableError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed row {line} in {table}: {reason}")]
    MalformedRow {
        table: &'static str,
        line: usize,
        reason: String,
    },

    #[error("Duplicate key in {table}: {key}")]
    DuplicateKey { table: &'static str, key: String },

    #[error("Unknown skill: {0}")]
    UnknownSkill(String),

    #[error("Unknown skill description row: {0}")]
    UnknownSkillDesc(i32),

    #[error("Skill {0} has no name string")]
    MissingSkillName(i32),

    #[error("Unknown character class: {0}")]
    UnknownClass(i32),

    #[error("Invalid string index: {0}")]
    InvalidStringIndex(i32),

    #[error("Invalid number in column {column}: {value:?}")]
    InvalidNumber { column: usize, value: String },
}

/// Wrap a field error with the table name and the file line of data row `row`
///
/// Data rows start on line 2, after the header.
pub(crate) fn at_row(table: &'static str, row: usize) -> impl Fn(TableError) -> TableError {
    move |err| match err {
        TableError::InvalidNumber { .. } => TableError::MalformedRow {
            table,
            line: row + 2,
            reason: err.to_string(),
        },
        other => other,
    }
}

/// One record of a delimited table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row(Vec<String>);

impl Row {
    /// Split a raw line on tabs
    pub fn parse(line: &str) -> Self {
        Row(line.split('\t').map(str::to_string).collect())
    }

    /// Build a sparse row from `(column, value)` pairs; unset columns are empty
    pub fn with_columns(columns: &[(usize, &str)]) -> Self {
        let width = columns.iter().map(|(i, _)| i + 1).max().unwrap_or(0);
        let mut fields = vec![String::new(); width];
        for (i, value) in columns {
            fields[*i] = (*value).to_string();
        }
        Row(fields)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Column text, empty for columns past the end of the row
    pub fn field(&self, index: usize) -> &str {
        self.0.get(index).map(String::as_str).unwrap_or("")
    }

    /// Column parsed as an integer; empty text is `None`, anything else
    /// non-numeric is an error
    pub fn int(&self, index: usize) -> Result<Option<i32>, TableError> {
        let text = self.field(index).trim();
        if text.is_empty() {
            return Ok(None);
        }
        text.parse()
            .map(Some)
            .map_err(|_| TableError::InvalidNumber {
                column: index,
                value: text.to_string(),
            })
    }

    pub fn int_or(&self, index: usize, default: i32) -> Result<i32, TableError> {
        Ok(self.int(index)?.unwrap_or(default))
    }

    /// Non-empty fields in `start..end`
    pub fn non_empty(&self, start: usize, end: usize) -> Vec<String> {
        (start..end)
            .map(|i| self.field(i))
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Properties stored as consecutive `(code, param, min, max)` column groups
    ///
    /// Groups with an empty code are skipped. Empty bounds read as 0.
    pub fn properties(&self, start: usize, end: usize) -> Result<Vec<Property>, TableError> {
        (start..end)
            .step_by(4)
            .filter(|&i| !self.field(i).is_empty())
            .map(|i| {
                Property::from_columns(
                    self.field(i),
                    self.field(i + 1),
                    self.field(i + 2),
                    self.field(i + 3),
                )
                .map_err(|err| match err {
                    TableError::InvalidNumber { column, value } => TableError::InvalidNumber {
                        column: i + column,
                        value,
                    },
                    other => other,
                })
            })
            .collect()
    }
}

/// Decode file bytes and split them into non-empty lines
fn decode_lines(bytes: &[u8], encoding: &'static Encoding) -> Vec<String> {
    let (text, _, _) = encoding.decode(bytes);
    text.lines()
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect()
}

/// Read a headerless UTF-8 string table file into raw lines
pub fn read_string_lines(path: &Path) -> Result<Vec<String>, TableError> {
    let bytes = fs::read(path)?;
    Ok(decode_lines(&bytes, UTF_8))
}

/// Read a Windows-1252 data table, dropping its header line
pub fn read_rows(path: &Path) -> Result<Vec<Row>, TableError> {
    let bytes = fs::read(path)?;
    Ok(parse_rows(&bytes))
}

/// Decode a Windows-1252 data table already in memory, dropping its header line
pub fn parse_rows(bytes: &[u8]) -> Vec<Row> {
    decode_lines(bytes, WINDOWS_1252)
        .iter()
        .skip(1)
        .map(|l| Row::parse(l))
        .collect()
}
