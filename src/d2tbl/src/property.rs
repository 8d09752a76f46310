//! Property instances attached to unique items, rune words and runes

use std::fmt;

use serde::Serialize;

use crate::tables::TableError;

/// Prefix of textual parameters that name a skill
pub const SKILL_PREFIX: &str = "sk";

/// A property parameter as written in the source table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Param {
    /// A literal number (empty columns read as 0)
    Value(i32),
    /// A textual reference, resolved to a skill id before use
    Skill(String),
}

impl Param {
    /// Read a parameter column
    ///
    /// Only unsigned digit strings are numbers; any other text, including a
    /// leading sign, is kept as a textual reference.
    pub fn parse(text: &str) -> Result<Self, TableError> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(Param::Value(0));
        }
        if !text.bytes().all(|b| b.is_ascii_digit()) {
            return Ok(Param::Skill(text.to_string()));
        }
        text.parse()
            .map(Param::Value)
            .map_err(|_| TableError::InvalidNumber {
                column: 0,
                value: text.to_string(),
            })
    }
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Param::Value(v) => write!(f, "{}", v),
            Param::Skill(s) => f.write_str(s),
        }
    }
}

/// One `(code, param, min, max)` property of an item
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Property {
    pub code: String,
    pub param: Param,
    pub min: Option<i32>,
    pub max: Option<i32>,
}

impl Property {
    pub fn new(code: impl Into<String>, param: Param, min: Option<i32>, max: Option<i32>) -> Self {
        Property {
            code: code.into(),
            param,
            min,
            max,
        }
    }

    /// Build from raw table columns
    ///
    /// Empty bounds read as 0. Number errors report the column relative to
    /// `code` (param 1, min 2, max 3).
    pub fn from_columns(code: &str, param: &str, min: &str, max: &str) -> Result<Self, TableError> {
        let param = Param::parse(param).map_err(|err| match err {
            TableError::InvalidNumber { value, .. } => TableError::InvalidNumber { column: 1, value },
            other => other,
        })?;
        Ok(Property {
            code: code.to_string(),
            param,
            min: Some(parse_bound(min, 2)?),
            max: Some(parse_bound(max, 3)?),
        })
    }
}

fn parse_bound(text: &str, column: usize) -> Result<i32, TableError> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(0);
    }
    text.parse().map_err(|_| TableError::InvalidNumber {
        column,
        value: text.to_string(),
    })
}
