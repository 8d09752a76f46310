//! Property descriptors (properties.txt)
//!
//! A property code expands into up to seven stat functions, each pairing a
//! target stat with the function code that maps the property's
//! `(param, min, max)` onto that stat.

use std::collections::HashMap;
use std::path::Path;

use super::{at_row, read_rows, Row, TableError, EXPANSION_SENTINEL};

/// First column of the stat function block
const FUNC_START: usize = 2;
/// Columns per stat function: set, val, func, stat
const FUNC_WIDTH: usize = 4;
const FUNC_SLOTS: usize = 7;

/// One `(set, val, func, stat)` block of a property descriptor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatFunction {
    pub slot: usize,
    pub set: Option<i32>,
    pub val: Option<i32>,
    pub func: i32,
    pub stat: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyDescriptor {
    pub index: usize,
    pub code: String,
    pub funcs: Vec<StatFunction>,
    pub desc: String,
    pub param: String,
    pub min: String,
    pub max: String,
    pub notes: String,
}

impl PropertyDescriptor {
    fn from_row(index: usize, row: &Row) -> Result<Self, TableError> {
        let mut funcs = Vec::new();
        for slot in 0..FUNC_SLOTS {
            let base = FUNC_START + slot * FUNC_WIDTH;
            // Blocks without a function code are unused
            let Some(func) = row.int(base + 2)? else {
                continue;
            };
            funcs.push(StatFunction {
                slot,
                set: row.int(base)?,
                val: row.int(base + 1)?,
                func,
                stat: row.field(base + 3).to_string(),
            });
        }

        Ok(PropertyDescriptor {
            index,
            code: row.field(0).to_string(),
            funcs,
            desc: row.field(30).to_string(),
            param: row.field(31).to_string(),
            min: row.field(32).to_string(),
            max: row.field(33).to_string(),
            notes: row.field(34).to_string(),
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct PropertyTable {
    descriptors: HashMap<String, PropertyDescriptor>,
}

impl PropertyTable {
    pub fn load(path: &Path) -> Result<Self, TableError> {
        Self::from_rows(read_rows(path)?)
    }

    pub fn from_rows<I: IntoIterator<Item = Row>>(rows: I) -> Result<Self, TableError> {
        let mut descriptors = HashMap::new();
        let mut index = 0;

        for (position, row) in rows.into_iter().enumerate() {
            if row.field(0) == EXPANSION_SENTINEL {
                continue;
            }

            let descriptor =
                PropertyDescriptor::from_row(index, &row).map_err(at_row("properties", position))?;
            index += 1;

            if descriptors.contains_key(&descriptor.code) {
                return Err(TableError::DuplicateKey {
                    table: "properties",
                    key: descriptor.code,
                });
            }
            descriptors.insert(descriptor.code.clone(), descriptor);
        }

        tracing::debug!(rows = descriptors.len(), "loaded properties table");
        Ok(PropertyTable { descriptors })
    }

    pub fn get(&self, code: &str) -> Option<&PropertyDescriptor> {
        self.descriptors.get(code)
    }

    /// Add or replace a descriptor
    pub fn insert(&mut self, descriptor: PropertyDescriptor) {
        self.descriptors.insert(descriptor.code.clone(), descriptor);
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}
