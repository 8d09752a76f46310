//! Gems and runes with their per-socket-group properties

use std::collections::HashMap;
use std::path::Path;

use super::{at_row, read_rows, Row, TableError, EXPANSION_SENTINEL};
use crate::property::Property;

/// A gem or rune row
#[derive(Debug, Clone, PartialEq)]
pub struct Gem {
    pub index: u32,
    pub name: String,
    pub code: String,
    pub weapon_props: Vec<Property>,
    pub helm_props: Vec<Property>,
    pub shield_props: Vec<Property>,
}

impl Gem {
    fn from_row(index: u32, row: &Row) -> Result<Self, TableError> {
        Ok(Gem {
            index,
            name: row.field(0).to_string(),
            code: row.field(3).to_string(),
            weapon_props: row.properties(5, 17)?,
            helm_props: row.properties(17, 29)?,
            shield_props: row.properties(29, 41)?,
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct GemTable {
    gems: HashMap<String, Gem>,
}

impl GemTable {
    pub fn load(path: &Path) -> Result<Self, TableError> {
        Self::from_rows(read_rows(path)?)
    }

    pub fn from_rows<I: IntoIterator<Item = Row>>(rows: I) -> Result<Self, TableError> {
        let mut gems = HashMap::new();
        let mut index = 1;

        for (position, row) in rows.into_iter().enumerate() {
            if row.field(0) == EXPANSION_SENTINEL {
                continue;
            }

            let gem = Gem::from_row(index, &row).map_err(at_row("gems", position))?;
            index += 1;

            if gems.contains_key(&gem.code) {
                return Err(TableError::DuplicateKey {
                    table: "gems",
                    key: gem.code,
                });
            }
            gems.insert(gem.code.clone(), gem);
        }

        tracing::debug!(rows = gems.len(), "loaded gems table");
        Ok(GemTable { gems })
    }

    pub fn get(&self, code: &str) -> Option<&Gem> {
        self.gems.get(code)
    }

    pub fn len(&self) -> usize {
        self.gems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gems.is_empty()
    }
}
