//! Stat descriptors (itemstatcost.txt)

use std::collections::HashMap;
use std::path::Path;

use super::{at_row, read_rows, Row, TableError, EXPANSION_SENTINEL};

/// How one stat is rendered: template code, priority and string keys
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatDescriptor {
    pub index: usize,
    pub stat: String,
    pub op: Option<i32>,
    pub op_param: Option<i32>,
    pub op_base: String,
    pub op_stats: [String; 3],
    pub direct: Option<i32>,
    pub max_stat: String,
    pub desc_priority: i32,
    pub desc_func: Option<i32>,
    pub desc_val: Option<i32>,
    pub desc_str_pos: String,
    pub desc_str_neg: String,
    pub desc_str2: String,
    pub dgrp: Option<i32>,
    pub dgrp_func: Option<i32>,
    pub dgrp_val: Option<i32>,
    pub dgrp_str_pos: String,
    pub dgrp_str_neg: String,
    pub dgrp_str2: String,
}

impl StatDescriptor {
    fn from_row(index: usize, row: &Row) -> Result<Self, TableError> {
        Ok(StatDescriptor {
            index,
            stat: row.field(0).to_string(),
            op: row.int(25)?,
            op_param: row.int(26)?,
            op_base: row.field(27).to_string(),
            op_stats: [
                row.field(28).to_string(),
                row.field(29).to_string(),
                row.field(30).to_string(),
            ],
            direct: row.int(31)?,
            max_stat: row.field(32).to_string(),
            desc_priority: row.int_or(39, 0)?,
            desc_func: row.int(40)?,
            desc_val: row.int(41)?,
            desc_str_pos: row.field(42).to_string(),
            desc_str_neg: row.field(43).to_string(),
            desc_str2: row.field(44).to_string(),
            dgrp: row.int(45)?,
            dgrp_func: row.int(46)?,
            dgrp_val: row.int(47)?,
            dgrp_str_pos: row.field(48).to_string(),
            dgrp_str_neg: row.field(49).to_string(),
            dgrp_str2: row.field(50).to_string(),
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct ItemStatCostTable {
    stats: HashMap<String, StatDescriptor>,
}

impl ItemStatCostTable {
    pub fn load(path: &Path) -> Result<Self, TableError> {
        Self::from_rows(read_rows(path)?)
    }

    pub fn from_rows<I: IntoIterator<Item = Row>>(rows: I) -> Result<Self, TableError> {
        let mut stats = HashMap::new();
        let mut index = 0;

        for (position, row) in rows.into_iter().enumerate() {
            if row.field(0) == EXPANSION_SENTINEL {
                continue;
            }

            let stat =
                StatDescriptor::from_row(index, &row).map_err(at_row("itemstatcost", position))?;
            index += 1;

            if stats.contains_key(&stat.stat) {
                return Err(TableError::DuplicateKey {
                    table: "itemstatcost",
                    key: stat.stat,
                });
            }
            stats.insert(stat.stat.clone(), stat);
        }

        tracing::debug!(rows = stats.len(), "loaded itemstatcost table");
        Ok(ItemStatCostTable { stats })
    }

    pub fn get(&self, stat: &str) -> Option<&StatDescriptor> {
        self.stats.get(stat)
    }

    /// Add or replace a descriptor
    pub fn insert(&mut self, stat: StatDescriptor) {
        self.stats.insert(stat.stat.clone(), stat);
    }

    pub fn len(&self) -> usize {
        self.stats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stats.is_empty()
    }
}
