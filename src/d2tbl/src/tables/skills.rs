//! Skills and skill descriptions

use std::collections::HashMap;
use std::path::Path;

use super::{at_row, read_rows, Row, TableError};

/// `charclass` value of skills usable by every class
pub const NO_CLASS: i32 = 0xFF;

/// A skills.txt row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skill {
    pub index: usize,
    pub name: String,
    pub id: i32,
    pub charclass: i32,
    pub skilldesc: i32,
}

impl Skill {
    fn from_row(index: usize, row: &Row) -> Result<Self, TableError> {
        Ok(Skill {
            index,
            name: row.field(0).to_string(),
            id: row.int_or(1, 0)?,
            charclass: row.int_or(2, 0)?,
            skilldesc: row.int_or(3, 0)?,
        })
    }

    pub fn has_class(&self) -> bool {
        self.charclass != NO_CLASS
    }
}

/// Skills indexed by numeric id and by name
#[derive(Debug, Clone, Default)]
pub struct SkillTable {
    skills: Vec<Skill>,
    by_id: HashMap<i32, usize>,
    by_name: HashMap<String, usize>,
}

impl SkillTable {
    pub fn load(path: &Path) -> Result<Self, TableError> {
        Self::from_rows(read_rows(path)?)
    }

    pub fn from_rows<I: IntoIterator<Item = Row>>(rows: I) -> Result<Self, TableError> {
        let mut table = SkillTable::default();

        for (index, row) in rows.into_iter().enumerate() {
            let skill = Skill::from_row(index, &row).map_err(at_row("skills", index))?;
            if table.by_id.contains_key(&skill.id) {
                return Err(TableError::DuplicateKey {
                    table: "skills",
                    key: skill.id.to_string(),
                });
            }

            table.by_id.insert(skill.id, table.skills.len());
            table.by_name.insert(skill.name.clone(), table.skills.len());
            table.skills.push(skill);
        }

        tracing::debug!(rows = table.skills.len(), "loaded skills table");
        Ok(table)
    }

    pub fn get(&self, id: i32) -> Option<&Skill> {
        self.by_id.get(&id).map(|&i| &self.skills[i])
    }

    pub fn get_by_name(&self, name: &str) -> Option<&Skill> {
        self.by_name.get(name).map(|&i| &self.skills[i])
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }
}

/// A skilldesc.txt row; the `str*` columns are absolute string indices
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillDesc {
    pub index: usize,
    pub skilldesc: String,
    pub strname: Option<i32>,
    pub strshort: Option<i32>,
    pub strlong: Option<i32>,
    pub stralt: Option<i32>,
    pub strmana: Option<i32>,
}

impl SkillDesc {
    fn from_row(index: usize, row: &Row) -> Result<Self, TableError> {
        Ok(SkillDesc {
            index,
            skilldesc: row.field(0).to_string(),
            strname: row.int(7)?,
            strshort: row.int(8)?,
            strlong: row.int(9)?,
            stralt: row.int(10)?,
            strmana: row.int(11)?,
        })
    }
}

/// Skill descriptions addressed by row position
#[derive(Debug, Clone, Default)]
pub struct SkillDescTable {
    rows: Vec<SkillDesc>,
}

impl SkillDescTable {
    pub fn load(path: &Path) -> Result<Self, TableError> {
        Self::from_rows(read_rows(path)?)
    }

    pub fn from_rows<I: IntoIterator<Item = Row>>(rows: I) -> Result<Self, TableError> {
        let rows = rows
            .into_iter()
            .enumerate()
            .map(|(i, row)| SkillDesc::from_row(i, &row).map_err(at_row("skilldesc", i)))
            .collect::<Result<Vec<_>, _>>()?;
        tracing::debug!(rows = rows.len(), "loaded skilldesc table");
        Ok(SkillDescTable { rows })
    }

    pub fn get(&self, index: i32) -> Option<&SkillDesc> {
        usize::try_from(index).ok().and_then(|i| self.rows.get(i))
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
