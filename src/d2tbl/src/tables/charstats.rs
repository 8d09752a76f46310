//! Character classes

use std::path::Path;

use super::{read_rows, Row, TableError, EXPANSION_SENTINEL};

/// A charstats.txt row; the string columns hold string-table keys
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharStat {
    pub index: usize,
    pub charclass: String,
    pub all_skills: String,
    pub skill_tabs: [String; 3],
    pub class_only: String,
}

impl CharStat {
    fn from_row(index: usize, row: &Row) -> Self {
        CharStat {
            index,
            charclass: row.field(0).to_string(),
            all_skills: row.field(43).to_string(),
            skill_tabs: [
                row.field(44).to_string(),
                row.field(45).to_string(),
                row.field(46).to_string(),
            ],
            class_only: row.field(47).to_string(),
        }
    }
}

/// Classes addressed by class id (row position, sentinel rows excluded)
#[derive(Debug, Clone, Default)]
pub struct CharStatTable {
    classes: Vec<CharStat>,
}

impl CharStatTable {
    pub fn load(path: &Path) -> Result<Self, TableError> {
        Ok(Self::from_rows(read_rows(path)?))
    }

    pub fn from_rows<I: IntoIterator<Item = Row>>(rows: I) -> Self {
        let mut classes = Vec::new();
        for row in rows {
            if row.field(0) == EXPANSION_SENTINEL {
                continue;
            }
            classes.push(CharStat::from_row(classes.len(), &row));
        }
        tracing::debug!(rows = classes.len(), "loaded charstats table");
        CharStatTable { classes }
    }

    pub fn get(&self, class_id: i32) -> Option<&CharStat> {
        usize::try_from(class_id)
            .ok()
            .and_then(|i| self.classes.get(i))
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn class_row(name: &str, only: &str) -> Row {
        Row::with_columns(&[
            (0, name),
            (43, "ModStr3a"),
            (44, "StrSklTabItem3"),
            (45, "StrSklTabItem2"),
            (46, "StrSklTabItem1"),
            (47, only),
        ])
    }

    #[test]
    fn test_sentinel_rows_do_not_take_an_id() {
        let table = CharStatTable::from_rows(vec![
            class_row("Amazon", "AmaOnly"),
            class_row("Expansion", ""),
            class_row("Druid", "DruOnly"),
        ]);

        assert_eq!(table.len(), 2);
        assert_eq!(table.get(1).unwrap().class_only, "DruOnly");
        assert_eq!(table.get(0).unwrap().skill_tabs[2], "StrSklTabItem1");
        assert!(table.get(2).is_none());
        assert!(table.get(-1).is_none());
    }
}
