//! Unique items (uniqueitems.txt)

use std::path::Path;

use super::{at_row, read_rows, Row, TableError};
use crate::property::Property;

/// A unique item row; `name` is the string-table key of its display name
#[derive(Debug, Clone, PartialEq)]
pub struct UniqueItem {
    pub name: String,
    pub version: String,
    pub enabled: String,
    pub rarity: String,
    pub lvl: Option<i32>,
    pub lvlreq: Option<i32>,
    pub code: String,
    pub kind: String,
    pub props: Vec<Property>,
}

impl UniqueItem {
    fn from_row(row: &Row) -> Result<Self, TableError> {
        Ok(UniqueItem {
            name: row.field(0).to_string(),
            version: row.field(1).to_string(),
            enabled: row.field(2).to_string(),
            rarity: row.field(4).to_string(),
            lvl: row.int(6)?,
            lvlreq: row.int(7)?,
            code: row.field(8).to_string(),
            kind: row.field(9).to_string(),
            props: row.properties(21, 69)?,
        })
    }

    /// Header rows for item groups leave both `version` and `enabled` empty
    fn is_separator(&self) -> bool {
        self.enabled.is_empty() && self.version.is_empty()
    }
}

/// Unique items in file order
#[derive(Debug, Clone, Default)]
pub struct UniqueItemTable {
    pub items: Vec<UniqueItem>,
}

impl UniqueItemTable {
    pub fn load(path: &Path) -> Result<Self, TableError> {
        Self::from_rows(read_rows(path)?)
    }

    pub fn from_rows<I: IntoIterator<Item = Row>>(rows: I) -> Result<Self, TableError> {
        let mut items = Vec::new();
        for (i, row) in rows.into_iter().enumerate() {
            let item = UniqueItem::from_row(&row).map_err(at_row("uniqueitems", i))?;
            if !item.is_separator() {
                items.push(item);
            }
        }
        tracing::debug!(rows = items.len(), "loaded uniqueitems table");
        Ok(UniqueItemTable { items })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_separator_rows_skipped() {
        let table = UniqueItemTable::from_rows(vec![
            Row::with_columns(&[(0, "Armor")]),
            Row::with_columns(&[
                (0, "The Gnasher"),
                (1, "0"),
                (2, "1"),
                (7, "7"),
                (8, "hax"),
                (21, "crush"),
                (23, "20"),
                (24, "20"),
                (65, "str"),
                (67, "8"),
                (68, "8"),
            ]),
        ])
        .unwrap();

        assert_eq!(table.items.len(), 1);
        let item = &table.items[0];
        assert_eq!(item.code, "hax");
        assert_eq!(item.lvlreq, Some(7));
        assert_eq!(item.props.len(), 2);
        assert_eq!(item.props[1].code, "str");
    }

    #[test]
    fn test_bad_level_is_error() {
        let result = UniqueItemTable::from_rows(vec![Row::with_columns(&[
            (0, "The Gnasher"),
            (1, "0"),
            (2, "1"),
            (7, "7b"),
            (8, "hax"),
        ])]);
        assert!(matches!(
            result,
            Err(TableError::MalformedRow { table: "uniqueitems", line: 2, .. })
        ));
    }
}
