//! Rune words (runes.txt)

use std::path::Path;

use super::{at_row, read_rows, Row, TableError};
use crate::property::Property;

#[derive(Debug, Clone, PartialEq)]
pub struct RuneWord {
    pub name: String,
    pub complete: Option<i32>,
    pub itypes: Vec<String>,
    pub etypes: Vec<String>,
    pub runes: Vec<String>,
    pub props: Vec<Property>,
}

impl RuneWord {
    fn from_row(row: &Row) -> Result<Self, TableError> {
        Ok(RuneWord {
            name: row.field(0).to_string(),
            complete: row.int(2)?,
            itypes: row.non_empty(4, 10),
            etypes: row.non_empty(10, 14),
            runes: row.non_empty(14, 20),
            props: row.properties(20, 48)?,
        })
    }

    pub fn is_complete(&self) -> bool {
        self.complete.is_some_and(|c| c != 0)
    }
}

/// Completed rune words in file order
#[derive(Debug, Clone, Default)]
pub struct RuneWordTable {
    pub items: Vec<RuneWord>,
}

impl RuneWordTable {
    pub fn load(path: &Path) -> Result<Self, TableError> {
        Self::from_rows(read_rows(path)?)
    }

    pub fn from_rows<I: IntoIterator<Item = Row>>(rows: I) -> Result<Self, TableError> {
        let mut items = Vec::new();
        for (i, row) in rows.into_iter().enumerate() {
            let word = RuneWord::from_row(&row).map_err(at_row("runes", i))?;
            if word.is_complete() {
                items.push(word);
            }
        }
        tracing::debug!(rows = items.len(), "loaded runes table");
        Ok(RuneWordTable { items })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_incomplete_rune_words_skipped() {
        let table = RuneWordTable::from_rows(vec![
            Row::with_columns(&[(0, "Runeword1"), (2, "0")]),
            Row::with_columns(&[(0, "Runeword2"), (2, "")]),
            Row::with_columns(&[
                (0, "Runeword22"),
                (2, "1"),
                (4, "rwt1"),
                (5, "swor"),
                (14, "r08"),
                (15, "r05"),
                (20, "dmg%"),
                (22, "75"),
                (23, "75"),
            ]),
        ])
        .unwrap();

        assert_eq!(table.items.len(), 1);
        let rw = &table.items[0];
        assert_eq!(rw.itypes, vec!["rwt1", "swor"]);
        assert!(rw.etypes.is_empty());
        assert_eq!(rw.runes, vec!["r08", "r05"]);
        assert_eq!(rw.props[0].code, "dmg%");
    }

    #[test]
    fn test_bad_complete_flag_is_error() {
        let result = RuneWordTable::from_rows(vec![Row::with_columns(&[(0, "Runeword1"), (2, "yes")])]);
        assert!(matches!(
            result,
            Err(TableError::MalformedRow { table: "runes", .. })
        ));
    }
}
