//! Base item tables: weapons, armor and misc
//!
//! Each table assigns a running item index starting at its own base so the
//! three tables share one id space (weapons from 1, armor from 1001, misc
//! from 2001).

use std::collections::HashMap;
use std::path::Path;

use super::{at_row, read_rows, Row, TableError, EXPANSION_SENTINEL};

/// A base weapon row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Weapon {
    pub index: u32,
    pub name: String,
    pub kind: String,
    pub code: String,
    pub namestr: String,
    pub reqstr: Option<i32>,
    pub reqdex: Option<i32>,
    pub durability: Option<i32>,
}

impl Weapon {
    fn from_row(index: u32, row: &Row) -> Result<Self, TableError> {
        Ok(Weapon {
            index,
            name: row.field(0).to_string(),
            kind: row.field(1).to_string(),
            code: row.field(3).to_string(),
            namestr: row.field(5).to_string(),
            reqstr: row.int(23)?,
            reqdex: row.int(24)?,
            durability: row.int(25)?,
        })
    }

    /// String key describing the weapon class, for the types that have one
    pub fn description_key(&self) -> Option<&'static str> {
        match self.kind.as_str() {
            "staf" => Some("WeaponDescStaff"),
            "axe" => Some("WeaponDescAxe"),
            "swor" => Some("WeaponDescSword"),
            "knif" => Some("WeaponDescDagger"),
            "spea" => Some("WeaponDescSpear"),
            "pole" => Some("WeaponDescPoleArm"),
            "bow" => Some("WeaponDescBow"),
            "xbow" => Some("WeaponDescCrossBow"),
            "tpot" => Some("WeaponDescThrowPotion"),
            "jave" => Some("WeaponDescJavelin"),
            "blun" => Some("WeaponDescMace"),
            "h2h" | "h2h2" => Some("WeaponDescH2H"),
            _ => None,
        }
    }
}

/// A base armor row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Armor {
    pub index: u32,
    pub name: String,
    pub reqstr: Option<i32>,
    pub reqdex: Option<i32>,
    pub durability: Option<i32>,
    pub levelreq: String,
    pub code: String,
    pub namestr: String,
}

impl Armor {
    fn from_row(index: u32, row: &Row) -> Result<Self, TableError> {
        Ok(Armor {
            index,
            name: row.field(0).to_string(),
            reqstr: row.int(9)?,
            reqdex: row.int(10)?,
            durability: row.int(12)?,
            levelreq: row.field(15).to_string(),
            code: row.field(18).to_string(),
            namestr: row.field(19).to_string(),
        })
    }
}

/// A base misc item row (charms, jewels, runes, potions...)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Misc {
    pub index: u32,
    pub name: String,
    pub levelreq: String,
    pub code: String,
    pub namestr: String,
}

impl Misc {
    fn from_row(index: u32, row: &Row) -> Result<Self, TableError> {
        Ok(Misc {
            index,
            name: row.field(0).to_string(),
            levelreq: row.field(6).to_string(),
            code: row.field(13).to_string(),
            namestr: row.field(15).to_string(),
        })
    }
}

/// Code-keyed table of base items
#[derive(Debug, Clone)]
pub struct BaseItemTable<T> {
    items: HashMap<String, T>,
}

impl<T> Default for BaseItemTable<T> {
    fn default() -> Self {
        BaseItemTable {
            items: HashMap::new(),
        }
    }
}

impl<T> BaseItemTable<T> {
    fn build<I, F, K>(
        table: &'static str,
        rows: I,
        first_index: u32,
        make: F,
        key: K,
    ) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = Row>,
        F: Fn(u32, &Row) -> Result<T, TableError>,
        K: Fn(&T) -> &str,
    {
        let mut items = HashMap::new();
        let mut index = first_index;
        let mut skipped = 0usize;

        for (position, row) in rows.into_iter().enumerate() {
            if row.field(0) == EXPANSION_SENTINEL {
                skipped += 1;
                continue;
            }

            let item = make(index, &row).map_err(at_row(table, position))?;
            index += 1;

            let code = key(&item).to_string();
            if items.contains_key(&code) {
                return Err(TableError::DuplicateKey { table, key: code });
            }
            items.insert(code, item);
        }

        tracing::debug!(table, rows = items.len(), skipped, "loaded item table");
        Ok(BaseItemTable { items })
    }

    pub fn get(&self, code: &str) -> Option<&T> {
        self.items.get(code)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.items.values()
    }
}

pub type WeaponTable = BaseItemTable<Weapon>;
pub type ArmorTable = BaseItemTable<Armor>;
pub type MiscTable = BaseItemTable<Misc>;

impl BaseItemTable<Weapon> {
    pub fn load(path: &Path) -> Result<Self, TableError> {
        Self::from_rows(read_rows(path)?)
    }

    pub fn from_rows<I: IntoIterator<Item = Row>>(rows: I) -> Result<Self, TableError> {
        Self::build("weapons", rows, 1, Weapon::from_row, |w| &w.code)
    }
}

impl BaseItemTable<Armor> {
    pub fn load(path: &Path) -> Result<Self, TableError> {
        Self::from_rows(read_rows(path)?)
    }

    pub fn from_rows<I: IntoIterator<Item = Row>>(rows: I) -> Result<Self, TableError> {
        Self::build("armor", rows, 1001, Armor::from_row, |a| &a.code)
    }
}

impl BaseItemTable<Misc> {
    pub fn load(path: &Path) -> Result<Self, TableError> {
        Self::from_rows(read_rows(path)?)
    }

    pub fn from_rows<I: IntoIterator<Item = Row>>(rows: I) -> Result<Self, TableError> {
        Self::build("misc", rows, 2001, Misc::from_row, |m| &m.code)
    }
}
