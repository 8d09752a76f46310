//! The loaded reference tables and the cross-table lookups built on them
//!
//! [`Tables`] is built once and then only read. Every renderer takes it by
//! shared reference, so tests can hand in a small fixture instead of the
//! full game data.

use std::path::Path;

use crate::tables::{
    ArmorTable, CharStat, CharStatTable, GemTable, ItemStatCostTable, MiscTable, PropertyTable,
    Skill, SkillDescTable, SkillTable, StringTable, TableError, WeaponTable,
};

/// Width of each band of the flat string index space
pub const STRING_BAND: i32 = 10000;

/// Table file names inside a data directory
pub mod files {
    pub const STRING: &str = "string.txt";
    pub const EXPANSION_STRING: &str = "expansionstring.txt";
    pub const PATCH_STRING: &str = "patchstring.txt";
    pub const WEAPONS: &str = "weapons.txt";
    pub const ARMOR: &str = "armor.txt";
    pub const MISC: &str = "misc.txt";
    pub const GEMS: &str = "gems.txt";
    pub const PROPERTIES: &str = "properties.txt";
    pub const ITEM_STAT_COST: &str = "itemstatcost.txt";
    pub const CHAR_STATS: &str = "charstats.txt";
    pub const SKILLS: &str = "skills.txt";
    pub const SKILL_DESC: &str = "skilldesc.txt";
    pub const UNIQUE_ITEMS: &str = "uniqueitems.txt";
    pub const RUNES: &str = "runes.txt";
}

/// All reference tables needed to describe items
#[derive(Debug, Clone, Default)]
pub struct Tables {
    pub string: StringTable,
    pub expansion_string: StringTable,
    pub patch_string: StringTable,
    pub weapons: WeaponTable,
    pub armor: ArmorTable,
    pub misc: MiscTable,
    pub gems: GemTable,
    pub properties: PropertyTable,
    pub item_stats: ItemStatCostTable,
    pub char_stats: CharStatTable,
    pub skills: SkillTable,
    pub skill_desc: SkillDescTable,
}

impl Tables {
    /// Load every reference table from a data directory
    pub fn load(dir: &Path) -> Result<Self, TableError> {
        let tables = Tables {
            string: StringTable::load(&dir.join(files::STRING))?,
            expansion_string: StringTable::load(&dir.join(files::EXPANSION_STRING))?,
            patch_string: StringTable::load(&dir.join(files::PATCH_STRING))?,
            weapons: WeaponTable::load(&dir.join(files::WEAPONS))?,
            armor: ArmorTable::load(&dir.join(files::ARMOR))?,
            misc: MiscTable::load(&dir.join(files::MISC))?,
            gems: GemTable::load(&dir.join(files::GEMS))?,
            properties: PropertyTable::load(&dir.join(files::PROPERTIES))?,
            item_stats: ItemStatCostTable::load(&dir.join(files::ITEM_STAT_COST))?,
            char_stats: CharStatTable::load(&dir.join(files::CHAR_STATS))?,
            skills: SkillTable::load(&dir.join(files::SKILLS))?,
            skill_desc: SkillDescTable::load(&dir.join(files::SKILL_DESC))?,
        };
        tracing::info!(dir = %dir.display(), "loaded reference tables");
        Ok(tables)
    }

    // ========================================================================
    // Strings
    // ========================================================================

    /// Look a key up in the patch, expansion and base layers, in that order
    pub fn try_string(&self, key: &str) -> Option<String> {
        [&self.patch_string, &self.expansion_string, &self.string]
            .into_iter()
            .find_map(|layer| layer.get(key))
    }

    /// Like [`Tables::try_string`], but a missing key yields a tagged placeholder
    pub fn string(&self, key: &str) -> String {
        self.try_string(key).unwrap_or_else(|| {
            tracing::warn!(key, "missing string");
            format!("<missing string>[{}]", key)
        })
    }

    /// Resolve an absolute string index
    ///
    /// `0..10000` is the base layer, `10000..20000` the patch layer and
    /// `20000..30000` the expansion layer.
    pub fn string_by_index(&self, index: i32) -> Result<String, TableError> {
        let (layer, offset) = match index {
            i if (0..STRING_BAND).contains(&i) => (&self.string, 0),
            i if (STRING_BAND..2 * STRING_BAND).contains(&i) => (&self.patch_string, STRING_BAND),
            i if (2 * STRING_BAND..3 * STRING_BAND).contains(&i) => {
                (&self.expansion_string, 2 * STRING_BAND)
            }
            _ => return Err(TableError::InvalidStringIndex(index)),
        };

        // in range of the band, so the subtraction is never negative
        layer
            .get_index((index - offset) as usize)
            .ok_or(TableError::InvalidStringIndex(index))
    }

    // ========================================================================
    // Skills
    // ========================================================================

    pub fn skill(&self, id: i32) -> Result<&Skill, TableError> {
        self.skills
            .get(id)
            .ok_or_else(|| TableError::UnknownSkill(id.to_string()))
    }

    pub fn skill_by_name(&self, name: &str) -> Result<&Skill, TableError> {
        self.skills
            .get_by_name(name)
            .ok_or_else(|| TableError::UnknownSkill(name.to_string()))
    }

    /// Numeric text is a skill id, anything else a skill name
    pub fn skill_by_id_or_name(&self, key: &str) -> Result<&Skill, TableError> {
        match key.trim().parse::<i32>() {
            Ok(id) => self.skill(id),
            Err(_) => self.skill_by_name(key),
        }
    }

    /// Localized skill name via the skill's description row
    pub fn skill_name(&self, id: i32) -> Result<String, TableError> {
        let skill = self.skill(id)?;
        let desc = self
            .skill_desc
            .get(skill.skilldesc)
            .ok_or(TableError::UnknownSkillDesc(skill.skilldesc))?;
        let strname = desc.strname.ok_or(TableError::MissingSkillName(id))?;
        self.string_by_index(strname)
    }

    /// Class-restriction suffix for a skill, empty for skills of no class
    pub fn skill_class_only(&self, id: i32) -> Result<String, TableError> {
        let skill = self.skill(id)?;
        if !skill.has_class() {
            return Ok(String::new());
        }
        self.class_only(skill.charclass)
    }

    // ========================================================================
    // Classes
    // ========================================================================

    pub fn class(&self, class_id: i32) -> Result<&CharStat, TableError> {
        self.char_stats
            .get(class_id)
            .ok_or(TableError::UnknownClass(class_id))
    }

    /// Localized "(Class Only)" suffix
    pub fn class_only(&self, class_id: i32) -> Result<String, TableError> {
        Ok(self.string(&self.class(class_id)?.class_only))
    }

    /// Localized "to <class> skill levels" label
    pub fn class_skill_name(&self, class_id: i32) -> Result<String, TableError> {
        Ok(self.string(&self.class(class_id)?.all_skills))
    }

    /// Localized skill tab name; each class owns three consecutive tab ids
    pub fn skill_tab_name(&self, skill_tab_id: i32) -> Result<String, TableError> {
        let (class_id, slot) = skill_tab_slot(skill_tab_id);
        let class = self.class(class_id)?;
        Ok(self.string(&class.skill_tabs[slot]))
    }
}

/// Split a skill tab id into `(class id, tab slot)`
pub fn skill_tab_slot(skill_tab_id: i32) -> (i32, usize) {
    (
        skill_tab_id.div_euclid(3),
        skill_tab_id.rem_euclid(3) as usize,
    )
}
