//! Markdown pages for unique items and rune words, plus the item index

use crate::context::Tables;
use crate::error::RenderError;
use crate::markdown::Markdown;
use crate::render::{render_properties, render_property_list, SocketGroup};
use crate::tables::{Armor, Misc, RuneWord, RuneWordTable, UniqueItem, UniqueItemTable, Weapon};

pub const RUNE_WORDS_FILE: &str = "runewords.md";
pub const ITEM_INDEX_FILE: &str = "item_index.txt";

/// Lines appended after every page of a combined file
pub const PAGE_SEPARATOR: [&str; 3] = ["", "----------------------", ""];

const DURABILITY_KEY: &str = "ItemStats1d";
const REQUIRED_STRENGTH_KEY: &str = "ItemStats1e";
const REQUIRED_DEXTERITY_KEY: &str = "ItemStats1f";
const REQUIRED_LEVEL_KEY: &str = "ItemStats1p";

/// Base item family of a unique item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UniqueKind {
    Weapon,
    Armor,
    Misc,
}

impl UniqueKind {
    pub fn file_name(self) -> &'static str {
        match self {
            UniqueKind::Weapon => "unique_weapons.md",
            UniqueKind::Armor => "unique_armor.md",
            UniqueKind::Misc => "unique_misc.md",
        }
    }
}

/// Classify a unique item by where its base code is found
pub fn unique_item_kind(tables: &Tables, item: &UniqueItem) -> Result<UniqueKind, RenderError> {
    if tables.weapons.get(&item.code).is_some() {
        Ok(UniqueKind::Weapon)
    } else if tables.armor.get(&item.code).is_some() {
        Ok(UniqueKind::Armor)
    } else if tables.misc.get(&item.code).is_some() {
        Ok(UniqueKind::Misc)
    } else {
        Err(RenderError::UnknownBaseItem {
            name: item.name.clone(),
            code: item.code.clone(),
        })
    }
}

/// Display name of a rune word item type code
///
/// The socket group codes map to an empty name and are left out of titles.
pub fn builtin_item_type_name(code: &str) -> Option<&'static str> {
    Some(match code {
        "rwt1" | "rwt2" | "rwt3" => "",
        "weap" => "Weapon",
        "wand" => "Wand",
        "swor" => "Sword",
        "scep" => "Scepter",
        "pole" => "Polearm",
        "mace" => "Mace",
        "hamm" => "Hammer",
        "staf" => "Staff",
        "mqui" => "Bolts",
        "miss" => "Missile Weapon",
        "mele" => "Melee Weapon",
        "h2h" => "Claw",
        "club" => "Club",
        "axe" => "Axe",
        "belt" => "Belt",
        "boot" => "Boots",
        "glov" => "Gloves",
        "helm" => "Helm",
        "tors" => "Body Armor",
        "shie" | "shld" => "Shield",
        "pala" => "Paladin Shield",
        _ => return None,
    })
}

// ============================================================================
// Unique items
// ============================================================================

/// Render a unique item page
///
/// Returns `Ok(None)` for misc items whose base type has no display name.
pub fn format_unique_item(
    tables: &Tables,
    item: &UniqueItem,
) -> Result<Option<Vec<String>>, RenderError> {
    if let Some(weapon) = tables.weapons.get(&item.code) {
        return format_weapon(tables, item, weapon).map(Some);
    }
    if let Some(armor) = tables.armor.get(&item.code) {
        return format_armor(tables, item, armor).map(Some);
    }
    if let Some(misc) = tables.misc.get(&item.code) {
        return format_misc(tables, item, misc);
    }
    Err(RenderError::UnknownBaseItem {
        name: item.name.clone(),
        code: item.code.clone(),
    })
}

/// Item name and base type headers
fn header(md: &mut Markdown, name: &str, type_name: &str, index: u32, code: &str) {
    md.line(format!("### {}", Markdown::unique_color(name)));
    md.line(format!(
        "### {} [`i{}`] [`{}`]",
        Markdown::unique_color(type_name),
        index,
        code
    ));
    md.blank();
}

fn stat_line(md: &mut Markdown, tables: &Tables, key: &str, value: Option<i32>) {
    if let Some(value) = value {
        md.line(format!("{}{}", tables.string(key), value));
    }
}

fn properties(md: &mut Markdown, tables: &Tables, item: &UniqueItem) -> Result<(), RenderError> {
    md.blank();
    for line in render_properties(tables, &item.props)? {
        md.line(line);
    }
    Ok(())
}

fn format_weapon(
    tables: &Tables,
    item: &UniqueItem,
    weapon: &Weapon,
) -> Result<Vec<String>, RenderError> {
    let mut md = Markdown::new();
    header(
        &mut md,
        &tables.string(&item.name),
        &tables.string(&weapon.code),
        weapon.index,
        &weapon.code,
    );

    if let Some(key) = weapon.description_key() {
        md.line(tables.string(key));
    }
    stat_line(&mut md, tables, DURABILITY_KEY, weapon.durability);
    stat_line(&mut md, tables, REQUIRED_DEXTERITY_KEY, weapon.reqdex);
    stat_line(&mut md, tables, REQUIRED_STRENGTH_KEY, weapon.reqstr);
    stat_line(&mut md, tables, REQUIRED_LEVEL_KEY, item.lvlreq);

    properties(&mut md, tables, item)?;
    Ok(md.into_lines())
}

fn format_armor(
    tables: &Tables,
    item: &UniqueItem,
    armor: &Armor,
) -> Result<Vec<String>, RenderError> {
    let mut md = Markdown::new();
    header(
        &mut md,
        &tables.string(&item.name),
        &tables.string(&armor.code),
        armor.index,
        &armor.code,
    );

    stat_line(&mut md, tables, DURABILITY_KEY, armor.durability);
    stat_line(&mut md, tables, REQUIRED_STRENGTH_KEY, armor.reqstr);
    stat_line(&mut md, tables, REQUIRED_DEXTERITY_KEY, armor.reqdex);
    stat_line(&mut md, tables, REQUIRED_LEVEL_KEY, item.lvlreq);

    properties(&mut md, tables, item)?;
    Ok(md.into_lines())
}

fn format_misc(
    tables: &Tables,
    item: &UniqueItem,
    misc: &Misc,
) -> Result<Option<Vec<String>>, RenderError> {
    let Some(type_name) = tables.try_string(&misc.namestr) else {
        tracing::debug!(item = %item.name, code = %misc.code, "skipping unnamed misc item");
        return Ok(None);
    };

    let mut md = Markdown::new();
    header(
        &mut md,
        &tables.string(&item.name),
        &type_name,
        misc.index,
        &misc.code,
    );
    stat_line(&mut md, tables, REQUIRED_LEVEL_KEY, item.lvlreq);

    properties(&mut md, tables, item)?;
    Ok(Some(md.into_lines()))
}

// ============================================================================
// Rune words
// ============================================================================

/// Render a rune word page with its per-rune socket bonuses
pub fn format_rune_word(tables: &Tables, word: &RuneWord) -> Result<Vec<String>, RenderError> {
    let mut type_names = Vec::new();
    for code in &word.itypes {
        let name = builtin_item_type_name(code)
            .ok_or_else(|| RenderError::UnknownItemType(code.clone()))?;
        if !name.is_empty() {
            type_names.push(name);
        }
    }

    let mut md = Markdown::new();
    md.line(format!("### {}", Markdown::unique_color(&tables.string(&word.name))));
    md.line(format!(
        "#### {}",
        Markdown::unique_color(&format!(
            "{} Sockets {}",
            word.runes.len(),
            type_names.join("/")
        ))
    ));
    md.line(format!(
        "#### {}",
        Markdown::unique_color(&word.itypes.join(" "))
    ));
    md.blank();

    md.line(word.runes.join(" + "));
    md.blank();

    for line in render_properties(tables, &word.props)? {
        md.line(line);
    }

    for group in SocketGroup::ALL {
        if !word.itypes.iter().any(|t| t == group.item_type()) {
            continue;
        }

        md.line(format!("{}:", group.label()));
        for rune in &word.runes {
            let gem = tables
                .gems
                .get(rune)
                .ok_or_else(|| RenderError::UnknownRune {
                    word: word.name.clone(),
                    rune: rune.clone(),
                })?;
            let text = render_property_list(tables, group.props(gem))?;
            md.list(format!("{}: {}", rune, text));
        }
        md.blank();
    }

    Ok(md.into_lines())
}

// ============================================================================
// Item index
// ============================================================================

/// `{index} {name}` lines for every named base item, weapons then armor then misc
pub fn item_index(tables: &Tables) -> Vec<String> {
    fn sorted<T>(items: impl Iterator<Item = T>, index: impl Fn(&T) -> u32) -> Vec<T> {
        let mut items: Vec<T> = items.collect();
        items.sort_by_key(|item| index(item));
        items
    }

    let entries = sorted(tables.weapons.values(), |w| w.index)
        .into_iter()
        .map(|w| (w.index, w.code.as_str()))
        .chain(
            sorted(tables.armor.values(), |a| a.index)
                .into_iter()
                .map(|a| (a.index, a.code.as_str())),
        )
        .chain(
            sorted(tables.misc.values(), |m| m.index)
                .into_iter()
                .map(|m| (m.index, m.code.as_str())),
        );

    entries
        .filter_map(|(index, code)| {
            tables
                .try_string(code)
                .map(|name| format!("{:>4} {}", index, name))
        })
        .collect()
}

// ============================================================================
// Output set
// ============================================================================

/// All rendered output, one entry per file
#[derive(Debug, Clone, Default)]
pub struct Pages {
    pub weapons: Vec<String>,
    pub armor: Vec<String>,
    pub misc: Vec<String>,
    pub rune_words: Vec<String>,
    pub item_index: Vec<String>,
}

impl Pages {
    /// Render every unique item, rune word and the item index
    ///
    /// Output is accumulated in `self` as it is produced, so after an error
    /// the sections completed so far are still available.
    pub fn render(
        &mut self,
        tables: &Tables,
        uniques: &UniqueItemTable,
        rune_words: &RuneWordTable,
    ) -> Result<(), RenderError> {
        for item in &uniques.items {
            let kind = unique_item_kind(tables, item)?;
            let Some(page) = format_unique_item(tables, item)? else {
                continue;
            };
            let section = self.unique_section(kind);
            section.extend(page);
            section.extend(PAGE_SEPARATOR.iter().map(|s| s.to_string()));
        }
        tracing::info!(
            weapons = self.weapons.len(),
            armor = self.armor.len(),
            misc = self.misc.len(),
            "rendered unique items"
        );

        for word in &rune_words.items {
            self.rune_words.extend(format_rune_word(tables, word)?);
            self.rune_words
                .extend(PAGE_SEPARATOR.iter().map(|s| s.to_string()));
        }
        tracing::info!(count = rune_words.items.len(), "rendered rune words");

        self.item_index = item_index(tables);
        Ok(())
    }

    fn unique_section(&mut self, kind: UniqueKind) -> &mut Vec<String> {
        match kind {
            UniqueKind::Weapon => &mut self.weapons,
            UniqueKind::Armor => &mut self.armor,
            UniqueKind::Misc => &mut self.misc,
        }
    }

    /// `(file name, lines)` of every non-empty section
    pub fn files(&self) -> Vec<(&'static str, &[String])> {
        [
            (UniqueKind::Weapon.file_name(), self.weapons.as_slice()),
            (UniqueKind::Armor.file_name(), self.armor.as_slice()),
            (UniqueKind::Misc.file_name(), self.misc.as_slice()),
            (RUNE_WORDS_FILE, self.rune_words.as_slice()),
            (ITEM_INDEX_FILE, self.item_index.as_slice()),
        ]
        .into_iter()
        .filter(|(_, lines)| !lines.is_empty())
        .collect()
    }
}
