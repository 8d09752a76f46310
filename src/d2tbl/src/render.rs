//! Ranked property blocks for items and rune words

use crate::context::Tables;
use crate::dispatch::{render_property, RenderedProperty};
use crate::error::RenderError;
use crate::property::Property;
use crate::tables::Gem;

/// Separator between the fragments of one rune's socket bonuses
pub const RUNE_PROPERTY_SEPARATOR: &str = ", ";

/// Order rendered properties by descending priority
///
/// The sort is stable, so properties of equal priority keep their source
/// order. Properties that produced no text are dropped.
pub fn rank(rendered: Vec<RenderedProperty>) -> Vec<String> {
    let mut rendered: Vec<_> = rendered.into_iter().filter(|r| !r.lines.is_empty()).collect();
    rendered.sort_by(|a, b| b.priority.cmp(&a.priority));
    rendered.into_iter().flat_map(|r| r.lines).collect()
}

/// Render an item's properties as one ranked block of lines
pub fn render_properties(tables: &Tables, props: &[Property]) -> Result<Vec<String>, RenderError> {
    let rendered = props
        .iter()
        .map(|prop| render_property(tables, prop))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(rank(rendered))
}

/// Render properties in source order as a single separated line
pub fn render_property_list(tables: &Tables, props: &[Property]) -> Result<String, RenderError> {
    let mut lines = Vec::new();
    for prop in props {
        lines.extend(render_property(tables, prop)?.lines);
    }
    Ok(lines.join(RUNE_PROPERTY_SEPARATOR))
}

/// Rune word socket groups, each reading a different property set of a rune
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocketGroup {
    Weapon,
    Armor,
    Shield,
}

impl SocketGroup {
    pub const ALL: [SocketGroup; 3] = [SocketGroup::Weapon, SocketGroup::Armor, SocketGroup::Shield];

    /// Rune word item type code that selects this group
    pub fn item_type(self) -> &'static str {
        match self {
            SocketGroup::Weapon => "rwt1",
            SocketGroup::Armor => "rwt2",
            SocketGroup::Shield => "rwt3",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SocketGroup::Weapon => "Weapons",
            SocketGroup::Armor => "Armor",
            SocketGroup::Shield => "Shields",
        }
    }

    /// Armor sockets use the rune's helm properties
    pub fn props(self, gem: &Gem) -> &[Property] {
        match self {
            SocketGroup::Weapon => &gem.weapon_props,
            SocketGroup::Armor => &gem.helm_props,
            SocketGroup::Shield => &gem.shield_props,
        }
    }
}
