//! # d2tbl
//!
//! Diablo II data table reader and item description renderer.
//!
//! This library provides functionality to:
//! - Load the tab-delimited game tables (strings, base items, gems, skills,
//!   classes, property and stat descriptors, unique items, rune words)
//! - Resolve localized strings, skill names, skill tabs and class suffixes
//! - Turn `(code, param, min, max)` item properties into ranked, localized
//!   description lines
//! - Assemble Markdown pages for unique items and rune words
//!
//! ## Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! use d2tbl::{render_properties, Param, Property, Tables};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let tables = Tables::load(Path::new("data/global/excel"))?;
//!
//! let props = vec![
//!     Property::new("dmg%", Param::Value(0), Some(150), Some(200)),
//!     Property::new("skill", Param::Skill("skTeleport".into()), Some(1), None),
//! ];
//! for line in render_properties(&tables, &props)? {
//!     println!("{}", line);
//! }
//! # Ok(())
//! # }
//! ```

pub mod context;
pub mod dispatch;
mod error;
pub mod format;
pub mod markdown;
pub mod pages;
pub mod property;
pub mod render;
pub mod statdesc;
pub mod tables;

#[cfg(test)]
mod fixtures;

#[doc(inline)]
pub use context::Tables;
#[doc(inline)]
pub use dispatch::{render_property, RenderedProperty};
#[doc(inline)]
pub use error::RenderError;
#[doc(inline)]
pub use format::{minmax, minmax_single, FormatError, RangeStyle};
#[doc(inline)]
pub use pages::{format_rune_word, format_unique_item, item_index, Pages, UniqueKind};
#[doc(inline)]
pub use property::{Param, Property};
#[doc(inline)]
pub use render::{render_properties, render_property_list, SocketGroup};
#[doc(inline)]
pub use statdesc::{describe, StatArgs};
#[doc(inline)]
pub use tables::{RuneWordTable, TableError, UniqueItemTable};
