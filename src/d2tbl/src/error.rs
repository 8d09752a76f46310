//! Errors raised while turning properties into text

use thiserror::Error;

use crate::format::FormatError;
use crate::tables::TableError;

/// A property or stat the renderer has no rule for
///
/// These are data or logic defects, not runtime conditions to recover from:
/// every code in the shipped tables is expected to be handled.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Unknown property code: {0}")]
    UnknownProperty(String),

    #[error("Property {0} has no stat functions")]
    EmptyProperty(String),

    #[error("Unsupported parameter {param:?} on property {code}")]
    UnsupportedParam { code: String, param: String },

    #[error("Property {code} references unknown stat {stat:?}")]
    MissingStat { code: String, stat: String },

    #[error("Property function {func} on {code} is not implemented")]
    UnknownPropertyFunc { code: String, func: i32 },

    #[error("Description function {func} on stat {stat} is not implemented")]
    UnknownDescFunc { stat: String, func: i32 },

    #[error("Description value mode {mode} on stat {stat} is not implemented")]
    UnknownValueMode { stat: String, mode: i32 },

    #[error("Operator {op:?} on stat {stat} is not implemented")]
    UnknownOperator { stat: String, op: Option<i32> },

    #[error("Random skill property {code} needs an individual skill stat, {stat} uses description function {func:?}")]
    RandomSkillTemplate {
        code: String,
        stat: String,
        func: Option<i32>,
    },

    #[error("Stat {stat} needs a {what} value")]
    MissingArgument { stat: String, what: &'static str },

    #[error("Property {code} needs a {what} value")]
    MissingPropertyArgument { code: String, what: &'static str },

    #[error("Invalid time of day {0} (expected 0-3)")]
    TimeOfDay(i32),

    #[error("Stat {0} divides by a zero parameter")]
    ZeroDivisor(String),

    #[error("Indestructible property {code} expects min 1, got {min:?}")]
    Indestructible { code: String, min: Option<i32> },

    #[error("Unique item {name} uses unknown base item {code}")]
    UnknownBaseItem { name: String, code: String },

    #[error("Unknown item type code: {0}")]
    UnknownItemType(String),

    #[error("Rune word {word} uses unknown rune {rune}")]
    UnknownRune { word: String, rune: String },

    #[error(transparent)]
    Format(#[from] FormatError),

    #[error(transparent)]
    Table(#[from] TableError),
}
