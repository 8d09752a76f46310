//! Property descriptor dispatch
//!
//! A property code names a [`PropertyDescriptor`] whose stat functions say how
//! the property's `(param, min, max)` map onto stats. Each function yields
//! zero or more lines of text and contributes to the property's display
//! priority, which the item renderer sorts on.

use serde::Serialize;

use crate::context::Tables;
use crate::error::RenderError;
use crate::format::{minmax, RangeStyle};
use crate::property::{Param, Property, SKILL_PREFIX};
use crate::statdesc::{describe, DescFunc, StatArgs};
use crate::tables::{PropertyDescriptor, StatDescriptor, StatFunction};

/// Priority of a property whose target stat has no descriptor
pub const MISSING_STAT_PRIORITY: i32 = 1000;
pub const ENHANCED_DAMAGE_PRIORITY: i32 = 2000;
pub const SKILL_TAB_PRIORITY: i32 = 2999;
pub const CLASS_SKILLS_PRIORITY: i32 = 3000;
pub const SOCKETS_PRIORITY: i32 = 1;
pub const LOWEST_PRIORITY: i32 = 0;

/// Absolute string index of the ethereal marker
pub const ETHEREAL_STRING_INDEX: i32 = 22745;

pub const RANDOM_SKILL_HEADER: &str = "Random Skill:";
const RANDOM_SKILL_INDENT: &str = "    ";

const MIN_DAMAGE_KEY: &str = "ModStr1g";
const MAX_DAMAGE_KEY: &str = "ModStr1f";
const ENHANCED_DAMAGE_KEY: &str = "strModEnhancedDamage";
const INDESTRUCTIBLE_KEY: &str = "ModStre9s";

/// Stat function codes of a property descriptor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyFunc {
    /// 1: applies the range to the stat
    Apply,
    /// 2: defensive variant of 1
    ApplyDefensive,
    /// 3: reuses the range of the previous function (`res-all`)
    ApplyPrevious,
    /// 5
    MinDamage,
    /// 6
    MaxDamage,
    /// 7
    EnhancedDamage,
    /// 8: attack and cast speed
    Speed,
    /// 10
    SkillTab,
    /// 11
    EventSkill,
    /// 12: one line per skill id in `min..=max`
    RandomSkill,
    /// 14
    Sockets,
    /// 15
    MinOnly,
    /// 16
    MaxOnly,
    /// 17
    ParamOnly,
    /// 18
    ByTime,
    /// 19
    Charged,
    /// 20
    Indestructible,
    /// 21: skill group chosen by the function's `val`
    ClassSkills,
    /// 22
    IndividualSkill,
    /// 23
    Ethereal,
    /// 24: applies to the character or a target monster
    Reanimate,
    /// 27
    ClassSkill,
    /// 28
    Skill,
    /// 29
    Hidden,
}

impl PropertyFunc {
    pub fn from_code(code: i32) -> Option<Self> {
        use PropertyFunc::*;
        Some(match code {
            1 => Apply,
            2 => ApplyDefensive,
            3 => ApplyPrevious,
            5 => MinDamage,
            6 => MaxDamage,
            7 => EnhancedDamage,
            8 => Speed,
            10 => SkillTab,
            11 => EventSkill,
            12 => RandomSkill,
            14 => Sockets,
            15 => MinOnly,
            16 => MaxOnly,
            17 => ParamOnly,
            18 => ByTime,
            19 => Charged,
            20 => Indestructible,
            21 => ClassSkills,
            22 => IndividualSkill,
            23 => Ethereal,
            24 => Reanimate,
            27 => ClassSkill,
            28 => Skill,
            29 => Hidden,
            _ => return None,
        })
    }

    /// Fixed priority this function forces on its property, if any
    pub fn priority_band(self) -> Option<i32> {
        match self {
            PropertyFunc::EnhancedDamage => Some(ENHANCED_DAMAGE_PRIORITY),
            PropertyFunc::SkillTab => Some(SKILL_TAB_PRIORITY),
            PropertyFunc::ClassSkills => Some(CLASS_SKILLS_PRIORITY),
            PropertyFunc::Sockets => Some(SOCKETS_PRIORITY),
            PropertyFunc::Indestructible | PropertyFunc::Ethereal => Some(LOWEST_PRIORITY),
            _ => None,
        }
    }
}

/// Rendered text of one property and the priority it sorts by
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RenderedProperty {
    pub priority: i32,
    pub lines: Vec<String>,
}

/// Resolve a property parameter to the integer the templates consume
pub fn resolve_param(tables: &Tables, prop: &Property) -> Result<i32, RenderError> {
    match &prop.param {
        Param::Value(value) => Ok(*value),
        Param::Skill(name) if name.starts_with(SKILL_PREFIX) => {
            Ok(tables.skill_by_id_or_name(name)?.id)
        }
        Param::Skill(name) => Err(RenderError::UnsupportedParam {
            code: prop.code.clone(),
            param: name.clone(),
        }),
    }
}

/// Render one property through its descriptor's stat functions
pub fn render_property(tables: &Tables, prop: &Property) -> Result<RenderedProperty, RenderError> {
    let descriptor = tables
        .properties
        .get(&prop.code)
        .ok_or_else(|| RenderError::UnknownProperty(prop.code.clone()))?;
    if descriptor.funcs.is_empty() {
        return Err(RenderError::EmptyProperty(prop.code.clone()));
    }

    let param = resolve_param(tables, prop)?;
    let dispatch = Dispatch {
        tables,
        prop,
        descriptor,
        param,
    };

    let mut rendered = RenderedProperty::default();
    for function in &descriptor.funcs {
        let stat = tables.item_stats.get(&function.stat);
        rendered.priority = match stat {
            Some(stat) => rendered.priority.max(stat.desc_priority),
            None => MISSING_STAT_PRIORITY,
        };

        let func = PropertyFunc::from_code(function.func).ok_or_else(|| {
            RenderError::UnknownPropertyFunc {
                code: prop.code.clone(),
                func: function.func,
            }
        })?;

        tracing::trace!(
            code = %prop.code,
            stat = %function.stat,
            func = function.func,
            "evaluating stat function"
        );
        dispatch.evaluate(func, function, stat, &mut rendered.lines)?;

        if let Some(band) = func.priority_band() {
            rendered.priority = band;
        }
    }

    tracing::debug!(
        code = %prop.code,
        param,
        priority = rendered.priority,
        lines = rendered.lines.len(),
        "rendered property"
    );
    Ok(rendered)
}

/// One property being rendered, with its parameter already resolved
struct Dispatch<'a> {
    tables: &'a Tables,
    prop: &'a Property,
    descriptor: &'a PropertyDescriptor,
    param: i32,
}

impl<'a> Dispatch<'a> {
    fn missing(&self, what: &'static str) -> RenderError {
        RenderError::MissingPropertyArgument {
            code: self.prop.code.clone(),
            what,
        }
    }

    fn min(&self) -> Result<i32, RenderError> {
        self.prop.min.ok_or_else(|| self.missing("min"))
    }

    fn range(&self, style: RangeStyle) -> Result<String, RenderError> {
        Ok(minmax(self.min()?, self.prop.max, style))
    }

    fn require(
        &self,
        function: &StatFunction,
        stat: Option<&'a StatDescriptor>,
    ) -> Result<&'a StatDescriptor, RenderError> {
        stat.ok_or_else(|| RenderError::MissingStat {
            code: self.descriptor.code.clone(),
            stat: function.stat.clone(),
        })
    }

    fn delegate(
        &self,
        function: &StatFunction,
        stat: Option<&'a StatDescriptor>,
        args: StatArgs,
        lines: &mut Vec<String>,
    ) -> Result<(), RenderError> {
        let stat = self.require(function, stat)?;
        lines.extend(describe(self.tables, stat, args)?);
        Ok(())
    }

    fn evaluate(
        &self,
        func: PropertyFunc,
        function: &StatFunction,
        stat: Option<&'a StatDescriptor>,
        lines: &mut Vec<String>,
    ) -> Result<(), RenderError> {
        let tables = self.tables;
        let range = StatArgs::range(self.prop.min, self.prop.max);

        match func {
            PropertyFunc::Apply
            | PropertyFunc::ApplyDefensive
            | PropertyFunc::ApplyPrevious
            | PropertyFunc::Speed
            | PropertyFunc::MinOnly
            | PropertyFunc::MaxOnly => self.delegate(function, stat, range, lines)?,

            PropertyFunc::SkillTab
            | PropertyFunc::EventSkill
            | PropertyFunc::ByTime
            | PropertyFunc::Charged
            | PropertyFunc::IndividualSkill
            | PropertyFunc::Reanimate => {
                self.delegate(function, stat, range.with_param(self.param), lines)?
            }

            PropertyFunc::ParamOnly => self.delegate(
                function,
                stat,
                StatArgs::default().with_param(self.param),
                lines,
            )?,

            PropertyFunc::ClassSkills => self.delegate(
                function,
                stat,
                range.with_func_val(function.val),
                lines,
            )?,

            PropertyFunc::MinDamage | PropertyFunc::MaxDamage => {
                let key = match func {
                    PropertyFunc::MinDamage => MIN_DAMAGE_KEY,
                    _ => MAX_DAMAGE_KEY,
                };
                lines.push(format!(
                    "+{} {}",
                    self.range(RangeStyle::PLAIN)?,
                    tables.string(key)
                ));
            }

            PropertyFunc::EnhancedDamage => lines.push(format!(
                "+{}% {}",
                self.range(RangeStyle::PLAIN)?,
                tables.string(ENHANCED_DAMAGE_KEY)
            )),

            PropertyFunc::RandomSkill => {
                let stat = self.require(function, stat)?;
                if stat.desc_func.and_then(DescFunc::from_code) != Some(DescFunc::ClassSkill) {
                    return Err(RenderError::RandomSkillTemplate {
                        code: self.prop.code.clone(),
                        stat: stat.stat.clone(),
                        func: stat.desc_func,
                    });
                }

                let max = self.prop.max.ok_or_else(|| self.missing("max"))?;
                lines.push(RANDOM_SKILL_HEADER.to_string());
                for skill in self.min()?..=max {
                    let args = StatArgs::range(Some(0), Some(self.param)).with_param(skill);
                    if let Some(text) = describe(tables, stat, args)? {
                        lines.push(format!("{}{}", RANDOM_SKILL_INDENT, text));
                    }
                }
            }

            PropertyFunc::Sockets => {
                let stat = self.require(function, stat)?;
                let label = tables.string(&stat.desc_str2);
                let count = match (self.prop.min, self.prop.max) {
                    (None, None) => self.param.to_string(),
                    (min, max) => minmax(min.unwrap_or(0), max, RangeStyle::BARE),
                };
                lines.push(format!("{} ({})", label, count));
            }

            PropertyFunc::Indestructible => {
                if self.prop.min != Some(1) {
                    return Err(RenderError::Indestructible {
                        code: self.prop.code.clone(),
                        min: self.prop.min,
                    });
                }
                lines.push(tables.string(INDESTRUCTIBLE_KEY));
            }

            PropertyFunc::Ethereal => lines.push(tables.string_by_index(ETHEREAL_STRING_INDEX)?),

            PropertyFunc::ClassSkill => lines.push(format!(
                "+{} {}{}",
                self.range(RangeStyle::PLAIN)?,
                tables.skill_name(self.param)?,
                tables.skill_class_only(self.param)?
            )),

            PropertyFunc::Skill => lines.push(format!(
                "+{} {}",
                self.range(RangeStyle::PLAIN)?,
                tables.skill_name(self.param)?
            )),

            PropertyFunc::Hidden => {}
        }

        Ok(())
    }
}
