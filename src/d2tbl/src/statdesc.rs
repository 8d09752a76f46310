//! Stat description templates
//!
//! A [`StatDescriptor`] selects one of the description templates through its
//! `descfunc` code. Most templates produce a `(value, description, secondary)`
//! triple that is then joined according to the descriptor's `descval` mode;
//! the skill templates (27, 28) return their text directly.

use crate::context::Tables;
use crate::error::RenderError;
use crate::format::{minmax, number, substitute, RangeStyle};
use crate::tables::StatDescriptor;

/// String key prefixed to charged-skill lines
const CHARGES_LEVEL_KEY: &str = "ModStre10b";

/// Secondary string keys for time-of-day stats, indexed by the stat parameter
const TIME_OF_DAY_KEYS: [&str; 4] = ["ModStre9e", "ModStre9g", "ModStre9d", "ModStre9f"];

// ============================================================================
// Codes
// ============================================================================

/// Description templates, one per supported `descfunc` code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DescFunc {
    /// `+[value] [string1]`
    Signed,
    /// `[value]% [string1]`
    Percent,
    /// `[value] [string1]`
    Plain,
    /// `+[value]% [string1]`
    SignedPercent,
    /// `[value*100/128]% [string1]`
    ScaledPercent,
    /// `+[derived] [string1] [string2]`
    PerLevel,
    /// `+[derived]% [string1] [string2]`
    PerLevelPercent,
    /// `+[derived]% [string1] [string2]`
    PerLevelSignedPercent,
    /// `[derived] [string1] [string2]`
    PerLevelPlain,
    /// Repairs 1 durability in `100 / value` seconds
    Repair,
    /// `+[value] [string1]`, unsigned range
    Bonus,
    /// `+[value] to [class] Skill Levels`
    ClassSkills,
    /// `+[value] to [skilltab] Skill Levels ([class] Only)`
    SkillTab,
    /// `[chance]% to cast [slvl] [skill] on [event]`
    ChanceToCast,
    /// `Level [slvl] [skill] Aura When Equipped`
    Aura,
    /// `[value] [string1] (Increases near [time])`
    TimeOfDay,
    /// `[value * -1]% [string1]`
    Negative,
    /// `[value]% [string1] [monster]`
    Reanimate,
    /// Charged skill
    Charges,
    /// `+[value] to [skill] ([class] Only)`
    ClassSkill,
    /// `+[value] to [skill]`
    Skill,
    /// Never displayed
    Hidden,
}

impl DescFunc {
    pub fn from_code(code: i32) -> Option<Self> {
        use DescFunc::*;
        Some(match code {
            1 => Signed,
            2 => Percent,
            3 => Plain,
            4 => SignedPercent,
            5 => ScaledPercent,
            6 => PerLevel,
            7 => PerLevelPercent,
            8 => PerLevelSignedPercent,
            9 => PerLevelPlain,
            11 => Repair,
            12 => Bonus,
            13 => ClassSkills,
            14 => SkillTab,
            15 => ChanceToCast,
            16 => Aura,
            17 => TimeOfDay,
            20 => Negative,
            23 => Reanimate,
            24 => Charges,
            27 => ClassSkill,
            28 => Skill,
            29 => Hidden,
            _ => return None,
        })
    }
}

/// How value and description text are joined (`descval`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueMode {
    /// Description only
    Hidden,
    /// `value description secondary`
    ValueFirst,
    /// `description value secondary`
    ValueLast,
}

impl ValueMode {
    pub fn from_code(stat: &StatDescriptor, code: Option<i32>) -> Result<Self, RenderError> {
        match code {
            None | Some(0) => Ok(ValueMode::Hidden),
            Some(1) => Ok(ValueMode::ValueFirst),
            Some(2) => Ok(ValueMode::ValueLast),
            Some(mode) => Err(RenderError::UnknownValueMode {
                stat: stat.stat.clone(),
                mode,
            }),
        }
    }
}

/// Numeric transform for stats whose shown value is derived (`op`)
///
/// All three divide the parameter by `2^op_param`. They differ only in what
/// the game applies the result to (player, item, item percentage), which
/// does not change the displayed number. The result is a display-time
/// approximation; the game only refreshes the real value on level-up,
/// re-equip or save.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    PlayerStat,
    ItemStat,
    ItemPercent,
}

impl Operator {
    pub fn from_code(stat: &StatDescriptor) -> Result<Self, RenderError> {
        match stat.op {
            Some(2) => Ok(Operator::PlayerStat),
            Some(4) => Ok(Operator::ItemStat),
            Some(5) => Ok(Operator::ItemPercent),
            op => Err(RenderError::UnknownOperator {
                stat: stat.stat.clone(),
                op,
            }),
        }
    }

    pub fn apply(self, param: i32, op_param: i32) -> f64 {
        match self {
            Operator::PlayerStat | Operator::ItemStat | Operator::ItemPercent => {
                f64::from(param) / 2f64.powi(op_param)
            }
        }
    }
}

/// Integer division rounding toward negative infinity
fn floor_div(a: i32, b: i32) -> i32 {
    let q = a / b;
    if a % b != 0 && (a < 0) != (b < 0) {
        q - 1
    } else {
        q
    }
}

/// Evaluate a stat's operator against a parameter
pub fn execop(stat: &StatDescriptor, param: i32) -> Result<f64, RenderError> {
    Ok(Operator::from_code(stat)?.apply(param, stat.op_param.unwrap_or(0)))
}

// ============================================================================
// Arguments
// ============================================================================

/// Numeric inputs of a stat description
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatArgs {
    pub min: Option<i32>,
    pub max: Option<i32>,
    pub param: Option<i32>,
    /// Per-function override value (`val` of the property stat function)
    pub func_val: Option<i32>,
}

impl StatArgs {
    pub fn range(min: Option<i32>, max: Option<i32>) -> Self {
        StatArgs {
            min,
            max,
            ..Default::default()
        }
    }

    pub fn with_param(mut self, param: i32) -> Self {
        self.param = Some(param);
        self
    }

    pub fn with_func_val(mut self, func_val: Option<i32>) -> Self {
        self.func_val = func_val;
        self
    }
}

/// Accessors that turn an absent argument into an error naming the stat
struct Inputs<'a> {
    stat: &'a StatDescriptor,
    args: StatArgs,
}

impl Inputs<'_> {
    fn missing(&self, what: &'static str) -> RenderError {
        RenderError::MissingArgument {
            stat: self.stat.stat.clone(),
            what,
        }
    }

    fn min(&self) -> Result<i32, RenderError> {
        self.args.min.ok_or_else(|| self.missing("min"))
    }

    fn param(&self) -> Result<i32, RenderError> {
        self.args.param.ok_or_else(|| self.missing("param"))
    }

    fn range(&self, style: RangeStyle) -> Result<String, RenderError> {
        Ok(minmax(self.min()?, self.args.max, style))
    }
}

// ============================================================================
// Rendering
// ============================================================================

/// Template output before value-mode joining
#[derive(Debug, Default)]
struct Parts {
    value: String,
    desc: String,
    secondary: String,
    /// Template-forced mode, overriding `descval`
    mode: Option<ValueMode>,
}

impl Parts {
    fn new(value: String, desc: String) -> Self {
        Parts {
            value,
            desc,
            ..Default::default()
        }
    }

    fn description(desc: String) -> Self {
        Parts {
            desc,
            ..Default::default()
        }
    }

    fn secondary(mut self, secondary: String) -> Self {
        self.secondary = secondary;
        self
    }

    fn forced(mut self, mode: ValueMode) -> Self {
        self.mode = Some(mode);
        self
    }

    fn join(self, stat: &StatDescriptor) -> Result<String, RenderError> {
        let mode = match self.mode {
            Some(mode) => mode,
            None => ValueMode::from_code(stat, stat.desc_val)?,
        };

        Ok(match mode {
            ValueMode::Hidden => self.desc,
            ValueMode::ValueFirst => format!("{} {}{}", self.value, self.desc, self.secondary)
                .trim_end()
                .to_string(),
            ValueMode::ValueLast => format!("{} {}{}", self.desc, self.value, self.secondary)
                .trim_end()
                .to_string(),
        })
    }
}

/// Render one stat into localized text
///
/// `Ok(None)` means the stat is intentionally not shown: it has no template
/// or uses the hidden template.
pub fn describe(
    tables: &Tables,
    stat: &StatDescriptor,
    args: StatArgs,
) -> Result<Option<String>, RenderError> {
    let Some(code) = stat.desc_func else {
        return Ok(None);
    };
    let func = DescFunc::from_code(code).ok_or_else(|| RenderError::UnknownDescFunc {
        stat: stat.stat.clone(),
        func: code,
    })?;

    let input = Inputs { stat, args };
    let desc = || tables.string(&stat.desc_str_pos);

    let parts = match func {
        DescFunc::Signed => Parts::new(input.range(RangeStyle::SIGNED)?, desc()),

        DescFunc::Percent => Parts::new(format!("{}%", input.range(RangeStyle::PLAIN)?), desc()),

        DescFunc::Plain => {
            let value = if args.min.is_none() && args.max.is_none() {
                input.param()?.to_string()
            } else {
                input.range(RangeStyle::SIGNED)?
            };
            Parts::new(value, desc())
        }

        DescFunc::SignedPercent => {
            Parts::new(format!("{}%", input.range(RangeStyle::SIGNED)?), desc())
                .forced(ValueMode::ValueFirst)
        }

        DescFunc::ScaledPercent => {
            // |v * 100 / 128| <= |v|, so the narrowing cast is lossless
            let scale = |v: i32| (i64::from(v) * 100).div_euclid(128) as i32;
            let value = minmax(scale(input.min()?), args.max.map(scale), RangeStyle::PLAIN);
            Parts::new(format!("+{}%", value), desc())
        }

        DescFunc::PerLevel
        | DescFunc::PerLevelPercent
        | DescFunc::PerLevelSignedPercent
        | DescFunc::PerLevelPlain => {
            let derived = number(execop(stat, input.param()?)?);
            let value = match func {
                DescFunc::PerLevel => format!("+{}", derived),
                DescFunc::PerLevelPlain => derived,
                _ => format!("+{}%", derived),
            };
            Parts::new(value, desc()).secondary(tables.string(&stat.desc_str2))
        }

        DescFunc::Repair => {
            let param = input.param()?;
            if param == 0 {
                return Err(RenderError::ZeroDivisor(stat.stat.clone()));
            }
            let seconds = floor_div(100, param);
            let text = if stat.desc_str2.is_empty() {
                substitute(&desc(), &[&seconds])?
            } else {
                substitute(&tables.string(&stat.desc_str2), &[&1, &seconds])?
            };
            Parts::description(text)
        }

        DescFunc::Bonus => Parts::new(format!("+{}", input.range(RangeStyle::PLAIN)?), desc()),

        DescFunc::ClassSkills => {
            let class_id = args.func_val.unwrap_or(0);
            Parts::new(
                format!("+{}", input.range(RangeStyle::PLAIN)?),
                tables.class_skill_name(class_id)?,
            )
            .forced(ValueMode::ValueFirst)
        }

        DescFunc::SkillTab => {
            let tab = input.param()?;
            let tab_name = tables.skill_tab_name(tab)?;
            Parts::description(format!(
                "+{} {}{}",
                input.range(RangeStyle::PLAIN)?,
                tab_name.replace("+%d", "").trim(),
                tables.class_only(tab.div_euclid(3))?
            ))
        }

        DescFunc::ChanceToCast => {
            let skill = args.param.unwrap_or(0);
            let level = args.max.unwrap_or(0);
            Parts::description(substitute(
                &desc(),
                &[&input.min()?, &level, &tables.skill_name(skill)?],
            )?)
        }

        DescFunc::Aura => {
            let template = desc().replace("%d", "%s");
            let range = input.range(RangeStyle::PLAIN)?;
            let text = match args.param {
                None if template.contains("%s") => substitute(&template, &[&range])?,
                None => template,
                Some(skill) => substitute(&template, &[&range, &tables.skill_name(skill)?])?,
            };
            Parts::description(text)
        }

        DescFunc::TimeOfDay => {
            let time = input.param()?;
            let key = usize::try_from(time)
                .ok()
                .and_then(|i| TIME_OF_DAY_KEYS.get(i))
                .ok_or(RenderError::TimeOfDay(time))?;
            Parts::new(input.range(RangeStyle::SIGNED)?, desc()).secondary(tables.string(key))
        }

        DescFunc::Negative => {
            Parts::new(format!("-{}%", input.range(RangeStyle::PLAIN)?), desc())
        }

        DescFunc::Reanimate => {
            // Monster names are not resolved; the id is shown as a placeholder
            let monster = args.param.map(|p| p.to_string()).unwrap_or_default();
            Parts::new(
                format!("{}%", input.range(RangeStyle::PLAIN)?),
                format!("{} monsterId<{}>", desc(), monster),
            )
            .forced(ValueMode::ValueFirst)
        }

        DescFunc::Charges => {
            let skill = input.param()?;
            let count = input.min()?;
            let level = args.max.unwrap_or(0);
            Parts::description(format!(
                "{} {} {} {}",
                tables.string(CHARGES_LEVEL_KEY),
                level,
                tables.skill_name(skill)?,
                substitute(&desc(), &[&count, &count])?
            ))
        }

        DescFunc::ClassSkill => {
            let skill = input.param()?;
            return Ok(Some(format!(
                "+{} {}{}",
                input.range(RangeStyle::PLAIN)?,
                tables.skill_name(skill)?,
                tables.skill_class_only(skill)?
            )));
        }

        DescFunc::Skill => {
            let skill = input.param()?;
            return Ok(Some(format!(
                "+{} {}",
                input.range(RangeStyle::PLAIN)?,
                tables.skill_name(skill)?
            )));
        }

        DescFunc::Hidden => return Ok(None),
    };

    parts.join(stat).map(Some)
}
