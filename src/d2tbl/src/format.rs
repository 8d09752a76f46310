//! Text helpers shared by the property and stat renderers

use std::fmt::Display;

use thiserror::Error;

/// How [`minmax`] decorates a range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeStyle {
    /// Prefix `+` when the lower bound is positive
    pub sign: bool,
    /// Wrap a real range in parentheses
    pub parentheses: bool,
}

impl RangeStyle {
    pub const PLAIN: RangeStyle = RangeStyle {
        sign: false,
        parentheses: true,
    };
    pub const SIGNED: RangeStyle = RangeStyle {
        sign: true,
        parentheses: true,
    };
    pub const BARE: RangeStyle = RangeStyle {
        sign: false,
        parentheses: false,
    };
}

impl Default for RangeStyle {
    fn default() -> Self {
        RangeStyle::PLAIN
    }
}

/// Render a value range
///
/// A missing upper bound or equal bounds collapse to a single value,
/// otherwise the range renders as `(min-max)`.
pub fn minmax(min: i32, max: Option<i32>, style: RangeStyle) -> String {
    let mut value = match max {
        Some(max) if max != min => {
            if style.parentheses {
                format!("({}-{})", min, max)
            } else {
                format!("{}-{}", min, max)
            }
        }
        _ => min.to_string(),
    };

    if style.sign && min > 0 {
        value.insert(0, '+');
    }

    value
}

/// Single-value form of [`minmax`]
pub fn minmax_single(value: i32, style: RangeStyle) -> String {
    minmax(value, None, style)
}

/// Render a derived stat value, dropping a zero fractional part
pub fn number(value: f64) -> String {
    if value.fract() == 0.0 && value.is_finite() {
        format!("{:.0}", value)
    } else {
        value.to_string()
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("not enough arguments for format string {0:?}")]
    MissingArgument(String),

    #[error("not all arguments converted in format string {0:?}")]
    UnusedArgument(String),
}

/// Substitute printf-style placeholders in a localized template
///
/// Supports `%d`, `%i`, `%s`, `%+d` and the `%%` escape, consuming `args` in
/// order. Any other `%` sequence is copied through unchanged. Leftover or
/// missing arguments are errors.
pub fn substitute(template: &str, args: &[&dyn Display]) -> Result<String, FormatError> {
    let mut out = String::with_capacity(template.len());
    let mut args = args.iter();
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }

        let signed = chars.peek().copied() == Some('+');
        if signed {
            chars.next();
        }

        match chars.peek().copied() {
            Some('%') if !signed => {
                chars.next();
                out.push('%');
            }
            Some('d' | 'i' | 's') => {
                chars.next();
                let arg = args
                    .next()
                    .ok_or_else(|| FormatError::MissingArgument(template.to_string()))?;
                let text = arg.to_string();
                if signed && !text.starts_with('-') {
                    out.push('+');
                }
                out.push_str(&text);
            }
            _ => {
                out.push('%');
                if signed {
                    out.push('+');
                }
            }
        }
    }

    if args.next().is_some() {
        return Err(FormatError::UnusedArgument(template.to_string()));
    }

    Ok(out)
}

/// True when a template has a value placeholder
pub fn has_placeholder(template: &str) -> bool {
    template.contains("%d") || template.contains("%s") || template.contains("%+d")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minmax_equal_bounds_collapse() {
        for x in [-5, 0, 1, 42] {
            assert_eq!(
                minmax(x, Some(x), RangeStyle::PLAIN),
                minmax_single(x, RangeStyle::PLAIN)
            );
            assert_eq!(
                minmax(x, Some(x), RangeStyle::SIGNED),
                minmax_single(x, RangeStyle::SIGNED)
            );
        }
    }

    #[test]
    fn test_minmax_range() {
        assert_eq!(minmax(10, Some(20), RangeStyle::PLAIN), "(10-20)");
        assert_eq!(minmax(10, Some(20), RangeStyle::BARE), "10-20");
        assert_eq!(minmax(10, None, RangeStyle::PLAIN), "10");
    }

    #[test]
    fn test_minmax_sign_only_for_positive_lower_bound() {
        assert_eq!(minmax(5, Some(5), RangeStyle::SIGNED), "+5");
        assert_eq!(minmax(5, Some(9), RangeStyle::SIGNED), "+(5-9)");
        assert_eq!(minmax(0, Some(0), RangeStyle::SIGNED), "0");
        assert_eq!(minmax(-3, Some(-3), RangeStyle::SIGNED), "-3");
    }

    #[test]
    fn test_number() {
        assert_eq!(number(10.0), "10");
        assert_eq!(number(0.5), "0.5");
        assert_eq!(number(-2.0), "-2");
    }

    #[test]
    fn test_substitute() {
        assert_eq!(
            substitute("Repairs %d durability in %d seconds", &[&1, &5]).unwrap(),
            "Repairs 1 durability in 5 seconds"
        );
        assert_eq!(
            substitute("%d%% Chance to cast level %d %s", &[&10, &3, &"Nova"]).unwrap(),
            "10% Chance to cast level 3 Nova"
        );
        assert_eq!(substitute("%+d to Life", &[&5]).unwrap(), "+5 to Life");
        assert_eq!(substitute("%+d to Life", &[&-5]).unwrap(), "-5 to Life");
        assert_eq!(substitute("100% plain", &[]).unwrap(), "100% plain");
    }

    #[test]
    fn test_substitute_argument_mismatch() {
        assert!(matches!(
            substitute("%d and %d", &[&1]),
            Err(FormatError::MissingArgument(_))
        ));
        assert!(matches!(
            substitute("no placeholders", &[&1]),
            Err(FormatError::UnusedArgument(_))
        ));
    }
}
