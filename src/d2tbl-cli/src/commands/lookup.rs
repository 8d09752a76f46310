//! Single string and property lookups

use anyhow::{Context, Result};
use d2tbl::{render_property, Param, Property, RenderedProperty, Tables};

use crate::cli::OutputFormat;

/// Resolve a string key through the patch, expansion and base layers
pub fn string(tables: &Tables, key: &str) -> Result<String> {
    tables
        .try_string(key)
        .with_context(|| format!("No string with key {:?}", key))
}

/// Resolve an absolute string index
pub fn index(tables: &Tables, index: i32) -> Result<String> {
    Ok(tables.string_by_index(index)?)
}

/// Describe one property; `param` is read the way table columns are
pub fn property(
    tables: &Tables,
    code: &str,
    param: &str,
    min: Option<i32>,
    max: Option<i32>,
) -> Result<RenderedProperty> {
    let prop = Property::new(code, Param::parse(param)?, min, max);
    render_property(tables, &prop).with_context(|| format!("Failed to describe property {}", code))
}

/// Format a described property for printing
pub fn format_property(rendered: &RenderedProperty, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => {
            let mut out = format!("priority: {}", rendered.priority);
            for line in &rendered.lines {
                out.push('\n');
                out.push_str(line);
            }
            Ok(out)
        }
        OutputFormat::Json => {
            serde_json::to_string_pretty(rendered).context("Failed to serialize property")
        }
    }
}
