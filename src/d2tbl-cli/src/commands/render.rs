//! Page rendering command
//!
//! Loads every table from the data directory, renders the unique item and
//! rune word pages plus the item index, and writes them as UTF-8 with a BOM.

use anyhow::{Context, Result};
use d2tbl::context::files;
use d2tbl::{Pages, RuneWordTable, UniqueItemTable};
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::Config;

const BOM: &str = "\u{feff}";

/// Handle the render command
pub fn handle(config: &Config, data_dir: Option<PathBuf>, output_dir: Option<PathBuf>) -> Result<()> {
    let data_dir = config.resolve_data_dir(data_dir);
    let output_dir = config.resolve_output_dir(output_dir);

    let tables = super::load_tables(&data_dir)?;
    let uniques_path = data_dir.join(files::UNIQUE_ITEMS);
    let uniques = UniqueItemTable::load(&uniques_path)
        .with_context(|| format!("Failed to load {}", uniques_path.display()))?;
    let runes_path = data_dir.join(files::RUNES);
    let rune_words = RuneWordTable::load(&runes_path)
        .with_context(|| format!("Failed to load {}", runes_path.display()))?;

    let mut pages = Pages::default();
    let result = pages.render(&tables, &uniques, &rune_words);

    // Whatever rendered before a failure is still written out
    let written = write_pages(&output_dir, &pages)?;
    for path in &written {
        println!("Wrote {}", path.display());
    }

    result.context("Failed to render item pages")
}

/// Write every non-empty section of `pages` into `dir`
pub fn write_pages(dir: &Path, pages: &Pages) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory {}", dir.display()))?;

    let mut written = Vec::new();
    for (name, lines) in pages.files() {
        let path = dir.join(name);
        let contents = format!("{}{}", BOM, lines.join("\n"));
        fs::write(&path, contents)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        tracing::debug!(path = %path.display(), lines = lines.len(), "wrote page");
        written.push(path);
    }
    Ok(written)
}
