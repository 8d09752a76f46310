//! Command handlers for d2tbl CLI
//!
//! Each submodule handles a specific command group.

pub mod configure;
pub mod lookup;
pub mod render;

use anyhow::{bail, Context, Result};
use d2tbl::Tables;
use std::path::Path;

/// Load the reference tables from a data directory
pub fn load_tables(data_dir: &Path) -> Result<Tables> {
    if !data_dir.is_dir() {
        bail!("Data directory {} does not exist", data_dir.display());
    }
    Tables::load(data_dir)
        .with_context(|| format!("Failed to load tables from {}", data_dir.display()))
}
