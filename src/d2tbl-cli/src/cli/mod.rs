//! CLI argument definitions for d2tbl
//!
//! This module contains all clap-derived structs and enums for CLI parsing.

mod core;
mod lookup;

pub use core::{Cli, Commands};
pub use lookup::{LookupCommand, OutputFormat};
