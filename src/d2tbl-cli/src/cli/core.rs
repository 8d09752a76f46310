//! Core CLI definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::lookup::LookupCommand;

#[derive(Parser)]
#[command(name = "d2tbl")]
#[command(about = "Diablo II item description renderer", long_about = None)]
pub struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render unique items, rune words and the item index to Markdown
    #[command(visible_alias = "r")]
    Render {
        /// Directory holding the .txt tables (uses configured default if not provided)
        #[arg(short, long, env = "D2TBL_DATA_DIR")]
        data_dir: Option<PathBuf>,

        /// Directory the pages are written to (uses configured default if not provided)
        #[arg(short, long)]
        output_dir: Option<PathBuf>,
    },

    /// Resolve a single string or property
    #[command(visible_alias = "l")]
    Lookup {
        /// Directory holding the .txt tables (uses configured default if not provided)
        #[arg(short, long, env = "D2TBL_DATA_DIR")]
        data_dir: Option<PathBuf>,

        #[command(subcommand)]
        command: LookupCommand,
    },

    /// Configure default settings
    #[command(visible_alias = "c")]
    Configure {
        /// Set default data directory
        #[arg(long)]
        data_dir: Option<PathBuf>,

        /// Set default output directory
        #[arg(long)]
        output_dir: Option<PathBuf>,

        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;

    #[test]
    fn test_parse_render() {
        let cli = Cli::parse_from(["d2tbl", "render", "--data-dir", "data", "-o", "out"]);
        match cli.command {
            Commands::Render {
                data_dir,
                output_dir,
            } => {
                assert_eq!(data_dir, Some(PathBuf::from("data")));
                assert_eq!(output_dir, Some(PathBuf::from("out")));
            }
            _ => panic!("expected render"),
        }
    }

    #[test]
    fn test_parse_lookup_property() {
        let cli = Cli::parse_from([
            "d2tbl", "-v", "l", "property", "skill", "--param", "skTeleport", "--min", "1",
            "--format", "json",
        ]);
        assert!(cli.verbose);
        match cli.command {
            Commands::Lookup {
                command:
                    LookupCommand::Property {
                        code,
                        param,
                        min,
                        max,
                        format,
                    },
                ..
            } => {
                assert_eq!(code, "skill");
                assert_eq!(param, "skTeleport");
                assert_eq!(min, Some(1));
                assert_eq!(max, None);
                assert!(matches!(format, OutputFormat::Json));
            }
            _ => panic!("expected lookup property"),
        }
    }

    #[test]
    fn test_negative_bounds_parse() {
        let cli = Cli::parse_from(["d2tbl", "lookup", "property", "str", "--min=-5"]);
        match cli.command {
            Commands::Lookup {
                command: LookupCommand::Property { min, .. },
                ..
            } => assert_eq!(min, Some(-5)),
            _ => panic!("expected lookup property"),
        }
    }
}
