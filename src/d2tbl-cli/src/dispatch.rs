//! Command dispatch for grouped subcommands

use anyhow::Result;
use std::path::PathBuf;

use crate::cli::LookupCommand;
use crate::commands;
use crate::config::Config;

pub fn dispatch_lookup(config: &Config, data_dir: Option<PathBuf>, cmd: LookupCommand) -> Result<()> {
    let data_dir = config.resolve_data_dir(data_dir);
    let tables = commands::load_tables(&data_dir)?;

    match cmd {
        LookupCommand::String { key } => {
            println!("{}", commands::lookup::string(&tables, &key)?);
        }
        LookupCommand::Index { index } => {
            println!("{}", commands::lookup::index(&tables, index)?);
        }
        LookupCommand::Property {
            code,
            param,
            min,
            max,
            format,
        } => {
            let rendered = commands::lookup::property(&tables, &code, &param, min, max)?;
            println!("{}", commands::lookup::format_property(&rendered, format)?);
        }
    }
    Ok(())
}
