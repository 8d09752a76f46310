mod cli;
mod commands;
mod config;
mod dispatch;

use anyhow::Result;
use clap::Parser;
use config::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cli::*;

fn init_tracing(verbose: bool) {
    let default = if verbose {
        "d2tbl=debug,d2tbl_cli=debug"
    } else {
        "d2tbl=info,d2tbl_cli=info"
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Configure {
            data_dir,
            output_dir,
            show,
        } => {
            commands::configure::handle(data_dir, output_dir, show)?;
        }

        Commands::Render {
            data_dir,
            output_dir,
        } => {
            let config = Config::load()?;
            commands::render::handle(&config, data_dir, output_dir)?;
        }

        Commands::Lookup { data_dir, command } => {
            let config = Config::load()?;
            dispatch::dispatch_lookup(&config, data_dir, command)?;
        }
    }

    Ok(())
}
