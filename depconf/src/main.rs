mod cli;
mod commands;
mod config;
mod observability;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands};
use config::LocatorConfig;

fn main() -> Result<()> {
    observability::init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Locate {
            platform,
            os,
            mode,
            deps_root,
            json,
        } => {
            let cfg = LocatorConfig::from_env().with_cli_override(deps_root);
            commands::locate::cmd_locate(cfg, platform, os, mode, json)?;
        }
        Commands::Check {
            platform,
            os,
            mode,
            deps_root,
            json,
        } => {
            let cfg = LocatorConfig::from_env().with_cli_override(deps_root);
            commands::locate::cmd_check(cfg, platform, os, mode, json)?;
        }
        Commands::Probe => {
            let found = commands::probe::cmd_probe()?;
            if !found {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
